use axum::{
    extract::Query,
    http::{header, StatusCode},
    response::IntoResponse,
    Json,
};
use contracts::projections::p900_member_stats::{StatsFilter, StatsResponse};

use crate::projections::p900_member_stats::service;

/// GET /api/p900/member-stats
pub async fn list(Query(filter): Query<StatsFilter>) -> Result<Json<StatsResponse>, StatusCode> {
    match service::list(&filter).await {
        Ok(rows) => Ok(Json(StatsResponse { rows })),
        Err(e) => {
            tracing::error!("Failed to query member stats: {}", e);
            Err(StatusCode::INTERNAL_SERVER_ERROR)
        }
    }
}

/// GET /api/p900/member-stats/export
pub async fn export_csv(Query(filter): Query<StatsFilter>) -> Result<impl IntoResponse, StatusCode> {
    let rows = service::list(&filter)
        .await
        .map_err(|_| StatusCode::INTERNAL_SERVER_ERROR)?;
    let bytes = service::to_csv(&rows).map_err(|_| StatusCode::INTERNAL_SERVER_ERROR)?;

    Ok((
        [
            (header::CONTENT_TYPE, "text/csv; charset=utf-8"),
            (
                header::CONTENT_DISPOSITION,
                "attachment; filename=\"member_stats.csv\"",
            ),
        ],
        bytes,
    ))
}
