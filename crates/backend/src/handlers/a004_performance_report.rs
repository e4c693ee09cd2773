use axum::{
    extract::{Path, Query},
    Json,
};
use contracts::domain::a004_performance_report::aggregate::{
    PerformanceReport, PerformanceReportDto,
};
use serde::Deserialize;
use serde_json::json;

use crate::domain::a004_performance_report;

#[derive(Debug, Deserialize)]
pub struct ListParams {
    pub company: Option<String>,
}

/// GET /api/performance-report?company=..
pub async fn list(
    Query(params): Query<ListParams>,
) -> Result<Json<Vec<PerformanceReport>>, axum::http::StatusCode> {
    let company_ref = match params.company.as_deref() {
        Some(s) if !s.is_empty() => match uuid::Uuid::parse_str(s) {
            Ok(u) => Some(u),
            Err(_) => return Err(axum::http::StatusCode::BAD_REQUEST),
        },
        _ => None,
    };

    match a004_performance_report::service::list(company_ref).await {
        Ok(v) => Ok(Json(v)),
        Err(e) => {
            tracing::error!("Failed to list performance reports: {}", e);
            Err(axum::http::StatusCode::INTERNAL_SERVER_ERROR)
        }
    }
}

/// GET /api/performance-report/:id
pub async fn get_by_id(
    Path(id): Path<String>,
) -> Result<Json<PerformanceReport>, axum::http::StatusCode> {
    let uuid = match uuid::Uuid::parse_str(&id) {
        Ok(uuid) => uuid,
        Err(_) => return Err(axum::http::StatusCode::BAD_REQUEST),
    };
    match a004_performance_report::service::get_by_id(uuid).await {
        Ok(Some(v)) => Ok(Json(v)),
        Ok(None) => Err(axum::http::StatusCode::NOT_FOUND),
        Err(_) => Err(axum::http::StatusCode::INTERNAL_SERVER_ERROR),
    }
}

/// POST /api/performance-report
pub async fn upsert(
    Json(dto): Json<PerformanceReportDto>,
) -> Result<Json<serde_json::Value>, axum::http::StatusCode> {
    let result = if dto.id.is_some() {
        a004_performance_report::service::update(dto)
            .await
            .map(|_| uuid::Uuid::nil().to_string())
    } else {
        a004_performance_report::service::create(dto)
            .await
            .map(|id| id.to_string())
    };
    match result {
        Ok(id) => Ok(Json(json!({"id": id}))),
        Err(e) => {
            tracing::warn!("Performance report upsert rejected: {}", e);
            Err(axum::http::StatusCode::BAD_REQUEST)
        }
    }
}

/// DELETE /api/performance-report/:id
pub async fn delete(Path(id): Path<String>) -> Result<(), axum::http::StatusCode> {
    let uuid = match uuid::Uuid::parse_str(&id) {
        Ok(uuid) => uuid,
        Err(_) => return Err(axum::http::StatusCode::BAD_REQUEST),
    };
    match a004_performance_report::service::delete(uuid).await {
        Ok(true) => Ok(()),
        Ok(false) => Err(axum::http::StatusCode::NOT_FOUND),
        Err(_) => Err(axum::http::StatusCode::INTERNAL_SERVER_ERROR),
    }
}
