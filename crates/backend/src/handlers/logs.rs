use std::str::FromStr;

use axum::{
    extract::{Path, Query},
    Json,
};
use contracts::system::logs::{
    CreateLogRequest, LogKind, LogListResponse, LogQuery, LogSource, PurgeByFieldRequest,
};
use serde_json::json;

use crate::system::logs::service;

fn parse_kind(kind: &str) -> Result<LogKind, axum::http::StatusCode> {
    LogKind::from_str(kind).map_err(|_| axum::http::StatusCode::BAD_REQUEST)
}

/// GET /api/system/logs/:kind
pub async fn list(
    Path(kind): Path<String>,
    Query(query): Query<LogQuery>,
) -> Result<Json<LogListResponse>, axum::http::StatusCode> {
    let kind = parse_kind(&kind)?;
    match service::list(kind, &query).await {
        Ok(items) => Ok(Json(LogListResponse { items })),
        Err(e) => {
            tracing::error!("Failed to list logs: {}", e);
            Err(axum::http::StatusCode::INTERNAL_SERVER_ERROR)
        }
    }
}

/// POST /api/system/logs (frontend events land here)
pub async fn create(
    Json(request): Json<CreateLogRequest>,
) -> Result<Json<serde_json::Value>, axum::http::StatusCode> {
    match service::create(request, LogSource::Frontend).await {
        Ok(id) => Ok(Json(json!({"id": id}))),
        Err(_) => Err(axum::http::StatusCode::BAD_REQUEST),
    }
}

/// DELETE /api/system/logs/:kind/:id
pub async fn delete_by_id(
    Path((kind, id)): Path<(String, i64)>,
) -> Result<(), axum::http::StatusCode> {
    let kind = parse_kind(&kind)?;
    match service::delete_by_id(kind, id).await {
        Ok(true) => Ok(()),
        Ok(false) => Err(axum::http::StatusCode::NOT_FOUND),
        Err(_) => Err(axum::http::StatusCode::INTERNAL_SERVER_ERROR),
    }
}

/// POST /api/system/logs/:kind/purge
pub async fn purge_by_field(
    Path(kind): Path<String>,
    Json(request): Json<PurgeByFieldRequest>,
) -> Result<Json<serde_json::Value>, axum::http::StatusCode> {
    let kind = parse_kind(&kind)?;
    match service::purge(kind, &request).await {
        Ok(deleted) => Ok(Json(json!({"deleted": deleted}))),
        Err(e) => {
            tracing::warn!("Purge rejected: {}", e);
            Err(axum::http::StatusCode::BAD_REQUEST)
        }
    }
}
