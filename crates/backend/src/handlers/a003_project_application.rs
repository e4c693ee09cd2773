use axum::{
    extract::{Path, Query},
    Json,
};
use contracts::domain::a003_project_application::aggregate::{
    ProjectApplication, ReviewApplicationDto, SubmitApplicationDto,
};
use serde::Deserialize;
use serde_json::json;

use crate::domain::a003_project_application;
use crate::system::auth::extractor::CurrentUser;

#[derive(Debug, Deserialize)]
pub struct ListParams {
    pub project: Option<String>,
    pub company: Option<String>,
}

/// GET /api/project-application?project=..&company=..
pub async fn list(
    Query(params): Query<ListParams>,
) -> Result<Json<Vec<ProjectApplication>>, axum::http::StatusCode> {
    let project_ref = match params.project.as_deref() {
        Some(s) if !s.is_empty() => match uuid::Uuid::parse_str(s) {
            Ok(u) => Some(u),
            Err(_) => return Err(axum::http::StatusCode::BAD_REQUEST),
        },
        _ => None,
    };
    let company_ref = match params.company.as_deref() {
        Some(s) if !s.is_empty() => match uuid::Uuid::parse_str(s) {
            Ok(u) => Some(u),
            Err(_) => return Err(axum::http::StatusCode::BAD_REQUEST),
        },
        _ => None,
    };

    match a003_project_application::service::list(project_ref, company_ref).await {
        Ok(v) => Ok(Json(v)),
        Err(e) => {
            tracing::error!("Failed to list applications: {}", e);
            Err(axum::http::StatusCode::INTERNAL_SERVER_ERROR)
        }
    }
}

/// GET /api/project-application/:id
pub async fn get_by_id(
    Path(id): Path<String>,
) -> Result<Json<ProjectApplication>, axum::http::StatusCode> {
    let uuid = match uuid::Uuid::parse_str(&id) {
        Ok(uuid) => uuid,
        Err(_) => return Err(axum::http::StatusCode::BAD_REQUEST),
    };
    match a003_project_application::service::get_by_id(uuid).await {
        Ok(Some(v)) => Ok(Json(v)),
        Ok(None) => Err(axum::http::StatusCode::NOT_FOUND),
        Err(_) => Err(axum::http::StatusCode::INTERNAL_SERVER_ERROR),
    }
}

/// POST /api/project-application
pub async fn submit(
    Json(dto): Json<SubmitApplicationDto>,
) -> Result<Json<serde_json::Value>, axum::http::StatusCode> {
    match a003_project_application::service::submit(dto).await {
        Ok(id) => Ok(Json(json!({"id": id.to_string()}))),
        Err(e) => {
            tracing::warn!("Application rejected: {}", e);
            Err(axum::http::StatusCode::BAD_REQUEST)
        }
    }
}

/// POST /api/project-application/:id/review
pub async fn review(
    CurrentUser(claims): CurrentUser,
    Path(id): Path<String>,
    Json(mut dto): Json<ReviewApplicationDto>,
) -> Result<(), axum::http::StatusCode> {
    dto.id = id.clone();
    let status = dto.status.clone();
    match a003_project_application::service::review(dto).await {
        Ok(()) => {
            crate::system::logs::service::audit(
                "application.review",
                "project_application",
                Some(id),
                Some(claims.username),
                format!("신청 심사: {}", status),
            );
            Ok(())
        }
        Err(e) => {
            tracing::warn!("Review transition rejected: {}", e);
            Err(axum::http::StatusCode::BAD_REQUEST)
        }
    }
}

/// DELETE /api/project-application/:id
pub async fn delete(Path(id): Path<String>) -> Result<(), axum::http::StatusCode> {
    let uuid = match uuid::Uuid::parse_str(&id) {
        Ok(uuid) => uuid,
        Err(_) => return Err(axum::http::StatusCode::BAD_REQUEST),
    };
    match a003_project_application::service::delete(uuid).await {
        Ok(true) => Ok(()),
        Ok(false) => Err(axum::http::StatusCode::NOT_FOUND),
        Err(_) => Err(axum::http::StatusCode::INTERNAL_SERVER_ERROR),
    }
}
