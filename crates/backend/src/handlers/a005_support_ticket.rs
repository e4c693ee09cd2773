use axum::{
    extract::{Path, Query},
    Json,
};
use contracts::domain::a005_support_ticket::aggregate::{
    AnswerTicketDto, CreateTicketDto, SupportTicket,
};
use serde::Deserialize;
use serde_json::json;

use crate::domain::a005_support_ticket;

#[derive(Debug, Deserialize)]
pub struct ListParams {
    pub company: Option<String>,
}

/// GET /api/support-ticket?company=..
pub async fn list(
    Query(params): Query<ListParams>,
) -> Result<Json<Vec<SupportTicket>>, axum::http::StatusCode> {
    let company_ref = match params.company.as_deref() {
        Some(s) if !s.is_empty() => match uuid::Uuid::parse_str(s) {
            Ok(u) => Some(u),
            Err(_) => return Err(axum::http::StatusCode::BAD_REQUEST),
        },
        _ => None,
    };

    match a005_support_ticket::service::list(company_ref).await {
        Ok(v) => Ok(Json(v)),
        Err(e) => {
            tracing::error!("Failed to list support tickets: {}", e);
            Err(axum::http::StatusCode::INTERNAL_SERVER_ERROR)
        }
    }
}

/// GET /api/support-ticket/:id
pub async fn get_by_id(
    Path(id): Path<String>,
) -> Result<Json<SupportTicket>, axum::http::StatusCode> {
    let uuid = match uuid::Uuid::parse_str(&id) {
        Ok(uuid) => uuid,
        Err(_) => return Err(axum::http::StatusCode::BAD_REQUEST),
    };
    match a005_support_ticket::service::get_by_id(uuid).await {
        Ok(Some(v)) => Ok(Json(v)),
        Ok(None) => Err(axum::http::StatusCode::NOT_FOUND),
        Err(_) => Err(axum::http::StatusCode::INTERNAL_SERVER_ERROR),
    }
}

/// POST /api/support-ticket
pub async fn create(
    Json(dto): Json<CreateTicketDto>,
) -> Result<Json<serde_json::Value>, axum::http::StatusCode> {
    match a005_support_ticket::service::create(dto).await {
        Ok(id) => Ok(Json(json!({"id": id.to_string()}))),
        Err(e) => {
            tracing::warn!("Ticket creation rejected: {}", e);
            Err(axum::http::StatusCode::BAD_REQUEST)
        }
    }
}

/// POST /api/support-ticket/:id/answer
pub async fn answer(
    Path(id): Path<String>,
    Json(mut dto): Json<AnswerTicketDto>,
) -> Result<(), axum::http::StatusCode> {
    dto.id = id;
    match a005_support_ticket::service::answer(dto).await {
        Ok(()) => Ok(()),
        Err(e) => {
            tracing::warn!("Ticket answer rejected: {}", e);
            Err(axum::http::StatusCode::BAD_REQUEST)
        }
    }
}

/// POST /api/support-ticket/:id/close
pub async fn close(Path(id): Path<String>) -> Result<(), axum::http::StatusCode> {
    let uuid = match uuid::Uuid::parse_str(&id) {
        Ok(uuid) => uuid,
        Err(_) => return Err(axum::http::StatusCode::BAD_REQUEST),
    };
    match a005_support_ticket::service::close(uuid).await {
        Ok(()) => Ok(()),
        Err(_) => Err(axum::http::StatusCode::INTERNAL_SERVER_ERROR),
    }
}

/// DELETE /api/support-ticket/:id
pub async fn delete(Path(id): Path<String>) -> Result<(), axum::http::StatusCode> {
    let uuid = match uuid::Uuid::parse_str(&id) {
        Ok(uuid) => uuid,
        Err(_) => return Err(axum::http::StatusCode::BAD_REQUEST),
    };
    match a005_support_ticket::service::delete(uuid).await {
        Ok(true) => Ok(()),
        Ok(false) => Err(axum::http::StatusCode::NOT_FOUND),
        Err(_) => Err(axum::http::StatusCode::INTERNAL_SERVER_ERROR),
    }
}
