use contracts::domain::a005_support_ticket::aggregate::{
    AnswerTicketDto, CreateTicketDto, SupportTicket,
};

use crate::shared::api_utils::{self, ApiError};

pub async fn list(company: Option<&str>) -> Result<Vec<SupportTicket>, ApiError> {
    let path = match company {
        Some(company) => format!("/api/support-ticket?company={}", company),
        None => "/api/support-ticket".to_string(),
    };
    api_utils::get_json(&path).await
}

pub async fn create(dto: &CreateTicketDto) -> Result<(), ApiError> {
    api_utils::post_json_no_content("/api/support-ticket", dto).await
}

pub async fn answer(dto: &AnswerTicketDto) -> Result<(), ApiError> {
    api_utils::post_json_no_content(&format!("/api/support-ticket/{}/answer", dto.id), dto).await
}

pub async fn close(id: &str) -> Result<(), ApiError> {
    api_utils::post_json_no_content(&format!("/api/support-ticket/{}/close", id), &()).await
}

pub async fn delete(id: &str) -> Result<(), ApiError> {
    api_utils::delete(&format!("/api/support-ticket/{}", id)).await
}
