use contracts::domain::a002_support_project::aggregate::{SupportProject, SupportProjectDto};

use crate::shared::api_utils::{self, ApiError};

pub async fn list() -> Result<Vec<SupportProject>, ApiError> {
    api_utils::get_json("/api/support-project").await
}

pub async fn get_by_id(id: &str) -> Result<SupportProject, ApiError> {
    api_utils::get_json(&format!("/api/support-project/{}", id)).await
}

pub async fn save(dto: &SupportProjectDto) -> Result<serde_json::Value, ApiError> {
    api_utils::post_json("/api/support-project", dto).await
}

pub async fn delete(id: &str) -> Result<(), ApiError> {
    api_utils::delete(&format!("/api/support-project/{}", id)).await
}
