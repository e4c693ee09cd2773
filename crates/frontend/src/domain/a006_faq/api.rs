use contracts::domain::a006_faq::aggregate::{Faq, FaqDto};

use crate::shared::api_utils::{self, ApiError};

/// Published entries, ordered by category and sort order.
pub async fn list_published() -> Result<Vec<Faq>, ApiError> {
    api_utils::get_json("/api/faq").await
}

/// Every entry including drafts (admin).
pub async fn list_all() -> Result<Vec<Faq>, ApiError> {
    api_utils::get_json("/api/faq/all").await
}

pub async fn save(dto: &FaqDto) -> Result<serde_json::Value, ApiError> {
    api_utils::post_json("/api/faq", dto).await
}

pub async fn delete(id: &str) -> Result<(), ApiError> {
    api_utils::delete(&format!("/api/faq/{}", id)).await
}
