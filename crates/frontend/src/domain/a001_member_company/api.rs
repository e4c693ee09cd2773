use contracts::domain::a001_member_company::aggregate::{MemberCompany, MemberCompanyDto};

use crate::shared::api_utils::{self, ApiError};

pub async fn list() -> Result<Vec<MemberCompany>, ApiError> {
    api_utils::get_json("/api/member-company").await
}

pub async fn get_by_id(id: &str) -> Result<MemberCompany, ApiError> {
    api_utils::get_json(&format!("/api/member-company/{}", id)).await
}

pub async fn save(dto: &MemberCompanyDto) -> Result<serde_json::Value, ApiError> {
    api_utils::post_json("/api/member-company", dto).await
}

pub async fn delete(id: &str) -> Result<(), ApiError> {
    api_utils::delete(&format!("/api/member-company/{}", id)).await
}
