use contracts::domain::a004_performance_report::aggregate::{
    PerformanceReport, PerformanceReportDto,
};

use crate::shared::api_utils::{self, ApiError};

pub async fn list(company: Option<&str>) -> Result<Vec<PerformanceReport>, ApiError> {
    let path = match company {
        Some(company) => format!("/api/performance-report?company={}", company),
        None => "/api/performance-report".to_string(),
    };
    api_utils::get_json(&path).await
}

pub async fn save(dto: &PerformanceReportDto) -> Result<serde_json::Value, ApiError> {
    api_utils::post_json("/api/performance-report", dto).await
}

pub async fn delete(id: &str) -> Result<(), ApiError> {
    api_utils::delete(&format!("/api/performance-report/{}", id)).await
}
