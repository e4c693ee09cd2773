use contracts::domain::a003_project_application::aggregate::{
    ProjectApplication, ReviewApplicationDto, SubmitApplicationDto,
};

use crate::shared::api_utils::{self, ApiError};

/// List applications, optionally narrowed to one project or one company.
pub async fn list(
    project: Option<&str>,
    company: Option<&str>,
) -> Result<Vec<ProjectApplication>, ApiError> {
    let mut params: Vec<String> = Vec::new();
    if let Some(project) = project {
        params.push(format!("project={}", project));
    }
    if let Some(company) = company {
        params.push(format!("company={}", company));
    }
    let path = if params.is_empty() {
        "/api/project-application".to_string()
    } else {
        format!("/api/project-application?{}", params.join("&"))
    };
    api_utils::get_json(&path).await
}

pub async fn submit(dto: &SubmitApplicationDto) -> Result<serde_json::Value, ApiError> {
    api_utils::post_json("/api/project-application", dto).await
}

pub async fn review(dto: &ReviewApplicationDto) -> Result<(), ApiError> {
    api_utils::post_json_no_content(&format!("/api/project-application/{}/review", dto.id), dto)
        .await
}

pub async fn delete(id: &str) -> Result<(), ApiError> {
    api_utils::delete(&format!("/api/project-application/{}", id)).await
}
