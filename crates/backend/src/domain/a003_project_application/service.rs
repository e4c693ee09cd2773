use super::repository;
use crate::domain::a002_support_project;
use contracts::domain::a003_project_application::aggregate::{
    ApplicationStatus, ProjectApplication, ReviewApplicationDto, SubmitApplicationDto,
};
use uuid::Uuid;

/// Submit an application; the project must be accepting today
pub async fn submit(dto: SubmitApplicationDto) -> anyhow::Result<Uuid> {
    let project_ref = Uuid::parse_str(&dto.project_ref)
        .map_err(|_| anyhow::anyhow!("Invalid project reference"))?;
    let company_ref = Uuid::parse_str(&dto.company_ref)
        .map_err(|_| anyhow::anyhow!("Invalid company reference"))?;

    let project = a002_support_project::repository::get_by_id(project_ref)
        .await?
        .ok_or_else(|| anyhow::anyhow!("지원사업을 찾을 수 없습니다"))?;

    let today = chrono::Utc::now().date_naive();
    if !project.is_accepting(today) {
        return Err(anyhow::anyhow!("모집 기간이 아닙니다"));
    }

    if repository::find_duplicate(project_ref, company_ref).await? {
        return Err(anyhow::anyhow!("이미 신청한 사업입니다"));
    }

    if dto.summary.trim().is_empty() {
        return Err(anyhow::anyhow!("신청 요약을 입력해야 합니다"));
    }

    let mut aggregate = ProjectApplication::new_for_insert(project_ref, company_ref, dto.summary);
    aggregate.before_write();

    repository::insert(&aggregate).await
}

/// Admin review transition; only forward moves are allowed
pub async fn review(dto: ReviewApplicationDto) -> anyhow::Result<()> {
    let id = Uuid::parse_str(&dto.id).map_err(|_| anyhow::anyhow!("Invalid ID"))?;

    let next = ApplicationStatus::parse(&dto.status)
        .ok_or_else(|| anyhow::anyhow!("Unknown status: {}", dto.status))?;

    let mut aggregate = repository::get_by_id(id)
        .await?
        .ok_or_else(|| anyhow::anyhow!("Not found"))?;

    aggregate
        .transition(next, dto.note)
        .map_err(|e| anyhow::anyhow!("{}", e))?;

    aggregate.before_write();

    repository::update(&aggregate).await
}

pub async fn delete(id: Uuid) -> anyhow::Result<bool> {
    repository::soft_delete(id).await
}

pub async fn get_by_id(id: Uuid) -> anyhow::Result<Option<ProjectApplication>> {
    repository::get_by_id(id).await
}

pub async fn list(
    project_ref: Option<Uuid>,
    company_ref: Option<Uuid>,
) -> anyhow::Result<Vec<ProjectApplication>> {
    repository::list(project_ref, company_ref).await
}
