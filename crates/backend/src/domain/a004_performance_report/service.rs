use super::repository;
use contracts::domain::a004_performance_report::aggregate::{
    PerformanceReport, PerformanceReportDto,
};
use uuid::Uuid;

pub async fn create(dto: PerformanceReportDto) -> anyhow::Result<Uuid> {
    let company_ref = Uuid::parse_str(&dto.company_ref)
        .map_err(|_| anyhow::anyhow!("Invalid company reference"))?;

    if repository::find_duplicate(company_ref, dto.year, dto.quarter).await? {
        return Err(anyhow::anyhow!("해당 분기의 보고서가 이미 존재합니다"));
    }

    let mut aggregate = PerformanceReport::new_for_insert(
        company_ref,
        dto.year,
        dto.quarter,
        dto.revenue,
        dto.employee_count,
        dto.investment,
        dto.exports,
        dto.comment,
    );

    aggregate
        .validate()
        .map_err(|e| anyhow::anyhow!("Validation failed: {}", e))?;

    aggregate.before_write();

    repository::insert(&aggregate).await
}

pub async fn update(dto: PerformanceReportDto) -> anyhow::Result<()> {
    let id = dto
        .id
        .as_ref()
        .and_then(|s| Uuid::parse_str(s).ok())
        .ok_or_else(|| anyhow::anyhow!("Invalid ID"))?;

    let mut aggregate = repository::get_by_id(id)
        .await?
        .ok_or_else(|| anyhow::anyhow!("Not found"))?;

    aggregate.update(&dto);

    aggregate
        .validate()
        .map_err(|e| anyhow::anyhow!("Validation failed: {}", e))?;

    aggregate.before_write();

    repository::update(&aggregate).await
}

pub async fn delete(id: Uuid) -> anyhow::Result<bool> {
    repository::soft_delete(id).await
}

pub async fn get_by_id(id: Uuid) -> anyhow::Result<Option<PerformanceReport>> {
    repository::get_by_id(id).await
}

pub async fn list(company_ref: Option<Uuid>) -> anyhow::Result<Vec<PerformanceReport>> {
    repository::list(company_ref).await
}
