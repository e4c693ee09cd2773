use super::repository;
use contracts::domain::a002_support_project::aggregate::{SupportProject, SupportProjectDto};
use uuid::Uuid;

pub async fn create(dto: SupportProjectDto) -> anyhow::Result<Uuid> {
    let code = dto
        .code
        .clone()
        .unwrap_or_else(|| format!("PRJ-{}", &Uuid::new_v4().to_string()[..8]));

    let mut aggregate = SupportProject::new_for_insert(
        code,
        dto.description.clone(),
        dto.category.clone(),
        dto.apply_from,
        dto.apply_to,
        dto.budget,
        dto.capacity,
        dto.comment.clone(),
    );
    // A status sent on create is honored (drafts are the default)
    aggregate.update(&SupportProjectDto {
        id: None,
        code: Some(aggregate.base.code.clone()),
        ..dto
    });

    aggregate
        .validate()
        .map_err(|e| anyhow::anyhow!("Validation failed: {}", e))?;

    aggregate.before_write();

    repository::insert(&aggregate).await
}

pub async fn update(dto: SupportProjectDto) -> anyhow::Result<()> {
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

pub async fn get_by_id(id: Uuid) -> anyhow::Result<Option<SupportProject>> {
    repository::get_by_id(id).await
}

pub async fn list_all() -> anyhow::Result<Vec<SupportProject>> {
    repository::list_all().await
}
