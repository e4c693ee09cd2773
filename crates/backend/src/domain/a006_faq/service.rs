use super::repository;
use contracts::domain::a006_faq::aggregate::{Faq, FaqDto};
use uuid::Uuid;

pub async fn create(dto: FaqDto) -> anyhow::Result<Uuid> {
    let mut aggregate =
        Faq::new_for_insert(dto.category, dto.question, dto.answer, dto.sort_order);
    aggregate.is_published = dto.is_published;

    aggregate
        .validate()
        .map_err(|e| anyhow::anyhow!("Validation failed: {}", e))?;

    aggregate.before_write();

    repository::insert(&aggregate).await
}

pub async fn update(dto: FaqDto) -> anyhow::Result<()> {
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

pub async fn get_by_id(id: Uuid) -> anyhow::Result<Option<Faq>> {
    repository::get_by_id(id).await
}

pub async fn list_published() -> anyhow::Result<Vec<Faq>> {
    repository::list_published().await
}

pub async fn list_all() -> anyhow::Result<Vec<Faq>> {
    repository::list_all().await
}
