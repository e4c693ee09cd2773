use super::repository;
use contracts::domain::a005_support_ticket::aggregate::{
    AnswerTicketDto, CreateTicketDto, SupportTicket,
};
use uuid::Uuid;

pub async fn create(dto: CreateTicketDto) -> anyhow::Result<Uuid> {
    let company_ref = match dto.company_ref.as_deref() {
        Some(s) if !s.is_empty() => {
            Some(Uuid::parse_str(s).map_err(|_| anyhow::anyhow!("Invalid company reference"))?)
        }
        _ => None,
    };

    let mut aggregate = SupportTicket::new_for_insert(dto.title, dto.body, company_ref);

    aggregate
        .validate()
        .map_err(|e| anyhow::anyhow!("Validation failed: {}", e))?;

    aggregate.before_write();

    repository::insert(&aggregate).await
}

pub async fn answer(dto: AnswerTicketDto) -> anyhow::Result<()> {
    let id = Uuid::parse_str(&dto.id).map_err(|_| anyhow::anyhow!("Invalid ID"))?;

    let mut aggregate = repository::get_by_id(id)
        .await?
        .ok_or_else(|| anyhow::anyhow!("Not found"))?;

    aggregate
        .apply_answer(dto.answer)
        .map_err(|e| anyhow::anyhow!("{}", e))?;

    aggregate.before_write();

    repository::update(&aggregate).await
}

pub async fn close(id: Uuid) -> anyhow::Result<()> {
    let mut aggregate = repository::get_by_id(id)
        .await?
        .ok_or_else(|| anyhow::anyhow!("Not found"))?;

    aggregate.close();
    aggregate.before_write();

    repository::update(&aggregate).await
}

pub async fn delete(id: Uuid) -> anyhow::Result<bool> {
    repository::soft_delete(id).await
}

pub async fn get_by_id(id: Uuid) -> anyhow::Result<Option<SupportTicket>> {
    repository::get_by_id(id).await
}

pub async fn list(company_ref: Option<Uuid>) -> anyhow::Result<Vec<SupportTicket>> {
    repository::list(company_ref).await
}
