use super::repository;
use contracts::domain::a001_member_company::aggregate::{
    GrowthStage, MemberCompany, MemberCompanyDto,
};
use uuid::Uuid;

pub async fn create(dto: MemberCompanyDto) -> anyhow::Result<Uuid> {
    let code = dto
        .code
        .clone()
        .unwrap_or_else(|| format!("MEM-{}", &Uuid::new_v4().to_string()[..8]));

    // Duplicate registration number guard
    if !dto.registration_no.trim().is_empty()
        && repository::get_by_registration_no(&dto.registration_no)
            .await?
            .is_some()
    {
        return Err(anyhow::anyhow!("이미 등록된 사업자등록번호입니다"));
    }

    let mut aggregate = MemberCompany::new_for_insert(
        code,
        dto.description,
        dto.registration_no,
        dto.ceo_name,
        dto.founded_at,
        dto.industry,
        GrowthStage::parse(&dto.stage).unwrap_or_default(),
        dto.homepage,
        dto.intro,
        dto.comment,
    );

    aggregate
        .validate()
        .map_err(|e| anyhow::anyhow!("Validation failed: {}", e))?;

    aggregate.before_write();

    repository::insert(&aggregate).await
}

pub async fn update(dto: MemberCompanyDto) -> anyhow::Result<()> {
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

pub async fn get_by_id(id: Uuid) -> anyhow::Result<Option<MemberCompany>> {
    repository::get_by_id(id).await
}

pub async fn list_all() -> anyhow::Result<Vec<MemberCompany>> {
    repository::list_all().await
}
