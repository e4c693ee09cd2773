use crate::domain::common::{AggregateId, AggregateRoot, BaseAggregate, EntityMetadata};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

// ============================================================================
// ID Type
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MemberCompanyId(pub Uuid);

impl MemberCompanyId {
    pub fn new(value: Uuid) -> Self {
        Self(value)
    }

    pub fn new_v4() -> Self {
        Self(Uuid::new_v4())
    }

    pub fn value(&self) -> Uuid {
        self.0
    }
}

impl AggregateId for MemberCompanyId {
    fn as_string(&self) -> String {
        self.0.to_string()
    }

    fn from_string(s: &str) -> Result<Self, String> {
        Uuid::parse_str(s)
            .map(MemberCompanyId::new)
            .map_err(|e| format!("Invalid UUID: {}", e))
    }
}

// ============================================================================
// Aggregate Root
// ============================================================================

/// Growth stage of a member company
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum GrowthStage {
    #[default]
    Preliminary,
    Early,
    Growth,
    Scaleup,
}

impl GrowthStage {
    pub fn as_str(&self) -> &'static str {
        match self {
            GrowthStage::Preliminary => "preliminary",
            GrowthStage::Early => "early",
            GrowthStage::Growth => "growth",
            GrowthStage::Scaleup => "scaleup",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "preliminary" => Some(GrowthStage::Preliminary),
            "early" => Some(GrowthStage::Early),
            "growth" => Some(GrowthStage::Growth),
            "scaleup" => Some(GrowthStage::Scaleup),
            _ => None,
        }
    }
}

/// Member company profile (입주기업)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MemberCompany {
    #[serde(flatten)]
    pub base: BaseAggregate<MemberCompanyId>,

    #[serde(rename = "registrationNo")]
    pub registration_no: String,

    #[serde(rename = "ceoName")]
    pub ceo_name: String,

    #[serde(rename = "foundedAt")]
    pub founded_at: Option<chrono::NaiveDate>,

    pub industry: String,
    pub stage: GrowthStage,
    pub homepage: Option<String>,
    pub intro: Option<String>,
}

impl MemberCompany {
    pub fn new_for_insert(
        code: String,
        description: String,
        registration_no: String,
        ceo_name: String,
        founded_at: Option<chrono::NaiveDate>,
        industry: String,
        stage: GrowthStage,
        homepage: Option<String>,
        intro: Option<String>,
        comment: Option<String>,
    ) -> Self {
        let mut base = BaseAggregate::new(MemberCompanyId::new_v4(), code, description);
        base.comment = comment;

        Self {
            base,
            registration_no,
            ceo_name,
            founded_at,
            industry,
            stage,
            homepage,
            intro,
        }
    }

    pub fn to_string_id(&self) -> String {
        self.base.id.as_string()
    }

    pub fn update(&mut self, dto: &MemberCompanyDto) {
        self.base.code = dto.code.clone().unwrap_or_default();
        self.base.description = dto.description.clone();
        self.base.comment = dto.comment.clone();
        self.registration_no = dto.registration_no.clone();
        self.ceo_name = dto.ceo_name.clone();
        self.founded_at = dto.founded_at;
        self.industry = dto.industry.clone();
        self.stage = GrowthStage::parse(&dto.stage).unwrap_or_default();
        self.homepage = dto.homepage.clone();
        self.intro = dto.intro.clone();
    }

    pub fn validate(&self) -> Result<(), String> {
        if self.base.description.trim().is_empty() {
            return Err("기업명을 입력해야 합니다".into());
        }
        if self.base.code.trim().is_empty() {
            return Err("코드를 입력해야 합니다".into());
        }
        if self.ceo_name.trim().is_empty() {
            return Err("대표자명을 입력해야 합니다".into());
        }

        // Business registration number: 10 digits when present
        if !self.registration_no.trim().is_empty() {
            let digits: String = self
                .registration_no
                .chars()
                .filter(|c| c.is_ascii_digit())
                .collect();
            if digits.len() != 10 {
                return Err("사업자등록번호는 10자리 숫자여야 합니다".into());
            }
        }

        Ok(())
    }

    pub fn before_write(&mut self) {
        self.base.touch();
    }
}

impl AggregateRoot for MemberCompany {
    type Id = MemberCompanyId;

    fn id(&self) -> Self::Id {
        self.base.id
    }

    fn code(&self) -> &str {
        &self.base.code
    }

    fn description(&self) -> &str {
        &self.base.description
    }

    fn metadata(&self) -> &EntityMetadata {
        &self.base.metadata
    }

    fn metadata_mut(&mut self) -> &mut EntityMetadata {
        &mut self.base.metadata
    }

    fn aggregate_index() -> &'static str {
        "a001"
    }

    fn collection_name() -> &'static str {
        "member_company"
    }

    fn element_name() -> &'static str {
        "입주기업"
    }

    fn list_name() -> &'static str {
        "입주기업 목록"
    }
}

// ============================================================================
// Forms / DTOs
// ============================================================================

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct MemberCompanyDto {
    pub id: Option<String>,
    pub code: Option<String>,
    pub description: String,

    #[serde(rename = "registrationNo")]
    pub registration_no: String,

    #[serde(rename = "ceoName")]
    pub ceo_name: String,

    #[serde(rename = "foundedAt")]
    pub founded_at: Option<chrono::NaiveDate>,

    pub industry: String,
    pub stage: String,
    pub homepage: Option<String>,
    pub intro: Option<String>,
    pub comment: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn company(registration_no: &str) -> MemberCompany {
        MemberCompany::new_for_insert(
            "MEM-001".into(),
            "테스트기업".into(),
            registration_no.into(),
            "김대표".into(),
            None,
            "IT".into(),
            GrowthStage::Early,
            None,
            None,
            None,
        )
    }

    #[test]
    fn test_registration_no_must_be_ten_digits() {
        assert!(company("123-45-67890").validate().is_ok());
        assert!(company("").validate().is_ok());
        assert!(company("123-45-678").validate().is_err());
    }

    #[test]
    fn test_empty_name_rejected() {
        let mut c = company("1234567890");
        c.base.description = "  ".into();
        assert!(c.validate().is_err());
    }
}
