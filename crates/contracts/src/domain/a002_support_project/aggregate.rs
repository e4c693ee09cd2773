use crate::domain::common::{AggregateId, AggregateRoot, BaseAggregate, EntityMetadata};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SupportProjectId(pub Uuid);

impl SupportProjectId {
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

impl AggregateId for SupportProjectId {
    fn as_string(&self) -> String {
        self.0.to_string()
    }

    fn from_string(s: &str) -> Result<Self, String> {
        Uuid::parse_str(s)
            .map(SupportProjectId::new)
            .map_err(|e| format!("Invalid UUID: {}", e))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum ProjectStatus {
    #[default]
    Draft,
    Open,
    Closed,
    Completed,
}

impl ProjectStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            ProjectStatus::Draft => "draft",
            ProjectStatus::Open => "open",
            ProjectStatus::Closed => "closed",
            ProjectStatus::Completed => "completed",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "draft" => Some(ProjectStatus::Draft),
            "open" => Some(ProjectStatus::Open),
            "closed" => Some(ProjectStatus::Closed),
            "completed" => Some(ProjectStatus::Completed),
            _ => None,
        }
    }
}

/// Support project / program (지원사업)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SupportProject {
    #[serde(flatten)]
    pub base: BaseAggregate<SupportProjectId>,

    pub category: String,

    #[serde(rename = "applyFrom")]
    pub apply_from: Option<chrono::NaiveDate>,

    #[serde(rename = "applyTo")]
    pub apply_to: Option<chrono::NaiveDate>,

    /// Total budget in KRW
    pub budget: i64,

    /// Number of companies to select
    pub capacity: i32,

    pub status: ProjectStatus,
}

impl SupportProject {
    pub fn new_for_insert(
        code: String,
        description: String,
        category: String,
        apply_from: Option<chrono::NaiveDate>,
        apply_to: Option<chrono::NaiveDate>,
        budget: i64,
        capacity: i32,
        comment: Option<String>,
    ) -> Self {
        let mut base = BaseAggregate::new(SupportProjectId::new_v4(), code, description);
        base.comment = comment;

        Self {
            base,
            category,
            apply_from,
            apply_to,
            budget,
            capacity,
            status: ProjectStatus::Draft,
        }
    }

    pub fn to_string_id(&self) -> String {
        self.base.id.as_string()
    }

    /// Whether the application window is currently open
    pub fn is_accepting(&self, today: chrono::NaiveDate) -> bool {
        if self.status != ProjectStatus::Open {
            return false;
        }
        let after_start = self.apply_from.map(|d| today >= d).unwrap_or(true);
        let before_end = self.apply_to.map(|d| today <= d).unwrap_or(true);
        after_start && before_end
    }

    pub fn update(&mut self, dto: &SupportProjectDto) {
        self.base.code = dto.code.clone().unwrap_or_default();
        self.base.description = dto.description.clone();
        self.base.comment = dto.comment.clone();
        self.category = dto.category.clone();
        self.apply_from = dto.apply_from;
        self.apply_to = dto.apply_to;
        self.budget = dto.budget;
        self.capacity = dto.capacity;
        if let Some(status) = ProjectStatus::parse(&dto.status) {
            self.status = status;
        }
    }

    pub fn validate(&self) -> Result<(), String> {
        if self.base.description.trim().is_empty() {
            return Err("사업명을 입력해야 합니다".into());
        }
        if self.budget < 0 {
            return Err("예산은 음수가 될 수 없습니다".into());
        }
        if self.capacity < 0 {
            return Err("모집 기업 수는 음수가 될 수 없습니다".into());
        }
        if let (Some(from), Some(to)) = (self.apply_from, self.apply_to) {
            if from > to {
                return Err("모집 시작일이 종료일보다 늦을 수 없습니다".into());
            }
        }
        Ok(())
    }

    pub fn before_write(&mut self) {
        self.base.touch();
    }
}

impl AggregateRoot for SupportProject {
    type Id = SupportProjectId;

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
        "a002"
    }

    fn collection_name() -> &'static str {
        "support_project"
    }

    fn element_name() -> &'static str {
        "지원사업"
    }

    fn list_name() -> &'static str {
        "지원사업 목록"
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct SupportProjectDto {
    pub id: Option<String>,
    pub code: Option<String>,
    pub description: String,
    pub category: String,

    #[serde(rename = "applyFrom")]
    pub apply_from: Option<chrono::NaiveDate>,

    #[serde(rename = "applyTo")]
    pub apply_to: Option<chrono::NaiveDate>,

    pub budget: i64,
    pub capacity: i32,
    pub status: String,
    pub comment: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_accepting_respects_window_and_status() {
        let mut p = SupportProject::new_for_insert(
            "PRJ-001".into(),
            "창업도약패키지".into(),
            "자금".into(),
            chrono::NaiveDate::from_ymd_opt(2025, 3, 1),
            chrono::NaiveDate::from_ymd_opt(2025, 3, 31),
            500_000_000,
            10,
            None,
        );
        let mid = chrono::NaiveDate::from_ymd_opt(2025, 3, 15).unwrap();
        let late = chrono::NaiveDate::from_ymd_opt(2025, 4, 1).unwrap();

        assert!(!p.is_accepting(mid)); // still draft
        p.status = ProjectStatus::Open;
        assert!(p.is_accepting(mid));
        assert!(!p.is_accepting(late));
    }

    #[test]
    fn test_inverted_window_rejected() {
        let p = SupportProject::new_for_insert(
            "PRJ-002".into(),
            "테스트".into(),
            "멘토링".into(),
            chrono::NaiveDate::from_ymd_opt(2025, 5, 1),
            chrono::NaiveDate::from_ymd_opt(2025, 4, 1),
            0,
            0,
            None,
        );
        assert!(p.validate().is_err());
    }
}
