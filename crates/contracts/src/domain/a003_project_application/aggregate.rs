use crate::domain::common::{AggregateId, AggregateRoot, BaseAggregate, EntityMetadata};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ProjectApplicationId(pub Uuid);

impl ProjectApplicationId {
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

impl AggregateId for ProjectApplicationId {
    fn as_string(&self) -> String {
        self.0.to_string()
    }

    fn from_string(s: &str) -> Result<Self, String> {
        Uuid::parse_str(s)
            .map(ProjectApplicationId::new)
            .map_err(|e| format!("Invalid UUID: {}", e))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum ApplicationStatus {
    #[default]
    Submitted,
    Screening,
    Accepted,
    Rejected,
}

impl ApplicationStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            ApplicationStatus::Submitted => "submitted",
            ApplicationStatus::Screening => "screening",
            ApplicationStatus::Accepted => "accepted",
            ApplicationStatus::Rejected => "rejected",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "submitted" => Some(ApplicationStatus::Submitted),
            "screening" => Some(ApplicationStatus::Screening),
            "accepted" => Some(ApplicationStatus::Accepted),
            "rejected" => Some(ApplicationStatus::Rejected),
            _ => None,
        }
    }

    /// Review moves strictly forward: submitted -> screening -> accepted/rejected
    pub fn can_transition_to(&self, next: ApplicationStatus) -> bool {
        matches!(
            (self, next),
            (ApplicationStatus::Submitted, ApplicationStatus::Screening)
                | (ApplicationStatus::Screening, ApplicationStatus::Accepted)
                | (ApplicationStatus::Screening, ApplicationStatus::Rejected)
        )
    }
}

/// A member company's application to a support project
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectApplication {
    #[serde(flatten)]
    pub base: BaseAggregate<ProjectApplicationId>,

    #[serde(rename = "projectRef")]
    pub project_ref: Uuid,

    #[serde(rename = "companyRef")]
    pub company_ref: Uuid,

    pub status: ApplicationStatus,

    #[serde(rename = "submittedAt")]
    pub submitted_at: chrono::DateTime<chrono::Utc>,

    #[serde(rename = "reviewNote")]
    pub review_note: Option<String>,
}

impl ProjectApplication {
    pub fn new_for_insert(project_ref: Uuid, company_ref: Uuid, summary: String) -> Self {
        let code = format!("APP-{}", &Uuid::new_v4().to_string()[..8]);
        Self {
            base: BaseAggregate::new(ProjectApplicationId::new_v4(), code, summary),
            project_ref,
            company_ref,
            status: ApplicationStatus::Submitted,
            submitted_at: chrono::Utc::now(),
            review_note: None,
        }
    }

    pub fn to_string_id(&self) -> String {
        self.base.id.as_string()
    }

    pub fn transition(&mut self, next: ApplicationStatus, note: Option<String>) -> Result<(), String> {
        if !self.status.can_transition_to(next) {
            return Err(format!(
                "상태를 {}에서 {}(으)로 변경할 수 없습니다",
                self.status.as_str(),
                next.as_str()
            ));
        }
        self.status = next;
        if note.is_some() {
            self.review_note = note;
        }
        Ok(())
    }

    pub fn before_write(&mut self) {
        self.base.touch();
    }
}

impl AggregateRoot for ProjectApplication {
    type Id = ProjectApplicationId;

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
        "a003"
    }

    fn collection_name() -> &'static str {
        "project_application"
    }

    fn element_name() -> &'static str {
        "사업 신청"
    }

    fn list_name() -> &'static str {
        "사업 신청 목록"
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct SubmitApplicationDto {
    #[serde(rename = "projectRef")]
    pub project_ref: String,

    #[serde(rename = "companyRef")]
    pub company_ref: String,

    /// One-line summary shown in the admin review list
    pub summary: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReviewApplicationDto {
    pub id: String,
    pub status: String,
    pub note: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_review_transitions() {
        let mut app =
            ProjectApplication::new_for_insert(Uuid::new_v4(), Uuid::new_v4(), "지원서".into());

        assert!(app.transition(ApplicationStatus::Accepted, None).is_err());
        assert!(app.transition(ApplicationStatus::Screening, None).is_ok());
        assert!(app
            .transition(ApplicationStatus::Accepted, Some("우수".into()))
            .is_ok());
        // terminal state
        assert!(app.transition(ApplicationStatus::Rejected, None).is_err());
    }
}
