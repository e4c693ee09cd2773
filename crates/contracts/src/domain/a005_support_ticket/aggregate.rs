use crate::domain::common::{AggregateId, AggregateRoot, BaseAggregate, EntityMetadata};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SupportTicketId(pub Uuid);

impl SupportTicketId {
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

impl AggregateId for SupportTicketId {
    fn as_string(&self) -> String {
        self.0.to_string()
    }

    fn from_string(s: &str) -> Result<Self, String> {
        Uuid::parse_str(s)
            .map(SupportTicketId::new)
            .map_err(|e| format!("Invalid UUID: {}", e))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum TicketStatus {
    #[default]
    Open,
    Answered,
    Closed,
}

impl TicketStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            TicketStatus::Open => "open",
            TicketStatus::Answered => "answered",
            TicketStatus::Closed => "closed",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "open" => Some(TicketStatus::Open),
            "answered" => Some(TicketStatus::Answered),
            "closed" => Some(TicketStatus::Closed),
            _ => None,
        }
    }
}

/// Member support ticket (1:1 문의)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SupportTicket {
    #[serde(flatten)]
    pub base: BaseAggregate<SupportTicketId>,

    #[serde(rename = "companyRef")]
    pub company_ref: Option<Uuid>,

    /// Question body; `base.description` is the title
    pub body: String,

    pub status: TicketStatus,

    pub answer: Option<String>,

    #[serde(rename = "answeredAt")]
    pub answered_at: Option<chrono::DateTime<chrono::Utc>>,
}

impl SupportTicket {
    pub fn new_for_insert(title: String, body: String, company_ref: Option<Uuid>) -> Self {
        let code = format!("TKT-{}", &Uuid::new_v4().to_string()[..8]);
        Self {
            base: BaseAggregate::new(SupportTicketId::new_v4(), code, title),
            company_ref,
            body,
            status: TicketStatus::Open,
            answer: None,
            answered_at: None,
        }
    }

    pub fn to_string_id(&self) -> String {
        self.base.id.as_string()
    }

    /// Admin answer; a closed ticket cannot be answered
    pub fn apply_answer(&mut self, text: String) -> Result<(), String> {
        if self.status == TicketStatus::Closed {
            return Err("종료된 문의에는 답변할 수 없습니다".into());
        }
        if text.trim().is_empty() {
            return Err("답변 내용을 입력해야 합니다".into());
        }
        self.answer = Some(text);
        self.status = TicketStatus::Answered;
        self.answered_at = Some(chrono::Utc::now());
        Ok(())
    }

    pub fn close(&mut self) {
        self.status = TicketStatus::Closed;
    }

    pub fn validate(&self) -> Result<(), String> {
        if self.base.description.trim().is_empty() {
            return Err("제목을 입력해야 합니다".into());
        }
        if self.body.trim().is_empty() {
            return Err("내용을 입력해야 합니다".into());
        }
        Ok(())
    }

    pub fn before_write(&mut self) {
        self.base.touch();
    }
}

impl AggregateRoot for SupportTicket {
    type Id = SupportTicketId;

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
        "a005"
    }

    fn collection_name() -> &'static str {
        "support_ticket"
    }

    fn element_name() -> &'static str {
        "문의"
    }

    fn list_name() -> &'static str {
        "문의 목록"
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct CreateTicketDto {
    pub title: String,
    pub body: String,

    #[serde(rename = "companyRef")]
    pub company_ref: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnswerTicketDto {
    pub id: String,
    pub answer: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_answer_sets_status_and_timestamp() {
        let mut t = SupportTicket::new_for_insert("입주 문의".into(), "질문입니다".into(), None);
        assert!(t.apply_answer("답변입니다".into()).is_ok());
        assert_eq!(t.status, TicketStatus::Answered);
        assert!(t.answered_at.is_some());
    }

    #[test]
    fn test_closed_ticket_rejects_answer() {
        let mut t = SupportTicket::new_for_insert("문의".into(), "내용".into(), None);
        t.close();
        assert!(t.apply_answer("늦은 답변".into()).is_err());
    }
}
