use crate::domain::common::{AggregateId, AggregateRoot, BaseAggregate, EntityMetadata};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FaqId(pub Uuid);

impl FaqId {
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

impl AggregateId for FaqId {
    fn as_string(&self) -> String {
        self.0.to_string()
    }

    fn from_string(s: &str) -> Result<Self, String> {
        Uuid::parse_str(s)
            .map(FaqId::new)
            .map_err(|e| format!("Invalid UUID: {}", e))
    }
}

/// FAQ entry; `base.description` holds the question
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Faq {
    #[serde(flatten)]
    pub base: BaseAggregate<FaqId>,

    pub category: String,
    pub answer: String,

    #[serde(rename = "sortOrder")]
    pub sort_order: i32,

    #[serde(rename = "isPublished")]
    pub is_published: bool,
}

impl Faq {
    pub fn new_for_insert(
        category: String,
        question: String,
        answer: String,
        sort_order: i32,
    ) -> Self {
        let code = format!("FAQ-{}", &Uuid::new_v4().to_string()[..8]);
        Self {
            base: BaseAggregate::new(FaqId::new_v4(), code, question),
            category,
            answer,
            sort_order,
            is_published: false,
        }
    }

    pub fn to_string_id(&self) -> String {
        self.base.id.as_string()
    }

    pub fn update(&mut self, dto: &FaqDto) {
        self.base.description = dto.question.clone();
        self.category = dto.category.clone();
        self.answer = dto.answer.clone();
        self.sort_order = dto.sort_order;
        self.is_published = dto.is_published;
    }

    pub fn validate(&self) -> Result<(), String> {
        if self.base.description.trim().is_empty() {
            return Err("질문을 입력해야 합니다".into());
        }
        if self.answer.trim().is_empty() {
            return Err("답변을 입력해야 합니다".into());
        }
        Ok(())
    }

    pub fn before_write(&mut self) {
        self.base.touch();
    }
}

impl AggregateRoot for Faq {
    type Id = FaqId;

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
        "a006"
    }

    fn collection_name() -> &'static str {
        "faq"
    }

    fn element_name() -> &'static str {
        "FAQ"
    }

    fn list_name() -> &'static str {
        "FAQ 목록"
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct FaqDto {
    pub id: Option<String>,
    pub category: String,
    pub question: String,
    pub answer: String,

    #[serde(rename = "sortOrder")]
    pub sort_order: i32,

    #[serde(rename = "isPublished")]
    pub is_published: bool,
}
