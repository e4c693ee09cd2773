use crate::domain::common::{AggregateId, AggregateRoot, BaseAggregate, EntityMetadata};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PerformanceReportId(pub Uuid);

impl PerformanceReportId {
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

impl AggregateId for PerformanceReportId {
    fn as_string(&self) -> String {
        self.0.to_string()
    }

    fn from_string(s: &str) -> Result<Self, String> {
        Uuid::parse_str(s)
            .map(PerformanceReportId::new)
            .map_err(|e| format!("Invalid UUID: {}", e))
    }
}

/// Quarterly performance report of a member company (성과 보고)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PerformanceReport {
    #[serde(flatten)]
    pub base: BaseAggregate<PerformanceReportId>,

    #[serde(rename = "companyRef")]
    pub company_ref: Uuid,

    pub year: i32,

    /// 1..=4
    pub quarter: i32,

    /// KRW
    pub revenue: i64,

    #[serde(rename = "employeeCount")]
    pub employee_count: i32,

    /// Investment raised during the quarter, KRW
    pub investment: i64,

    /// Export amount, KRW
    pub exports: i64,
}

impl PerformanceReport {
    pub fn new_for_insert(
        company_ref: Uuid,
        year: i32,
        quarter: i32,
        revenue: i64,
        employee_count: i32,
        investment: i64,
        exports: i64,
        comment: Option<String>,
    ) -> Self {
        let code = format!("RPT-{}Q{}", year, quarter);
        let description = format!("{}년 {}분기 성과보고", year, quarter);
        let mut base = BaseAggregate::new(PerformanceReportId::new_v4(), code, description);
        base.comment = comment;

        Self {
            base,
            company_ref,
            year,
            quarter,
            revenue,
            employee_count,
            investment,
            exports,
        }
    }

    pub fn to_string_id(&self) -> String {
        self.base.id.as_string()
    }

    pub fn update(&mut self, dto: &PerformanceReportDto) {
        self.year = dto.year;
        self.quarter = dto.quarter;
        self.revenue = dto.revenue;
        self.employee_count = dto.employee_count;
        self.investment = dto.investment;
        self.exports = dto.exports;
        self.base.comment = dto.comment.clone();
    }

    pub fn validate(&self) -> Result<(), String> {
        if !(1..=4).contains(&self.quarter) {
            return Err("분기는 1에서 4 사이여야 합니다".into());
        }
        if self.year < 2000 || self.year > 2100 {
            return Err("연도가 올바르지 않습니다".into());
        }
        if self.revenue < 0 || self.investment < 0 || self.exports < 0 {
            return Err("금액은 음수가 될 수 없습니다".into());
        }
        if self.employee_count < 0 {
            return Err("고용 인원은 음수가 될 수 없습니다".into());
        }
        Ok(())
    }

    pub fn before_write(&mut self) {
        self.base.touch();
    }
}

impl AggregateRoot for PerformanceReport {
    type Id = PerformanceReportId;

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
        "a004"
    }

    fn collection_name() -> &'static str {
        "performance_report"
    }

    fn element_name() -> &'static str {
        "성과보고"
    }

    fn list_name() -> &'static str {
        "성과보고 목록"
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct PerformanceReportDto {
    pub id: Option<String>,

    #[serde(rename = "companyRef")]
    pub company_ref: String,

    pub year: i32,
    pub quarter: i32,
    pub revenue: i64,

    #[serde(rename = "employeeCount")]
    pub employee_count: i32,

    pub investment: i64,
    pub exports: i64,
    pub comment: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_quarter_range() {
        let mut r = PerformanceReport::new_for_insert(Uuid::new_v4(), 2025, 2, 0, 0, 0, 0, None);
        assert!(r.validate().is_ok());
        r.quarter = 5;
        assert!(r.validate().is_err());
        r.quarter = 0;
        assert!(r.validate().is_err());
    }

    #[test]
    fn test_negative_amounts_rejected() {
        let mut r = PerformanceReport::new_for_insert(Uuid::new_v4(), 2025, 1, 100, 3, 0, 0, None);
        assert!(r.validate().is_ok());
        r.revenue = -1;
        assert!(r.validate().is_err());
    }
}
