use serde::{Deserialize, Serialize};

/// Filter panel state for the member statistics report. Every field is
/// optional; `to_query_params` drops inactive ones so the backend only sees
/// what the user actually set.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct StatsFilter {
    pub year: Option<i32>,
    pub quarter: Option<i32>,
    pub industry: Option<String>,
    pub stage: Option<String>,
    /// Support project id; restricts rows to companies with an accepted
    /// application to that project
    pub project: Option<String>,
}

impl StatsFilter {
    pub fn to_query_params(&self) -> String {
        let mut params: Vec<String> = Vec::new();
        if let Some(year) = self.year {
            params.push(format!("year={}", year));
        }
        if let Some(quarter) = self.quarter {
            params.push(format!("quarter={}", quarter));
        }
        if let Some(industry) = non_empty(&self.industry) {
            params.push(format!("industry={}", urlencoding::encode(industry)));
        }
        if let Some(stage) = non_empty(&self.stage) {
            params.push(format!("stage={}", urlencoding::encode(stage)));
        }
        if let Some(project) = non_empty(&self.project) {
            params.push(format!("project={}", urlencoding::encode(project)));
        }
        params.join("&")
    }

    pub fn is_empty(&self) -> bool {
        self.to_query_params().is_empty()
    }
}

fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|s| !s.trim().is_empty())
}

/// One aggregated row: a company's figures over the filtered reports.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StatsRow {
    #[serde(rename = "companyId")]
    pub company_id: String,

    #[serde(rename = "companyName")]
    pub company_name: String,

    pub industry: String,
    pub stage: String,

    pub revenue: i64,

    #[serde(rename = "employeeCount")]
    pub employee_count: i64,

    pub investment: i64,
    pub exports: i64,

    #[serde(rename = "reportCount")]
    pub report_count: i64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StatsResponse {
    pub rows: Vec<StatsRow>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_filter_yields_no_params() {
        assert_eq!(StatsFilter::default().to_query_params(), "");
        assert!(StatsFilter::default().is_empty());
    }

    #[test]
    fn test_active_fields_only() {
        let f = StatsFilter {
            year: Some(2025),
            quarter: None,
            industry: Some("바이오".into()),
            stage: Some("".into()),
            project: None,
        };
        let s = f.to_query_params();
        assert!(s.starts_with("year=2025"));
        assert!(s.contains("industry=%EB%B0%94%EC%9D%B4%EC%98%A4"));
        assert!(!s.contains("quarter="));
        assert!(!s.contains("stage="));
    }
}
