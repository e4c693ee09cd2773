use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum LogLevel {
    Debug,
    Info,
    Warning,
    Error,
    Critical,
}

impl LogLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            LogLevel::Debug => "DEBUG",
            LogLevel::Info => "INFO",
            LogLevel::Warning => "WARNING",
            LogLevel::Error => "ERROR",
            LogLevel::Critical => "CRITICAL",
        }
    }

    pub fn all() -> &'static [LogLevel] {
        &[
            LogLevel::Debug,
            LogLevel::Info,
            LogLevel::Warning,
            LogLevel::Error,
            LogLevel::Critical,
        ]
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for LogLevel {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_uppercase().as_str() {
            "DEBUG" => Ok(LogLevel::Debug),
            "INFO" => Ok(LogLevel::Info),
            "WARNING" | "WARN" => Ok(LogLevel::Warning),
            "ERROR" => Ok(LogLevel::Error),
            "CRITICAL" => Ok(LogLevel::Critical),
            other => Err(format!("unknown log level: {}", other)),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogSource {
    Backend,
    Frontend,
}

impl LogSource {
    pub fn as_str(&self) -> &'static str {
        match self {
            LogSource::Backend => "backend",
            LogSource::Frontend => "frontend",
        }
    }
}

impl FromStr for LogSource {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "backend" => Ok(LogSource::Backend),
            "frontend" => Ok(LogSource::Frontend),
            other => Err(format!("unknown log source: {}", other)),
        }
    }
}

/// Which of the four log streams a record belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogKind {
    General,
    Exception,
    Performance,
    Audit,
}

impl LogKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            LogKind::General => "general",
            LogKind::Exception => "exception",
            LogKind::Performance => "performance",
            LogKind::Audit => "audit",
        }
    }

    pub fn all() -> &'static [LogKind] {
        &[
            LogKind::General,
            LogKind::Exception,
            LogKind::Performance,
            LogKind::Audit,
        ]
    }
}

impl FromStr for LogKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "general" => Ok(LogKind::General),
            "exception" => Ok(LogKind::Exception),
            "performance" => Ok(LogKind::Performance),
            "audit" => Ok(LogKind::Audit),
            other => Err(format!("unknown log kind: {}", other)),
        }
    }
}

/// One row of any log stream. Kind-specific fields are optional and absent
/// for kinds that do not carry them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LogRecord {
    pub id: i64,

    #[serde(rename = "createdAt")]
    pub created_at: chrono::DateTime<chrono::Utc>,

    pub kind: LogKind,
    pub level: LogLevel,
    pub source: LogSource,

    /// Application layer (handler, service, repository, ui)
    pub layer: String,

    pub message: String,

    pub module: Option<String>,

    #[serde(rename = "traceId")]
    pub trace_id: Option<String>,

    // audit stream
    pub action: Option<String>,

    #[serde(rename = "resourceType")]
    pub resource_type: Option<String>,

    #[serde(rename = "resourceId")]
    pub resource_id: Option<String>,

    #[serde(rename = "userEmail")]
    pub user_email: Option<String>,

    // performance stream
    #[serde(rename = "durationMs")]
    pub duration_ms: Option<i64>,

    /// Opaque structured payload; rendered as-is, never interpreted
    #[serde(rename = "extraData")]
    pub extra_data: Option<serde_json::Value>,
}

/// Server-side query for a log stream. `to_query_params` omits every
/// inactive filter so the URL only carries what the caller set.
/// Field names stay snake_case so the string round-trips through the
/// backend's query extractor.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LogQuery {
    #[serde(default = "default_page")]
    pub page: usize,

    #[serde(default = "default_page_size")]
    pub page_size: usize,

    pub level: Option<LogLevel>,
    pub layer: Option<String>,
    pub source: Option<LogSource>,
    pub action: Option<String>,
    pub resource_type: Option<String>,
    pub min_duration_ms: Option<i64>,
}

fn default_page() -> usize {
    1
}

fn default_page_size() -> usize {
    100
}

impl Default for LogQuery {
    fn default() -> Self {
        Self {
            page: 1,
            page_size: 100,
            level: None,
            layer: None,
            source: None,
            action: None,
            resource_type: None,
            min_duration_ms: None,
        }
    }
}

impl LogQuery {
    pub fn to_query_params(&self) -> String {
        let mut params = vec![
            format!("page={}", self.page),
            format!("page_size={}", self.page_size),
        ];
        if let Some(level) = self.level {
            params.push(format!("level={}", level.as_str()));
        }
        if let Some(layer) = non_empty(&self.layer) {
            params.push(format!("layer={}", urlencoding::encode(layer)));
        }
        if let Some(source) = self.source {
            params.push(format!("source={}", source.as_str()));
        }
        if let Some(action) = non_empty(&self.action) {
            params.push(format!("action={}", urlencoding::encode(action)));
        }
        if let Some(rt) = non_empty(&self.resource_type) {
            params.push(format!("resource_type={}", urlencoding::encode(rt)));
        }
        if let Some(ms) = self.min_duration_ms {
            params.push(format!("min_duration_ms={}", ms));
        }
        params.join("&")
    }
}

fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|s| !s.trim().is_empty())
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LogListResponse {
    pub items: Vec<LogRecord>,
}

/// Posted by the frontend to record client-side events server-side.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateLogRequest {
    pub kind: LogKind,
    pub level: LogLevel,
    pub layer: String,
    pub message: String,
    pub module: Option<String>,

    #[serde(rename = "traceId")]
    pub trace_id: Option<String>,

    pub action: Option<String>,

    #[serde(rename = "resourceType")]
    pub resource_type: Option<String>,

    #[serde(rename = "resourceId")]
    pub resource_id: Option<String>,

    #[serde(rename = "userEmail")]
    pub user_email: Option<String>,

    #[serde(rename = "durationMs")]
    pub duration_ms: Option<i64>,

    #[serde(rename = "extraData")]
    pub extra_data: Option<serde_json::Value>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PurgeField {
    Message,
    Action,
}

/// Bulk delete of every record in a stream sharing one field value.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PurgeByFieldRequest {
    pub field: PurgeField,
    pub value: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_query_carries_only_paging() {
        let q = LogQuery::default();
        assert_eq!(q.to_query_params(), "page=1&page_size=100");
    }

    #[test]
    fn test_query_params_include_active_filters_only() {
        let q = LogQuery {
            level: Some(LogLevel::Error),
            layer: Some("handler".into()),
            min_duration_ms: Some(500),
            ..Default::default()
        };
        let s = q.to_query_params();
        assert!(s.contains("level=ERROR"));
        assert!(s.contains("layer=handler"));
        assert!(s.contains("min_duration_ms=500"));
        assert!(!s.contains("source="));
        assert!(!s.contains("action="));
    }

    #[test]
    fn test_blank_string_filter_is_omitted() {
        let q = LogQuery {
            action: Some("   ".into()),
            ..Default::default()
        };
        assert!(!q.to_query_params().contains("action="));
    }

    #[test]
    fn test_level_round_trip() {
        for level in LogLevel::all() {
            assert_eq!(level.as_str().parse::<LogLevel>().ok(), Some(*level));
        }
        assert!("nope".parse::<LogLevel>().is_err());
    }

    #[test]
    fn test_kind_parse_is_case_insensitive() {
        assert_eq!("AUDIT".parse::<LogKind>().ok(), Some(LogKind::Audit));
    }
}
