use contracts::system::logs::{
    CreateLogRequest, LogKind, LogLevel, LogQuery, LogRecord, LogSource, PurgeByFieldRequest,
};

use super::repository;

pub async fn list(kind: LogKind, query: &LogQuery) -> anyhow::Result<Vec<LogRecord>> {
    repository::list(kind, query).await
}

pub async fn create(request: CreateLogRequest, source: LogSource) -> anyhow::Result<i64> {
    if request.message.trim().is_empty() {
        return Err(anyhow::anyhow!("Log message cannot be empty"));
    }
    repository::insert(&request, source).await
}

pub async fn delete_by_id(kind: LogKind, id: i64) -> anyhow::Result<bool> {
    repository::delete_by_id(kind, id).await
}

pub async fn purge(kind: LogKind, request: &PurgeByFieldRequest) -> anyhow::Result<u64> {
    if request.value.trim().is_empty() {
        return Err(anyhow::anyhow!("Purge value cannot be empty"));
    }
    repository::purge_by_field(kind, request.field, &request.value).await
}

/// Record a backend-side event; failures are logged and swallowed so
/// business flows never fail because of audit logging
pub fn log_event(request: CreateLogRequest) {
    tokio::spawn(async move {
        if let Err(e) = create(request, LogSource::Backend).await {
            tracing::error!("Failed to write sys_log record: {}", e);
        }
    });
}

/// Record a mutation in the audit stream
pub fn audit(
    action: &str,
    resource_type: &str,
    resource_id: Option<String>,
    actor: Option<String>,
    message: String,
) {
    log_event(CreateLogRequest {
        kind: LogKind::Audit,
        level: LogLevel::Info,
        layer: "handler".to_string(),
        message,
        module: None,
        trace_id: None,
        action: Some(action.to_string()),
        resource_type: Some(resource_type.to_string()),
        resource_id,
        user_email: actor,
        duration_ms: None,
        extra_data: None,
    });
}
