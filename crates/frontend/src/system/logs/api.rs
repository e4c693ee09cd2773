use contracts::system::logs::{
    CreateLogRequest, LogKind, LogListResponse, LogQuery, LogRecord, PurgeByFieldRequest,
    PurgeField,
};

use crate::shared::api_utils::{self, ApiError};

/// Fetch one stream's working set.
pub async fn fetch_logs(kind: LogKind, query: &LogQuery) -> Result<Vec<LogRecord>, ApiError> {
    let path = format!(
        "/api/system/logs/{}?{}",
        kind.as_str(),
        query.to_query_params()
    );
    let response: LogListResponse = api_utils::get_json(&path).await?;
    Ok(response.items)
}

pub async fn delete_log(kind: LogKind, id: i64) -> Result<(), ApiError> {
    api_utils::delete(&format!("/api/system/logs/{}/{}", kind.as_str(), id)).await
}

/// Delete every record in the stream sharing one field value.
pub async fn purge_by_field(
    kind: LogKind,
    field: PurgeField,
    value: String,
) -> Result<(), ApiError> {
    let request = PurgeByFieldRequest { field, value };
    api_utils::post_json_no_content(
        &format!("/api/system/logs/{}/purge", kind.as_str()),
        &request,
    )
    .await
}

pub async fn create_log(request: &CreateLogRequest) -> Result<(), ApiError> {
    api_utils::post_json_no_content("/api/system/logs", request).await
}
