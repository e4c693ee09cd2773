use contracts::projections::p900_member_stats::{StatsFilter, StatsResponse, StatsRow};

use crate::shared::api_utils::{self, ApiError};

pub async fn fetch_stats(filter: &StatsFilter) -> Result<Vec<StatsRow>, ApiError> {
    let params = filter.to_query_params();
    let path = if params.is_empty() {
        "/api/p900/member-stats".to_string()
    } else {
        format!("/api/p900/member-stats?{}", params)
    };
    let response: StatsResponse = api_utils::get_json(&path).await?;
    Ok(response.rows)
}
