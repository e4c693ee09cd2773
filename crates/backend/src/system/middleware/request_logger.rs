use axum::{body::Body, extract::Request, middleware::Next, response::Response};
use contracts::system::logs::{CreateLogRequest, LogKind, LogLevel};

/// Requests at or above this duration land in the performance log stream.
const SLOW_REQUEST_THRESHOLD_MS: i64 = 500;

/// Logs method, path, status and duration of every request
pub async fn log_request(req: Request<Body>, next: Next) -> Response {
    let start = std::time::Instant::now();
    let method = req.method().clone();
    let path = req.uri().path().to_string();

    let response = next.run(req).await;

    let status = response.status().as_u16();
    let elapsed_ms = start.elapsed().as_millis() as i64;
    if status >= 500 {
        tracing::error!("{} {} -> {} ({}ms)", method, path, status, elapsed_ms);
    } else {
        tracing::info!("{} {} -> {} ({}ms)", method, path, status, elapsed_ms);
    }

    if let Some(record) = performance_record(method.as_str(), &path, status, elapsed_ms) {
        crate::system::logs::service::log_event(record);
    }

    response
}

/// Slow requests become performance records; fast ones stay out of sys_log.
fn performance_record(
    method: &str,
    path: &str,
    status: u16,
    elapsed_ms: i64,
) -> Option<CreateLogRequest> {
    if elapsed_ms < SLOW_REQUEST_THRESHOLD_MS {
        return None;
    }
    Some(CreateLogRequest {
        kind: LogKind::Performance,
        level: LogLevel::Warning,
        layer: "handler".to_string(),
        message: format!("{} {} -> {} ({}ms)", method, path, status, elapsed_ms),
        module: None,
        trace_id: None,
        action: Some(format!("{} {}", method, path)),
        resource_type: None,
        resource_id: None,
        user_email: None,
        duration_ms: Some(elapsed_ms),
        extra_data: None,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fast_requests_are_not_recorded() {
        assert!(performance_record("GET", "/api/faq", 200, 0).is_none());
        assert!(performance_record("GET", "/api/faq", 200, SLOW_REQUEST_THRESHOLD_MS - 1).is_none());
    }

    #[test]
    fn test_slow_request_lands_in_performance_stream() {
        let record = performance_record("POST", "/api/p900/member-stats", 200, 1200)
            .expect("slow request must produce a record");
        assert_eq!(record.kind, LogKind::Performance);
        assert_eq!(record.duration_ms, Some(1200));
        assert_eq!(record.action.as_deref(), Some("POST /api/p900/member-stats"));
    }
}
