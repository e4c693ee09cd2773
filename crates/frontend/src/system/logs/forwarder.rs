//! Forwards notable client-side events to the backend log so they show up
//! in the admin viewer next to server records.

use contracts::system::logs::{CreateLogRequest, LogKind, LogLevel};
use wasm_bindgen_futures::spawn_local;

use super::api;

/// Record a client-side event server-side. Only Warning and above are
/// forwarded; anything below stays in the browser console. Failures are
/// swallowed, a broken log channel must not break the UI.
pub fn forward(level: LogLevel, message: String, module: &str) {
    log::log!(level_to_log(level), "{}", message);

    if !should_forward(level) {
        return;
    }

    let request = CreateLogRequest {
        kind: kind_for(level),
        level,
        layer: "ui".to_string(),
        message,
        module: Some(module.to_string()),
        trace_id: None,
        action: None,
        resource_type: None,
        resource_id: None,
        user_email: None,
        duration_ms: None,
        extra_data: None,
    };

    spawn_local(async move {
        let _ = api::create_log(&request).await;
    });
}

fn should_forward(level: LogLevel) -> bool {
    matches!(
        level,
        LogLevel::Warning | LogLevel::Error | LogLevel::Critical
    )
}

fn kind_for(level: LogLevel) -> LogKind {
    match level {
        LogLevel::Error | LogLevel::Critical => LogKind::Exception,
        _ => LogKind::General,
    }
}

fn level_to_log(level: LogLevel) -> log::Level {
    match level {
        LogLevel::Debug => log::Level::Debug,
        LogLevel::Info => log::Level::Info,
        LogLevel::Warning => log::Level::Warn,
        LogLevel::Error | LogLevel::Critical => log::Level::Error,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_only_warning_and_above_are_forwarded() {
        assert!(!should_forward(LogLevel::Debug));
        assert!(!should_forward(LogLevel::Info));
        assert!(should_forward(LogLevel::Warning));
        assert!(should_forward(LogLevel::Error));
        assert!(should_forward(LogLevel::Critical));
    }

    #[test]
    fn test_errors_land_in_the_exception_stream() {
        assert_eq!(kind_for(LogLevel::Warning), LogKind::General);
        assert_eq!(kind_for(LogLevel::Error), LogKind::Exception);
        assert_eq!(kind_for(LogLevel::Critical), LogKind::Exception);
    }
}
