//! Client-side log pipeline shared by all four log streams.
//!
//! The viewer fetches a working set from the server (first page, up to 100
//! rows) and everything after that is pure and local:
//!
//!   working set -> apply_filters -> apply_search -> paginate -> rows shown
//!
//! `ViewerModel` owns that state and is plain data, so the whole flow is
//! unit-testable without a browser. The Leptos component layer only wires
//! signals and events to the methods here.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use contracts::system::logs::{LogKind, LogLevel, LogQuery, LogRecord, LogSource};

/// Server working set: always the first page, up to 100 rows.
pub const WORKING_SET_PAGE: usize = 1;
pub const WORKING_SET_SIZE: usize = 100;

const EXTRA_DATA_MAX_CHARS: usize = 500;

/// Structured filters a viewer can apply. Text fields treat blank as
/// inactive; `None` enum fields are inactive.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FilterState {
    pub level: Option<LogLevel>,
    pub layer: String,
    pub source: Option<LogSource>,
    pub action: String,
    pub resource_type: String,
    pub min_duration_ms: Option<i64>,
}

impl FilterState {
    pub fn is_empty(&self) -> bool {
        self.level.is_none()
            && self.layer.trim().is_empty()
            && self.source.is_none()
            && self.action.trim().is_empty()
            && self.resource_type.trim().is_empty()
            && self.min_duration_ms.is_none()
    }

    /// Server-side query for the working-set fetch. Paging is fixed; the
    /// structured filters ride along so the server narrows the set too.
    pub fn to_query(&self) -> LogQuery {
        LogQuery {
            page: WORKING_SET_PAGE,
            page_size: WORKING_SET_SIZE,
            level: self.level,
            layer: active(&self.layer),
            source: self.source,
            action: active(&self.action),
            resource_type: active(&self.resource_type),
            min_duration_ms: self.min_duration_ms,
        }
    }
}

fn active(s: &str) -> Option<String> {
    let trimmed = s.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

/// AND of the active predicates; an empty filter passes everything through.
pub fn apply_filters(records: &[LogRecord], filter: &FilterState) -> Vec<LogRecord> {
    records
        .iter()
        .filter(|r| matches_filter(r, filter))
        .cloned()
        .collect()
}

fn matches_filter(record: &LogRecord, filter: &FilterState) -> bool {
    if let Some(level) = filter.level {
        if record.level != level {
            return false;
        }
    }
    if let Some(layer) = active(&filter.layer) {
        if record.layer != layer {
            return false;
        }
    }
    if let Some(source) = filter.source {
        if record.source != source {
            return false;
        }
    }
    if let Some(action) = active(&filter.action) {
        if record.action.as_deref() != Some(action.as_str()) {
            return false;
        }
    }
    if let Some(rt) = active(&filter.resource_type) {
        if record.resource_type.as_deref() != Some(rt.as_str()) {
            return false;
        }
    }
    if let Some(min) = filter.min_duration_ms {
        match record.duration_ms {
            Some(ms) if ms >= min => {}
            _ => return false,
        }
    }
    true
}

/// Fields a stream's keyword search looks at.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchField {
    Message,
    Module,
    TraceId,
    UserEmail,
    ResourceType,
}

impl SearchField {
    fn extract<'a>(&self, record: &'a LogRecord) -> Option<&'a str> {
        match self {
            SearchField::Message => Some(record.message.as_str()),
            SearchField::Module => record.module.as_deref(),
            SearchField::TraceId => record.trace_id.as_deref(),
            SearchField::UserEmail => record.user_email.as_deref(),
            SearchField::ResourceType => record.resource_type.as_deref(),
        }
    }
}

/// Case-insensitive substring match, OR across the given fields.
/// An empty keyword is the identity.
pub fn apply_search(records: &[LogRecord], keyword: &str, fields: &[SearchField]) -> Vec<LogRecord> {
    let keyword = keyword.trim().to_lowercase();
    if keyword.is_empty() {
        return records.to_vec();
    }

    records
        .iter()
        .filter(|r| {
            fields.iter().any(|f| {
                f.extract(r)
                    .map(|v| v.to_lowercase().contains(&keyword))
                    .unwrap_or(false)
            })
        })
        .cloned()
        .collect()
}

/// Slice `[(page-1)*size, page*size)` of the records. Pages are 1-based;
/// an out-of-range page yields an empty slice, never a panic.
pub fn paginate(records: &[LogRecord], page: usize, page_size: usize) -> Vec<LogRecord> {
    if page == 0 || page_size == 0 {
        return Vec::new();
    }
    let start = (page - 1) * page_size;
    if start >= records.len() {
        return Vec::new();
    }
    let end = (start + page_size).min(records.len());
    records[start..end].to_vec()
}

/// Render `extra_data` for a table cell. The payload is opaque and can be
/// arbitrarily large, so the rendering is bounded.
pub fn format_extra_data(extra_data: &Option<serde_json::Value>) -> String {
    let Some(value) = extra_data else {
        return String::new();
    };
    let text = value.to_string();
    if text.chars().count() <= EXTRA_DATA_MAX_CHARS {
        return text;
    }
    let truncated: String = text.chars().take(EXTRA_DATA_MAX_CHARS).collect();
    format!("{}…", truncated)
}

/// Monotonic fetch token. A response is only applied when its token is
/// still the latest one issued, so a slow earlier request can never
/// overwrite the result of a later one.
#[derive(Clone, Debug, Default)]
pub struct FetchTicket {
    latest: Arc<AtomicU64>,
}

impl FetchTicket {
    pub fn issue(&self) -> u64 {
        self.latest.fetch_add(1, Ordering::SeqCst) + 1
    }

    pub fn is_current(&self, token: u64) -> bool {
        self.latest.load(Ordering::SeqCst) == token
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum ViewerPhase {
    Idle,
    Loading,
    Ready,
    /// Previous working set stays visible; the error is shown inline and
    /// dismissible. Leaving this phase requires an explicit trigger.
    Error(String),
}

/// The whole client-side state of one log stream viewer.
#[derive(Clone)]
pub struct ViewerModel {
    pub kind: LogKind,
    pub phase: ViewerPhase,
    pub working_set: Vec<LogRecord>,
    pub filter: FilterState,
    pub keyword: String,
    pub page: usize,
    pub page_size: usize,
    search_fields: &'static [SearchField],
    ticket: FetchTicket,
}

impl ViewerModel {
    pub fn new(kind: LogKind, search_fields: &'static [SearchField]) -> Self {
        Self {
            kind,
            phase: ViewerPhase::Idle,
            working_set: Vec::new(),
            filter: FilterState::default(),
            keyword: String::new(),
            page: 1,
            page_size: 20,
            search_fields,
            ticket: FetchTicket::default(),
        }
    }

    /// Issue a fetch token and enter Loading. Every server round-trip
    /// (initial load, filter change, retry, post-delete refresh) starts here.
    pub fn start_fetch(&mut self) -> u64 {
        self.phase = ViewerPhase::Loading;
        self.ticket.issue()
    }

    /// Filter change: reset to page 1 and trigger exactly one fetch.
    pub fn set_filter(&mut self, filter: FilterState) -> u64 {
        self.filter = filter;
        self.page = 1;
        self.start_fetch()
    }

    /// Keyword change: local only. Resets the page, triggers no fetch.
    pub fn set_keyword(&mut self, keyword: String) {
        self.keyword = keyword;
        self.page = 1;
    }

    pub fn set_page(&mut self, page: usize) {
        self.page = page;
    }

    pub fn set_page_size(&mut self, page_size: usize) {
        self.page_size = page_size;
        self.page = 1;
    }

    /// Apply a finished fetch. Returns false when the token is stale and
    /// the response was discarded (last filter wins).
    pub fn complete_fetch(
        &mut self,
        token: u64,
        result: Result<Vec<LogRecord>, String>,
    ) -> bool {
        if !self.ticket.is_current(token) {
            return false;
        }
        match result {
            Ok(items) => {
                self.working_set = items;
                self.phase = ViewerPhase::Ready;
            }
            Err(message) => {
                // keep showing the previous working set
                self.phase = ViewerPhase::Error(message);
            }
        }
        true
    }

    pub fn dismiss_error(&mut self) {
        if matches!(self.phase, ViewerPhase::Error(_)) {
            self.phase = ViewerPhase::Ready;
        }
    }

    pub fn query(&self) -> LogQuery {
        self.filter.to_query()
    }

    /// Working set after filters and search, before pagination.
    pub fn filtered(&self) -> Vec<LogRecord> {
        let filtered = apply_filters(&self.working_set, &self.filter);
        apply_search(&filtered, &self.keyword, self.search_fields)
    }

    pub fn total_count(&self) -> usize {
        self.filtered().len()
    }

    pub fn total_pages(&self) -> usize {
        let count = self.total_count();
        if count == 0 || self.page_size == 0 {
            0
        } else {
            count.div_ceil(self.page_size)
        }
    }

    /// The rows the current page shows.
    pub fn visible(&self) -> Vec<LogRecord> {
        paginate(&self.filtered(), self.page, self.page_size)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    const ALL_FIELDS: &[SearchField] = &[
        SearchField::Message,
        SearchField::Module,
        SearchField::TraceId,
        SearchField::UserEmail,
        SearchField::ResourceType,
    ];

    fn record(id: i64, level: LogLevel, message: &str) -> LogRecord {
        LogRecord {
            id,
            created_at: Utc::now(),
            kind: LogKind::General,
            level,
            source: LogSource::Backend,
            layer: "handler".into(),
            message: message.into(),
            module: Some("portal::api".into()),
            trace_id: None,
            action: None,
            resource_type: None,
            resource_id: None,
            user_email: None,
            duration_ms: None,
            extra_data: None,
        }
    }

    fn records(n: i64) -> Vec<LogRecord> {
        (1..=n)
            .map(|i| record(i, LogLevel::Info, &format!("message {}", i)))
            .collect()
    }

    #[test]
    fn test_empty_filter_is_identity() {
        let set = records(10);
        assert_eq!(apply_filters(&set, &FilterState::default()), set);
    }

    #[test]
    fn test_filter_result_is_subset_and_idempotent() {
        let mut set = records(10);
        set.push(record(11, LogLevel::Error, "boom"));
        set.push(record(12, LogLevel::Error, "boom again"));

        let filter = FilterState {
            level: Some(LogLevel::Error),
            ..Default::default()
        };
        let once = apply_filters(&set, &filter);
        assert!(once.iter().all(|r| set.contains(r)));
        assert_eq!(apply_filters(&once, &filter), once);
    }

    #[test]
    fn test_error_filter_counts_only_errors() {
        let mut set = records(7);
        set.push(record(8, LogLevel::Error, "db timeout"));
        set.push(record(9, LogLevel::Error, "disk full"));
        set.push(record(10, LogLevel::Warning, "slow query"));

        let filter = FilterState {
            level: Some(LogLevel::Error),
            ..Default::default()
        };
        assert_eq!(apply_filters(&set, &filter).len(), 2);
    }

    #[test]
    fn test_min_duration_filter_excludes_missing_duration() {
        let mut fast = record(1, LogLevel::Info, "fast");
        fast.duration_ms = Some(10);
        let mut slow = record(2, LogLevel::Info, "slow");
        slow.duration_ms = Some(900);
        let none = record(3, LogLevel::Info, "no duration");

        let filter = FilterState {
            min_duration_ms: Some(500),
            ..Default::default()
        };
        let out = apply_filters(&[fast, slow.clone(), none], &filter);
        assert_eq!(out, vec![slow]);
    }

    #[test]
    fn test_empty_search_is_identity() {
        let set = records(5);
        assert_eq!(apply_search(&set, "", ALL_FIELDS), set);
        assert_eq!(apply_search(&set, "   ", ALL_FIELDS), set);
    }

    #[test]
    fn test_search_is_case_insensitive_across_fields() {
        let mut set = records(3);
        set.push(record(4, LogLevel::Error, "Connection TIMEOUT after 30s"));
        let mut by_module = record(5, LogLevel::Info, "ok");
        by_module.module = Some("portal::timeout_watchdog".into());
        set.push(by_module);

        let hits = apply_search(&set, "timeout", ALL_FIELDS);
        assert_eq!(hits.len(), 2);
        assert_eq!(hits[0].id, 4);
        assert_eq!(hits[1].id, 5);
    }

    #[test]
    fn test_search_respects_field_list() {
        let mut set = records(1);
        set[0].module = Some("timeout".into());

        assert!(apply_search(&set, "timeout", &[SearchField::Message]).is_empty());
        assert_eq!(apply_search(&set, "timeout", &[SearchField::Module]).len(), 1);
    }

    #[test]
    fn test_pagination_partitions_the_input() {
        let set = records(25);
        let page1 = paginate(&set, 1, 20);
        let page2 = paginate(&set, 2, 20);
        assert_eq!(page1.len(), 20);
        assert_eq!(page2.len(), 5);

        let mut reconstructed = page1;
        reconstructed.extend(page2);
        assert_eq!(reconstructed, set);
    }

    #[test]
    fn test_out_of_range_page_is_empty() {
        let set = records(25);
        assert!(paginate(&set, 3, 20).is_empty());
        assert!(paginate(&set, 99, 20).is_empty());
        assert!(paginate(&set, 0, 20).is_empty());
    }

    #[test]
    fn test_twenty_five_records_make_two_pages() {
        let mut model = ViewerModel::new(LogKind::General, ALL_FIELDS);
        let token = model.start_fetch();
        assert!(model.complete_fetch(token, Ok(records(25))));

        assert_eq!(model.page_size, 20);
        assert_eq!(model.total_count(), 25);
        assert_eq!(model.total_pages(), 2);
        assert_eq!(model.visible().len(), 20);

        model.set_page(2);
        assert_eq!(model.visible().len(), 5);
    }

    #[test]
    fn test_page_resets_on_filter_search_and_size_change() {
        let mut model = ViewerModel::new(LogKind::General, ALL_FIELDS);
        let token = model.start_fetch();
        model.complete_fetch(token, Ok(records(50)));

        model.set_page(3);
        model.set_keyword("message".into());
        assert_eq!(model.page, 1);

        model.set_page(3);
        model.set_filter(FilterState::default());
        assert_eq!(model.page, 1);

        model.set_page(2);
        model.set_page_size(10);
        assert_eq!(model.page, 1);
    }

    #[test]
    fn test_filter_change_fetches_once_keyword_change_never() {
        let mut model = ViewerModel::new(LogKind::General, ALL_FIELDS);
        let first = model.start_fetch();

        let second = model.set_filter(FilterState {
            level: Some(LogLevel::Error),
            ..Default::default()
        });
        assert_eq!(second, first + 1);

        model.set_keyword("timeout".into());
        model.set_keyword("".into());
        model.set_page_size(50);

        // still only the two fetches issued above
        let third = model.start_fetch();
        assert_eq!(third, second + 1);
    }

    #[test]
    fn test_stale_response_is_discarded() {
        let mut model = ViewerModel::new(LogKind::General, ALL_FIELDS);
        let slow = model.start_fetch();
        let fast = model.set_filter(FilterState {
            level: Some(LogLevel::Error),
            ..Default::default()
        });

        // the later request resolves first
        assert!(model.complete_fetch(fast, Ok(records(3))));
        assert_eq!(model.working_set.len(), 3);

        // the earlier one arrives late and must not clobber
        assert!(!model.complete_fetch(slow, Ok(records(99))));
        assert_eq!(model.working_set.len(), 3);
        assert_eq!(model.phase, ViewerPhase::Ready);
    }

    #[test]
    fn test_fetch_error_keeps_previous_working_set() {
        let mut model = ViewerModel::new(LogKind::General, ALL_FIELDS);
        let token = model.start_fetch();
        model.complete_fetch(token, Ok(records(10)));

        let retry = model.start_fetch();
        assert!(model.complete_fetch(retry, Err("서버 오류 (500)".into())));
        assert_eq!(model.working_set.len(), 10);
        assert!(matches!(model.phase, ViewerPhase::Error(_)));

        model.dismiss_error();
        assert_eq!(model.phase, ViewerPhase::Ready);
    }

    // Minimal stand-in for the server: delete mutates the store, fetch
    // returns a snapshot. Mirrors how the viewer drives the API.
    struct StubStore {
        rows: Vec<LogRecord>,
    }

    impl StubStore {
        fn fetch(&self) -> Vec<LogRecord> {
            self.rows.clone()
        }

        fn delete(&mut self, id: i64) {
            self.rows.retain(|r| r.id != id);
        }
    }

    #[test]
    fn test_delete_goes_through_refetch_not_local_splice() {
        let mut store = StubStore { rows: records(5) };
        let mut model = ViewerModel::new(LogKind::General, ALL_FIELDS);

        let token = model.start_fetch();
        model.complete_fetch(token, Ok(store.fetch()));
        assert_eq!(model.total_count(), 5);

        // delete on the server, then refresh; the model itself never splices
        store.delete(3);
        assert_eq!(model.total_count(), 5);

        let token = model.start_fetch();
        model.complete_fetch(token, Ok(store.fetch()));
        assert_eq!(model.total_count(), 4);
        assert!(model.visible().iter().all(|r| r.id != 3));
    }

    #[test]
    fn test_working_set_query_is_fixed_page_one() {
        let model = ViewerModel::new(LogKind::Performance, ALL_FIELDS);
        let params = model.query().to_query_params();
        assert!(params.starts_with("page=1&page_size=100"));
    }

    #[test]
    fn test_extra_data_rendering_is_bounded() {
        assert_eq!(format_extra_data(&None), "");

        let small = serde_json::json!({"k": "v"});
        assert_eq!(format_extra_data(&Some(small)), "{\"k\":\"v\"}");

        let big = serde_json::Value::String("x".repeat(10_000));
        let rendered = format_extra_data(&Some(big));
        assert!(rendered.chars().count() <= 501);
        assert!(rendered.ends_with('…'));
    }
}
