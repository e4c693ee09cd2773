//! The four log stream pages. Each one is the generic viewer plus a
//! static per-stream configuration.

use contracts::system::logs::LogKind;
use leptos::prelude::*;

use super::pipeline::SearchField;
use super::viewer::{Column, FilterField, LogKindConfig, LogViewer};

static GENERAL_CONFIG: LogKindConfig = LogKindConfig {
    kind: LogKind::General,
    title: "일반 로그",
    filter_fields: &[FilterField::Level, FilterField::Layer, FilterField::Source],
    search_fields: &[SearchField::Message, SearchField::Module, SearchField::TraceId],
    columns: &[
        Column::CreatedAt,
        Column::Level,
        Column::Source,
        Column::Layer,
        Column::Message,
        Column::Module,
        Column::TraceId,
    ],
};

static EXCEPTION_CONFIG: LogKindConfig = LogKindConfig {
    kind: LogKind::Exception,
    title: "예외 로그",
    filter_fields: &[FilterField::Level, FilterField::Layer, FilterField::Source],
    search_fields: &[SearchField::Message, SearchField::Module, SearchField::TraceId],
    columns: &[
        Column::CreatedAt,
        Column::Level,
        Column::Source,
        Column::Layer,
        Column::Message,
        Column::Module,
        Column::TraceId,
        Column::ExtraData,
    ],
};

static PERFORMANCE_CONFIG: LogKindConfig = LogKindConfig {
    kind: LogKind::Performance,
    title: "성능 로그",
    filter_fields: &[
        FilterField::Layer,
        FilterField::Action,
        FilterField::MinDuration,
    ],
    search_fields: &[SearchField::Message, SearchField::Module],
    columns: &[
        Column::CreatedAt,
        Column::Layer,
        Column::Action,
        Column::Message,
        Column::DurationMs,
        Column::Module,
    ],
};

static AUDIT_CONFIG: LogKindConfig = LogKindConfig {
    kind: LogKind::Audit,
    title: "감사 로그",
    filter_fields: &[FilterField::Action, FilterField::ResourceType],
    search_fields: &[
        SearchField::Message,
        SearchField::UserEmail,
        SearchField::ResourceType,
    ],
    columns: &[
        Column::CreatedAt,
        Column::Action,
        Column::ResourceType,
        Column::ResourceId,
        Column::UserEmail,
        Column::Message,
        Column::ExtraData,
    ],
};

#[component]
pub fn GeneralLogsPage() -> impl IntoView {
    view! { <LogViewer config=&GENERAL_CONFIG /> }
}

#[component]
pub fn ExceptionLogsPage() -> impl IntoView {
    view! { <LogViewer config=&EXCEPTION_CONFIG /> }
}

#[component]
pub fn PerformanceLogsPage() -> impl IntoView {
    view! { <LogViewer config=&PERFORMANCE_CONFIG /> }
}

#[component]
pub fn AuditLogsPage() -> impl IntoView {
    view! { <LogViewer config=&AUDIT_CONFIG /> }
}
