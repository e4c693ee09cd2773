//! Generic log stream viewer. The four log pages are this one component
//! instantiated with a per-stream `LogKindConfig`.

use contracts::system::logs::{LogKind, LogLevel, LogRecord, LogSource, PurgeField};
use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;

use super::api;
use super::forwarder;
use super::pipeline::{format_extra_data, FilterState, SearchField, ViewerModel, ViewerPhase};
use crate::shared::clipboard::copy_to_clipboard_with_callback;
use crate::shared::components::pagination_controls::PaginationControls;
use crate::shared::date_utils::format_datetime;

const SEARCH_DEBOUNCE_MS: u32 = 300;

/// Which filter inputs a stream's filter bar shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterField {
    Level,
    Layer,
    Source,
    Action,
    ResourceType,
    MinDuration,
}

/// Which columns a stream's table shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Column {
    CreatedAt,
    Level,
    Layer,
    Source,
    Message,
    Module,
    TraceId,
    Action,
    ResourceType,
    ResourceId,
    UserEmail,
    DurationMs,
    ExtraData,
}

impl Column {
    pub fn header(&self) -> &'static str {
        match self {
            Column::CreatedAt => "시각",
            Column::Level => "레벨",
            Column::Layer => "레이어",
            Column::Source => "출처",
            Column::Message => "메시지",
            Column::Module => "모듈",
            Column::TraceId => "트레이스",
            Column::Action => "액션",
            Column::ResourceType => "리소스 유형",
            Column::ResourceId => "리소스 ID",
            Column::UserEmail => "사용자",
            Column::DurationMs => "소요(ms)",
            Column::ExtraData => "추가 데이터",
        }
    }

    pub fn render(&self, record: &LogRecord) -> String {
        match self {
            Column::CreatedAt => format_datetime(&record.created_at.to_rfc3339()),
            Column::Level => record.level.as_str().to_string(),
            Column::Layer => record.layer.clone(),
            Column::Source => record.source.as_str().to_string(),
            Column::Message => record.message.clone(),
            Column::Module => record.module.clone().unwrap_or_default(),
            Column::TraceId => record.trace_id.clone().unwrap_or_default(),
            Column::Action => record.action.clone().unwrap_or_default(),
            Column::ResourceType => record.resource_type.clone().unwrap_or_default(),
            Column::ResourceId => record.resource_id.clone().unwrap_or_default(),
            Column::UserEmail => record.user_email.clone().unwrap_or_default(),
            Column::DurationMs => record
                .duration_ms
                .map(|ms| ms.to_string())
                .unwrap_or_default(),
            Column::ExtraData => format_extra_data(&record.extra_data),
        }
    }
}

/// Static description of one log stream's viewer.
pub struct LogKindConfig {
    pub kind: LogKind,
    pub title: &'static str,
    pub filter_fields: &'static [FilterField],
    pub search_fields: &'static [SearchField],
    pub columns: &'static [Column],
}

fn confirm(message: &str) -> bool {
    web_sys::window()
        .map(|w| w.confirm_with_message(message).unwrap_or(false))
        .unwrap_or(false)
}

#[component]
pub fn LogViewer(config: &'static LogKindConfig) -> impl IntoView {
    let model = RwSignal::new(ViewerModel::new(config.kind, config.search_fields));

    // filter bar state; committed into the model only on explicit change
    let level_sel = RwSignal::new(String::new());
    let layer_input = RwSignal::new(String::new());
    let source_sel = RwSignal::new(String::new());
    let action_input = RwSignal::new(String::new());
    let resource_input = RwSignal::new(String::new());
    let min_duration_input = RwSignal::new(String::new());

    let search_input = RwSignal::new(String::new());
    let debounce_generation = StoredValue::new(0u64);

    let (copied_id, set_copied_id) = signal(Option::<i64>::None);

    let run_fetch = move |token: u64| {
        let query = model.with_untracked(|m| m.query());
        spawn_local(async move {
            let result = api::fetch_logs(config.kind, &query)
                .await
                .map_err(|e| e.to_string());
            if let Err(ref message) = result {
                forwarder::forward(
                    LogLevel::Warning,
                    format!("로그 조회 실패: {}", message),
                    "system::logs::viewer",
                );
            }
            model.update(|m| {
                m.complete_fetch(token, result);
            });
        });
    };

    let refetch = move || {
        let mut token = 0;
        model.update(|m| token = m.start_fetch());
        run_fetch(token);
    };

    // initial load
    refetch();

    let current_filter = move || FilterState {
        level: level_sel.get_untracked().parse().ok(),
        layer: layer_input.get_untracked(),
        source: source_sel.get_untracked().parse().ok(),
        action: action_input.get_untracked(),
        resource_type: resource_input.get_untracked(),
        min_duration_ms: min_duration_input.get_untracked().trim().parse().ok(),
    };

    // one fetch per structured-filter change
    let on_filter_change = move || {
        let filter = current_filter();
        let mut token = 0;
        model.update(|m| token = m.set_filter(filter));
        run_fetch(token);
    };

    // keyword changes stay local; committed after the debounce window
    let on_search_input = move |ev: leptos::ev::Event| {
        let value = event_target_value(&ev);
        search_input.set(value.clone());
        let generation = debounce_generation.with_value(|g| *g) + 1;
        debounce_generation.set_value(generation);
        spawn_local(async move {
            TimeoutFuture::new(SEARCH_DEBOUNCE_MS).await;
            if debounce_generation.with_value(|g| *g) == generation {
                model.update(|m| m.set_keyword(value));
            }
        });
    };

    let on_delete = move |id: i64| {
        if !confirm("이 로그를 삭제하시겠습니까?") {
            return;
        }
        spawn_local(async move {
            match api::delete_log(config.kind, id).await {
                // server first, then re-fetch; the working set is never
                // spliced locally
                Ok(()) => refetch(),
                Err(e) => model.update(|m| m.phase = ViewerPhase::Error(e.to_string())),
            }
        });
    };

    let on_purge = move |message: String| {
        if !confirm("같은 메시지를 가진 로그를 모두 삭제하시겠습니까?") {
            return;
        }
        spawn_local(async move {
            match api::purge_by_field(config.kind, PurgeField::Message, message).await {
                Ok(()) => refetch(),
                Err(e) => model.update(|m| m.phase = ViewerPhase::Error(e.to_string())),
            }
        });
    };

    let on_copy = move |record: LogRecord| {
        let id = record.id;
        let json = serde_json::to_string_pretty(&record).unwrap_or_default();
        copy_to_clipboard_with_callback(&json, move || {
            set_copied_id.set(Some(id));
        });
    };

    let show_level = config.filter_fields.contains(&FilterField::Level);
    let show_layer = config.filter_fields.contains(&FilterField::Layer);
    let show_source = config.filter_fields.contains(&FilterField::Source);
    let show_action = config.filter_fields.contains(&FilterField::Action);
    let show_resource = config.filter_fields.contains(&FilterField::ResourceType);
    let show_duration = config.filter_fields.contains(&FilterField::MinDuration);

    view! {
        <div class="log-viewer">
            <div class="page-header">
                <h2>{config.title}</h2>
                <button class="btn-secondary" on:click=move |_| refetch()>
                    "새로고침"
                </button>
            </div>

            <Show when=move || matches!(model.with(|m| m.phase.clone()), ViewerPhase::Error(_))>
                <div class="error-banner">
                    <span>
                        {move || match model.with(|m| m.phase.clone()) {
                            ViewerPhase::Error(message) => message,
                            _ => String::new(),
                        }}
                    </span>
                    <button class="btn-secondary" on:click=move |_| refetch()>
                        "다시 시도"
                    </button>
                    <button
                        class="btn-link"
                        on:click=move |_| model.update(|m| m.dismiss_error())
                    >
                        "닫기"
                    </button>
                </div>
            </Show>

            <div class="filter-bar">
                <Show when=move || show_level>
                    <select
                        on:change=move |ev| {
                            level_sel.set(event_target_value(&ev));
                            on_filter_change();
                        }
                        prop:value=move || level_sel.get()
                    >
                        <option value="">"레벨: 전체"</option>
                        {LogLevel::all().iter().map(|level| {
                            view! {
                                <option value={level.as_str()}>{level.as_str()}</option>
                            }
                        }).collect_view()}
                    </select>
                </Show>

                <Show when=move || show_layer>
                    <input
                        type="text"
                        placeholder="레이어"
                        prop:value=move || layer_input.get()
                        on:change=move |ev| {
                            layer_input.set(event_target_value(&ev));
                            on_filter_change();
                        }
                    />
                </Show>

                <Show when=move || show_source>
                    <select
                        on:change=move |ev| {
                            source_sel.set(event_target_value(&ev));
                            on_filter_change();
                        }
                        prop:value=move || source_sel.get()
                    >
                        <option value="">"출처: 전체"</option>
                        <option value={LogSource::Backend.as_str()}>"backend"</option>
                        <option value={LogSource::Frontend.as_str()}>"frontend"</option>
                    </select>
                </Show>

                <Show when=move || show_action>
                    <input
                        type="text"
                        placeholder="액션"
                        prop:value=move || action_input.get()
                        on:change=move |ev| {
                            action_input.set(event_target_value(&ev));
                            on_filter_change();
                        }
                    />
                </Show>

                <Show when=move || show_resource>
                    <input
                        type="text"
                        placeholder="리소스 유형"
                        prop:value=move || resource_input.get()
                        on:change=move |ev| {
                            resource_input.set(event_target_value(&ev));
                            on_filter_change();
                        }
                    />
                </Show>

                <Show when=move || show_duration>
                    <input
                        type="number"
                        placeholder="최소 소요(ms)"
                        prop:value=move || min_duration_input.get()
                        on:change=move |ev| {
                            min_duration_input.set(event_target_value(&ev));
                            on_filter_change();
                        }
                    />
                </Show>

                <input
                    type="text"
                    class="search-input"
                    placeholder="검색"
                    prop:value=move || search_input.get()
                    on:input=on_search_input
                />
            </div>

            <Show when=move || model.with(|m| m.phase == ViewerPhase::Loading)>
                <div class="loading-indicator">"불러오는 중..."</div>
            </Show>

            <table class="data-table">
                <thead>
                    <tr>
                        {config.columns.iter().map(|col| {
                            view! { <th>{col.header()}</th> }
                        }).collect_view()}
                        <th>"작업"</th>
                    </tr>
                </thead>
                <tbody>
                    {move || model.with(|m| m.visible()).into_iter().map(|record| {
                        let id = record.id;
                        let message = record.message.clone();
                        let record_for_copy = record.clone();
                        view! {
                            <tr>
                                {config.columns.iter().map(|col| {
                                    view! { <td>{col.render(&record)}</td> }
                                }).collect_view()}
                                <td class="row-actions">
                                    <button
                                        class="btn-link"
                                        title="JSON 복사"
                                        on:click=move |_| on_copy(record_for_copy.clone())
                                    >
                                        {move || if copied_id.get() == Some(id) { "복사됨" } else { "복사" }}
                                    </button>
                                    <button
                                        class="btn-link"
                                        title="같은 메시지 모두 삭제"
                                        on:click=move |_| on_purge(message.clone())
                                    >
                                        "일괄 삭제"
                                    </button>
                                    <button
                                        class="btn-link danger"
                                        on:click=move |_| on_delete(id)
                                    >
                                        "삭제"
                                    </button>
                                </td>
                            </tr>
                        }
                    }).collect_view()}
                </tbody>
            </table>

            <Show when=move || model.with(|m| m.phase == ViewerPhase::Ready && m.total_count() == 0)>
                <div class="empty-state">"조건에 맞는 로그가 없습니다"</div>
            </Show>

            <PaginationControls
                current_page=Signal::derive(move || model.with(|m| m.page))
                total_pages=Signal::derive(move || model.with(|m| m.total_pages()))
                total_count=Signal::derive(move || model.with(|m| m.total_count()))
                page_size=Signal::derive(move || model.with(|m| m.page_size))
                on_page_change=Callback::new(move |page| model.update(|m| m.set_page(page)))
                on_page_size_change=Callback::new(move |size| model.update(|m| m.set_page_size(size)))
            />
        </div>
    }
}
