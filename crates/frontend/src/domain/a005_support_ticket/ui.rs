use contracts::domain::a005_support_ticket::aggregate::{
    AnswerTicketDto, CreateTicketDto, SupportTicket,
};
use contracts::domain::common::AggregateId;
use leptos::prelude::*;
use leptos::task::spawn_local;

use super::api;
use crate::shared::date_utils::format_datetime;

const STATUS_LABELS: &[(&str, &str)] = &[
    ("open", "접수"),
    ("answered", "답변 완료"),
    ("closed", "종료"),
];

fn status_label(status: &str) -> &'static str {
    STATUS_LABELS
        .iter()
        .find(|(value, _)| *value == status)
        .map(|(_, label)| *label)
        .unwrap_or("-")
}

fn confirm(message: &str) -> bool {
    web_sys::window()
        .map(|w| w.confirm_with_message(message).unwrap_or(false))
        .unwrap_or(false)
}

#[component]
pub fn SupportTicketList(
    #[prop(into)] is_admin: Signal<bool>,
    #[prop(into)] company_ref: Signal<Option<String>>,
) -> impl IntoView {
    let (items, set_items) = signal(Vec::<SupportTicket>::new());
    let (error, set_error) = signal(Option::<String>::None);
    let (show_form, set_show_form) = signal(false);
    let (answering_id, set_answering_id) = signal(Option::<String>::None);

    let title = RwSignal::new(String::new());
    let body = RwSignal::new(String::new());
    let answer_text = RwSignal::new(String::new());

    let fetch = move || {
        let company = company_ref.get_untracked();
        spawn_local(async move {
            let scope = if is_admin.get_untracked() {
                None
            } else {
                company
            };
            match api::list(scope.as_deref()).await {
                Ok(list) => {
                    set_items.set(list);
                    set_error.set(None);
                }
                Err(e) => set_error.set(Some(e.to_string())),
            }
        });
    };
    fetch();

    let on_create = move |_| {
        let dto = CreateTicketDto {
            title: title.get_untracked(),
            body: body.get_untracked(),
            company_ref: company_ref.get_untracked(),
        };
        spawn_local(async move {
            match api::create(&dto).await {
                Ok(()) => {
                    set_show_form.set(false);
                    title.set(String::new());
                    body.set(String::new());
                    fetch();
                }
                Err(e) => set_error.set(Some(e.to_string())),
            }
        });
    };

    let on_answer = move |_| {
        let Some(id) = answering_id.get_untracked() else {
            return;
        };
        let dto = AnswerTicketDto {
            id,
            answer: answer_text.get_untracked(),
        };
        spawn_local(async move {
            match api::answer(&dto).await {
                Ok(()) => {
                    set_answering_id.set(None);
                    answer_text.set(String::new());
                    fetch();
                }
                Err(e) => set_error.set(Some(e.to_string())),
            }
        });
    };

    let on_close = move |id: String| {
        if !confirm("이 문의를 종료하시겠습니까?") {
            return;
        }
        spawn_local(async move {
            match api::close(&id).await {
                Ok(()) => fetch(),
                Err(e) => set_error.set(Some(e.to_string())),
            }
        });
    };

    let on_delete = move |id: String| {
        if !confirm("이 문의를 삭제하시겠습니까?") {
            return;
        }
        spawn_local(async move {
            match api::delete(&id).await {
                Ok(()) => fetch(),
                Err(e) => set_error.set(Some(e.to_string())),
            }
        });
    };

    view! {
        <div class="support-ticket-page">
            <div class="page-header">
                <h2>"1:1 문의"</h2>
                <Show when=move || !is_admin.get()>
                    <button class="btn-primary" on:click=move |_| set_show_form.set(true)>
                        "문의하기"
                    </button>
                </Show>
            </div>

            <Show when=move || error.get().is_some()>
                <div class="error-banner">
                    <span>{move || error.get().unwrap_or_default()}</span>
                    <button class="btn-link" on:click=move |_| set_error.set(None)>"닫기"</button>
                </div>
            </Show>

            <Show when=move || show_form.get()>
                <div class="form-panel">
                    <h3>"문의 작성"</h3>
                    <div class="form-group">
                        <label>"제목"</label>
                        <input type="text" prop:value=move || title.get()
                            on:input=move |ev| title.set(event_target_value(&ev)) />
                    </div>
                    <div class="form-group">
                        <label>"내용"</label>
                        <textarea prop:value=move || body.get()
                            on:input=move |ev| body.set(event_target_value(&ev)) />
                    </div>
                    <div class="form-actions">
                        <button class="btn-primary" on:click=on_create>"등록"</button>
                        <button class="btn-secondary" on:click=move |_| set_show_form.set(false)>"취소"</button>
                    </div>
                </div>
            </Show>

            <Show when=move || answering_id.get().is_some()>
                <div class="form-panel">
                    <h3>"답변 작성"</h3>
                    <div class="form-group">
                        <textarea prop:value=move || answer_text.get()
                            on:input=move |ev| answer_text.set(event_target_value(&ev)) />
                    </div>
                    <div class="form-actions">
                        <button class="btn-primary" on:click=on_answer>"답변 등록"</button>
                        <button class="btn-secondary" on:click=move |_| set_answering_id.set(None)>"취소"</button>
                    </div>
                </div>
            </Show>

            <div class="ticket-list">
                {move || items.get().into_iter().map(|ticket| {
                    let id = ticket.base.id.as_string();
                    let status = ticket.status.as_str();
                    let answer_id = id.clone();
                    let close_id = id.clone();
                    let delete_id = id.clone();
                    view! {
                        <div class="ticket-card">
                            <div class="ticket-header">
                                <strong>{ticket.base.description.clone()}</strong>
                                <span class="ticket-status">{status_label(status)}</span>
                                <span class="ticket-date">
                                    {format_datetime(&ticket.base.metadata.created_at.to_rfc3339())}
                                </span>
                            </div>
                            <p class="ticket-body">{ticket.body.clone()}</p>
                            <Show when={
                                let has_answer = ticket.answer.is_some();
                                move || has_answer
                            }>
                                <div class="ticket-answer">
                                    <strong>"답변"</strong>
                                    <p>{ticket.answer.clone().unwrap_or_default()}</p>
                                    <span class="ticket-date">
                                        {ticket.answered_at
                                            .map(|t| format_datetime(&t.to_rfc3339()))
                                            .unwrap_or_default()}
                                    </span>
                                </div>
                            </Show>
                            <div class="row-actions">
                                <Show when=move || is_admin.get() && status == "open">
                                    <button class="btn-link" on:click={
                                        let id = answer_id.clone();
                                        move |_| set_answering_id.set(Some(id.clone()))
                                    }>"답변하기"</button>
                                </Show>
                                <Show when=move || status != "closed">
                                    <button class="btn-link" on:click={
                                        let id = close_id.clone();
                                        move |_| on_close(id.clone())
                                    }>"종료"</button>
                                </Show>
                                <button class="btn-link danger" on:click={
                                    let id = delete_id.clone();
                                    move |_| on_delete(id.clone())
                                }>"삭제"</button>
                            </div>
                        </div>
                    }
                }).collect_view()}
            </div>
        </div>
    }
}
