use contracts::domain::a006_faq::aggregate::{Faq, FaqDto};
use contracts::domain::common::AggregateId;
use leptos::prelude::*;
use leptos::task::spawn_local;

use super::api;

fn confirm(message: &str) -> bool {
    web_sys::window()
        .map(|w| w.confirm_with_message(message).unwrap_or(false))
        .unwrap_or(false)
}

/// FAQ page. Members read the published list grouped by category; admins
/// see everything and manage entries in place.
#[component]
pub fn FaqPage(#[prop(into)] is_admin: Signal<bool>) -> impl IntoView {
    let (items, set_items) = signal(Vec::<Faq>::new());
    let (error, set_error) = signal(Option::<String>::None);
    let (show_form, set_show_form) = signal(false);
    let (editing_id, set_editing_id) = signal(Option::<String>::None);
    let (expanded_id, set_expanded_id) = signal(Option::<String>::None);

    let category = RwSignal::new(String::new());
    let question = RwSignal::new(String::new());
    let answer = RwSignal::new(String::new());
    let sort_order = RwSignal::new("0".to_string());
    let is_published = RwSignal::new(true);

    let fetch = move || {
        spawn_local(async move {
            let result = if is_admin.get_untracked() {
                api::list_all().await
            } else {
                api::list_published().await
            };
            match result {
                Ok(list) => {
                    set_items.set(list);
                    set_error.set(None);
                }
                Err(e) => set_error.set(Some(e.to_string())),
            }
        });
    };
    fetch();

    let open_create = move |_| {
        set_editing_id.set(None);
        category.set(String::new());
        question.set(String::new());
        answer.set(String::new());
        sort_order.set("0".to_string());
        is_published.set(true);
        set_show_form.set(true);
    };

    let open_edit = move |faq: Faq| {
        set_editing_id.set(Some(faq.base.id.as_string()));
        category.set(faq.category.clone());
        question.set(faq.base.description.clone());
        answer.set(faq.answer.clone());
        sort_order.set(faq.sort_order.to_string());
        is_published.set(faq.is_published);
        set_show_form.set(true);
    };

    let on_save = move |_| {
        let dto = FaqDto {
            id: editing_id.get_untracked(),
            category: category.get_untracked(),
            question: question.get_untracked(),
            answer: answer.get_untracked(),
            sort_order: sort_order.get_untracked().trim().parse().unwrap_or(0),
            is_published: is_published.get_untracked(),
        };
        spawn_local(async move {
            match api::save(&dto).await {
                Ok(_) => {
                    set_show_form.set(false);
                    fetch();
                }
                Err(e) => set_error.set(Some(e.to_string())),
            }
        });
    };

    let on_delete = move |id: String| {
        if !confirm("이 FAQ를 삭제하시겠습니까?") {
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
        <div class="faq-page">
            <div class="page-header">
                <h2>"자주 묻는 질문"</h2>
                <Show when=move || is_admin.get()>
                    <button class="btn-primary" on:click=open_create>"FAQ 등록"</button>
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
                    <h3>{move || if editing_id.get().is_some() { "FAQ 수정" } else { "FAQ 등록" }}</h3>
                    <div class="form-group">
                        <label>"분류"</label>
                        <input type="text" prop:value=move || category.get()
                            on:input=move |ev| category.set(event_target_value(&ev)) />
                    </div>
                    <div class="form-group">
                        <label>"질문"</label>
                        <input type="text" prop:value=move || question.get()
                            on:input=move |ev| question.set(event_target_value(&ev)) />
                    </div>
                    <div class="form-group">
                        <label>"답변"</label>
                        <textarea prop:value=move || answer.get()
                            on:input=move |ev| answer.set(event_target_value(&ev)) />
                    </div>
                    <div class="form-group">
                        <label>"정렬 순서"</label>
                        <input type="number" prop:value=move || sort_order.get()
                            on:input=move |ev| sort_order.set(event_target_value(&ev)) />
                    </div>
                    <div class="form-group checkbox">
                        <label>
                            <input
                                type="checkbox"
                                prop:checked=move || is_published.get()
                                on:change=move |ev| is_published.set(event_target_checked(&ev))
                            />
                            "게시"
                        </label>
                    </div>
                    <div class="form-actions">
                        <button class="btn-primary" on:click=on_save>"저장"</button>
                        <button class="btn-secondary" on:click=move |_| set_show_form.set(false)>"취소"</button>
                    </div>
                </div>
            </Show>

            <div class="faq-list">
                {move || items.get().into_iter().map(|faq| {
                    let id = faq.base.id.as_string();
                    let toggle_id = id.clone();
                    let edit_faq = faq.clone();
                    let delete_id = id.clone();
                    let expanded = move || expanded_id.get() == Some(id.clone());
                    view! {
                        <div class="faq-item">
                            <div
                                class="faq-question"
                                on:click=move |_| {
                                    let id = toggle_id.clone();
                                    set_expanded_id.update(|current| {
                                        if *current == Some(id.clone()) {
                                            *current = None;
                                        } else {
                                            *current = Some(id);
                                        }
                                    });
                                }
                            >
                                <span class="faq-category">{format!("[{}]", faq.category)}</span>
                                <span>{faq.base.description.clone()}</span>
                                <Show when={
                                    let published = faq.is_published;
                                    move || is_admin.get() && !published
                                }>
                                    <span class="faq-draft">"(비공개)"</span>
                                </Show>
                            </div>
                            <Show when=expanded.clone()>
                                <p class="faq-answer">{faq.answer.clone()}</p>
                            </Show>
                            <Show when=move || is_admin.get()>
                                <div class="row-actions">
                                    <button class="btn-link" on:click={
                                        let faq = edit_faq.clone();
                                        move |_| open_edit(faq.clone())
                                    }>"수정"</button>
                                    <button class="btn-link danger" on:click={
                                        let id = delete_id.clone();
                                        move |_| on_delete(id.clone())
                                    }>"삭제"</button>
                                </div>
                            </Show>
                        </div>
                    }
                }).collect_view()}
            </div>
        </div>
    }
}
