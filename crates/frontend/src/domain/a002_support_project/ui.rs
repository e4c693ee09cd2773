use contracts::domain::a002_support_project::aggregate::{SupportProject, SupportProjectDto};
use contracts::domain::common::AggregateId;
use leptos::prelude::*;
use leptos::task::spawn_local;

use super::api;
use crate::shared::date_utils::format_date;

const STATUSES: &[(&str, &str)] = &[
    ("draft", "작성중"),
    ("open", "모집중"),
    ("closed", "모집마감"),
    ("completed", "완료"),
];

fn status_label(status: &str) -> &'static str {
    STATUSES
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
pub fn SupportProjectList(
    /// Admin accounts get edit/delete controls
    #[prop(into)]
    is_admin: Signal<bool>,
) -> impl IntoView {
    let (items, set_items) = signal(Vec::<SupportProject>::new());
    let (error, set_error) = signal(Option::<String>::None);
    let (show_form, set_show_form) = signal(false);
    let (editing_id, set_editing_id) = signal(Option::<String>::None);

    let title = RwSignal::new(String::new());
    let category = RwSignal::new(String::new());
    let apply_from = RwSignal::new(String::new());
    let apply_to = RwSignal::new(String::new());
    let budget = RwSignal::new(String::new());
    let capacity = RwSignal::new(String::new());
    let status = RwSignal::new("draft".to_string());

    let fetch = move || {
        spawn_local(async move {
            match api::list().await {
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
        title.set(String::new());
        category.set(String::new());
        apply_from.set(String::new());
        apply_to.set(String::new());
        budget.set(String::new());
        capacity.set(String::new());
        status.set("draft".to_string());
        set_show_form.set(true);
    };

    let open_edit = move |project: SupportProject| {
        set_editing_id.set(Some(project.base.id.as_string()));
        title.set(project.base.description.clone());
        category.set(project.category.clone());
        apply_from.set(project.apply_from.map(|d| d.to_string()).unwrap_or_default());
        apply_to.set(project.apply_to.map(|d| d.to_string()).unwrap_or_default());
        budget.set(project.budget.to_string());
        capacity.set(project.capacity.to_string());
        status.set(project.status.as_str().to_string());
        set_show_form.set(true);
    };

    let on_save = move |_| {
        let dto = SupportProjectDto {
            id: editing_id.get_untracked(),
            code: None,
            description: title.get_untracked(),
            category: category.get_untracked(),
            apply_from: apply_from.get_untracked().trim().parse().ok(),
            apply_to: apply_to.get_untracked().trim().parse().ok(),
            budget: budget.get_untracked().trim().parse().unwrap_or(0),
            capacity: capacity.get_untracked().trim().parse().unwrap_or(0),
            status: status.get_untracked(),
            comment: None,
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
        if !confirm("이 지원사업을 삭제하시겠습니까?") {
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
        <div class="support-project-page">
            <div class="page-header">
                <h2>"지원사업"</h2>
                <Show when=move || is_admin.get()>
                    <button class="btn-primary" on:click=open_create>"사업 등록"</button>
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
                    <h3>{move || if editing_id.get().is_some() { "지원사업 수정" } else { "지원사업 등록" }}</h3>
                    <div class="form-group">
                        <label>"사업명"</label>
                        <input type="text" prop:value=move || title.get()
                            on:input=move |ev| title.set(event_target_value(&ev)) />
                    </div>
                    <div class="form-group">
                        <label>"분야"</label>
                        <input type="text" prop:value=move || category.get()
                            on:input=move |ev| category.set(event_target_value(&ev)) />
                    </div>
                    <div class="form-group">
                        <label>"모집 시작일"</label>
                        <input type="date" prop:value=move || apply_from.get()
                            on:input=move |ev| apply_from.set(event_target_value(&ev)) />
                    </div>
                    <div class="form-group">
                        <label>"모집 마감일"</label>
                        <input type="date" prop:value=move || apply_to.get()
                            on:input=move |ev| apply_to.set(event_target_value(&ev)) />
                    </div>
                    <div class="form-group">
                        <label>"예산 (원)"</label>
                        <input type="number" prop:value=move || budget.get()
                            on:input=move |ev| budget.set(event_target_value(&ev)) />
                    </div>
                    <div class="form-group">
                        <label>"선정 기업 수"</label>
                        <input type="number" prop:value=move || capacity.get()
                            on:input=move |ev| capacity.set(event_target_value(&ev)) />
                    </div>
                    <div class="form-group">
                        <label>"상태"</label>
                        <select
                            prop:value=move || status.get()
                            on:change=move |ev| status.set(event_target_value(&ev))
                        >
                            {STATUSES.iter().map(|(value, label)| {
                                view! { <option value={*value}>{*label}</option> }
                            }).collect_view()}
                        </select>
                    </div>
                    <div class="form-actions">
                        <button class="btn-primary" on:click=on_save>"저장"</button>
                        <button class="btn-secondary" on:click=move |_| set_show_form.set(false)>"취소"</button>
                    </div>
                </div>
            </Show>

            <table class="data-table">
                <thead>
                    <tr>
                        <th>"사업명"</th>
                        <th>"분야"</th>
                        <th>"모집 기간"</th>
                        <th>"예산"</th>
                        <th>"선정 수"</th>
                        <th>"상태"</th>
                        <Show when=move || is_admin.get()><th>"작업"</th></Show>
                    </tr>
                </thead>
                <tbody>
                    {move || items.get().into_iter().map(|project| {
                        let edit_project = project.clone();
                        let delete_id = project.base.id.as_string();
                        let period = format!(
                            "{} ~ {}",
                            project.apply_from.map(|d| format_date(&d.to_string())).unwrap_or_default(),
                            project.apply_to.map(|d| format_date(&d.to_string())).unwrap_or_default(),
                        );
                        view! {
                            <tr>
                                <td>{project.base.description.clone()}</td>
                                <td>{project.category.clone()}</td>
                                <td>{period}</td>
                                <td>{project.budget.to_string()}</td>
                                <td>{project.capacity.to_string()}</td>
                                <td>{status_label(project.status.as_str())}</td>
                                <Show when=move || is_admin.get()>
                                    <td class="row-actions">
                                        <button class="btn-link" on:click={
                                            let edit_project = edit_project.clone();
                                            move |_| open_edit(edit_project.clone())
                                        }>"수정"</button>
                                        <button class="btn-link danger" on:click={
                                            let delete_id = delete_id.clone();
                                            move |_| on_delete(delete_id.clone())
                                        }>"삭제"</button>
                                    </td>
                                </Show>
                            </tr>
                        }
                    }).collect_view()}
                </tbody>
            </table>
        </div>
    }
}
