use std::collections::HashMap;

use contracts::domain::a003_project_application::aggregate::{
    ProjectApplication, ReviewApplicationDto, SubmitApplicationDto,
};
use contracts::domain::common::AggregateId;
use leptos::prelude::*;
use leptos::task::spawn_local;

use super::api;
use crate::domain::{a001_member_company, a002_support_project};
use crate::shared::date_utils::format_datetime;

const STATUS_LABELS: &[(&str, &str)] = &[
    ("submitted", "접수"),
    ("screening", "심사중"),
    ("accepted", "선정"),
    ("rejected", "탈락"),
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
pub fn ProjectApplicationList(
    #[prop(into)] is_admin: Signal<bool>,
    /// Member accounts only see and submit for their own company
    #[prop(into)]
    company_ref: Signal<Option<String>>,
) -> impl IntoView {
    let (items, set_items) = signal(Vec::<ProjectApplication>::new());
    let (project_names, set_project_names) = signal(HashMap::<String, String>::new());
    let (company_names, set_company_names) = signal(HashMap::<String, String>::new());
    let (open_projects, set_open_projects) = signal(Vec::<(String, String)>::new());
    let (error, set_error) = signal(Option::<String>::None);
    let (show_form, set_show_form) = signal(false);

    let selected_project = RwSignal::new(String::new());
    let summary = RwSignal::new(String::new());

    let fetch = move || {
        let company = company_ref.get_untracked();
        spawn_local(async move {
            // members are scoped to their own company
            let scope = if is_admin.get_untracked() {
                None
            } else {
                company
            };
            match api::list(None, scope.as_deref()).await {
                Ok(list) => {
                    set_items.set(list);
                    set_error.set(None);
                }
                Err(e) => set_error.set(Some(e.to_string())),
            }
        });
    };

    let fetch_lookups = move || {
        spawn_local(async move {
            if let Ok(projects) = a002_support_project::api::list().await {
                let mut names = HashMap::new();
                let mut open = Vec::new();
                for p in &projects {
                    let id = p.base.id.as_string();
                    names.insert(id.clone(), p.base.description.clone());
                    if p.status.as_str() == "open" {
                        open.push((id, p.base.description.clone()));
                    }
                }
                set_project_names.set(names);
                set_open_projects.set(open);
            }
            if let Ok(companies) = a001_member_company::api::list().await {
                let names = companies
                    .iter()
                    .map(|c| (c.base.id.as_string(), c.base.description.clone()))
                    .collect();
                set_company_names.set(names);
            }
        });
    };

    fetch();
    fetch_lookups();

    let on_submit = move |_| {
        let Some(company) = company_ref.get_untracked() else {
            set_error.set(Some("소속 기업이 없는 계정입니다".to_string()));
            return;
        };
        let dto = SubmitApplicationDto {
            project_ref: selected_project.get_untracked(),
            company_ref: company,
            summary: summary.get_untracked(),
        };
        spawn_local(async move {
            match api::submit(&dto).await {
                Ok(_) => {
                    set_show_form.set(false);
                    summary.set(String::new());
                    fetch();
                }
                Err(e) => set_error.set(Some(e.to_string())),
            }
        });
    };

    let on_review = move |id: String, status: &'static str| {
        let note = web_sys::window()
            .and_then(|w| w.prompt_with_message("심사 의견 (선택)").ok().flatten())
            .filter(|s| !s.trim().is_empty());
        let dto = ReviewApplicationDto {
            id,
            status: status.to_string(),
            note,
        };
        spawn_local(async move {
            match api::review(&dto).await {
                Ok(_) => fetch(),
                Err(e) => set_error.set(Some(e.to_string())),
            }
        });
    };

    let on_delete = move |id: String| {
        if !confirm("이 신청을 삭제하시겠습니까?") {
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
        <div class="project-application-page">
            <div class="page-header">
                <h2>"사업 신청"</h2>
                <Show when=move || !is_admin.get() && company_ref.get().is_some()>
                    <button class="btn-primary" on:click=move |_| set_show_form.set(true)>
                        "신청하기"
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
                    <h3>"지원사업 신청"</h3>
                    <div class="form-group">
                        <label>"지원사업 (모집중)"</label>
                        <select
                            prop:value=move || selected_project.get()
                            on:change=move |ev| selected_project.set(event_target_value(&ev))
                        >
                            <option value="">"사업을 선택하세요"</option>
                            {move || open_projects.get().into_iter().map(|(id, name)| {
                                view! { <option value={id}>{name}</option> }
                            }).collect_view()}
                        </select>
                    </div>
                    <div class="form-group">
                        <label>"신청 개요"</label>
                        <textarea prop:value=move || summary.get()
                            on:input=move |ev| summary.set(event_target_value(&ev)) />
                    </div>
                    <div class="form-actions">
                        <button class="btn-primary" on:click=on_submit>"제출"</button>
                        <button class="btn-secondary" on:click=move |_| set_show_form.set(false)>"취소"</button>
                    </div>
                </div>
            </Show>

            <table class="data-table">
                <thead>
                    <tr>
                        <th>"지원사업"</th>
                        <th>"기업"</th>
                        <th>"개요"</th>
                        <th>"상태"</th>
                        <th>"접수일"</th>
                        <th>"심사 의견"</th>
                        <th>"작업"</th>
                    </tr>
                </thead>
                <tbody>
                    {move || items.get().into_iter().map(|app| {
                        let id = app.base.id.as_string();
                        let status = app.status.as_str();
                        let project_name = project_names.get()
                            .get(&app.project_ref.to_string())
                            .cloned()
                            .unwrap_or_else(|| app.project_ref.to_string());
                        let company_name = company_names.get()
                            .get(&app.company_ref.to_string())
                            .cloned()
                            .unwrap_or_else(|| app.company_ref.to_string());
                        let screening_id = id.clone();
                        let accept_id = id.clone();
                        let reject_id = id.clone();
                        let delete_id = id.clone();
                        view! {
                            <tr>
                                <td>{project_name}</td>
                                <td>{company_name}</td>
                                <td>{app.base.description.clone()}</td>
                                <td>{status_label(status)}</td>
                                <td>{format_datetime(&app.submitted_at.to_rfc3339())}</td>
                                <td>{app.review_note.clone().unwrap_or_default()}</td>
                                <td class="row-actions">
                                    <Show when=move || is_admin.get()>
                                        {
                                            let screening_id = screening_id.clone();
                                            let accept_id = accept_id.clone();
                                            let reject_id = reject_id.clone();
                                            view! {
                                                <Show when=move || status == "submitted">
                                                    {
                                                        let id = screening_id.clone();
                                                        view! {
                                                            <button class="btn-link" on:click=move |_| on_review(id.clone(), "screening")>"심사 시작"</button>
                                                        }
                                                    }
                                                </Show>
                                                <Show when=move || status == "screening">
                                                    {
                                                        let accept_id = accept_id.clone();
                                                        let reject_id = reject_id.clone();
                                                        view! {
                                                            <button class="btn-link" on:click=move |_| on_review(accept_id.clone(), "accepted")>"선정"</button>
                                                            <button class="btn-link" on:click=move |_| on_review(reject_id.clone(), "rejected")>"탈락"</button>
                                                        }
                                                    }
                                                </Show>
                                            }
                                        }
                                    </Show>
                                    <button class="btn-link danger" on:click={
                                        let id = delete_id.clone();
                                        move |_| on_delete(id.clone())
                                    }>"삭제"</button>
                                </td>
                            </tr>
                        }
                    }).collect_view()}
                </tbody>
            </table>
        </div>
    }
}
