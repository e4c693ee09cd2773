use std::collections::HashMap;

use contracts::domain::a004_performance_report::aggregate::{
    PerformanceReport, PerformanceReportDto,
};
use contracts::domain::common::AggregateId;
use leptos::prelude::*;
use leptos::task::spawn_local;

use super::api;
use crate::domain::a001_member_company;

fn confirm(message: &str) -> bool {
    web_sys::window()
        .map(|w| w.confirm_with_message(message).unwrap_or(false))
        .unwrap_or(false)
}

#[component]
pub fn PerformanceReportList(
    #[prop(into)] is_admin: Signal<bool>,
    #[prop(into)] company_ref: Signal<Option<String>>,
) -> impl IntoView {
    let (items, set_items) = signal(Vec::<PerformanceReport>::new());
    let (company_names, set_company_names) = signal(HashMap::<String, String>::new());
    let (error, set_error) = signal(Option::<String>::None);
    let (show_form, set_show_form) = signal(false);
    let (editing_id, set_editing_id) = signal(Option::<String>::None);

    let year = RwSignal::new(String::new());
    let quarter = RwSignal::new("1".to_string());
    let revenue = RwSignal::new(String::new());
    let employee_count = RwSignal::new(String::new());
    let investment = RwSignal::new(String::new());
    let exports = RwSignal::new(String::new());

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

    spawn_local(async move {
        if let Ok(companies) = a001_member_company::api::list().await {
            let names = companies
                .iter()
                .map(|c| (c.base.id.as_string(), c.base.description.clone()))
                .collect();
            set_company_names.set(names);
        }
    });

    let open_create = move |_| {
        set_editing_id.set(None);
        year.set(String::new());
        quarter.set("1".to_string());
        revenue.set(String::new());
        employee_count.set(String::new());
        investment.set(String::new());
        exports.set(String::new());
        set_show_form.set(true);
    };

    let open_edit = move |report: PerformanceReport| {
        set_editing_id.set(Some(report.base.id.as_string()));
        year.set(report.year.to_string());
        quarter.set(report.quarter.to_string());
        revenue.set(report.revenue.to_string());
        employee_count.set(report.employee_count.to_string());
        investment.set(report.investment.to_string());
        exports.set(report.exports.to_string());
        set_show_form.set(true);
    };

    let on_save = move |_| {
        let Some(company) = company_ref.get_untracked() else {
            set_error.set(Some("소속 기업이 없는 계정입니다".to_string()));
            return;
        };
        let dto = PerformanceReportDto {
            id: editing_id.get_untracked(),
            company_ref: company,
            year: year.get_untracked().trim().parse().unwrap_or(0),
            quarter: quarter.get_untracked().trim().parse().unwrap_or(0),
            revenue: revenue.get_untracked().trim().parse().unwrap_or(0),
            employee_count: employee_count.get_untracked().trim().parse().unwrap_or(0),
            investment: investment.get_untracked().trim().parse().unwrap_or(0),
            exports: exports.get_untracked().trim().parse().unwrap_or(0),
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
        if !confirm("이 보고서를 삭제하시겠습니까?") {
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
        <div class="performance-report-page">
            <div class="page-header">
                <h2>"분기 성과 보고"</h2>
                <Show when=move || company_ref.get().is_some()>
                    <button class="btn-primary" on:click=open_create>"보고서 작성"</button>
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
                    <h3>{move || if editing_id.get().is_some() { "보고서 수정" } else { "보고서 작성" }}</h3>
                    <div class="form-group">
                        <label>"연도"</label>
                        <input type="number" prop:value=move || year.get()
                            on:input=move |ev| year.set(event_target_value(&ev)) />
                    </div>
                    <div class="form-group">
                        <label>"분기"</label>
                        <select
                            prop:value=move || quarter.get()
                            on:change=move |ev| quarter.set(event_target_value(&ev))
                        >
                            <option value="1">"1분기"</option>
                            <option value="2">"2분기"</option>
                            <option value="3">"3분기"</option>
                            <option value="4">"4분기"</option>
                        </select>
                    </div>
                    <div class="form-group">
                        <label>"매출액 (원)"</label>
                        <input type="number" prop:value=move || revenue.get()
                            on:input=move |ev| revenue.set(event_target_value(&ev)) />
                    </div>
                    <div class="form-group">
                        <label>"고용 인원"</label>
                        <input type="number" prop:value=move || employee_count.get()
                            on:input=move |ev| employee_count.set(event_target_value(&ev)) />
                    </div>
                    <div class="form-group">
                        <label>"투자 유치액 (원)"</label>
                        <input type="number" prop:value=move || investment.get()
                            on:input=move |ev| investment.set(event_target_value(&ev)) />
                    </div>
                    <div class="form-group">
                        <label>"수출액 (원)"</label>
                        <input type="number" prop:value=move || exports.get()
                            on:input=move |ev| exports.set(event_target_value(&ev)) />
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
                        <th>"기업"</th>
                        <th>"연도"</th>
                        <th>"분기"</th>
                        <th>"매출액"</th>
                        <th>"고용"</th>
                        <th>"투자 유치"</th>
                        <th>"수출액"</th>
                        <th>"작업"</th>
                    </tr>
                </thead>
                <tbody>
                    {move || items.get().into_iter().map(|report| {
                        let edit_report = report.clone();
                        let delete_id = report.base.id.as_string();
                        let company_name = company_names.get()
                            .get(&report.company_ref.to_string())
                            .cloned()
                            .unwrap_or_else(|| report.company_ref.to_string());
                        view! {
                            <tr>
                                <td>{company_name}</td>
                                <td>{report.year}</td>
                                <td>{format!("{}분기", report.quarter)}</td>
                                <td>{report.revenue.to_string()}</td>
                                <td>{report.employee_count}</td>
                                <td>{report.investment.to_string()}</td>
                                <td>{report.exports.to_string()}</td>
                                <td class="row-actions">
                                    <button class="btn-link" on:click=move |_| open_edit(edit_report.clone())>"수정"</button>
                                    <button class="btn-link danger" on:click=move |_| on_delete(delete_id.clone())>"삭제"</button>
                                </td>
                            </tr>
                        }
                    }).collect_view()}
                </tbody>
            </table>
        </div>
    }
}
