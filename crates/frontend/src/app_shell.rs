//! Root shell: auth gate plus the main layout (sidebar + current page).

use leptos::prelude::*;

use crate::domain::a001_member_company::ui::MemberCompanyList;
use crate::domain::a002_support_project::ui::SupportProjectList;
use crate::domain::a003_project_application::ui::ProjectApplicationList;
use crate::domain::a004_performance_report::ui::PerformanceReportList;
use crate::domain::a005_support_ticket::ui::SupportTicketList;
use crate::domain::a006_faq::ui::FaqPage;
use crate::layout::sidebar::Sidebar;
use crate::layout::Page;
use crate::projections::p900_member_stats::ui::MemberStatsPage;
use crate::system::auth::context::{company_ref, is_admin, use_auth};
use crate::system::logs::pages::{
    AuditLogsPage, ExceptionLogsPage, GeneralLogsPage, PerformanceLogsPage,
};
use crate::system::pages::login::LoginPage;
use crate::system::users::ui::UsersPage;

#[component]
fn MainLayout() -> impl IntoView {
    let (auth_state, _) = use_auth();
    let (current, set_current) = signal(Page::SupportProjects);

    let admin = Signal::derive(move || is_admin(&auth_state.get()));
    let company = Signal::derive(move || company_ref(&auth_state.get()));

    view! {
        <div class="app-layout">
            <Sidebar current=current set_current=set_current />
            <main class="main-content">
                {move || {
                    let page = current.get();
                    // non-admin accounts never reach admin pages via the
                    // sidebar; this is a second guard for direct state
                    if page.admin_only() && !admin.get() {
                        return view! { <SupportProjectList is_admin=admin /> }.into_any();
                    }
                    match page {
                        Page::MemberCompanies => view! { <MemberCompanyList /> }.into_any(),
                        Page::SupportProjects => {
                            view! { <SupportProjectList is_admin=admin /> }.into_any()
                        }
                        Page::Applications => {
                            view! { <ProjectApplicationList is_admin=admin company_ref=company /> }
                                .into_any()
                        }
                        Page::Reports => {
                            view! { <PerformanceReportList is_admin=admin company_ref=company /> }
                                .into_any()
                        }
                        Page::Tickets => {
                            view! { <SupportTicketList is_admin=admin company_ref=company /> }
                                .into_any()
                        }
                        Page::Faq => view! { <FaqPage is_admin=admin /> }.into_any(),
                        Page::Stats => view! { <MemberStatsPage /> }.into_any(),
                        Page::Users => view! { <UsersPage /> }.into_any(),
                        Page::LogsGeneral => view! { <GeneralLogsPage /> }.into_any(),
                        Page::LogsException => view! { <ExceptionLogsPage /> }.into_any(),
                        Page::LogsPerformance => view! { <PerformanceLogsPage /> }.into_any(),
                        Page::LogsAudit => view! { <AuditLogsPage /> }.into_any(),
                    }
                }}
            </main>
        </div>
    }
}

/// Auth gate: LoginPage until a session exists, MainLayout afterwards.
#[component]
pub fn AppShell() -> impl IntoView {
    let (auth_state, _) = use_auth();

    view! {
        <Show
            when=move || auth_state.get().access_token.is_some()
            fallback=|| view! { <LoginPage /> }
        >
            <MainLayout />
        </Show>
    }
}
