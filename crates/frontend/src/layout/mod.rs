pub mod sidebar;

/// The portal's top-level screens. Member accounts only get the member
/// subset; admin accounts get everything.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Page {
    MemberCompanies,
    SupportProjects,
    Applications,
    Reports,
    Tickets,
    Faq,
    Stats,
    Users,
    LogsGeneral,
    LogsException,
    LogsPerformance,
    LogsAudit,
}

impl Page {
    pub fn title(&self) -> &'static str {
        match self {
            Page::MemberCompanies => "입주기업",
            Page::SupportProjects => "지원사업",
            Page::Applications => "사업 신청",
            Page::Reports => "성과 보고",
            Page::Tickets => "1:1 문의",
            Page::Faq => "FAQ",
            Page::Stats => "성과 통계",
            Page::Users => "계정 관리",
            Page::LogsGeneral => "일반 로그",
            Page::LogsException => "예외 로그",
            Page::LogsPerformance => "성능 로그",
            Page::LogsAudit => "감사 로그",
        }
    }

    pub fn admin_only(&self) -> bool {
        matches!(
            self,
            Page::MemberCompanies
                | Page::Stats
                | Page::Users
                | Page::LogsGeneral
                | Page::LogsException
                | Page::LogsPerformance
                | Page::LogsAudit
        )
    }
}
