pub mod common;

pub mod a001_member_company;
pub mod a002_support_project;
pub mod a003_project_application;
pub mod a004_performance_report;
pub mod a005_support_ticket;
pub mod a006_faq;
