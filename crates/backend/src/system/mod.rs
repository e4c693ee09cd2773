pub mod auth;
pub mod handlers;
pub mod initialization;
pub mod logs;
pub mod middleware;
pub mod users;
