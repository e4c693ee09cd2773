pub mod domain;
pub mod handlers;
pub mod projections;
pub mod shared;
pub mod system;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    use axum::http::{header, Method};
    use axum::middleware;
    use axum::{
        routing::{get, post},
        Router,
    };
    use std::net::SocketAddr;
    use tokio::net::TcpListener;
    use tower_http::cors::{Any, CorsLayer};
    use tower_http::services::ServeDir;
    use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

    let log_dir = std::path::Path::new("target").join("logs");
    std::fs::create_dir_all(&log_dir)?;

    let log_file = std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(log_dir.join("backend.log"))?;

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "info,sqlx=warn,sea_orm=warn".into()),
        ))
        .with(tracing_subscriber::fmt::layer())
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::sync::Arc::new(log_file))
                .with_ansi(false),
        )
        .init();

    let config = shared::config::load_config()?;
    let db_path = shared::config::get_database_path(&config)?;

    shared::data::db::initialize_database(db_path.to_str())
        .await
        .map_err(|e| anyhow::anyhow!("db init failed: {e}"))?;

    system::initialization::apply_auth_schema().await?;
    system::initialization::ensure_admin_user_exists().await?;

    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers([header::CONTENT_TYPE, header::ACCEPT, header::AUTHORIZATION]);

    let require_auth = || {
        middleware::from_fn::<_, (axum::extract::Request,)>(system::auth::middleware::require_auth)
    };
    let require_admin = || {
        middleware::from_fn::<_, (axum::extract::Request,)>(system::auth::middleware::require_admin)
    };

    let app = Router::new()
        .route("/health", get(|| async { "ok" }))
        // ========================================
        // SYSTEM AUTH ROUTES (PUBLIC)
        // ========================================
        .route(
            "/api/system/auth/login",
            post(system::handlers::auth::login),
        )
        .route(
            "/api/system/auth/refresh",
            post(system::handlers::auth::refresh),
        )
        .route(
            "/api/system/auth/logout",
            post(system::handlers::auth::logout),
        )
        .route(
            "/api/system/auth/me",
            get(system::handlers::auth::current_user).layer(require_auth()),
        )
        // System users management (admin only)
        .route(
            "/api/system/users",
            get(system::handlers::users::list)
                .post(system::handlers::users::create)
                .layer(require_admin()),
        )
        .route(
            "/api/system/users/:id",
            get(system::handlers::users::get_by_id)
                .put(system::handlers::users::update)
                .delete(system::handlers::users::delete)
                .layer(require_admin()),
        )
        .route(
            "/api/system/users/:id/change-password",
            post(system::handlers::users::change_password).layer(require_auth()),
        )
        // ========================================
        // SYSTEM LOGS (viewer routes admin only)
        // ========================================
        .route(
            "/api/system/logs",
            post(handlers::logs::create).layer(require_auth()),
        )
        .route(
            "/api/system/logs/:kind",
            get(handlers::logs::list).layer(require_admin()),
        )
        .route(
            "/api/system/logs/:kind/purge",
            post(handlers::logs::purge_by_field).layer(require_admin()),
        )
        .route(
            "/api/system/logs/:kind/:id",
            axum::routing::delete(handlers::logs::delete_by_id).layer(require_admin()),
        )
        // ========================================
        // PORTAL ROUTES
        // ========================================
        .route(
            "/api/member-company",
            get(handlers::a001_member_company::list_all)
                .post(handlers::a001_member_company::upsert)
                .layer(require_auth()),
        )
        .route(
            "/api/member-company/:id",
            get(handlers::a001_member_company::get_by_id)
                .delete(handlers::a001_member_company::delete)
                .layer(require_auth()),
        )
        .route(
            "/api/support-project",
            get(handlers::a002_support_project::list_all)
                .post(handlers::a002_support_project::upsert)
                .layer(require_auth()),
        )
        .route(
            "/api/support-project/:id",
            get(handlers::a002_support_project::get_by_id)
                .delete(handlers::a002_support_project::delete)
                .layer(require_auth()),
        )
        .route(
            "/api/project-application",
            get(handlers::a003_project_application::list)
                .post(handlers::a003_project_application::submit)
                .layer(require_auth()),
        )
        .route(
            "/api/project-application/:id",
            get(handlers::a003_project_application::get_by_id)
                .delete(handlers::a003_project_application::delete)
                .layer(require_auth()),
        )
        .route(
            "/api/project-application/:id/review",
            post(handlers::a003_project_application::review).layer(require_admin()),
        )
        .route(
            "/api/performance-report",
            get(handlers::a004_performance_report::list)
                .post(handlers::a004_performance_report::upsert)
                .layer(require_auth()),
        )
        .route(
            "/api/performance-report/:id",
            get(handlers::a004_performance_report::get_by_id)
                .delete(handlers::a004_performance_report::delete)
                .layer(require_auth()),
        )
        .route(
            "/api/support-ticket",
            get(handlers::a005_support_ticket::list)
                .post(handlers::a005_support_ticket::create)
                .layer(require_auth()),
        )
        .route(
            "/api/support-ticket/:id",
            get(handlers::a005_support_ticket::get_by_id)
                .delete(handlers::a005_support_ticket::delete)
                .layer(require_auth()),
        )
        .route(
            "/api/support-ticket/:id/answer",
            post(handlers::a005_support_ticket::answer).layer(require_admin()),
        )
        .route(
            "/api/support-ticket/:id/close",
            post(handlers::a005_support_ticket::close).layer(require_auth()),
        )
        .route("/api/faq", get(handlers::a006_faq::list_published))
        .route(
            "/api/faq",
            post(handlers::a006_faq::upsert).layer(require_admin()),
        )
        .route(
            "/api/faq/all",
            get(handlers::a006_faq::list_all).layer(require_admin()),
        )
        .route("/api/faq/:id", get(handlers::a006_faq::get_by_id))
        .route(
            "/api/faq/:id",
            axum::routing::delete(handlers::a006_faq::delete).layer(require_admin()),
        )
        // P900 member statistics
        .route(
            "/api/p900/member-stats",
            get(handlers::p900_member_stats::list).layer(require_auth()),
        )
        .route(
            "/api/p900/member-stats/export",
            get(handlers::p900_member_stats::export_csv).layer(require_auth()),
        )
        .fallback_service(ServeDir::new("dist"))
        .layer(middleware::from_fn(
            system::middleware::request_logger::log_request,
        ))
        .layer(cors);

    let addr: SocketAddr = ([0, 0, 0, 0], config.server.port).into();

    tracing::info!("Binding server to http://{}", addr);
    let listener = match TcpListener::bind(addr).await {
        Ok(listener) => listener,
        Err(e) => {
            if e.kind() == std::io::ErrorKind::AddrInUse {
                tracing::error!("Port {} is already in use", config.server.port);
            } else {
                tracing::error!("Failed to bind to port {}: {}", config.server.port, e);
            }
            return Err(e.into());
        }
    };

    axum::serve(listener, app).await?;

    Ok(())
}
