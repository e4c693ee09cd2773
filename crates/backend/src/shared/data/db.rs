use once_cell::sync::OnceCell;
use sea_orm::{ConnectionTrait, Database, DatabaseBackend, DatabaseConnection, Statement};

static DB_CONN: OnceCell<DatabaseConnection> = OnceCell::new();

const AGGREGATE_TABLES: &[(&str, &str)] = &[
    (
        "a001_member_company",
        r#"
        CREATE TABLE IF NOT EXISTS a001_member_company (
            id TEXT PRIMARY KEY NOT NULL,
            code TEXT NOT NULL DEFAULT '',
            description TEXT NOT NULL,
            comment TEXT,
            registration_no TEXT NOT NULL DEFAULT '',
            ceo_name TEXT NOT NULL DEFAULT '',
            founded_at TEXT,
            industry TEXT NOT NULL DEFAULT '',
            stage TEXT NOT NULL DEFAULT 'preliminary',
            homepage TEXT,
            intro TEXT,
            is_deleted INTEGER NOT NULL DEFAULT 0,
            created_at TEXT,
            updated_at TEXT,
            version INTEGER NOT NULL DEFAULT 0
        );
    "#,
    ),
    (
        "a002_support_project",
        r#"
        CREATE TABLE IF NOT EXISTS a002_support_project (
            id TEXT PRIMARY KEY NOT NULL,
            code TEXT NOT NULL DEFAULT '',
            description TEXT NOT NULL,
            comment TEXT,
            category TEXT NOT NULL DEFAULT '',
            apply_from TEXT,
            apply_to TEXT,
            budget INTEGER NOT NULL DEFAULT 0,
            capacity INTEGER NOT NULL DEFAULT 0,
            status TEXT NOT NULL DEFAULT 'draft',
            is_deleted INTEGER NOT NULL DEFAULT 0,
            created_at TEXT,
            updated_at TEXT,
            version INTEGER NOT NULL DEFAULT 0
        );
    "#,
    ),
    (
        "a003_project_application",
        r#"
        CREATE TABLE IF NOT EXISTS a003_project_application (
            id TEXT PRIMARY KEY NOT NULL,
            code TEXT NOT NULL DEFAULT '',
            description TEXT NOT NULL,
            comment TEXT,
            project_ref TEXT NOT NULL,
            company_ref TEXT NOT NULL,
            status TEXT NOT NULL DEFAULT 'submitted',
            submitted_at TEXT,
            review_note TEXT,
            is_deleted INTEGER NOT NULL DEFAULT 0,
            created_at TEXT,
            updated_at TEXT,
            version INTEGER NOT NULL DEFAULT 0
        );
    "#,
    ),
    (
        "a004_performance_report",
        r#"
        CREATE TABLE IF NOT EXISTS a004_performance_report (
            id TEXT PRIMARY KEY NOT NULL,
            code TEXT NOT NULL DEFAULT '',
            description TEXT NOT NULL,
            comment TEXT,
            company_ref TEXT NOT NULL,
            year INTEGER NOT NULL,
            quarter INTEGER NOT NULL,
            revenue INTEGER NOT NULL DEFAULT 0,
            employee_count INTEGER NOT NULL DEFAULT 0,
            investment INTEGER NOT NULL DEFAULT 0,
            exports INTEGER NOT NULL DEFAULT 0,
            is_deleted INTEGER NOT NULL DEFAULT 0,
            created_at TEXT,
            updated_at TEXT,
            version INTEGER NOT NULL DEFAULT 0
        );
    "#,
    ),
    (
        "a005_support_ticket",
        r#"
        CREATE TABLE IF NOT EXISTS a005_support_ticket (
            id TEXT PRIMARY KEY NOT NULL,
            code TEXT NOT NULL DEFAULT '',
            description TEXT NOT NULL,
            comment TEXT,
            company_ref TEXT,
            body TEXT NOT NULL DEFAULT '',
            status TEXT NOT NULL DEFAULT 'open',
            answer TEXT,
            answered_at TEXT,
            is_deleted INTEGER NOT NULL DEFAULT 0,
            created_at TEXT,
            updated_at TEXT,
            version INTEGER NOT NULL DEFAULT 0
        );
    "#,
    ),
    (
        "a006_faq",
        r#"
        CREATE TABLE IF NOT EXISTS a006_faq (
            id TEXT PRIMARY KEY NOT NULL,
            code TEXT NOT NULL DEFAULT '',
            description TEXT NOT NULL,
            comment TEXT,
            category TEXT NOT NULL DEFAULT '',
            answer TEXT NOT NULL DEFAULT '',
            sort_order INTEGER NOT NULL DEFAULT 0,
            is_published INTEGER NOT NULL DEFAULT 0,
            is_deleted INTEGER NOT NULL DEFAULT 0,
            created_at TEXT,
            updated_at TEXT,
            version INTEGER NOT NULL DEFAULT 0
        );
    "#,
    ),
    (
        "sys_log",
        r#"
        CREATE TABLE IF NOT EXISTS sys_log (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            created_at TEXT NOT NULL,
            kind TEXT NOT NULL,
            level TEXT NOT NULL,
            source TEXT NOT NULL,
            layer TEXT NOT NULL DEFAULT '',
            message TEXT NOT NULL,
            module TEXT,
            trace_id TEXT,
            action TEXT,
            resource_type TEXT,
            resource_id TEXT,
            user_email TEXT,
            duration_ms INTEGER,
            extra_data TEXT
        );
    "#,
    ),
];

pub async fn initialize_database(db_path: Option<&str>) -> anyhow::Result<()> {
    let db_file = db_path.unwrap_or("target/db/portal.db");
    if let Some(parent) = std::path::Path::new(db_file).parent() {
        std::fs::create_dir_all(parent)?;
    }
    let absolute_path = if std::path::Path::new(db_file).is_absolute() {
        std::path::PathBuf::from(db_file)
    } else {
        std::env::current_dir()?.join(db_file)
    };
    // Normalize path separators and ensure proper URL form on Windows
    let normalized = absolute_path.to_string_lossy().replace('\\', "/");
    let needs_leading_slash = !normalized.starts_with('/') && normalized.contains(':');
    let prefix = if needs_leading_slash { "/" } else { "" };
    let db_url = format!("sqlite://{}{}?mode=rwc", prefix, normalized);
    let conn = Database::connect(&db_url).await?;

    for (name, ddl) in AGGREGATE_TABLES {
        conn.execute(Statement::from_string(
            DatabaseBackend::Sqlite,
            ddl.to_string(),
        ))
        .await
        .map_err(|e| anyhow::anyhow!("failed to create table {name}: {e}"))?;
    }

    conn.execute(Statement::from_string(
        DatabaseBackend::Sqlite,
        "CREATE INDEX IF NOT EXISTS idx_sys_log_kind_created ON sys_log (kind, created_at DESC);"
            .to_string(),
    ))
    .await?;

    DB_CONN
        .set(conn)
        .map_err(|_| anyhow::anyhow!("database already initialized"))?;

    tracing::info!("Database initialized at {}", absolute_path.display());
    Ok(())
}

/// Panics if `initialize_database` has not run; main calls it first.
pub fn get_connection() -> &'static DatabaseConnection {
    DB_CONN
        .get()
        .expect("database connection not initialized")
}
