use once_cell::sync::OnceCell;
use sea_orm::{ConnectionTrait, Database, DatabaseBackend, DatabaseConnection, Statement};

use crate::shared::config;

static DB_CONN: OnceCell<DatabaseConnection> = OnceCell::new();

pub async fn initialize_database() -> anyhow::Result<()> {
    let cfg = config::load_config()?;
    let db_file = config::get_database_path(&cfg)?;

    if let Some(parent) = db_file.parent() {
        std::fs::create_dir_all(parent)?;
    }

    // Normalize path separators and ensure proper URL form on Windows
    let normalized = db_file.to_string_lossy().replace('\\', "/");
    let needs_leading_slash = !normalized.starts_with('/') && normalized.contains(':');
    let prefix = if needs_leading_slash { "/" } else { "" };
    let db_url = format!("sqlite://{}{}?mode=rwc", prefix, normalized);

    let conn = Database::connect(&db_url).await?;

    // Ensure required tables exist (minimal schema bootstrap)
    let create_courtinfo = r#"
        CREATE TABLE IF NOT EXISTS a001_courtinfo (
            id TEXT PRIMARY KEY NOT NULL,
            court_name TEXT,
            owner_type TEXT,
            address TEXT,
            region TEXT,
            city TEXT,
            opentime_owner TEXT,
            opentime_normal TEXT,
            reservation_time TEXT,
            time_of_use TEXT,
            court_count_hard_indoor INTEGER,
            court_count_hard_outdoor INTEGER,
            court_count_grass_indoor INTEGER,
            court_count_grass_outdoor INTEGER,
            court_count_clay_indoor INTEGER,
            court_count_clay_outdoor INTEGER,
            map_link TEXT,
            reserve_link TEXT,
            is_deleted INTEGER NOT NULL DEFAULT 0,
            created_at TEXT,
            updated_at TEXT
        );
    "#;
    conn.execute(Statement::from_string(
        DatabaseBackend::Sqlite,
        create_courtinfo.to_string(),
    ))
    .await?;

    tracing::info!("database ready at {}", db_file.display());

    DB_CONN
        .set(conn)
        .map_err(|_| anyhow::anyhow!("database already initialized"))?;
    Ok(())
}

pub fn get_connection() -> &'static DatabaseConnection {
    DB_CONN.get().expect("database is not initialized")
}
