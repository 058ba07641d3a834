use common::model::email_config::EmailConfig;
use rusqlite::{params, Connection};
use std::path::Path;

const SCHEMA: &str = "CREATE TABLE IF NOT EXISTS email_configs (
    id TEXT PRIMARY KEY,
    title TEXT NOT NULL,
    content TEXT NOT NULL,
    image_url TEXT NOT NULL,
    saved_at TEXT NOT NULL DEFAULT (strftime('%Y-%m-%d %H:%M:%f', 'now'))
)";

/// Opens the database at `path`, creating the schema if needed.
pub fn open(path: &Path) -> rusqlite::Result<Connection> {
    let conn = Connection::open(path)?;
    conn.execute(SCHEMA, [])?;
    Ok(conn)
}

/// Inserts `config` under a fresh id and returns that id.
pub fn insert(conn: &Connection, config: &EmailConfig) -> rusqlite::Result<String> {
    let id = uuid::Uuid::new_v4().to_string();
    conn.execute(
        "INSERT INTO email_configs (id, title, content, image_url) VALUES (?1, ?2, ?3, ?4)",
        params![&id, &config.title, &config.content, &config.image_url],
    )?;
    Ok(id)
}

/// Most recently saved configuration, if any.
#[cfg(test)]
pub fn latest(conn: &Connection) -> rusqlite::Result<Option<EmailConfig>> {
    use rusqlite::OptionalExtension;

    conn.query_row(
        "SELECT title, content, image_url FROM email_configs ORDER BY saved_at DESC, rowid DESC LIMIT 1",
        [],
        |row| {
            Ok(EmailConfig {
                title: row.get(0)?,
                content: row.get(1)?,
                image_url: row.get(2)?,
            })
        },
    )
    .optional()
}
