//! Sqlite storage for websites, notifications, and display configs
use anyhow::Result;
use tokio_rusqlite::Connection;

/// Open the async db connection, creating the file if needed
pub async fn async_db(db_path: &str) -> Result<Connection> {
    let db_file = format!("{}/popcue.sqlite3", db_path);
    let conn = Connection::open(db_file).await?;
    Ok(conn)
}

/// Create tables if they don't already exist. Notification rows carry an
/// explicit position column: insertion order is display order.
pub fn initialize_db(conn: &mut rusqlite::Connection) -> Result<(), rusqlite::Error> {
    conn.execute_batch(
        r"
        CREATE TABLE IF NOT EXISTS website (
          id TEXT PRIMARY KEY,
          name TEXT NOT NULL,
          plan TEXT NOT NULL DEFAULT 'free',
          created_at TEXT NOT NULL
        );

        CREATE TABLE IF NOT EXISTS notification (
          id TEXT PRIMARY KEY,
          website_id TEXT NOT NULL REFERENCES website(id),
          position INTEGER NOT NULL,
          title TEXT NOT NULL,
          message TEXT NOT NULL,
          image TEXT,
          url TEXT,
          timestamp TEXT,
          delay INTEGER
        );

        CREATE INDEX IF NOT EXISTS notification_website_idx
          ON notification(website_id, position);

        CREATE TABLE IF NOT EXISTS display_config (
          website_id TEXT PRIMARY KEY REFERENCES website(id),
          start_delay INTEGER NOT NULL,
          display_duration INTEGER NOT NULL,
          cycle_duration INTEGER NOT NULL,
          loop_enabled INTEGER NOT NULL,
          show_close_button INTEGER NOT NULL,
          theme TEXT NOT NULL,
          max_visible INTEGER NOT NULL
        );
        ",
    )
}
