use anyhow::Result;
use rusqlite::Connection;
use tracing::info;

pub fn run(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        "
        CREATE TABLE IF NOT EXISTS chirps (
            id      INTEGER PRIMARY KEY AUTOINCREMENT,
            text    TEXT NOT NULL,
            votes   INTEGER NOT NULL DEFAULT 0
        );
        ",
    )?;

    info!("Database migrations complete");
    Ok(())
}
