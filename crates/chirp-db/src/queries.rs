use crate::Database;
use crate::models::{Chirp, VoteOutcome};
use anyhow::{Result, anyhow};
use rusqlite::Connection;

impl Database {
    // -- Storage accessor --

    /// All chirps, newest id first. No pagination; the full table.
    pub fn list_chirps(&self) -> Result<Vec<Chirp>> {
        self.with_conn(query_chirps)
    }

    /// Inserts a chirp with zero votes and returns the assigned id.
    pub fn insert_chirp(&self, text: &str) -> Result<i64> {
        self.with_conn(|conn| {
            conn.execute("INSERT INTO chirps (text) VALUES (?1)", [text])?;
            Ok(conn.last_insert_rowid())
        })
    }

    pub fn get_chirp(&self, id: i64) -> Result<Option<Chirp>> {
        self.with_conn(|conn| query_chirp(conn, id))
    }

    /// Unconditional vote-count update.
    pub fn set_votes(&self, id: i64, votes: i64) -> Result<()> {
        self.with_conn(|conn| update_votes(conn, id, votes))
    }

    // -- Vote engine --

    /// Increments the chirp's vote count. Applied whenever the chirp exists.
    ///
    /// The read and the write run under a single lock acquisition, so two
    /// concurrent votes on the same chirp serialize instead of losing one.
    pub fn upvote(&self, id: i64) -> Result<VoteOutcome> {
        self.with_conn(|conn| {
            let chirp =
                query_chirp(conn, id)?.ok_or_else(|| anyhow!("Chirp not found: {}", id))?;
            update_votes(conn, chirp.id, chirp.votes + 1)?;
            Ok(VoteOutcome::Applied)
        })
    }

    /// Decrements the chirp's vote count, never below zero: a downvote at
    /// zero writes nothing and reports `NoOp`.
    pub fn downvote(&self, id: i64) -> Result<VoteOutcome> {
        self.with_conn(|conn| {
            let chirp =
                query_chirp(conn, id)?.ok_or_else(|| anyhow!("Chirp not found: {}", id))?;
            if chirp.votes == 0 {
                return Ok(VoteOutcome::NoOp);
            }
            update_votes(conn, chirp.id, chirp.votes - 1)?;
            Ok(VoteOutcome::Applied)
        })
    }
}

fn query_chirps(conn: &Connection) -> Result<Vec<Chirp>> {
    let mut stmt = conn.prepare("SELECT id, text, votes FROM chirps ORDER BY id DESC")?;

    let rows = stmt
        .query_map([], |row| {
            Ok(Chirp {
                id: row.get(0)?,
                text: row.get(1)?,
                votes: row.get(2)?,
            })
        })?
        .collect::<std::result::Result<Vec<_>, _>>()?;

    Ok(rows)
}

fn query_chirp(conn: &Connection, id: i64) -> Result<Option<Chirp>> {
    let mut stmt = conn.prepare("SELECT id, text, votes FROM chirps WHERE id = ?1")?;

    let row = stmt
        .query_row([id], |row| {
            Ok(Chirp {
                id: row.get(0)?,
                text: row.get(1)?,
                votes: row.get(2)?,
            })
        })
        .optional()?;

    Ok(row)
}

fn update_votes(conn: &Connection, id: i64, votes: i64) -> Result<()> {
    conn.execute(
        "UPDATE chirps SET votes = ?1 WHERE id = ?2",
        rusqlite::params![votes, id],
    )?;
    Ok(())
}

/// Extension trait for optional query results
trait OptionalExt<T> {
    fn optional(self) -> Result<Option<T>>;
}

impl<T> OptionalExt<T> for std::result::Result<T, rusqlite::Error> {
    fn optional(self) -> Result<Option<T>> {
        match self {
            Ok(val) => Ok(Some(val)),
            Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
            Err(e) => Err(e.into()),
        }
    }
}
