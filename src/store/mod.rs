//! SQLite-backed stamp collection state.
//!
//! Persists collected stamps to a local database with two tables:
//! - stamps: stamp_id, collected_at (RFC 3339)
//! - pass_ticket: the single purchased day pass (see `ticket`)
//!
//! Rowid order is insertion order, which is the order `list_collected`
//! reports. A database that cannot be opened or read is treated as empty
//! state rather than an error: every operation degrades to its safe
//! default so a broken file never reaches the caller as a failure.

pub mod ticket;

use std::path::{Path, PathBuf};

use chrono::Utc;
use rusqlite::{params, Connection};
use serde::Serialize;

/// One collected stamp as stored on disk.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CollectionRecord {
    pub stamp_id: u32,
    pub collected_at: String,
}

/// Progress over a catalog of `total` places. Derived on demand, never stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Progress {
    pub collected: usize,
    pub total: usize,
    pub percentage: u8,
}

/// Get the database path (~/.local/share/dtrip/dtrip.db or platform equivalent)
pub fn default_db_path() -> Result<PathBuf, Box<dyn std::error::Error>> {
    let data_dir = directories::ProjectDirs::from("", "", "dtrip")
        .ok_or("Could not determine data directory")?
        .data_dir()
        .to_path_buf();

    std::fs::create_dir_all(&data_dir)?;
    Ok(data_dir.join("dtrip.db"))
}

fn init_schema(conn: &Connection) -> rusqlite::Result<()> {
    conn.execute(
        "CREATE TABLE IF NOT EXISTS stamps (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            stamp_id INTEGER NOT NULL UNIQUE,
            collected_at TEXT NOT NULL
        )",
        [],
    )?;

    conn.execute(
        "CREATE TABLE IF NOT EXISTS pass_ticket (
            id INTEGER PRIMARY KEY CHECK (id = 1),
            travel_date TEXT NOT NULL,
            adults INTEGER NOT NULL,
            children INTEGER NOT NULL,
            purchased_at TEXT NOT NULL
        )",
        [],
    )?;

    Ok(())
}

// storage faults degrade to the safe default instead of reaching the caller
fn fallback<T>(op: &str, result: rusqlite::Result<T>, default: T) -> T {
    match result {
        Ok(value) => value,
        Err(e) => {
            eprintln!("warning: stamp store {op} failed: {e}");
            default
        }
    }
}

/// Database handle. Open once per command, reuse across all operations.
pub struct StampStore {
    conn: Connection,
}

impl StampStore {
    /// Open the store, preferring `db_path` and falling back to the
    /// platform data directory.
    ///
    /// A database that cannot be opened or initialized is treated as empty
    /// state: the command continues on a transient in-memory store and the
    /// problem is reported on stderr.
    pub fn open(db_path: Option<&Path>) -> Result<StampStore, Box<dyn std::error::Error>> {
        match Self::open_at(db_path) {
            Ok(store) => Ok(store),
            Err(e) => {
                eprintln!("warning: stamp database unavailable ({e}); starting from empty state");
                Self::open_in_memory()
            }
        }
    }

    fn open_at(db_path: Option<&Path>) -> Result<StampStore, Box<dyn std::error::Error>> {
        let path = match db_path {
            Some(p) => {
                if let Some(parent) = p.parent() {
                    std::fs::create_dir_all(parent)?;
                }
                p.to_path_buf()
            }
            None => default_db_path()?,
        };

        let conn = Connection::open(path)?;
        init_schema(&conn)?;
        Ok(StampStore { conn })
    }

    /// Transient store: used by tests and as the corrupt-database fallback.
    pub fn open_in_memory() -> Result<StampStore, Box<dyn std::error::Error>> {
        let conn = Connection::open_in_memory()?;
        init_schema(&conn)?;
        Ok(StampStore { conn })
    }

    /// True iff a collection record exists for this stamp.
    pub fn is_collected(&self, stamp_id: u32) -> bool {
        let result = self.conn.query_row(
            "SELECT EXISTS(SELECT 1 FROM stamps WHERE stamp_id = ?1)",
            params![stamp_id],
            |row| row.get(0),
        );

        fallback("lookup", result, false)
    }

    /// Record a stamp as collected now. Returns false, changing nothing,
    /// when the stamp was already collected.
    pub fn collect(&mut self, stamp_id: u32) -> bool {
        let collected_at = Utc::now().to_rfc3339();
        let result = self.conn.execute(
            "INSERT OR IGNORE INTO stamps (stamp_id, collected_at) VALUES (?1, ?2)",
            params![stamp_id, collected_at],
        );

        fallback("insert", result.map(|rows| rows == 1), false)
    }

    /// Remove a collection record. Tolerant: removing a stamp that was
    /// never collected is a no-op and still reports success.
    pub fn remove(&mut self, stamp_id: u32) -> bool {
        let result = self
            .conn
            .execute("DELETE FROM stamps WHERE stamp_id = ?1", params![stamp_id]);

        fallback("delete", result.map(|_| true), true)
    }

    /// All collection records, oldest first. Empty when nothing is collected.
    pub fn list_collected(&self) -> Vec<CollectionRecord> {
        fallback("select", self.query_collected(), Vec::new())
    }

    fn query_collected(&self) -> rusqlite::Result<Vec<CollectionRecord>> {
        let mut stmt = self
            .conn
            .prepare("SELECT stamp_id, collected_at FROM stamps ORDER BY id")?;

        let records = stmt
            .query_map([], |row| {
                Ok(CollectionRecord {
                    stamp_id: row.get(0)?,
                    collected_at: row.get(1)?,
                })
            })?
            .collect::<Result<Vec<_>, _>>()?;

        Ok(records)
    }

    /// Progress snapshot against a catalog of `total` places.
    ///
    /// Percentage is round-half-up on the real value; 0 when `total` is 0.
    pub fn progress(&self, total: usize) -> Progress {
        let collected = self.list_collected().len();
        let percentage = if total > 0 {
            ((collected as f64 / total as f64) * 100.0).round() as u8
        } else {
            0
        };

        Progress {
            collected,
            total,
            percentage,
        }
    }

    /// Drop every collection record, as if nothing was ever collected.
    pub fn reset_all(&mut self) {
        let result = self.conn.execute("DELETE FROM stamps", []);
        fallback("reset", result.map(|_| ()), ());
    }
}
