//! SQLite-backed volume catalog implementation.

use std::path::{Path, PathBuf};
use std::sync::{Mutex, MutexGuard};

use chrono::{DateTime, SecondsFormat, Utc};
use rusqlite::functions::FunctionFlags;
use rusqlite::{params, Connection, OptionalExtension};
use tracing::{debug, info};

use super::{Catalog, CatalogError, CatalogId, CatalogStats, CatalogStore, DirectoryMatch};

/// Search terms shorter than this (in characters, after trimming) match nothing.
pub const MIN_SEARCH_TERM_LEN: usize = 2;

const SCHEMA_VERSION: i64 = 1;

/// Label given to a new catalog when the scanner could not read a volume label.
pub fn default_display_name(scanned_at: &DateTime<Utc>) -> String {
    format!("Disk_{}", scanned_at.format("%Y%m%d"))
}

/// SQLite-backed volume catalog.
pub struct SqliteCatalogStore {
    conn: Mutex<Connection>,
    path: Option<PathBuf>,
}

impl SqliteCatalogStore {
    /// Open the catalog at `path`, creating the database file and tables if needed.
    pub fn open(path: &Path) -> Result<Self, CatalogError> {
        let conn = Connection::open(path)?;
        Self::initialize(&conn)?;
        info!(path = %path.display(), "Catalog store opened");
        Ok(Self {
            conn: Mutex::new(conn),
            path: Some(path.to_path_buf()),
        })
    }

    /// Create an in-memory catalog (useful for testing).
    pub fn in_memory() -> Result<Self, CatalogError> {
        let conn = Connection::open_in_memory()?;
        Self::initialize(&conn)?;
        Ok(Self {
            conn: Mutex::new(conn),
            path: None,
        })
    }

    fn initialize(conn: &Connection) -> Result<(), CatalogError> {
        conn.execute_batch(
            "PRAGMA journal_mode = WAL;
             PRAGMA synchronous = NORMAL;
             PRAGMA foreign_keys = ON;
             PRAGMA busy_timeout = 5000;",
        )?;

        // Unicode-aware case folding; SQLite's LOWER() only folds ASCII.
        conn.create_scalar_function(
            "fold_case",
            1,
            FunctionFlags::SQLITE_UTF8 | FunctionFlags::SQLITE_DETERMINISTIC,
            |ctx| {
                let value: String = ctx.get(0)?;
                Ok(value.to_lowercase())
            },
        )?;

        conn.execute_batch(
            r#"
            -- One row per physical volume, keyed by its identity (serial)
            CREATE TABLE IF NOT EXISTS catalogs (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                identity_key TEXT NOT NULL UNIQUE CHECK (length(identity_key) > 0),
                display_name TEXT NOT NULL,
                source_path TEXT NOT NULL,
                scanned_at TEXT NOT NULL,
                entry_count INTEGER NOT NULL DEFAULT 0,
                created_at TEXT NOT NULL
            );

            CREATE INDEX IF NOT EXISTS idx_catalogs_scanned_at ON catalogs(scanned_at);

            -- Directory snapshot of each volume, replaced wholesale on rescan
            CREATE TABLE IF NOT EXISTS directory_entries (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                catalog_id INTEGER NOT NULL REFERENCES catalogs(id) ON DELETE CASCADE,
                path TEXT NOT NULL
            );

            CREATE INDEX IF NOT EXISTS idx_directory_entries_catalog ON directory_entries(catalog_id);
            CREATE INDEX IF NOT EXISTS idx_directory_entries_path ON directory_entries(path);
            "#,
        )?;

        let version: i64 = conn.query_row("PRAGMA user_version", [], |row| row.get(0))?;
        if version < SCHEMA_VERSION {
            conn.execute_batch(&format!("PRAGMA user_version = {SCHEMA_VERSION};"))?;
            debug!(version = SCHEMA_VERSION, "Catalog schema initialized");
        }

        Ok(())
    }

    fn lock(&self) -> Result<MutexGuard<'_, Connection>, CatalogError> {
        self.conn
            .lock()
            .map_err(|_| CatalogError::Internal("catalog connection lock poisoned".to_string()))
    }

    fn row_to_catalog(row: &rusqlite::Row) -> rusqlite::Result<Catalog> {
        let entry_count: i64 = row.get(5)?;
        Ok(Catalog {
            id: row.get(0)?,
            identity_key: row.get(1)?,
            display_name: row.get(2)?,
            source_path: row.get(3)?,
            scanned_at: parse_timestamp(row, 4)?,
            entry_count: entry_count.max(0) as u64,
            created_at: parse_timestamp(row, 6)?,
        })
    }
}

const CATALOG_COLUMNS: &str =
    "id, identity_key, display_name, source_path, scanned_at, entry_count, created_at";

/// Size of the database file plus its write-ahead log.
fn on_disk_size(path: &Path) -> u64 {
    let mut wal = path.as_os_str().to_owned();
    wal.push("-wal");
    [path.to_path_buf(), PathBuf::from(wal)]
        .iter()
        .filter_map(|p| std::fs::metadata(p).ok())
        .map(|m| m.len())
        .sum()
}

/// Fixed-width RFC 3339 so text ordering in SQL matches chronological ordering.
fn format_timestamp(dt: &DateTime<Utc>) -> String {
    dt.to_rfc3339_opts(SecondsFormat::Micros, true)
}

fn parse_timestamp(row: &rusqlite::Row, idx: usize) -> rusqlite::Result<DateTime<Utc>> {
    let raw: String = row.get(idx)?;
    DateTime::parse_from_rfc3339(&raw)
        .map(|dt| dt.with_timezone(&Utc))
        .map_err(|e| {
            rusqlite::Error::FromSqlConversionFailure(idx, rusqlite::types::Type::Text, Box::new(e))
        })
}

impl CatalogStore for SqliteCatalogStore {
    fn upsert_catalog(
        &self,
        identity_key: &str,
        display_name: Option<&str>,
        source_path: &str,
        paths: &[String],
    ) -> Result<CatalogId, CatalogError> {
        let mut conn = self.lock()?;
        let now = Utc::now();
        let now_str = format_timestamp(&now);
        let label = display_name.map(str::trim).filter(|name| !name.is_empty());
        let entry_count = paths.len() as i64;

        // Dropping the transaction without commit rolls everything back.
        let tx = conn.transaction()?;

        let existing: Option<CatalogId> = tx
            .query_row(
                "SELECT id FROM catalogs WHERE identity_key = ?1",
                params![identity_key],
                |row| row.get(0),
            )
            .optional()?;

        let catalog_id = match existing {
            Some(id) => {
                let removed = tx.execute(
                    "DELETE FROM directory_entries WHERE catalog_id = ?1",
                    params![id],
                )?;
                tx.execute(
                    "UPDATE catalogs
                     SET display_name = COALESCE(?1, display_name),
                         source_path = ?2,
                         scanned_at = ?3,
                         entry_count = ?4
                     WHERE id = ?5",
                    params![label, source_path, &now_str, entry_count, id],
                )?;
                debug!(identity_key, catalog_id = id, removed, "Replacing catalog snapshot");
                id
            }
            None => {
                let name = label
                    .map(str::to_string)
                    .unwrap_or_else(|| default_display_name(&now));
                tx.execute(
                    "INSERT INTO catalogs (identity_key, display_name, source_path, scanned_at, entry_count, created_at)
                     VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
                    params![identity_key, &name, source_path, &now_str, entry_count, &now_str],
                )?;
                tx.last_insert_rowid()
            }
        };

        {
            let mut stmt = tx.prepare_cached(
                "INSERT INTO directory_entries (catalog_id, path) VALUES (?1, ?2)",
            )?;
            for path in paths {
                stmt.execute(params![catalog_id, path])?;
            }
        }

        tx.commit()?;

        if existing.is_some() {
            info!(identity_key, catalog_id, entries = paths.len(), "Catalog updated");
        } else {
            info!(identity_key, catalog_id, entries = paths.len(), "Catalog created");
        }

        Ok(catalog_id)
    }

    fn get_catalog_by_identity(&self, identity_key: &str) -> Result<Catalog, CatalogError> {
        let conn = self.lock()?;

        conn.query_row(
            &format!("SELECT {CATALOG_COLUMNS} FROM catalogs WHERE identity_key = ?1"),
            params![identity_key],
            Self::row_to_catalog,
        )
        .optional()?
        .ok_or_else(|| CatalogError::NotFound(identity_key.to_string()))
    }

    fn get_catalog_by_id(&self, id: CatalogId) -> Result<Catalog, CatalogError> {
        let conn = self.lock()?;

        conn.query_row(
            &format!("SELECT {CATALOG_COLUMNS} FROM catalogs WHERE id = ?1"),
            params![id],
            Self::row_to_catalog,
        )
        .optional()?
        .ok_or_else(|| CatalogError::NotFound(format!("catalog #{id}")))
    }

    fn list_catalogs(&self) -> Result<Vec<Catalog>, CatalogError> {
        let conn = self.lock()?;

        let mut stmt = conn.prepare(&format!(
            "SELECT {CATALOG_COLUMNS} FROM catalogs ORDER BY scanned_at DESC, id DESC"
        ))?;
        let catalogs = stmt
            .query_map([], Self::row_to_catalog)?
            .collect::<Result<Vec<_>, _>>()?;

        debug!(count = catalogs.len(), "Listed catalogs");
        Ok(catalogs)
    }

    fn list_directory_entries(
        &self,
        catalog_id: CatalogId,
        limit: Option<usize>,
    ) -> Result<Vec<String>, CatalogError> {
        let conn = self.lock()?;
        // SQLite reads a negative LIMIT as unbounded.
        let limit = limit.map_or(-1, |l| i64::try_from(l).unwrap_or(i64::MAX));

        let mut stmt = conn.prepare_cached(
            "SELECT path FROM directory_entries WHERE catalog_id = ?1 ORDER BY path, id LIMIT ?2",
        )?;
        let paths = stmt
            .query_map(params![catalog_id, limit], |row| row.get(0))?
            .collect::<Result<Vec<String>, _>>()?;

        Ok(paths)
    }

    fn search_directories(&self, term: &str) -> Result<Vec<DirectoryMatch>, CatalogError> {
        let term = term.trim();
        if term.chars().count() < MIN_SEARCH_TERM_LEN {
            debug!(term, "Search term too short, skipping");
            return Ok(Vec::new());
        }

        let conn = self.lock()?;
        let needle = term.to_lowercase();

        let mut stmt = conn.prepare(
            "SELECT c.identity_key, c.display_name, c.source_path, d.path, c.scanned_at
             FROM directory_entries d
             JOIN catalogs c ON c.id = d.catalog_id
             WHERE instr(fold_case(d.path), ?1) > 0
             ORDER BY c.display_name, d.path, c.id",
        )?;
        let matches = stmt
            .query_map(params![needle], |row| {
                Ok(DirectoryMatch {
                    identity_key: row.get(0)?,
                    display_name: row.get(1)?,
                    source_path: row.get(2)?,
                    path: row.get(3)?,
                    scanned_at: parse_timestamp(row, 4)?,
                })
            })?
            .collect::<Result<Vec<_>, _>>()?;

        debug!(term, results = matches.len(), "Directory search");
        Ok(matches)
    }

    fn delete_catalog(&self, identity_key: &str) -> Result<bool, CatalogError> {
        let mut conn = self.lock()?;
        let tx = conn.transaction()?;

        // Explicit as well as cascaded; foreign_keys is per-connection.
        tx.execute(
            "DELETE FROM directory_entries
             WHERE catalog_id IN (SELECT id FROM catalogs WHERE identity_key = ?1)",
            params![identity_key],
        )?;
        let rows_affected = tx.execute(
            "DELETE FROM catalogs WHERE identity_key = ?1",
            params![identity_key],
        )?;

        tx.commit()?;

        if rows_affected == 0 {
            debug!(identity_key, "Delete requested for unknown catalog");
            return Ok(false);
        }

        info!(identity_key, "Catalog deleted");
        Ok(true)
    }

    fn rename_catalog(
        &self,
        identity_key: &str,
        new_display_name: &str,
    ) -> Result<bool, CatalogError> {
        let conn = self.lock()?;

        let rows_affected = conn.execute(
            "UPDATE catalogs SET display_name = ?1 WHERE identity_key = ?2",
            params![new_display_name, identity_key],
        )?;

        if rows_affected > 0 {
            info!(identity_key, new_display_name, "Catalog renamed");
        }
        Ok(rows_affected > 0)
    }

    fn stats(&self) -> Result<CatalogStats, CatalogError> {
        let conn = self.lock()?;

        let total_catalogs: i64 =
            conn.query_row("SELECT COUNT(*) FROM catalogs", [], |row| row.get(0))?;

        let total_entries: i64 =
            conn.query_row("SELECT COUNT(*) FROM directory_entries", [], |row| {
                row.get(0)
            })?;

        let latest_scan_at: Option<DateTime<Utc>> = conn
            .query_row("SELECT MAX(scanned_at) FROM catalogs", [], |row| {
                row.get::<_, Option<String>>(0)
            })?
            .map(|raw| {
                DateTime::parse_from_rfc3339(&raw)
                    .map(|dt| dt.with_timezone(&Utc))
                    .map_err(|e| {
                        CatalogError::Database(format!("invalid scanned_at {raw:?}: {e}"))
                    })
            })
            .transpose()?;

        let database_size_bytes = self.path.as_deref().map(on_disk_size).unwrap_or(0);

        Ok(CatalogStats {
            total_catalogs: total_catalogs as u64,
            total_entries: total_entries as u64,
            latest_scan_at,
            database_size_bytes,
        })
    }
}
