//! SQLite persistence layer.
//!
//! RULE: Only store.rs talks to the database. The engine is pure and never
//! sees record identity or timestamps — both are generated here.

use chrono::{DateTime, SecondsFormat, Utc};
use rusqlite::{params, Connection};
use uuid::Uuid;

use crate::{
    engine::CalculationResult,
    error::RoiResult,
    input::CalculationInput,
    types::{RecordId, RecordSource},
};

/// A persisted calculation: identity and timestamp plus the input/result
/// pair as submitted.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct CalculationRecord {
    pub record_id: RecordId,
    pub created_at: DateTime<Utc>,
    pub source: RecordSource,
    pub input: CalculationInput,
    pub result: CalculationResult,
}

pub struct RoiStore {
    conn: Connection,
}

impl RoiStore {
    /// Open (or create) the history database at `path`.
    pub fn open(path: &str) -> RoiResult<Self> {
        let conn = Connection::open(path)?;
        // WAL mode: better concurrent read performance.
        conn.execute_batch("PRAGMA journal_mode=WAL;")?;
        conn.execute_batch("PRAGMA foreign_keys=ON;")?;
        Ok(Self { conn })
    }

    /// Open an in-memory database (used in tests).
    pub fn in_memory() -> RoiResult<Self> {
        let conn = Connection::open_in_memory()?;
        conn.execute_batch("PRAGMA foreign_keys=ON;")?;
        Ok(Self { conn })
    }

    /// Apply all schema migrations in order.
    pub fn migrate(&self) -> RoiResult<()> {
        self.conn
            .execute_batch(include_str!("../../migrations/001_calculations.sql"))?;
        Ok(())
    }

    /// Persist one calculation. Generates the record id and timestamp;
    /// a failed insert leaves nothing behind and is not retried (the
    /// insert is not idempotent, so a blind retry risks duplicate rows).
    pub fn save_calculation(
        &self,
        input: &CalculationInput,
        result: &CalculationResult,
        source: RecordSource,
    ) -> RoiResult<RecordId> {
        let record_id: RecordId = Uuid::new_v4().to_string();
        // Fixed-width UTC timestamps so lexicographic order is chronological.
        let created_at = Utc::now().to_rfc3339_opts(SecondsFormat::Micros, true);
        self.conn.execute(
            "INSERT INTO calculations (record_id, created_at, source, input_json, result_json)
             VALUES (?1, ?2, ?3, ?4, ?5)",
            params![
                record_id,
                created_at,
                source.as_str(),
                serde_json::to_string(input)?,
                serde_json::to_string(result)?,
            ],
        )?;
        log::debug!("saved calculation {record_id} ({})", source.as_str());
        Ok(record_id)
    }

    /// The most recent calculations, newest first, at most `limit` rows.
    pub fn list_recent(&self, limit: u32) -> RoiResult<Vec<CalculationRecord>> {
        let mut stmt = self.conn.prepare(
            "SELECT record_id, created_at, source, input_json, result_json
             FROM calculations
             ORDER BY created_at DESC, rowid DESC
             LIMIT ?1",
        )?;
        let rows = stmt
            .query_map(params![limit as i64], |row| {
                Ok((
                    row.get::<_, String>(0)?,
                    row.get::<_, String>(1)?,
                    row.get::<_, String>(2)?,
                    row.get::<_, String>(3)?,
                    row.get::<_, String>(4)?,
                ))
            })?
            .collect::<Result<Vec<_>, _>>()?;

        let mut records = Vec::with_capacity(rows.len());
        for (record_id, created_at, source, input_json, result_json) in rows {
            let created_at = DateTime::parse_from_rfc3339(&created_at)
                .map_err(|e| anyhow::anyhow!("bad created_at on record {record_id}: {e}"))?
                .with_timezone(&Utc);
            let source = RecordSource::parse(&source)
                .ok_or_else(|| anyhow::anyhow!("unknown source '{source}' on record {record_id}"))?;
            records.push(CalculationRecord {
                record_id,
                created_at,
                source,
                input: serde_json::from_str(&input_json)?,
                result: serde_json::from_str(&result_json)?,
            });
        }
        Ok(records)
    }

    /// Total number of persisted calculations.
    pub fn count(&self) -> RoiResult<i64> {
        let n = self
            .conn
            .query_row("SELECT COUNT(*) FROM calculations", [], |row| row.get(0))?;
        Ok(n)
    }
}
