// ==========================================
// TeisterMask 任务管理系统 - 导入批次仓储
// ==========================================
// 职责: import_batch 表写入（随批次事务）与查询
// ==========================================

use crate::domain::import::ImportBatch;
use crate::domain::types::ImportKind;
use crate::repository::error::{RepositoryError, RepositoryResult};
use chrono::{DateTime, SecondsFormat, Utc};
use rusqlite::types::Type;
use rusqlite::{params, Connection, Result as SqliteResult, Transaction};
use std::sync::{Arc, Mutex};

/// 在批次事务中写入批次记录
pub(crate) fn insert_batch_tx(tx: &Transaction, batch: &ImportBatch) -> SqliteResult<()> {
    tx.execute(
        r#"
        INSERT INTO import_batch (
            batch_id, kind, total_records, accepted_records,
            rejected_lines, imported_at, elapsed_ms
        ) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)
        "#,
        params![
            batch.batch_id,
            batch.kind.to_string(),
            batch.total_records,
            batch.accepted_records,
            batch.rejected_lines,
            batch.imported_at.to_rfc3339_opts(SecondsFormat::Micros, true),
            batch.elapsed_ms,
        ],
    )?;
    Ok(())
}

// ==========================================
// ImportBatchRepository - 导入批次查询
// ==========================================
pub struct ImportBatchRepository {
    conn: Arc<Mutex<Connection>>,
}

impl ImportBatchRepository {
    pub fn from_connection(conn: Arc<Mutex<Connection>>) -> Self {
        Self { conn }
    }

    fn get_conn(&self) -> RepositoryResult<std::sync::MutexGuard<'_, Connection>> {
        self.conn
            .lock()
            .map_err(|e| RepositoryError::LockError(e.to_string()))
    }

    /// 查询最近的导入批次（最新在前）
    pub fn list_recent(&self, limit: usize) -> RepositoryResult<Vec<ImportBatch>> {
        let conn = self.get_conn()?;
        let mut stmt = conn.prepare(
            r#"
            SELECT batch_id, kind, total_records, accepted_records,
                   rejected_lines, imported_at, elapsed_ms
            FROM import_batch
            ORDER BY imported_at DESC, rowid DESC
            LIMIT ?1
            "#,
        )?;

        let batches = stmt
            .query_map(params![limit as i64], |row| {
                let kind_raw: String = row.get(1)?;
                let kind = ImportKind::from_db_str(&kind_raw).ok_or_else(|| {
                    rusqlite::Error::FromSqlConversionFailure(
                        1,
                        Type::Text,
                        format!("未知导入类型: {}", kind_raw).into(),
                    )
                })?;
                let imported_at_raw: String = row.get(5)?;
                let imported_at = DateTime::parse_from_rfc3339(&imported_at_raw)
                    .map(|dt| dt.with_timezone(&Utc))
                    .map_err(|e| {
                        rusqlite::Error::FromSqlConversionFailure(5, Type::Text, Box::new(e))
                    })?;

                Ok(ImportBatch {
                    batch_id: row.get(0)?,
                    kind,
                    total_records: row.get(2)?,
                    accepted_records: row.get(3)?,
                    rejected_lines: row.get(4)?,
                    imported_at,
                    elapsed_ms: row.get(6)?,
                })
            })?
            .collect::<SqliteResult<Vec<_>>>()?;

        Ok(batches)
    }
}
