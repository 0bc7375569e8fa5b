// ==========================================
// TeisterMask 任务管理系统 - 配置管理器
// ==========================================
// 职责: 配置加载、查询、覆写管理
// 存储: config_kv 表 (key-value)
// ==========================================

use crate::config::export_config_trait::ExportConfigReader;
use rusqlite::{params, Connection};
use serde_json::json;
use std::collections::BTreeMap;
use std::error::Error;
use std::sync::{Arc, Mutex};

/// 工作量导出默认截取人数
pub const DEFAULT_BUSIEST_EMPLOYEES_LIMIT: usize = 10;

// ==========================================
// ConfigManager - 配置管理器
// ==========================================
pub struct ConfigManager {
    conn: Arc<Mutex<Connection>>,
}

impl ConfigManager {
    /// 从已有连接创建 ConfigManager
    ///
    /// 说明：为保证连接行为一致，会对传入连接再次应用统一 PRAGMA（幂等）。
    pub fn from_connection(conn: Arc<Mutex<Connection>>) -> Result<Self, Box<dyn Error>> {
        {
            let conn_guard = conn.lock().map_err(|e| format!("锁获取失败: {}", e))?;
            crate::db::configure_sqlite_connection(&conn_guard)?;
        }

        Ok(Self { conn })
    }

    /// 从 config_kv 表读取配置值
    ///
    /// # 返回
    /// - Some(String): 配置值
    /// - None: 配置不存在
    pub fn get_config_value(&self, key: &str) -> Result<Option<String>, Box<dyn Error>> {
        let conn = self.conn.lock().map_err(|e| format!("锁获取失败: {}", e))?;

        let result = conn.query_row(
            "SELECT value FROM config_kv WHERE key = ?1",
            params![key],
            |row| row.get::<_, String>(0),
        );

        match result {
            Ok(value) => Ok(Some(value)),
            Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
            Err(e) => Err(Box::new(e)),
        }
    }

    /// 从 config_kv 表读取配置值，带默认值
    fn get_config_or_default(&self, key: &str, default: &str) -> Result<String, Box<dyn Error>> {
        Ok(self.get_config_value(key)?.unwrap_or_else(|| default.to_string()))
    }

    /// 写入配置值（UPSERT）
    pub fn set_config_value(&self, key: &str, value: &str) -> Result<(), Box<dyn Error>> {
        let key = key.trim();
        if key.is_empty() {
            return Err("配置键不能为空".into());
        }

        let conn = self.conn.lock().map_err(|e| format!("锁获取失败: {}", e))?;
        conn.execute(
            "INSERT INTO config_kv (key, value) VALUES (?1, ?2)
             ON CONFLICT(key) DO UPDATE SET value = ?2, updated_at = datetime('now')",
            params![key, value],
        )?;

        tracing::info!(config_key = key, value = value, "配置已更新");
        Ok(())
    }

    /// 获取所有配置的快照（JSON格式，按 key 排序）
    pub fn get_config_snapshot(&self) -> Result<String, Box<dyn Error>> {
        let conn = self.conn.lock().map_err(|e| format!("锁获取失败: {}", e))?;

        let mut stmt = conn.prepare("SELECT key, value FROM config_kv ORDER BY key")?;
        let rows = stmt.query_map([], |row| {
            Ok((row.get::<_, String>(0)?, row.get::<_, String>(1)?))
        })?;

        let mut config_map: BTreeMap<String, String> = BTreeMap::new();
        for row in rows {
            let (key, value) = row?;
            config_map.insert(key, value);
        }

        Ok(serde_json::to_string_pretty(&json!(config_map))?)
    }
}

// ==========================================
// ExportConfigReader Trait 实现
// ==========================================
impl ExportConfigReader for ConfigManager {
    fn get_busiest_employees_limit(&self) -> Result<usize, Box<dyn Error>> {
        let default = DEFAULT_BUSIEST_EMPLOYEES_LIMIT.to_string();
        let value = self.get_config_or_default(config_keys::BUSIEST_EMPLOYEES_LIMIT, &default)?;

        match value.trim().parse::<usize>() {
            Ok(limit) if limit > 0 => Ok(limit),
            _ => {
                tracing::warn!(
                    config_key = config_keys::BUSIEST_EMPLOYEES_LIMIT,
                    raw_value = %value,
                    "工作量导出人数配置非法，使用默认值"
                );
                Ok(DEFAULT_BUSIEST_EMPLOYEES_LIMIT)
            }
        }
    }
}

// ==========================================
// 配置键常量
// ==========================================
pub mod config_keys {
    // 导出
    pub const BUSIEST_EMPLOYEES_LIMIT: &str = "export.busiest_employees.limit";
}

#[cfg(test)]
mod tests {
    use super::*;

    fn setup_manager() -> ConfigManager {
        let conn = crate::db::open_in_memory().unwrap();
        ConfigManager::from_connection(Arc::new(Mutex::new(conn))).unwrap()
    }

    #[test]
    fn test_busiest_limit_default() {
        let manager = setup_manager();
        assert_eq!(manager.get_busiest_employees_limit().unwrap(), 10);
    }

    #[test]
    fn test_busiest_limit_override_and_invalid_value() {
        let manager = setup_manager();

        manager.set_config_value(config_keys::BUSIEST_EMPLOYEES_LIMIT, "3").unwrap();
        assert_eq!(manager.get_busiest_employees_limit().unwrap(), 3);

        manager.set_config_value(config_keys::BUSIEST_EMPLOYEES_LIMIT, "abc").unwrap();
        assert_eq!(manager.get_busiest_employees_limit().unwrap(), 10);

        manager.set_config_value(config_keys::BUSIEST_EMPLOYEES_LIMIT, "0").unwrap();
        assert_eq!(manager.get_busiest_employees_limit().unwrap(), 10);
    }

    #[test]
    fn test_config_snapshot_and_empty_key() {
        let manager = setup_manager();
        manager.set_config_value("b.key", "2").unwrap();
        manager.set_config_value("a.key", "1").unwrap();

        let snapshot: BTreeMap<String, String> =
            serde_json::from_str(&manager.get_config_snapshot().unwrap()).unwrap();
        assert_eq!(snapshot.len(), 2);
        assert_eq!(snapshot["a.key"], "1");

        assert!(manager.set_config_value("  ", "x").is_err());
        assert_eq!(manager.get_config_value("missing").unwrap(), None);
    }
}
