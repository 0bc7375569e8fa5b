// ==========================================
// TeisterMask 任务管理系统 - 配置层
// ==========================================
// 职责: 运行期配置管理 + 数据库路径解析
// 存储: config_kv 表
// ==========================================

pub mod config_manager;
pub mod export_config_trait;

// 重导出核心配置管理器
pub use config_manager::{config_keys, ConfigManager, DEFAULT_BUSIEST_EMPLOYEES_LIMIT};
pub use export_config_trait::ExportConfigReader;

/// 数据库路径环境变量
pub const DB_PATH_ENV: &str = "TEISTER_MASK_DB_PATH";

/// 获取默认数据库路径
///
/// 优先级: 环境变量 > 用户数据目录 > 当前目录
pub fn get_default_db_path() -> String {
    use std::path::PathBuf;

    // 允许通过环境变量显式指定 DB 路径（便于调试/测试/CI）
    if let Ok(path) = std::env::var(DB_PATH_ENV) {
        let trimmed = path.trim();
        if !trimmed.is_empty() {
            return trimmed.to_string();
        }
    }

    let mut path = PathBuf::from("./teister_mask.db");

    if let Some(data_dir) = dirs::data_dir() {
        let dir = data_dir.join("teister-mask");
        // 目录创建失败时回退到当前目录
        if std::fs::create_dir_all(&dir).is_ok() {
            path = dir.join("teister_mask.db");
        }
    }

    path.to_string_lossy().to_string()
}
