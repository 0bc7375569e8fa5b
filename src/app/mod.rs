// ==========================================
// TeisterMask 任务管理系统 - 应用层
// ==========================================
// 职责: 组装共享连接、仓储与 API
// ==========================================

pub mod state;

// 重导出
pub use state::AppState;
pub use crate::config::get_default_db_path;
