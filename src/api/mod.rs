// ==========================================
// TeisterMask 任务管理系统 - API 层
// ==========================================
// 职责: 提供业务 API 接口,供命令行调用
// ==========================================

pub mod config_api;
pub mod error;
pub mod export_api;
pub mod import_api;

// 重导出核心类型
pub use config_api::ConfigApi;
pub use error::{ApiError, ApiResult};
pub use export_api::{parse_cutoff_date, ExportApi};
pub use import_api::ImportApi;
