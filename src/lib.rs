// ==========================================
// TeisterMask 任务管理系统 - 核心库
// ==========================================
// 技术栈: Rust + SQLite
// 系统定位: 项目/任务/员工数据导入校验 + 报表导出
// ==========================================

// ==========================================
// 模块声明
// ==========================================

// 领域层 - 实体与类型
pub mod domain;

// 数据仓储层 - 数据访问
pub mod repository;

// 导入层 - 外部文档
pub mod importer;

// 导出层 - 报表文档
pub mod exporter;

// 配置层 - 系统配置
pub mod config;

// 数据库基础设施（连接初始化/PRAGMA 统一/建表）
pub mod db;

// 日志系统
pub mod logging;

// API 层 - 业务接口
pub mod api;

// 应用层 - 共享状态组装
pub mod app;

// 命令行定义
pub mod cli;

// ==========================================
// 重导出核心类型
// ==========================================

// 领域类型
pub use domain::types::{ExecutionType, ImportKind, LabelType};

// 领域实体
pub use domain::{
    Employee, ImportBatch, ImportReport, NewEmployee, NewProject, NewTask, Project, Task,
    INVALID_DATA_MESSAGE,
};

// 流水线
pub use exporter::{EmployeeWorkloadExporter, ProjectExporter};
pub use importer::{EmployeeImporter, FieldValidator, ProjectImporter, StrictDateParser};

// API
pub use api::{ApiError, ApiResult, ConfigApi, ExportApi, ImportApi};
pub use app::AppState;

// ==========================================
// 常量定义
// ==========================================

// 系统版本
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
