// ==========================================
// TeisterMask 任务管理系统 - 领域模型层
// ==========================================
// 职责: 定义领域实体、类型
// 红线: 不含数据访问逻辑,不含导入/导出流程
// ==========================================

pub mod employee;
pub mod import;
pub mod project;
pub mod types;

// 重导出核心类型
pub use employee::{Employee, EmployeeTask, NewEmployee};
pub use import::{ImportBatch, ImportReport, INVALID_DATA_MESSAGE};
pub use project::{NewProject, NewTask, Project, Task};
pub use types::{ExecutionType, ImportKind, LabelType};
