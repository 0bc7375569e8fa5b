// ==========================================
// TeisterMask 任务管理系统 - 导出层
// ==========================================
// 职责: 只读快照 → 过滤/分组/排序 → 文档文本
// 支持: 项目 XML, 员工工作量 JSON
// ==========================================

pub mod dto;
pub mod employee_exporter;
pub mod error;
pub mod name_order;
pub mod project_exporter;

pub use dto::{EmployeeWorkloadNode, ProjectExportNode, TaskExportNode, WorkloadTaskNode};
pub use employee_exporter::{build_workload_report, EmployeeWorkloadExporter};
pub use error::{ExportError, ExportResult};
pub use name_order::compare_names;
pub use project_exporter::{build_project_report, ProjectExporter};
