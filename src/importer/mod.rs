// ==========================================
// TeisterMask 任务管理系统 - 导入层
// ==========================================
// 职责: 外部文档导入，生成项目/任务/员工数据
// 支持: 项目 XML, 员工 JSON
// ==========================================

// 模块声明
pub mod date_parser;
pub mod document_parser;
pub mod employee_importer;
pub mod error;
pub mod field_validator;
pub mod project_importer;
pub mod records;

// 重导出核心类型
pub use date_parser::{format_short_date, StrictDateParser};
pub use document_parser::{parse_employee_document, parse_project_document};
pub use employee_importer::EmployeeImporter;
pub use error::{ImportError, ImportResult};
pub use field_validator::FieldValidator;
pub use project_importer::ProjectImporter;
pub use records::{EmployeeImportRecord, ProjectImportRecord, TaskImportList, TaskImportRecord};
