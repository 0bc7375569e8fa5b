// ==========================================
// TeisterMask 任务管理系统 - 数据仓储层
// ==========================================
// 红线: Repository 不含业务逻辑
// ==========================================
// 职责: 提供数据访问接口,屏蔽数据库细节
// 约束: 所有查询使用参数化,防止 SQL 注入
// ==========================================

pub mod employee_repo;
pub mod error;
pub mod import_batch_repo;
pub mod project_repo;

// 重导出核心仓储
pub use employee_repo::{EmployeeRepository, EmployeeRepositoryImpl, WorkloadSnapshot};
pub use error::{RepositoryError, RepositoryResult};
pub use import_batch_repo::ImportBatchRepository;
pub use project_repo::{ProjectRepository, ProjectRepositoryImpl};
