// ==========================================
// TeisterMask 任务管理系统 - 导入 API
// ==========================================
// 职责: 封装项目/员工导入，返回逐行报告文本
// ==========================================

use crate::api::error::{ApiError, ApiResult};
use crate::domain::import::ImportBatch;
use crate::importer::{EmployeeImporter, ProjectImporter};
use crate::repository::{EmployeeRepositoryImpl, ImportBatchRepository, ProjectRepositoryImpl};
use rusqlite::Connection;
use std::path::Path;
use std::sync::{Arc, Mutex};

/// 导入 API
pub struct ImportApi {
    conn: Arc<Mutex<Connection>>,
}

impl ImportApi {
    /// 创建新的 ImportApi 实例（连接需已建表）
    pub fn new(conn: Arc<Mutex<Connection>>) -> Self {
        Self { conn }
    }

    /// 导入项目 XML 文本
    ///
    /// # 返回
    /// - Ok(String): 报告文本（每条记录一行）
    /// - Err(ApiError): 文档无法解析或提交失败
    pub fn import_projects_from_str(&self, xml: &str) -> ApiResult<String> {
        let report = self.project_importer().import_xml(xml)?;
        Ok(report.render())
    }

    /// 导入项目 XML 文件
    pub fn import_projects_from_file(&self, path: &str) -> ApiResult<String> {
        let report = self.project_importer().import_file(Path::new(path))?;
        Ok(report.render())
    }

    /// 导入员工 JSON 文本
    pub fn import_employees_from_str(&self, json: &str) -> ApiResult<String> {
        let report = self.employee_importer().import_json(json)?;
        Ok(report.render())
    }

    /// 导入员工 JSON 文件
    pub fn import_employees_from_file(&self, path: &str) -> ApiResult<String> {
        let report = self.employee_importer().import_file(Path::new(path))?;
        Ok(report.render())
    }

    /// 最近的导入批次（新的在前）
    pub fn list_recent_batches(&self, limit: usize) -> ApiResult<Vec<ImportBatch>> {
        if limit == 0 {
            return Err(ApiError::InvalidInput("limit 必须大于 0".to_string()));
        }
        let repo = ImportBatchRepository::from_connection(self.conn.clone());
        Ok(repo.list_recent(limit)?)
    }

    fn project_importer(&self) -> ProjectImporter<ProjectRepositoryImpl> {
        ProjectImporter::new(ProjectRepositoryImpl::from_connection(self.conn.clone()))
    }

    fn employee_importer(&self) -> EmployeeImporter<EmployeeRepositoryImpl> {
        EmployeeImporter::new(EmployeeRepositoryImpl::from_connection(self.conn.clone()))
    }
}
