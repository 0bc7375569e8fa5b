// ==========================================
// TeisterMask 任务管理系统 - 导出 API
// ==========================================
// 职责: 封装项目导出与员工工作量导出
// ==========================================

use crate::api::error::{ApiError, ApiResult};
use crate::config::ConfigManager;
use crate::exporter::{EmployeeWorkloadExporter, ProjectExporter};
use crate::importer::StrictDateParser;
use crate::repository::{EmployeeRepositoryImpl, ProjectRepositoryImpl};
use chrono::NaiveDate;
use rusqlite::Connection;
use std::sync::{Arc, Mutex};

/// 导出 API
pub struct ExportApi {
    conn: Arc<Mutex<Connection>>,
    config_manager: Arc<ConfigManager>,
}

impl ExportApi {
    pub fn new(conn: Arc<Mutex<Connection>>, config_manager: Arc<ConfigManager>) -> Self {
        Self {
            conn,
            config_manager,
        }
    }

    /// 导出含任务的项目（XML）
    pub fn export_projects_with_tasks(&self) -> ApiResult<String> {
        let exporter = ProjectExporter::new(ProjectRepositoryImpl::from_connection(self.conn.clone()));
        Ok(exporter.export_xml()?)
    }

    /// 导出最忙员工（JSON）
    ///
    /// # 参数
    /// - cutoff: 只统计开始日期不早于该日期的任务
    pub fn export_busiest_employees(&self, cutoff: NaiveDate) -> ApiResult<String> {
        let exporter = EmployeeWorkloadExporter::new(
            EmployeeRepositoryImpl::from_connection(self.conn.clone()),
            self.config_manager.clone(),
        );
        Ok(exporter.export_json(cutoff)?)
    }

    /// 同上，截止日期为 dd/mm/yyyy 文本
    pub fn export_busiest_employees_from_str(&self, cutoff: &str) -> ApiResult<String> {
        let cutoff = parse_cutoff_date(cutoff)?;
        self.export_busiest_employees(cutoff)
    }
}

/// 解析截止日期（与导入文档同一严格格式）
pub fn parse_cutoff_date(text: &str) -> ApiResult<NaiveDate> {
    StrictDateParser::new()
        .parse(text.trim())
        .ok_or_else(|| ApiError::InvalidInput(format!("日期格式应为 dd/mm/yyyy: {}", text)))
}
