// ==========================================
// TeisterMask 任务管理系统 - 员工导入流水线
// ==========================================
// 流程: 解析 → 员工校验 → 任务引用去重 → 引用存在性校验 → 暂存 → 单次提交
// 说明: 任务 ID 集合在批次开始时读取一次，之后不再访问存储
// ==========================================

use crate::domain::employee::NewEmployee;
use crate::domain::import::{ImportBatch, ImportReport};
use crate::domain::types::ImportKind;
use crate::importer::document_parser::{parse_employee_document, read_document};
use crate::importer::error::ImportResult;
use crate::importer::field_validator::FieldValidator;
use crate::importer::records::EmployeeImportRecord;
use crate::repository::EmployeeRepository;
use chrono::Utc;
use std::collections::HashSet;
use std::path::Path;
use std::time::Instant;
use tracing::{debug, info, instrument};
use uuid::Uuid;

pub struct EmployeeImporter<R>
where
    R: EmployeeRepository,
{
    repo: R,
}

impl<R> EmployeeImporter<R>
where
    R: EmployeeRepository,
{
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    pub fn import_file(&self, path: &Path) -> ImportResult<ImportReport> {
        let json = read_document(path)?;
        self.import_json(&json)
    }

    pub fn import_json(&self, json: &str) -> ImportResult<ImportReport> {
        let records = parse_employee_document(json)?;
        self.import(&records)
    }

    /// 处理已解析的员工记录并一次性提交
    #[instrument(skip(self, records), fields(total_records = records.len()))]
    pub fn import(&self, records: &[EmployeeImportRecord]) -> ImportResult<ImportReport> {
        let start_time = Instant::now();
        let batch_id = Uuid::new_v4().to_string();
        info!(batch_id = %batch_id, "开始导入员工");

        // 任务索引快照
        let known_task_ids = self.repo.existing_task_ids()?;
        debug!(known_tasks = known_task_ids.len(), "任务索引加载完成");

        let mut report = ImportReport::new();
        let mut staged: Vec<NewEmployee> = Vec::with_capacity(records.len());

        for (idx, record) in records.iter().enumerate() {
            if !record.validate() {
                debug!(record_no = idx + 1, reason = "员工字段校验失败", "员工被拒绝");
                report.reject();
                continue;
            }

            let mut employee = NewEmployee::new(
                record.username.clone().unwrap_or_default(),
                record.email.clone().unwrap_or_default(),
                record.phone.clone().unwrap_or_default(),
            );

            let mut seen = HashSet::new();
            for &task_id in record.task_ids() {
                // 同一员工内重复 ID 只计一次
                if !seen.insert(task_id) {
                    continue;
                }
                if !known_task_ids.contains(&task_id) {
                    debug!(
                        username = %employee.username,
                        task_id = task_id,
                        reason = "任务不存在",
                        "任务引用被拒绝"
                    );
                    report.reject();
                    continue;
                }
                employee.task_ids.push(task_id);
            }

            report.employee_imported(&employee.username, employee.task_ids.len());
            staged.push(employee);
        }

        let batch = ImportBatch {
            batch_id: batch_id.clone(),
            kind: ImportKind::Employees,
            total_records: records.len() as i64,
            accepted_records: report.accepted() as i64,
            rejected_lines: report.rejected() as i64,
            imported_at: Utc::now(),
            elapsed_ms: start_time.elapsed().as_millis() as i64,
        };

        let committed = self.repo.commit_import(&batch, &staged)?;

        info!(
            batch_id = %batch_id,
            committed = committed,
            rejected_lines = report.rejected(),
            elapsed_ms = batch.elapsed_ms,
            "员工导入完成"
        );

        Ok(report)
    }
}
