// ==========================================
// TeisterMask 任务管理系统 - 项目导入流水线
// ==========================================
// 流程: 解析 → 项目校验 → 任务逐条校验 → 暂存 → 单次提交
// 红线: 单条记录失败只输出 "Invalid data!"，不中断批次
// 红线: 任务被拒绝不影响所属项目，项目无条件暂存
// ==========================================

use crate::domain::import::{ImportBatch, ImportReport};
use crate::domain::project::{NewProject, NewTask};
use crate::domain::types::{ExecutionType, ImportKind, LabelType};
use crate::importer::date_parser::StrictDateParser;
use crate::importer::document_parser::{parse_project_document, read_document};
use crate::importer::error::ImportResult;
use crate::importer::field_validator::FieldValidator;
use crate::importer::records::{ProjectImportRecord, TaskImportRecord};
use crate::repository::ProjectRepository;
use chrono::Utc;
use std::path::Path;
use std::time::Instant;
use tracing::{debug, info, instrument};
use uuid::Uuid;

// ==========================================
// ProjectImporter
// ==========================================
pub struct ProjectImporter<R>
where
    R: ProjectRepository,
{
    repo: R,
    date_parser: StrictDateParser,
}

impl<R> ProjectImporter<R>
where
    R: ProjectRepository,
{
    pub fn new(repo: R) -> Self {
        Self {
            repo,
            date_parser: StrictDateParser::new(),
        }
    }

    /// 从文件导入项目 XML
    pub fn import_file(&self, path: &Path) -> ImportResult<ImportReport> {
        let xml = read_document(path)?;
        self.import_xml(&xml)
    }

    /// 从 XML 文本导入
    ///
    /// 文档无法反序列化时直接返回 Err，不暂存也不提交任何记录。
    pub fn import_xml(&self, xml: &str) -> ImportResult<ImportReport> {
        let records = parse_project_document(xml)?;
        self.import(&records)
    }

    /// 处理已解析的项目记录并一次性提交
    ///
    /// # 返回
    /// - Ok(ImportReport): 每条项目/任务记录对应一行
    /// - Err: 仅在提交失败时返回
    #[instrument(skip(self, records), fields(total_records = records.len()))]
    pub fn import(&self, records: &[ProjectImportRecord]) -> ImportResult<ImportReport> {
        let start_time = Instant::now();
        let batch_id = Uuid::new_v4().to_string();
        info!(batch_id = %batch_id, "开始导入项目");

        let mut report = ImportReport::new();
        let mut staged: Vec<NewProject> = Vec::with_capacity(records.len());

        for (idx, record) in records.iter().enumerate() {
            if let Some(project) = self.stage_project(idx + 1, record, &mut report) {
                staged.push(project);
            }
        }

        let batch = ImportBatch {
            batch_id: batch_id.clone(),
            kind: ImportKind::Projects,
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
            "项目导入完成"
        );

        Ok(report)
    }

    /// 校验单个项目并暂存其合法任务
    ///
    /// 项目本身被拒绝时返回 None（已写入报告行）。
    fn stage_project(
        &self,
        record_no: usize,
        record: &ProjectImportRecord,
        report: &mut ImportReport,
    ) -> Option<NewProject> {
        // 字段校验与开始日期解析失败效果相同
        let open_date = if record.validate() {
            self.date_parser.parse_optional(record.open_date.as_deref())
        } else {
            None
        };
        let Some(open_date) = open_date else {
            debug!(record_no = record_no, reason = "项目字段或开始日期非法", "项目被拒绝");
            report.reject();
            return None;
        };

        // 截止日期缺失或格式错误均视为无截止日期
        let due_date = self.date_parser.parse_optional(record.due_date.as_deref());
        let name = record.name.clone().unwrap_or_default();
        let mut project = NewProject::new(name, open_date, due_date);

        for (task_idx, task_record) in record.tasks.items.iter().enumerate() {
            match self.stage_task(&project, task_record) {
                Ok(task) => project.tasks.push(task),
                Err(reason) => {
                    debug!(
                        project = %project.name,
                        task_no = task_idx + 1,
                        reason = reason,
                        "任务被拒绝"
                    );
                    report.reject();
                }
            }
        }

        report.project_imported(&project.name, project.tasks.len());
        Some(project)
    }

    fn stage_task(
        &self,
        project: &NewProject,
        record: &TaskImportRecord,
    ) -> Result<NewTask, &'static str> {
        if !record.validate() {
            return Err("任务字段校验失败");
        }

        let open_date = self
            .date_parser
            .parse_optional(record.open_date.as_deref())
            .ok_or("任务开始日期格式错误")?;
        let due_date = self
            .date_parser
            .parse_optional(record.due_date.as_deref())
            .ok_or("任务截止日期格式错误")?;

        if !project.accepts_task_dates(open_date, due_date) {
            return Err("任务日期超出项目日期范围");
        }

        let label_type = record
            .label_type
            .and_then(LabelType::from_code)
            .ok_or("标签类型代码非法")?;
        let execution_type = record
            .execution_type
            .and_then(ExecutionType::from_code)
            .ok_or("执行类型代码非法")?;

        Ok(NewTask {
            name: record.name.clone().unwrap_or_default(),
            open_date,
            due_date,
            label_type,
            execution_type,
        })
    }
}
