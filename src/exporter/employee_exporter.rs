// ==========================================
// TeisterMask 任务管理系统 - 员工工作量导出流水线
// ==========================================
// 过滤: 只保留开始日期 >= 截止参数的任务，无剩余任务的员工不导出
// 排序: 任务按截止日期降序，再按名称升序；员工按任务数降序，再按用户名升序（名称忽略大小写）
// 截取: 前 N 名（N 来自配置，默认 10）
// ==========================================

use crate::config::ExportConfigReader;
use crate::domain::employee::Employee;
use crate::domain::project::Task;
use crate::exporter::dto::{EmployeeWorkloadNode, WorkloadTaskNode};
use crate::exporter::error::{ExportError, ExportResult};
use crate::exporter::name_order::compare_names;
use crate::importer::date_parser::format_short_date;
use crate::repository::{EmployeeRepository, WorkloadSnapshot};
use chrono::NaiveDate;
use tracing::{info, instrument};

/// 过滤、排序、截取员工工作量（纯函数）
pub fn build_workload_report(
    snapshot: &WorkloadSnapshot,
    cutoff: NaiveDate,
    limit: usize,
) -> Vec<EmployeeWorkloadNode> {
    let mut ranked: Vec<(&Employee, Vec<&Task>)> = snapshot
        .employees
        .iter()
        .filter_map(|employee| {
            let mut tasks: Vec<&Task> = employee
                .task_ids
                .iter()
                .filter_map(|id| snapshot.tasks.get(id))
                .filter(|task| task.open_date >= cutoff)
                .collect();
            if tasks.is_empty() {
                return None;
            }
            tasks.sort_by(|a, b| {
                b.due_date
                    .cmp(&a.due_date)
                    .then_with(|| compare_names(&a.name, &b.name))
            });
            Some((employee, tasks))
        })
        .collect();

    ranked.sort_by(|(ea, ta), (eb, tb)| {
        tb.len()
            .cmp(&ta.len())
            .then_with(|| compare_names(&ea.username, &eb.username))
    });

    ranked
        .into_iter()
        .take(limit)
        .map(|(employee, tasks)| EmployeeWorkloadNode {
            username: employee.username.clone(),
            tasks: tasks
                .into_iter()
                .map(|task| WorkloadTaskNode {
                    task_name: task.name.clone(),
                    open_date: format_short_date(task.open_date),
                    due_date: format_short_date(task.due_date),
                    label_type: task.label_type.to_string(),
                    execution_type: task.execution_type.to_string(),
                })
                .collect(),
        })
        .collect()
}

// ==========================================
// EmployeeWorkloadExporter
// ==========================================
pub struct EmployeeWorkloadExporter<R, C>
where
    R: EmployeeRepository,
    C: ExportConfigReader,
{
    repo: R,
    config: C,
}

impl<R, C> EmployeeWorkloadExporter<R, C>
where
    R: EmployeeRepository,
    C: ExportConfigReader,
{
    pub fn new(repo: R, config: C) -> Self {
        Self { repo, config }
    }

    /// 导出最忙员工（缩进 JSON 数组）
    #[instrument(skip(self), fields(cutoff = %cutoff))]
    pub fn export_json(&self, cutoff: NaiveDate) -> ExportResult<String> {
        let limit = self
            .config
            .get_busiest_employees_limit()
            .map_err(|e| ExportError::ConfigError(e.to_string()))?;

        let snapshot = self.repo.load_workload_snapshot()?;
        let nodes = build_workload_report(&snapshot, cutoff, limit);
        info!(
            stored_employees = snapshot.employees.len(),
            exported_employees = nodes.len(),
            limit = limit,
            "员工工作量导出完成"
        );

        Ok(serde_json::to_string_pretty(&nodes)?)
    }
}
