// ==========================================
// TeisterMask 任务管理系统 - 导出文档节点
// ==========================================
// 职责: 导出文档的序列化结构（字段名即输出名）
// ==========================================

use serde::Serialize;

// ==========================================
// 项目导出（XML）
// ==========================================

/// <Projects> 根节点
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProjectsExport {
    #[serde(rename = "Project")]
    pub projects: Vec<ProjectExportNode>,
}

/// <Project TasksCount="n">
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProjectExportNode {
    #[serde(rename = "@TasksCount")]
    pub tasks_count: usize,
    #[serde(rename = "ProjectName")]
    pub project_name: String,
    /// "Yes" / "No"
    #[serde(rename = "HasEndDate")]
    pub has_end_date: String,
    #[serde(rename = "Tasks")]
    pub tasks: TaskExportList,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TaskExportList {
    #[serde(rename = "Task")]
    pub items: Vec<TaskExportNode>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TaskExportNode {
    #[serde(rename = "Name")]
    pub name: String,
    #[serde(rename = "Label")]
    pub label: String,
}

// ==========================================
// 员工工作量导出（JSON）
// ==========================================

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EmployeeWorkloadNode {
    #[serde(rename = "Username")]
    pub username: String,
    #[serde(rename = "Tasks")]
    pub tasks: Vec<WorkloadTaskNode>,
}

/// 日期均为 MM/dd/yyyy 文本
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WorkloadTaskNode {
    #[serde(rename = "TaskName")]
    pub task_name: String,
    #[serde(rename = "OpenDate")]
    pub open_date: String,
    #[serde(rename = "DueDate")]
    pub due_date: String,
    #[serde(rename = "LabelType")]
    pub label_type: String,
    #[serde(rename = "ExecutionType")]
    pub execution_type: String,
}
