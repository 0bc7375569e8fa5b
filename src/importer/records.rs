// ==========================================
// TeisterMask 任务管理系统 - 导入记录结构
// ==========================================
// 职责: 导入文档解析目标（原始字符串/整数，未校验）
// 说明: 所有字段均可缺失，缺失由 FieldValidator 判定
// ==========================================

use serde::Deserialize;

// ==========================================
// 项目导入文档（XML，由 document_parser 按元素名填充）
// ==========================================

/// <Project> 节点
#[derive(Debug, Clone, Default)]
pub struct ProjectImportRecord {
    pub name: Option<String>,
    pub open_date: Option<String>,
    pub due_date: Option<String>,
    pub tasks: TaskImportList,
}

/// <Tasks> 节点
#[derive(Debug, Clone, Default)]
pub struct TaskImportList {
    pub items: Vec<TaskImportRecord>,
}

/// <Task> 节点
#[derive(Debug, Clone, Default)]
pub struct TaskImportRecord {
    pub name: Option<String>,
    pub open_date: Option<String>,
    pub due_date: Option<String>,
    pub execution_type: Option<i32>,
    pub label_type: Option<i32>,
}

// ==========================================
// 员工导入文档（JSON 数组）
// ==========================================
#[derive(Debug, Clone, Default, Deserialize)]
pub struct EmployeeImportRecord {
    #[serde(rename = "Username", default)]
    pub username: Option<String>,
    #[serde(rename = "Email", default)]
    pub email: Option<String>,
    #[serde(rename = "Phone", default)]
    pub phone: Option<String>,
    /// 任务 ID 列表（null / 缺失 视为空）
    #[serde(rename = "Tasks", default)]
    pub tasks: Option<Vec<i64>>,
}

impl EmployeeImportRecord {
    pub fn task_ids(&self) -> &[i64] {
        self.tasks.as_deref().unwrap_or(&[])
    }
}
