// ==========================================
// TeisterMask 任务管理系统 - 项目与任务实体
// ==========================================
// 职责: 定义 Project / Task 领域实体
// 红线: Project 独占其 Task，Task 生命周期随 Project 结束
// ==========================================

use crate::domain::types::{ExecutionType, LabelType};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

// ==========================================
// Task - 已落库任务
// ==========================================
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    pub id: i64,
    pub project_id: i64,
    pub name: String,
    pub open_date: NaiveDate,
    pub due_date: NaiveDate,
    pub label_type: LabelType,
    pub execution_type: ExecutionType,
}

// ==========================================
// Project - 已落库项目
// ==========================================
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
    pub id: i64,
    pub name: String,
    pub open_date: NaiveDate,
    /// None 表示项目无截止日期
    pub due_date: Option<NaiveDate>,
    /// 按导入顺序排列
    pub tasks: Vec<Task>,
}

impl Project {
    pub fn has_due_date(&self) -> bool {
        self.due_date.is_some()
    }
}

// ==========================================
// NewTask / NewProject - 导入暂存实体（尚未分配 ID）
// ==========================================

/// 暂存任务（导入通过后、提交前）
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewTask {
    pub name: String,
    pub open_date: NaiveDate,
    pub due_date: NaiveDate,
    pub label_type: LabelType,
    pub execution_type: ExecutionType,
}

/// 暂存项目
///
/// 任务列表可以为空：全部任务被拒绝的项目仍然会落库。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewProject {
    pub name: String,
    pub open_date: NaiveDate,
    pub due_date: Option<NaiveDate>,
    pub tasks: Vec<NewTask>,
}

impl NewProject {
    pub fn new(name: String, open_date: NaiveDate, due_date: Option<NaiveDate>) -> Self {
        Self {
            name,
            open_date,
            due_date,
            tasks: Vec::new(),
        }
    }

    /// 校验任务日期是否落在项目日期范围内
    ///
    /// # 规则
    /// - task.open_date >= project.open_date
    /// - 项目有截止日期时: task.due_date <= project.due_date
    pub fn accepts_task_dates(&self, task_open: NaiveDate, task_due: NaiveDate) -> bool {
        if task_open < self.open_date {
            return false;
        }
        match self.due_date {
            Some(project_due) => task_due <= project_due,
            None => true,
        }
    }
}
