// ==========================================
// TeisterMask 任务管理系统 - 员工实体
// ==========================================
// 职责: 定义 Employee 及其与 Task 的关联
// 说明: 关联只持有 task_id（弱引用），Task 仍由所属 Project 持有
// ==========================================

use serde::{Deserialize, Serialize};

/// 员工-任务关联
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct EmployeeTask {
    pub employee_id: i64,
    pub task_id: i64,
}

/// 已落库员工
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Employee {
    pub id: i64,
    pub username: String,
    pub email: String,
    pub phone: String,
    /// 关联任务 ID（每个 task_id 至多一条）
    pub task_ids: Vec<i64>,
}

/// 暂存员工（导入通过后、提交前）
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewEmployee {
    pub username: String,
    pub email: String,
    pub phone: String,
    /// 已去重且已确认存在的任务 ID，保持输入顺序
    pub task_ids: Vec<i64>,
}

impl NewEmployee {
    pub fn new(username: String, email: String, phone: String) -> Self {
        Self {
            username,
            email,
            phone,
            task_ids: Vec::new(),
        }
    }
}
