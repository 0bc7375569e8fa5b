// ==========================================
// TeisterMask 任务管理系统 - 导入批次与导入报告
// ==========================================
// 职责: 逐条记录的导入结果文本 + 批次汇总信息
// 红线: 报告只输出固定文本行，不输出字段级错误明细
// ==========================================

use crate::domain::types::ImportKind;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// 无效记录提示（固定文本）
pub const INVALID_DATA_MESSAGE: &str = "Invalid data!";

// ==========================================
// ImportReport - 逐条导入报告
// ==========================================
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ImportReport {
    lines: Vec<String>,
    accepted: usize,
    rejected: usize,
}

impl ImportReport {
    pub fn new() -> Self {
        Self::default()
    }

    /// 记录一条被拒绝的记录（项目/任务/员工/任务引用）
    pub fn reject(&mut self) {
        self.rejected += 1;
        self.lines.push(INVALID_DATA_MESSAGE.to_string());
    }

    pub fn project_imported(&mut self, name: &str, task_count: usize) {
        self.accepted += 1;
        self.lines.push(format!(
            "Successfully imported project - {} with {} tasks.",
            name, task_count
        ));
    }

    pub fn employee_imported(&mut self, username: &str, task_count: usize) {
        self.accepted += 1;
        self.lines.push(format!(
            "Successfully imported employee - {} with {} tasks.",
            username, task_count
        ));
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// 成功导入的顶层记录数
    pub fn accepted(&self) -> usize {
        self.accepted
    }

    /// 拒绝行数（含子记录）
    pub fn rejected(&self) -> usize {
        self.rejected
    }

    /// 渲染为换行分隔文本，去掉末尾空白
    pub fn render(&self) -> String {
        self.lines.join("\n").trim_end().to_string()
    }
}

impl fmt::Display for ImportReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}

// ==========================================
// ImportBatch - 导入批次记录
// ==========================================
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ImportBatch {
    pub batch_id: String,
    pub kind: ImportKind,
    pub total_records: i64,
    pub accepted_records: i64,
    pub rejected_lines: i64,
    pub imported_at: DateTime<Utc>,
    pub elapsed_ms: i64,
}
