// ==========================================
// TeisterMask 任务管理系统 - 领域类型定义
// ==========================================
// 职责: 任务标签 / 执行阶段枚举
// 约束: 导入时以整数代码传入，导出时以名称文本输出
// ==========================================

use serde::{Deserialize, Serialize};
use std::fmt;

// ==========================================
// 任务标签 (Label Type)
// ==========================================
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LabelType {
    Priority,        // 0
    CSharpAdvanced,  // 1
    JavaAdvanced,    // 2
    EntityFramework, // 3
    Hibernate,       // 4
}

impl LabelType {
    /// 由整数代码转换（超出范围返回 None）
    pub fn from_code(code: i32) -> Option<Self> {
        match code {
            0 => Some(LabelType::Priority),
            1 => Some(LabelType::CSharpAdvanced),
            2 => Some(LabelType::JavaAdvanced),
            3 => Some(LabelType::EntityFramework),
            4 => Some(LabelType::Hibernate),
            _ => None,
        }
    }

    /// 数据库存储代码
    pub fn code(self) -> i32 {
        match self {
            LabelType::Priority => 0,
            LabelType::CSharpAdvanced => 1,
            LabelType::JavaAdvanced => 2,
            LabelType::EntityFramework => 3,
            LabelType::Hibernate => 4,
        }
    }
}

impl fmt::Display for LabelType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LabelType::Priority => write!(f, "Priority"),
            LabelType::CSharpAdvanced => write!(f, "CSharpAdvanced"),
            LabelType::JavaAdvanced => write!(f, "JavaAdvanced"),
            LabelType::EntityFramework => write!(f, "EntityFramework"),
            LabelType::Hibernate => write!(f, "Hibernate"),
        }
    }
}

// ==========================================
// 执行阶段 (Execution Type)
// ==========================================
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ExecutionType {
    ProductBacklog, // 0
    SprintBacklog,  // 1
    InProgress,     // 2
    Finished,       // 3
}

impl ExecutionType {
    pub fn from_code(code: i32) -> Option<Self> {
        match code {
            0 => Some(ExecutionType::ProductBacklog),
            1 => Some(ExecutionType::SprintBacklog),
            2 => Some(ExecutionType::InProgress),
            3 => Some(ExecutionType::Finished),
            _ => None,
        }
    }

    pub fn code(self) -> i32 {
        match self {
            ExecutionType::ProductBacklog => 0,
            ExecutionType::SprintBacklog => 1,
            ExecutionType::InProgress => 2,
            ExecutionType::Finished => 3,
        }
    }
}

impl fmt::Display for ExecutionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExecutionType::ProductBacklog => write!(f, "ProductBacklog"),
            ExecutionType::SprintBacklog => write!(f, "SprintBacklog"),
            ExecutionType::InProgress => write!(f, "InProgress"),
            ExecutionType::Finished => write!(f, "Finished"),
        }
    }
}

// ==========================================
// 导入类型 (Import Kind)
// ==========================================
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ImportKind {
    Projects,
    Employees,
}

impl ImportKind {
    pub fn from_db_str(value: &str) -> Option<Self> {
        match value {
            "PROJECTS" => Some(ImportKind::Projects),
            "EMPLOYEES" => Some(ImportKind::Employees),
            _ => None,
        }
    }
}

impl fmt::Display for ImportKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ImportKind::Projects => write!(f, "PROJECTS"),
            ImportKind::Employees => write!(f, "EMPLOYEES"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_label_type_codes() {
        for code in 0..=4 {
            let label = LabelType::from_code(code).unwrap();
            assert_eq!(label.code(), code);
        }
        assert_eq!(LabelType::from_code(5), None);
        assert_eq!(LabelType::from_code(-1), None);
        assert_eq!(LabelType::JavaAdvanced.to_string(), "JavaAdvanced");
    }

    #[test]
    fn test_execution_type_codes() {
        assert_eq!(ExecutionType::from_code(2), Some(ExecutionType::InProgress));
        assert_eq!(ExecutionType::from_code(4), None);
        assert_eq!(ExecutionType::Finished.to_string(), "Finished");
    }

    #[test]
    fn test_import_kind_roundtrip() {
        assert_eq!(ImportKind::from_db_str("PROJECTS"), Some(ImportKind::Projects));
        assert_eq!(ImportKind::Employees.to_string(), "EMPLOYEES");
        assert_eq!(ImportKind::from_db_str("projects"), None);
    }
}
