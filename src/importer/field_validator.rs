// ==========================================
// TeisterMask 任务管理系统 - 字段校验器
// ==========================================
// 职责: 按记录类型组合字段规则，只给出 通过/不通过
// 红线: 不输出字段级原因（下游只关心记录是否可接受）
// 说明: 项目校验不递归校验其下任务
// ==========================================

use crate::importer::records::{EmployeeImportRecord, ProjectImportRecord, TaskImportRecord};
use once_cell::sync::Lazy;
use regex::Regex;

static USERNAME_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[A-Za-z0-9]+$").expect("用户名正则为常量")
});

static EMAIL_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[^@\r\n]+@[^@\r\n]+$").expect("邮箱正则为常量")
});

static PHONE_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[0-9]{3}-[0-9]{3}-[0-9]{4}$").expect("电话正则为常量")
});

// 长度约束（按字符计）
const PROJECT_NAME_LEN: (usize, usize) = (1, 40);
const TASK_NAME_LEN: (usize, usize) = (2, 40);
const USERNAME_LEN: (usize, usize) = (3, 40);

// 枚举代码范围
const EXECUTION_TYPE_RANGE: (i32, i32) = (0, 3);
const LABEL_TYPE_RANGE: (i32, i32) = (0, 4);

// ==========================================
// FieldValidator Trait
// ==========================================
pub trait FieldValidator {
    /// 记录是否满足其类型声明的全部字段约束
    fn validate(&self) -> bool;
}

impl FieldValidator for ProjectImportRecord {
    fn validate(&self) -> bool {
        length_between(self.name.as_deref(), PROJECT_NAME_LEN.0, PROJECT_NAME_LEN.1)
            && required(self.open_date.as_deref())
    }
}

impl FieldValidator for TaskImportRecord {
    fn validate(&self) -> bool {
        length_between(self.name.as_deref(), TASK_NAME_LEN.0, TASK_NAME_LEN.1)
            && required(self.open_date.as_deref())
            && required(self.due_date.as_deref())
            && in_range(self.execution_type, EXECUTION_TYPE_RANGE.0, EXECUTION_TYPE_RANGE.1)
            && in_range(self.label_type, LABEL_TYPE_RANGE.0, LABEL_TYPE_RANGE.1)
    }
}

impl FieldValidator for EmployeeImportRecord {
    fn validate(&self) -> bool {
        length_between(self.username.as_deref(), USERNAME_LEN.0, USERNAME_LEN.1)
            && matches(self.username.as_deref(), &USERNAME_PATTERN)
            && matches(self.email.as_deref(), &EMAIL_PATTERN)
            && matches(self.phone.as_deref(), &PHONE_PATTERN)
    }
}

// ==========================================
// 规则原语
// ==========================================

/// 必填：非 None、非空白
pub fn required(value: Option<&str>) -> bool {
    value.map(|v| !v.trim().is_empty()).unwrap_or(false)
}

/// 必填 + 字符数在 [min, max]
pub fn length_between(value: Option<&str>, min: usize, max: usize) -> bool {
    match value {
        Some(v) if required(Some(v)) => {
            let len = v.chars().count();
            len >= min && len <= max
        }
        _ => false,
    }
}

/// 必填 + 数值在 [min, max]
pub fn in_range(value: Option<i32>, min: i32, max: i32) -> bool {
    value.map(|v| v >= min && v <= max).unwrap_or(false)
}

/// 必填 + 正则匹配
pub fn matches(value: Option<&str>, pattern: &Regex) -> bool {
    match value {
        Some(v) if required(Some(v)) => pattern.is_match(v),
        _ => false,
    }
}
