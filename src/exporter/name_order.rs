// ==========================================
// TeisterMask 任务管理系统 - 导出名称排序
// ==========================================
// 规则: 先按忽略大小写比较（apple < banana < Cherry），再按原始字符序兜底
// 适用: 任务名、项目名、用户名
// ==========================================

use std::cmp::Ordering;

/// 名称升序比较
pub fn compare_names(a: &str, b: &str) -> Ordering {
    a.chars()
        .flat_map(char::to_lowercase)
        .cmp(b.chars().flat_map(char::to_lowercase))
        .then_with(|| a.cmp(b))
}
