// ==========================================
// TeisterMask 任务管理系统 - 严格日期解析器
// ==========================================
// 职责: 只接受 dd/MM/yyyy 一种格式，解析失败返回 None，不抛错
// ==========================================

use chrono::NaiveDate;

/// 导入文档日期格式
pub const IMPORT_DATE_FORMAT: &str = "%d/%m/%Y";

/// 短日期导出格式（MM/dd/yyyy）
pub const SHORT_DATE_FORMAT: &str = "%m/%d/%Y";

#[derive(Debug, Clone, Copy, Default)]
pub struct StrictDateParser;

impl StrictDateParser {
    pub fn new() -> Self {
        Self
    }

    /// 解析 dd/MM/yyyy
    ///
    /// # 返回
    /// - Some(NaiveDate): 解析成功
    /// - None: 格式不符（位数、分隔符、前后空白）或日期不存在
    pub fn parse(&self, text: &str) -> Option<NaiveDate> {
        if !Self::has_strict_layout(text) {
            return None;
        }
        NaiveDate::parse_from_str(text, IMPORT_DATE_FORMAT).ok()
    }

    /// 解析可选日期：缺失、空白、格式错误均视为“无日期”
    pub fn parse_optional(&self, text: Option<&str>) -> Option<NaiveDate> {
        text.and_then(|t| self.parse(t))
    }

    /// 两位日 / 两位月 / 四位年，分隔符固定为 '/'
    ///
    /// chrono 的 %d/%m 允许单个数字，%Y 允许符号和超过四位，这里先做形状校验。
    fn has_strict_layout(text: &str) -> bool {
        let bytes = text.as_bytes();
        if bytes.len() != 10 {
            return false;
        }
        bytes.iter().enumerate().all(|(idx, b)| match idx {
            2 | 5 => *b == b'/',
            _ => b.is_ascii_digit(),
        })
    }
}

/// 输出短日期文本（MM/dd/yyyy）
pub fn format_short_date(date: NaiveDate) -> String {
    date.format(SHORT_DATE_FORMAT).to_string()
}
