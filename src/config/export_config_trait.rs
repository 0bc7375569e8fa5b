// ==========================================
// TeisterMask 任务管理系统 - 导出配置读取 Trait
// ==========================================
// 职责: 定义导出模块所需的配置读取接口（不包含实现）
// 红线: 不包含配置写入、不包含业务逻辑
// ==========================================

use std::error::Error;

// ==========================================
// ExportConfigReader Trait
// ==========================================
// 实现者: ConfigManager（从 config_kv 表读取）
pub trait ExportConfigReader: Send + Sync {
    /// 获取工作量导出截取人数
    ///
    /// # 默认值
    /// - 10（配置缺失或非法时）
    fn get_busiest_employees_limit(&self) -> Result<usize, Box<dyn Error>>;
}

impl<T> ExportConfigReader for std::sync::Arc<T>
where
    T: ExportConfigReader + ?Sized,
{
    fn get_busiest_employees_limit(&self) -> Result<usize, Box<dyn Error>> {
        (**self).get_busiest_employees_limit()
    }
}
