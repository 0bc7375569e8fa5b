// ==========================================
// TeisterMask 任务管理系统 - 导出模块错误类型
// ==========================================
// 工具: thiserror 派生宏
// ==========================================

use crate::repository::error::RepositoryError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ExportError {
    #[error("XML 序列化失败: {0}")]
    XmlSerializeError(String),

    #[error("JSON 序列化失败: {0}")]
    JsonSerializeError(String),

    #[error("配置读取失败: {0}")]
    ConfigError(String),

    #[error("数据读取失败: {0}")]
    Repository(#[from] RepositoryError),
}

impl From<serde_json::Error> for ExportError {
    fn from(err: serde_json::Error) -> Self {
        ExportError::JsonSerializeError(err.to_string())
    }
}

/// Result 类型别名
pub type ExportResult<T> = Result<T, ExportError>;
