// ==========================================
// TeisterMask 任务管理系统 - 配置管理 API
// ==========================================
// 职责: 配置查询、更新、快照
// ==========================================

use crate::api::error::{ApiError, ApiResult};
use crate::config::ConfigManager;
use std::sync::Arc;

pub struct ConfigApi {
    config_manager: Arc<ConfigManager>,
}

impl ConfigApi {
    pub fn new(config_manager: Arc<ConfigManager>) -> Self {
        Self { config_manager }
    }

    /// 查询单个配置（不存在返回 None）
    pub fn get_config(&self, key: &str) -> ApiResult<Option<String>> {
        self.config_manager
            .get_config_value(key)
            .map_err(|e| ApiError::ConfigError(e.to_string()))
    }

    /// 写入单个配置
    pub fn set_config(&self, key: &str, value: &str) -> ApiResult<()> {
        if key.trim().is_empty() {
            return Err(ApiError::InvalidInput("配置键不能为空".to_string()));
        }
        self.config_manager
            .set_config_value(key, value)
            .map_err(|e| ApiError::ConfigError(e.to_string()))
    }

    /// 全部配置的 JSON 快照
    pub fn get_config_snapshot(&self) -> ApiResult<String> {
        self.config_manager
            .get_config_snapshot()
            .map_err(|e| ApiError::ConfigError(e.to_string()))
    }
}
