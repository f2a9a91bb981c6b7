// ==========================================
// 饲养箱装备规划引擎 - 进程配置
// ==========================================
// 职责: 配置加载与覆写
// 来源优先级: 显式路径 > ENCLOSURE_PLANNER_CONFIG > 用户配置目录 > 内置默认
// 覆写: ENCLOSURE_PLANNER_DATA_DIR 覆盖 data_dir
// 红线: 引擎阈值不是配置项 (固定策略)
// ==========================================

use crate::catalog::CatalogOptions;
use crate::domain::equipment::DEFAULT_CURRENCY;
use crate::domain::types::PricingTier;
use crate::logging::LogFormat;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{debug, info};

/// 环境变量名
pub mod env_keys {
    pub const CONFIG_PATH: &str = "ENCLOSURE_PLANNER_CONFIG";
    pub const DATA_DIR: &str = "ENCLOSURE_PLANNER_DATA_DIR";
}

pub const CONFIG_DIR_NAME: &str = "enclosure-planner";
pub const CONFIG_FILE_NAME: &str = "config.json";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("读取配置文件失败: {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("配置文件格式错误: {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

fn default_currency() -> String {
    DEFAULT_CURRENCY.to_string()
}

// ==========================================
// AppConfig - 进程配置
// ==========================================
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// 外部参考数据目录 (含 catalog/ 与 animals/); 缺省使用内置数据
    pub data_dir: Option<PathBuf>,
    /// 输入未指定预算时使用的档位
    pub default_tier: PricingTier,
    pub currency: String,
    /// 非法需求标签直接报错
    pub strict_tags: bool,
    pub log_format: LogFormat,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            data_dir: None,
            default_tier: PricingTier::Recommended,
            currency: default_currency(),
            strict_tags: false,
            log_format: LogFormat::default(),
        }
    }
}

impl AppConfig {
    /// 按优先级解析配置并应用环境变量覆写
    pub fn load(explicit: Option<&Path>) -> Result<Self, ConfigError> {
        let mut config = match Self::resolve_path(explicit) {
            Some(path) => Self::from_file(&path)?,
            None => {
                debug!("未找到配置文件, 使用内置默认值");
                Self::default()
            }
        };

        if let Some(dir) = std::env::var_os(env_keys::DATA_DIR) {
            config.data_dir = Some(PathBuf::from(dir));
        }
        Ok(config)
    }

    /// 配置文件路径; 默认位置不存在时返回 None
    pub fn resolve_path(explicit: Option<&Path>) -> Option<PathBuf> {
        if let Some(path) = explicit {
            return Some(path.to_path_buf());
        }
        if let Some(path) = std::env::var_os(env_keys::CONFIG_PATH) {
            return Some(PathBuf::from(path));
        }
        Self::default_path().filter(|path| path.is_file())
    }

    /// 用户配置目录下的默认路径
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join(CONFIG_DIR_NAME).join(CONFIG_FILE_NAME))
    }

    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_json(&text).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        info!(path = %path.display(), "已加载配置文件");
        Ok(config)
    }

    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    pub fn catalog_options(&self) -> CatalogOptions {
        CatalogOptions {
            strict_tags: self.strict_tags,
        }
    }

    /// 输入预算优先, 其次配置默认档位
    pub fn tier_for(&self, requested: Option<PricingTier>) -> PricingTier {
        requested.unwrap_or(self.default_tier)
    }
}
