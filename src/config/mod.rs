// ==========================================
// 饲养箱装备规划引擎 - 配置层
// ==========================================
// 职责: 进程级配置 (数据目录/默认档位/币种/标签严格度)
// 存储: JSON 文件 + 环境变量覆写
// ==========================================

pub mod app_config;

pub use app_config::{env_keys, AppConfig, ConfigError};
