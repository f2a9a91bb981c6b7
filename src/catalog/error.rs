// ==========================================
// 饲养箱装备规划引擎 - 参考数据错误类型
// ==========================================
// 工具: thiserror 派生宏
// 红线: 目录/档案格式错误在启动时拒绝, 不延迟到查询时
// ==========================================

use crate::domain::equipment::TagParseError;
use crate::domain::types::PricingTier;
use std::path::PathBuf;
use thiserror::Error;

/// 参考数据加载错误
#[derive(Error, Debug)]
pub enum CatalogError {
    // ===== 文件相关错误 =====
    #[error("参考数据读取失败: {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("参考数据 JSON 解析失败 (分区 {partition}): {source}")]
    Parse {
        partition: String,
        #[source]
        source: serde_json::Error,
    },

    // ===== 目录条目错误 =====
    #[error("装备 ID 重复: {id} (分区 {first} 与 {second})")]
    DuplicateId {
        id: String,
        first: String,
        second: String,
    },

    #[error("装备 {id} 的 {tier} 档缺少价格 (priceRange 或 pricePerUnit)")]
    MissingTierPrice { id: String, tier: PricingTier },

    #[error("装备 {id} 标签非法: {source}")]
    InvalidTag {
        id: String,
        #[source]
        source: TagParseError,
    },

    // ===== 动物档案错误 =====
    #[error("动物档案 {id} 非法: {message}")]
    InvalidProfile { id: String, message: String },
}

pub type CatalogResult<T> = Result<T, CatalogError>;
