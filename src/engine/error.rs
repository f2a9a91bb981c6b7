// ==========================================
// 饲养箱装备规划引擎 - 引擎层错误类型
// ==========================================
// 红线: 未知动物 ID 直接拒绝, 不生成部分方案
// 说明: 目录条目缺失不是错误 (生成器静默跳过)
// ==========================================

use crate::catalog::CatalogError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum PlanError {
    #[error("未知动物 ID: {0}")]
    UnknownAnimal(String),

    #[error(transparent)]
    Catalog(#[from] CatalogError),
}

pub type PlanResult<T> = Result<T, PlanError>;
