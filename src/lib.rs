// ==========================================
// 饲养箱装备规划引擎 - 核心库
// ==========================================
// 职责: 根据用户饲养箱输入 + 物种档案 + 装备目录
//       确定性生成装备清单、成本估算、告警与饲养方案
// 系统定位: 进程内纯计算引擎 (无 I/O, 可并发调用)
// ==========================================

// ==========================================
// 模块声明
// ==========================================

// 领域层 - 实体与类型
pub mod domain;

// 参考数据层 - 目录/档案加载与注册
pub mod catalog;

// 引擎层 - 规划规则
pub mod engine;

// 配置层 - 进程配置
pub mod config;

// 日志系统
pub mod logging;

// ==========================================
// 重导出核心类型
// ==========================================

// 领域实体
pub use domain::{
    AnimalProfile, BuildPlan, CostEstimate, EnclosureInput, EquipmentConfig,
    HusbandryCareChecklist, PricingTier, ShoppingItem, Warning,
};

// 参考数据
pub use catalog::{CatalogError, CatalogOptions, EquipmentCatalog, ProfileRegistry, ReferenceData};

// 引擎
pub use engine::{CostEstimator, PlanError, PlanOrchestrator, ShoppingListOrchestrator};

// 配置
pub use config::AppConfig;

// ==========================================
// 常量定义
// ==========================================

// 系统版本
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

// 系统名称
pub const APP_NAME: &str = "饲养箱装备规划引擎";
