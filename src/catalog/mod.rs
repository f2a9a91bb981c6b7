// ==========================================
// 饲养箱装备规划引擎 - 参考数据层
// ==========================================
// 职责: 装备目录/动物档案的加载、校验、注册
// 红线: 加载一次, 之后只读; 格式错误启动即拒绝
// ==========================================

pub mod builtin;
pub mod error;
pub mod loader;
pub mod record;
pub mod registry;

pub use error::{CatalogError, CatalogResult};
pub use record::{RawEquipmentRecord, RawTierOption, RawTiers};
pub use registry::{
    CatalogOptions, CatalogPartition, EquipmentCatalog, LoadDiagnostic, LoadReport,
    ProfileRegistry, ReferenceData,
};
