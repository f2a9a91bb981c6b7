// ==========================================
// 饲养箱装备规划引擎 - 领域模型层
// ==========================================
// 职责: 定义输入、参考数据、输出实体与共享枚举
// 红线: 不含加载逻辑, 不含引擎逻辑
// ==========================================

pub mod animal;
pub mod enclosure;
pub mod equipment;
pub mod plan;
pub mod types;

// 重导出核心类型
pub use animal::{
    AnimalProfile, CareTargets, EquipmentNeeds, HumidityRange, LayoutRules, LightingRequirements,
    MinEnclosureSize, PercentRange, TemperatureRange, ZoneKind,
};
pub use enclosure::{Dimensions, EnclosureInput};
pub use equipment::{
    AutoIncludeRule, EquipmentConfig, NeedsTag, OneOrMany, PriceRange, Recurrence,
    TagParseError, TierOption, TierPrice, TierPricing,
};
pub use plan::{
    BuildPlan, BuildStep, CategoryCost, ChecklistItem, CostEstimate, HusbandryCareChecklist,
    LayoutZone, PlanMetadata, Quantity, RecurringCosts, RecurringItemCost, ShoppingItem,
    TierTotals, Warning, ZonePlacement,
};
pub use types::{
    Activity, AnimalType, BackgroundType, BioactiveSubstrate, CareLevel, Climate, ClimbingStyle,
    DecorNeed, DietKind, DoorOrientation, EnclosureType, EquipmentCategory, HeatSource,
    HumidityBand, HumidityControl, Importance, PlantPreference, PricingTier,
    RecurrenceInterval, Severity, SubstrateKind, Units, UvbStrength, WarningCategory,
    WaterFeature,
};
