// ==========================================
// 饲养箱装备规划引擎 - 领域类型定义
// ==========================================
// 职责: 输入/档案/目录共享的枚举词表
// 序列化格式: kebab-case (与目录 JSON 一致)
// ==========================================

use serde::de::value::{Error as ValueError, StrDeserializer};
use serde::de::{DeserializeOwned, IntoDeserializer};
use serde::{Deserialize, Serialize};
use std::fmt;

/// 枚举的线上名称 (kebab-case)
pub(crate) fn wire_name<T: Serialize>(value: &T) -> String {
    serde_json::to_value(value)
        .ok()
        .and_then(|v| v.as_str().map(str::to_string))
        .unwrap_or_default()
}

/// 从线上名称解析枚举, 未知值返回 None
pub(crate) fn parse_wire<T: DeserializeOwned>(raw: &str) -> Option<T> {
    let de: StrDeserializer<'_, ValueError> = raw.trim().into_deserializer();
    T::deserialize(de).ok()
}

// ==========================================
// 尺寸单位 (Units)
// ==========================================
// 规范单位: 英寸; 唯一非规范单位: 厘米
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum Units {
    #[default]
    #[serde(rename = "in", alias = "inches")]
    Inches,
    #[serde(rename = "cm", alias = "centimeters")]
    Centimeters,
}

// ==========================================
// 饲养箱材质 (Enclosure Type)
// ==========================================
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum EnclosureType {
    #[default]
    Glass,
    Pvc,
    Screen,
    Wood,
}

// ==========================================
// 湿度控制策略 (Humidity Control)
// ==========================================
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum HumidityControl {
    #[default]
    None,
    Manual,
    MistingSystem,
    Humidifier,
    Fogger,
}

// ==========================================
// 垫材种类 (Substrate)
// ==========================================
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SubstrateKind {
    Soil,
    CocoFiber,
    Bark,
    Sand,
    SandSoilMix,
    Paper,
    Moss,
    Tile,
    Aspen,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PlantPreference {
    Live,
    Artificial,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum BackgroundType {
    #[default]
    None,
    Foam,
    Cork,
    Printed,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum DoorOrientation {
    #[default]
    Front,
    Top,
}

// ==========================================
// 动物需求词表 (Equipment Needs)
// ==========================================

/// 攀爬习性; Both 满足任意 climbing 标签
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ClimbingStyle {
    Arboreal,
    Terrestrial,
    Both,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum HumidityBand {
    Low,
    Moderate,
    High,
    VeryHigh,
}

/// 加热方式
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum HeatSource {
    Basking,
    Ambient,
    None,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum WaterFeature {
    ShallowDish,
    LargeBowl,
    Dripper,
    Pool,
    FullyAquatic,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DecorNeed {
    Branches,
    Plants,
    Hides,
    Ledges,
    LeafLitter,
    Rocks,
    Burrows,
    Vines,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DietKind {
    Insectivore,
    Herbivore,
    Omnivore,
    Carnivore,
    Piscivore,
}

/// 分类学大类
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum AnimalType {
    Reptile,
    Amphibian,
    Invertebrate,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum BioactiveSubstrate {
    Tropical,
    Arid,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Climate {
    Tropical,
    Arid,
    Temperate,
}

/// 活动模式; Aquatic 表示完全水栖
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Activity {
    Diurnal,
    Nocturnal,
    Crepuscular,
    Aquatic,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum UvbStrength {
    Low,
    Medium,
    High,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum CareLevel {
    #[default]
    Beginner,
    Intermediate,
    Advanced,
}

// ==========================================
// 装备重要度 (Importance)
// ==========================================
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Importance {
    Required,
    Recommended,
    Conditional,
}

// ==========================================
// 装备类别 (Equipment Category)
// ==========================================
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum EquipmentCategory {
    Enclosure,
    Lighting,
    Heating,
    Substrate,
    Bioactive,
    Humidity,
    Decor,
    Monitoring,
    Water,
    Feeding,
    Specialized,
    Aquatic,
}

impl EquipmentCategory {
    /// 成本分解使用的显示名称
    pub fn display_name(&self) -> &'static str {
        match self {
            EquipmentCategory::Enclosure => "Enclosure",
            EquipmentCategory::Lighting => "Lighting",
            EquipmentCategory::Heating => "Heating",
            EquipmentCategory::Substrate => "Substrate",
            EquipmentCategory::Bioactive => "Bioactive Setup",
            EquipmentCategory::Humidity => "Humidity Control",
            EquipmentCategory::Decor => "Decor & Furnishings",
            EquipmentCategory::Monitoring => "Monitoring",
            EquipmentCategory::Water => "Water",
            EquipmentCategory::Feeding => "Feeding",
            EquipmentCategory::Specialized => "Specialized Equipment",
            EquipmentCategory::Aquatic => "Aquatic Equipment",
        }
    }
}

impl fmt::Display for EquipmentCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", wire_name(self))
    }
}

// ==========================================
// 价格档位 (Pricing Tier)
// ==========================================
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum PricingTier {
    Minimum,
    #[default]
    Recommended,
    Ideal,
}

impl PricingTier {
    pub const ALL: [PricingTier; 3] = [
        PricingTier::Minimum,
        PricingTier::Recommended,
        PricingTier::Ideal,
    ];
}

impl fmt::Display for PricingTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", wire_name(self))
    }
}

impl std::str::FromStr for PricingTier {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "minimum" | "min" | "budget" => Ok(PricingTier::Minimum),
            "recommended" | "rec" => Ok(PricingTier::Recommended),
            "ideal" | "premium" => Ok(PricingTier::Ideal),
            other => Err(format!("unknown pricing tier: {}", other)),
        }
    }
}

// ==========================================
// 告警等级 (Severity)
// ==========================================
// 排序: Critical < Important < Tip (升序即严重度从高到低)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Severity {
    Critical,
    Important,
    Tip,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", wire_name(self))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum WarningCategory {
    Size,
    Temperature,
    Humidity,
    Lighting,
    Setup,
    Budget,
    Safety,
    Husbandry,
    Health,
}

// ==========================================
// 补货周期 (Recurrence Interval)
// ==========================================
// 未知周期按年处理
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum RecurrenceInterval {
    Weekly,
    Monthly,
    Bimonthly,
    Quarterly,
    SixMonths,
    Yearly,
    EighteenMonths,
    Other(String),
}

impl RecurrenceInterval {
    pub fn parse(raw: &str) -> Self {
        match raw.trim().to_lowercase().as_str() {
            "weekly" => RecurrenceInterval::Weekly,
            "monthly" => RecurrenceInterval::Monthly,
            "bimonthly" => RecurrenceInterval::Bimonthly,
            "quarterly" => RecurrenceInterval::Quarterly,
            "6-months" => RecurrenceInterval::SixMonths,
            "yearly" | "12-months" => RecurrenceInterval::Yearly,
            "18-months" => RecurrenceInterval::EighteenMonths,
            _ => RecurrenceInterval::Other(raw.to_string()),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            RecurrenceInterval::Weekly => "weekly",
            RecurrenceInterval::Monthly => "monthly",
            RecurrenceInterval::Bimonthly => "bimonthly",
            RecurrenceInterval::Quarterly => "quarterly",
            RecurrenceInterval::SixMonths => "6-months",
            RecurrenceInterval::Yearly => "yearly",
            RecurrenceInterval::EighteenMonths => "18-months",
            RecurrenceInterval::Other(raw) => raw.as_str(),
        }
    }
}

impl From<String> for RecurrenceInterval {
    fn from(raw: String) -> Self {
        RecurrenceInterval::parse(&raw)
    }
}

impl From<RecurrenceInterval> for String {
    fn from(interval: RecurrenceInterval) -> Self {
        interval.as_str().to_string()
    }
}

impl fmt::Display for RecurrenceInterval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
