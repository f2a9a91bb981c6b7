// ==========================================
// 饲养箱装备规划引擎 - 装备目录条目
// ==========================================
// 职责: 单个 SKU 的规范化配置 (标签/规则/分档定价/补货/依赖)
// 红线: 标签为强类型枚举, 字符串 "category:value" 仅存在于加载边界
// ==========================================

use crate::domain::types::{
    parse_wire, wire_name, Activity, AnimalType, BioactiveSubstrate, Climate, ClimbingStyle,
    DecorNeed, DietKind, EquipmentCategory, HeatSource, HumidityBand, Importance,
    PlantPreference, PricingTier, RecurrenceInterval, SubstrateKind, WaterFeature,
};
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

pub const DEFAULT_CURRENCY: &str = "USD";

fn default_currency() -> String {
    DEFAULT_CURRENCY.to_string()
}

// ==========================================
// PriceRange - 价格区间
// ==========================================
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PriceRange {
    pub min: f64,
    pub max: f64,
    #[serde(default = "default_currency")]
    pub currency: String,
}

impl PriceRange {
    pub fn new(min: f64, max: f64) -> Self {
        Self {
            min,
            max,
            currency: default_currency(),
        }
    }

    pub fn zero(currency: &str) -> Self {
        Self {
            min: 0.0,
            max: 0.0,
            currency: currency.to_string(),
        }
    }

    pub fn scaled(&self, factor: f64) -> Self {
        Self {
            min: self.min * factor,
            max: self.max * factor,
            currency: self.currency.clone(),
        }
    }

    /// 累加 (币种沿用左值)
    pub fn add(&mut self, other: &PriceRange) {
        self.min += other.min;
        self.max += other.max;
    }
}

// ==========================================
// 分档定价 (Tier Pricing)
// ==========================================

/// 单档价格: 固定区间 或 单价
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "kebab-case")]
pub enum TierPrice {
    Range(PriceRange),
    #[serde(rename_all = "camelCase")]
    PerUnit {
        price_per_unit: f64,
        #[serde(default)]
        unit: Option<String>,
    },
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TierOption {
    pub description: String,
    pub price: TierPrice,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TierPricing {
    pub minimum: TierOption,
    pub recommended: TierOption,
    pub ideal: TierOption,
}

impl TierPricing {
    pub fn get(&self, tier: PricingTier) -> &TierOption {
        match tier {
            PricingTier::Minimum => &self.minimum,
            PricingTier::Recommended => &self.recommended,
            PricingTier::Ideal => &self.ideal,
        }
    }
}

/// 补货元数据 (存在即表示周期性消耗)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Recurrence {
    pub interval: RecurrenceInterval,
}

// ==========================================
// NeedsTag - 需求标签 (强类型)
// ==========================================
// 线上格式: "category:value"
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NeedsTag {
    Climbing(ClimbingStyle),
    Substrate(SubstrateKind),
    Humidity(HumidityBand),
    Heat(HeatSource),
    Water(WaterFeature),
    Decor(DecorNeed),
    Diet(DietKind),
    AnimalType(AnimalType),
    Bioactive(BioactiveSubstrate),
    /// 比较的是用户种植偏好, 不是动物需求
    Plants(PlantPreference),
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TagParseError {
    #[error("标签缺少分隔符 ':' : {0}")]
    MissingSeparator(String),

    #[error("未知标签类别: {category} (tag={raw})")]
    UnknownCategory { category: String, raw: String },

    #[error("标签值无法识别: {category}:{value}")]
    UnknownValue { category: String, value: String },
}

impl NeedsTag {
    pub fn parse(raw: &str) -> Result<Self, TagParseError> {
        let (category, value) = raw
            .split_once(':')
            .ok_or_else(|| TagParseError::MissingSeparator(raw.to_string()))?;
        let category = category.trim();
        let value = value.trim();

        let unknown_value = || TagParseError::UnknownValue {
            category: category.to_string(),
            value: value.to_string(),
        };

        let tag = match category {
            "climbing" => NeedsTag::Climbing(parse_wire(value).ok_or_else(unknown_value)?),
            "substrate" => NeedsTag::Substrate(parse_wire(value).ok_or_else(unknown_value)?),
            "humidity" => NeedsTag::Humidity(parse_wire(value).ok_or_else(unknown_value)?),
            "heat" => NeedsTag::Heat(parse_wire(value).ok_or_else(unknown_value)?),
            "water" => NeedsTag::Water(parse_wire(value).ok_or_else(unknown_value)?),
            "decor" => NeedsTag::Decor(parse_wire(value).ok_or_else(unknown_value)?),
            "diet" => NeedsTag::Diet(parse_wire(value).ok_or_else(unknown_value)?),
            "type" => NeedsTag::AnimalType(parse_wire(value).ok_or_else(unknown_value)?),
            "bioactive" => NeedsTag::Bioactive(parse_wire(value).ok_or_else(unknown_value)?),
            "plants" => NeedsTag::Plants(parse_wire(value).ok_or_else(unknown_value)?),
            other => {
                return Err(TagParseError::UnknownCategory {
                    category: other.to_string(),
                    raw: raw.to_string(),
                })
            }
        };
        Ok(tag)
    }

    pub fn category(&self) -> &'static str {
        match self {
            NeedsTag::Climbing(_) => "climbing",
            NeedsTag::Substrate(_) => "substrate",
            NeedsTag::Humidity(_) => "humidity",
            NeedsTag::Heat(_) => "heat",
            NeedsTag::Water(_) => "water",
            NeedsTag::Decor(_) => "decor",
            NeedsTag::Diet(_) => "diet",
            NeedsTag::AnimalType(_) => "type",
            NeedsTag::Bioactive(_) => "bioactive",
            NeedsTag::Plants(_) => "plants",
        }
    }

    fn value_name(&self) -> String {
        match self {
            NeedsTag::Climbing(v) => wire_name(v),
            NeedsTag::Substrate(v) => wire_name(v),
            NeedsTag::Humidity(v) => wire_name(v),
            NeedsTag::Heat(v) => wire_name(v),
            NeedsTag::Water(v) => wire_name(v),
            NeedsTag::Decor(v) => wire_name(v),
            NeedsTag::Diet(v) => wire_name(v),
            NeedsTag::AnimalType(v) => wire_name(v),
            NeedsTag::Bioactive(v) => wire_name(v),
            NeedsTag::Plants(v) => wire_name(v),
        }
    }
}

impl fmt::Display for NeedsTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.category(), self.value_name())
    }
}

// ==========================================
// AutoIncludeRule - 自动包含规则
// ==========================================
// 字段间为 AND, 字段内为 OR; 缺省字段不检查

/// 单值或多值
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum OneOrMany<T> {
    One(T),
    Many(Vec<T>),
}

impl<T: PartialEq> OneOrMany<T> {
    pub fn accepts(&self, value: &T) -> bool {
        match self {
            OneOrMany::One(v) => v == value,
            OneOrMany::Many(vs) => vs.contains(value),
        }
    }

    pub fn accepts_any(&self, values: &[T]) -> bool {
        values.iter().any(|v| self.accepts(v))
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct AutoIncludeRule {
    #[serde(rename = "type", default)]
    pub animal_type: Option<OneOrMany<AnimalType>>,
    #[serde(default)]
    pub substrate: Option<OneOrMany<SubstrateKind>>,
    #[serde(default)]
    pub climate: Option<OneOrMany<Climate>>,
    #[serde(default)]
    pub activity: Option<OneOrMany<Activity>>,
    #[serde(default)]
    pub diet: Option<OneOrMany<DietKind>>,
    #[serde(default)]
    pub bioactive: Option<bool>,
    #[serde(default)]
    pub water_feature: Option<OneOrMany<WaterFeature>>,
}

// ==========================================
// EquipmentConfig - 目录条目 (已校验)
// ==========================================
#[derive(Debug, Clone, PartialEq)]
pub struct EquipmentConfig {
    pub id: String,
    pub name: String,
    pub category: EquipmentCategory,
    pub importance: Importance,
    pub needs_tags: Vec<NeedsTag>,
    /// 加载时丢弃的非法标签数
    pub dropped_tags: usize,
    pub auto_include_for: Option<AutoIncludeRule>,
    pub incompatible_animals: Vec<String>,
    pub tiers: TierPricing,
    pub recurrence: Option<Recurrence>,
    pub required_with: Vec<String>,
    pub quantity: Option<String>,
    pub sizing: Option<String>,
    pub notes: Option<String>,
}

impl EquipmentConfig {
    /// 无标签条目对所有动物通用; 标签全部非法的条目不算
    pub fn is_universal(&self) -> bool {
        self.needs_tags.is_empty() && self.dropped_tags == 0
    }

    pub fn is_incompatible_with(&self, animal_id: &str) -> bool {
        self.incompatible_animals.iter().any(|a| a == animal_id)
    }
}
