// ==========================================
// 饲养箱装备规划引擎 - 规划输出实体
// ==========================================
// 职责: 购物清单/成本估算/告警/检查清单/完整方案
// 红线: 每次规划新建, 不持久化
// ==========================================

use crate::domain::animal::{CareTargets, ZoneKind};
use crate::domain::enclosure::{Dimensions, EnclosureInput};
use crate::domain::equipment::{PriceRange, Recurrence, TierPricing};
use crate::domain::types::{
    CareLevel, EquipmentCategory, Importance, PricingTier, RecurrenceInterval, Severity,
    WarningCategory,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

// ==========================================
// ShoppingItem - 购物清单条目
// ==========================================

/// 数量: 计数 或 描述性文本 ("13 quarts")
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Quantity {
    Count(u32),
    Descriptive(String),
}

impl Quantity {
    /// 成本计算用数量: 取描述文本的前导整数, 无法解析时为 1
    pub fn units(&self) -> u32 {
        match self {
            Quantity::Count(n) => *n,
            Quantity::Descriptive(text) => {
                let digits: String = text
                    .trim_start()
                    .chars()
                    .take_while(|c| c.is_ascii_digit())
                    .collect();
                digits.parse().unwrap_or(1)
            }
        }
    }
}

impl Default for Quantity {
    fn default() -> Self {
        Quantity::Count(1)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShoppingItem {
    pub id: String,
    pub category: EquipmentCategory,
    pub name: String,
    pub quantity: Quantity,
    pub sizing: String,
    pub importance: Importance,
    pub tiers: TierPricing,
    #[serde(default)]
    pub recurrence: Option<Recurrence>,
    #[serde(default)]
    pub notes: Option<String>,
}

// ==========================================
// Warning - 告警
// ==========================================
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Warning {
    pub id: String,
    pub severity: Severity,
    pub category: WarningCategory,
    pub message: String,
}

impl Warning {
    pub fn new(id: &str, severity: Severity, category: WarningCategory, message: String) -> Self {
        Self {
            id: id.to_string(),
            severity,
            category,
            message,
        }
    }
}

// ==========================================
// CostEstimate - 成本估算
// ==========================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TierTotals {
    pub minimum: PriceRange,
    pub recommended: PriceRange,
    pub ideal: PriceRange,
}

impl TierTotals {
    pub fn get(&self, tier: PricingTier) -> &PriceRange {
        match tier {
            PricingTier::Minimum => &self.minimum,
            PricingTier::Recommended => &self.recommended,
            PricingTier::Ideal => &self.ideal,
        }
    }
}

/// 类别分解行 (按 max 降序)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryCost {
    pub category: EquipmentCategory,
    pub display_name: String,
    pub price: PriceRange,
    pub item_count: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecurringItemCost {
    pub id: String,
    pub name: String,
    pub interval: RecurrenceInterval,
    pub monthly: PriceRange,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecurringCosts {
    pub monthly: PriceRange,
    pub yearly: PriceRange,
    pub items: Vec<RecurringItemCost>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CostEstimate {
    /// 当前选择的档位
    pub tier: PricingTier,
    pub by_tier: TierTotals,
    pub breakdown: Vec<CategoryCost>,
    #[serde(default)]
    pub recurring: Option<RecurringCosts>,
}

// ==========================================
// 饲养检查清单 (Husbandry Checklist)
// ==========================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChecklistItem {
    pub id: String,
    pub task: String,
    #[serde(default)]
    pub notes: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct HusbandryCareChecklist {
    pub pre_build: Vec<ChecklistItem>,
    pub weekly: Vec<ChecklistItem>,
    pub monthly: Vec<ChecklistItem>,
}

// ==========================================
// BuildPlan - 完整方案
// ==========================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ZonePlacement {
    WarmSide,
    CoolSide,
    Upper,
    Lower,
    FullWidth,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LayoutZone {
    pub zone: ZoneKind,
    pub placement: ZonePlacement,
    pub required: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BuildStep {
    pub order: u32,
    pub title: String,
    pub detail: String,
    /// 本步骤涉及的清单条目 ID
    #[serde(default)]
    pub item_ids: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlanMetadata {
    pub animal_id: String,
    pub common_name: String,
    pub scientific_name: String,
    pub care_level: CareLevel,
    pub engine_version: String,
    /// 不参与确定性比较
    pub generated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BuildPlan {
    pub enclosure: EnclosureInput,
    pub dimensions: Dimensions,
    pub care_targets: CareTargets,
    pub layout: Vec<LayoutZone>,
    pub shopping_list: Vec<ShoppingItem>,
    pub steps: Vec<BuildStep>,
    pub warnings: Vec<Warning>,
    pub care_guidance: Vec<String>,
    pub husbandry_checklist: HusbandryCareChecklist,
    pub metadata: PlanMetadata,
}

impl BuildPlan {
    pub fn item(&self, id: &str) -> Option<&ShoppingItem> {
        self.shopping_list.iter().find(|item| item.id == id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_quantity_units_parses_leading_integer() {
        assert_eq!(Quantity::Count(3).units(), 3);
        assert_eq!(Quantity::Descriptive("13 quarts".to_string()).units(), 13);
        assert_eq!(Quantity::Descriptive("2-3 bags".to_string()).units(), 2);
        assert_eq!(Quantity::Descriptive("As needed".to_string()).units(), 1);
        assert_eq!(Quantity::Descriptive(String::new()).units(), 1);
    }

    #[test]
    fn test_quantity_serializes_untagged() {
        assert_eq!(serde_json::to_string(&Quantity::Count(2)).unwrap(), "2");
        assert_eq!(
            serde_json::to_string(&Quantity::Descriptive("1 kit".to_string())).unwrap(),
            "\"1 kit\""
        );
    }
}
