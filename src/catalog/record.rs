// ==========================================
// 饲养箱装备规划引擎 - 目录原始记录与校验
// ==========================================
// 职责: JSON 原始记录 -> 规范化 EquipmentConfig
// 输入: RawEquipmentRecord (字符串标签, 可选价格字段)
// 输出: EquipmentConfig + 非致命诊断
// ==========================================

use crate::catalog::error::{CatalogError, CatalogResult};
use crate::catalog::registry::LoadReport;
use crate::domain::equipment::{
    AutoIncludeRule, EquipmentConfig, NeedsTag, PriceRange, Recurrence, TierOption, TierPrice,
    TierPricing,
};
use crate::domain::types::{EquipmentCategory, Importance, PricingTier, RecurrenceInterval};
use serde::{Deserialize, Serialize};
use tracing::warn;

fn default_importance() -> Importance {
    Importance::Recommended
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawTierOption {
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub price_range: Option<PriceRange>,
    #[serde(default)]
    pub price_per_unit: Option<f64>,
    #[serde(default)]
    pub unit: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RawTiers {
    pub minimum: RawTierOption,
    pub recommended: RawTierOption,
    pub ideal: RawTierOption,
}

/// 目录原始记录 (分区 JSON 的值)
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawEquipmentRecord {
    pub name: String,
    pub category: EquipmentCategory,
    #[serde(default = "default_importance")]
    pub importance: Importance,
    #[serde(default)]
    pub needs_tags: Vec<String>,
    #[serde(default)]
    pub auto_include_for: Option<AutoIncludeRule>,
    #[serde(default)]
    pub incompatible_animals: Vec<String>,
    pub tiers: RawTiers,
    #[serde(default)]
    pub recurring: bool,
    #[serde(default)]
    pub recurring_interval: Option<String>,
    #[serde(default)]
    pub required_with: Vec<String>,
    #[serde(default)]
    pub quantity: Option<String>,
    #[serde(default)]
    pub sizing: Option<String>,
    #[serde(default)]
    pub notes: Option<String>,
}

impl RawEquipmentRecord {
    /// 校验并转换为规范条目
    ///
    /// # 规则
    /// 1. 每档必须有 priceRange 或 pricePerUnit (同时存在时单价优先)
    /// 2. 非法标签: strict 模式报错, 否则丢弃并记录诊断
    /// 3. recurring=true 但无周期 -> 按年
    pub fn into_config(
        self,
        id: &str,
        strict_tags: bool,
        report: &mut LoadReport,
    ) -> CatalogResult<EquipmentConfig> {
        let tiers = TierPricing {
            minimum: convert_tier(id, PricingTier::Minimum, self.tiers.minimum)?,
            recommended: convert_tier(id, PricingTier::Recommended, self.tiers.recommended)?,
            ideal: convert_tier(id, PricingTier::Ideal, self.tiers.ideal)?,
        };

        let mut needs_tags = Vec::with_capacity(self.needs_tags.len());
        let mut dropped_tags = 0;
        for raw in &self.needs_tags {
            match NeedsTag::parse(raw) {
                Ok(tag) => needs_tags.push(tag),
                Err(source) if strict_tags => {
                    return Err(CatalogError::InvalidTag {
                        id: id.to_string(),
                        source,
                    })
                }
                Err(err) => {
                    warn!(item_id = %id, tag = %raw, error = %err, "丢弃无法识别的需求标签");
                    report.record(id, format!("dropped tag '{}': {}", raw, err));
                    dropped_tags += 1;
                }
            }
        }

        // 原条目有标签但全部被丢弃时, 不能退化为通用条目
        if needs_tags.is_empty() && !self.needs_tags.is_empty() {
            warn!(item_id = %id, "条目标签全部无效, 该条目不会通过标签匹配");
            report.record(id, "all tags dropped; item excluded from tag matching".to_string());
        }

        let recurrence = if self.recurring {
            Some(Recurrence {
                interval: self
                    .recurring_interval
                    .as_deref()
                    .map(RecurrenceInterval::parse)
                    .unwrap_or(RecurrenceInterval::Yearly),
            })
        } else {
            None
        };

        Ok(EquipmentConfig {
            id: id.to_string(),
            name: self.name,
            category: self.category,
            importance: self.importance,
            needs_tags,
            dropped_tags,
            auto_include_for: self.auto_include_for,
            incompatible_animals: self.incompatible_animals,
            tiers,
            recurrence,
            required_with: self.required_with,
            quantity: self.quantity,
            sizing: self.sizing,
            notes: self.notes,
        })
    }
}

fn convert_tier(id: &str, tier: PricingTier, raw: RawTierOption) -> CatalogResult<TierOption> {
    let price = match (raw.price_per_unit, raw.price_range) {
        (Some(price_per_unit), _) => TierPrice::PerUnit {
            price_per_unit,
            unit: raw.unit,
        },
        (None, Some(range)) => TierPrice::Range(range),
        (None, None) => {
            return Err(CatalogError::MissingTierPrice {
                id: id.to_string(),
                tier,
            })
        }
    };

    Ok(TierOption {
        description: raw.description,
        price,
    })
}
