// ==========================================
// 饲养箱装备规划引擎 - 成本估算
// ==========================================
// 职责: 分档总价、类别分解、周期性消耗折算
// 规则:
// - 单价条目: 单价 × 数量 (数量取描述前导整数, 缺省 1)
// - 区间条目: 直接取该档区间
// - 三档总价始终全部计算
// - 类别分解按 max 降序
// ==========================================

use crate::domain::equipment::{PriceRange, TierPrice, DEFAULT_CURRENCY};
use crate::domain::plan::{
    CategoryCost, CostEstimate, RecurringCosts, RecurringItemCost, ShoppingItem, TierTotals,
};
use crate::domain::types::{EquipmentCategory, PricingTier, RecurrenceInterval};
use std::cmp::Ordering;
use std::collections::BTreeMap;
use tracing::debug;

pub struct CostEstimator {
    currency: String,
}

impl Default for CostEstimator {
    fn default() -> Self {
        Self::new(DEFAULT_CURRENCY)
    }
}

impl CostEstimator {
    pub fn new(currency: &str) -> Self {
        Self {
            currency: currency.to_string(),
        }
    }

    pub fn currency(&self) -> &str {
        &self.currency
    }

    /// 周期 -> 月度系数
    pub fn monthly_multiplier(interval: &RecurrenceInterval) -> f64 {
        match interval {
            RecurrenceInterval::Weekly => 4.33,
            RecurrenceInterval::Monthly => 1.0,
            RecurrenceInterval::Bimonthly => 0.5,
            RecurrenceInterval::Quarterly => 0.33,
            RecurrenceInterval::SixMonths => 0.167,
            RecurrenceInterval::Yearly => 0.083,
            RecurrenceInterval::EighteenMonths => 0.056,
            // 未知周期按年
            RecurrenceInterval::Other(_) => 0.083,
        }
    }

    /// 单个条目在指定档位的价格
    pub fn item_cost(&self, item: &ShoppingItem, tier: PricingTier) -> PriceRange {
        match &item.tiers.get(tier).price {
            TierPrice::PerUnit { price_per_unit, .. } => {
                let total = price_per_unit * f64::from(item.quantity.units());
                PriceRange {
                    min: total,
                    max: total,
                    currency: self.currency.clone(),
                }
            }
            TierPrice::Range(range) => PriceRange {
                min: range.min,
                max: range.max,
                currency: self.currency.clone(),
            },
        }
    }

    pub fn tier_total(&self, items: &[ShoppingItem], tier: PricingTier) -> PriceRange {
        let mut total = PriceRange::zero(&self.currency);
        for item in items {
            total.add(&self.item_cost(item, tier));
        }
        total
    }

    /// 类别分解 (按 max 降序, 同额按类别声明顺序)
    pub fn breakdown(&self, items: &[ShoppingItem], tier: PricingTier) -> Vec<CategoryCost> {
        let mut by_category: BTreeMap<EquipmentCategory, CategoryCost> = BTreeMap::new();
        for item in items {
            let entry = by_category.entry(item.category).or_insert_with(|| CategoryCost {
                category: item.category,
                display_name: item.category.display_name().to_string(),
                price: PriceRange::zero(&self.currency),
                item_count: 0,
            });
            entry.price.add(&self.item_cost(item, tier));
            entry.item_count += 1;
        }

        let mut rows: Vec<CategoryCost> = by_category.into_values().collect();
        rows.sort_by(|a, b| {
            b.price
                .max
                .partial_cmp(&a.price.max)
                .unwrap_or(Ordering::Equal)
        });
        rows
    }

    /// 周期性消耗 (无周期条目时为 None)
    ///
    /// # 规则
    /// - 月度 = 该档价格 × 周期系数
    /// - 年度 = 月度 × 12
    pub fn recurring(&self, items: &[ShoppingItem], tier: PricingTier) -> Option<RecurringCosts> {
        let mut monthly = PriceRange::zero(&self.currency);
        let mut rows = Vec::new();

        for item in items {
            let Some(recurrence) = &item.recurrence else {
                continue;
            };
            let factor = Self::monthly_multiplier(&recurrence.interval);
            let item_monthly = self.item_cost(item, tier).scaled(factor);
            monthly.add(&item_monthly);
            rows.push(RecurringItemCost {
                id: item.id.clone(),
                name: item.name.clone(),
                interval: recurrence.interval.clone(),
                monthly: item_monthly,
            });
        }

        if rows.is_empty() {
            return None;
        }
        Some(RecurringCosts {
            yearly: monthly.scaled(12.0),
            monthly,
            items: rows,
        })
    }

    pub fn estimate(&self, items: &[ShoppingItem], tier: PricingTier) -> CostEstimate {
        let by_tier = TierTotals {
            minimum: self.tier_total(items, PricingTier::Minimum),
            recommended: self.tier_total(items, PricingTier::Recommended),
            ideal: self.tier_total(items, PricingTier::Ideal),
        };
        let estimate = CostEstimate {
            tier,
            breakdown: self.breakdown(items, tier),
            recurring: self.recurring(items, tier),
            by_tier,
        };
        debug!(
            tier = %tier,
            item_count = items.len(),
            total_min = estimate.by_tier.get(tier).min,
            total_max = estimate.by_tier.get(tier).max,
            "成本估算完成"
        );
        estimate
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::equipment::{Recurrence, TierOption, TierPricing};
    use crate::domain::plan::Quantity;
    use crate::domain::types::Importance;
    use crate::engine::test_fixtures::flat_tiers;

    fn shopping_item(id: &str, category: EquipmentCategory, tiers: TierPricing) -> ShoppingItem {
        ShoppingItem {
            id: id.to_string(),
            category,
            name: id.to_string(),
            quantity: Quantity::Count(1),
            sizing: String::new(),
            importance: Importance::Required,
            tiers,
            recurrence: None,
            notes: None,
        }
    }

    fn per_unit(price: f64) -> TierPricing {
        let option = TierOption {
            description: String::new(),
            price: TierPrice::PerUnit {
                price_per_unit: price,
                unit: Some("quart".to_string()),
            },
        };
        TierPricing {
            minimum: option.clone(),
            recommended: option.clone(),
            ideal: option,
        }
    }

    #[test]
    fn test_per_unit_price_multiplies_parsed_quantity() {
        let mut soil = shopping_item("soil", EquipmentCategory::Substrate, per_unit(1.5));
        soil.quantity = Quantity::Descriptive("13 quarts".to_string());

        let cost = CostEstimator::default().item_cost(&soil, PricingTier::Recommended);
        assert_eq!(cost.min, 19.5);
        assert_eq!(cost.max, 19.5);
    }

    #[test]
    fn test_range_price_ignores_quantity() {
        let mut hides = shopping_item("hide", EquipmentCategory::Decor, flat_tiers(10.0, 20.0));
        hides.quantity = Quantity::Count(3);

        let cost = CostEstimator::default().item_cost(&hides, PricingTier::Minimum);
        assert_eq!((cost.min, cost.max), (10.0, 20.0));
    }

    #[test]
    fn test_all_tiers_are_computed() {
        let items = vec![shopping_item("lamp", EquipmentCategory::Heating, flat_tiers(10.0, 20.0))];
        let estimate = CostEstimator::default().estimate(&items, PricingTier::Minimum);

        assert_eq!(estimate.by_tier.minimum.max, 20.0);
        assert_eq!(estimate.by_tier.recommended.max, 40.0);
        assert_eq!(estimate.by_tier.ideal.max, 60.0);
    }

    #[test]
    fn test_breakdown_sorted_by_max_descending() {
        let items = vec![
            shopping_item("thermometer", EquipmentCategory::Monitoring, flat_tiers(5.0, 10.0)),
            shopping_item("tank", EquipmentCategory::Enclosure, flat_tiers(100.0, 200.0)),
            shopping_item("lamp", EquipmentCategory::Heating, flat_tiers(20.0, 30.0)),
            shopping_item("dome", EquipmentCategory::Heating, flat_tiers(20.0, 30.0)),
        ];
        let rows = CostEstimator::default().breakdown(&items, PricingTier::Minimum);

        let categories: Vec<EquipmentCategory> = rows.iter().map(|r| r.category).collect();
        assert_eq!(
            categories,
            vec![
                EquipmentCategory::Enclosure,
                EquipmentCategory::Heating,
                EquipmentCategory::Monitoring
            ]
        );
        assert_eq!(rows[1].item_count, 2);
        assert_eq!(rows[1].price.max, 60.0);
    }

    #[test]
    fn test_monthly_recurring_item() {
        let mut insects = shopping_item(
            "calcium",
            EquipmentCategory::Feeding,
            flat_tiers(10.0, 10.0),
        );
        insects.recurrence = Some(Recurrence {
            interval: RecurrenceInterval::Monthly,
        });

        let recurring = CostEstimator::default()
            .recurring(&[insects], PricingTier::Minimum)
            .unwrap();
        assert_eq!(recurring.monthly.max, 10.0);
        assert_eq!(recurring.yearly.max, 120.0);
        assert_eq!(recurring.items.len(), 1);
    }

    #[test]
    fn test_no_recurring_items_yields_none() {
        let items = vec![shopping_item("lamp", EquipmentCategory::Heating, flat_tiers(10.0, 20.0))];
        assert!(CostEstimator::default()
            .recurring(&items, PricingTier::Recommended)
            .is_none());
    }

    #[test]
    fn test_unknown_interval_treated_as_yearly() {
        assert_eq!(
            CostEstimator::monthly_multiplier(&RecurrenceInterval::Other("fortnightly".to_string())),
            CostEstimator::monthly_multiplier(&RecurrenceInterval::Yearly)
        );
    }
}
