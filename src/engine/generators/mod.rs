// ==========================================
// 饲养箱装备规划引擎 - 类别生成器
// ==========================================
// 职责: 每个类别一个生成器, 按固定顺序向购物清单追加条目
// 红线:
// - 同一 ID 在清单中至多出现一次 (先到先得)
// - 不兼容名单在每条追加路径上生效 (含 requiredWith 依赖)
// - 目录缺失的 ID 静默跳过
// ==========================================

pub mod bioactive;
pub mod enclosure;
pub mod heating;
pub mod humidity;
pub mod lighting;
pub mod matched;
pub mod specialized;
pub mod structure;
pub mod substrate;

pub use bioactive::BioactiveGenerator;
pub use enclosure::EnclosureGenerator;
pub use heating::HeatingGenerator;
pub use humidity::HumidityGenerator;
pub use lighting::{PlantLightingGenerator, UvbLightingGenerator};
pub use matched::CategoryMatchGenerator;
pub use specialized::SpecializedGenerator;
pub use structure::StructureGenerator;
pub use substrate::SubstrateGenerator;

use crate::catalog::EquipmentCatalog;
use crate::domain::animal::{AnimalProfile, EquipmentNeeds};
use crate::domain::enclosure::{Dimensions, EnclosureInput};
use crate::domain::equipment::EquipmentConfig;
use crate::domain::plan::{Quantity, ShoppingItem};
use crate::domain::types::EquipmentCategory;
use crate::engine::needs_matcher::NeedsMatcher;
use crate::engine::rule_evaluator::RuleEvaluator;
use std::collections::HashSet;
use tracing::debug;

// ==========================================
// PlanContext - 单次规划的只读上下文
// ==========================================
pub struct PlanContext<'a> {
    pub catalog: &'a EquipmentCatalog,
    pub profile: &'a AnimalProfile,
    pub input: &'a EnclosureInput,
    /// 规范化尺寸 (英寸)
    pub dims: Dimensions,
}

impl<'a> PlanContext<'a> {
    pub fn needs(&self) -> Option<&'a EquipmentNeeds> {
        self.profile.equipment_needs.as_ref()
    }

    /// 条目是否入选
    ///
    /// # 规则
    /// 1. 不兼容 -> 否
    /// 2. 自动包含规则通过 -> 是
    /// 3. 仅有规则、无标签的条目不再走标签匹配
    /// 4. 其余按需求标签匹配
    pub fn selects(&self, config: &EquipmentConfig) -> bool {
        if config.is_incompatible_with(&self.profile.id) {
            return false;
        }
        if RuleEvaluator::should_include(config.auto_include_for.as_ref(), self.profile, self.input)
        {
            return true;
        }
        if config.auto_include_for.is_some() && config.is_universal() {
            return false;
        }
        NeedsMatcher::matches(config, self.needs(), self.input)
    }

    /// 类别内所有入选条目 (ID 字典序), 排除指定 ID
    pub fn selected_in(
        &self,
        category: EquipmentCategory,
        exclude: &[&str],
    ) -> Vec<&'a EquipmentConfig> {
        self.catalog
            .in_category(category)
            .filter(|config| !exclude.contains(&config.id.as_str()))
            .filter(|config| self.selects(config))
            .collect()
    }
}

// ==========================================
// ItemOverrides - 生成器对目录默认值的覆盖
// ==========================================
#[derive(Debug, Clone, Default)]
pub struct ItemOverrides {
    pub quantity: Option<Quantity>,
    pub sizing: Option<String>,
    pub notes: Option<String>,
}

impl ItemOverrides {
    pub fn quantity(mut self, quantity: Quantity) -> Self {
        self.quantity = Some(quantity);
        self
    }

    pub fn sizing(mut self, sizing: String) -> Self {
        self.sizing = Some(sizing);
        self
    }

    pub fn notes(mut self, notes: String) -> Self {
        self.notes = Some(notes);
        self
    }
}

/// 目录数量字段: 纯整数 -> 计数, 否则保留原文
fn catalog_quantity(raw: Option<&str>) -> Quantity {
    match raw {
        None => Quantity::default(),
        Some(text) => match text.trim().parse::<u32>() {
            Ok(n) => Quantity::Count(n),
            Err(_) => Quantity::Descriptive(text.to_string()),
        },
    }
}

// ==========================================
// ShoppingListBuilder - 去重的清单累加器
// ==========================================
#[derive(Debug, Default)]
pub struct ShoppingListBuilder {
    items: Vec<ShoppingItem>,
    seen: HashSet<String>,
}

impl ShoppingListBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contains(&self, id: &str) -> bool {
        self.seen.contains(id)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn items(&self) -> &[ShoppingItem] {
        &self.items
    }

    pub fn into_items(self) -> Vec<ShoppingItem> {
        self.items
    }

    /// 按 ID 从目录追加; 目录无此 ID 时跳过
    pub fn add(&mut self, ctx: &PlanContext<'_>, id: &str, overrides: ItemOverrides) -> bool {
        match ctx.catalog.get(id) {
            Some(config) => self.add_config(ctx, config, overrides),
            None => {
                debug!(item_id = %id, "目录中不存在该装备, 跳过");
                false
            }
        }
    }

    /// 追加条目并递归补齐 requiredWith 依赖
    ///
    /// # 返回
    /// 本次是否新增了该条目
    pub fn add_config(
        &mut self,
        ctx: &PlanContext<'_>,
        config: &EquipmentConfig,
        overrides: ItemOverrides,
    ) -> bool {
        if self.contains(&config.id) {
            return false;
        }
        if config.is_incompatible_with(&ctx.profile.id) {
            debug!(item_id = %config.id, animal = %ctx.profile.id, "装备与该动物不兼容, 跳过");
            return false;
        }

        let item = ShoppingItem {
            id: config.id.clone(),
            category: config.category,
            name: config.name.clone(),
            quantity: overrides
                .quantity
                .unwrap_or_else(|| catalog_quantity(config.quantity.as_deref())),
            sizing: overrides
                .sizing
                .or_else(|| config.sizing.clone())
                .unwrap_or_default(),
            importance: config.importance,
            tiers: config.tiers.clone(),
            recurrence: config.recurrence.clone(),
            notes: overrides.notes.or_else(|| config.notes.clone()),
        };
        self.seen.insert(item.id.clone());
        self.items.push(item);

        for dependency in &config.required_with {
            if !self.contains(dependency) {
                self.add(ctx, dependency, ItemOverrides::default());
            }
        }
        true
    }
}

// ==========================================
// CategoryGenerator - 生成器接口
// ==========================================
pub trait CategoryGenerator: Send + Sync {
    fn name(&self) -> &'static str;

    /// 完全水栖物种是否执行
    fn runs_for_aquatic(&self) -> bool {
        true
    }

    fn generate(&self, ctx: &PlanContext<'_>, list: &mut ShoppingListBuilder);
}

/// 尺寸展示 (英寸, 取整)
pub(crate) fn format_dims(dims: &Dimensions) -> String {
    format!(
        "{:.0}\" W x {:.0}\" D x {:.0}\" H",
        dims.width, dims.depth, dims.height
    )
}
