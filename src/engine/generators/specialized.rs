// ==========================================
// 生成器 - 专用/水栖装备
// ==========================================
// 输入: 档案 requiredEquipment + 专用/水栖类别中入选的条目
// 水栖类条目附带按箱体体积的规格说明
// ==========================================

use crate::domain::equipment::EquipmentConfig;
use crate::domain::types::EquipmentCategory;
use crate::engine::dimensions::DimensionNormalizer;
use crate::engine::generators::{
    format_dims, CategoryGenerator, ItemOverrides, PlanContext, ShoppingListBuilder,
};

pub struct SpecializedGenerator;

impl SpecializedGenerator {
    fn overrides_for(ctx: &PlanContext<'_>, config: &EquipmentConfig) -> ItemOverrides {
        if config.category != EquipmentCategory::Aquatic {
            return ItemOverrides::default();
        }
        let gallons = DimensionNormalizer::volume_to_gallons(ctx.dims.volume_cubic_in());
        match config.sizing {
            Some(ref sizing) => ItemOverrides::default()
                .sizing(format!("{} (rated for {:.0}+ gallons)", sizing, gallons)),
            None => ItemOverrides::default()
                .sizing(format!("{} (~{:.0} gallons)", format_dims(&ctx.dims), gallons)),
        }
    }
}

impl CategoryGenerator for SpecializedGenerator {
    fn name(&self) -> &'static str {
        "specialized"
    }

    fn generate(&self, ctx: &PlanContext<'_>, list: &mut ShoppingListBuilder) {
        for id in ctx.profile.required_equipment() {
            if let Some(config) = ctx.catalog.get(id) {
                list.add_config(ctx, config, Self::overrides_for(ctx, config));
            } else {
                list.add(ctx, id, ItemOverrides::default());
            }
        }

        for category in [EquipmentCategory::Specialized, EquipmentCategory::Aquatic] {
            for config in ctx.selected_in(category, &[]) {
                list.add_config(ctx, config, Self::overrides_for(ctx, config));
            }
        }
    }
}
