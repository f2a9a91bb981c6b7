// ==========================================
// 生成器 - 饲养箱本体
// ==========================================
// 条目 ID: enclosure-<材质>
// 水栖物种由专用生成器提供水族箱, 此处跳过
// ==========================================

use crate::domain::plan::Quantity;
use crate::domain::types::{wire_name, DoorOrientation};
use crate::engine::dimensions::DimensionNormalizer;
use crate::engine::generators::{
    format_dims, CategoryGenerator, ItemOverrides, PlanContext, ShoppingListBuilder,
};

pub struct EnclosureGenerator;

impl CategoryGenerator for EnclosureGenerator {
    fn name(&self) -> &'static str {
        "enclosure"
    }

    fn runs_for_aquatic(&self) -> bool {
        false
    }

    fn generate(&self, ctx: &PlanContext<'_>, list: &mut ShoppingListBuilder) {
        let id = format!("enclosure-{}", wire_name(&ctx.input.enclosure_type));
        let gallons = DimensionNormalizer::volume_to_gallons(ctx.dims.volume_cubic_in());

        let mut notes = Vec::new();
        if ctx.profile.layout_rules.vertical_preference
            && ctx.input.door_orientation == DoorOrientation::Top
        {
            notes.push(
                "Top-opening access can stress arboreal species; front-opening doors are preferred."
                    .to_string(),
            );
        }
        if ctx.input.quantity > 1 {
            notes.push(format!(
                "Sized for {} animals; confirm the species tolerates cohabitation.",
                ctx.input.quantity
            ));
        }

        let mut overrides = ItemOverrides::default()
            .quantity(Quantity::Count(1))
            .sizing(format!("{} (~{:.0} gallons)", format_dims(&ctx.dims), gallons));
        if !notes.is_empty() {
            overrides = overrides.notes(notes.join(" "));
        }

        list.add(ctx, &id, overrides);
    }
}
