// ==========================================
// 生成器 - 垫材
// ==========================================
// bioactive: substrate-bioactive-<tropical|arid>, 铺设 4"
// 普通: 偏好兼容则用偏好, 否则取档案首选 (附说明), 铺设 2"
// ==========================================

use crate::domain::plan::Quantity;
use crate::domain::types::{wire_name, BioactiveSubstrate, SubstrateKind};
use crate::engine::generators::{CategoryGenerator, ItemOverrides, PlanContext, ShoppingListBuilder};
use crate::engine::sizing::SizingCalculator;
use tracing::debug;

pub struct SubstrateGenerator;

impl SubstrateGenerator {
    /// 选定垫材种类; 返回 (种类, 偏好被替换时的说明)
    pub fn choose_kind(ctx: &PlanContext<'_>) -> Option<(SubstrateKind, Option<String>)> {
        let compatible = ctx.needs().map(|n| n.substrate.as_slice()).unwrap_or(&[]);
        let preference = ctx.input.substrate_preference;

        match preference {
            Some(pref) if compatible.is_empty() || compatible.contains(&pref) => Some((pref, None)),
            Some(pref) => compatible.first().map(|&fallback| {
                let note = format!(
                    "{} is not suitable for {}; using {} instead.",
                    wire_name(&pref),
                    ctx.profile.common_name,
                    wire_name(&fallback)
                );
                (fallback, Some(note))
            }),
            None => compatible.first().map(|&kind| (kind, None)),
        }
    }
}

impl CategoryGenerator for SubstrateGenerator {
    fn name(&self) -> &'static str {
        "substrate"
    }

    fn runs_for_aquatic(&self) -> bool {
        false
    }

    fn generate(&self, ctx: &PlanContext<'_>, list: &mut ShoppingListBuilder) {
        let bioactive = ctx.input.bioactive;
        let quarts = SizingCalculator::substrate_quarts(ctx.dims.width, ctx.dims.depth, bioactive);
        let depth = SizingCalculator::substrate_depth_in(bioactive);
        let sizing = format!(
            "{}\" deep across a {:.0}\" x {:.0}\" footprint",
            depth, ctx.dims.width, ctx.dims.depth
        );

        let (id, note) = if bioactive {
            let flavor = ctx
                .needs()
                .and_then(|n| n.bioactive_substrate)
                .unwrap_or(BioactiveSubstrate::Tropical);
            (format!("substrate-bioactive-{}", wire_name(&flavor)), None)
        } else {
            match Self::choose_kind(ctx) {
                Some((kind, note)) => (format!("substrate-{}", wire_name(&kind)), note),
                None => {
                    debug!(animal = %ctx.profile.id, "无垫材偏好且档案未声明兼容垫材, 跳过");
                    return;
                }
            }
        };

        let mut overrides = ItemOverrides::default()
            .quantity(Quantity::Descriptive(format!("{} quarts", quarts)))
            .sizing(sizing);
        if let Some(note) = note {
            overrides = overrides.notes(note);
        }
        list.add(ctx, &id, overrides);
    }
}
