// ==========================================
// 生成器 - bioactive 附加层
// ==========================================
// 排水层 (按箱高 1.5"/2.5") + 隔离网 + 对应气候的清洁工
// 其余 bioactive 类条目按标签/规则入选 (落叶层等)
// ==========================================

use crate::domain::plan::Quantity;
use crate::domain::types::{wire_name, BioactiveSubstrate, EquipmentCategory};
use crate::engine::generators::{CategoryGenerator, ItemOverrides, PlanContext, ShoppingListBuilder};
use crate::engine::sizing::SizingCalculator;

pub const DRAINAGE_LAYER_ID: &str = "drainage-layer";
pub const SUBSTRATE_BARRIER_ID: &str = "substrate-barrier";
const CLEANUP_CREW_PREFIX: &str = "cleanup-crew-";

pub struct BioactiveGenerator;

impl CategoryGenerator for BioactiveGenerator {
    fn name(&self) -> &'static str {
        "bioactive"
    }

    fn runs_for_aquatic(&self) -> bool {
        false
    }

    fn generate(&self, ctx: &PlanContext<'_>, list: &mut ShoppingListBuilder) {
        if !ctx.input.bioactive {
            return;
        }

        let dims = &ctx.dims;
        let drainage_quarts = SizingCalculator::drainage_quarts(dims.width, dims.depth, dims.height);
        list.add(
            ctx,
            DRAINAGE_LAYER_ID,
            ItemOverrides::default()
                .quantity(Quantity::Descriptive(format!("{} quarts", drainage_quarts)))
                .sizing(format!(
                    "{}\" layer under the substrate",
                    SizingCalculator::drainage_depth_in(dims.height)
                )),
        );
        list.add(
            ctx,
            SUBSTRATE_BARRIER_ID,
            ItemOverrides::default().sizing(format!(
                "{:.0}\" x {:.0}\" mesh sheet",
                dims.width, dims.depth
            )),
        );

        let flavor = ctx
            .needs()
            .and_then(|n| n.bioactive_substrate)
            .unwrap_or(BioactiveSubstrate::Tropical);
        list.add(
            ctx,
            &format!("{}{}", CLEANUP_CREW_PREFIX, wire_name(&flavor)),
            ItemOverrides::default(),
        );

        for config in ctx.selected_in(EquipmentCategory::Bioactive, &[]) {
            if config.id.starts_with(CLEANUP_CREW_PREFIX) {
                continue;
            }
            list.add_config(ctx, config, ItemOverrides::default());
        }
    }
}
