// ==========================================
// 生成器 - 照明 (UVB / 植物灯)
// ==========================================
// UVB: 低强度 -> T8 (uvb-t8); 中/高强度 -> T5 HO (uvb-t5-ho)
// 灯管长度 = round(宽度 × 覆盖率 / 100)
// 植物灯: 仅在用户选择活体植物时追加
// ==========================================

use crate::domain::plan::Quantity;
use crate::domain::types::{PlantPreference, UvbStrength};
use crate::engine::generators::{CategoryGenerator, ItemOverrides, PlanContext, ShoppingListBuilder};
use crate::engine::sizing::SizingCalculator;
use tracing::debug;

pub const UVB_T5_HO_ID: &str = "uvb-t5-ho";
pub const UVB_T8_ID: &str = "uvb-t8";
pub const PLANT_GROW_LIGHT_ID: &str = "plant-grow-light";

pub struct UvbLightingGenerator;

impl UvbLightingGenerator {
    /// (条目 ID, 灯管类型, 建议输出)
    fn flavor(strength: Option<UvbStrength>) -> (&'static str, &'static str, &'static str) {
        match strength {
            Some(UvbStrength::High) => (UVB_T5_HO_ID, "T5 HO", "10-12% desert"),
            Some(UvbStrength::Medium) => (UVB_T5_HO_ID, "T5 HO", "5-6% forest"),
            Some(UvbStrength::Low) | None => (UVB_T8_ID, "T8", "5% shade-dweller"),
        }
    }
}

impl CategoryGenerator for UvbLightingGenerator {
    fn name(&self) -> &'static str {
        "uvb-lighting"
    }

    fn generate(&self, ctx: &PlanContext<'_>, list: &mut ShoppingListBuilder) {
        let lighting = &ctx.profile.care_targets.lighting;
        if !lighting.uvb_required {
            return;
        }

        let length = SizingCalculator::uvb_fixture_length(ctx.dims.width, lighting.coverage_percent);
        if length == 0 {
            debug!(animal = %ctx.profile.id, "UVB 覆盖率为 0, 不追加灯管");
            return;
        }

        let (id, fixture, output) = Self::flavor(lighting.uvb_strength);
        let mut notes = format!("Use a {} tube.", output);
        if let Some(hours) = lighting.photoperiod_hours {
            notes.push_str(&format!(" Run on a {}-hour photoperiod.", hours));
        }

        list.add(
            ctx,
            id,
            ItemOverrides::default()
                .quantity(Quantity::Count(1))
                .sizing(format!(
                    "{}\" {} fixture ({:.0}% of {:.0}\" width)",
                    length, fixture, lighting.coverage_percent, ctx.dims.width
                ))
                .notes(notes),
        );
    }
}

pub struct PlantLightingGenerator;

impl CategoryGenerator for PlantLightingGenerator {
    fn name(&self) -> &'static str {
        "plant-lighting"
    }

    fn generate(&self, ctx: &PlanContext<'_>, list: &mut ShoppingListBuilder) {
        if ctx.input.plant_preference != Some(PlantPreference::Live) {
            return;
        }

        let bars = SizingCalculator::grow_light_bars(ctx.dims.width);
        list.add(
            ctx,
            PLANT_GROW_LIGHT_ID,
            ItemOverrides::default()
                .quantity(Quantity::Count(bars))
                .sizing(format!(
                    "{} x 24\" LED bar(s) across {:.0}\" width",
                    bars, ctx.dims.width
                )),
        );
    }
}
