// ==========================================
// 生成器 - 加热
// ==========================================
// 晒点模式: basking-heat-bulb, 目标 = 晒点温度 (缺省取 max)
// 环境模式: radiant-heat-panel, 目标 = max
// 触发: 两种模式均以 min 为阈值, 室温 >= min 时不加热
// 夜间: 室温低于 nightMin 时追加 ceramic-heat-emitter
// ==========================================

use crate::domain::plan::Quantity;
use crate::domain::types::HeatSource;
use crate::engine::dimensions::DimensionNormalizer;
use crate::engine::generators::{CategoryGenerator, ItemOverrides, PlanContext, ShoppingListBuilder};
use crate::engine::sizing::{HeatingMode, SizingCalculator};
use tracing::debug;

pub const BASKING_BULB_ID: &str = "basking-heat-bulb";
pub const RADIANT_PANEL_ID: &str = "radiant-heat-panel";
pub const NIGHT_HEAT_ID: &str = "ceramic-heat-emitter";

pub struct HeatingGenerator;

impl HeatingGenerator {
    /// (条目 ID, 模式, 目标温度); 目标只用于功率计算
    fn plan_for(ctx: &PlanContext<'_>) -> Option<(&'static str, HeatingMode, f64)> {
        let temperature = &ctx.profile.care_targets.temperature;
        match ctx.profile.heat_source()? {
            HeatSource::Basking => Some((
                BASKING_BULB_ID,
                HeatingMode::Basking,
                temperature.basking.unwrap_or(temperature.max),
            )),
            HeatSource::Ambient => Some((RADIANT_PANEL_ID, HeatingMode::Ambient, temperature.max)),
            HeatSource::None => None,
        }
    }

    fn add_night_heat(ctx: &PlanContext<'_>, list: &mut ShoppingListBuilder, cubic_feet: f64) {
        let Some(night_min) = ctx.profile.care_targets.temperature.night_min else {
            return;
        };
        if ctx.input.ambient_temp >= night_min {
            return;
        }

        let diff = night_min - ctx.input.ambient_temp;
        let watts = SizingCalculator::heating_wattage(cubic_feet, diff, HeatingMode::Ambient);
        list.add(
            ctx,
            NIGHT_HEAT_ID,
            ItemOverrides::default()
                .quantity(Quantity::Count(1))
                .sizing(format!("{:.0}W", watts))
                .notes(format!(
                    "Room drops below the {:.0}°F night minimum; provides heat without light.",
                    night_min
                )),
        );
    }
}

impl CategoryGenerator for HeatingGenerator {
    fn name(&self) -> &'static str {
        "heating"
    }

    fn generate(&self, ctx: &PlanContext<'_>, list: &mut ShoppingListBuilder) {
        let cubic_feet = DimensionNormalizer::volume_to_cubic_feet(ctx.dims.volume_cubic_in());

        if let Some((id, mode, target)) = Self::plan_for(ctx) {
            let threshold = ctx.profile.care_targets.temperature.min;
            if ctx.input.ambient_temp >= threshold {
                debug!(
                    ambient = ctx.input.ambient_temp,
                    threshold = threshold,
                    "室温已满足加热目标, 不追加加热器"
                );
            } else {
                let diff = target - ctx.input.ambient_temp;
                let watts = SizingCalculator::heating_wattage(cubic_feet, diff, mode);
                list.add(
                    ctx,
                    id,
                    ItemOverrides::default()
                        .quantity(Quantity::Count(1))
                        .sizing(format!("{:.0}W", watts))
                        .notes(format!(
                            "Targets {:.0}°F from a {:.0}°F room ({:.0}°F rise).",
                            target, ctx.input.ambient_temp, diff
                        )),
                );
            }
        }

        Self::add_night_heat(ctx, list, cubic_feet);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::EquipmentCatalog;
    use crate::domain::enclosure::Dimensions;
    use crate::domain::types::EquipmentCategory;
    use crate::engine::test_fixtures::{gecko_input, gecko_profile, item};

    fn catalog() -> EquipmentCatalog {
        EquipmentCatalog::from_configs(vec![
            item(BASKING_BULB_ID, EquipmentCategory::Heating, &[]),
            item(RADIANT_PANEL_ID, EquipmentCategory::Heating, &[]),
            item(NIGHT_HEAT_ID, EquipmentCategory::Heating, &[]),
        ])
        .unwrap()
    }

    fn run(ambient_temp: f64, heat: HeatSource) -> ShoppingListBuilder {
        let catalog = catalog();
        let mut profile = gecko_profile();
        profile.equipment_needs.as_mut().unwrap().heat_source = Some(heat);
        let mut input = gecko_input();
        input.ambient_temp = ambient_temp;
        let ctx = PlanContext {
            catalog: &catalog,
            profile: &profile,
            input: &input,
            dims: Dimensions {
                width: 36.0,
                depth: 18.0,
                height: 18.0,
            },
        };
        let mut list = ShoppingListBuilder::new();
        HeatingGenerator.generate(&ctx, &mut list);
        list
    }

    #[test]
    fn test_basking_bulb_sized_from_basking_target() {
        // 6.75 ft³ x 20 = 135; 135 x (20 / 20) = 135
        let list = run(72.0, HeatSource::Basking);
        let bulb = &list.items()[0];
        assert_eq!(bulb.id, BASKING_BULB_ID);
        assert_eq!(bulb.sizing, "135W");
    }

    #[test]
    fn test_basking_bulb_skipped_when_room_meets_minimum() {
        // min 75 <= 80 < basking 92
        let list = run(80.0, HeatSource::Basking);
        assert!(!list.contains(BASKING_BULB_ID));
        assert!(list.is_empty());
    }

    #[test]
    fn test_basking_bulb_added_just_below_minimum() {
        // 135 x (19 / 20) = 128.25
        let list = run(73.0, HeatSource::Basking);
        assert_eq!(list.items()[0].id, BASKING_BULB_ID);
        assert_eq!(list.items()[0].sizing, "128W");
    }

    #[test]
    fn test_ambient_panel_skipped_when_room_is_warm_enough() {
        let list = run(76.0, HeatSource::Ambient);
        assert!(!list.contains(RADIANT_PANEL_ID));
    }

    #[test]
    fn test_night_heat_added_when_room_drops_below_night_min() {
        let list = run(60.0, HeatSource::None);
        assert!(list.contains(NIGHT_HEAT_ID));
        assert!(!list.contains(BASKING_BULB_ID));
    }
}
