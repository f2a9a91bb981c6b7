// ==========================================
// 生成器 - 湿度控制
// ==========================================
// 策略 -> 设备: manual=喷壶, misting-system/humidifier/fogger 同名设备
// 策略 none 且室内湿度低于下限 -> 补一个喷壶
// 其余湿度类条目 (湿润躲避洞等) 按标签入选
// ==========================================

use crate::domain::types::{EquipmentCategory, HumidityControl};
use crate::engine::generators::{CategoryGenerator, ItemOverrides, PlanContext, ShoppingListBuilder};

pub const SPRAY_BOTTLE_ID: &str = "spray-bottle";
pub const MISTING_SYSTEM_ID: &str = "misting-system";
pub const HUMIDIFIER_ID: &str = "humidifier";
pub const FOGGER_ID: &str = "fogger";

const CONTROL_DEVICES: &[&str] = &[SPRAY_BOTTLE_ID, MISTING_SYSTEM_ID, HUMIDIFIER_ID, FOGGER_ID];

pub struct HumidityGenerator;

impl HumidityGenerator {
    fn control_device(ctx: &PlanContext<'_>) -> Option<(&'static str, Option<String>)> {
        match ctx.input.humidity_control {
            HumidityControl::Manual => Some((SPRAY_BOTTLE_ID, None)),
            HumidityControl::MistingSystem => Some((MISTING_SYSTEM_ID, None)),
            HumidityControl::Humidifier => Some((HUMIDIFIER_ID, None)),
            HumidityControl::Fogger => Some((FOGGER_ID, None)),
            HumidityControl::None => {
                let min = ctx.profile.care_targets.humidity.min;
                (ctx.input.ambient_humidity < min).then(|| {
                    let note = format!(
                        "Room humidity ({:.0}%) is below the {:.0}% minimum; mist by hand.",
                        ctx.input.ambient_humidity, min
                    );
                    (SPRAY_BOTTLE_ID, Some(note))
                })
            }
        }
    }
}

impl CategoryGenerator for HumidityGenerator {
    fn name(&self) -> &'static str {
        "humidity"
    }

    fn runs_for_aquatic(&self) -> bool {
        false
    }

    fn generate(&self, ctx: &PlanContext<'_>, list: &mut ShoppingListBuilder) {
        if let Some((id, note)) = Self::control_device(ctx) {
            let overrides = match note {
                Some(note) => ItemOverrides::default().notes(note),
                None => ItemOverrides::default(),
            };
            list.add(ctx, id, overrides);
        }

        for config in ctx.selected_in(EquipmentCategory::Humidity, CONTROL_DEVICES) {
            list.add_config(ctx, config, ItemOverrides::default());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::EquipmentCatalog;
    use crate::engine::dimensions::DimensionNormalizer;
    use crate::engine::test_fixtures::{gecko_input, gecko_profile, item};

    fn run(control: HumidityControl, ambient_humidity: f64) -> ShoppingListBuilder {
        let catalog = EquipmentCatalog::from_configs(vec![
            item(SPRAY_BOTTLE_ID, EquipmentCategory::Humidity, &[]),
            item(MISTING_SYSTEM_ID, EquipmentCategory::Humidity, &[]),
            item(FOGGER_ID, EquipmentCategory::Humidity, &[]),
            item("humid-hide", EquipmentCategory::Humidity, &["humidity:low"]),
            item("distilled-water", EquipmentCategory::Humidity, &["humidity:high"]),
        ])
        .unwrap();
        let profile = gecko_profile();
        let mut input = gecko_input();
        input.humidity_control = control;
        input.ambient_humidity = ambient_humidity;
        let ctx = PlanContext {
            catalog: &catalog,
            profile: &profile,
            input: &input,
            dims: DimensionNormalizer::normalize_input(&input),
        };
        let mut list = ShoppingListBuilder::new();
        HumidityGenerator.generate(&ctx, &mut list);
        list
    }

    #[test]
    fn test_strategy_maps_to_single_device() {
        let list = run(HumidityControl::MistingSystem, 50.0);
        assert!(list.contains(MISTING_SYSTEM_ID));
        assert!(!list.contains(SPRAY_BOTTLE_ID));
        assert!(!list.contains(FOGGER_ID));
    }

    #[test]
    fn test_dry_room_without_strategy_gets_spray_bottle() {
        let list = run(HumidityControl::None, 20.0);
        let bottle = &list.items()[0];
        assert_eq!(bottle.id, SPRAY_BOTTLE_ID);
        assert!(bottle.notes.as_deref().unwrap_or_default().contains("below"));

        assert!(!run(HumidityControl::None, 35.0).contains(SPRAY_BOTTLE_ID));
    }

    #[test]
    fn test_tagged_humidity_items_follow_animal_band() {
        let list = run(HumidityControl::None, 35.0);
        assert!(list.contains("humid-hide"));
        assert!(!list.contains("distilled-water"));
    }
}
