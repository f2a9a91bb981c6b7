// ==========================================
// 引擎单元测试夹具
// ==========================================

use crate::domain::animal::{
    AnimalProfile, CareTargets, EquipmentNeeds, HumidityRange, LayoutRules, LightingRequirements,
    MinEnclosureSize, TemperatureRange, ZoneKind,
};
use crate::domain::enclosure::EnclosureInput;
use crate::domain::equipment::{
    EquipmentConfig, NeedsTag, PriceRange, TierOption, TierPrice, TierPricing,
};
use crate::domain::types::{
    Activity, AnimalType, CareLevel, ClimbingStyle, DecorNeed, DietKind, EquipmentCategory,
    HeatSource, HumidityBand, Importance, SubstrateKind, Units, UvbStrength, WaterFeature,
};

pub fn flat_tiers(min: f64, max: f64) -> TierPricing {
    let option = |factor: f64| TierOption {
        description: String::new(),
        price: TierPrice::Range(PriceRange::new(min * factor, max * factor)),
    };
    TierPricing {
        minimum: option(1.0),
        recommended: option(2.0),
        ideal: option(3.0),
    }
}

pub fn item(id: &str, category: EquipmentCategory, tags: &[&str]) -> EquipmentConfig {
    EquipmentConfig {
        id: id.to_string(),
        name: id.to_string(),
        category,
        importance: Importance::Recommended,
        needs_tags: tags.iter().map(|t| NeedsTag::parse(t).unwrap()).collect(),
        dropped_tags: 0,
        auto_include_for: None,
        incompatible_animals: Vec::new(),
        tiers: flat_tiers(10.0, 20.0),
        recurrence: None,
        required_with: Vec::new(),
        quantity: None,
        sizing: None,
        notes: None,
    }
}

/// 陆栖、晒点加热、食虫的类豹纹守宫档案
pub fn gecko_profile() -> AnimalProfile {
    AnimalProfile {
        id: "test-gecko".to_string(),
        common_name: "Test Gecko".to_string(),
        scientific_name: "Testus geckonis".to_string(),
        care_level: CareLevel::Beginner,
        min_enclosure_size: MinEnclosureSize {
            width: 36.0,
            depth: 18.0,
            height: 18.0,
            units: Units::Inches,
        },
        care_targets: CareTargets {
            temperature: TemperatureRange {
                min: 75.0,
                max: 88.0,
                basking: Some(92.0),
                night_min: Some(65.0),
            },
            humidity: HumidityRange {
                min: 30.0,
                max: 40.0,
                day: None,
                night: None,
                shedding: None,
            },
            lighting: LightingRequirements {
                uvb_required: true,
                uvb_strength: Some(UvbStrength::Low),
                coverage_percent: 50.0,
                photoperiod_hours: Some(12),
            },
        },
        layout_rules: LayoutRules {
            vertical_preference: false,
            required_zones: vec![ZoneKind::Basking, ZoneKind::Cool, ZoneKind::Hide],
            optional_zones: vec![ZoneKind::HumidHide],
        },
        equipment_needs: Some(EquipmentNeeds {
            climbing: Some(ClimbingStyle::Terrestrial),
            substrate: vec![SubstrateKind::SandSoilMix, SubstrateKind::Tile],
            humidity: Some(HumidityBand::Low),
            heat_source: Some(HeatSource::Basking),
            water_feature: Some(WaterFeature::ShallowDish),
            decor: vec![DecorNeed::Hides, DecorNeed::Rocks],
            diet: vec![DietKind::Insectivore],
            animal_type: Some(AnimalType::Reptile),
            bioactive_substrate: None,
            climate: None,
            activity: Some(Activity::Nocturnal),
            required_equipment: Vec::new(),
        }),
        warnings: Vec::new(),
        care_guidance: Vec::new(),
    }
}

pub fn gecko_input() -> EnclosureInput {
    EnclosureInput::new("test-gecko", 36.0, 18.0, 18.0, Units::Inches)
}
