// ==========================================
// 测试数据构建器 - 用于集成测试
// ==========================================

#![allow(dead_code)]

use enclosure_planner::catalog::{EquipmentCatalog, ProfileRegistry, ReferenceData};
use enclosure_planner::domain::animal::{
    AnimalProfile, CareTargets, EquipmentNeeds, HumidityRange, LayoutRules, LightingRequirements,
    MinEnclosureSize, TemperatureRange, ZoneKind,
};
use enclosure_planner::domain::enclosure::EnclosureInput;
use enclosure_planner::domain::equipment::{
    AutoIncludeRule, EquipmentConfig, NeedsTag, PriceRange, Recurrence, TierOption, TierPrice,
    TierPricing,
};
use enclosure_planner::domain::plan::Warning;
use enclosure_planner::domain::types::{
    Activity, AnimalType, CareLevel, ClimbingStyle, DecorNeed, DietKind, EquipmentCategory,
    HeatSource, HumidityBand, Importance, RecurrenceInterval, SubstrateKind, Units, UvbStrength,
    WaterFeature,
};
use std::sync::Arc;

// ==========================================
// EquipmentConfig 构建器
// ==========================================

pub struct EquipmentBuilder {
    config: EquipmentConfig,
}

impl EquipmentBuilder {
    pub fn new(id: &str, category: EquipmentCategory) -> Self {
        let flat = |min: f64, max: f64| TierOption {
            description: String::new(),
            price: TierPrice::Range(PriceRange::new(min, max)),
        };
        Self {
            config: EquipmentConfig {
                id: id.to_string(),
                name: id.to_string(),
                category,
                importance: Importance::Recommended,
                needs_tags: Vec::new(),
                dropped_tags: 0,
                auto_include_for: None,
                incompatible_animals: Vec::new(),
                tiers: TierPricing {
                    minimum: flat(10.0, 20.0),
                    recommended: flat(20.0, 40.0),
                    ideal: flat(40.0, 80.0),
                },
                recurrence: None,
                required_with: Vec::new(),
                quantity: None,
                sizing: None,
                notes: None,
            },
        }
    }

    pub fn tags(mut self, tags: &[&str]) -> Self {
        self.config.needs_tags = tags.iter().map(|t| NeedsTag::parse(t).unwrap()).collect();
        self
    }

    pub fn incompatible(mut self, animals: &[&str]) -> Self {
        self.config.incompatible_animals = animals.iter().map(|a| a.to_string()).collect();
        self
    }

    pub fn required_with(mut self, ids: &[&str]) -> Self {
        self.config.required_with = ids.iter().map(|id| id.to_string()).collect();
        self
    }

    pub fn rule(mut self, rule: AutoIncludeRule) -> Self {
        self.config.auto_include_for = Some(rule);
        self
    }

    /// 三档同价
    pub fn price(mut self, min: f64, max: f64) -> Self {
        let option = TierOption {
            description: String::new(),
            price: TierPrice::Range(PriceRange::new(min, max)),
        };
        self.config.tiers = TierPricing {
            minimum: option.clone(),
            recommended: option.clone(),
            ideal: option,
        };
        self
    }

    pub fn per_unit(mut self, price: f64, unit: &str) -> Self {
        let option = TierOption {
            description: String::new(),
            price: TierPrice::PerUnit {
                price_per_unit: price,
                unit: Some(unit.to_string()),
            },
        };
        self.config.tiers = TierPricing {
            minimum: option.clone(),
            recommended: option.clone(),
            ideal: option,
        };
        self
    }

    pub fn recurring(mut self, interval: &str) -> Self {
        self.config.recurrence = Some(Recurrence {
            interval: RecurrenceInterval::parse(interval),
        });
        self
    }

    pub fn quantity(mut self, quantity: &str) -> Self {
        self.config.quantity = Some(quantity.to_string());
        self
    }

    pub fn build(self) -> EquipmentConfig {
        self.config
    }
}

// ==========================================
// AnimalProfile 构建器
// ==========================================
// 默认: 陆栖、晒点加热、食虫、低湿度的 36x18x18 英寸物种

pub struct ProfileBuilder {
    profile: AnimalProfile,
}

impl ProfileBuilder {
    pub fn new(id: &str) -> Self {
        Self {
            profile: AnimalProfile {
                id: id.to_string(),
                common_name: format!("Test {}", id),
                scientific_name: String::new(),
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
                    optional_zones: Vec::new(),
                },
                equipment_needs: Some(EquipmentNeeds {
                    climbing: Some(ClimbingStyle::Terrestrial),
                    substrate: vec![SubstrateKind::SandSoilMix],
                    humidity: Some(HumidityBand::Low),
                    heat_source: Some(HeatSource::Basking),
                    water_feature: Some(WaterFeature::ShallowDish),
                    decor: vec![DecorNeed::Hides],
                    diet: vec![DietKind::Insectivore],
                    animal_type: Some(AnimalType::Reptile),
                    bioactive_substrate: None,
                    climate: None,
                    activity: Some(Activity::Nocturnal),
                    required_equipment: Vec::new(),
                }),
                warnings: Vec::new(),
                care_guidance: Vec::new(),
            },
        }
    }

    pub fn min_size(mut self, width: f64, depth: f64, height: f64) -> Self {
        self.profile.min_enclosure_size = MinEnclosureSize {
            width,
            depth,
            height,
            units: Units::Inches,
        };
        self
    }

    pub fn heat(mut self, source: HeatSource) -> Self {
        if let Some(needs) = self.profile.equipment_needs.as_mut() {
            needs.heat_source = Some(source);
        }
        self
    }

    pub fn no_uvb(mut self) -> Self {
        self.profile.care_targets.lighting.uvb_required = false;
        self
    }

    /// 完全水栖 (跳过垫材/湿度/通用装饰)
    pub fn aquatic(mut self, required_equipment: &[&str]) -> Self {
        if let Some(needs) = self.profile.equipment_needs.as_mut() {
            needs.activity = Some(Activity::Aquatic);
            needs.water_feature = Some(WaterFeature::FullyAquatic);
            needs.animal_type = Some(AnimalType::Amphibian);
            needs.required_equipment = required_equipment.iter().map(|id| id.to_string()).collect();
        }
        self
    }

    pub fn no_needs(mut self) -> Self {
        self.profile.equipment_needs = None;
        self
    }

    pub fn warning(mut self, warning: Warning) -> Self {
        self.profile.warnings.push(warning);
        self
    }

    pub fn build(self) -> AnimalProfile {
        self.profile
    }
}

// ==========================================
// 输入与参考数据
// ==========================================

/// 英寸输入, 室温 72°F / 湿度 40%
pub fn input(animal: &str, width: f64, depth: f64, height: f64) -> EnclosureInput {
    EnclosureInput::new(animal, width, depth, height, Units::Inches)
}

pub fn reference_data(items: Vec<EquipmentConfig>, profiles: Vec<AnimalProfile>) -> Arc<ReferenceData> {
    enclosure_planner::logging::init_test();
    Arc::new(ReferenceData {
        catalog: EquipmentCatalog::from_configs(items).unwrap(),
        profiles: ProfileRegistry::from_profiles(profiles).unwrap(),
    })
}
