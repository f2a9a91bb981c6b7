// ==========================================
// 饲养箱装备规划引擎 - 用户饲养箱输入
// ==========================================
// 职责: 单次规划的用户声明 (尺寸/材质/偏好/数量)
// 红线: 单次规划内不可变
// ==========================================

use crate::domain::types::{
    BackgroundType, DoorOrientation, EnclosureType, HumidityControl, PlantPreference,
    PricingTier, SubstrateKind, Units,
};
use serde::{Deserialize, Serialize};

// ==========================================
// EnclosureInput - 饲养箱输入
// ==========================================
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EnclosureInput {
    // ===== 尺寸 =====
    pub width: f64,
    pub depth: f64,
    pub height: f64,
    #[serde(default)]
    pub units: Units,

    /// 饲养箱材质
    #[serde(rename = "type", default)]
    pub enclosure_type: EnclosureType,

    /// 动物档案 ID
    pub animal: String,

    /// 饲养数量
    #[serde(default = "default_quantity")]
    pub quantity: u32,

    #[serde(default)]
    pub bioactive: bool,

    // ===== 环境 =====
    /// 室温 (°F)
    pub ambient_temp: f64,
    /// 室内湿度 (%)
    pub ambient_humidity: f64,
    #[serde(default)]
    pub humidity_control: HumidityControl,

    // ===== 偏好 =====
    #[serde(default)]
    pub substrate_preference: Option<SubstrateKind>,
    #[serde(default)]
    pub plant_preference: Option<PlantPreference>,
    #[serde(default)]
    pub background_type: BackgroundType,

    // ===== 布景数量 =====
    #[serde(default)]
    pub number_of_hides: u32,
    #[serde(default)]
    pub number_of_ledges: u32,
    #[serde(default)]
    pub number_of_climbing_areas: u32,

    #[serde(default)]
    pub door_orientation: DoorOrientation,

    // ===== 用户画像 =====
    /// 新手模式 (影响 bioactive 提示)
    #[serde(default)]
    pub beginner_mode: bool,
    /// 预算档位偏好
    #[serde(default)]
    pub budget: Option<PricingTier>,
}

fn default_quantity() -> u32 {
    1
}

// ==========================================
// Dimensions - 规范单位(英寸)尺寸
// ==========================================
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Dimensions {
    pub width: f64,
    pub depth: f64,
    pub height: f64,
}

impl Dimensions {
    pub fn footprint_sq_in(&self) -> f64 {
        self.width * self.depth
    }

    pub fn volume_cubic_in(&self) -> f64 {
        self.width * self.depth * self.height
    }
}

impl EnclosureInput {
    /// 最小可用输入 (其余字段取默认值)
    pub fn new(animal: &str, width: f64, depth: f64, height: f64, units: Units) -> Self {
        Self {
            width,
            depth,
            height,
            units,
            enclosure_type: EnclosureType::default(),
            animal: animal.to_string(),
            quantity: 1,
            bioactive: false,
            ambient_temp: 72.0,
            ambient_humidity: 40.0,
            humidity_control: HumidityControl::default(),
            substrate_preference: None,
            plant_preference: None,
            background_type: BackgroundType::default(),
            number_of_hides: 0,
            number_of_ledges: 0,
            number_of_climbing_areas: 0,
            door_orientation: DoorOrientation::default(),
            beginner_mode: false,
            budget: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_minimal_input_fills_defaults() {
        let raw = r#"{
            "width": 36, "depth": 18, "height": 18,
            "animal": "leopard-gecko",
            "ambientTemp": 70, "ambientHumidity": 35
        }"#;
        let input: EnclosureInput = serde_json::from_str(raw).unwrap();

        assert_eq!(input.units, Units::Inches);
        assert_eq!(input.quantity, 1);
        assert_eq!(input.humidity_control, HumidityControl::None);
        assert!(input.substrate_preference.is_none());
        assert!(!input.bioactive);
    }

    #[test]
    fn test_deserialize_full_input() {
        let raw = r#"{
            "width": 90, "depth": 45, "height": 90, "units": "cm",
            "type": "pvc", "animal": "crested-gecko", "quantity": 2,
            "bioactive": true, "ambientTemp": 72, "ambientHumidity": 50,
            "humidityControl": "misting-system", "substratePreference": "coco-fiber",
            "plantPreference": "live", "backgroundType": "cork",
            "numberOfHides": 3, "numberOfLedges": 1, "numberOfClimbingAreas": 2,
            "doorOrientation": "front", "beginnerMode": true, "budget": "minimum"
        }"#;
        let input: EnclosureInput = serde_json::from_str(raw).unwrap();

        assert_eq!(input.units, Units::Centimeters);
        assert_eq!(input.enclosure_type, EnclosureType::Pvc);
        assert_eq!(input.humidity_control, HumidityControl::MistingSystem);
        assert_eq!(input.substrate_preference, Some(SubstrateKind::CocoFiber));
        assert_eq!(input.budget, Some(PricingTier::Minimum));
    }
}
