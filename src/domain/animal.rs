// ==========================================
// 饲养箱装备规划引擎 - 动物档案
// ==========================================
// 职责: 物种静态参考数据 (最小尺寸/饲养目标/布局规则/装备需求)
// 红线: 进程启动时加载, 规划期间只读
// ==========================================

use crate::domain::plan::Warning;
use crate::domain::types::{
    Activity, AnimalType, BioactiveSubstrate, CareLevel, Climate, ClimbingStyle, DecorNeed,
    DietKind, HeatSource, HumidityBand, SubstrateKind, Units, UvbStrength, WaterFeature,
};
use serde::{Deserialize, Serialize};

// ==========================================
// 饲养目标 (Care Targets)
// ==========================================

/// 最小饲养箱尺寸 (带单位)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MinEnclosureSize {
    pub width: f64,
    pub depth: f64,
    pub height: f64,
    #[serde(default)]
    pub units: Units,
}

/// 温度目标 (°F)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TemperatureRange {
    pub min: f64,
    pub max: f64,
    #[serde(default)]
    pub basking: Option<f64>,
    #[serde(default)]
    pub night_min: Option<f64>,
}

/// 百分比区间
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PercentRange {
    pub min: f64,
    pub max: f64,
}

/// 湿度目标 (%), 含日/夜/蜕皮期分段
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HumidityRange {
    pub min: f64,
    pub max: f64,
    #[serde(default)]
    pub day: Option<PercentRange>,
    #[serde(default)]
    pub night: Option<PercentRange>,
    #[serde(default)]
    pub shedding: Option<PercentRange>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LightingRequirements {
    #[serde(default)]
    pub uvb_required: bool,
    #[serde(default)]
    pub uvb_strength: Option<UvbStrength>,
    /// UVB 灯管覆盖宽度百分比 (0..=100)
    #[serde(default)]
    pub coverage_percent: f64,
    /// 光照时长 (小时)
    #[serde(default)]
    pub photoperiod_hours: Option<u32>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CareTargets {
    pub temperature: TemperatureRange,
    pub humidity: HumidityRange,
    pub lighting: LightingRequirements,
}

// ==========================================
// 布局规则 (Layout Rules)
// ==========================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ZoneKind {
    Basking,
    Cool,
    Hide,
    HumidHide,
    Water,
    Climbing,
    Feeding,
    Planted,
    Burrow,
    Land,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct LayoutRules {
    /// 偏好竖向空间 (树栖)
    #[serde(default)]
    pub vertical_preference: bool,
    #[serde(default)]
    pub required_zones: Vec<ZoneKind>,
    #[serde(default)]
    pub optional_zones: Vec<ZoneKind>,
}

// ==========================================
// 装备需求 (Equipment Needs)
// ==========================================
// 标签匹配与自动包含规则的数据来源
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct EquipmentNeeds {
    #[serde(default)]
    pub climbing: Option<ClimbingStyle>,
    #[serde(default)]
    pub substrate: Vec<SubstrateKind>,
    #[serde(default)]
    pub humidity: Option<HumidityBand>,
    #[serde(default)]
    pub heat_source: Option<HeatSource>,
    #[serde(default)]
    pub water_feature: Option<WaterFeature>,
    #[serde(default)]
    pub decor: Vec<DecorNeed>,
    #[serde(default)]
    pub diet: Vec<DietKind>,
    #[serde(rename = "type", default)]
    pub animal_type: Option<AnimalType>,
    #[serde(default)]
    pub bioactive_substrate: Option<BioactiveSubstrate>,
    #[serde(default)]
    pub climate: Option<Climate>,
    #[serde(default)]
    pub activity: Option<Activity>,
    /// 必备装备 ID 列表 (专用/水栖生成器消费)
    #[serde(default)]
    pub required_equipment: Vec<String>,
}

// ==========================================
// AnimalProfile - 物种档案
// ==========================================
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnimalProfile {
    /// 缺省时由注册表键回填
    #[serde(default)]
    pub id: String,
    pub common_name: String,
    #[serde(default)]
    pub scientific_name: String,
    #[serde(default)]
    pub care_level: CareLevel,
    pub min_enclosure_size: MinEnclosureSize,
    pub care_targets: CareTargets,
    #[serde(default)]
    pub layout_rules: LayoutRules,
    #[serde(default)]
    pub equipment_needs: Option<EquipmentNeeds>,
    /// 档案预置告警 (原样透传)
    #[serde(default)]
    pub warnings: Vec<Warning>,
    #[serde(default)]
    pub care_guidance: Vec<String>,
}

impl AnimalProfile {
    /// 完全水栖物种跳过垫材/湿度/通用装饰生成器
    pub fn is_aquatic(&self) -> bool {
        self.equipment_needs
            .as_ref()
            .and_then(|n| n.activity)
            .map(|a| a == Activity::Aquatic)
            .unwrap_or(false)
    }

    pub fn heat_source(&self) -> Option<HeatSource> {
        self.equipment_needs.as_ref().and_then(|n| n.heat_source)
    }

    pub fn required_equipment(&self) -> &[String] {
        self.equipment_needs
            .as_ref()
            .map(|n| n.required_equipment.as_slice())
            .unwrap_or(&[])
    }
}
