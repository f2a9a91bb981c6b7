// ==========================================
// 饲养箱装备规划引擎 - 数量/规格计算器
// ==========================================
// 职责: 垫材夸脱数、加热功率、UVB 灯管长度
// 红线: 无状态、无副作用, 可脱离完整方案单独测试
// ==========================================

use crate::engine::dimensions::CUBIC_INCHES_PER_CUBIC_FOOT;

/// 每立方英尺折合夸脱
pub const QUARTS_PER_CUBIC_FOOT: f64 = 25.7;

pub const STANDARD_SUBSTRATE_DEPTH_IN: f64 = 2.0;
pub const BIOACTIVE_SUBSTRATE_DEPTH_IN: f64 = 4.0;

/// 排水层: 箱高 < 24" 取 1.5", 否则 2.5"
pub const DRAINAGE_HEIGHT_THRESHOLD_IN: f64 = 24.0;
pub const SHALLOW_DRAINAGE_DEPTH_IN: f64 = 1.5;
pub const DEEP_DRAINAGE_DEPTH_IN: f64 = 2.5;

// ==========================================
// HeatingMode - 加热模式参数
// ==========================================
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeatingMode {
    /// 环境加热 (辐射板/陶瓷灯)
    Ambient,
    /// 晒点加热 (卤素灯)
    Basking,
}

impl HeatingMode {
    pub fn watts_per_cubic_foot(&self) -> f64 {
        match self {
            HeatingMode::Ambient => 8.0,
            HeatingMode::Basking => 20.0,
        }
    }

    /// 参考温差 (°F)
    pub fn reference_diff(&self) -> f64 {
        match self {
            HeatingMode::Ambient => 15.0,
            HeatingMode::Basking => 20.0,
        }
    }

    /// (最小, 最大) 功率
    pub fn wattage_bounds(&self) -> (f64, f64) {
        match self {
            HeatingMode::Ambient => (60.0, 150.0),
            HeatingMode::Basking => (25.0, 150.0),
        }
    }
}

// ==========================================
// SizingCalculator - 纯函数工具类
// ==========================================
pub struct SizingCalculator;

impl SizingCalculator {
    pub fn substrate_depth_in(bioactive: bool) -> f64 {
        if bioactive {
            BIOACTIVE_SUBSTRATE_DEPTH_IN
        } else {
            STANDARD_SUBSTRATE_DEPTH_IN
        }
    }

    pub fn drainage_depth_in(height_in: f64) -> f64 {
        if height_in < DRAINAGE_HEIGHT_THRESHOLD_IN {
            SHALLOW_DRAINAGE_DEPTH_IN
        } else {
            DEEP_DRAINAGE_DEPTH_IN
        }
    }

    /// 指定铺设深度所需夸脱数
    ///
    /// # 规则
    /// - quarts = ceil(width × depth × layer_depth / 1728 × 25.7)
    pub fn quarts_for_layer(width_in: f64, depth_in: f64, layer_depth_in: f64) -> u32 {
        let cubic_feet = width_in * depth_in * layer_depth_in / CUBIC_INCHES_PER_CUBIC_FOOT;
        (cubic_feet * QUARTS_PER_CUBIC_FOOT).ceil().max(0.0) as u32
    }

    /// 垫材夸脱数 (bioactive 4", 否则 2")
    pub fn substrate_quarts(width_in: f64, depth_in: f64, bioactive: bool) -> u32 {
        Self::quarts_for_layer(width_in, depth_in, Self::substrate_depth_in(bioactive))
    }

    /// 排水层夸脱数
    pub fn drainage_quarts(width_in: f64, depth_in: f64, height_in: f64) -> u32 {
        Self::quarts_for_layer(width_in, depth_in, Self::drainage_depth_in(height_in))
    }

    /// 加热功率 (W)
    ///
    /// # 规则
    /// - base = volume_ft³ × watts_per_ft³
    /// - adjusted = base × (temp_diff / reference_diff)
    /// - 结果限制在 [min, max]
    ///
    /// # 参数
    /// - volume_cubic_feet: 箱体体积
    /// - temp_diff: 目标温度 - 室温 (°F)
    /// - mode: 加热模式
    pub fn heating_wattage(volume_cubic_feet: f64, temp_diff: f64, mode: HeatingMode) -> f64 {
        let base = volume_cubic_feet * mode.watts_per_cubic_foot();
        let adjusted = base * (temp_diff / mode.reference_diff());
        let (min, max) = mode.wattage_bounds();
        adjusted.clamp(min, max)
    }

    /// UVB 灯管长度 (英寸)
    ///
    /// # 规则
    /// - length = round(width × coverage_percent / 100)
    pub fn uvb_fixture_length(width_in: f64, coverage_percent: f64) -> u32 {
        (width_in * coverage_percent / 100.0).round().max(0.0) as u32
    }

    /// 植物灯条数量 (每 24" 一条, 至少 1 条)
    pub fn grow_light_bars(width_in: f64) -> u32 {
        ((width_in / 24.0).ceil() as u32).max(1)
    }
}
