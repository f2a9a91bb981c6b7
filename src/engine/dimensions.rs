// ==========================================
// 饲养箱装备规划引擎 - 尺寸归一化
// ==========================================
// 职责: 任意单位 -> 英寸; 体积换算 (加仑/立方英尺)
// 红线: 纯函数, 不校验负数 (调用方负责)
// ==========================================

use crate::domain::animal::MinEnclosureSize;
use crate::domain::enclosure::{Dimensions, EnclosureInput};
use crate::domain::types::Units;

/// 1 英寸 = 2.54 厘米
pub const CM_PER_INCH: f64 = 2.54;
pub const CUBIC_INCHES_PER_GALLON: f64 = 231.0;
pub const CUBIC_INCHES_PER_CUBIC_FOOT: f64 = 1728.0;

// ==========================================
// DimensionNormalizer - 纯函数工具类
// ==========================================
pub struct DimensionNormalizer;

impl DimensionNormalizer {
    pub fn to_inches(value: f64, units: Units) -> f64 {
        match units {
            Units::Inches => value,
            Units::Centimeters => value / CM_PER_INCH,
        }
    }

    pub fn normalize(width: f64, depth: f64, height: f64, units: Units) -> Dimensions {
        Dimensions {
            width: Self::to_inches(width, units),
            depth: Self::to_inches(depth, units),
            height: Self::to_inches(height, units),
        }
    }

    pub fn normalize_input(input: &EnclosureInput) -> Dimensions {
        Self::normalize(input.width, input.depth, input.height, input.units)
    }

    pub fn normalize_min_size(size: &MinEnclosureSize) -> Dimensions {
        Self::normalize(size.width, size.depth, size.height, size.units)
    }

    /// 立方英寸 -> 美制加仑
    pub fn volume_to_gallons(cubic_inches: f64) -> f64 {
        cubic_inches / CUBIC_INCHES_PER_GALLON
    }

    /// 立方英寸 -> 立方英尺
    pub fn volume_to_cubic_feet(cubic_inches: f64) -> f64 {
        cubic_inches / CUBIC_INCHES_PER_CUBIC_FOOT
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_inches_pass_through() {
        let dims = DimensionNormalizer::normalize(36.0, 18.0, 18.0, Units::Inches);
        assert_eq!(dims.width, 36.0);
        assert_eq!(dims.depth, 18.0);
        assert_eq!(dims.height, 18.0);
    }

    #[test]
    fn test_centimeters_convert_to_inches() {
        let dims = DimensionNormalizer::normalize(91.44, 45.72, 2.54, Units::Centimeters);
        assert!((dims.width - 36.0).abs() < 1e-9);
        assert!((dims.depth - 18.0).abs() < 1e-9);
        assert!((dims.height - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_volume_conversions() {
        // 36 x 18 x 18 = 11664 in³
        let cubic_inches = 36.0 * 18.0 * 18.0;
        assert!((DimensionNormalizer::volume_to_gallons(cubic_inches) - 50.493).abs() < 0.001);
        assert_eq!(DimensionNormalizer::volume_to_cubic_feet(cubic_inches), 6.75);
    }
}
