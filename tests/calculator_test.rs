// ==========================================
// 计算器集成测试
// ==========================================
// 职责: 尺寸/垫材/加热/UVB 计算器独立验证 (不构建完整方案)
// ==========================================

use enclosure_planner::domain::types::Units;
use enclosure_planner::engine::{DimensionNormalizer, HeatingMode, SizingCalculator};

#[test]
fn test_substrate_quarts_for_standard_footprint() {
    // 24 x 18 x 2 / 1728 x 25.7 = 12.852
    assert_eq!(SizingCalculator::substrate_quarts(24.0, 18.0, false), 13);
}

#[test]
fn test_heating_wattage_clamps_to_max() {
    // 8 ft³ x 20 W = 160; 160 x 40/20 = 320 -> 150
    let watts = SizingCalculator::heating_wattage(8.0, 40.0, HeatingMode::Basking);
    assert_eq!(watts, 150.0);
}

#[test]
fn test_heating_wattage_clamps_to_mode_minimum() {
    assert_eq!(
        SizingCalculator::heating_wattage(1.0, 1.0, HeatingMode::Ambient),
        60.0
    );
    assert_eq!(
        SizingCalculator::heating_wattage(1.0, 1.0, HeatingMode::Basking),
        25.0
    );
}

#[test]
fn test_uvb_length_rounds_coverage() {
    assert_eq!(SizingCalculator::uvb_fixture_length(36.0, 50.0), 18);
    assert_eq!(SizingCalculator::uvb_fixture_length(48.0, 66.0), 32);
    assert_eq!(SizingCalculator::uvb_fixture_length(30.0, 0.0), 0);
}

#[test]
fn test_drainage_depth_switches_at_24_inches() {
    assert_eq!(SizingCalculator::drainage_depth_in(18.0), 1.5);
    assert_eq!(SizingCalculator::drainage_depth_in(24.0), 2.5);
}

#[test]
fn test_centimeters_convert_to_inches() {
    let dims = DimensionNormalizer::normalize(254.0, 127.0, 50.8, Units::Centimeters);
    assert!((dims.width - 100.0).abs() < 1e-9);
    assert!((dims.depth - 50.0).abs() < 1e-9);
    assert!((dims.height - 20.0).abs() < 1e-9);
}

#[test]
fn test_volume_conversions() {
    assert_eq!(DimensionNormalizer::volume_to_gallons(231.0), 1.0);
    assert_eq!(DimensionNormalizer::volume_to_cubic_feet(1728.0 * 8.0), 8.0);
}
