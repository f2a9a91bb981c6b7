// ==========================================
// 饲养箱装备规划引擎 - 布局分区
// ==========================================
// 职责: 档案布局规则 -> 有序分区列表 (必需在前, 可选在后)
// 竖向偏好物种的攀爬/种植区放在上层
// ==========================================

use crate::domain::animal::{AnimalProfile, ZoneKind};
use crate::domain::plan::{LayoutZone, ZonePlacement};

pub struct LayoutPlanner;

impl LayoutPlanner {
    pub fn placement(zone: ZoneKind, vertical: bool) -> ZonePlacement {
        match zone {
            ZoneKind::Basking | ZoneKind::HumidHide => ZonePlacement::WarmSide,
            ZoneKind::Cool | ZoneKind::Hide | ZoneKind::Water => ZonePlacement::CoolSide,
            ZoneKind::Climbing | ZoneKind::Planted if vertical => ZonePlacement::Upper,
            ZoneKind::Climbing | ZoneKind::Planted => ZonePlacement::FullWidth,
            ZoneKind::Feeding | ZoneKind::Burrow | ZoneKind::Land => ZonePlacement::Lower,
        }
    }

    pub fn zones(profile: &AnimalProfile) -> Vec<LayoutZone> {
        let rules = &profile.layout_rules;
        let mut zones: Vec<LayoutZone> = Vec::new();

        let required = rules.required_zones.iter().map(|z| (*z, true));
        let optional = rules.optional_zones.iter().map(|z| (*z, false));
        for (zone, is_required) in required.chain(optional) {
            if zones.iter().any(|existing| existing.zone == zone) {
                continue;
            }
            zones.push(LayoutZone {
                zone,
                placement: Self::placement(zone, rules.vertical_preference),
                required: is_required,
            });
        }
        zones
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::test_fixtures::gecko_profile;

    #[test]
    fn test_required_zones_precede_optional() {
        let zones = LayoutPlanner::zones(&gecko_profile());
        let kinds: Vec<ZoneKind> = zones.iter().map(|z| z.zone).collect();

        assert_eq!(
            kinds,
            vec![ZoneKind::Basking, ZoneKind::Cool, ZoneKind::Hide, ZoneKind::HumidHide]
        );
        assert!(zones[0].required);
        assert!(!zones[3].required);
        assert_eq!(zones[0].placement, ZonePlacement::WarmSide);
    }

    #[test]
    fn test_duplicate_optional_zone_is_ignored() {
        let mut profile = gecko_profile();
        profile.layout_rules.optional_zones.push(ZoneKind::Hide);

        let zones = LayoutPlanner::zones(&profile);
        assert_eq!(zones.iter().filter(|z| z.zone == ZoneKind::Hide).count(), 1);
    }

    #[test]
    fn test_vertical_preference_lifts_climbing_zone() {
        assert_eq!(
            LayoutPlanner::placement(ZoneKind::Climbing, true),
            ZonePlacement::Upper
        );
        assert_eq!(
            LayoutPlanner::placement(ZoneKind::Climbing, false),
            ZonePlacement::FullWidth
        );
    }
}
