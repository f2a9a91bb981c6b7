// ==========================================
// 饲养箱装备规划引擎 - 需求标签匹配
// ==========================================
// 职责: 判定目录条目的需求标签是否满足动物需求
// 输入: EquipmentConfig + EquipmentNeeds(可缺省) + EnclosureInput
// 输出: bool
// 红线: 不兼容名单优先于一切; 标签之间为 OR
// ==========================================

use crate::domain::animal::EquipmentNeeds;
use crate::domain::enclosure::EnclosureInput;
use crate::domain::equipment::{EquipmentConfig, NeedsTag};
use crate::domain::types::{ClimbingStyle, DecorNeed};

pub struct NeedsMatcher;

impl NeedsMatcher {
    /// 条目是否匹配
    ///
    /// # 规则
    /// 1. 动物在不兼容名单中 -> false
    /// 2. 无标签 (通用条目) -> true
    /// 3. 标签在加载时全部丢弃 -> false
    /// 4. 动物未声明需求 -> true
    /// 5. 任一标签匹配 -> true
    pub fn matches(
        config: &EquipmentConfig,
        needs: Option<&EquipmentNeeds>,
        input: &EnclosureInput,
    ) -> bool {
        if config.is_incompatible_with(&input.animal) {
            return false;
        }
        if config.is_universal() {
            return true;
        }
        if config.needs_tags.is_empty() {
            return false;
        }
        let Some(needs) = needs else {
            return true;
        };

        config
            .needs_tags
            .iter()
            .any(|tag| Self::tag_matches(tag, needs, input))
    }

    /// 单个标签的匹配语义
    pub fn tag_matches(tag: &NeedsTag, needs: &EquipmentNeeds, input: &EnclosureInput) -> bool {
        match *tag {
            // Both 满足任意攀爬标签
            NeedsTag::Climbing(style) => match needs.climbing {
                Some(ClimbingStyle::Both) => true,
                Some(declared) => declared == style,
                None => false,
            },
            NeedsTag::Substrate(kind) => needs.substrate.contains(&kind),
            NeedsTag::Humidity(band) => needs.humidity == Some(band),
            NeedsTag::Heat(source) => needs.heat_source == Some(source),
            NeedsTag::Water(feature) => needs.water_feature == Some(feature),
            NeedsTag::Decor(decor) => needs.decor.contains(&decor),
            NeedsTag::Diet(diet) => needs.diet.contains(&diet),
            NeedsTag::AnimalType(kind) => needs.animal_type == Some(kind),
            NeedsTag::Bioactive(flavor) => needs.bioactive_substrate == Some(flavor),
            // 有用户偏好时比较偏好, 否则看动物是否需要植物
            NeedsTag::Plants(preference) => match input.plant_preference {
                Some(chosen) => chosen == preference,
                None => needs.decor.contains(&DecorNeed::Plants),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::types::{EquipmentCategory, PlantPreference};
    use crate::engine::test_fixtures::{gecko_input, gecko_profile, item};

    #[test]
    fn test_universal_item_matches_any_animal() {
        let profile = gecko_profile();
        let config = item("thermometer", EquipmentCategory::Monitoring, &[]);

        assert!(NeedsMatcher::matches(
            &config,
            profile.equipment_needs.as_ref(),
            &gecko_input()
        ));
        assert!(NeedsMatcher::matches(&config, None, &gecko_input()));
    }

    #[test]
    fn test_incompatible_animal_never_matches() {
        let profile = gecko_profile();
        let mut config = item("sand", EquipmentCategory::Substrate, &[]);
        config.incompatible_animals = vec!["test-gecko".to_string()];

        assert!(!NeedsMatcher::matches(
            &config,
            profile.equipment_needs.as_ref(),
            &gecko_input()
        ));
        assert!(!NeedsMatcher::matches(&config, None, &gecko_input()));
    }

    #[test]
    fn test_any_tag_match_is_enough() {
        let profile = gecko_profile();
        let config = item(
            "tongs",
            EquipmentCategory::Feeding,
            &["diet:carnivore", "diet:insectivore"],
        );
        assert!(NeedsMatcher::matches(
            &config,
            profile.equipment_needs.as_ref(),
            &gecko_input()
        ));

        let other = item("pellets", EquipmentCategory::Feeding, &["diet:herbivore"]);
        assert!(!NeedsMatcher::matches(
            &other,
            profile.equipment_needs.as_ref(),
            &gecko_input()
        ));
    }

    #[test]
    fn test_climbing_both_satisfies_either_tag() {
        let mut profile = gecko_profile();
        let needs = profile.equipment_needs.as_mut().unwrap();
        needs.climbing = Some(ClimbingStyle::Both);

        let tag = NeedsTag::Climbing(ClimbingStyle::Arboreal);
        assert!(NeedsMatcher::tag_matches(&tag, needs, &gecko_input()));

        needs.climbing = Some(ClimbingStyle::Terrestrial);
        assert!(!NeedsMatcher::tag_matches(&tag, needs, &gecko_input()));
    }

    #[test]
    fn test_missing_needs_matches_tagged_item() {
        let config = item("vines", EquipmentCategory::Decor, &["climbing:arboreal"]);
        assert!(NeedsMatcher::matches(&config, None, &gecko_input()));
    }

    #[test]
    fn test_plant_tag_follows_user_preference() {
        let profile = gecko_profile();
        let needs = profile.equipment_needs.as_ref().unwrap();
        let live = NeedsTag::Plants(PlantPreference::Live);

        let mut input = gecko_input();
        input.plant_preference = Some(PlantPreference::Live);
        assert!(NeedsMatcher::tag_matches(&live, needs, &input));

        input.plant_preference = Some(PlantPreference::Artificial);
        assert!(!NeedsMatcher::tag_matches(&live, needs, &input));

        // 无偏好: 档案未声明植物需求
        input.plant_preference = None;
        assert!(!NeedsMatcher::tag_matches(&live, needs, &input));
    }

    #[test]
    fn test_plant_tag_without_preference_follows_decor_need() {
        let mut profile = gecko_profile();
        let needs = profile.equipment_needs.as_mut().unwrap();
        needs.decor.push(DecorNeed::Plants);
        let input = gecko_input();
        assert_eq!(input.plant_preference, None);

        for preference in [PlantPreference::Live, PlantPreference::Artificial] {
            let tag = NeedsTag::Plants(preference);
            assert!(NeedsMatcher::tag_matches(&tag, needs, &input));
        }

        let config = item("pothos", EquipmentCategory::Decor, &["plants:live"]);
        assert!(NeedsMatcher::matches(&config, Some(&*needs), &input));
    }

    #[test]
    fn test_item_with_only_dropped_tags_is_not_universal() {
        let profile = gecko_profile();
        let mut config = item("mystery", EquipmentCategory::Decor, &[]);
        config.dropped_tags = 1;

        assert!(!NeedsMatcher::matches(
            &config,
            profile.equipment_needs.as_ref(),
            &gecko_input()
        ));
    }
}
