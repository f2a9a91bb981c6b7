// ==========================================
// 饲养箱装备规划引擎 - 自动包含规则评估
// ==========================================
// 职责: 判定条目是否因结构化规则被无条件纳入
// 规则: 字段间 AND, 字段内 OR; 缺省字段不参与判定
// 红线: 无规则 -> false (不是"通过")
// ==========================================

use crate::domain::animal::AnimalProfile;
use crate::domain::enclosure::EnclosureInput;
use crate::domain::equipment::{AutoIncludeRule, OneOrMany};

pub struct RuleEvaluator;

impl RuleEvaluator {
    pub fn should_include(
        rule: Option<&AutoIncludeRule>,
        profile: &AnimalProfile,
        input: &EnclosureInput,
    ) -> bool {
        match rule {
            Some(rule) => Self::evaluate(rule, profile, input),
            None => false,
        }
    }

    /// 逐字段判定
    ///
    /// # 字段来源
    /// - type/climate/activity/waterFeature/diet: 动物装备需求
    /// - substrate: 用户垫材偏好
    /// - bioactive: 用户 bioactive 开关
    pub fn evaluate(rule: &AutoIncludeRule, profile: &AnimalProfile, input: &EnclosureInput) -> bool {
        let needs = profile.equipment_needs.as_ref();

        let type_ok = field_accepts(&rule.animal_type, needs.and_then(|n| n.animal_type));
        let climate_ok = field_accepts(&rule.climate, needs.and_then(|n| n.climate));
        let activity_ok = field_accepts(&rule.activity, needs.and_then(|n| n.activity));
        let water_ok = field_accepts(&rule.water_feature, needs.and_then(|n| n.water_feature));
        let substrate_ok = field_accepts(&rule.substrate, input.substrate_preference);

        let diet_ok = match &rule.diet {
            None => true,
            Some(accepted) => needs
                .map(|n| accepted.accepts_any(&n.diet))
                .unwrap_or(false),
        };

        let bioactive_ok = rule
            .bioactive
            .map(|required| required == input.bioactive)
            .unwrap_or(true);

        type_ok && climate_ok && activity_ok && water_ok && substrate_ok && diet_ok && bioactive_ok
    }
}

/// 缺省字段通过; 有约束但实际值缺失 -> 不通过
fn field_accepts<T: PartialEq>(accepted: &Option<OneOrMany<T>>, actual: Option<T>) -> bool {
    match accepted {
        None => true,
        Some(accepted) => actual.map(|v| accepted.accepts(&v)).unwrap_or(false),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::types::{AnimalType, Climate, DietKind, SubstrateKind};
    use crate::engine::test_fixtures::{gecko_input, gecko_profile};

    #[test]
    fn test_no_rule_is_not_included() {
        assert!(!RuleEvaluator::should_include(
            None,
            &gecko_profile(),
            &gecko_input()
        ));
    }

    #[test]
    fn test_empty_rule_always_passes() {
        let rule = AutoIncludeRule::default();
        assert!(RuleEvaluator::should_include(
            Some(&rule),
            &gecko_profile(),
            &gecko_input()
        ));
    }

    #[test]
    fn test_fields_are_anded() {
        let rule = AutoIncludeRule {
            animal_type: Some(OneOrMany::One(AnimalType::Reptile)),
            bioactive: Some(true),
            ..Default::default()
        };
        let mut input = gecko_input();
        assert!(!RuleEvaluator::evaluate(&rule, &gecko_profile(), &input));

        input.bioactive = true;
        assert!(RuleEvaluator::evaluate(&rule, &gecko_profile(), &input));
    }

    #[test]
    fn test_values_within_field_are_ored() {
        let rule = AutoIncludeRule {
            diet: Some(OneOrMany::Many(vec![DietKind::Herbivore, DietKind::Insectivore])),
            ..Default::default()
        };
        assert!(RuleEvaluator::evaluate(&rule, &gecko_profile(), &gecko_input()));
    }

    #[test]
    fn test_constrained_field_with_missing_value_fails() {
        // 夹具档案未声明 climate
        let rule = AutoIncludeRule {
            climate: Some(OneOrMany::One(Climate::Arid)),
            ..Default::default()
        };
        assert!(!RuleEvaluator::evaluate(&rule, &gecko_profile(), &gecko_input()));
    }

    #[test]
    fn test_substrate_reads_user_preference() {
        let rule = AutoIncludeRule {
            substrate: Some(OneOrMany::One(SubstrateKind::Tile)),
            ..Default::default()
        };
        let mut input = gecko_input();
        assert!(!RuleEvaluator::evaluate(&rule, &gecko_profile(), &input));

        input.substrate_preference = Some(SubstrateKind::Tile);
        assert!(RuleEvaluator::evaluate(&rule, &gecko_profile(), &input));
    }
}
