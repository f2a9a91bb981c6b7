// ==========================================
// 饲养箱装备规划引擎 - 搭建步骤与饲养指引
// ==========================================
// 职责: 清单条目按类别归入固定顺序的搭建步骤; 档案目标转为文字指引
// 红线: 无对应条目的步骤不输出 (收尾步骤除外); 序号连续
// ==========================================

use crate::domain::animal::AnimalProfile;
use crate::domain::enclosure::EnclosureInput;
use crate::domain::plan::{BuildStep, ShoppingItem};
use crate::domain::types::EquipmentCategory;
use crate::engine::generators::bioactive::{DRAINAGE_LAYER_ID, SUBSTRATE_BARRIER_ID};

struct StepTemplate {
    title: &'static str,
    detail: &'static str,
    categories: &'static [EquipmentCategory],
    /// 非空时按 ID 归属, 优先于类别
    ids: &'static [&'static str],
}

const ITEM_STEPS: &[StepTemplate] = &[
    StepTemplate {
        title: "Prepare the enclosure",
        detail: "Clean the enclosure and any aquatic hardware, then position it away from direct sun and drafts.",
        categories: &[
            EquipmentCategory::Enclosure,
            EquipmentCategory::Aquatic,
            EquipmentCategory::Specialized,
        ],
        ids: &[],
    },
    StepTemplate {
        title: "Install drainage and barrier",
        detail: "Lay the drainage layer evenly and cover it with the barrier mesh.",
        categories: &[],
        ids: &[DRAINAGE_LAYER_ID, SUBSTRATE_BARRIER_ID],
    },
    StepTemplate {
        title: "Add substrate",
        detail: "Spread and level the substrate to the listed depth.",
        categories: &[EquipmentCategory::Substrate],
        ids: &[],
    },
    StepTemplate {
        title: "Place hardscape and decor",
        detail: "Anchor hides, branches and ledges so nothing can shift onto the animal.",
        categories: &[EquipmentCategory::Decor],
        ids: &[],
    },
    StepTemplate {
        title: "Install heating",
        detail: "Mount heat sources on one end to create a gradient and wire them through the thermostat.",
        categories: &[EquipmentCategory::Heating],
        ids: &[],
    },
    StepTemplate {
        title: "Install lighting",
        detail: "Mount lighting on the warm side and set the timer to the listed photoperiod.",
        categories: &[EquipmentCategory::Lighting],
        ids: &[],
    },
    StepTemplate {
        title: "Set up humidity control",
        detail: "Install humidity equipment and confirm it cannot pool water on electrical parts.",
        categories: &[EquipmentCategory::Humidity],
        ids: &[],
    },
    StepTemplate {
        title: "Add monitoring",
        detail: "Place probes at the warm and cool ends at animal height.",
        categories: &[EquipmentCategory::Monitoring],
        ids: &[],
    },
    StepTemplate {
        title: "Add water features",
        detail: "Fill water features with dechlorinated water.",
        categories: &[EquipmentCategory::Water],
        ids: &[],
    },
    StepTemplate {
        title: "Seed the bioactive layer",
        detail: "Add leaf litter and the cleanup crew, then plant any live plants.",
        categories: &[EquipmentCategory::Bioactive],
        ids: &[],
    },
];

pub struct BuildStepPlanner;

impl BuildStepPlanner {
    /// 生成有序搭建步骤
    pub fn steps(
        profile: &AnimalProfile,
        input: &EnclosureInput,
        items: &[ShoppingItem],
    ) -> Vec<BuildStep> {
        let mut steps = Vec::new();

        for template in ITEM_STEPS {
            let item_ids: Vec<String> = items
                .iter()
                .filter(|item| Self::belongs_to(template, item))
                .map(|item| item.id.clone())
                .collect();
            if item_ids.is_empty() {
                continue;
            }
            steps.push(BuildStep {
                order: 0,
                title: template.title.to_string(),
                detail: template.detail.to_string(),
                item_ids,
            });
        }

        let settle_detail = if profile.is_aquatic() {
            "Cycle the water for 4-6 weeks and confirm ammonia and nitrite read zero before adding the animal."
                .to_string()
        } else if input.bioactive {
            "Run the enclosure for two weeks so plants root and the cleanup crew establishes.".to_string()
        } else {
            "Run heating and lighting for 24-48 hours and confirm temperatures and humidity are stable."
                .to_string()
        };
        steps.push(BuildStep {
            order: 0,
            title: "Stabilize the environment".to_string(),
            detail: settle_detail,
            item_ids: Vec::new(),
        });

        let feeding_ids: Vec<String> = items
            .iter()
            .filter(|item| item.category == EquipmentCategory::Feeding)
            .map(|item| item.id.clone())
            .collect();
        steps.push(BuildStep {
            order: 0,
            title: format!("Introduce your {}", profile.common_name),
            detail: "Add the animal, keep handling to a minimum for the first week, and offer food once it settles."
                .to_string(),
            item_ids: feeding_ids,
        });

        for (index, step) in steps.iter_mut().enumerate() {
            step.order = index as u32 + 1;
        }
        steps
    }

    fn belongs_to(template: &StepTemplate, item: &ShoppingItem) -> bool {
        if !template.ids.is_empty() {
            return template.ids.contains(&item.id.as_str());
        }
        let claimed = ITEM_STEPS.iter().any(|t| t.ids.contains(&item.id.as_str()));
        !claimed && template.categories.contains(&item.category)
    }

    /// 饲养指引: 档案文字在前, 目标派生在后
    pub fn care_guidance(profile: &AnimalProfile) -> Vec<String> {
        let targets = &profile.care_targets;
        let mut guidance = profile.care_guidance.clone();

        let temperature = &targets.temperature;
        let mut line = format!(
            "Keep a temperature gradient of {:.0}-{:.0}°F",
            temperature.min, temperature.max
        );
        if let Some(basking) = temperature.basking {
            line.push_str(&format!(" with a basking spot of {:.0}°F", basking));
        }
        line.push('.');
        guidance.push(line);
        if let Some(night_min) = temperature.night_min {
            guidance.push(format!(
                "Night temperatures can drop, but not below {:.0}°F.",
                night_min
            ));
        }

        let humidity = &targets.humidity;
        guidance.push(format!(
            "Maintain humidity between {:.0}% and {:.0}%.",
            humidity.min, humidity.max
        ));
        if let Some(shedding) = humidity.shedding {
            guidance.push(format!(
                "Raise humidity to {:.0}-{:.0}% during sheds.",
                shedding.min, shedding.max
            ));
        }

        let lighting = &targets.lighting;
        if lighting.uvb_required {
            guidance.push(format!(
                "Provide UVB across about {:.0}% of the enclosure width and replace bulbs on schedule.",
                lighting.coverage_percent
            ));
        }
        if let Some(hours) = lighting.photoperiod_hours {
            guidance.push(format!("Run a {}-hour day/night light cycle.", hours));
        }

        guidance
    }
}
