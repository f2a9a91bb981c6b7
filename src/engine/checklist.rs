// ==========================================
// 饲养箱装备规划引擎 - 饲养检查清单
// ==========================================
// 职责: 按方案内容生成 搭建前/每周/每月 任务
// 输入: 档案 + 用户输入 + 已生成购物清单
// ==========================================

use crate::domain::animal::AnimalProfile;
use crate::domain::enclosure::EnclosureInput;
use crate::domain::plan::{ChecklistItem, HusbandryCareChecklist, ShoppingItem};
use crate::domain::types::{EquipmentCategory, RecurrenceInterval};
use crate::engine::dimensions::DimensionNormalizer;
use crate::engine::generators::format_dims;

fn task(id: &str, text: &str) -> ChecklistItem {
    ChecklistItem {
        id: id.to_string(),
        task: text.to_string(),
        notes: None,
    }
}

fn task_with_notes(id: &str, text: &str, notes: String) -> ChecklistItem {
    ChecklistItem {
        id: id.to_string(),
        task: text.to_string(),
        notes: Some(notes),
    }
}

pub struct HusbandryChecklistGenerator;

impl HusbandryChecklistGenerator {
    pub fn generate(
        profile: &AnimalProfile,
        input: &EnclosureInput,
        items: &[ShoppingItem],
    ) -> HusbandryCareChecklist {
        let has_category = |category: EquipmentCategory| items.iter().any(|i| i.category == category);
        let aquatic = profile.is_aquatic();

        // ===== 搭建前 =====
        let mut pre_build = Vec::new();
        let minimum = DimensionNormalizer::normalize_min_size(&profile.min_enclosure_size);
        pre_build.push(task_with_notes(
            "verify-dimensions",
            "Confirm the interior dimensions meet the species minimum",
            format!("Minimum: {}", format_dims(&minimum)),
        ));
        if has_category(EquipmentCategory::Heating) {
            pre_build.push(task(
                "test-heating",
                "Run heating through the thermostat for 24-48 hours and record temperatures at both ends",
            ));
        }
        if has_category(EquipmentCategory::Lighting) {
            let hours = profile.care_targets.lighting.photoperiod_hours.unwrap_or(12);
            pre_build.push(task_with_notes(
                "set-light-timer",
                "Program the lighting timer",
                format!("{} hours on", hours),
            ));
        }
        if aquatic {
            pre_build.push(task(
                "cycle-tank",
                "Fully cycle the tank before introducing the animal",
            ));
        }
        if input.bioactive {
            pre_build.push(task(
                "seed-cleanup-crew",
                "Seed the cleanup crew at least two weeks before adding the animal",
            ));
        }
        pre_build.push(task(
            "quarantine",
            "Set up a quarantine tub if other animals are kept in the home",
        ));

        // ===== 每周 =====
        let mut weekly = Vec::new();
        weekly.push(task(
            "check-temperatures",
            "Check warm-side and cool-side temperatures",
        ));
        if aquatic {
            weekly.push(task("partial-water-change", "Change 20-25% of the tank water"));
        } else {
            let humidity = &profile.care_targets.humidity;
            weekly.push(task_with_notes(
                "check-humidity",
                "Check humidity readings",
                format!("Target {:.0}-{:.0}%", humidity.min, humidity.max),
            ));
            if has_category(EquipmentCategory::Water) {
                weekly.push(task("refresh-water", "Scrub and refill water features"));
            }
            if input.bioactive {
                weekly.push(task(
                    "check-bioactive",
                    "Remove waste the cleanup crew misses and trim plants",
                ));
            } else {
                weekly.push(task("spot-clean", "Spot clean waste and shed"));
            }
        }
        let weekly_restock: Vec<&str> = items
            .iter()
            .filter(|i| {
                i.recurrence
                    .as_ref()
                    .map(|r| r.interval == RecurrenceInterval::Weekly)
                    .unwrap_or(false)
            })
            .map(|i| i.name.as_str())
            .collect();
        if !weekly_restock.is_empty() {
            weekly.push(task_with_notes(
                "restock-weekly",
                "Restock weekly consumables",
                weekly_restock.join(", "),
            ));
        }

        // ===== 每月 =====
        let mut monthly = Vec::new();
        monthly.push(task("weigh-animal", "Weigh the animal and log the result"));
        if aquatic {
            monthly.push(task("test-water", "Test ammonia, nitrite, nitrate and pH"));
            monthly.push(task("rinse-filter", "Rinse filter media in tank water"));
        } else if !input.bioactive {
            monthly.push(task("deep-clean", "Replace or deep clean the substrate and disinfect decor"));
        }
        if profile.care_targets.lighting.uvb_required && has_category(EquipmentCategory::Lighting) {
            monthly.push(task(
                "log-uvb-age",
                "Log UVB bulb age and plan the next replacement",
            ));
        }
        let consumables: Vec<&str> = items
            .iter()
            .filter(|i| {
                i.recurrence
                    .as_ref()
                    .map(|r| r.interval != RecurrenceInterval::Weekly)
                    .unwrap_or(false)
            })
            .map(|i| i.name.as_str())
            .collect();
        if !consumables.is_empty() {
            monthly.push(task_with_notes(
                "review-consumables",
                "Review consumable stock and replacement dates",
                consumables.join(", "),
            ));
        }

        HusbandryCareChecklist {
            pre_build,
            weekly,
            monthly,
        }
    }
}
