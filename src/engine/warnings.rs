// ==========================================
// 饲养箱装备规划引擎 - 告警生成
// ==========================================
// 职责: 档案告警透传 + 输入派生告警, 按严重度稳定排序
// 输出顺序: critical -> important -> tip (同级保持插入顺序)
// ==========================================

use crate::domain::animal::AnimalProfile;
use crate::domain::enclosure::{Dimensions, EnclosureInput};
use crate::domain::plan::Warning;
use crate::domain::types::{PricingTier, Severity, WarningCategory};
use crate::engine::dimensions::DimensionNormalizer;
use crate::engine::generators::format_dims;

/// 超过该高度 (英寸) 时提示高处湿度/温度分层
pub const TALL_ENCLOSURE_HEIGHT_IN: f64 = 36.0;

pub const UNDERSIZED_WARNING_ID: &str = "enclosure-undersized";
pub const TALL_ENCLOSURE_WARNING_ID: &str = "tall-enclosure-gradient";
pub const BIOACTIVE_BEGINNER_WARNING_ID: &str = "bioactive-beginner";
pub const BUDGET_WARNING_ID: &str = "minimum-budget";

pub struct WarningGenerator;

impl WarningGenerator {
    /// 生成告警
    ///
    /// # 规则
    /// 1. 档案告警原样透传
    /// 2. 任一轴小于最小尺寸 -> critical, 插入最前
    /// 3. 高度 > 36" -> tip
    /// 4. bioactive 且新手模式 -> tip
    /// 5. 预算为 minimum -> important
    /// 6. 按严重度稳定排序
    pub fn generate(profile: &AnimalProfile, input: &EnclosureInput, dims: &Dimensions) -> Vec<Warning> {
        let mut warnings = profile.warnings.clone();

        let minimum = DimensionNormalizer::normalize_min_size(&profile.min_enclosure_size);
        if dims.width < minimum.width || dims.depth < minimum.depth || dims.height < minimum.height {
            warnings.insert(
                0,
                Warning::new(
                    UNDERSIZED_WARNING_ID,
                    Severity::Critical,
                    WarningCategory::Size,
                    format!(
                        "Enclosure ({}) is smaller than the {} minimum of {}.",
                        format_dims(dims),
                        profile.common_name,
                        format_dims(&minimum)
                    ),
                ),
            );
        }

        if dims.height > TALL_ENCLOSURE_HEIGHT_IN {
            warnings.push(Warning::new(
                TALL_ENCLOSURE_WARNING_ID,
                Severity::Tip,
                WarningCategory::Setup,
                format!(
                    "At {:.0}\" tall, heat and humidity will stratify; check readings at both the top and the floor.",
                    dims.height
                ),
            ));
        }

        if input.bioactive && input.beginner_mode {
            warnings.push(Warning::new(
                BIOACTIVE_BEGINNER_WARNING_ID,
                Severity::Tip,
                WarningCategory::Setup,
                "Bioactive setups need a few weeks to establish; seed the cleanup crew before adding the animal."
                    .to_string(),
            ));
        }

        if input.budget == Some(PricingTier::Minimum) {
            warnings.push(Warning::new(
                BUDGET_WARNING_ID,
                Severity::Important,
                WarningCategory::Budget,
                "Minimum-tier equipment covers essentials only; do not cut corners on heating control or UVB."
                    .to_string(),
            ));
        }

        // sort_by_key 为稳定排序
        warnings.sort_by_key(|w| w.severity);
        warnings
    }
}
