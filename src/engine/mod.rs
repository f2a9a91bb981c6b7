// ==========================================
// 饲养箱装备规划引擎 - 引擎层
// ==========================================
// 职责: 规划规则 (匹配/规则评估/计算/生成/估价/告警)
// 红线: 引擎不做 I/O; 所有输入由调用方注入
// ==========================================

pub mod build_steps;
pub mod checklist;
pub mod cost;
pub mod dimensions;
pub mod error;
pub mod generators;
pub mod layout;
pub mod needs_matcher;
pub mod orchestrator;
pub mod rule_evaluator;
pub mod sizing;
pub mod warnings;

#[cfg(test)]
pub(crate) mod test_fixtures;

// 重导出核心引擎
pub use build_steps::BuildStepPlanner;
pub use checklist::HusbandryChecklistGenerator;
pub use cost::CostEstimator;
pub use dimensions::DimensionNormalizer;
pub use error::{PlanError, PlanResult};
pub use generators::{CategoryGenerator, ItemOverrides, PlanContext, ShoppingListBuilder};
pub use layout::LayoutPlanner;
pub use needs_matcher::NeedsMatcher;
pub use orchestrator::{PlanOrchestrator, ShoppingListOrchestrator, ENGINE_VERSION};
pub use rule_evaluator::RuleEvaluator;
pub use sizing::{HeatingMode, SizingCalculator};
pub use warnings::WarningGenerator;
