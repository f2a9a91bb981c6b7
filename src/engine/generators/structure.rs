// ==========================================
// 生成器 - 结构性布景 (躲避洞/平台/攀爬枝/背景板)
// ==========================================
// 躲避洞: 至少 2 个 (冷热两端), 每多一只动物 +1, 用户指定更多时取用户值
// 攀爬枝: 树栖/兼栖物种至少 1 处
// 背景板: 按用户选择, 不选则无
// ==========================================

use crate::domain::plan::Quantity;
use crate::domain::types::{BackgroundType, ClimbingStyle};
use crate::engine::generators::{CategoryGenerator, ItemOverrides, PlanContext, ShoppingListBuilder};

pub const HIDE_ID: &str = "hide-cave";
pub const LEDGE_ID: &str = "magnetic-ledge";
pub const CLIMBING_BRANCH_ID: &str = "climbing-branch";
pub const BACKGROUND_FOAM_ID: &str = "background-foam";
pub const BACKGROUND_CORK_ID: &str = "background-cork";
pub const BACKGROUND_PRINTED_ID: &str = "background-printed";

/// 由本生成器按数量控制的条目, 通用装饰生成器不应重复选择
pub const STRUCTURAL_IDS: &[&str] = &[
    HIDE_ID,
    LEDGE_ID,
    CLIMBING_BRANCH_ID,
    BACKGROUND_FOAM_ID,
    BACKGROUND_CORK_ID,
    BACKGROUND_PRINTED_ID,
];

const MIN_HIDES: u32 = 2;

pub struct StructureGenerator;

impl StructureGenerator {
    pub fn hide_count(ctx: &PlanContext<'_>) -> u32 {
        let recommended = MIN_HIDES + ctx.input.quantity.saturating_sub(1);
        ctx.input.number_of_hides.max(recommended)
    }

    pub fn climbing_count(ctx: &PlanContext<'_>) -> u32 {
        let climber = matches!(
            ctx.needs().and_then(|n| n.climbing),
            Some(ClimbingStyle::Arboreal) | Some(ClimbingStyle::Both)
        );
        if climber {
            ctx.input.number_of_climbing_areas.max(1)
        } else {
            ctx.input.number_of_climbing_areas
        }
    }
}

impl CategoryGenerator for StructureGenerator {
    fn name(&self) -> &'static str {
        "structural-decor"
    }

    fn generate(&self, ctx: &PlanContext<'_>, list: &mut ShoppingListBuilder) {
        let hides = Self::hide_count(ctx);
        list.add(
            ctx,
            HIDE_ID,
            ItemOverrides::default()
                .quantity(Quantity::Count(hides))
                .sizing("At least one on the warm side and one on the cool side".to_string()),
        );

        if ctx.input.number_of_ledges > 0 {
            list.add(
                ctx,
                LEDGE_ID,
                ItemOverrides::default().quantity(Quantity::Count(ctx.input.number_of_ledges)),
            );
        }

        let climbing = Self::climbing_count(ctx);
        if climbing > 0 {
            list.add(
                ctx,
                CLIMBING_BRANCH_ID,
                ItemOverrides::default()
                    .quantity(Quantity::Count(climbing))
                    .sizing(format!(
                        "Up to {:.0}\" long, spanning the {:.0}\" height",
                        ctx.dims.width, ctx.dims.height
                    )),
            );
        }

        let background = match ctx.input.background_type {
            BackgroundType::None => None,
            BackgroundType::Foam => Some(BACKGROUND_FOAM_ID),
            BackgroundType::Cork => Some(BACKGROUND_CORK_ID),
            BackgroundType::Printed => Some(BACKGROUND_PRINTED_ID),
        };
        if let Some(id) = background {
            list.add(
                ctx,
                id,
                ItemOverrides::default().sizing(format!(
                    "{:.0}\" x {:.0}\" back panel",
                    ctx.dims.width, ctx.dims.height
                )),
            );
        }
    }
}
