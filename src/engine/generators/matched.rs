// ==========================================
// 生成器 - 按类别匹配 (装饰/监测/饮水/喂食)
// ==========================================
// 类别内所有入选条目按 ID 字典序追加, 数量与规格沿用目录
// ==========================================

use crate::domain::types::EquipmentCategory;
use crate::engine::generators::{CategoryGenerator, ItemOverrides, PlanContext, ShoppingListBuilder};

pub struct CategoryMatchGenerator {
    name: &'static str,
    category: EquipmentCategory,
    exclude: &'static [&'static str],
    runs_for_aquatic: bool,
}

impl CategoryMatchGenerator {
    pub fn new(name: &'static str, category: EquipmentCategory) -> Self {
        Self {
            name,
            category,
            exclude: &[],
            runs_for_aquatic: true,
        }
    }

    /// 排除由其它生成器控制数量的条目
    pub fn excluding(mut self, ids: &'static [&'static str]) -> Self {
        self.exclude = ids;
        self
    }

    pub fn skip_aquatic(mut self) -> Self {
        self.runs_for_aquatic = false;
        self
    }
}

impl CategoryGenerator for CategoryMatchGenerator {
    fn name(&self) -> &'static str {
        self.name
    }

    fn runs_for_aquatic(&self) -> bool {
        self.runs_for_aquatic
    }

    fn generate(&self, ctx: &PlanContext<'_>, list: &mut ShoppingListBuilder) {
        for config in ctx.selected_in(self.category, self.exclude) {
            list.add_config(ctx, config, ItemOverrides::default());
        }
    }
}
