// ==========================================
// 饲养箱装备规划引擎 - 引擎编排器
// ==========================================
// 用途: 协调各生成器/计算器, 产出完整 BuildPlan
// 流程:
//   1. 查找动物档案 (未知 ID -> 拒绝)
//   2. 尺寸归一化
//   3. 类别生成器按固定顺序生成购物清单
//   4. 告警 / 布局 / 搭建步骤 / 指引 / 检查清单
// 红线: 参考数据只读共享; 每次规划的输出互不影响
// ==========================================

use crate::catalog::ReferenceData;
use crate::domain::animal::AnimalProfile;
use crate::domain::enclosure::EnclosureInput;
use crate::domain::plan::{
    BuildPlan, CostEstimate, HusbandryCareChecklist, PlanMetadata, ShoppingItem, Warning,
};
use crate::domain::types::{EquipmentCategory, PricingTier};
use crate::engine::build_steps::BuildStepPlanner;
use crate::engine::checklist::HusbandryChecklistGenerator;
use crate::engine::cost::CostEstimator;
use crate::engine::dimensions::DimensionNormalizer;
use crate::engine::error::{PlanError, PlanResult};
use crate::engine::generators::structure::STRUCTURAL_IDS;
use crate::engine::generators::{
    BioactiveGenerator, CategoryGenerator, CategoryMatchGenerator, EnclosureGenerator,
    HeatingGenerator, HumidityGenerator, PlanContext, PlantLightingGenerator,
    ShoppingListBuilder, SpecializedGenerator, StructureGenerator, SubstrateGenerator,
    UvbLightingGenerator,
};
use crate::engine::layout::LayoutPlanner;
use crate::engine::warnings::WarningGenerator;
use chrono::{DateTime, Utc};
use std::sync::Arc;
use tracing::{debug, info};

/// 引擎版本 (写入方案元数据)
pub const ENGINE_VERSION: &str = env!("CARGO_PKG_VERSION");

// ==========================================
// ShoppingListOrchestrator - 购物清单编排
// ==========================================
pub struct ShoppingListOrchestrator {
    generators: Vec<Box<dyn CategoryGenerator>>,
}

impl Default for ShoppingListOrchestrator {
    fn default() -> Self {
        Self::new()
    }
}

impl ShoppingListOrchestrator {
    /// 标准生成器顺序
    pub fn new() -> Self {
        Self::with_generators(vec![
            Box::new(EnclosureGenerator),
            Box::new(SpecializedGenerator),
            Box::new(UvbLightingGenerator),
            Box::new(HeatingGenerator),
            Box::new(SubstrateGenerator),
            Box::new(BioactiveGenerator),
            Box::new(HumidityGenerator),
            Box::new(
                CategoryMatchGenerator::new("decor", EquipmentCategory::Decor)
                    .excluding(STRUCTURAL_IDS)
                    .skip_aquatic(),
            ),
            Box::new(PlantLightingGenerator),
            Box::new(StructureGenerator),
            Box::new(CategoryMatchGenerator::new(
                "monitoring",
                EquipmentCategory::Monitoring,
            )),
            Box::new(CategoryMatchGenerator::new("water", EquipmentCategory::Water)),
            Box::new(CategoryMatchGenerator::new(
                "feeding",
                EquipmentCategory::Feeding,
            )),
        ])
    }

    pub fn with_generators(generators: Vec<Box<dyn CategoryGenerator>>) -> Self {
        Self { generators }
    }

    pub fn generator_names(&self) -> Vec<&'static str> {
        self.generators.iter().map(|g| g.name()).collect()
    }

    pub fn generate(&self, ctx: &PlanContext<'_>) -> Vec<ShoppingItem> {
        let aquatic = ctx.profile.is_aquatic();
        let mut list = ShoppingListBuilder::new();

        for generator in &self.generators {
            if aquatic && !generator.runs_for_aquatic() {
                debug!(generator = generator.name(), "水栖物种跳过该生成器");
                continue;
            }
            let before = list.len();
            generator.generate(ctx, &mut list);
            debug!(
                generator = generator.name(),
                added = list.len() - before,
                "生成器执行完成"
            );
        }

        list.into_items()
    }
}

// ==========================================
// PlanOrchestrator - 完整方案编排
// ==========================================
pub struct PlanOrchestrator {
    data: Arc<ReferenceData>,
    shopping: ShoppingListOrchestrator,
    cost: CostEstimator,
}

impl PlanOrchestrator {
    /// 创建编排器
    ///
    /// # 参数
    /// - data: 已加载的参考数据 (只读, 可跨线程共享)
    pub fn new(data: Arc<ReferenceData>) -> Self {
        Self {
            data,
            shopping: ShoppingListOrchestrator::new(),
            cost: CostEstimator::default(),
        }
    }

    pub fn with_currency(mut self, currency: &str) -> Self {
        self.cost = CostEstimator::new(currency);
        self
    }

    pub fn with_shopping(mut self, shopping: ShoppingListOrchestrator) -> Self {
        self.shopping = shopping;
        self
    }

    pub fn reference_data(&self) -> &ReferenceData {
        &self.data
    }

    pub fn profile(&self, animal_id: &str) -> PlanResult<&AnimalProfile> {
        self.data
            .profiles
            .get(animal_id)
            .ok_or_else(|| PlanError::UnknownAnimal(animal_id.to_string()))
    }

    fn context<'a>(&'a self, input: &'a EnclosureInput) -> PlanResult<PlanContext<'a>> {
        Ok(PlanContext {
            catalog: &self.data.catalog,
            profile: self.profile(&input.animal)?,
            input,
            dims: DimensionNormalizer::normalize_input(input),
        })
    }

    pub fn shopping_list(&self, input: &EnclosureInput) -> PlanResult<Vec<ShoppingItem>> {
        let ctx = self.context(input)?;
        Ok(self.shopping.generate(&ctx))
    }

    pub fn warnings(&self, input: &EnclosureInput) -> PlanResult<Vec<Warning>> {
        let ctx = self.context(input)?;
        Ok(WarningGenerator::generate(ctx.profile, input, &ctx.dims))
    }

    pub fn husbandry_checklist(&self, input: &EnclosureInput) -> PlanResult<HusbandryCareChecklist> {
        let ctx = self.context(input)?;
        let items = self.shopping.generate(&ctx);
        Ok(HusbandryChecklistGenerator::generate(ctx.profile, input, &items))
    }

    pub fn plan(&self, input: &EnclosureInput) -> PlanResult<BuildPlan> {
        self.plan_at(input, Utc::now())
    }

    /// 生成完整方案 (时间戳由调用方给定)
    pub fn plan_at(&self, input: &EnclosureInput, generated_at: DateTime<Utc>) -> PlanResult<BuildPlan> {
        let ctx = self.context(input)?;
        let profile = ctx.profile;

        info!(
            animal = %profile.id,
            width_in = ctx.dims.width,
            depth_in = ctx.dims.depth,
            height_in = ctx.dims.height,
            bioactive = input.bioactive,
            "开始生成饲养箱方案"
        );

        let shopping_list = self.shopping.generate(&ctx);
        let warnings = WarningGenerator::generate(profile, input, &ctx.dims);
        let layout = LayoutPlanner::zones(profile);
        let steps = BuildStepPlanner::steps(profile, input, &shopping_list);
        let care_guidance = BuildStepPlanner::care_guidance(profile);
        let husbandry_checklist =
            HusbandryChecklistGenerator::generate(profile, input, &shopping_list);

        info!(
            animal = %profile.id,
            item_count = shopping_list.len(),
            warning_count = warnings.len(),
            "饲养箱方案生成完成"
        );

        Ok(BuildPlan {
            enclosure: input.clone(),
            dimensions: ctx.dims,
            care_targets: profile.care_targets.clone(),
            layout,
            shopping_list,
            steps,
            warnings,
            care_guidance,
            husbandry_checklist,
            metadata: PlanMetadata {
                animal_id: profile.id.clone(),
                common_name: profile.common_name.clone(),
                scientific_name: profile.scientific_name.clone(),
                care_level: profile.care_level,
                engine_version: ENGINE_VERSION.to_string(),
                generated_at,
            },
        })
    }

    pub fn estimate(&self, items: &[ShoppingItem], tier: PricingTier) -> CostEstimate {
        self.cost.estimate(items, tier)
    }
}
