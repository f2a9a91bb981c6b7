// ==========================================
// 饲养箱装备规划引擎 - 命令行入口
// ==========================================
// 用法:
//   enclosure-planner <input.json> [tier]
// 输出: stdout 打印 { "plan": ..., "cost": ... } (JSON)
// 日志: stderr (RUST_LOG 控制级别)
// ==========================================

use anyhow::{bail, Context};
use enclosure_planner::catalog::{builtin, loader};
use enclosure_planner::{logging, AppConfig, EnclosureInput, PlanOrchestrator, PricingTier};
use std::sync::Arc;
use tracing::info;

fn main() -> anyhow::Result<()> {
    let mut args = std::env::args().skip(1);
    let input_path = match args.next() {
        Some(path) => path,
        None => bail!("usage: enclosure-planner <input.json> [minimum|recommended|ideal]"),
    };
    let requested_tier = args
        .next()
        .map(|raw| raw.parse::<PricingTier>())
        .transpose()
        .map_err(anyhow::Error::msg)?;

    let config = AppConfig::load(None).context("加载配置失败")?;
    logging::init(config.log_format);

    info!("==================================================");
    info!("{} v{}", enclosure_planner::APP_NAME, enclosure_planner::VERSION);
    info!("==================================================");

    let data = match &config.data_dir {
        Some(dir) => loader::load_dir(dir, config.catalog_options())
            .with_context(|| format!("加载参考数据失败: {}", dir.display()))?,
        None => builtin::reference_data(config.catalog_options()).context("加载内置参考数据失败")?,
    };

    let text = std::fs::read_to_string(&input_path)
        .with_context(|| format!("读取输入文件失败: {}", input_path))?;
    let input: EnclosureInput =
        serde_json::from_str(&text).with_context(|| format!("输入文件格式错误: {}", input_path))?;

    let planner = PlanOrchestrator::new(Arc::new(data)).with_currency(&config.currency);
    let plan = planner.plan(&input)?;
    let tier = requested_tier.unwrap_or_else(|| config.tier_for(input.budget));
    let cost = planner.estimate(&plan.shopping_list, tier);

    let output = serde_json::json!({ "plan": plan, "cost": cost });
    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}
