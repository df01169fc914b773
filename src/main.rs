// ==========================================
// 工房排班导入 - 试运行命令行
// ==========================================
// 用法:
//   workshop-planner <catalog.csv|xlsx> <schedule.txt>
//       [--next-week] [--cycle N] [--rest-mask M] [--config path]
//
// 不连接外部日历: 使用内存协作方, 结果以 JSON 输出到 stdout
// ==========================================

use anyhow::{bail, Context, Result};
use serde_json::json;
use std::path::PathBuf;
use workshop_planner::engine::{apply_week, InMemoryAgent, ScheduleApplier};
use workshop_planner::importer::{ItemCatalog, ScheduleParser};
use workshop_planner::{logging, ConfigManager};

struct CliArgs {
    catalog_path: PathBuf,
    schedule_path: PathBuf,
    next_week: bool,
    cycle_in_progress: u8,
    rest_mask14: u16,
    config_path: Option<PathBuf>,
}

fn parse_mask(raw: &str) -> Result<u16> {
    let parsed = match raw.strip_prefix("0b") {
        Some(bits) => u16::from_str_radix(bits, 2),
        None => raw.parse::<u16>(),
    };
    parsed.with_context(|| format!("无效的休息掩码: {}", raw))
}

fn parse_args() -> Result<CliArgs> {
    let mut args = std::env::args().skip(1);
    let mut positional = Vec::new();
    let mut next_week = false;
    let mut cycle_in_progress = 1u8;
    let mut rest_mask14 = 0u16;
    let mut config_path = None;

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--next-week" => next_week = true,
            "--cycle" => {
                let raw = args.next().context("--cycle 缺少参数")?;
                cycle_in_progress = raw
                    .parse()
                    .with_context(|| format!("无效的天数: {}", raw))?;
            }
            "--rest-mask" => {
                let raw = args.next().context("--rest-mask 缺少参数")?;
                rest_mask14 = parse_mask(&raw)?;
            }
            "--config" => {
                config_path = Some(PathBuf::from(args.next().context("--config 缺少参数")?));
            }
            flag if flag.starts_with("--") => bail!("未知参数: {}", flag),
            _ => positional.push(PathBuf::from(arg)),
        }
    }

    let mut positional = positional.into_iter();
    let (Some(catalog_path), Some(schedule_path)) = (positional.next(), positional.next()) else {
        bail!(
            "用法: workshop-planner <catalog> <schedule.txt> [--next-week] [--cycle N] [--rest-mask M] [--config path]"
        );
    };

    Ok(CliArgs {
        catalog_path,
        schedule_path,
        next_week,
        cycle_in_progress,
        rest_mask14,
        config_path,
    })
}

fn main() -> Result<()> {
    logging::init();
    let args = parse_args()?;

    let manager = ConfigManager::load(args.config_path.as_deref()).context("加载配置失败")?;
    let catalog = ItemCatalog::load(&args.catalog_path)
        .with_context(|| format!("加载物品目录失败: {}", args.catalog_path.display()))?;
    let text = std::fs::read_to_string(&args.schedule_path)
        .with_context(|| format!("读取排班文本失败: {}", args.schedule_path.display()))?;

    tracing::info!(
        items = catalog.len(),
        version = workshop_planner::VERSION,
        "{}",
        workshop_planner::APP_NAME
    );

    let (week, errors) = ScheduleParser::new(&catalog).parse(&text).into_parts();
    let error_messages: Vec<String> = errors.iter().map(ToString::to_string).collect();

    let applier = ScheduleApplier::new(manager.config().clone());
    let mut agent = InMemoryAgent::new(args.cycle_in_progress, args.rest_mask14);
    let applied = apply_week(&applier, &week, &mut agent, args.next_week)
        .context("应用排班失败")?;

    let report = json!({
        "config": manager.config(),
        "parse_errors": error_messages,
        "week": week,
        "applied": applied,
        "agent": agent,
    });
    println!("{}", serde_json::to_string_pretty(&report)?);
    Ok(())
}
