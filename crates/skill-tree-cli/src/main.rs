//! Skill Tree CLI
//!
//! 技能树的命令行入口点。
//! 提供目录查看、激活回放、校验和导出功能。

use std::io;

use clap::Parser;
use tracing::warn;

use skill_tree_cli::cli::{Cli, CommandRunner, load_definitions};
use skill_tree_shared::config::AppConfig;
use skill_tree_shared::observability;

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // 配置加载失败时使用默认配置，日志初始化后再告警
    let (config, config_error) = match AppConfig::load("skill-tree") {
        Ok(config) => (config, None),
        Err(e) => (AppConfig::default(), Some(e)),
    };

    let mut observability_config = config.observability.clone();
    if let Some(level) = &cli.log_level {
        observability_config = observability_config.with_log_level(level.clone());
    }
    if cli.metrics {
        observability_config.metrics_enabled = true;
    }
    let guard = observability::init(&observability_config)?;

    if let Some(e) = config_error {
        warn!(error = %e, "配置加载失败，使用默认配置");
    }

    // 命令行参数优先于配置文件
    let catalog_path = cli.catalog.clone().or_else(|| config.catalog.path_buf());
    let definitions = load_definitions(catalog_path.as_deref())?;

    let stdout = io::stdout();
    let mut runner = CommandRunner::new(definitions, stdout.lock());
    runner.run(&cli.command)?;

    if cli.metrics {
        if let Some(snapshot) = guard.render_metrics() {
            eprintln!("{}", snapshot);
        }
    }

    Ok(())
}
