//! CLI 命令定义
//!
//! 使用 clap derive 宏定义命令行接口结构。

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use skill_tree::{CatalogFormat, SkillId};

/// 技能树命令行工具
///
/// 加载技能目录并在终端中回放激活事件。
/// 使用 `--help` 查看各子命令的详细说明。
#[derive(Parser, Debug)]
#[command(name = "skill-tree")]
#[command(version, about = "技能树进度工具")]
#[command(propagate_version = true)]
pub struct Cli {
    /// 日志级别 (trace, debug, info, warn, error)，覆盖配置文件
    #[arg(short, long, global = true)]
    pub log_level: Option<String>,

    /// 技能配置文件（JSON/YAML），覆盖配置文件中的 catalog.path
    #[arg(short, long, global = true)]
    pub catalog: Option<PathBuf>,

    /// 退出前输出 Prometheus 指标快照
    #[arg(long, global = true)]
    pub metrics: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// 子命令枚举
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Commands {
    /// 显示所有技能及其初始状态
    Show {
        /// 以 JSON 输出节点视图
        #[arg(long)]
        json: bool,
    },

    /// 按顺序激活技能，输出每一步的渲染指令
    ///
    /// 对 Locked/Completed 技能的激活会被忽略；不存在的技能会报错。
    Activate {
        /// 技能 ID 列表
        #[arg(required = true, num_args = 1..)]
        ids: Vec<SkillId>,

        /// 以 JSON 输出激活结果
        #[arg(long)]
        json: bool,
    },

    /// 列出所有边（source -> target）
    Links,

    /// 校验技能目录并输出统计
    Validate,

    /// 导出技能目录
    Export {
        /// 导出格式
        #[arg(short, long, value_enum, default_value_t = ExportFormat::Json)]
        format: ExportFormat,
    },
}

/// 导出格式
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportFormat {
    Json,
    Yaml,
}

impl From<ExportFormat> for CatalogFormat {
    fn from(format: ExportFormat) -> Self {
        match format {
            ExportFormat::Json => CatalogFormat::Json,
            ExportFormat::Yaml => CatalogFormat::Yaml,
        }
    }
}

// ============================================================================
// 单元测试
// ============================================================================
