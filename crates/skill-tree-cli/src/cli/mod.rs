//! CLI 模块
//!
//! 提供命令行接口，支持以下功能：
//!
//! - `show` - 显示技能及其初始状态
//! - `activate` - 按顺序回放激活事件
//! - `links` - 列出所有边
//! - `validate` - 校验技能目录
//! - `export` - 以 JSON/YAML 导出技能目录
//!
//! # 使用示例
//!
//! ```bash
//! # 查看内置目录
//! skill-tree show
//!
//! # 回放激活序列
//! skill-tree activate 2 3 4 --json
//!
//! # 校验自定义目录
//! skill-tree validate -c skills.yaml
//!
//! # 导出为 YAML
//! skill-tree export -f yaml > skills.yaml
//! ```

pub mod commands;
pub mod console;
pub mod runner;

pub use commands::{Cli, Commands, ExportFormat};
pub use console::ConsoleRenderer;
pub use runner::{CommandRunner, load_definitions};
