//! 技能树命令行工具
//!
//! 在终端中扮演外部渲染端：加载技能目录，回放激活事件并输出渲染指令。

pub mod cli;
