//! 共享库
//!
//! 包含命令行与库共用的配置加载、日志与指标初始化等基础设施代码。

pub mod config;
pub mod observability;
