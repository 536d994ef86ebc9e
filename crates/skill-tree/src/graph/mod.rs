//! 技能图模块
//!
//! 持有静态的技能节点与前置关系边，提供按 ID 查询、根技能查询和边列表展开。
//!
//! ## 核心组件
//!
//! - `SkillGraphStore` - 技能图存储，加载时校验根技能与边的完整性
//! - `Link` - 一条 source -> target 的解锁边

mod store;

pub use store::{Link, SkillGraphStore};
