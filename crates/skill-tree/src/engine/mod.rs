//! 状态引擎模块
//!
//! 负责推导技能初始状态，以及处理激活事件引发的解锁转换。
//!
//! ## 核心组件
//!
//! - `StatusEngine` - 状态引擎，独占技能图并维护每个技能的状态
//! - `ActivationOutcome` - 激活结果（被激活的技能、新解锁的技能）
//! - `ProgressSummary` - 进度统计

mod dto;
mod status_engine;

pub use dto::*;
pub use status_engine::StatusEngine;
