//! 技能树进度引擎
//!
//! 维护一张由前置关系连接的技能图：完成一个可解锁的技能后，
//! 其直接后继随之解锁。渲染（力导向布局、着色、拖拽）由外部协作方负责，
//! 本库只提供状态机及其输入输出。
//!
//! ## 模块结构
//!
//! - `models`: 领域模型定义
//! - `error`: 错误类型定义
//! - `graph`: 技能图存储
//! - `engine`: 状态引擎（初始化与激活转换）
//! - `interaction`: 交互适配器与渲染端接口
//! - `catalog`: 内置技能目录
//! - `loader`: JSON/YAML 配置加载

pub mod catalog;
pub mod engine;
pub mod error;
pub mod graph;
pub mod interaction;
pub mod loader;
pub mod models;

pub use engine::{ActivationOutcome, ProgressSummary, StatusEngine};
pub use error::{Result, SkillTreeError};
pub use graph::{Link, SkillGraphStore};
pub use interaction::{InteractionAdapter, NodeView, RenderInstruction, RenderSink};
pub use loader::{CatalogFormat, SkillTreeLoader};
pub use models::{ROOT_SKILL_ID, Skill, SkillDefinition, SkillId, SkillStatus};
