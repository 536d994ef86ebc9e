//! 交互适配器
//!
//! 用户手势与状态引擎之间的边界胶水：
//! 收到“节点被激活”事件后调用引擎，再把状态变化转换为渲染指令。
//! 从不触发布局或物理模拟。

use tracing::debug;

use super::render::{NodeView, RenderInstruction, RenderSink};
use crate::engine::{ActivationOutcome, ProgressSummary, StatusEngine};
use crate::error::Result;
use crate::graph::Link;
use crate::models::{SkillId, SkillStatus};

/// 交互适配器
pub struct InteractionAdapter<R> {
    engine: StatusEngine,
    renderer: R,
}

impl<R: RenderSink> InteractionAdapter<R> {
    pub fn new(engine: StatusEngine, renderer: R) -> Self {
        Self { engine, renderer }
    }

    /// 处理节点激活事件
    ///
    /// 仅当技能真正完成时才向渲染端发送一条指令；空操作不产生任何指令。
    pub fn on_node_activated(&mut self, skill_id: SkillId) -> Result<ActivationOutcome> {
        let outcome = self.engine.activate(skill_id)?;

        if outcome.is_noop() {
            debug!(skill_id, "激活未产生状态变化，跳过渲染");
            return Ok(outcome);
        }

        let instruction = RenderInstruction {
            recolor: outcome.updated_skill_id,
            status: SkillStatus::Completed,
            reveal_labels: outcome.newly_unlocked.clone(),
        };
        self.renderer.apply(&instruction);

        Ok(outcome)
    }

    /// 所有节点的当前视图（按创作顺序）
    pub fn snapshot(&self) -> Vec<NodeView> {
        self.engine.get_all().iter().map(NodeView::from).collect()
    }

    pub fn links(&self) -> Vec<Link> {
        self.engine.store().links()
    }

    pub fn progress(&self) -> ProgressSummary {
        self.engine.progress()
    }

    /// 渲染端的可变引用，供调用方在每次激活后取走已渲染的内容
    pub fn renderer_mut(&mut self) -> &mut R {
        &mut self.renderer
    }

    pub fn into_parts(self) -> (StatusEngine, R) {
        (self.engine, self.renderer)
    }
}
