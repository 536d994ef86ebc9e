use serde::Serialize;

use crate::models::{Skill, SkillId, SkillStatus};

/// 渲染指令
///
/// 一次成功激活后交给渲染端：重绘被激活节点，并显示新解锁节点的标签。
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RenderInstruction {
    /// 需要重新着色的节点
    pub recolor: SkillId,
    /// 该节点的新状态
    pub status: SkillStatus,
    /// 需要显示标签的节点
    pub reveal_labels: Vec<SkillId>,
}

/// 渲染端接口
///
/// 外部渲染器（力导向图、终端输出等）实现此 trait 接收状态变化。
/// 渲染端只负责绘制，不得回调修改技能状态。
#[cfg_attr(test, mockall::automock)]
pub trait RenderSink {
    fn apply(&mut self, instruction: &RenderInstruction);
}

/// 收集所有指令，便于回放和测试
impl RenderSink for Vec<RenderInstruction> {
    fn apply(&mut self, instruction: &RenderInstruction) {
        self.push(instruction.clone());
    }
}

/// 节点视图：渲染端绘制一个节点所需的全部信息
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NodeView {
    pub id: SkillId,
    pub name: String,
    pub category: String,
    pub status: SkillStatus,
    pub label_visible: bool,
}

impl From<&Skill> for NodeView {
    fn from(skill: &Skill) -> Self {
        Self {
            id: skill.id,
            name: skill.name.clone(),
            category: skill.category.clone(),
            status: skill.status(),
            label_visible: skill.label_visible(),
        }
    }
}
