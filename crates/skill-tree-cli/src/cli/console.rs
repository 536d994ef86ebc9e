//! 终端渲染端
//!
//! 把渲染指令格式化为文本行，由命令执行器统一写出。

use std::collections::HashMap;

use skill_tree::{NodeView, RenderInstruction, RenderSink, SkillId};

/// 终端渲染端
pub struct ConsoleRenderer {
    names: HashMap<SkillId, String>,
    lines: Vec<String>,
}

impl ConsoleRenderer {
    /// 用节点视图建立 ID 到名称的映射
    pub fn new(nodes: &[NodeView]) -> Self {
        Self {
            names: nodes
                .iter()
                .map(|node| (node.id, node.name.clone()))
                .collect(),
            lines: Vec::new(),
        }
    }

    fn label(&self, id: SkillId) -> String {
        match self.names.get(&id) {
            Some(name) => format!("{} (#{})", name, id),
            None => format!("#{}", id),
        }
    }

    /// 取出已格式化的行
    pub fn take_lines(&mut self) -> Vec<String> {
        std::mem::take(&mut self.lines)
    }
}

impl RenderSink for ConsoleRenderer {
    fn apply(&mut self, instruction: &RenderInstruction) {
        let mut line = format!("✔ {} -> {}", self.label(instruction.recolor), instruction.status);
        if !instruction.reveal_labels.is_empty() {
            let revealed: Vec<String> = instruction
                .reveal_labels
                .iter()
                .map(|&id| self.label(id))
                .collect();
            line.push_str(&format!("; 解锁: {}", revealed.join(", ")));
        }
        self.lines.push(line);
    }
}
