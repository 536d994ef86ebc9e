use serde::Serialize;

use crate::models::SkillId;

/// 一次激活的结果
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ActivationOutcome {
    /// 被激活的技能
    pub updated_skill_id: SkillId,
    /// 本次是否真正发生了 Unlockable -> Completed 的转换
    pub completed: bool,
    /// 本次由 Locked 变为 Unlockable 的直接后继（保持边的顺序，无重复）
    pub newly_unlocked: Vec<SkillId>,
}

impl ActivationOutcome {
    /// 空操作结果（Locked 或 Completed 技能被激活）
    pub fn noop(skill_id: SkillId) -> Self {
        Self {
            updated_skill_id: skill_id,
            completed: false,
            newly_unlocked: Vec::new(),
        }
    }

    pub fn is_noop(&self) -> bool {
        !self.completed
    }
}

/// 进度统计
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct ProgressSummary {
    pub total: usize,
    pub completed: usize,
    pub unlockable: usize,
    pub locked: usize,
}

impl ProgressSummary {
    /// 完成比例（0.0 ~ 1.0）
    pub fn completion_ratio(&self) -> f64 {
        if self.total == 0 {
            return 0.0;
        }
        self.completed as f64 / self.total as f64
    }
}
