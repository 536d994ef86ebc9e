//! 领域模型定义
//!
//! - `SkillDefinition`: 配置中的原始技能记录
//! - `Skill`: 加载后的技能节点，携带进度状态
//! - `SkillStatus`: 技能的三种生命周期状态

use serde::{Deserialize, Serialize};

use crate::error::SkillTreeError;

/// 技能 ID（创作时分配，稳定不变）
pub type SkillId = i64;

/// 根技能 ID
pub const ROOT_SKILL_ID: SkillId = 1;

/// 技能进度状态
///
/// 状态在一次会话内单调推进：`Locked -> Unlockable -> Completed`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SkillStatus {
    /// 未解锁
    #[serde(rename = "locked")]
    Locked,
    /// 可解锁（进行中）
    #[serde(rename = "in-progress", alias = "unlockable")]
    Unlockable,
    /// 已完成
    #[serde(rename = "completed")]
    Completed,
}

impl SkillStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Locked => "locked",
            Self::Unlockable => "in-progress",
            Self::Completed => "completed",
        }
    }

    /// 状态序号，用于单调性比较
    pub fn rank(&self) -> u8 {
        match self {
            Self::Locked => 0,
            Self::Unlockable => 1,
            Self::Completed => 2,
        }
    }
}

impl std::fmt::Display for SkillStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for SkillStatus {
    type Err = SkillTreeError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "locked" => Ok(Self::Locked),
            "in-progress" | "unlockable" => Ok(Self::Unlockable),
            "completed" => Ok(Self::Completed),
            _ => Err(SkillTreeError::InvalidStatus(s.to_string())),
        }
    }
}

/// 技能配置记录
///
/// 对应静态配置中的一条 `{id, name, category, relatedSkills}` 记录。
/// `relatedSkills` 表示“完成本技能后解锁的技能”，而不是“本技能的前置技能”。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SkillDefinition {
    pub id: SkillId,
    pub name: String,
    pub category: String,
    #[serde(rename = "relatedSkills", alias = "prerequisiteTargets", default)]
    pub prerequisite_targets: Vec<SkillId>,
}

impl SkillDefinition {
    pub fn new(
        id: SkillId,
        name: impl Into<String>,
        category: impl Into<String>,
        prerequisite_targets: Vec<SkillId>,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            category: category.into(),
            prerequisite_targets,
        }
    }
}

/// 技能节点
///
/// 除 `status` 外均在加载后不可变；`status` 只能由状态引擎修改。
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Skill {
    pub id: SkillId,
    pub name: String,
    /// 分类，仅供渲染着色使用，不影响状态逻辑
    pub category: String,
    /// 完成本技能后解锁的技能（有序）
    pub prerequisite_targets: Vec<SkillId>,
    status: SkillStatus,
}

impl Skill {
    pub(crate) fn from_definition(definition: SkillDefinition) -> Self {
        Self {
            id: definition.id,
            name: definition.name,
            category: definition.category,
            prerequisite_targets: definition.prerequisite_targets,
            status: SkillStatus::Locked,
        }
    }

    pub fn status(&self) -> SkillStatus {
        self.status
    }

    pub(crate) fn set_status(&mut self, status: SkillStatus) {
        self.status = status;
    }

    pub fn is_root(&self) -> bool {
        self.id == ROOT_SKILL_ID
    }

    /// 本技能是否直接解锁 target
    pub fn unlocks(&self, target: SkillId) -> bool {
        self.prerequisite_targets.contains(&target)
    }

    /// 标签是否可见（未解锁的技能隐藏标签）
    pub fn label_visible(&self) -> bool {
        self.status != SkillStatus::Locked
    }

    /// 还原为配置记录
    pub fn to_definition(&self) -> SkillDefinition {
        SkillDefinition {
            id: self.id,
            name: self.name.clone(),
            category: self.category.clone(),
            prerequisite_targets: self.prerequisite_targets.clone(),
        }
    }
}
