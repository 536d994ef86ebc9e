use std::collections::HashMap;

use serde::Serialize;
use tracing::{info, warn};

use crate::error::{Result, SkillTreeError};
use crate::models::{ROOT_SKILL_ID, Skill, SkillDefinition, SkillId};

/// 技能之间的一条边（完成 source 后解锁 target）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Link {
    pub source: SkillId,
    pub target: SkillId,
}

/// 技能图存储
///
/// 启动时从静态配置构建一次，之后技能集合与边不再变化，
/// 仅 `status` 由状态引擎原地修改。
#[derive(Debug, Clone)]
pub struct SkillGraphStore {
    /// 按创作顺序保存的技能（用于确定性渲染）
    skills: Vec<Skill>,
    /// skill_id -> skills 中的下标
    index: HashMap<SkillId, usize>,
}

impl SkillGraphStore {
    /// 从配置记录构建技能图并校验完整性
    ///
    /// 按创作顺序扫描，遇到第一处违规即返回 `Configuration` 错误：
    /// 重复 ID、空名称、悬空边、缺少根技能。
    pub fn from_definitions(definitions: Vec<SkillDefinition>) -> Result<Self> {
        let mut skills = Vec::with_capacity(definitions.len());
        let mut index = HashMap::with_capacity(definitions.len());

        for definition in definitions {
            if definition.name.trim().is_empty() {
                warn!(skill_id = definition.id, "技能名称为空");
                return Err(SkillTreeError::Configuration(format!(
                    "技能名称为空: id={}",
                    definition.id
                )));
            }

            if index.insert(definition.id, skills.len()).is_some() {
                warn!(skill_id = definition.id, "技能 ID 重复");
                return Err(SkillTreeError::Configuration(format!(
                    "技能 ID 重复: id={}",
                    definition.id
                )));
            }

            skills.push(Skill::from_definition(definition));
        }

        let store = Self { skills, index };

        // 所有节点登记完毕后再检查边，允许目标出现在源之后
        for skill in &store.skills {
            if let Some(&target) = skill
                .prerequisite_targets
                .iter()
                .find(|&&target| !store.contains(target))
            {
                warn!(source = skill.id, target, "发现悬空的前置关系");
                return Err(SkillTreeError::dangling_edge(skill.id, target));
            }
        }

        if !store.contains(ROOT_SKILL_ID) {
            warn!(root_id = ROOT_SKILL_ID, "技能树缺少根技能");
            return Err(SkillTreeError::missing_root(ROOT_SKILL_ID));
        }

        info!(
            skill_count = store.len(),
            link_count = store.link_count(),
            "技能图加载完成"
        );
        Ok(store)
    }

    /// 按创作顺序返回所有技能
    pub fn get_all(&self) -> &[Skill] {
        &self.skills
    }

    pub fn get_by_id(&self, id: SkillId) -> Result<&Skill> {
        self.index
            .get(&id)
            .map(|&i| &self.skills[i])
            .ok_or(SkillTreeError::NotFound(id))
    }

    /// 获取根技能
    ///
    /// 加载时已校验根技能存在，此处仍返回 `Result` 以覆盖契约
    pub fn get_root(&self) -> Result<&Skill> {
        self.get_by_id(ROOT_SKILL_ID)
            .map_err(|_| SkillTreeError::missing_root(ROOT_SKILL_ID))
    }

    /// 获取某技能完成后直接解锁的技能
    pub fn targets_of(&self, id: SkillId) -> Result<&[SkillId]> {
        self.get_by_id(id)
            .map(|skill| skill.prerequisite_targets.as_slice())
    }

    /// 全部边，按创作顺序展开
    pub fn links(&self) -> Vec<Link> {
        self.skills
            .iter()
            .flat_map(|skill| {
                skill.prerequisite_targets.iter().map(move |&target| Link {
                    source: skill.id,
                    target,
                })
            })
            .collect()
    }

    pub fn link_count(&self) -> usize {
        self.skills
            .iter()
            .map(|skill| skill.prerequisite_targets.len())
            .sum()
    }

    pub fn contains(&self, id: SkillId) -> bool {
        self.index.contains_key(&id)
    }

    pub fn len(&self) -> usize {
        self.skills.len()
    }

    pub fn is_empty(&self) -> bool {
        self.skills.is_empty()
    }

    pub(crate) fn get_mut(&mut self, id: SkillId) -> Result<&mut Skill> {
        match self.index.get(&id) {
            Some(&i) => Ok(&mut self.skills[i]),
            None => Err(SkillTreeError::NotFound(id)),
        }
    }

    pub(crate) fn skills_mut(&mut self) -> &mut [Skill] {
        &mut self.skills
    }
}
