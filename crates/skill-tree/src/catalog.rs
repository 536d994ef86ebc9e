//! 内置技能目录
//!
//! 默认的 33 个技能：一个中心技能加六个分类子树，
//! 未指定外部配置文件时使用。

use crate::models::{SkillDefinition, SkillId};

/// (id, 名称, 分类, 解锁目标)
type Row = (SkillId, &'static str, &'static str, &'static [SkillId]);

const DEFAULT_SKILLS: &[Row] = &[
    (1, "Central Skill", "Central", &[2, 8, 14, 18, 23, 29]),
    // 分类 1：单链
    (2, "Skill 1.1", "Category 1", &[3]),
    (3, "Skill 1.2", "Category 1", &[4]),
    (4, "Skill 1.3", "Category 1", &[5]),
    (5, "Skill 1.4", "Category 1", &[6]),
    (6, "Skill 1.5", "Category 1", &[7]),
    (7, "Skill 1.6", "Category 1", &[]),
    // 分类 2：两条主分支
    (8, "Skill 2.1", "Category 2", &[9, 11]),
    (9, "Skill 2.2", "Category 2", &[10]),
    (10, "Skill 2.3", "Category 2", &[]),
    (11, "Skill 2.4", "Category 2", &[12]),
    (12, "Skill 2.5", "Category 2", &[13]),
    (13, "Skill 2.6", "Category 2", &[]),
    // 分类 3
    (14, "Skill 3.1", "Category 3", &[15, 16]),
    (15, "Skill 3.2", "Category 3", &[]),
    (16, "Skill 3.3", "Category 3", &[17]),
    (17, "Skill 3.4", "Category 3", &[]),
    // 分类 4：一条主分支后分叉
    (18, "Skill 4.1", "Category 4", &[19]),
    (19, "Skill 4.2", "Category 4", &[20, 21]),
    (20, "Skill 4.3", "Category 4", &[]),
    (21, "Skill 4.4", "Category 4", &[22]),
    (22, "Skill 4.5", "Category 4", &[]),
    // 分类 5
    (23, "Skill 5.1", "Category 5", &[24]),
    (24, "Skill 5.2", "Category 5", &[25, 26]),
    (25, "Skill 5.3", "Category 5", &[]),
    (26, "Skill 5.4", "Category 5", &[27, 28]),
    (27, "Skill 5.5", "Category 5", &[]),
    (28, "Skill 5.6", "Category 5", &[]),
    // 分类 6：单链后接一个多分叉节点
    (29, "Skill 6.1", "Category 6", &[30]),
    (30, "Skill 6.2", "Category 6", &[31, 32, 33]),
    (31, "Skill 6.3", "Category 6", &[]),
    (32, "Skill 6.4", "Category 6", &[]),
    (33, "Skill 6.5", "Category 6", &[]),
];

/// 默认技能目录（按创作顺序）
pub fn default_definitions() -> Vec<SkillDefinition> {
    DEFAULT_SKILLS
        .iter()
        .map(|&(id, name, category, targets)| {
            SkillDefinition::new(id, name, category, targets.to_vec())
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::SkillGraphStore;

    #[test]
    fn test_default_catalog_size() {
        let definitions = default_definitions();
        assert_eq!(definitions.len(), 33);
        assert_eq!(definitions[0].id, 1);
        assert_eq!(definitions[0].prerequisite_targets, vec![2, 8, 14, 18, 23, 29]);
    }

    #[test]
    fn test_default_catalog_is_valid() {
        let store = SkillGraphStore::from_definitions(default_definitions()).unwrap();
        // 森林：除根以外每个节点恰好被引用一次
        assert_eq!(store.link_count(), 32);
    }
}
