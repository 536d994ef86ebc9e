//! 技能进度集成测试
//!
//! 覆盖完整流程：加载配置、计算初始状态、逐个激活、渲染指令回放。

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use skill_tree::catalog::default_definitions;
use skill_tree::{
    InteractionAdapter, RenderInstruction, SkillId, SkillStatus, SkillTreeError, SkillTreeLoader,
    StatusEngine,
};
use std::path::PathBuf;

fn fixture(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(name)
}

fn default_engine() -> StatusEngine {
    StatusEngine::initialize(default_definitions()).unwrap()
}

mod default_catalog {
    use super::*;

    /// 根完成，六个分类入口可解锁，其余全部锁定
    #[test]
    fn test_initial_state() {
        let engine = default_engine();

        assert_eq!(engine.status_of(1).unwrap(), SkillStatus::Completed);
        for id in [2, 8, 14, 18, 23, 29] {
            assert_eq!(engine.status_of(id).unwrap(), SkillStatus::Unlockable);
        }

        let progress = engine.progress();
        assert_eq!(progress.total, 33);
        assert_eq!(progress.completed, 1);
        assert_eq!(progress.unlockable, 6);
        assert_eq!(progress.locked, 26);
    }

    /// 激活 2 之后，3 变为可解锁
    #[test]
    fn test_activate_first_skill_of_category_one() {
        let mut engine = default_engine();
        assert_eq!(engine.status_of(2).unwrap(), SkillStatus::Unlockable);
        assert_eq!(engine.status_of(3).unwrap(), SkillStatus::Locked);

        let outcome = engine.activate(2).unwrap();
        assert_eq!(outcome.updated_skill_id, 2);
        assert_eq!(outcome.newly_unlocked, vec![3]);
        assert_eq!(engine.status_of(2).unwrap(), SkillStatus::Completed);
        assert_eq!(engine.status_of(3).unwrap(), SkillStatus::Unlockable);
    }

    #[test]
    fn test_activate_unknown_skill() {
        let mut engine = default_engine();
        assert!(matches!(
            engine.activate(999),
            Err(SkillTreeError::NotFound(999))
        ));
    }

    #[test]
    fn test_activate_root_is_noop() {
        let mut engine = default_engine();
        let outcome = engine.activate(1).unwrap();
        assert!(!outcome.completed);
        assert!(outcome.newly_unlocked.is_empty());
        assert_eq!(engine.progress().unlockable, 6);
    }

    /// 多分叉节点一次解锁全部直接后继
    #[test]
    fn test_branching_node_unlocks_all_children() {
        let mut engine = default_engine();
        engine.activate(29).unwrap();

        let outcome = engine.activate(30).unwrap();
        assert_eq!(outcome.newly_unlocked, vec![31, 32, 33]);
    }

    /// 按广度优先顺序可以完成整棵树
    #[test]
    fn test_complete_whole_tree() {
        let mut engine = default_engine();
        let mut queue: std::collections::VecDeque<SkillId> = engine
            .get_by_id(1)
            .unwrap()
            .prerequisite_targets
            .iter()
            .copied()
            .collect();

        while let Some(id) = queue.pop_front() {
            let outcome = engine.activate(id).unwrap();
            assert!(outcome.completed, "skill {} should be unlockable", id);
            queue.extend(outcome.newly_unlocked);
        }

        assert!(engine.is_finished());
    }
}

mod monotonicity {
    use super::*;

    /// 任意激活序列下状态只会前进
    #[test]
    fn test_random_activation_sequences() {
        let mut rng = StdRng::seed_from_u64(0x5eed);

        for _ in 0..50 {
            let mut engine = default_engine();
            let mut previous: Vec<u8> =
                engine.get_all().iter().map(|s| s.status().rank()).collect();

            for _ in 0..80 {
                let id = rng.random_range(1..=35);
                match engine.activate(id) {
                    Ok(outcome) => {
                        for &unlocked in &outcome.newly_unlocked {
                            assert_eq!(
                                engine.status_of(unlocked).unwrap(),
                                SkillStatus::Unlockable
                            );
                        }
                    }
                    Err(SkillTreeError::NotFound(missing)) => assert!(missing > 33),
                    Err(other) => panic!("unexpected error: {}", other),
                }

                let current: Vec<u8> =
                    engine.get_all().iter().map(|s| s.status().rank()).collect();
                for (before, after) in previous.iter().zip(&current) {
                    assert!(after >= before);
                }
                previous = current;
            }
        }
    }

    /// 每次激活最多一个技能变为 Completed
    #[test]
    fn test_single_completion_per_activation() {
        let mut engine = default_engine();
        for id in [2, 3, 8, 9, 11, 4, 4, 7] {
            let before = engine.progress().completed;
            let outcome = engine.activate(id).unwrap();
            let after = engine.progress().completed;
            assert_eq!(after - before, usize::from(outcome.completed));
        }
    }
}

mod loading {
    use super::*;

    #[test]
    fn test_yaml_fixture_with_back_edge_to_root() {
        let definitions = SkillTreeLoader::from_path(fixture("branching.yaml")).unwrap();
        let mut engine = StatusEngine::initialize(definitions).unwrap();

        // 5 把根列为自己的目标，初始即可解锁
        assert_eq!(engine.status_of(5).unwrap(), SkillStatus::Unlockable);
        assert_eq!(engine.status_of(4).unwrap(), SkillStatus::Locked);

        // 4 同时是 2 和 3 的目标，只会被报告一次
        assert_eq!(engine.activate(2).unwrap().newly_unlocked, vec![4]);
        assert!(engine.activate(3).unwrap().newly_unlocked.is_empty());

        // 激活 5 不会影响已完成的根
        assert!(engine.activate(5).unwrap().newly_unlocked.is_empty());
        assert_eq!(engine.status_of(1).unwrap(), SkillStatus::Completed);
    }

    #[test]
    fn test_dangling_fixture_rejected() {
        let definitions = SkillTreeLoader::from_path(fixture("dangling.json")).unwrap();
        let err = StatusEngine::initialize(definitions).unwrap_err();
        assert!(matches!(err, SkillTreeError::Configuration(_)));
        assert!(err.to_string().contains("40"));
    }
}

mod interaction {
    use super::*;

    /// 渲染端收到的指令与激活结果一一对应
    #[test]
    fn test_render_instructions_replay() {
        let mut adapter =
            InteractionAdapter::new(default_engine(), Vec::<RenderInstruction>::new());

        for id in [18, 19, 19, 22, 21, 22] {
            adapter.on_node_activated(id).unwrap();
        }

        let (engine, instructions) = adapter.into_parts();
        assert_eq!(
            instructions,
            vec![
                RenderInstruction {
                    recolor: 18,
                    status: SkillStatus::Completed,
                    reveal_labels: vec![19],
                },
                RenderInstruction {
                    recolor: 19,
                    status: SkillStatus::Completed,
                    reveal_labels: vec![20, 21],
                },
                RenderInstruction {
                    recolor: 21,
                    status: SkillStatus::Completed,
                    reveal_labels: vec![22],
                },
                RenderInstruction {
                    recolor: 22,
                    status: SkillStatus::Completed,
                    reveal_labels: vec![],
                },
            ]
        );
        assert_eq!(engine.status_of(20).unwrap(), SkillStatus::Unlockable);
    }

    #[test]
    fn test_snapshot_hides_locked_labels() {
        let adapter =
            InteractionAdapter::new(default_engine(), Vec::<RenderInstruction>::new());
        let hidden = adapter.snapshot().iter().filter(|v| !v.label_visible).count();
        assert_eq!(hidden, 26);
        assert_eq!(adapter.links().len(), 32);
    }
}
