//! 状态引擎
//!
//! 负责根据技能图推导初始状态，并在技能被激活时执行解锁转换。
//!
//! ## 状态机
//!
//! `Locked --(成为已完成技能的直接后继)--> Unlockable --(activate)--> Completed`
//!
//! `Completed` 为终态，任何操作都不会让状态回退。

use tracing::{debug, info, instrument};

use super::dto::{ActivationOutcome, ProgressSummary};
use crate::error::Result;
use crate::graph::SkillGraphStore;
use crate::models::{ROOT_SKILL_ID, Skill, SkillDefinition, SkillId, SkillStatus};

/// 状态引擎
///
/// 独占持有技能图存储，`status` 字段只能经由本引擎修改。
/// `activate` 需要 `&mut self`，同一时刻只会处理一个激活事件。
#[derive(Debug, Clone)]
pub struct StatusEngine {
    store: SkillGraphStore,
}

impl StatusEngine {
    /// 从配置记录构建技能图并计算初始状态
    pub fn initialize(definitions: Vec<SkillDefinition>) -> Result<Self> {
        let store = SkillGraphStore::from_definitions(definitions)?;
        Self::from_store(store)
    }

    /// 接管已加载的技能图并计算初始状态
    pub fn from_store(store: SkillGraphStore) -> Result<Self> {
        let mut engine = Self { store };
        engine.apply_initial_statuses()?;
        Ok(engine)
    }

    /// 重新开始一次会话：所有状态回到初始值
    pub fn reset(&mut self) -> Result<()> {
        self.apply_initial_statuses()?;
        info!("技能进度已重置");
        Ok(())
    }

    /// 初始化规则：
    /// - 根技能为 Completed
    /// - 根技能直接解锁的技能，或将根技能列为自己目标的技能，为 Unlockable
    /// - 其余为 Locked
    fn apply_initial_statuses(&mut self) -> Result<()> {
        let root_targets = self.store.get_root()?.prerequisite_targets.clone();

        for skill in self.store.skills_mut() {
            let status = if skill.is_root() {
                SkillStatus::Completed
            } else if skill.unlocks(ROOT_SKILL_ID) || root_targets.contains(&skill.id) {
                SkillStatus::Unlockable
            } else {
                SkillStatus::Locked
            };
            skill.set_status(status);
        }

        let progress = self.progress();
        info!(
            total = progress.total,
            unlockable = progress.unlockable,
            locked = progress.locked,
            "技能初始状态计算完成"
        );
        Ok(())
    }

    /// 激活技能
    ///
    /// 仅对 Unlockable 技能生效：将其置为 Completed，
    /// 并把其直接后继中仍为 Locked 的技能置为 Unlockable。
    /// 不做传递性传播。对 Locked/Completed 技能为空操作。
    ///
    /// # Errors
    /// 技能不存在时返回 `NotFound`
    #[instrument(skip(self))]
    pub fn activate(&mut self, skill_id: SkillId) -> Result<ActivationOutcome> {
        let skill = self.store.get_mut(skill_id)?;

        let current = skill.status();
        if current != SkillStatus::Unlockable {
            debug!(skill_id, status = %current, "技能不可激活，忽略");
            metrics::counter!("skill_activations_total", "outcome" => "noop").increment(1);
            return Ok(ActivationOutcome::noop(skill_id));
        }

        skill.set_status(SkillStatus::Completed);
        let targets = skill.prerequisite_targets.clone();

        let mut newly_unlocked = Vec::new();
        for target_id in targets {
            let target = self.store.get_mut(target_id)?;
            if target.status() == SkillStatus::Locked {
                target.set_status(SkillStatus::Unlockable);
                newly_unlocked.push(target_id);
            }
        }

        info!(
            skill_id,
            unlocked_count = newly_unlocked.len(),
            newly_unlocked = ?newly_unlocked,
            "技能已完成"
        );
        metrics::counter!("skill_activations_total", "outcome" => "completed").increment(1);
        metrics::counter!("skills_unlocked_total").increment(newly_unlocked.len() as u64);

        Ok(ActivationOutcome {
            updated_skill_id: skill_id,
            completed: true,
            newly_unlocked,
        })
    }

    /// 按创作顺序返回所有技能（含当前状态）
    pub fn get_all(&self) -> &[Skill] {
        self.store.get_all()
    }

    pub fn get_by_id(&self, id: SkillId) -> Result<&Skill> {
        self.store.get_by_id(id)
    }

    pub fn status_of(&self, id: SkillId) -> Result<SkillStatus> {
        self.store.get_by_id(id).map(Skill::status)
    }

    pub fn store(&self) -> &SkillGraphStore {
        &self.store
    }

    /// 统计各状态的技能数量
    pub fn progress(&self) -> ProgressSummary {
        self.store
            .get_all()
            .iter()
            .fold(
                ProgressSummary {
                    total: self.store.len(),
                    ..Default::default()
                },
                |mut summary, skill| {
                    match skill.status() {
                        SkillStatus::Completed => summary.completed += 1,
                        SkillStatus::Unlockable => summary.unlockable += 1,
                        SkillStatus::Locked => summary.locked += 1,
                    }
                    summary
                },
            )
    }

    /// 是否所有技能都已完成
    pub fn is_finished(&self) -> bool {
        self.store
            .get_all()
            .iter()
            .all(|skill| skill.status() == SkillStatus::Completed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::SkillTreeError;

    fn def(id: SkillId, targets: Vec<SkillId>) -> SkillDefinition {
        SkillDefinition::new(id, format!("Skill {}", id), "Category 1", targets)
    }

    /// 根 -> [2, 8]，2 -> 3，3 -> 4，8 -> []
    fn create_test_engine() -> StatusEngine {
        StatusEngine::initialize(vec![
            def(1, vec![2, 8]),
            def(2, vec![3]),
            def(3, vec![4]),
            def(4, vec![]),
            def(8, vec![]),
        ])
        .unwrap()
    }

    #[test]
    fn test_initial_statuses() {
        let engine = create_test_engine();
        assert_eq!(engine.status_of(1).unwrap(), SkillStatus::Completed);
        assert_eq!(engine.status_of(2).unwrap(), SkillStatus::Unlockable);
        assert_eq!(engine.status_of(8).unwrap(), SkillStatus::Unlockable);
        assert_eq!(engine.status_of(3).unwrap(), SkillStatus::Locked);
        assert_eq!(engine.status_of(4).unwrap(), SkillStatus::Locked);
    }

    #[test]
    fn test_skill_targeting_root_starts_unlockable() {
        // 5 不是根的直接后继，但把根列为自己的目标
        let engine = StatusEngine::initialize(vec![
            def(1, vec![2]),
            def(2, vec![]),
            def(5, vec![1]),
            def(6, vec![]),
        ])
        .unwrap();

        assert_eq!(engine.status_of(5).unwrap(), SkillStatus::Unlockable);
        assert_eq!(engine.status_of(6).unwrap(), SkillStatus::Locked);
        // 根本身不受对称检查影响
        assert_eq!(engine.status_of(1).unwrap(), SkillStatus::Completed);
    }

    #[test]
    fn test_activate_unlockable() {
        let mut engine = create_test_engine();

        let outcome = engine.activate(2).unwrap();
        assert_eq!(outcome.updated_skill_id, 2);
        assert!(outcome.completed);
        assert_eq!(outcome.newly_unlocked, vec![3]);

        assert_eq!(engine.status_of(2).unwrap(), SkillStatus::Completed);
        assert_eq!(engine.status_of(3).unwrap(), SkillStatus::Unlockable);
        // 只解锁一层
        assert_eq!(engine.status_of(4).unwrap(), SkillStatus::Locked);
    }

    #[test]
    fn test_activate_locked_is_noop() {
        let mut engine = create_test_engine();
        let before = engine.get_all().to_vec();

        let outcome = engine.activate(3).unwrap();
        assert!(outcome.is_noop());
        assert!(outcome.newly_unlocked.is_empty());
        assert_eq!(engine.get_all(), before.as_slice());
    }

    #[test]
    fn test_activate_root_is_noop() {
        let mut engine = create_test_engine();
        let outcome = engine.activate(ROOT_SKILL_ID).unwrap();
        assert_eq!(outcome, ActivationOutcome::noop(ROOT_SKILL_ID));
    }

    #[test]
    fn test_activate_twice_is_idempotent() {
        let mut engine = create_test_engine();

        let first = engine.activate(2).unwrap();
        assert_eq!(first.newly_unlocked, vec![3]);

        let second = engine.activate(2).unwrap();
        assert!(second.is_noop());
        assert!(second.newly_unlocked.is_empty());
        assert_eq!(engine.status_of(2).unwrap(), SkillStatus::Completed);
        assert_eq!(engine.status_of(3).unwrap(), SkillStatus::Unlockable);
    }

    #[test]
    fn test_activate_unknown_skill() {
        let mut engine = create_test_engine();
        let err = engine.activate(999).unwrap_err();
        assert!(matches!(err, SkillTreeError::NotFound(999)));
    }

    #[test]
    fn test_already_unlockable_target_not_reported() {
        // 8 是根的直接后继（初始即 Unlockable），同时是 2 的目标
        let mut engine = StatusEngine::initialize(vec![
            def(1, vec![2, 8]),
            def(2, vec![8, 3]),
            def(3, vec![]),
            def(8, vec![]),
        ])
        .unwrap();

        let outcome = engine.activate(2).unwrap();
        assert_eq!(outcome.newly_unlocked, vec![3]);
    }

    #[test]
    fn test_duplicate_targets_reported_once() {
        let mut engine = StatusEngine::initialize(vec![
            def(1, vec![2]),
            def(2, vec![3, 3]),
            def(3, vec![]),
        ])
        .unwrap();

        let outcome = engine.activate(2).unwrap();
        assert_eq!(outcome.newly_unlocked, vec![3]);
    }

    #[test]
    fn test_self_loop_does_not_regress() {
        let mut engine =
            StatusEngine::initialize(vec![def(1, vec![2]), def(2, vec![2])]).unwrap();

        let outcome = engine.activate(2).unwrap();
        assert!(outcome.completed);
        assert!(outcome.newly_unlocked.is_empty());
        assert_eq!(engine.status_of(2).unwrap(), SkillStatus::Completed);
    }

    #[test]
    fn test_cycle_terminates() {
        let mut engine = StatusEngine::initialize(vec![
            def(1, vec![2]),
            def(2, vec![3]),
            def(3, vec![2]),
        ])
        .unwrap();

        assert_eq!(engine.activate(2).unwrap().newly_unlocked, vec![3]);
        // 3 -> 2 的边指向已完成技能，不会回退
        assert!(engine.activate(3).unwrap().newly_unlocked.is_empty());
        assert_eq!(engine.status_of(2).unwrap(), SkillStatus::Completed);
    }

    #[test]
    fn test_progress_and_finish() {
        let mut engine = create_test_engine();
        assert_eq!(
            engine.progress(),
            ProgressSummary {
                total: 5,
                completed: 1,
                unlockable: 2,
                locked: 2,
            }
        );
        assert!(!engine.is_finished());

        for id in [2, 3, 4, 8] {
            engine.activate(id).unwrap();
        }
        assert!(engine.is_finished());
        assert_eq!(engine.progress().completed, 5);
        assert!((engine.progress().completion_ratio() - 1.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_reset_restores_initial_statuses() {
        let mut engine = create_test_engine();
        let initial = engine.get_all().to_vec();

        engine.activate(2).unwrap();
        engine.activate(3).unwrap();
        assert_ne!(engine.get_all(), initial.as_slice());

        engine.reset().unwrap();
        assert_eq!(engine.get_all(), initial.as_slice());
    }

    #[test]
    fn test_initialize_propagates_configuration_error() {
        let err = StatusEngine::initialize(vec![def(2, vec![])]).unwrap_err();
        assert!(err.is_configuration_error());
    }
}
