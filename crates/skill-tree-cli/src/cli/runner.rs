//! 命令执行器
//!
//! 负责执行各 CLI 子命令的具体逻辑。
//! 输出写入注入的 writer，便于在测试中捕获。

use std::io::Write;
use std::path::Path;

use anyhow::{Context, Result};
use serde::Serialize;
use tracing::info;

use skill_tree::catalog::default_definitions;
use skill_tree::{
    ActivationOutcome, InteractionAdapter, NodeView, ProgressSummary, RenderInstruction,
    Skill, SkillDefinition, SkillId, SkillTreeLoader, StatusEngine,
};

use super::commands::{Commands, ExportFormat};
use super::console::ConsoleRenderer;

/// 加载技能目录：指定路径时从文件读取，否则使用内置目录
pub fn load_definitions(path: Option<&Path>) -> Result<Vec<SkillDefinition>> {
    match path {
        Some(path) => SkillTreeLoader::from_path(path)
            .with_context(|| format!("加载技能配置失败: {}", path.display())),
        None => {
            info!("未指定技能配置文件，使用内置目录");
            Ok(default_definitions())
        }
    }
}

/// `activate --json` 的输出结构
#[derive(Debug, Serialize)]
struct ActivationReport {
    outcomes: Vec<ActivationOutcome>,
    progress: ProgressSummary,
}

/// 命令执行器
pub struct CommandRunner<W> {
    definitions: Vec<SkillDefinition>,
    out: W,
}

impl<W: Write> CommandRunner<W> {
    pub fn new(definitions: Vec<SkillDefinition>, out: W) -> Self {
        Self { definitions, out }
    }

    pub fn into_output(self) -> W {
        self.out
    }

    pub fn run(&mut self, command: &Commands) -> Result<()> {
        match command {
            Commands::Show { json } => self.run_show(*json),
            Commands::Activate { ids, json } => self.run_activate(ids, *json),
            Commands::Links => self.run_links(),
            Commands::Validate => self.run_validate(),
            Commands::Export { format } => self.run_export(*format),
        }
    }

    fn build_engine(&self) -> Result<StatusEngine> {
        StatusEngine::initialize(self.definitions.clone()).context("技能目录校验失败")
    }

    fn run_show(&mut self, json: bool) -> Result<()> {
        let engine = self.build_engine()?;
        let adapter = InteractionAdapter::new(engine, Vec::<RenderInstruction>::new());
        let nodes = adapter.snapshot();

        if json {
            let text = serde_json::to_string_pretty(&nodes).context("序列化节点视图失败")?;
            writeln!(self.out, "{}", text)?;
            return Ok(());
        }

        for node in &nodes {
            let label = if node.label_visible { "" } else { " [hidden]" };
            writeln!(
                self.out,
                "{:>4}  {:<16} {:<12} {}{}",
                node.id, node.name, node.category, node.status, label
            )?;
        }
        self.write_progress(&adapter.progress())
    }

    fn run_activate(&mut self, ids: &[SkillId], json: bool) -> Result<()> {
        let engine = self.build_engine()?;
        let nodes: Vec<NodeView> = engine.get_all().iter().map(NodeView::from).collect();
        let renderer = ConsoleRenderer::new(&nodes);
        let mut adapter = InteractionAdapter::new(engine, renderer);

        // 每次激活后立即写出，后续失败时已发生的转换仍可见
        let mut outcomes = Vec::with_capacity(ids.len());
        for &id in ids {
            let outcome = adapter
                .on_node_activated(id)
                .with_context(|| format!("激活技能失败: id={}", id))?;

            if !json {
                if outcome.completed {
                    for line in adapter.renderer_mut().take_lines() {
                        writeln!(self.out, "{}", line)?;
                    }
                } else {
                    writeln!(self.out, "· #{} 未变化（未解锁或已完成）", id)?;
                }
            }
            outcomes.push(outcome);
        }

        let progress = adapter.progress();
        if json {
            let report = ActivationReport { outcomes, progress };
            let text = serde_json::to_string_pretty(&report).context("序列化激活结果失败")?;
            writeln!(self.out, "{}", text)?;
            return Ok(());
        }
        self.write_progress(&progress)
    }

    fn run_links(&mut self) -> Result<()> {
        let engine = self.build_engine()?;
        for link in engine.store().links() {
            writeln!(self.out, "{} -> {}", link.source, link.target)?;
        }
        Ok(())
    }

    fn run_validate(&mut self) -> Result<()> {
        let engine = self.build_engine()?;
        let store = engine.store();
        writeln!(
            self.out,
            "技能目录有效: {} 个技能, {} 条边",
            store.len(),
            store.link_count()
        )?;
        Ok(())
    }

    fn run_export(&mut self, format: ExportFormat) -> Result<()> {
        // 从校验后的技能图导出，保证导出的目录可被重新加载
        let engine = self.build_engine()?;
        let definitions: Vec<SkillDefinition> =
            engine.get_all().iter().map(Skill::to_definition).collect();
        let text = SkillTreeLoader::serialize(&definitions, format.into())
            .context("序列化技能目录失败")?;
        writeln!(self.out, "{}", text.trim_end())?;
        Ok(())
    }

    fn write_progress(&mut self, progress: &ProgressSummary) -> Result<()> {
        writeln!(self.out, "{}", "-".repeat(40))?;
        writeln!(
            self.out,
            "进度: {}/{} 已完成, {} 可解锁, {} 未解锁 ({:.1}%)",
            progress.completed,
            progress.total,
            progress.unlockable,
            progress.locked,
            progress.completion_ratio() * 100.0
        )?;
        Ok(())
    }
}
