//! Prometheus 指标模块
//!
//! 基于 metrics crate 和 metrics-exporter-prometheus 收集指标。
//! 命令行进程生命周期短，只安装记录器，不启动抓取端口；退出前可渲染快照。

use anyhow::Result;
use metrics_exporter_prometheus::{PrometheusBuilder, PrometheusHandle};

/// Metrics 资源句柄
pub struct MetricsHandle {
    handle: PrometheusHandle,
}

impl MetricsHandle {
    /// 渲染 Prometheus 文本格式快照
    pub fn render(&self) -> String {
        self.handle.render()
    }
}

/// 安装全局 Prometheus 记录器
pub fn init() -> Result<MetricsHandle> {
    let handle = PrometheusBuilder::new().install_recorder()?;
    register_common_metrics();
    Ok(MetricsHandle { handle })
}

/// 描述业务指标，会出现在快照的 HELP 注释中
fn register_common_metrics() {
    metrics::describe_counter!(
        "skill_activations_total",
        "Total number of skill activations, labelled by outcome"
    );
    metrics::describe_counter!(
        "skills_unlocked_total",
        "Total number of skills moved from locked to in-progress"
    );
}
