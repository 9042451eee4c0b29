//! 采集编排 - 编排层
//!
//! ## 职责
//!
//! 把一次采集运行串成完整流水线：
//! 获取新结果 → 读取历史 → 追加合并 → 全量重写数据集 → 派生视图 → 渲染报表。
//!
//! ## 核心约束
//!
//! 1. **采集失败不致命**：零条新结果也走完整条流水线
//! 2. **历史损坏致命**：数据集存在但解析失败时立即失败，绝不清空历史
//! 3. **单写者**：数据集读一次、写一次，报表全量覆盖

use crate::config::Config;
use crate::services::report_builder::{build_tables, chart_dataset, group_results, SortDirection};
use crate::services::html_renderer::render_report;
use crate::services::{Collector, ResultStore};
use anyhow::{Context, Result};
use tracing::info;

/// 采集统计
#[derive(Debug, Default)]
pub struct CollectStats {
    /// 本次新增条数
    pub fetched: usize,
    /// 合并后的数据集总条数
    pub total: usize,
}

/// 执行一次完整的采集与报表流水线
///
/// # 参数
/// - `collector`: 采集服务
/// - `store`: 结果数据集
/// - `config`: 配置
/// - `direction`: 历史表格的排序方向（采集入口升序，串行流水线降序）
pub async fn run_collector(
    collector: &Collector,
    store: &ResultStore,
    config: &Config,
    direction: SortDirection,
) -> Result<CollectStats> {
    log_collect_start();

    // 先取新结果，再读历史；损坏的历史必须让本次运行失败
    let incoming = collector.fetch_all().await;
    let fetched = incoming.len();

    let existing = store.load().await?;
    let combined = ResultStore::merge(existing, incoming);
    store.save(&combined).await?;
    info!(
        "💾 数据集已更新: 新增 {} 条, 总计 {} 条 ({})",
        fetched,
        combined.len(),
        store.path().display()
    );

    let grouped = group_results(&combined);
    let chart = chart_dataset(&grouped);
    let tables = build_tables(&grouped, direction);
    let html = render_report(&chart, &tables);

    write_report(config, &html).await?;
    info!("📊 报表已生成: {}", config.report_file.display());

    let stats = CollectStats {
        fetched,
        total: combined.len(),
    };
    log_collect_complete(&stats);
    Ok(stats)
}

/// 写出静态报表文件
async fn write_report(config: &Config, html: &str) -> Result<()> {
    if let Some(parent) = config.report_file.parent() {
        if !parent.as_os_str().is_empty() {
            tokio::fs::create_dir_all(parent)
                .await
                .with_context(|| format!("无法创建报表目录: {}", parent.display()))?;
        }
    }

    tokio::fs::write(&config.report_file, html)
        .await
        .with_context(|| format!("无法写入报表文件: {}", config.report_file.display()))
}

// ========== 日志辅助函数 ==========

fn log_collect_start() {
    info!("{}", "=".repeat(60));
    info!("📥 开始采集测试结果");
    info!("{}", "=".repeat(60));
}

fn log_collect_complete(stats: &CollectStats) {
    info!("{}", "─".repeat(60));
    info!(
        "✓ 采集阶段完成: 新增 {} 条, 数据集共 {} 条",
        stats.fetched, stats.total
    );
    info!("{}", "─".repeat(60));
}
