//! 提交编排 - 编排层
//!
//! ## 职责
//!
//! 遍历全部 (URL, 地点) 组合，逐对串行提交测试请求。
//!
//! ## 核心约束
//!
//! 1. **严格串行**：外层 URL、内层地点的嵌套循环，任意时刻至多一个在途请求
//! 2. **固定节流**：每对处理完毕后（无论成败）等待固定间隔
//! 3. **失败不中断**：单对重试耗尽只记日志，循环继续处理后续组合

use crate::config::Config;
use crate::models::{BatchRequest, TestRequest};
use crate::services::Submitter;
use anyhow::{Context, Result};
use tokio::time::sleep;
use tracing::{error, info};

/// 提交统计
#[derive(Debug, Default)]
pub struct SubmitStats {
    pub submitted: usize,
    pub failed: usize,
    pub total: usize,
}

/// 逐对提交全部 (URL, 地点) 组合
///
/// # 参数
/// - `submitter`: 提交服务（带重试）
/// - `config`: 配置
///
/// # 返回
/// 返回提交统计；单对失败不会让整个阶段失败
pub async fn run_submitter(submitter: &Submitter, config: &Config) -> Result<SubmitStats> {
    let mut stats = SubmitStats {
        total: config.urls.len() * config.locations.len(),
        ..Default::default()
    };

    log_submit_start(config, stats.total);

    for url in &config.urls {
        for location in &config.locations {
            let request = TestRequest::new(url.clone(), *location, config.device);

            match submitter.submit(&request).await {
                Ok(ack) => {
                    stats.submitted += 1;
                    match &ack.id {
                        Some(id) => {
                            info!("[{} @ {}] ✓ 测试提交成功 (id: {})", url, location.code(), id)
                        }
                        None => info!("[{} @ {}] ✓ 测试提交成功", url, location.code()),
                    }
                }
                Err(e) => {
                    stats.failed += 1;
                    error!("[{} @ {}] ❌ 测试提交失败: {}", url, location.code(), e);
                }
            }

            // 无论成败都等待固定间隔，避免触发服务商限流
            sleep(config.throttle_delay).await;
        }
    }

    log_submit_complete(&stats);
    Ok(stats)
}

/// 以单次批量调用提交全部组合
///
/// 批量接口没有"下一对"可以继续，失败直接向上传播
pub async fn run_batch_submitter(submitter: &Submitter, config: &Config) -> Result<()> {
    let batch = BatchRequest::multiple_urls(&config.urls, &config.locations, config.device);

    info!(
        "📦 批量提交: {} 个 URL × {} 个地点",
        batch.urls.len(),
        batch.locations.len()
    );

    let ack = submitter
        .submit_batch(&batch)
        .await
        .context("批量提交失败")?;

    match ack.id {
        Some(id) => info!("✓ 批量提交成功 (id: {})", id),
        None => info!("✓ 批量提交成功"),
    }

    Ok(())
}

// ========== 日志辅助函数 ==========

fn log_submit_start(config: &Config, total: usize) {
    info!("{}", "=".repeat(60));
    info!("📤 开始提交测试请求");
    info!(
        "📄 {} 个 URL × {} 个地点 = {} 对",
        config.urls.len(),
        config.locations.len(),
        total
    );
    info!("{}", "=".repeat(60));
}

fn log_submit_complete(stats: &SubmitStats) {
    info!("{}", "─".repeat(60));
    info!(
        "✓ 提交阶段完成: 成功 {}, 失败 {}, 总计 {}",
        stats.submitted, stats.failed, stats.total
    );
    info!("{}", "─".repeat(60));
}
