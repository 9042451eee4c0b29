//! 应用入口编排
//!
//! 持有全部服务实例，按所选阶段调度编排层

use crate::api::ProviderClient;
use crate::config::Config;
use crate::orchestrator::{run_batch_submitter, run_collector, run_submitter};
use crate::services::report_builder::SortDirection;
use crate::services::{Collector, ResultStore, Submitter};
use anyhow::Result;
use tracing::info;

/// 运行阶段
///
/// 提交与采集可独立调度（外部定时器分别触发），
/// run 阶段把两者串成一条顺序流水线
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// 仅提交（逐对串行）
    Submit,
    /// 仅提交（单次批量调用）
    SubmitBatch,
    /// 仅采集并生成报表
    Collect,
    /// 提交后接着采集（默认）
    Run,
}

impl Phase {
    /// 从命令行参数解析运行阶段，缺省为完整流水线
    pub fn from_arg(arg: Option<&str>) -> Result<Self> {
        match arg {
            None | Some("run") => Ok(Phase::Run),
            Some("submit") => Ok(Phase::Submit),
            Some("submit-batch") => Ok(Phase::SubmitBatch),
            Some("collect") => Ok(Phase::Collect),
            Some(other) => anyhow::bail!(
                "未知的运行阶段: {} (可用: submit | submit-batch | collect | run)",
                other
            ),
        }
    }
}

/// 应用主结构
pub struct App {
    config: Config,
    submitter: Submitter,
    collector: Collector,
    store: ResultStore,
}

impl App {
    /// 初始化应用
    pub fn initialize(config: Config) -> Result<Self> {
        log_startup(&config);

        let client = ProviderClient::new(&config)?;
        let submitter = Submitter::new(client.clone(), &config);
        let collector = Collector::new(client);
        let store = ResultStore::new(&config.data_file);

        Ok(Self {
            config,
            submitter,
            collector,
            store,
        })
    }

    /// 运行所选阶段
    pub async fn run(&self, phase: Phase) -> Result<()> {
        match phase {
            Phase::Submit => {
                run_submitter(&self.submitter, &self.config).await?;
            }
            Phase::SubmitBatch => {
                run_batch_submitter(&self.submitter, &self.config).await?;
            }
            Phase::Collect => {
                // 采集入口的表格按时间升序
                run_collector(
                    &self.collector,
                    &self.store,
                    &self.config,
                    SortDirection::Ascending,
                )
                .await?;
            }
            Phase::Run => {
                // 串行流水线：先提交后采集，表格按时间降序
                run_submitter(&self.submitter, &self.config).await?;
                run_collector(
                    &self.collector,
                    &self.store,
                    &self.config,
                    SortDirection::Descending,
                )
                .await?;
            }
        }

        Ok(())
    }
}

// ========== 日志辅助函数 ==========

fn log_startup(config: &Config) {
    info!("{}", "=".repeat(60));
    info!("🚀 程序启动 - 页面性能监控");
    info!("📄 监控 {} 个 URL", config.urls.len());
    info!(
        "🌍 测试地点: {}",
        config
            .locations
            .iter()
            .map(|l| l.code())
            .collect::<Vec<_>>()
            .join(", ")
    );
    info!("📱 测试设备: {}", config.device.code());
    info!("{}", "=".repeat(60));
}
