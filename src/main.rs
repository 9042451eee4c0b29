use anyhow::Result;
use pagespeed_monitor::app::{App, Phase};
use pagespeed_monitor::config::Config;
use pagespeed_monitor::logger;

#[tokio::main]
async fn main() -> Result<()> {
    // 初始化日志
    logger::init();

    // 加载配置（API 密钥缺失时在任何网络活动之前失败退出）
    let config = Config::from_env()?;

    // 解析运行阶段
    let phase_arg = std::env::args().nth(1);
    let phase = Phase::from_arg(phase_arg.as_deref())?;

    // 初始化并运行应用
    App::initialize(config)?.run(phase).await?;

    Ok(())
}
