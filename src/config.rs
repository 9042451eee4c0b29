use crate::error::{AppError, AppResult};
use crate::models::{Device, Location};
use std::path::PathBuf;
use std::time::Duration;

/// 默认的服务商 API 基地址
const DEFAULT_API_BASE_URL: &str = "https://api.speedvitals.com";
/// 未配置 URL 列表时的内置默认监控地址
const DEFAULT_MONITOR_URL: &str = "https://www.example.com";
/// 默认数据集文件路径
const DEFAULT_DATA_FILE: &str = "data/results.json";
/// 默认报表输出路径
const DEFAULT_REPORT_FILE: &str = "report/index.html";
/// 单个请求的默认最大尝试次数
const DEFAULT_MAX_ATTEMPTS: usize = 3;
/// 默认重试基础延迟（毫秒），每次重试翻倍
const DEFAULT_RETRY_BASE_DELAY_MS: u64 = 1000;
/// 相邻请求之间的默认固定间隔（毫秒）
const DEFAULT_THROTTLE_MS: u64 = 2000;

/// 程序配置
///
/// 在进程启动时从环境变量构建一次，之后显式传入各组件，
/// 组件内部不再读取任何环境状态。
#[derive(Clone, Debug)]
pub struct Config {
    /// 服务商 API 密钥（必需）
    pub api_key: String,
    /// 服务商 API 基地址
    pub api_base_url: String,
    /// 待监控的 URL 列表
    pub urls: Vec<String>,
    /// 测试地点列表（进程内固定，不从环境读取）
    pub locations: Vec<Location>,
    /// 测试设备类型
    pub device: Device,
    /// 数据集文件路径
    pub data_file: PathBuf,
    /// 报表输出路径
    pub report_file: PathBuf,
    /// 单个请求的最大尝试次数
    pub max_attempts: usize,
    /// 重试基础延迟
    pub retry_base_delay: Duration,
    /// 相邻请求之间的固定间隔
    pub throttle_delay: Duration,
}

impl Config {
    /// 从进程环境构建配置
    ///
    /// API 密钥缺失是致命错误，必须在任何网络活动之前失败退出。
    /// 其余配置项均有内置默认值。
    pub fn from_env() -> AppResult<Self> {
        let api_key = std::env::var("SPEEDVITALS_API_KEY")
            .map_err(|_| AppError::env_var_not_found("SPEEDVITALS_API_KEY"))?;

        Ok(Self {
            api_key,
            api_base_url: std::env::var("SPEEDVITALS_API_BASE_URL")
                .unwrap_or_else(|_| DEFAULT_API_BASE_URL.to_string()),
            urls: parse_url_list(std::env::var("MONITOR_URLS").ok().as_deref()),
            locations: Location::ALL.to_vec(),
            device: std::env::var("TEST_DEVICE")
                .ok()
                .and_then(|v| Device::from_code(&v))
                .unwrap_or(Device::Mobile),
            data_file: PathBuf::from(
                std::env::var("DATA_FILE").unwrap_or_else(|_| DEFAULT_DATA_FILE.to_string()),
            ),
            report_file: PathBuf::from(
                std::env::var("REPORT_FILE").unwrap_or_else(|_| DEFAULT_REPORT_FILE.to_string()),
            ),
            max_attempts: std::env::var("MAX_RETRIES")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(DEFAULT_MAX_ATTEMPTS),
            retry_base_delay: Duration::from_millis(
                std::env::var("RETRY_BASE_DELAY_MS")
                    .ok()
                    .and_then(|v| v.parse().ok())
                    .unwrap_or(DEFAULT_RETRY_BASE_DELAY_MS),
            ),
            throttle_delay: Duration::from_millis(
                std::env::var("REQUEST_THROTTLE_MS")
                    .ok()
                    .and_then(|v| v.parse().ok())
                    .unwrap_or(DEFAULT_THROTTLE_MS),
            ),
        })
    }
}

/// 解析逗号分隔的 URL 覆盖列表
///
/// 未设置、为空或全是空白时退回内置默认 URL。
fn parse_url_list(raw: Option<&str>) -> Vec<String> {
    let urls: Vec<String> = raw
        .unwrap_or_default()
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect();

    if urls.is_empty() {
        vec![DEFAULT_MONITOR_URL.to_string()]
    } else {
        urls
    }
}
