//! 提交接口的数据类型
//!
//! 每次提交创建一个请求对象，提交后即丢弃，不做持久化

use super::{Device, Location};
use serde::{Deserialize, Serialize};

/// 单次测试请求
#[derive(Debug, Clone, Serialize)]
pub struct TestRequest {
    /// 被测页面地址
    pub url: String,
    /// 测试地点
    pub location: Location,
    /// 测试设备
    pub device: Device,
    /// 可选的测试配置覆盖
    #[serde(skip_serializing_if = "Option::is_none")]
    pub config: Option<TestConfig>,
}

impl TestRequest {
    /// 创建新的测试请求
    pub fn new(url: impl Into<String>, location: Location, device: Device) -> Self {
        Self {
            url: url.into(),
            location,
            device,
            config: None,
        }
    }

    /// 附加测试配置覆盖
    pub fn with_config(mut self, config: TestConfig) -> Self {
        self.config = Some(config);
        self
    }
}

/// 测试配置覆盖项
#[derive(Debug, Clone, Default, Serialize)]
pub struct TestConfig {
    /// 网络连接类型（如 "4g"）
    #[serde(skip_serializing_if = "Option::is_none")]
    pub connection: Option<String>,
    /// 是否录制视频
    #[serde(skip_serializing_if = "Option::is_none")]
    pub video: Option<bool>,
    /// 是否启用广告拦截
    #[serde(skip_serializing_if = "Option::is_none")]
    pub adblock: Option<bool>,
}

/// 批量测试请求
///
/// 一次调用覆盖全部 URL × 地点 × 设备组合
#[derive(Debug, Clone, Serialize)]
pub struct BatchRequest {
    pub urls: Vec<String>,
    pub locations: Vec<String>,
    pub devices: Vec<String>,
    pub batch_type: String,
}

impl BatchRequest {
    /// 构建 multiple-urls 类型的批量请求
    pub fn multiple_urls(urls: &[String], locations: &[Location], device: Device) -> Self {
        Self {
            urls: urls.to_vec(),
            locations: locations.iter().map(|l| l.code().to_string()).collect(),
            devices: vec![device.code().to_string()],
            batch_type: "multiple-urls".to_string(),
        }
    }
}

/// 服务商的提交确认
///
/// 除测试 ID 外的字段原样透传
#[derive(Debug, Clone, Deserialize)]
pub struct ProviderAck {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}
