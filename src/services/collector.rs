//! 采集服务 - 业务能力层
//!
//! 只负责"把服务商的当前结果取回来"能力。
//! 任何失败都按零条新结果处理，绝不让采集失败中断整次运行。

use crate::api::ProviderClient;
use crate::models::TestResult;
use serde_json::Value;
use tracing::{info, warn};

/// 采集服务
pub struct Collector {
    client: ProviderClient,
}

impl Collector {
    /// 创建新的采集服务
    pub fn new(client: ProviderClient) -> Self {
        Self { client }
    }

    /// 获取当前全部测试结果
    ///
    /// # 返回
    /// 返回归一化后的结果列表；传输或解析失败时记录日志并返回空列表
    pub async fn fetch_all(&self) -> Vec<TestResult> {
        let raw = match self.client.fetch_results().await {
            Ok(raw) => raw,
            Err(e) => {
                warn!("⚠️ 获取测试结果失败，本次按 0 条新结果处理: {}", e);
                return Vec::new();
            }
        };

        let results = normalize_results(raw);
        info!("✓ 本次获取到 {} 条新结果", results.len());
        results
    }
}

/// 归一化服务商响应
///
/// 响应可能是裸数组，也可能是带 results 字段的对象，两种结构都接受
fn normalize_results(raw: Value) -> Vec<TestResult> {
    let items = match raw {
        Value::Array(_) => raw,
        Value::Object(mut obj) => match obj.remove("results") {
            Some(results @ Value::Array(_)) => results,
            _ => {
                warn!("⚠️ 无法识别的响应结构: 缺少 results 数组");
                return Vec::new();
            }
        },
        _ => {
            warn!("⚠️ 无法识别的响应结构: 既不是数组也不是对象");
            return Vec::new();
        }
    };

    match serde_json::from_value::<Vec<TestResult>>(items) {
        Ok(results) => results,
        Err(e) => {
            warn!("⚠️ 解析测试结果失败，本次按 0 条新结果处理: {}", e);
            Vec::new()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn sample_entry(url: &str, location: &str) -> Value {
        json!({
            "url": url,
            "location": location,
            "timestamp": "2024-01-01T00:00:00Z",
            "performance": 95,
            "lcp": 1.2,
            "fcp": 0.8,
            "cls": 0.02
        })
    }

    #[test]
    fn test_normalize_bare_array() {
        let raw = json!([sample_entry("https://x.test", "uk")]);
        let results = normalize_results(raw);

        assert_eq!(results.len(), 1);
        assert_eq!(results[0].url, "https://x.test");
        assert_eq!(results[0].location, "uk");
    }

    #[test]
    fn test_normalize_wrapped_object() {
        let raw = json!({
            "results": [
                sample_entry("https://x.test", "uk"),
                sample_entry("https://x.test", "in")
            ]
        });
        let results = normalize_results(raw);

        assert_eq!(results.len(), 2);
        assert_eq!(results[1].location, "in");
    }

    #[test]
    fn test_normalize_unrecognized_shape_yields_empty() {
        assert!(normalize_results(json!("not a result set")).is_empty());
        assert!(normalize_results(json!({"data": []})).is_empty());
        assert!(normalize_results(json!(42)).is_empty());
    }

    #[test]
    fn test_normalize_unparsable_entries_yield_empty() {
        // 缺少核心指标的条目导致整批按 0 条处理
        let raw = json!([{"url": "https://x.test"}]);
        assert!(normalize_results(raw).is_empty());
    }
}
