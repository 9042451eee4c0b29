//! 测试结果记录
//!
//! 采集阶段由服务商响应归一化而来，追加进数据集后不再修改

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// 单条性能测试结果
///
/// 核心指标之外的服务商字段原样透传并随记录一起持久化
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TestResult {
    /// 被测页面地址
    pub url: String,
    /// 测试地点代码
    pub location: String,
    /// 测试完成时间（ISO-8601）
    pub timestamp: DateTime<Utc>,
    /// 性能评分，0-100
    pub performance: f64,
    /// Largest Contentful Paint（秒）
    pub lcp: f64,
    /// First Contentful Paint（秒）
    pub fcp: f64,
    /// Cumulative Layout Shift
    pub cls: f64,
    /// 服务商附带的其他字段
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_keeps_passthrough_fields() {
        let raw = r#"{
            "url": "https://x.test",
            "location": "uk",
            "timestamp": "2024-01-01T00:00:00Z",
            "performance": 95,
            "lcp": 1.2,
            "fcp": 0.8,
            "cls": 0.02,
            "device": "mobile",
            "ttfb": 0.3
        }"#;
        let result: TestResult = serde_json::from_str(raw).unwrap();

        assert_eq!(result.url, "https://x.test");
        assert_eq!(result.performance, 95.0);
        assert_eq!(result.extra["device"], "mobile");
        assert_eq!(result.extra["ttfb"], 0.3);

        // 透传字段必须随记录一起重新序列化
        let json = serde_json::to_value(&result).unwrap();
        assert_eq!(json["device"], "mobile");
        assert_eq!(json["ttfb"], 0.3);
    }

    #[test]
    fn test_deserialize_rejects_missing_metric() {
        let raw = r#"{"url": "https://x.test", "location": "uk", "timestamp": "2024-01-01T00:00:00Z"}"#;
        assert!(serde_json::from_str::<TestResult>(raw).is_err());
    }
}
