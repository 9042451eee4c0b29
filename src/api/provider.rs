//! 测速服务商 API 客户端
//!
//! 封装提交与结果查询两类接口；不含重试逻辑，重试由提交服务负责

use crate::config::Config;
use crate::error::{AppError, AppResult};
use crate::models::{BatchRequest, ProviderAck, TestRequest};
use serde_json::Value;
use std::time::Duration;
use tracing::debug;

/// API 密钥请求头
const API_KEY_HEADER: &str = "X-API-KEY";
/// 单个 HTTP 请求的超时时间
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// 测速服务商 API 客户端
#[derive(Clone)]
pub struct ProviderClient {
    http: reqwest::Client,
    base_url: String,
    api_key: String,
}

impl ProviderClient {
    /// 创建新的服务商客户端
    pub fn new(config: &Config) -> AppResult<Self> {
        let http = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(AppError::client_build_failed)?;

        Ok(Self {
            http,
            base_url: config.api_base_url.clone(),
            api_key: config.api_key.clone(),
        })
    }

    /// 提交单个测试请求
    ///
    /// # 参数
    /// - `request`: 测试请求（URL + 地点 + 设备）
    ///
    /// # 返回
    /// 返回服务商的提交确认
    pub async fn submit_test(&self, request: &TestRequest) -> AppResult<ProviderAck> {
        let endpoint = format!("{}/v1/tests", self.base_url);
        debug!("提交测试: {} @ {}", request.url, request.location.code());

        let response = self
            .http
            .post(&endpoint)
            .header(API_KEY_HEADER, &self.api_key)
            .json(request)
            .send()
            .await
            .map_err(|e| AppError::api_request_failed(&endpoint, e))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(AppError::api_bad_status(&endpoint, status.as_u16(), body));
        }

        response
            .json::<ProviderAck>()
            .await
            .map_err(|e| AppError::api_decode_failed(&endpoint, e))
    }

    /// 提交批量测试请求
    ///
    /// # 参数
    /// - `batch`: 批量请求（全部 URL × 地点 × 设备）
    pub async fn submit_batch(&self, batch: &BatchRequest) -> AppResult<ProviderAck> {
        let endpoint = format!("{}/v1/batch-tests", self.base_url);
        debug!(
            "批量提交测试: {} 个 URL × {} 个地点",
            batch.urls.len(),
            batch.locations.len()
        );

        let response = self
            .http
            .post(&endpoint)
            .header(API_KEY_HEADER, &self.api_key)
            .json(batch)
            .send()
            .await
            .map_err(|e| AppError::api_request_failed(&endpoint, e))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(AppError::api_bad_status(&endpoint, status.as_u16(), body));
        }

        response
            .json::<ProviderAck>()
            .await
            .map_err(|e| AppError::api_decode_failed(&endpoint, e))
    }

    /// 查询当前全部测试结果
    ///
    /// 返回原始 JSON，响应结构的归一化由采集服务负责
    pub async fn fetch_results(&self) -> AppResult<Value> {
        let endpoint = format!("{}/v1/results", self.base_url);
        debug!("查询测试结果: {}", endpoint);

        let response = self
            .http
            .get(&endpoint)
            .header(API_KEY_HEADER, &self.api_key)
            .send()
            .await
            .map_err(|e| AppError::api_request_failed(&endpoint, e))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(AppError::api_bad_status(&endpoint, status.as_u16(), body));
        }

        response
            .json::<Value>()
            .await
            .map_err(|e| AppError::api_decode_failed(&endpoint, e))
    }
}
