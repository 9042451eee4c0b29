//! 提交服务 - 业务能力层
//!
//! 只负责"带重试地提交一个测试"能力，不关心遍历顺序和节流

use crate::api::ProviderClient;
use crate::config::Config;
use crate::error::AppResult;
use crate::models::{BatchRequest, ProviderAck, TestRequest};
use std::future::Future;
use std::time::Duration;
use tokio::time::sleep;
use tracing::{error, warn};

/// 提交服务
///
/// 职责：
/// - 提交单个或批量测试请求
/// - 对暂时性失败做指数退避重试
/// - 不区分错误种类，所有失败一视同仁地重试
pub struct Submitter {
    client: ProviderClient,
    max_attempts: usize,
    base_delay: Duration,
}

impl Submitter {
    /// 创建新的提交服务
    pub fn new(client: ProviderClient, config: &Config) -> Self {
        Self {
            client,
            max_attempts: config.max_attempts,
            base_delay: config.retry_base_delay,
        }
    }

    /// 提交单个测试请求（带重试）
    ///
    /// # 参数
    /// - `request`: 测试请求
    ///
    /// # 返回
    /// 返回服务商的提交确认；重试耗尽后返回最后一次的底层错误
    pub async fn submit(&self, request: &TestRequest) -> AppResult<ProviderAck> {
        retry_with_backoff(self.max_attempts, self.base_delay, || {
            self.client.submit_test(request)
        })
        .await
    }

    /// 提交批量测试请求（带重试）
    pub async fn submit_batch(&self, batch: &BatchRequest) -> AppResult<ProviderAck> {
        retry_with_backoff(self.max_attempts, self.base_delay, || {
            self.client.submit_batch(batch)
        })
        .await
    }
}

/// 带指数退避的重试
///
/// 首次失败后等待基础延迟，之后每次翻倍（1s → 2s → 4s ...）。
/// 最后一次尝试失败时不再等待，直接把底层错误返回给调用方。
async fn retry_with_backoff<T, F, Fut>(
    max_attempts: usize,
    base_delay: Duration,
    mut operation: F,
) -> AppResult<T>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = AppResult<T>>,
{
    let mut delay = base_delay;
    let mut attempt = 1;

    loop {
        match operation().await {
            Ok(value) => return Ok(value),
            Err(e) if attempt >= max_attempts => {
                error!("❌ 已尝试 {} 次仍然失败: {}", max_attempts, e);
                return Err(e);
            }
            Err(e) => {
                warn!(
                    "提交失败 (尝试 {}/{}), {}ms 后重试: {}",
                    attempt,
                    max_attempts,
                    delay.as_millis(),
                    e
                );
                sleep(delay).await;
                delay *= 2;
                attempt += 1;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::AppError;
    use tokio::time::Instant;

    #[tokio::test(start_paused = true)]
    async fn test_first_attempt_success_makes_one_call() {
        let mut calls = 0;
        let result = retry_with_backoff(3, Duration::from_millis(1000), || {
            calls += 1;
            async { Ok::<_, AppError>(42) }
        })
        .await;

        assert_eq!(result.unwrap(), 42);
        assert_eq!(calls, 1);
    }

    #[tokio::test(start_paused = true)]
    async fn test_recovers_after_transient_failures() {
        let mut calls = 0;
        let result = retry_with_backoff(3, Duration::from_millis(1000), || {
            calls += 1;
            let n = calls;
            async move {
                if n < 3 {
                    Err(AppError::Other("暂时失败".to_string()))
                } else {
                    Ok(7)
                }
            }
        })
        .await;

        assert_eq!(result.unwrap(), 7);
        assert_eq!(calls, 3);
    }

    #[tokio::test(start_paused = true)]
    async fn test_exhaustion_makes_at_most_max_attempts() {
        let mut calls = 0;
        let result: AppResult<()> = retry_with_backoff(3, Duration::from_millis(1000), || {
            calls += 1;
            async { Err(AppError::Other("总是失败".to_string())) }
        })
        .await;

        assert!(result.is_err());
        assert_eq!(calls, 3);
    }

    #[tokio::test(start_paused = true)]
    async fn test_delays_double_from_base() {
        // 3 次尝试 = 2 次等待：1000ms + 2000ms，最后一次失败不等待
        let start = Instant::now();
        let result: AppResult<()> = retry_with_backoff(3, Duration::from_millis(1000), || async {
            Err(AppError::Other("总是失败".to_string()))
        })
        .await;

        assert!(result.is_err());
        assert_eq!(start.elapsed(), Duration::from_millis(3000));
    }

    #[tokio::test(start_paused = true)]
    async fn test_single_attempt_makes_no_delay() {
        let start = Instant::now();
        let mut calls = 0;
        let result: AppResult<()> = retry_with_backoff(1, Duration::from_millis(1000), || {
            calls += 1;
            async { Err(AppError::Other("失败".to_string())) }
        })
        .await;

        assert!(result.is_err());
        assert_eq!(calls, 1);
        assert_eq!(start.elapsed(), Duration::ZERO);
    }
}
