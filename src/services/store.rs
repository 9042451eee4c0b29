//! 结果数据集 - 业务能力层
//!
//! 历史记录的唯一事实来源：运行开始时整体读取，结束时整体重写。
//! 数据集只增不减，任何一次运行都不得破坏既有记录。

use crate::error::{AppError, AppResult, StoreError};
use crate::models::TestResult;
use std::path::{Path, PathBuf};
use tokio::fs;
use tracing::info;

/// 结果数据集
pub struct ResultStore {
    path: PathBuf,
}

impl ResultStore {
    /// 创建数据集句柄
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// 数据集文件路径
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// 读取历史数据集
    ///
    /// 文件不存在视为首次运行（空历史）；
    /// 文件存在但无法解析是致命错误，绝不能用空数据覆盖历史。
    pub async fn load(&self) -> AppResult<Vec<TestResult>> {
        let content = match fs::read_to_string(&self.path).await {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                info!(
                    "📁 数据集文件不存在，将创建新的数据集: {}",
                    self.path.display()
                );
                return Ok(Vec::new());
            }
            Err(e) => {
                return Err(AppError::store_read_failed(
                    self.path.display().to_string(),
                    e,
                ))
            }
        };

        serde_json::from_str(&content)
            .map_err(|e| AppError::store_corrupt(self.path.display().to_string(), e))
    }

    /// 合并历史记录与新结果
    ///
    /// 纯追加：合并后长度恒等于两者之和，既有记录保持原值原序
    pub fn merge(mut existing: Vec<TestResult>, incoming: Vec<TestResult>) -> Vec<TestResult> {
        existing.extend(incoming);
        existing
    }

    /// 全量重写数据集文件
    ///
    /// 缩进仅为可读性，无格式语义
    pub async fn save(&self, results: &[TestResult]) -> AppResult<()> {
        let json = serde_json::to_string_pretty(results)
            .map_err(|e| AppError::Store(StoreError::SerializeFailed { source: e }))?;

        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent).await.map_err(|e| {
                    AppError::store_write_failed(self.path.display().to_string(), e)
                })?;
            }
        }

        fs::write(&self.path, json)
            .await
            .map_err(|e| AppError::store_write_failed(self.path.display().to_string(), e))
    }
}
