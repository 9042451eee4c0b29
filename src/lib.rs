//! # PageSpeed Monitor
//!
//! 一个用于自动化页面性能监控的 Rust 应用程序：
//! 周期性地向第三方测速服务商提交合成测试请求，
//! 回收异步产出的测试结果，累积为持久化时间序列，
//! 并渲染成静态可视化报表（折线图 + 历史表格）。
//!
//! ## 架构设计
//!
//! 本系统采用严格的分层架构：
//!
//! ### ① API 层（api/）
//! - `ProviderClient` - 服务商 HTTP 客户端，只封装接口调用
//!
//! ### ② 业务能力层（services/）
//! - `Submitter` - 带指数退避重试的提交能力
//! - `Collector` - 永不失败的结果采集能力（失败按零条处理）
//! - `ResultStore` - 只增数据集的读取 / 合并 / 重写能力
//! - `report_builder` - 分组序列 / 图表数据 / 历史表格的纯派生
//! - `html_renderer` - 从派生视图到静态文档的纯模板函数
//!
//! ### ③ 编排层（orchestrator/）
//! - `submit_runner` - URL × 地点 串行遍历 + 固定节流
//! - `collect_runner` - 获取 → 合并 → 持久化 → 报表
//!
//! ### ④ 入口层（app.rs）
//! - `App` - 按所选阶段（submit / submit-batch / collect / run）调度

pub mod api;
pub mod app;
pub mod config;
pub mod error;
pub mod logger;
pub mod models;
pub mod orchestrator;
pub mod services;

// 重新导出常用类型
pub use api::ProviderClient;
pub use app::{App, Phase};
pub use config::Config;
pub use error::{AppError, AppResult};
pub use models::{Device, Location, TestRequest, TestResult};
pub use services::{Collector, ResultStore, Submitter};
