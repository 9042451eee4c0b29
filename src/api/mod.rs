//! API 模块
//!
//! 负责所有与测速服务商的 HTTP 交互

pub mod provider;

pub use provider::ProviderClient;
