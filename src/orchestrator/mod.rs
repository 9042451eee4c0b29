//! 编排层（Orchestration Layer）
//!
//! ## 职责
//!
//! 本层负责阶段级的流程调度，是整个系统的"指挥中心"。
//!
//! ## 模块划分
//!
//! ### `submit_runner` - 提交编排
//! - 按 URL × 地点 嵌套循环串行提交测试
//! - 相邻请求之间固定节流，保护服务商限流
//! - 单对失败不中断循环，记录日志后继续
//! - 输出提交统计
//!
//! ### `collect_runner` - 采集编排
//! - 获取新结果 → 合并历史 → 全量重写数据集
//! - 派生分组序列 / 图表数据 / 历史表格
//! - 渲染并写出静态报表
//!
//! ## 层次关系
//!
//! ```text
//! app (选择阶段)
//!     ↓
//! submit_runner / collect_runner (遍历与调度)
//!     ↓
//! services (能力层：submit / collect / store / report)
//!     ↓
//! api (基础设施：ProviderClient)
//! ```
//!
//! ## 设计原则
//!
//! 1. **严格串行**：任意时刻至多一个在途请求，这是有意的背压手段
//! 2. **单写者**：数据集在一次运行中读一次、写一次
//! 3. **无业务逻辑**：只做调度和统计，不做具体业务判断

pub mod collect_runner;
pub mod submit_runner;

pub use collect_runner::{run_collector, CollectStats};
pub use submit_runner::{run_batch_submitter, run_submitter, SubmitStats};
