//! 报表构建 - 业务能力层
//!
//! 把数据集派生为分组序列、图表数据和历史表格。
//! 全部是纯派生视图，不修改也不持久化任何数据。

use crate::models::TestResult;
use chrono::{DateTime, Utc};

/// 固定调色板，按分组出现顺序循环取色
///
/// 调色板与 URL/地点没有稳定绑定，分组顺序变化时颜色允许变化
const CHART_PALETTE: [&str; 7] = [
    "#36a2eb", "#ff6384", "#4bc0c0", "#ff9f40", "#9966ff", "#ffcd56", "#c9cbcf",
];

/// 单个 URL 的结果分组（组内按时间升序）
#[derive(Debug, Clone)]
pub struct UrlGroup {
    pub url: String,
    pub results: Vec<TestResult>,
}

/// 单条 (URL, 地点) 序列（组内按时间升序）
#[derive(Debug, Clone)]
pub struct SeriesGroup {
    pub url: String,
    pub location: String,
    pub results: Vec<TestResult>,
}

/// 数据集的分组视图
#[derive(Debug, Clone)]
pub struct GroupedSeries {
    pub by_url: Vec<UrlGroup>,
    pub by_series: Vec<SeriesGroup>,
}

/// 图表数据点
#[derive(Debug, Clone, PartialEq)]
pub struct ChartPoint {
    pub x: DateTime<Utc>,
    pub y: f64,
}

/// 一条图表曲线，对应一个 (URL, 地点) 组合
#[derive(Debug, Clone, PartialEq)]
pub struct ChartSeries {
    pub label: String,
    pub color: &'static str,
    pub points: Vec<ChartPoint>,
}

/// 表格排序方向，由调用方显式选择
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortDirection {
    /// 时间升序（采集流水线使用）
    Ascending,
    /// 时间降序（串行流水线使用）
    Descending,
}

/// 历史表格的一行
#[derive(Debug, Clone, PartialEq)]
pub struct TableRow {
    pub timestamp: DateTime<Utc>,
    pub location: String,
    pub score: f64,
    pub lcp: f64,
    pub fcp: f64,
    pub cls: f64,
    pub rating: &'static str,
}

/// 单个 URL 的历史表格
#[derive(Debug, Clone, PartialEq)]
pub struct UrlTable {
    pub url: String,
    pub rows: Vec<TableRow>,
}

/// 按 URL 以及 (URL, 地点) 对数据集分组
///
/// 分组顺序是记录在数据集中首次出现的顺序；
/// 组内按时间升序稳定排序，时间相同的记录保持数据集原序。
pub fn group_results(results: &[TestResult]) -> GroupedSeries {
    let mut by_url: Vec<UrlGroup> = Vec::new();
    let mut by_series: Vec<SeriesGroup> = Vec::new();

    for result in results {
        match by_url.iter_mut().find(|g| g.url == result.url) {
            Some(group) => group.results.push(result.clone()),
            None => by_url.push(UrlGroup {
                url: result.url.clone(),
                results: vec![result.clone()],
            }),
        }

        match by_series
            .iter_mut()
            .find(|g| g.url == result.url && g.location == result.location)
        {
            Some(group) => group.results.push(result.clone()),
            None => by_series.push(SeriesGroup {
                url: result.url.clone(),
                location: result.location.clone(),
                results: vec![result.clone()],
            }),
        }
    }

    for group in &mut by_url {
        group.results.sort_by(|a, b| a.timestamp.cmp(&b.timestamp));
    }
    for group in &mut by_series {
        group.results.sort_by(|a, b| a.timestamp.cmp(&b.timestamp));
    }

    GroupedSeries { by_url, by_series }
}

/// 派生图表数据集
///
/// 每个 (URL, 地点) 组合一条曲线，颜色取 palette[i mod N]
pub fn chart_dataset(grouped: &GroupedSeries) -> Vec<ChartSeries> {
    grouped
        .by_series
        .iter()
        .enumerate()
        .map(|(index, group)| ChartSeries {
            label: format!("{} ({})", group.url, group.location),
            color: CHART_PALETTE[index % CHART_PALETTE.len()],
            points: group
                .results
                .iter()
                .map(|r| ChartPoint {
                    x: r.timestamp,
                    y: r.performance,
                })
                .collect(),
        })
        .collect()
}

/// 派生历史表格，每个 URL 一张
pub fn build_tables(grouped: &GroupedSeries, direction: SortDirection) -> Vec<UrlTable> {
    grouped
        .by_url
        .iter()
        .map(|group| {
            // 组内已是升序，降序直接反转
            let mut rows: Vec<TableRow> = group
                .results
                .iter()
                .map(|r| TableRow {
                    timestamp: r.timestamp,
                    location: r.location.clone(),
                    score: r.performance,
                    lcp: r.lcp,
                    fcp: r.fcp,
                    cls: r.cls,
                    rating: score_rating(r.performance),
                })
                .collect();

            if direction == SortDirection::Descending {
                rows.reverse();
            }

            UrlTable {
                url: group.url.clone(),
                rows,
            }
        })
        .collect()
}

/// 分数阈值分类，仅用于展示，不影响存储数据
///
/// ≥90 为 good，50-89 为 needs improvement，<50 为 poor
pub fn score_rating(score: f64) -> &'static str {
    if score >= 90.0 {
        "good"
    } else if score >= 50.0 {
        "needs improvement"
    } else {
        "poor"
    }
}
