//! 离线流水线测试
//!
//! 不访问网络，围绕数据集合并、持久化与报表派生的端到端行为

use chrono::{TimeZone, Utc};
use pagespeed_monitor::services::html_renderer::render_report;
use pagespeed_monitor::services::report_builder::{
    build_tables, chart_dataset, group_results, SortDirection,
};
use pagespeed_monitor::{ResultStore, TestResult};

fn sample_result(url: &str, location: &str, day: u32, performance: f64) -> TestResult {
    TestResult {
        url: url.to_string(),
        location: location.to_string(),
        timestamp: Utc.with_ymd_and_hms(2024, 1, day, 0, 0, 0).unwrap(),
        performance,
        lcp: 1.2,
        fcp: 0.8,
        cls: 0.02,
        extra: serde_json::Map::new(),
    }
}

#[tokio::test]
async fn test_first_run_persists_exactly_fetched_results() {
    let dir = tempfile::tempdir().unwrap();
    let store = ResultStore::new(dir.path().join("results.json"));

    // 首次运行：文件不存在，历史为空
    let existing = store.load().await.expect("缺失文件应视为空历史");
    assert!(existing.is_empty());

    // 采集到 3 条结果并持久化
    let incoming = vec![
        sample_result("https://x.test", "uk", 1, 95.0),
        sample_result("https://x.test", "in", 2, 60.0),
        sample_result("https://y.test", "uk", 3, 40.0),
    ];
    let combined = ResultStore::merge(existing, incoming);
    store.save(&combined).await.expect("写入数据集失败");

    // 落盘内容恰好是这 3 条
    let reloaded = store.load().await.unwrap();
    assert_eq!(reloaded.len(), 3);
    assert_eq!(reloaded, combined);
}

#[tokio::test]
async fn test_dataset_grows_monotonically_across_runs() {
    let dir = tempfile::tempdir().unwrap();
    let store = ResultStore::new(dir.path().join("results.json"));

    // 第一次运行写入 1 条
    let first_run = ResultStore::merge(
        store.load().await.unwrap(),
        vec![sample_result("https://x.test", "uk", 1, 95.0)],
    );
    store.save(&first_run).await.unwrap();

    // 第二次运行追加 1 条，既有记录保持原值原序
    let second_run = ResultStore::merge(
        store.load().await.unwrap(),
        vec![sample_result("https://x.test", "in", 2, 60.0)],
    );
    store.save(&second_run).await.unwrap();

    let reloaded = store.load().await.unwrap();
    assert_eq!(reloaded.len(), 2);
    assert_eq!(reloaded[0].location, "uk");
    assert_eq!(reloaded[1].location, "in");
}

#[tokio::test]
async fn test_corrupt_dataset_never_silently_wiped() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("results.json");
    tokio::fs::write(&path, "不是合法的JSON").await.unwrap();

    let store = ResultStore::new(&path);
    assert!(store.load().await.is_err());

    // 失败路径上文件内容必须原样保留
    let content = tokio::fs::read_to_string(&path).await.unwrap();
    assert_eq!(content, "不是合法的JSON");
}

#[test]
fn test_merged_dataset_renders_expected_report() {
    // 既有 uk/95 一条，本次采集到 in/60 一条
    let existing = vec![sample_result("https://x.test", "uk", 1, 95.0)];
    let incoming = vec![sample_result("https://x.test", "in", 2, 60.0)];
    let combined = ResultStore::merge(existing, incoming);
    assert_eq!(combined.len(), 2);

    let grouped = group_results(&combined);
    assert_eq!(grouped.by_url.len(), 1);
    assert_eq!(grouped.by_url[0].results.len(), 2);
    assert!(grouped.by_url[0].results[0].timestamp <= grouped.by_url[0].results[1].timestamp);

    let tables = build_tables(&grouped, SortDirection::Ascending);
    assert_eq!(tables[0].rows[0].rating, "good");
    assert_eq!(tables[0].rows[1].rating, "needs improvement");

    let html = render_report(&chart_dataset(&grouped), &tables);
    assert!(html.contains("https://x.test"));
    assert!(html.contains("rating-good"));
    assert!(html.contains("rating-needs-improvement"));
}

#[test]
fn test_report_build_is_idempotent_for_fixed_store() {
    let combined = vec![
        sample_result("https://x.test", "uk", 1, 95.0),
        sample_result("https://x.test", "in", 2, 60.0),
        sample_result("https://y.test", "uk", 1, 40.0),
    ];

    let build = || {
        let grouped = group_results(&combined);
        render_report(
            &chart_dataset(&grouped),
            &build_tables(&grouped, SortDirection::Descending),
        )
    };

    // 同一数据集构建两次，字节级一致
    assert_eq!(build(), build());
}
