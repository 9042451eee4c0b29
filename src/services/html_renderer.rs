//! HTML 渲染 - 业务能力层
//!
//! 从 (图表数据, 表格数据) 到静态 HTML 文档的纯函数，
//! 无任何隐藏状态，可独立于聚合逻辑测试

use super::report_builder::{ChartSeries, UrlTable};
use serde_json::{json, Value};

/// 评分轴的建议下限（非硬性范围，越界点仍会绘制）
const SCORE_AXIS_SUGGESTED_MIN: u32 = 70;
/// 评分轴的建议上限
const SCORE_AXIS_SUGGESTED_MAX: u32 = 100;

/// 渲染完整报表文档
pub fn render_report(chart: &[ChartSeries], tables: &[UrlTable]) -> String {
    let mut html = String::new();

    html.push_str(&render_head());
    html.push_str("<body>\n<main>\n");
    html.push_str("<h1>Page Speed Monitor</h1>\n");
    html.push_str(&render_chart_section(chart));
    for table in tables {
        html.push_str(&render_url_table(table));
    }
    html.push_str("</main>\n</body>\n</html>\n");

    html
}

fn render_head() -> String {
    r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="UTF-8">
<meta name="viewport" content="width=device-width, initial-scale=1.0">
<title>Page Speed Monitor</title>
<script src="https://cdn.jsdelivr.net/npm/chart.js@4.4.1/dist/chart.umd.min.js"></script>
<script src="https://cdn.jsdelivr.net/npm/chartjs-adapter-date-fns@3.0.0/dist/chartjs-adapter-date-fns.bundle.min.js"></script>
<style>
body { font-family: -apple-system, "Segoe UI", sans-serif; margin: 0; background: #f6f7f9; color: #1f2933; }
main { max-width: 960px; margin: 0 auto; padding: 24px; }
h1 { font-size: 1.6em; }
h2 { font-size: 1.2em; margin-top: 2em; word-break: break-all; }
.chart-wrap { background: #fff; border-radius: 8px; padding: 16px; }
table { width: 100%; border-collapse: collapse; background: #fff; border-radius: 8px; }
th, td { padding: 8px 12px; text-align: left; border-bottom: 1px solid #e4e7eb; }
th { background: #f0f2f5; }
.rating-good { color: #0a8a0a; }
.rating-needs-improvement { color: #c47f00; }
.rating-poor { color: #c0231c; }
</style>
</head>
"#
    .to_string()
}

fn render_chart_section(chart: &[ChartSeries]) -> String {
    format!(
        "<div class=\"chart-wrap\">\n<canvas id=\"performance-chart\"></canvas>\n</div>\n\
         <script>\nnew Chart(document.getElementById('performance-chart'), {});\n</script>\n",
        chart_config(chart)
    )
}

/// 构建 Chart.js 配置
///
/// 折线图，x 轴为时间，y 轴为评分（建议范围 70-100，越界点仍绘制）
fn chart_config(chart: &[ChartSeries]) -> Value {
    let datasets: Vec<Value> = chart
        .iter()
        .map(|series| {
            json!({
                "label": series.label,
                "borderColor": series.color,
                "backgroundColor": series.color,
                "fill": false,
                "tension": 0.2,
                "data": series
                    .points
                    .iter()
                    .map(|p| json!({"x": p.x.to_rfc3339(), "y": p.y}))
                    .collect::<Vec<Value>>(),
            })
        })
        .collect();

    json!({
        "type": "line",
        "data": { "datasets": datasets },
        "options": {
            "responsive": true,
            "scales": {
                "x": { "type": "time" },
                "y": {
                    "suggestedMin": SCORE_AXIS_SUGGESTED_MIN,
                    "suggestedMax": SCORE_AXIS_SUGGESTED_MAX,
                    "title": { "display": true, "text": "Performance Score" }
                }
            }
        }
    })
}

fn render_url_table(table: &UrlTable) -> String {
    let mut html = String::new();

    html.push_str(&format!("<h2>{}</h2>\n", escape_html(&table.url)));
    html.push_str("<table>\n<thead>\n<tr><th>Date</th><th>Location</th><th>Score</th><th>LCP</th><th>FCP</th><th>CLS</th></tr>\n</thead>\n<tbody>\n");

    for row in &table.rows {
        html.push_str(&format!(
            "<tr><td>{}</td><td>{}</td><td class=\"rating-{}\">{:.0}</td><td>{:.2}</td><td>{:.2}</td><td>{:.3}</td></tr>\n",
            row.timestamp.format("%Y-%m-%d %H:%M:%S"),
            escape_html(&row.location),
            rating_class(row.rating),
            row.score,
            row.lcp,
            row.fcp,
            row.cls,
        ));
    }

    html.push_str("</tbody>\n</table>\n");
    html
}

/// 把分类文本转为 CSS 类名后缀
fn rating_class(rating: &str) -> String {
    rating.replace(' ', "-")
}

/// 最小化的 HTML 转义，覆盖插入文档的外部字符串
fn escape_html(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::report_builder::{
        build_tables, chart_dataset, group_results, SortDirection,
    };
    use crate::models::TestResult;
    use chrono::{TimeZone, Utc};

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

    fn render_sample() -> String {
        let results = vec![
            sample_result("https://x.test", "uk", 1, 95.0),
            sample_result("https://x.test", "in", 2, 60.0),
        ];
        let grouped = group_results(&results);
        render_report(
            &chart_dataset(&grouped),
            &build_tables(&grouped, SortDirection::Ascending),
        )
    }

    #[test]
    fn test_report_embeds_chart_with_suggested_scale() {
        let html = render_sample();

        assert!(html.contains("performance-chart"));
        assert!(html.contains("\"suggestedMin\":70"));
        assert!(html.contains("\"suggestedMax\":100"));
        assert!(html.contains("https://x.test (uk)"));
    }

    #[test]
    fn test_report_contains_table_rows() {
        let html = render_sample();

        assert!(html.contains("<th>Date</th><th>Location</th><th>Score</th><th>LCP</th><th>FCP</th><th>CLS</th>"));
        assert!(html.contains("2024-01-01 00:00:00"));
        assert!(html.contains("rating-good"));
        assert!(html.contains("rating-needs-improvement"));
    }

    #[test]
    fn test_render_is_pure() {
        assert_eq!(render_sample(), render_sample());
    }

    #[test]
    fn test_escape_html() {
        assert_eq!(
            escape_html(r#"https://x.test/?a=1&b=<c>"#),
            "https://x.test/?a=1&amp;b=&lt;c&gt;"
        );
    }
}
