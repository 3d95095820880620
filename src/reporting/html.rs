//! # HTML Reporting Module / HTML 报告模块
//!
//! This module renders a completed run as a styled, self-contained HTML
//! file with summary statistics and a detailed results table.
//!
//! 此模块将已完成的运行渲染为带有摘要统计和详细结果表格的、
//! 自包含的样式化 HTML 文件。

use anyhow::{Context, Result};
use maud::{DOCTYPE, Markup, html};
use std::fs;
use std::path::Path;

use crate::core::models::TestResultRecord;

const STYLE: &str = "
body { font-family: sans-serif; margin: 2em; color: #222; }
h1 { font-size: 1.4em; }
.summary { display: flex; gap: 2em; margin: 1em 0; }
.summary span.count { font-size: 1.6em; display: block; }
.passed-text { color: #2e7d32; }
.failed-text { color: #c62828; }
table { border-collapse: collapse; width: 100%; }
th, td { border: 1px solid #ccc; padding: 0.4em 0.8em; text-align: left; }
th { background: #f5f5f5; }
td.status-Passed { color: #2e7d32; }
td.status-Failed { color: #c62828; }
pre.detail { background: #fafafa; padding: 0.8em; white-space: pre-wrap; }
";

/// Generates a self-contained HTML report from the records of one run.
///
/// 从一次运行的记录生成自包含的 HTML 报告。
pub fn generate_html_report(
    records: &[TestResultRecord],
    output_path: &Path,
    group: Option<&str>,
) -> Result<()> {
    let markup = render(records, group);
    fs::write(output_path, markup.into_string())
        .with_context(|| format!("Failed to write HTML report: {}", output_path.display()))?;
    Ok(())
}

fn render(records: &[TestResultRecord], group: Option<&str>) -> Markup {
    let passed = records.iter().filter(|r| r.passed).count();
    let failed = records.len() - passed;
    let title = match group {
        Some(group) => format!("PHPUnit Results ({group})"),
        None => "PHPUnit Results".to_string(),
    };

    html! {
        (DOCTYPE)
        html {
            head {
                title { (title) }
                style { (STYLE) }
            }
            body {
                h1 { (title) }
                div class="summary" {
                    div { span class="count" { (records.len()) } "Total" }
                    div { span class="count passed-text" { (passed) } "Passed" }
                    div { span class="count failed-text" { (failed) } "Failed" }
                }
                table {
                    thead {
                        tr {
                            th { "Test" }
                            th { "Status" }
                            th { "Started" }
                            th { "Duration" }
                        }
                    }
                    tbody {
                        @for record in records {
                            tr {
                                td { (record.name) }
                                @if record.passed {
                                    td class="status-Passed" { "Passed" }
                                } @else {
                                    td class="status-Failed" { "Failed" }
                                }
                                td { (record.start_time.format("%Y-%m-%d %H:%M:%S%.3f")) }
                                td { (format!("{:.2}s", record.duration().as_seconds_f64())) }
                            }
                            @if !record.passed {
                                tr {
                                    td colspan="4" {
                                        pre class="detail" { (record.detail) }
                                    }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}
