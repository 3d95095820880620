//! # Console Reporting Module / 控制台报告模块
//!
//! This module prints colorful, formatted summaries of a completed run to
//! the console.
//!
//! 此模块在控制台打印已完成运行的彩色格式化摘要。

use crate::core::models::TestResultRecord;
use colored::*;

/// Prints a formatted summary of test result records to the console.
///
/// 在控制台打印测试结果记录的格式化摘要。
///
/// # Output Format / 输出格式
/// ```text
/// --- Test Summary (nightly) ---
///   - Passed | testAddition                             |     1.50s
///   - Failed | testDivisionByZero                       |     0.45s
///
/// 2 tests, 1 passed, 1 failed in 1.95s
/// ```
pub fn print_summary(records: &[TestResultRecord], group: Option<&str>) {
    let banner = match group {
        Some(group) => format!("--- Test Summary ({group}) ---"),
        None => "--- Test Summary ---".to_string(),
    };
    println!("\n{}", banner.bold());

    for record in records {
        let status = if record.passed {
            "Passed".green()
        } else {
            "Failed".red()
        };
        let duration = record.duration().as_seconds_f64();
        println!("  - {:<6} | {:<40} | {:>8.2}s", status, record.name, duration);
    }

    let passed = records.iter().filter(|r| r.passed).count();
    let failed = records.len() - passed;
    let total_secs: f64 = records.iter().map(|r| r.duration().as_seconds_f64()).sum();
    println!(
        "\n{} tests, {} passed, {} failed in {:.2}s",
        records.len(),
        passed,
        failed,
        total_secs
    );
}

/// Prints the failure detail text for every failed record, with separator
/// lines for readability.
///
/// 打印每条失败记录的失败详情文本，并用分隔线提高可读性。
pub fn print_failure_details(records: &[TestResultRecord]) {
    let failures: Vec<_> = records.iter().filter(|r| !r.passed).collect();
    if failures.is_empty() {
        return;
    }

    println!("\n{}", "--- Failure Details ---".red().bold());
    println!("{}", "-".repeat(80));

    for (i, record) in failures.iter().enumerate() {
        println!(
            "[{}/{}] {} '{}'",
            i + 1,
            failures.len(),
            "Failed:".red(),
            record.name.cyan()
        );
        println!("\n{}\n", record.detail);
        println!("{}", "-".repeat(80));
    }
}
