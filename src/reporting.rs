//! # Reporting Module / 报告模块
//!
//! This module handles what happens to test result records after a run:
//! durable recording through sinks, colorful console summaries, and
//! styled HTML reports.
//!
//! 此模块处理运行结束后测试结果记录的去向：
//! 通过接收器持久记录、彩色控制台摘要以及样式化的 HTML 报告。

pub mod console;
pub mod html;
pub mod sink;

// Re-export common reporting items
pub use console::{print_failure_details, print_summary};
pub use html::generate_html_report;
pub use sink::ResultSink;
