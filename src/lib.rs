//! # PHPUnit Runner Library / PHPUnit Runner 库
//!
//! This library provides the core functionality for the PHPUnit Runner tool,
//! an orchestrator that runs PHPUnit test suites as subprocesses and ingests
//! their JUnit XML reports into ordered, timestamped test results.
//!
//! 此库为 PHPUnit Runner 工具提供核心功能，
//! 这是一个将 PHPUnit 测试套件作为子进程运行、并把其 JUnit XML
//! 报告转换为有序且带时间戳的测试结果的编排器。
//!
//! ## Modules / 模块
//!
//! - `core` - Data models, invocation planning, report parsing and the run orchestrator
//! - `infra` - Infrastructure services like subprocess capture and report file handling
//! - `reporting` - Result sinks, console summaries and HTML reports
//! - `cli` - Command-line interface and commands
//!
//! - `core` - 数据模型、调用计划、报告解析和运行编排器
//! - `infra` - 基础设施服务，如子进程捕获和报告文件处理
//! - `reporting` - 结果接收器、控制台摘要和 HTML 报告
//! - `cli` - 命令行接口和命令

pub mod core;
pub mod infra;
pub mod reporting;
pub mod cli;

// Re-export commonly used items
pub use crate::core::models;
pub use crate::core::config;
pub use crate::core::execution;
