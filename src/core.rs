//! # Core Module / 核心模块
//!
//! This module contains the core functionality of PHPUnit Runner,
//! including data models, configuration, invocation planning, report
//! parsing and the run orchestrator.
//!
//! 此模块包含 PHPUnit Runner 的核心功能，
//! 包括数据模型、配置、调用计划、报告解析和运行编排器。

pub mod models;
pub mod config;
pub mod planner;
pub mod report;
pub mod execution;

// Re-exports
pub use models::{RunError, RunOutcome, TestSelection};
pub use config::RunnerConfig;
pub use execution::execute;
