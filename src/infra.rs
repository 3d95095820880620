//! # Infrastructure Module / 基础设施模块
//!
//! This module provides infrastructure services for PHPUnit Runner,
//! including subprocess execution with output capture and temporary
//! report file handling.
//!
//! 此模块为 PHPUnit Runner 提供基础设施服务，
//! 包括带输出捕获的子进程执行和临时报告文件处理。

pub mod command;
pub mod fs;
