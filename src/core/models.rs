//! # Data Models Module / 数据模型模块
//!
//! This module defines the core data structures used throughout the runner:
//! the test selection modes, the per-test outcomes read from a JUnit report,
//! the timestamped records derived from them, and the error taxonomy.
//!
//! 此模块定义了整个运行器中使用的核心数据结构：
//! 测试选择模式、从 JUnit 报告中读取的每个测试的结果、
//! 由其派生的带时间戳的记录以及错误分类。

use chrono::{DateTime, TimeDelta, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Selects which tests a run should execute.
/// PHPUnit is told what to run through a single positional selector argument;
/// each variant maps to one selector shape.
///
/// 选择一次运行应执行哪些测试。
/// PHPUnit 通过一个位置选择器参数得知要运行什么；
/// 每个变体对应一种选择器形式。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum TestSelection {
    /// Run every test found in the source directory.
    /// 运行源目录中找到的所有测试。
    RunAll,
    /// Pass an empty selector so PHPUnit falls back to its own discovered
    /// phpunit.xml / phpunit.xml.dist configuration file.
    /// 传递空选择器，使 PHPUnit 回退到它自己发现的
    /// phpunit.xml / phpunit.xml.dist 配置文件。
    UseRunnerOwnConfig,
    /// Run a single named test class or file.
    /// 运行单个命名的测试类或文件。
    SpecifyTarget(String),
}

impl fmt::Display for TestSelection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TestSelection::RunAll => write!(f, "all tests in the source directory"),
            TestSelection::UseRunnerOwnConfig => {
                write!(f, "tests from the phpunit.xml configuration file")
            }
            TestSelection::SpecifyTarget(name) => write!(f, "test '{}'", name.trim()),
        }
    }
}

/// A single test case outcome as declared by the JUnit report.
/// The report only carries an elapsed duration per test, never an absolute
/// start instant; outcomes live just long enough to be turned into
/// [`TestResultRecord`]s.
///
/// JUnit 报告中声明的单个测试用例结果。
/// 报告每个测试只携带经过的时长，而没有绝对的开始时刻；
/// 结果的生命周期仅到被转换为 [`TestResultRecord`] 为止。
#[derive(Debug, Clone, PartialEq)]
pub struct TestOutcome {
    /// The declared name of the test case / 测试用例声明的名称
    pub name: String,
    /// `false` when the testcase node carries a failure or error child
    /// 当 testcase 节点带有 failure 或 error 子节点时为 `false`
    pub passed: bool,
    /// Failure description, empty for passing tests
    /// 失败描述，通过的测试为空
    pub detail: String,
    /// Elapsed time declared by the report, in seconds
    /// 报告声明的经过时间（秒）
    pub duration_secs: f64,
}

/// A test result with absolute timestamps, ready for the recording sink.
/// Records derived from one run partition the interval starting at the run
/// start instant into contiguous spans: each record starts exactly where the
/// previous one ended.
///
/// 带绝对时间戳的测试结果，可供记录接收器使用。
/// 同一次运行派生的记录把从运行开始时刻起的区间划分为连续的时间段：
/// 每条记录恰好从上一条结束处开始。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TestResultRecord {
    pub name: String,
    pub passed: bool,
    pub detail: String,
    pub start_time: DateTime<Utc>,
    pub end_time: DateTime<Utc>,
}

impl TestResultRecord {
    /// The span covered by this record.
    pub fn duration(&self) -> TimeDelta {
        self.end_time - self.start_time
    }
}

/// The terminal state of one orchestrated run.
/// A missing report is not an error: the run completed with zero results.
///
/// 一次编排运行的终止状态。
/// 缺少报告不是错误：该运行以零结果完成。
#[derive(Debug, Clone, PartialEq)]
pub enum RunOutcome {
    /// The report was parsed and every test case was converted to a record.
    /// 报告已解析，且每个测试用例都被转换为一条记录。
    Completed(Vec<TestResultRecord>),
    /// No report file was produced, so no tests were executed.
    /// 未生成报告文件，因此没有执行任何测试。
    NoTestsExecuted(String),
}

impl RunOutcome {
    /// The records produced by the run, empty when no tests were executed.
    /// 运行产生的记录，未执行测试时为空。
    pub fn records(&self) -> &[TestResultRecord] {
        match self {
            RunOutcome::Completed(records) => records,
            RunOutcome::NoTestsExecuted(_) => &[],
        }
    }

    pub fn is_completed(&self) -> bool {
        matches!(self, RunOutcome::Completed(_))
    }
}

/// Errors a run can fail with. None of these are retried; each aborts the
/// run on first occurrence and is surfaced to the caller as-is.
///
/// 一次运行可能失败的错误。这些错误都不会重试；
/// 每个错误在首次发生时中止运行，并原样呈现给调用者。
#[derive(Debug, Error)]
pub enum RunError {
    /// Required host-level settings are missing or unusable. Raised before
    /// any subprocess is spawned.
    /// 缺少或无法使用必需的主机级设置。在任何子进程启动之前引发。
    #[error("configuration error: {0}")]
    Configuration(String),

    /// The PHP executable could not be started at all.
    /// PHP 可执行文件根本无法启动。
    #[error("failed to launch the test runner: {0}")]
    ProcessLaunch(#[source] std::io::Error),

    /// The report file exists but is not valid JUnit XML. Distinct from the
    /// missing-report case so callers can tell "tool is broken" from
    /// "tool found nothing".
    /// 报告文件存在但不是有效的 JUnit XML。与缺少报告的情况不同，
    /// 以便调用者区分“工具坏了”和“工具什么都没找到”。
    #[error("malformed test report: {0}")]
    ReportMalformed(String),

    /// The external recording sink rejected a result.
    /// 外部记录接收器拒绝了一条结果。
    #[error("failed to record a test result")]
    Record(#[source] anyhow::Error),
}
