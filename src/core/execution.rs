//! # Run Orchestrator Module / 运行编排模块
//!
//! This module drives one complete PHPUnit run: it plans the invocation,
//! executes the runner as a subprocess, locates the JUnit report and converts
//! the parsed outcomes into timestamped result records. One subprocess per
//! call, awaited to completion before parsing begins; no state is shared
//! between calls.
//!
//! 此模块驱动一次完整的 PHPUnit 运行：计划调用、将运行器作为子进程执行、
//! 定位 JUnit 报告，并把解析出的结果转换为带时间戳的结果记录。
//! 每次调用一个子进程，在解析开始前等待其完成；调用之间不共享任何状态。

use chrono::{DateTime, TimeDelta, Utc};
use colored::*;
use std::path::Path;
use std::time::Duration;

use crate::{
    core::{
        config::RunnerConfig,
        models::{RunError, RunOutcome, TestOutcome, TestResultRecord, TestSelection},
        planner,
        report::ReportCases,
    },
    infra::{command, fs::ReportFile},
    reporting::sink::ResultSink,
};

/// The warning logged when the runner exits without writing a report.
/// 运行器退出而未写入报告时记录的警告。
const NO_REPORT_REASON: &str = "PHPUnit did not generate an output XML file, therefore no tests \
     were run. This can be caused if there are no test cases in the source directory, or the \
     test file names do not end with \"Test\" (case-sensitive).";

/// Runs PHPUnit once and converts its report into result records.
///
/// The subprocess exit code is observed but never decides pass/fail; the
/// report content is authoritative, since PHPUnit may exit non-zero for
/// reasons unrelated to individual test outcomes. Every produced record is
/// handed to `sink` in sequence order. The temporary report file is removed
/// on all exit paths, including parse failure.
///
/// 运行一次 PHPUnit 并将其报告转换为结果记录。
/// 子进程退出码会被观察但绝不决定成败；报告内容才是权威，
/// 因为 PHPUnit 可能因与具体测试结果无关的原因以非零码退出。
/// 每条生成的记录都按顺序交给 `sink`。临时报告文件在所有退出路径上
/// 都会被删除，包括解析失败时。
pub async fn execute(
    config: &RunnerConfig,
    selection: &TestSelection,
    extra_args: &str,
    source_dir: &Path,
    temp_dir: &Path,
    sink: &mut dyn ResultSink,
) -> Result<RunOutcome, RunError> {
    config.validate()?;

    let report = ReportFile::unique_in(temp_dir)
        .map_err(|e| RunError::Configuration(format!("{e:#}")))?;
    let spec = planner::plan_invocation(config, selection, extra_args, source_dir, report.path())?;

    let run_start = Utc::now();

    println!("{}", format!("Running: {}", spec.command_line()).dimmed());

    let mut cmd = tokio::process::Command::new(&spec.executable);
    cmd.args(&spec.args)
        .kill_on_drop(true)
        .current_dir(&spec.working_dir);

    let (status_res, output) = command::run_and_capture(cmd).await;
    let status = status_res.map_err(RunError::ProcessLaunch)?;

    if !output.trim().is_empty() {
        println!("{}", output.trim());
    }
    if let Some(code) = status.code()
        && code != 0
    {
        // Diagnostic only; the report content stays authoritative.
        println!("{}", format!("PHPUnit exited with code {code}.").dimmed());
    }

    if !report.exists() {
        println!("{}", NO_REPORT_REASON.yellow());
        return Ok(RunOutcome::NoTestsExecuted(NO_REPORT_REASON.to_string()));
    }

    // All outcomes are collected before any record is emitted, so a parse
    // failure yields zero records rather than a truncated timeline.
    // 在发出任何记录之前先收集全部结果，这样解析失败产生零条记录，
    // 而不是被截断的时间线。
    let outcomes = ReportCases::open(report.path())?.collect::<Result<Vec<_>, _>>()?;

    let records = timeline(run_start, outcomes)?;
    for record in &records {
        sink.record(record).map_err(RunError::Record)?;
    }

    Ok(RunOutcome::Completed(records))
}

/// Reconstructs absolute per-test timestamps from the duration-only outcomes
/// by accumulating elapsed time from the run start instant: each record
/// starts where the previous one ended, and the first starts at `run_start`.
/// This is the only timestamp information available; the report format
/// records elapsed durations, not wall-clock instants.
///
/// 通过从运行开始时刻累加经过时间，从仅含时长的结果中重建每个测试的
/// 绝对时间戳：每条记录从上一条结束处开始，第一条从 `run_start` 开始。
/// 这是唯一可用的时间戳信息；报告格式记录的是经过的时长，而非墙钟时刻。
pub fn timeline(
    run_start: DateTime<Utc>,
    outcomes: Vec<TestOutcome>,
) -> Result<Vec<TestResultRecord>, RunError> {
    let mut records = Vec::with_capacity(outcomes.len());
    let mut cursor = run_start;

    for outcome in outcomes {
        let end = Duration::try_from_secs_f64(outcome.duration_secs)
            .ok()
            .and_then(|d| TimeDelta::from_std(d).ok())
            .and_then(|delta| cursor.checked_add_signed(delta))
            .ok_or_else(|| {
                RunError::ReportMalformed(format!(
                    "testcase '{}' has an unrepresentable duration of {} seconds",
                    outcome.name, outcome.duration_secs
                ))
            })?;

        records.push(TestResultRecord {
            name: outcome.name,
            passed: outcome.passed,
            detail: outcome.detail,
            start_time: cursor,
            end_time: end,
        });
        cursor = end;
    }

    Ok(records)
}
