//! # Run Orchestrator Integration Tests / 运行编排器集成测试
//!
//! These tests drive `execution::execute` end to end against fake runner
//! scripts: a runner that produces a canned report, a runner that produces
//! nothing, and executables that cannot be launched at all.
//!
//! 这些测试针对假的运行器脚本端到端地驱动 `execution::execute`：
//! 产出预制报告的运行器、不产出任何内容的运行器，
//! 以及根本无法启动的可执行文件。

mod common;

use phpunit_runner::core::config::RunnerConfig;
use phpunit_runner::core::execution::execute;
use phpunit_runner::core::models::{RunError, RunOutcome, TestSelection};
use phpunit_runner::reporting::sink::MemorySink;
use std::fs;
use tempfile::tempdir;

fn xml_files_in(dir: &std::path::Path) -> usize {
    fs::read_dir(dir)
        .unwrap()
        .filter_map(Result::ok)
        .filter(|e| e.path().extension().is_some_and(|ext| ext == "xml"))
        .count()
}

#[tokio::test]
async fn test_missing_php_path_is_configuration_error() {
    let dir = tempdir().unwrap();
    let config = RunnerConfig {
        php_executable_path: "".to_string(),
        phpunit_script_path: "phpunit".to_string(),
    };
    let mut sink = MemorySink::default();

    let result = execute(
        &config,
        &TestSelection::RunAll,
        "",
        dir.path(),
        dir.path(),
        &mut sink,
    )
    .await;

    assert!(matches!(result, Err(RunError::Configuration(_))));
    assert!(sink.records.is_empty());
}

#[tokio::test]
async fn test_missing_phpunit_path_is_configuration_error() {
    let dir = tempdir().unwrap();
    let config = RunnerConfig {
        php_executable_path: "php".to_string(),
        phpunit_script_path: "   ".to_string(),
    };
    let mut sink = MemorySink::default();

    let result = execute(
        &config,
        &TestSelection::RunAll,
        "",
        dir.path(),
        dir.path(),
        &mut sink,
    )
    .await;

    assert!(matches!(result, Err(RunError::Configuration(_))));
}

#[tokio::test]
async fn test_unlaunchable_executable_is_process_launch_error() {
    let dir = tempdir().unwrap();
    let config = RunnerConfig {
        php_executable_path: "/this/executable/does/not/exist".to_string(),
        phpunit_script_path: "phpunit".to_string(),
    };
    let mut sink = MemorySink::default();

    let result = execute(
        &config,
        &TestSelection::RunAll,
        "",
        dir.path(),
        dir.path(),
        &mut sink,
    )
    .await;

    assert!(matches!(result, Err(RunError::ProcessLaunch(_))));
}

#[cfg(unix)]
#[tokio::test]
async fn test_runner_without_report_is_no_tests_executed() {
    let dir = tempdir().unwrap();
    let temp = tempdir().unwrap();
    let runner = common::silent_runner(dir.path(), 0);
    let config = common::config_for(&runner);
    let mut sink = MemorySink::default();

    let outcome = execute(
        &config,
        &TestSelection::RunAll,
        "",
        dir.path(),
        temp.path(),
        &mut sink,
    )
    .await
    .unwrap();

    // 报告缺失是可恢复的零结果完成，而不是错误
    assert!(matches!(outcome, RunOutcome::NoTestsExecuted(_)));
    assert!(sink.records.is_empty());
}

#[cfg(unix)]
#[tokio::test]
async fn test_completed_run_produces_contiguous_records() {
    let dir = tempdir().unwrap();
    let temp = tempdir().unwrap();
    let runner = common::fake_runner(dir.path(), common::SAMPLE_REPORT, 0);
    let config = common::config_for(&runner);
    let mut sink = MemorySink::default();

    let before = chrono::Utc::now();
    let outcome = execute(
        &config,
        &TestSelection::RunAll,
        "",
        dir.path(),
        temp.path(),
        &mut sink,
    )
    .await
    .unwrap();
    let after = chrono::Utc::now();

    let RunOutcome::Completed(records) = outcome else {
        panic!("Expected Completed outcome");
    };
    assert_eq!(records.len(), 3);
    assert_eq!(records[0].name, "testAddition");
    assert!(records[0].passed);
    assert_eq!(records[2].name, "testDivision");
    assert!(!records[2].passed);
    assert_eq!(
        records[2].detail,
        "failure - Type: AssertionError - Details: expected 1 got 2"
    );

    // 第一条记录锚定在运行开始时刻，相邻记录首尾相接
    assert!(records[0].start_time >= before && records[0].start_time <= after);
    assert_eq!(records[0].end_time, records[1].start_time);
    assert_eq!(records[1].end_time, records[2].start_time);

    // Sink 按顺序收到每条记录
    assert_eq!(sink.records, records);

    // 临时报告文件已被清理
    assert_eq!(xml_files_in(temp.path()), 0);
}

#[cfg(unix)]
#[tokio::test]
async fn test_nonzero_exit_code_does_not_decide_pass_fail() {
    let dir = tempdir().unwrap();
    let temp = tempdir().unwrap();
    let runner = common::fake_runner(dir.path(), common::SAMPLE_REPORT, 2);
    let config = common::config_for(&runner);
    let mut sink = MemorySink::default();

    let outcome = execute(
        &config,
        &TestSelection::RunAll,
        "",
        dir.path(),
        temp.path(),
        &mut sink,
    )
    .await
    .unwrap();

    // 退出码 2 被观察但被忽略；报告内容才是权威
    assert!(outcome.is_completed());
    assert_eq!(outcome.records().len(), 3);
}

#[cfg(unix)]
#[tokio::test]
async fn test_malformed_report_yields_error_and_zero_records() {
    let dir = tempdir().unwrap();
    let temp = tempdir().unwrap();
    let runner = common::fake_runner(dir.path(), common::MALFORMED_REPORT, 0);
    let config = common::config_for(&runner);
    let mut sink = MemorySink::default();

    let result = execute(
        &config,
        &TestSelection::RunAll,
        "",
        dir.path(),
        temp.path(),
        &mut sink,
    )
    .await;

    assert!(matches!(result, Err(RunError::ReportMalformed(_))));
    // 解析失败时不得发出部分记录
    assert!(sink.records.is_empty());
    // 即使解析失败，报告文件也会被清理
    assert_eq!(xml_files_in(temp.path()), 0);
}

#[cfg(unix)]
#[tokio::test]
async fn test_runner_receives_bare_argv_tokens() {
    // 子进程无 shell 派生，argv 原样到达运行器；带引号的标记会使
    // 脚本路径无法打开、报告写到错误命名的路径，整次运行退化为零结果
    let dir = tempdir().unwrap();
    let temp = tempdir().unwrap();
    let runner = common::argv_logging_runner(dir.path(), common::SAMPLE_REPORT);
    let config = common::config_for(&runner);
    let mut sink = MemorySink::default();

    let outcome = execute(
        &config,
        &TestSelection::SpecifyTarget("CalculatorTest".to_string()),
        "--colors=never",
        dir.path(),
        temp.path(),
        &mut sink,
    )
    .await
    .unwrap();

    assert!(outcome.is_completed());
    assert_eq!(sink.records.len(), 3);

    let argv = common::recorded_argv(dir.path());
    assert!(argv.iter().all(|arg| !arg.contains('"')));
    assert_eq!(argv[0], "phpunit");
    assert_eq!(argv[1], "--colors=never");
    assert_eq!(argv[2], "--log-junit");
    assert!(argv[3].ends_with(".xml"));
    assert_eq!(argv[4], "CalculatorTest");
    assert_eq!(argv.len(), 5);
}

#[cfg(unix)]
#[tokio::test]
async fn test_use_config_selection_sends_no_selector_argument() {
    // 回退到 phpunit.xml 取决于目标参数完全缺失；
    // 显式的空参数会被 PHPUnit 当作无法打开的测试路径
    let dir = tempdir().unwrap();
    let temp = tempdir().unwrap();
    let runner = common::argv_logging_runner(dir.path(), common::SAMPLE_REPORT);
    let config = common::config_for(&runner);
    let mut sink = MemorySink::default();

    let outcome = execute(
        &config,
        &TestSelection::UseRunnerOwnConfig,
        "",
        dir.path(),
        temp.path(),
        &mut sink,
    )
    .await
    .unwrap();

    assert!(outcome.is_completed());

    let argv = common::recorded_argv(dir.path());
    assert!(argv.iter().all(|arg| !arg.is_empty()));
    assert!(argv.last().unwrap().ends_with(".xml"));
    assert_eq!(argv.len(), 3);
}

#[cfg(unix)]
#[tokio::test]
async fn test_specify_target_selection_reaches_the_runner() {
    // 带空白的目标名称和额外参数不会妨碍一次完整的运行
    let dir = tempdir().unwrap();
    let temp = tempdir().unwrap();
    let runner = common::fake_runner(dir.path(), common::SAMPLE_REPORT, 0);
    let config = common::config_for(&runner);
    let mut sink = MemorySink::default();

    let outcome = execute(
        &config,
        &TestSelection::SpecifyTarget("  CalculatorTest ".to_string()),
        "--colors=never",
        dir.path(),
        temp.path(),
        &mut sink,
    )
    .await
    .unwrap();

    assert!(outcome.is_completed());
}
