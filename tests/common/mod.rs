// Shared test helpers for integration tests
#![allow(dead_code)]

use phpunit_runner::core::config::RunnerConfig;
use std::fs;
use std::path::{Path, PathBuf};

/// A small passing/failing report used by the end-to-end scenarios.
pub const SAMPLE_REPORT: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<testsuites>
  <testsuite name="CalculatorTest" tests="3" failures="1" time="3.75">
    <testcase name="testAddition" time="1.5"/>
    <testcase name="testNothing" time="0.0"/>
    <testcase name="testDivision" time="2.25">
      <failure type="AssertionError">expected 1 got 2</failure>
    </testcase>
  </testsuite>
</testsuites>
"#;

/// A report whose second testcase is missing its time attribute.
pub const MALFORMED_REPORT: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<testsuites>
  <testsuite name="BrokenTest" tests="2">
    <testcase name="testOk" time="0.5"/>
    <testcase name="testNoTime">
      <failure type="AssertionError">missing time</failure>
    </testcase>
  </testsuite>
</testsuites>
"#;

/// Writes a fake PHPUnit runner script into `dir` that copies the given
/// report XML to the `--log-junit` destination and exits with `exit_code`.
/// The script uses its argv verbatim, the way any exec'd program does.
///
/// 在 `dir` 中写入一个假的 PHPUnit 运行器脚本，它把给定的报告 XML
/// 复制到 `--log-junit` 目标并以 `exit_code` 退出。
/// 该脚本像任何被 exec 的程序一样原样使用自己的 argv。
#[cfg(unix)]
pub fn fake_runner(dir: &Path, report_xml: &str, exit_code: i32) -> PathBuf {
    let script_path = dir.join("fake-phpunit.sh");
    let report_path = dir.join("canned-report.xml");
    fs::write(&report_path, report_xml).expect("Failed to write canned report");

    let script = format!(
        r#"#!/bin/sh
report=""
prev=""
for arg in "$@"; do
  if [ "$prev" = "--log-junit" ]; then
    report="$arg"
  fi
  prev="$arg"
done
if [ -n "$report" ]; then
  cp "{}" "$report"
fi
exit {}
"#,
        report_path.display(),
        exit_code
    );
    fs::write(&script_path, script).expect("Failed to write fake runner script");
    make_executable(&script_path);
    script_path
}

/// Like [`fake_runner`], but additionally records every argv element the
/// script received, one per line, into `argv.txt` next to the script.
///
/// 与 [`fake_runner`] 类似，但还会把脚本收到的每个 argv 元素
/// 按行记录到脚本旁的 `argv.txt` 中。
#[cfg(unix)]
pub fn argv_logging_runner(dir: &Path, report_xml: &str) -> PathBuf {
    let script_path = dir.join("argv-phpunit.sh");
    let report_path = dir.join("canned-report.xml");
    let argv_path = dir.join("argv.txt");
    fs::write(&report_path, report_xml).expect("Failed to write canned report");

    let script = format!(
        r#"#!/bin/sh
: > "{argv}"
report=""
prev=""
for arg in "$@"; do
  printf '%s\n' "$arg" >> "{argv}"
  if [ "$prev" = "--log-junit" ]; then
    report="$arg"
  fi
  prev="$arg"
done
if [ -n "$report" ]; then
  cp "{canned}" "$report"
fi
exit 0
"#,
        argv = argv_path.display(),
        canned = report_path.display(),
    );
    fs::write(&script_path, script).expect("Failed to write argv logging script");
    make_executable(&script_path);
    script_path
}

/// The argv elements recorded by [`argv_logging_runner`].
#[cfg(unix)]
pub fn recorded_argv(dir: &Path) -> Vec<String> {
    fs::read_to_string(dir.join("argv.txt"))
        .expect("Failed to read recorded argv")
        .lines()
        .map(str::to_string)
        .collect()
}

/// Writes a fake runner that never produces a report file.
#[cfg(unix)]
pub fn silent_runner(dir: &Path, exit_code: i32) -> PathBuf {
    let script_path = dir.join("silent-phpunit.sh");
    fs::write(&script_path, format!("#!/bin/sh\nexit {exit_code}\n"))
        .expect("Failed to write silent runner script");
    make_executable(&script_path);
    script_path
}

#[cfg(unix)]
fn make_executable(path: &Path) {
    use std::os::unix::fs::PermissionsExt;
    let mut perms = fs::metadata(path)
        .expect("Failed to stat script")
        .permissions();
    perms.set_mode(0o755);
    fs::set_permissions(path, perms).expect("Failed to mark script executable");
}

/// Settings that launch the given script directly as the "PHP executable".
pub fn config_for(runner_script: &Path) -> RunnerConfig {
    RunnerConfig {
        php_executable_path: runner_script.display().to_string(),
        phpunit_script_path: "phpunit".to_string(),
    }
}
