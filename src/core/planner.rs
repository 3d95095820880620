//! # Invocation Planner Module / 调用计划模块
//!
//! This module turns a test selection and the configured runner paths into a
//! concrete PHPUnit command line. All functions here are pure mappings with
//! no side effects; nothing is validated beyond trimming, and a malformed
//! target name is only ever surfaced later by the runner itself.
//!
//! 此模块将测试选择和已配置的运行器路径转换为具体的 PHPUnit 命令行。
//! 这里的所有函数都是无副作用的纯映射；除修剪空白外不做任何校验，
//! 格式错误的目标名称只会在之后由运行器本身报告。

use crate::core::config::RunnerConfig;
use crate::core::models::{RunError, TestSelection};
use std::path::{Path, PathBuf};

/// A fully resolved PHPUnit invocation: the executable, its ordered argument
/// list and the working directory to run it in.
///
/// 一次完全解析的 PHPUnit 调用：可执行文件、有序参数列表以及运行时的工作目录。
#[derive(Debug, Clone, PartialEq)]
pub struct InvocationSpec {
    pub executable: String,
    /// Argument order is fixed: runner script, extra arguments, the
    /// `--log-junit` flag and report path, then the target selector.
    /// PHPUnit is positional and flag sensitive. Elements are bare tokens:
    /// the process is spawned without a shell, so argv preserves embedded
    /// spaces by itself and any quote character would reach the runner
    /// verbatim.
    /// 参数顺序是固定的：运行器脚本、额外参数、`--log-junit`
    /// 标志与报告路径、最后是目标选择器。PHPUnit 对位置和标志敏感。
    /// 元素是不带引号的标记：进程在无 shell 的情况下派生，
    /// argv 本身就能保留内嵌空格，任何引号字符都会原样到达运行器。
    pub args: Vec<String>,
    pub working_dir: PathBuf,
}

impl InvocationSpec {
    /// Renders the invocation as a single shell-style line for logging,
    /// quoting the tokens that carry embedded whitespace. Only this rendered
    /// string is ever quoted; the spawn argv stays bare.
    ///
    /// 将调用渲染为单行 shell 风格的文本用于日志输出，
    /// 为带内嵌空格的标记加引号。只有这个渲染出的字符串会加引号；
    /// 派生进程的 argv 保持不带引号。
    pub fn command_line(&self) -> String {
        std::iter::once(self.executable.as_str())
            .chain(self.args.iter().map(String::as_str))
            .map(|token| {
                if token.chars().any(char::is_whitespace) {
                    quote_path(token)
                } else {
                    token.to_string()
                }
            })
            .collect::<Vec<_>>()
            .join(" ")
    }
}

/// Maps a test selection to the PHPUnit target selector value.
/// An empty selector is a contract of the wrapped tool: it makes PHPUnit
/// fall back to its own discovered configuration file.
///
/// 将测试选择映射为 PHPUnit 目标选择器的值。
/// 空选择器是被包装工具的契约：它使 PHPUnit 回退到自己发现的配置文件。
pub fn resolve_selector(selection: &TestSelection) -> String {
    match selection {
        TestSelection::RunAll => ".".to_string(),
        TestSelection::UseRunnerOwnConfig => String::new(),
        TestSelection::SpecifyTarget(name) => name.trim().to_string(),
    }
}

/// Wraps a path in double quotes so embedded spaces survive in the rendered
/// command line, stripping any pre-existing double quotes first. Idempotent
/// on already-quoted input; an empty path becomes an empty token rather than
/// a pair of bare quotes. Display-only: see [`bare_token`] for spawn argv.
///
/// 用双引号包裹路径，使内嵌空格在渲染的命令行中得以保留，
/// 并先去除已有的双引号。对已加引号的输入是幂等的；
/// 空路径会成为空标记，而不是一对空引号。仅用于展示：
/// 派生进程的 argv 见 [`bare_token`]。
pub fn quote_path(path: &str) -> String {
    if path.is_empty() {
        return String::new();
    }
    format!("\"{}\"", path.trim().replace('"', ""))
}

/// Normalizes a path into a spawn argv element: trimmed, with stray double
/// quotes stripped. Quoting is never applied here; argv elements are passed
/// to the runner exactly as stored.
///
/// 将路径规范化为派生进程的 argv 元素：修剪空白并去除多余的双引号。
/// 这里绝不加引号；argv 元素会原样传递给运行器。
pub fn bare_token(path: &str) -> String {
    path.trim().replace('"', "")
}

/// Builds the complete invocation for one run.
///
/// The extra-arguments string is split into tokens shell-style and passed
/// through verbatim; the caller is trusted to supply a well-formed string.
///
/// 为一次运行构建完整的调用。
/// 额外参数字符串按 shell 风格拆分为标记并原样传递；
/// 调用者需自行保证该字符串格式良好。
pub fn plan_invocation(
    config: &RunnerConfig,
    selection: &TestSelection,
    extra_args: &str,
    source_dir: &Path,
    report_path: &Path,
) -> Result<InvocationSpec, RunError> {
    let mut args = Vec::new();
    args.push(bare_token(&config.phpunit_script_path));

    if !extra_args.trim().is_empty() {
        let tokens = shlex::split(extra_args).ok_or_else(|| {
            RunError::Configuration(format!(
                "the additional arguments are not a valid command line: {extra_args}"
            ))
        })?;
        args.extend(tokens);
    }

    args.push("--log-junit".to_string());
    args.push(bare_token(&report_path.to_string_lossy()));

    // An empty selector must yield no argument at all: PHPUnit only falls
    // back to its own configuration file when the target is absent, and
    // treats an explicit empty argument as an unopenable test path.
    // 空选择器必须不产生任何参数：只有在目标缺失时 PHPUnit
    // 才会回退到它自己的配置文件，而显式的空参数会被当作
    // 无法打开的测试路径。
    let selector = resolve_selector(selection);
    if !selector.is_empty() {
        args.push(selector);
    }

    Ok(InvocationSpec {
        executable: config.php_executable_path.clone(),
        args,
        working_dir: source_dir.to_path_buf(),
    })
}
