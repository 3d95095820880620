//! # Command Execution Module / 命令执行模块
//!
//! Subprocess spawning with combined stdout/stderr capture. The runner is
//! awaited to completion here; nothing downstream starts until the child
//! has fully exited.
//!
//! 带合并 stdout/stderr 捕获的子进程派生。运行器在此被等待至完成；
//! 在子进程完全退出之前，下游不会开始任何工作。

use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::process::{ChildStderr, ChildStdout};

/// Spawns a command, waits for it to exit and captures its combined output.
///
/// # Returns
/// A tuple containing:
/// - The `ExitStatus` of the process wrapped in an `io::Result`; the `Err`
///   case means the process could not be started at all.
/// - The captured stdout followed by stderr as a single `String`.
///
/// 派生一个命令，等待其退出并捕获合并后的输出。
///
/// # Returns
/// 一个元组，包含：
/// - 进程的 `ExitStatus`（包装在 `io::Result` 中）；`Err`
///   表示进程根本无法启动。
/// - 捕获的 stdout 和随后的 stderr，合并为一个 `String`。
pub async fn run_and_capture(
    mut cmd: tokio::process::Command,
) -> (std::io::Result<std::process::ExitStatus>, String) {
    let mut child = match cmd
        .stdout(std::process::Stdio::piped())
        .stderr(std::process::Stdio::piped())
        .spawn()
    {
        Ok(child) => child,
        Err(e) => {
            return (Err(e), String::new());
        }
    };

    let stdout = child.stdout.take();
    let stderr = child.stderr.take();

    // Drain both pipes concurrently so a chatty runner cannot dead-lock
    // against a full pipe buffer while we wait on it.
    // 并发读取两个管道，以免多话的运行器在我们等待时因管道缓冲区
    // 写满而死锁。
    let stdout_handle = tokio::spawn(read_stdout(stdout));
    let stderr_handle = tokio::spawn(read_stderr(stderr));

    let status = child.wait().await;

    let mut output = String::new();
    match stdout_handle.await {
        Ok(text) => output.push_str(&text),
        Err(e) => eprintln!("Failed to join stdout task: {}", e),
    }
    match stderr_handle.await {
        Ok(text) => output.push_str(&text),
        Err(e) => eprintln!("Failed to join stderr task: {}", e),
    }

    (status, output)
}

async fn read_stdout(stream: Option<ChildStdout>) -> String {
    match stream {
        Some(stream) => read_lines(BufReader::new(stream)).await,
        None => String::new(),
    }
}

async fn read_stderr(stream: Option<ChildStderr>) -> String {
    match stream {
        Some(stream) => read_lines(BufReader::new(stream)).await,
        None => String::new(),
    }
}

async fn read_lines<R>(reader: BufReader<R>) -> String
where
    R: tokio::io::AsyncRead + Unpin,
{
    let mut text = String::new();
    let mut lines = reader.lines();
    while let Ok(Some(line)) = lines.next_line().await {
        text.push_str(&line);
        text.push('\n');
    }
    text
}
