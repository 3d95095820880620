//! # Init Command Module / 初始化命令模块
//!
//! This module implements the `init` command for the PHPUnit Runner CLI,
//! which creates a new runner settings file.
//!
//! 此模块实现了 PHPUnit Runner CLI 的 `init` 命令，
//! 用于创建新的运行器设置文件。

use anyhow::{Context, Result, bail};
use colored::*;
use dialoguer::{Confirm, Input};
use std::fs;
use std::path::Path;

use crate::core::config::RunnerConfig;

const CONFIG_FILE: &str = "Runner.toml";

/// Creates a `Runner.toml` in the current directory, either from the
/// interactive wizard or from defaults when `non_interactive` is set.
///
/// 在当前目录创建 `Runner.toml`，可以通过交互式向导，
/// 也可以在设置 `non_interactive` 时使用默认值。
pub fn run_init_wizard(non_interactive: bool) -> Result<()> {
    let path = Path::new(CONFIG_FILE);

    if path.exists() {
        if non_interactive {
            bail!("{CONFIG_FILE} already exists.");
        }
        let overwrite = Confirm::new()
            .with_prompt(format!("{CONFIG_FILE} already exists. Overwrite it?"))
            .default(false)
            .interact()?;
        if !overwrite {
            println!("{}", "Aborted.".yellow());
            return Ok(());
        }
    }

    let config = if non_interactive {
        RunnerConfig::default()
    } else {
        let php_executable_path: String = Input::new()
            .with_prompt("Path to the PHP executable")
            .default("php".to_string())
            .interact_text()?;
        let phpunit_script_path: String = Input::new()
            .with_prompt("Path to the PHPUnit script")
            .default("phpunit".to_string())
            .interact_text()?;
        RunnerConfig {
            php_executable_path,
            phpunit_script_path,
        }
    };

    let content =
        toml::to_string_pretty(&config).context("Failed to serialize the runner settings")?;
    fs::write(path, content)
        .with_context(|| format!("Failed to write {CONFIG_FILE}"))?;

    println!("{}", format!("Created {CONFIG_FILE}.").green());
    println!("Run `phpunit-runner run` to execute your tests.");
    Ok(())
}
