use crate::core::models::RunError;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// The runner settings supplied by the host environment, loaded from a TOML
/// file. Both paths are required to be non-empty before a run may start.
/// 由宿主环境提供的运行器设置，从 TOML 文件加载。
/// 两个路径都必须非空，运行才能开始。
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunnerConfig {
    /// Path to the PHP executable used to launch PHPUnit.
    /// 用于启动 PHPUnit 的 PHP 可执行文件的路径。
    pub php_executable_path: String,
    /// Path to the PHPUnit script handed to PHP as its first argument.
    /// 作为第一个参数交给 PHP 的 PHPUnit 脚本的路径。
    pub phpunit_script_path: String,
}

impl Default for RunnerConfig {
    fn default() -> Self {
        Self {
            php_executable_path: "php".to_string(),
            phpunit_script_path: "phpunit".to_string(),
        }
    }
}

impl RunnerConfig {
    /// Loads the runner settings from a TOML file, expanding `~` and
    /// environment variables in both paths.
    ///
    /// 从 TOML 文件加载运行器设置，并展开两个路径中的 `~` 和环境变量。
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read runner config: {}", path.display()))?;

        let mut config: RunnerConfig = toml::from_str(&content)
            .with_context(|| format!("Failed to parse runner config: {}", path.display()))?;

        config.php_executable_path = expand(&config.php_executable_path)?;
        config.phpunit_script_path = expand(&config.phpunit_script_path)?;
        Ok(config)
    }

    /// Checks the non-empty preconditions on both configured paths.
    /// A violation is fatal and means the host setup is incomplete, not a
    /// transient condition.
    ///
    /// 检查两个已配置路径的非空先决条件。
    /// 违反该条件是致命的，意味着宿主设置不完整，而非瞬时状况。
    pub fn validate(&self) -> Result<(), RunError> {
        if self.php_executable_path.trim().is_empty() {
            return Err(RunError::Configuration(
                "the PHP executable path is not set".to_string(),
            ));
        }
        if self.phpunit_script_path.trim().is_empty() {
            return Err(RunError::Configuration(
                "the PHPUnit script path is not set".to_string(),
            ));
        }
        Ok(())
    }
}

fn expand(path: &str) -> Result<String> {
    let expanded = shellexpand::full(path)
        .with_context(|| format!("Failed to expand configured path: {path}"))?;
    Ok(expanded.into_owned())
}
