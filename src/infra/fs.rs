//! # File System Operations Module / 文件系统操作模块
//!
//! Temporary report file handling. Each run owns a fresh, collision-free
//! report path and is responsible for removing the file on every exit path,
//! including parse failures.
//!
//! 临时报告文件处理。每次运行都拥有一个全新的、无冲突的报告路径，
//! 并负责在所有退出路径上删除该文件，包括解析失败时。

use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};

/// The temporary report path owned by a single run. PHPUnit writes the file;
/// the guard deletes whatever is left at the path when dropped.
///
/// 单次运行所拥有的临时报告路径。PHPUnit 写入该文件；
/// guard 在被丢弃时删除该路径上遗留的任何内容。
#[derive(Debug)]
pub struct ReportFile {
    path: PathBuf,
}

impl ReportFile {
    /// Reserves a unique `.xml` path inside `temp_dir`. The placeholder file
    /// is removed immediately so a runner that produces no report leaves the
    /// path absent, which is how "no tests executed" is detected.
    ///
    /// 在 `temp_dir` 内保留一个唯一的 `.xml` 路径。占位文件会被立即删除，
    /// 这样不产生报告的运行器会使该路径保持缺失状态，
    /// 这正是检测“未执行任何测试”的方式。
    pub fn unique_in(temp_dir: &Path) -> Result<Self> {
        let placeholder = tempfile::Builder::new()
            .prefix("phpunit-report-")
            .suffix(".xml")
            .tempfile_in(temp_dir)
            .with_context(|| {
                format!(
                    "Failed to reserve a report path in {}",
                    temp_dir.display()
                )
            })?;
        let path = placeholder.path().to_path_buf();
        placeholder
            .close()
            .context("Failed to remove the report path placeholder")?;
        Ok(Self { path })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn exists(&self) -> bool {
        self.path.exists()
    }
}

impl Drop for ReportFile {
    fn drop(&mut self) {
        let _ = fs::remove_file(&self.path);
    }
}
