//! # Result Sink Module / 结果接收模块
//!
//! The outward-facing recording boundary. The orchestrator hands every
//! result record to a [`ResultSink`] in sequence order; what durable form
//! the records take is the sink's concern, not the orchestrator's.
//!
//! 面向外部的记录边界。编排器按顺序把每条结果记录交给
//! [`ResultSink`]；记录采用何种持久形式是接收器的事，而非编排器的。

use crate::core::models::TestResultRecord;
use anyhow::{Context, Result};
use std::fs::File;
use std::io::Write;
use std::path::Path;

/// Receives test result records one at a time, in run order.
/// 按运行顺序逐条接收测试结果记录。
pub trait ResultSink {
    fn record(&mut self, record: &TestResultRecord) -> Result<()>;
}

/// Writes each record as one JSON object per line.
/// 将每条记录写为一行一个 JSON 对象。
pub struct JsonLinesSink {
    file: File,
}

impl JsonLinesSink {
    pub fn create(path: &Path) -> Result<Self> {
        let file = File::create(path)
            .with_context(|| format!("Failed to create result file: {}", path.display()))?;
        Ok(Self { file })
    }
}

impl ResultSink for JsonLinesSink {
    fn record(&mut self, record: &TestResultRecord) -> Result<()> {
        let line = serde_json::to_string(record).context("Failed to serialize test result")?;
        writeln!(self.file, "{line}").context("Failed to write test result")?;
        Ok(())
    }
}

/// Collects records in memory. Used where no durable sink is wanted and
/// throughout the test suite.
/// 在内存中收集记录。用于不需要持久接收器的场合以及整个测试套件。
#[derive(Debug, Default)]
pub struct MemorySink {
    pub records: Vec<TestResultRecord>,
}

impl ResultSink for MemorySink {
    fn record(&mut self, record: &TestResultRecord) -> Result<()> {
        self.records.push(record.clone());
        Ok(())
    }
}
