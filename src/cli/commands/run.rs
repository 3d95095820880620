// src/cli/commands/run.rs

use anyhow::{Context, Result};
use colored::*;
use std::{env, fs, path::PathBuf};

use crate::{
    core::{
        config::RunnerConfig,
        execution,
        models::{RunOutcome, TestSelection},
    },
    reporting::{
        html::generate_html_report,
        console::{print_failure_details, print_summary},
        sink::{JsonLinesSink, MemorySink, ResultSink},
    },
};

#[allow(clippy::too_many_arguments)]
pub async fn execute(
    config: PathBuf,
    source_dir: PathBuf,
    temp_dir: Option<PathBuf>,
    selection: TestSelection,
    extra_args: String,
    group: Option<String>,
    json: Option<PathBuf>,
    html: Option<PathBuf>,
) -> Result<()> {
    let config = RunnerConfig::load(&config)?;

    let source_dir = fs::canonicalize(&source_dir)
        .with_context(|| format!("Source directory not found: {}", source_dir.display()))?;
    let temp_dir = temp_dir.unwrap_or_else(env::temp_dir);

    let mut sink: Box<dyn ResultSink> = match &json {
        Some(path) => Box::new(JsonLinesSink::create(path)?),
        None => Box::new(MemorySink::default()),
    };

    if let Some(group) = &group {
        println!("{}", format!("Run group: {group}").bold());
    }
    println!(
        "Running {} in {}",
        selection.to_string().yellow(),
        source_dir.display()
    );

    let outcome = execution::execute(
        &config,
        &selection,
        &extra_args,
        &source_dir,
        &temp_dir,
        sink.as_mut(),
    )
    .await?;

    match outcome {
        RunOutcome::NoTestsExecuted(_) => {
            // Already logged as a warning by the orchestrator. A run with
            // zero results is a completed run, not a failed one.
            Ok(())
        }
        RunOutcome::Completed(records) => {
            print_summary(&records, group.as_deref());

            if let Some(report_path) = &html {
                println!("\nGenerating HTML report at: {}", report_path.display());
                if let Err(e) = generate_html_report(&records, report_path, group.as_deref()) {
                    eprintln!("{} {}", "Failed to generate HTML report:".red(), e);
                }
            }

            let failed = records.iter().filter(|r| !r.passed).count();
            if failed > 0 {
                print_failure_details(&records);
                anyhow::bail!("{failed} test(s) failed.");
            }
            println!("\n{}", "All tests passed.".green().bold());
            Ok(())
        }
    }
}
