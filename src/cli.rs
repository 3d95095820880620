// src/cli.rs
use anyhow::Result;
use clap::{Arg, ArgAction, ArgGroup, Command};
use std::path::PathBuf;

use crate::core::models::TestSelection;

pub mod commands;

fn build_cli() -> Command {
    Command::new("phpunit-runner")
        .author(env!("CARGO_PKG_AUTHORS"))
        .version(env!("CARGO_PKG_VERSION"))
        .about("Runs PHPUnit test suites and ingests their JUnit XML reports.")
        .subcommand(
            Command::new("run")
                .about("Execute a PHPUnit run and record its results.")
                .arg(
                    Arg::new("config")
                        .short('c')
                        .long("config")
                        .help("Path to the runner settings file")
                        .value_name("CONFIG")
                        .default_value("Runner.toml")
                        .value_parser(clap::value_parser!(PathBuf))
                        .action(ArgAction::Set),
                )
                .arg(
                    Arg::new("source-dir")
                        .long("source-dir")
                        .help("Directory containing the PHP source tree under test")
                        .value_name("SOURCE_DIR")
                        .default_value(".")
                        .value_parser(clap::value_parser!(PathBuf))
                        .action(ArgAction::Set),
                )
                .arg(
                    Arg::new("temp-dir")
                        .long("temp-dir")
                        .help("Directory for the temporary JUnit report (defaults to the system temp directory)")
                        .value_name("TEMP_DIR")
                        .value_parser(clap::value_parser!(PathBuf))
                        .action(ArgAction::Set),
                )
                .arg(
                    Arg::new("all")
                        .long("all")
                        .help("Run all tests in the source directory")
                        .action(ArgAction::SetTrue),
                )
                .arg(
                    Arg::new("use-config")
                        .long("use-config")
                        .help("Let PHPUnit use its own phpunit.xml configuration file")
                        .action(ArgAction::SetTrue),
                )
                .arg(
                    Arg::new("test")
                        .long("test")
                        .help("Run a single named test class")
                        .value_name("NAME")
                        .action(ArgAction::Set),
                )
                .group(
                    ArgGroup::new("selection")
                        .args(["all", "use-config", "test"])
                        .multiple(false),
                )
                .arg(
                    Arg::new("args")
                        .long("args")
                        .help("Additional arguments passed verbatim to the PHPUnit script")
                        .value_name("ARGS")
                        .action(ArgAction::Set),
                )
                .arg(
                    Arg::new("group")
                        .long("group")
                        .help("Cosmetic label shown in the run summary")
                        .value_name("GROUP")
                        .action(ArgAction::Set),
                )
                .arg(
                    Arg::new("json")
                        .long("json")
                        .help("Record results as JSON lines into this file")
                        .value_name("JSON")
                        .value_parser(clap::value_parser!(PathBuf))
                        .action(ArgAction::Set),
                )
                .arg(
                    Arg::new("html")
                        .long("html")
                        .help("Write an HTML report of the run to this file")
                        .value_name("HTML")
                        .value_parser(clap::value_parser!(PathBuf))
                        .action(ArgAction::Set),
                ),
        )
        .subcommand(
            Command::new("init")
                .about("Create a runner settings file.")
                .arg(
                    Arg::new("non-interactive")
                        .long("non-interactive")
                        .help("Create a default settings file without launching the interactive wizard.")
                        .action(ArgAction::SetTrue),
                ),
        )
}

pub async fn run() -> Result<()> {
    let matches = build_cli().get_matches();

    match matches.subcommand() {
        Some(("run", run_matches)) => {
            let config = run_matches
                .get_one::<PathBuf>("config")
                .unwrap() // Has default
                .clone();
            let source_dir = run_matches
                .get_one::<PathBuf>("source-dir")
                .unwrap() // Has default
                .clone();
            let temp_dir = run_matches.get_one::<PathBuf>("temp-dir").cloned();
            let extra_args = run_matches
                .get_one::<String>("args")
                .cloned()
                .unwrap_or_default();
            let group = run_matches.get_one::<String>("group").cloned();
            let json = run_matches.get_one::<PathBuf>("json").cloned();
            let html = run_matches.get_one::<PathBuf>("html").cloned();

            let selection = if let Some(name) = run_matches.get_one::<String>("test") {
                TestSelection::SpecifyTarget(name.clone())
            } else if run_matches.get_flag("use-config") {
                TestSelection::UseRunnerOwnConfig
            } else {
                TestSelection::RunAll
            };

            commands::run::execute(
                config, source_dir, temp_dir, selection, extra_args, group, json, html,
            )
            .await?;
        }
        Some(("init", init_matches)) => {
            let non_interactive = init_matches.get_flag("non-interactive");
            commands::init::run_init_wizard(non_interactive)?;
        }
        _ => {
            // This case handles when no subcommand is given.
            // Clap will have already printed help info.
        }
    }
    Ok(())
}
