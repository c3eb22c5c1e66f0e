use anyhow::{Context, Result};
use clap::Parser;
use c45::logging;
use c45::ui::cli::CliArgs;
use c45::ui::cli::drivers::InquireDriver;
use c45::ui::cli::wizard::prompt_run_config;
use c45::ui::types::build::build_task;
use c45::ui::types::config::RunConfig;
use std::io::{self, BufWriter};
use std::process::ExitCode;

fn main() -> ExitCode {
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err:#}");
            ExitCode::FAILURE
        }
    }
}

fn run() -> Result<()> {
    let args = CliArgs::parse();

    if args.print_config_schema {
        let schema = serde_json::to_string_pretty(&RunConfig::schema())?;
        println!("{schema}");
        return Ok(());
    }

    let mut config = args.resolve_config()?;
    if args.needs_wizard() {
        config = prompt_run_config(&InquireDriver, config).context("interactive setup failed")?;
    }

    logging::init(&config.log_filter)?;

    let mut task = build_task(&config).context("could not load the input files")?;
    let mut out = BufWriter::new(io::stdout().lock());
    task.run(&mut out)?;
    Ok(())
}
