use anyhow::Result;
use std::path::{Path, PathBuf};

use crate::ui::cli::drivers::PromptDriver;
use crate::ui::types::config::RunConfig;

/// Asks for whatever `base` is missing to run: both file paths and whether
/// to print the tree.
pub fn prompt_run_config<D: PromptDriver>(driver: &D, base: RunConfig) -> Result<RunConfig> {
    let mut config = base;

    if config.train_path.is_none() {
        config.train_path = Some(prompt_path_until_ok(
            driver,
            "Training file",
            "Tab-separated rows, class label first",
            "",
            true,
            true,
        )?);
    }
    if config.test_path.is_none() {
        config.test_path = Some(prompt_path_until_ok(
            driver,
            "Test file",
            "Same layout as the training file",
            "",
            true,
            true,
        )?);
    }

    config.print_tree = driver.ask_bool(
        "Print tree?",
        "Breadth-first listing before the test rows",
        config.print_tree,
    )?;
    config.print_indented = driver.ask_bool(
        "Print indented tree?",
        "Attribute names, nested by depth, with leaf counts",
        config.print_indented,
    )?;
    Ok(config)
}

pub fn validate_path_str(input: &str, must_exist: bool, must_be_file: bool) -> Result<(), String> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err("Path cannot be empty".into());
    }
    let p = Path::new(trimmed);

    if must_exist && !p.exists() {
        return Err(format!("Path does not exist: {}", p.display()));
    }
    if must_be_file && p.exists() && !p.is_file() {
        return Err("Expected a file path, not a directory".into());
    }
    Ok(())
}

pub fn prompt_path_until_ok<D: PromptDriver>(
    driver: &D,
    title: &str,
    help: &str,
    default: &str,
    must_exist: bool,
    must_be_file: bool,
) -> Result<PathBuf> {
    loop {
        let answer = driver.ask_string(title, help, default)?;
        match validate_path_str(&answer, must_exist, must_be_file) {
            Ok(()) => return Ok(PathBuf::from(answer.trim())),
            Err(msg) => {
                eprintln!("✗ {}", msg);
            }
        }
    }
}
