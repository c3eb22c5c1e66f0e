use crate::classifiers::decision_tree::ExhaustionPolicy;
use crate::ui::types::config::{ConfigError, RunConfig};
use clap::Parser;
use std::path::PathBuf;
use std::str::FromStr;
use strum::IntoEnumIterator;

/// Parsed command line.
#[derive(Debug, Clone, PartialEq, Eq, Parser)]
#[command(
    name = "c45",
    version,
    about = "Builds a gain-ratio decision tree from a TSV training file and scores a test file"
)]
pub struct CliArgs {
    /// JSON run configuration; command-line values override it.
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Where a chosen attribute stops being a split candidate.
    #[arg(long, value_name = "POLICY", value_parser = parse_exhaustion)]
    pub exhaustion: Option<ExhaustionPolicy>,

    /// Also print the tree indented, with attribute names and leaf counts.
    #[arg(long)]
    pub print_indented: bool,

    /// Print the JSON schema of the configuration file and exit.
    #[arg(long)]
    pub print_config_schema: bool,

    /// Training file.
    #[arg(value_name = "TRAIN", requires = "test")]
    pub train: Option<PathBuf>,

    /// Test file, laid out like the training file.
    #[arg(value_name = "TEST")]
    pub test: Option<PathBuf>,
}

fn parse_exhaustion(value: &str) -> Result<ExhaustionPolicy, String> {
    ExhaustionPolicy::from_str(value).map_err(|_| {
        let expected: Vec<&'static str> = ExhaustionPolicy::iter().map(Into::into).collect();
        format!("expected one of {}", expected.join(", "))
    })
}

impl CliArgs {
    /// Neither a config file nor paths were given.
    pub fn needs_wizard(&self) -> bool {
        self.config.is_none() && self.train.is_none()
    }

    /// Config file (if any) with command-line values layered on top.
    pub fn resolve_config(&self) -> Result<RunConfig, ConfigError> {
        let mut config = match &self.config {
            Some(path) => RunConfig::from_json_file(path)?,
            None => RunConfig::default(),
        };
        if let (Some(train), Some(test)) = (&self.train, &self.test) {
            config.train_path = Some(train.clone());
            config.test_path = Some(test.clone());
        }
        if let Some(policy) = self.exhaustion {
            config.exhaustion = policy;
        }
        if self.print_indented {
            config.print_indented = true;
        }
        Ok(config)
    }
}
