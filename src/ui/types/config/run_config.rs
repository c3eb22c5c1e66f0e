use crate::classifiers::decision_tree::ExhaustionPolicy;
use crate::logging::DEFAULT_FILTER;
use crate::ui::types::config::ConfigError;
use schemars::{JsonSchema, Schema, schema_for};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Everything one train/test run needs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(default, deny_unknown_fields)]
pub struct RunConfig {
    #[schemars(
        title = "Training File",
        description = "Tab-separated rows, class label in the first field"
    )]
    pub train_path: Option<PathBuf>,

    #[schemars(
        title = "Test File",
        description = "Tab-separated rows laid out like the training file"
    )]
    pub test_path: Option<PathBuf>,

    #[schemars(
        title = "Exhaustion Policy",
        description = "Where a chosen attribute stops being a split candidate"
    )]
    pub exhaustion: ExhaustionPolicy,

    #[schemars(
        title = "Print Tree",
        description = "List the tree breadth-first before the test rows"
    )]
    pub print_tree: bool,

    #[schemars(
        title = "Print Indented",
        description = "Also print the tree indented, with attribute names and leaf counts"
    )]
    pub print_indented: bool,

    #[schemars(title = "Print Rows", description = "Echo every classified test row")]
    pub print_rows: bool,

    #[schemars(
        title = "Log Filter",
        description = "tracing filter directive, overridden by RUST_LOG"
    )]
    pub log_filter: String,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            train_path: None,
            test_path: None,
            exhaustion: ExhaustionPolicy::default(),
            print_tree: true,
            print_indented: false,
            print_rows: true,
            log_filter: DEFAULT_FILTER.to_string(),
        }
    }
}

impl RunConfig {
    pub fn schema() -> Schema {
        schema_for!(RunConfig)
    }

    pub fn from_json_str(path: &Path, json: &str) -> Result<Self, ConfigError> {
        serde_json::from_str(json).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let json = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json_str(path, &json)
    }

    pub fn has_paths(&self) -> bool {
        self.train_path.is_some() && self.test_path.is_some()
    }
}
