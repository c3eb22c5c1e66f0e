use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumIter, EnumString, IntoStaticStr};

/// Scope in which an attribute stops being a split candidate once chosen.
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    Serialize,
    Deserialize,
    JsonSchema,
    Display,
    EnumString,
    EnumIter,
    IntoStaticStr,
)]
#[serde(rename_all = "kebab-case")]
#[strum(serialize_all = "kebab-case")]
pub enum ExhaustionPolicy {
    /// Used anywhere in the tree, unusable everywhere else in that tree.
    #[default]
    Global,
    /// Unusable only below the node that split on it (canonical C4.5).
    PerPath,
}
