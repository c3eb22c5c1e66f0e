mod decision_tree;
mod exhaustion_policy;
pub mod nodes;
pub mod split_criteria;
mod tree_builder;
mod tree_summary;

pub use decision_tree::DecisionTree;
pub use exhaustion_policy::ExhaustionPolicy;
pub use tree_builder::{BuildContext, TreeBuilder};
pub use tree_summary::TreeSummary;
