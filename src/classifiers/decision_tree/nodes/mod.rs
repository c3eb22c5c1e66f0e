mod found_node;
mod leaf_node;
mod node;
mod split_node;
mod unresolved_node;

pub use found_node::FoundNode;
pub use leaf_node::LeafNode;
pub use node::Node;
pub use split_node::{Branch, SplitNode};
pub use unresolved_node::{StopReason, UnresolvedNode};
