use crate::classifiers::attribute_class_observers::NominalAttributeClassObserver;

/// Scores a candidate split of a node's rows. Higher is better.
pub trait SplitCriterion {
    /// `partition_size` is the number of rows at the node and
    /// `class_entropy` the entropy of their class distribution.
    fn merit_of_split(
        &self,
        observer: &NominalAttributeClassObserver,
        partition_size: usize,
        class_entropy: f64,
    ) -> f64;
}
