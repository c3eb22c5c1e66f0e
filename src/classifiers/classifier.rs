use crate::classifiers::decision_tree::nodes::StopReason;
use crate::core::instances::Instance;
use crate::evaluation::ClassificationOutcome;

/// What a trained model says about one instance.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Prediction<'a> {
    Label(&'a str),
    /// The instance reached a node that was never resolved to a label.
    Unresolved(StopReason),
    /// The instance's value at `attribute_index` has no branch.
    NoMatchingBranch { attribute_index: usize },
}

pub trait Classifier {
    fn predict(&self, instance: &dyn Instance) -> Prediction<'_>;

    /// Compares the prediction against the instance's own class value.
    fn classify(&self, instance: &dyn Instance) -> ClassificationOutcome {
        match self.predict(instance) {
            Prediction::Label(label) if Some(label) == instance.class_value() => {
                ClassificationOutcome::Correct
            }
            Prediction::Label(_) => ClassificationOutcome::Wrong,
            Prediction::Unresolved(_) | Prediction::NoMatchingBranch { .. } => {
                ClassificationOutcome::Unclassified
            }
        }
    }
}
