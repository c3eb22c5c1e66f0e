use strum_macros::{Display, EnumIter, IntoStaticStr};

/// Result of classifying one labelled row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumIter, IntoStaticStr)]
#[strum(serialize_all = "lowercase")]
pub enum ClassificationOutcome {
    Correct,
    Wrong,
    /// The tree had no label for the row.
    Unclassified,
}

impl ClassificationOutcome {
    /// Line prefix used when echoing a classified row.
    pub fn prefix(self) -> &'static str {
        match self {
            ClassificationOutcome::Correct => "Correct: ",
            ClassificationOutcome::Wrong => "Wrong:   ",
            ClassificationOutcome::Unclassified => "Unclassified: ",
        }
    }
}
