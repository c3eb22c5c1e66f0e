use crate::core::instances::{DenseInstance, Instance};
use std::collections::BTreeMap;

/// Class label -> number of rows carrying it.
///
/// Labels are kept sorted so every derived float sum is computed in the
/// same order from one run to the next.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClassCounts {
    counts: BTreeMap<String, usize>,
    total: usize,
}

impl ClassCounts {
    pub fn new() -> Self {
        Self::default()
    }

    /// Counts the class labels of `rows`, given as indices into `instances`.
    pub fn from_rows(instances: &[DenseInstance], rows: &[usize]) -> Self {
        let mut counts = Self::new();
        for &row in rows {
            if let Some(label) = instances.get(row).and_then(|i| i.class_value()) {
                counts.add(label);
            }
        }
        counts
    }

    pub fn add(&mut self, label: &str) {
        match self.counts.get_mut(label) {
            Some(count) => *count += 1,
            None => {
                self.counts.insert(label.to_string(), 1);
            }
        }
        self.total += 1;
    }

    pub fn total(&self) -> usize {
        self.total
    }

    pub fn is_empty(&self) -> bool {
        self.total == 0
    }

    pub fn number_of_classes(&self) -> usize {
        self.counts.len()
    }

    pub fn count_of(&self, label: &str) -> usize {
        self.counts.get(label).copied().unwrap_or(0)
    }

    /// The label shared by every counted row, if there is exactly one.
    pub fn single_label(&self) -> Option<&str> {
        if self.counts.len() != 1 {
            return None;
        }
        self.counts.keys().next().map(String::as_str)
    }

    /// Counts as floats, in label order.
    pub fn weights(&self) -> Vec<f64> {
        self.counts.values().map(|&c| c as f64).collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, usize)> {
        self.counts.iter().map(|(label, &count)| (label.as_str(), count))
    }
}
