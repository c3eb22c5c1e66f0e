use crate::classifiers::attribute_class_observers::ClassCounts;
use crate::core::instances::{DenseInstance, Instance};
use std::collections::BTreeMap;

/// Per-value class distribution of one nominal attribute over a row subset.
///
/// An observer is built in one pass by [`observe`](Self::observe) and never
/// updated afterwards: every tree node gets a fresh one for its own rows.
#[derive(Debug, Clone, PartialEq)]
pub struct NominalAttributeClassObserver {
    attribute_index: usize,
    distributions: BTreeMap<String, ClassCounts>,
}

impl NominalAttributeClassObserver {
    pub fn observe(instances: &[DenseInstance], rows: &[usize], attribute_index: usize) -> Self {
        let mut distributions: BTreeMap<String, ClassCounts> = BTreeMap::new();
        for &row in rows {
            let Some(instance) = instances.get(row) else {
                continue;
            };
            let (Some(value), Some(label)) = (
                instance.value_at_index(attribute_index),
                instance.class_value(),
            ) else {
                continue;
            };
            distributions
                .entry(value.to_string())
                .or_default()
                .add(label);
        }

        Self {
            attribute_index,
            distributions,
        }
    }

    pub fn attribute_index(&self) -> usize {
        self.attribute_index
    }

    pub fn number_of_values(&self) -> usize {
        self.distributions.len()
    }

    /// Observed values in ascending order.
    pub fn values(&self) -> impl Iterator<Item = &str> {
        self.distributions.keys().map(String::as_str)
    }

    pub fn distribution_for(&self, value: &str) -> Option<&ClassCounts> {
        self.distributions.get(value)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &ClassCounts)> {
        self.distributions.iter().map(|(v, c)| (v.as_str(), c))
    }

    pub fn partition_sizes(&self) -> Vec<usize> {
        self.distributions.values().map(ClassCounts::total).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::dummies::dataset_from_rows;

    #[test]
    fn observe_counts_value_class_pairs() {
        let ds = dataset_from_rows(&[
            &["yes", "Sunny", "Hot"],
            &["yes", "Sunny", "Cool"],
            &["no", "Rainy", "Hot"],
            &["no", "Sunny", "Hot"],
        ]);
        let obs = NominalAttributeClassObserver::observe(ds.instances(), &ds.all_indices(), 1);

        assert_eq!(obs.attribute_index(), 1);
        assert_eq!(obs.values().collect::<Vec<_>>(), vec!["Rainy", "Sunny"]);
        assert_eq!(obs.partition_sizes(), vec![1, 3]);

        let sunny = obs.distribution_for("Sunny").unwrap();
        assert_eq!(sunny.count_of("yes"), 2);
        assert_eq!(sunny.count_of("no"), 1);
    }

    #[test]
    fn observe_only_sees_the_given_subset() {
        let ds = dataset_from_rows(&[
            &["yes", "Sunny"],
            &["no", "Rainy"],
            &["no", "Overcast"],
        ]);
        let obs = NominalAttributeClassObserver::observe(ds.instances(), &[0, 2], 1);

        assert_eq!(obs.number_of_values(), 2);
        assert!(obs.distribution_for("Rainy").is_none());
    }

    #[test]
    fn observe_empty_subset_has_no_values() {
        let ds = dataset_from_rows(&[&["yes", "Sunny"]]);
        let obs = NominalAttributeClassObserver::observe(ds.instances(), &[], 1);
        assert_eq!(obs.number_of_values(), 0);
    }
}
