use crate::classifiers::attribute_class_observers::NominalAttributeClassObserver;
use crate::classifiers::decision_tree::split_criteria::SplitCriterion;

/// Split information at or below this value marks a degenerate split (the
/// attribute takes a single value over the partition). Such a split scores
/// a gain ratio of exactly zero instead of being divided by.
pub const SPLIT_INFO_EPSILON: f64 = 1e-12;

/// Shannon entropy, in bits, of a distribution of non-negative counts.
///
/// Zero entries contribute nothing; a single non-zero entry gives `0.0`.
/// An all-zero (or empty) distribution has no defined entropy and also
/// yields `0.0`.
pub fn entropy(counts: &[f64]) -> f64 {
    let sum: f64 = counts.iter().sum();
    if sum <= 0.0 {
        return 0.0;
    }
    if counts.iter().filter(|&&c| c > 0.0).count() < 2 {
        return 0.0;
    }

    counts
        .iter()
        .filter(|&&c| c > 0.0)
        .map(|&c| {
            let p = c / sum;
            -p * p.log2()
        })
        .sum()
}

/// C4.5 gain ratio: information gain normalized by split information.
#[derive(Debug, Default, Clone, Copy)]
pub struct GainRatioSplitCriterion;

impl GainRatioSplitCriterion {
    pub fn new() -> Self {
        Self
    }

    /// Expected class entropy after splitting on the observed attribute.
    pub fn attribute_info(observer: &NominalAttributeClassObserver, partition_size: usize) -> f64 {
        if partition_size == 0 {
            return 0.0;
        }
        let n = partition_size as f64;
        observer
            .iter()
            .map(|(_, dist)| (dist.total() as f64 / n) * entropy(&dist.weights()))
            .sum()
    }

    /// Entropy of the partition sizes, independent of the class labels.
    pub fn split_info(observer: &NominalAttributeClassObserver, partition_size: usize) -> f64 {
        if partition_size == 0 {
            return 0.0;
        }
        let n = partition_size as f64;
        observer
            .partition_sizes()
            .into_iter()
            .filter(|&size| size > 0)
            .map(|size| {
                let w = size as f64 / n;
                -w * w.log2()
            })
            .sum()
    }

    pub fn gain_ratio(
        observer: &NominalAttributeClassObserver,
        partition_size: usize,
        class_entropy: f64,
    ) -> f64 {
        let split_info = Self::split_info(observer, partition_size);
        if split_info <= SPLIT_INFO_EPSILON {
            return 0.0;
        }
        let gain = class_entropy - Self::attribute_info(observer, partition_size);
        gain / split_info
    }
}

impl SplitCriterion for GainRatioSplitCriterion {
    fn merit_of_split(
        &self,
        observer: &NominalAttributeClassObserver,
        partition_size: usize,
        class_entropy: f64,
    ) -> f64 {
        Self::gain_ratio(observer, partition_size, class_entropy)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::classifiers::attribute_class_observers::ClassCounts;
    use crate::testing::dummies::{PERFECT_ATTRIBUTE_ROWS, dataset_from_rows, weather_dataset};

    const TOL: f64 = 1e-9;

    #[test]
    fn entropy_of_single_category_is_zero() {
        assert_eq!(entropy(&[7.0]), 0.0);
        assert_eq!(entropy(&[0.0, 5.0]), 0.0);
    }

    #[test]
    fn entropy_of_even_two_way_split_is_one_bit() {
        assert!((entropy(&[4.0, 4.0]) - 1.0).abs() < TOL);
        assert!((entropy(&[1.0, 1.0, 1.0, 1.0]) - 2.0).abs() < TOL);
    }

    #[test]
    fn entropy_of_empty_distribution_is_zero() {
        assert_eq!(entropy(&[]), 0.0);
        assert_eq!(entropy(&[0.0, 0.0]), 0.0);
    }

    #[test]
    fn entropy_of_skewed_distribution() {
        // 9 yes / 5 no, the textbook value.
        assert!((entropy(&[9.0, 5.0]) - 0.940_285_958_670_631).abs() < 1e-12);
    }

    #[test]
    fn perfect_attribute_has_gain_ratio_one() {
        let ds = dataset_from_rows(PERFECT_ATTRIBUTE_ROWS);
        let rows = ds.all_indices();
        let obs = NominalAttributeClassObserver::observe(ds.instances(), &rows, 1);
        let class_entropy = entropy(&ClassCounts::from_rows(ds.instances(), &rows).weights());

        assert!((class_entropy - 1.0).abs() < TOL);
        assert!(GainRatioSplitCriterion::attribute_info(&obs, rows.len()).abs() < TOL);
        assert!((GainRatioSplitCriterion::split_info(&obs, rows.len()) - 1.0).abs() < TOL);

        let ratio = GainRatioSplitCriterion::new().merit_of_split(&obs, rows.len(), class_entropy);
        assert!((ratio - 1.0).abs() < TOL);
    }

    #[test]
    fn single_valued_attribute_scores_zero() {
        let ds = dataset_from_rows(&[&["yes", "same"], &["no", "same"], &["no", "same"]]);
        let rows = ds.all_indices();
        let obs = NominalAttributeClassObserver::observe(ds.instances(), &rows, 1);
        let class_entropy = entropy(&ClassCounts::from_rows(ds.instances(), &rows).weights());

        assert_eq!(GainRatioSplitCriterion::split_info(&obs, rows.len()), 0.0);
        assert_eq!(
            GainRatioSplitCriterion::gain_ratio(&obs, rows.len(), class_entropy),
            0.0
        );
    }

    #[test]
    fn weather_outlook_gain_ratio() {
        let ds = weather_dataset();
        let rows = ds.all_indices();
        let class_entropy = entropy(&ClassCounts::from_rows(ds.instances(), &rows).weights());
        let outlook = NominalAttributeClassObserver::observe(ds.instances(), &rows, 1);
        let humidity = NominalAttributeClassObserver::observe(ds.instances(), &rows, 3);

        let r_outlook = GainRatioSplitCriterion::gain_ratio(&outlook, rows.len(), class_entropy);
        let r_humidity = GainRatioSplitCriterion::gain_ratio(&humidity, rows.len(), class_entropy);

        assert!((r_outlook - 0.156).abs() < 1e-3, "outlook={r_outlook}");
        assert!((r_humidity - 0.152).abs() < 1e-3, "humidity={r_humidity}");
        assert!(r_outlook > r_humidity);
    }
}
