mod gain_ratio_split_criterion;
mod split_criterion;

pub use gain_ratio_split_criterion::{GainRatioSplitCriterion, SPLIT_INFO_EPSILON, entropy};
pub use split_criterion::SplitCriterion;
