use crate::core::dataset::Dataset;
use crate::core::instance_header::InstanceHeader;
use crate::core::instances::DenseInstance;
use std::sync::Arc;

pub fn to_rows(raw: &[&[&str]]) -> Vec<Vec<String>> {
    raw.iter()
        .map(|r| r.iter().map(|s| s.to_string()).collect())
        .collect()
}

pub fn dataset_from_rows(raw: &[&[&str]]) -> Dataset {
    let rows = to_rows(raw);
    let header = Arc::new(InstanceHeader::from_rows("dummy", &rows).expect("at least one row"));
    let instances = rows
        .into_iter()
        .map(|values| DenseInstance::new(Arc::clone(&header), values))
        .collect();
    Dataset::new(header, instances)
}

/// Attribute 1 alone decides the class.
pub const PERFECT_ATTRIBUTE_ROWS: &[&[&str]] = &[
    &["yes", "Sunny"],
    &["yes", "Sunny"],
    &["no", "Rainy"],
    &["no", "Rainy"],
];

/// Nominal "play tennis" data: class, outlook, temperature, humidity, windy.
pub const WEATHER_ROWS: &[&[&str]] = &[
    &["no", "sunny", "hot", "high", "FALSE"],
    &["no", "sunny", "hot", "high", "TRUE"],
    &["yes", "overcast", "hot", "high", "FALSE"],
    &["yes", "rainy", "mild", "high", "FALSE"],
    &["yes", "rainy", "cool", "normal", "FALSE"],
    &["no", "rainy", "cool", "normal", "TRUE"],
    &["yes", "overcast", "cool", "normal", "TRUE"],
    &["no", "sunny", "mild", "high", "FALSE"],
    &["yes", "sunny", "cool", "normal", "FALSE"],
    &["yes", "rainy", "mild", "normal", "FALSE"],
    &["yes", "sunny", "mild", "normal", "TRUE"],
    &["yes", "overcast", "mild", "high", "TRUE"],
    &["yes", "overcast", "hot", "normal", "FALSE"],
    &["no", "rainy", "mild", "high", "TRUE"],
];

/// Attribute 1 is chosen at the root; branches `x1` and `x2` both need
/// attribute 2 afterwards, `x3` is pure.
pub const SHARED_SECOND_SPLIT_ROWS: &[&[&str]] = &[
    &["yes", "x1", "y1"],
    &["no", "x1", "y2"],
    &["yes", "x2", "y2"],
    &["no", "x2", "y1"],
    &["yes", "x3", "y1"],
    &["yes", "x3", "y1"],
];

pub fn weather_dataset() -> Dataset {
    dataset_from_rows(WEATHER_ROWS)
}

pub fn write_tsv(rows: &[&[&str]]) -> String {
    rows.iter()
        .map(|r| r.join("\t"))
        .collect::<Vec<_>>()
        .join("\n")
}
