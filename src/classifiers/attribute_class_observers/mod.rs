mod class_counts;
mod nominal_attribute_class_observer;

pub use class_counts::ClassCounts;
pub use nominal_attribute_class_observer::NominalAttributeClassObserver;
