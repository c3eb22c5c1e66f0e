use crate::core::instance_header::InstanceHeader;

/// A single categorical row: the class label plus one value per attribute.
pub trait Instance {
    fn value_at_index(&self, index: usize) -> Option<&str>;

    fn number_of_attributes(&self) -> usize;

    fn class_index(&self) -> usize;

    fn class_value(&self) -> Option<&str>;

    fn to_vec(&self) -> Vec<String>;

    fn header(&self) -> &InstanceHeader;
}
