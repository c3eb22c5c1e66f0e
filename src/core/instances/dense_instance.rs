use crate::core::instance_header::InstanceHeader;
use crate::core::instances::instance::Instance;
use std::fmt::{Display, Formatter};
use std::sync::Arc;

#[derive(Debug, Clone, PartialEq)]
pub struct DenseInstance {
    pub header: Arc<InstanceHeader>,
    pub values: Vec<String>,
}

impl DenseInstance {
    pub fn new(header: Arc<InstanceHeader>, values: Vec<String>) -> DenseInstance {
        DenseInstance { header, values }
    }
}

impl Instance for DenseInstance {
    fn value_at_index(&self, index: usize) -> Option<&str> {
        self.values.get(index).map(String::as_str)
    }

    fn number_of_attributes(&self) -> usize {
        self.values.len()
    }

    fn class_index(&self) -> usize {
        self.header.class_index()
    }

    fn class_value(&self) -> Option<&str> {
        self.value_at_index(self.header.class_index())
    }

    fn to_vec(&self) -> Vec<String> {
        self.values.clone()
    }

    fn header(&self) -> &InstanceHeader {
        &self.header
    }
}

/// Renders the row as `[label, v1, v2, ...]`.
impl Display for DenseInstance {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}]", self.values.join(", "))
    }
}
