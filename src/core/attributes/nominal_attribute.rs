use std::collections::HashMap;
use std::sync::Arc;

pub type AttributeRef = Arc<NominalAttribute>;

/// Categorical column of a tab-separated dataset.
///
/// `index` is the position of the column inside a row (the class label lives
/// at index 0). `values` keeps the distinct labels in first-seen order.
#[derive(Debug, Clone, PartialEq)]
pub struct NominalAttribute {
    pub name: String,
    pub index: usize,
    pub values: Vec<String>,
    pub label_to_index: HashMap<String, usize>,
}

impl NominalAttribute {
    pub fn new(name: String, index: usize) -> NominalAttribute {
        NominalAttribute {
            name,
            index,
            values: Vec::new(),
            label_to_index: HashMap::new(),
        }
    }

    /// Registers `value` if it was not seen yet and returns its position.
    pub fn observe_value(&mut self, value: &str) -> usize {
        if let Some(&position) = self.label_to_index.get(value) {
            return position;
        }
        let position = self.values.len();
        self.values.push(value.to_string());
        self.label_to_index.insert(value.to_string(), position);
        position
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn number_of_values(&self) -> usize {
        self.values.len()
    }

    pub fn describe(&self) -> String {
        format!("@attribute {} {{ {} }}", self.name, self.values.join(", "))
    }
}
