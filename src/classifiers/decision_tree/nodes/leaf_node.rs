/// Terminal node predicting a single class label.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LeafNode {
    label: String,
    depth: usize,
    training_rows: usize,
}

impl LeafNode {
    pub fn new(label: String, depth: usize, training_rows: usize) -> Self {
        Self {
            label,
            depth,
            training_rows,
        }
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn depth(&self) -> usize {
        self.depth
    }

    pub fn training_rows(&self) -> usize {
        self.training_rows
    }
}
