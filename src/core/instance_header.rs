use crate::core::attributes::{AttributeRef, NominalAttribute};
use std::sync::Arc;

/// Column layout shared by every row of a run.
///
/// Attributes are declared once, from the shape of the first training row:
/// column 0 is the class attribute, columns `1..N` are the predictors.
#[derive(Debug, Clone, PartialEq)]
pub struct InstanceHeader {
    pub relation_name: String,
    pub attributes: Vec<AttributeRef>,
    pub class_index: usize,
}

impl InstanceHeader {
    pub const CLASS_INDEX: usize = 0;

    pub fn new(
        relation_name: String,
        attributes: Vec<AttributeRef>,
        class_index: usize,
    ) -> InstanceHeader {
        InstanceHeader {
            relation_name,
            attributes,
            class_index,
        }
    }

    /// Declares one attribute per column of `rows[0]` and records the values
    /// observed in every row. Returns `None` when there is no row to infer
    /// the layout from.
    pub fn from_rows(relation_name: &str, rows: &[Vec<String>]) -> Option<InstanceHeader> {
        let width = rows.first()?.len();
        let mut attributes: Vec<NominalAttribute> = (0..width)
            .map(|index| {
                let name = if index == Self::CLASS_INDEX {
                    "class".to_string()
                } else {
                    format!("att{index}")
                };
                NominalAttribute::new(name, index)
            })
            .collect();

        for row in rows {
            for (attribute, value) in attributes.iter_mut().zip(row) {
                attribute.observe_value(value);
            }
        }

        Some(InstanceHeader::new(
            relation_name.to_string(),
            attributes.into_iter().map(Arc::new).collect(),
            Self::CLASS_INDEX,
        ))
    }

    pub fn relation_name(&self) -> &str {
        &self.relation_name
    }

    /// Number of columns, class column included.
    pub fn number_of_attributes(&self) -> usize {
        self.attributes.len()
    }

    pub fn class_index(&self) -> usize {
        self.class_index
    }

    pub fn class_attribute(&self) -> Option<&NominalAttribute> {
        self.attribute_at_index(self.class_index)
    }

    pub fn attribute_at_index(&self, index: usize) -> Option<&NominalAttribute> {
        self.attributes.get(index).map(|a| a.as_ref())
    }

    /// Indices of the attributes a tree may split on, in ascending order.
    pub fn predictor_indices(&self) -> impl Iterator<Item = usize> + '_ {
        (0..self.attributes.len()).filter(move |&i| i != self.class_index)
    }

    pub fn number_of_predictors(&self) -> usize {
        self.predictor_indices().count()
    }

    pub fn number_of_classes(&self) -> usize {
        self.class_attribute()
            .map(NominalAttribute::number_of_values)
            .unwrap_or(0)
    }

    pub fn describe(&self) -> String {
        let mut out = format!("@relation {}\n", self.relation_name);
        for attribute in &self.attributes {
            out.push_str(&attribute.describe());
            out.push('\n');
        }
        out
    }
}
