use crate::core::instance_header::InstanceHeader;
use crate::core::instances::DenseInstance;
use crate::streams::Stream;
use std::sync::Arc;

/// Fully materialized training set.
///
/// The tree builder works on row indices into `instances`, so subsets are
/// cheap to pass around and rows are never copied.
#[derive(Debug, Clone)]
pub struct Dataset {
    header: Arc<InstanceHeader>,
    instances: Vec<DenseInstance>,
}

impl Dataset {
    pub fn new(header: Arc<InstanceHeader>, instances: Vec<DenseInstance>) -> Self {
        Self { header, instances }
    }

    /// Drains `stream` into memory.
    pub fn from_stream(stream: &mut dyn Stream) -> Self {
        let header = stream.header_arc();
        let mut instances = Vec::new();
        while let Some(instance) = stream.next_instance() {
            instances.push(instance);
        }
        Self::new(header, instances)
    }

    pub fn header(&self) -> &InstanceHeader {
        &self.header
    }

    pub fn header_arc(&self) -> Arc<InstanceHeader> {
        Arc::clone(&self.header)
    }

    pub fn instances(&self) -> &[DenseInstance] {
        &self.instances
    }

    pub fn len(&self) -> usize {
        self.instances.len()
    }

    pub fn is_empty(&self) -> bool {
        self.instances.is_empty()
    }

    pub fn all_indices(&self) -> Vec<usize> {
        (0..self.instances.len()).collect()
    }
}
