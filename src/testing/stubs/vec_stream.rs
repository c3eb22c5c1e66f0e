use crate::core::instance_header::InstanceHeader;
use crate::core::instances::DenseInstance;
use crate::streams::Stream;
use crate::testing::dummies::to_rows;
use std::sync::Arc;

/// In-memory stream over literal rows.
pub struct VecStream {
    pub header: Arc<InstanceHeader>,
    pub rows: Vec<Vec<String>>,
    idx: usize,
}

impl VecStream {
    pub fn new(raw: &[&[&str]]) -> Self {
        let rows = to_rows(raw);
        let header = InstanceHeader::from_rows("vec", &rows).expect("at least one row");
        Self {
            header: Arc::new(header),
            rows,
            idx: 0,
        }
    }

    /// Rows that reuse another stream's header, e.g. a test split.
    pub fn with_header(header: Arc<InstanceHeader>, raw: &[&[&str]]) -> Self {
        Self {
            header,
            rows: to_rows(raw),
            idx: 0,
        }
    }
}

impl Stream for VecStream {
    fn header(&self) -> &InstanceHeader {
        &self.header
    }

    fn header_arc(&self) -> Arc<InstanceHeader> {
        Arc::clone(&self.header)
    }

    fn has_more_instances(&self) -> bool {
        self.idx < self.rows.len()
    }

    fn next_instance(&mut self) -> Option<DenseInstance> {
        if !self.has_more_instances() {
            return None;
        }

        let values = self.rows[self.idx].clone();
        self.idx += 1;
        Some(DenseInstance::new(Arc::clone(&self.header), values))
    }

    fn restart(&mut self) {
        self.idx = 0;
    }
}
