use crate::core::instance_header::InstanceHeader;
use crate::core::instances::DenseInstance;
use std::sync::Arc;

/// Pull-based source of rows that all share one [`InstanceHeader`].
///
/// The training stream defines the header; a test stream is opened against
/// the training header so every row it yields has the same layout.
pub trait Stream {
    /// Returns the header (relation name, attributes, class index).
    ///
    /// The header stays unchanged for the lifetime of the stream.
    fn header(&self) -> &InstanceHeader;

    /// Shared handle to the header, for instances and downstream models.
    fn header_arc(&self) -> Arc<InstanceHeader>;

    /// `false` once the stream is exhausted; a subsequent
    /// [`next_instance`](Stream::next_instance) then returns `None`.
    fn has_more_instances(&self) -> bool;

    /// Produces the next row, or `None` at end of stream.
    fn next_instance(&mut self) -> Option<DenseInstance>;

    /// Rewinds to the first row. The header does not change.
    fn restart(&mut self);
}
