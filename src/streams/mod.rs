mod error;
mod stream;
pub mod tsv;

pub use error::StreamError;
pub use stream::Stream;
pub use tsv::TsvFileStream;
