mod tsv_file_stream;

pub use tsv_file_stream::TsvFileStream;
