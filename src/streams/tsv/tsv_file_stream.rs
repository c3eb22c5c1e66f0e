use crate::core::instance_header::InstanceHeader;
use crate::core::instances::DenseInstance;
use crate::streams::{Stream, StreamError};
use crate::utils::file_parsing::{is_blank, split_tsv_fields};
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing::debug;

/// Header-less, tab-separated file: field 0 is the class label, the
/// remaining fields are categorical attribute values.
///
/// The whole file is read and validated when the stream is opened, so a
/// malformed row fails the run before any row is handed out.
pub struct TsvFileStream {
    path: PathBuf,
    header: Arc<InstanceHeader>,
    rows: Vec<Vec<String>>,
    idx: usize,
}

impl TsvFileStream {
    /// Opens a training file. The first row fixes the field count and the
    /// attribute declarations.
    pub fn open(path: impl AsRef<Path>) -> Result<Self, StreamError> {
        let path = path.as_ref().to_path_buf();
        let rows = read_rows(&path, None)?;

        let relation_name = path
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_default();
        let header = InstanceHeader::from_rows(&relation_name, &rows)
            .ok_or_else(|| StreamError::EmptyDataset { path: path.clone() })?;

        debug!(
            path = %path.display(),
            rows = rows.len(),
            fields = header.number_of_attributes(),
            "opened training file"
        );
        debug!(header = %header.describe(), "inferred header");

        Ok(Self {
            path,
            header: Arc::new(header),
            rows,
            idx: 0,
        })
    }

    /// Opens a file whose rows must match an existing header, e.g. a test
    /// file evaluated against a model trained on another file.
    pub fn open_with_header(
        path: impl AsRef<Path>,
        header: Arc<InstanceHeader>,
    ) -> Result<Self, StreamError> {
        let path = path.as_ref().to_path_buf();
        let rows = read_rows(&path, Some(header.number_of_attributes()))?;

        debug!(path = %path.display(), rows = rows.len(), "opened file against existing header");

        Ok(Self {
            path,
            header,
            rows,
            idx: 0,
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

fn read_rows(path: &Path, expected: Option<usize>) -> Result<Vec<Vec<String>>, StreamError> {
    let io_error = |source: std::io::Error| StreamError::Io {
        path: path.to_path_buf(),
        source,
    };

    let reader = BufReader::new(File::open(path).map_err(io_error)?);
    let mut expected = expected;
    let mut rows = Vec::new();

    for (line_index, line) in reader.lines().enumerate() {
        let line = line.map_err(io_error)?;
        if is_blank(&line) {
            continue;
        }

        let fields = split_tsv_fields(&line);
        let width = *expected.get_or_insert(fields.len());
        if fields.len() != width {
            return Err(StreamError::MalformedRow {
                path: path.to_path_buf(),
                line: line_index + 1,
                expected: width,
                found: fields.len(),
            });
        }
        rows.push(fields);
    }

    Ok(rows)
}

impl Stream for TsvFileStream {
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
        let values = self.rows.get(self.idx)?.clone();
        self.idx += 1;
        Some(DenseInstance::new(Arc::clone(&self.header), values))
    }

    fn restart(&mut self) {
        self.idx = 0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::instances::Instance;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn write_tmp(contents: &str) -> NamedTempFile {
        let mut f = NamedTempFile::new().expect("tmp file");
        f.write_all(contents.as_bytes()).expect("write");
        f.flush().expect("flush");
        f
    }

    #[test]
    fn reads_rows_and_declares_header() {
        let f = write_tmp("yes\tSunny\tHot\nno\tRainy\tCool\n");
        let mut s = TsvFileStream::open(f.path()).unwrap();

        assert_eq!(s.len(), 2);
        assert_eq!(s.header().number_of_attributes(), 3);
        assert_eq!(s.header().number_of_classes(), 2);

        let first = s.next_instance().unwrap();
        assert_eq!(first.class_value(), Some("yes"));
        assert_eq!(first.value_at_index(1), Some("Sunny"));

        let second = s.next_instance().unwrap();
        assert_eq!(second.to_string(), "[no, Rainy, Cool]");
        assert!(!s.has_more_instances());
        assert!(s.next_instance().is_none());
    }

    #[test]
    fn skips_blank_lines_and_crlf() {
        let f = write_tmp("yes\tSunny\r\n\r\nno\tRainy\r\n");
        let mut s = TsvFileStream::open(f.path()).unwrap();
        assert_eq!(s.len(), 2);
        assert_eq!(s.next_instance().unwrap().value_at_index(1), Some("Sunny"));
    }

    #[test]
    fn trailing_tab_does_not_change_width() {
        let f = write_tmp("yes\tSunny\t\nno\tRainy\n");
        let mut s = TsvFileStream::open(f.path()).unwrap();
        assert_eq!(s.header().number_of_attributes(), 2);
        assert_eq!(s.next_instance().unwrap().to_string(), "[yes, Sunny]");
        assert_eq!(s.next_instance().unwrap().to_string(), "[no, Rainy]");
    }

    #[test]
    fn restart_rewinds() {
        let f = write_tmp("yes\ta\nno\tb\n");
        let mut s = TsvFileStream::open(f.path()).unwrap();
        while s.next_instance().is_some() {}
        s.restart();
        assert!(s.has_more_instances());
        assert_eq!(s.next_instance().unwrap().class_value(), Some("yes"));
    }

    #[test]
    fn short_row_is_malformed() {
        let f = write_tmp("yes\tSunny\tHot\nno\tRainy\n");
        let err = TsvFileStream::open(f.path()).err().unwrap();
        match err {
            StreamError::MalformedRow {
                line,
                expected,
                found,
                ..
            } => {
                assert_eq!(line, 2);
                assert_eq!(expected, 3);
                assert_eq!(found, 2);
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_file_must_match_training_width() {
        let train = write_tmp("yes\tSunny\tHot\n");
        let test = write_tmp("yes\tSunny\tHot\tHigh\n");
        let s = TsvFileStream::open(train.path()).unwrap();

        let err = TsvFileStream::open_with_header(test.path(), s.header_arc())
            .err()
            .unwrap();
        assert!(matches!(
            err,
            StreamError::MalformedRow {
                line: 1,
                expected: 3,
                found: 4,
                ..
            }
        ));
    }

    #[test]
    fn empty_training_file_is_rejected() {
        let f = write_tmp("\n\n");
        let err = TsvFileStream::open(f.path()).err().unwrap();
        assert!(matches!(err, StreamError::EmptyDataset { .. }));
    }

    #[test]
    fn missing_file_is_io_error() {
        let err = TsvFileStream::open("/definitely/not/here.tsv").err().unwrap();
        assert!(matches!(err, StreamError::Io { .. }));
    }
}
