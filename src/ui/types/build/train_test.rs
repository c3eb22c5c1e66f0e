use crate::streams::{Stream, TsvFileStream};
use crate::tasks::TrainTestEvaluator;
use crate::ui::types::build::BuildError;
use crate::ui::types::config::RunConfig;

impl TryFrom<&RunConfig> for TrainTestEvaluator {
    type Error = BuildError;

    fn try_from(config: &RunConfig) -> Result<Self, Self::Error> {
        let train_path = config
            .train_path
            .as_ref()
            .ok_or(BuildError::MissingParameter("train_path"))?;
        let test_path = config
            .test_path
            .as_ref()
            .ok_or(BuildError::MissingParameter("test_path"))?;

        let train = TsvFileStream::open(train_path)?;
        let test = TsvFileStream::open_with_header(test_path, train.header_arc())?;

        Ok(TrainTestEvaluator::new(Box::new(train), Box::new(test))
            .with_exhaustion(config.exhaustion)
            .with_print_tree(config.print_tree)
            .with_print_indented(config.print_indented)
            .with_print_rows(config.print_rows))
    }
}

/// Opens both files and wires them into a ready-to-run task.
pub fn build_task(config: &RunConfig) -> Result<TrainTestEvaluator, BuildError> {
    TrainTestEvaluator::try_from(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::streams::StreamError;
    use crate::testing::dummies::{PERFECT_ATTRIBUTE_ROWS, write_tsv};
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn tsv(contents: &str) -> NamedTempFile {
        let mut f = NamedTempFile::new().unwrap();
        f.write_all(contents.as_bytes()).unwrap();
        f
    }

    #[test]
    fn missing_paths_are_reported() {
        let err = build_task(&RunConfig::default()).err().unwrap();
        assert!(matches!(err, BuildError::MissingParameter("train_path")));
    }

    #[test]
    fn test_rows_must_match_training_width() {
        let train = tsv(&write_tsv(PERFECT_ATTRIBUTE_ROWS));
        let test = tsv("yes\tSunny\textra\n");
        let config = RunConfig {
            train_path: Some(train.path().to_path_buf()),
            test_path: Some(test.path().to_path_buf()),
            ..RunConfig::default()
        };

        let err = build_task(&config).err().unwrap();
        assert!(matches!(
            err,
            BuildError::Stream(StreamError::MalformedRow {
                line: 1,
                expected: 2,
                found: 3,
                ..
            })
        ));
    }

    #[test]
    fn builds_and_runs_from_files() {
        let train = tsv(&write_tsv(PERFECT_ATTRIBUTE_ROWS));
        let test = tsv(&write_tsv(PERFECT_ATTRIBUTE_ROWS));
        let config = RunConfig {
            train_path: Some(train.path().to_path_buf()),
            test_path: Some(test.path().to_path_buf()),
            print_tree: false,
            print_rows: false,
            ..RunConfig::default()
        };

        let mut task = build_task(&config).unwrap();
        let mut out = Vec::new();
        let report = task.run(&mut out).unwrap();
        assert_eq!(report.correct, 4);
        assert_eq!(String::from_utf8(out).unwrap(), "100.00%\n");
    }

    #[test]
    fn indented_rendering_follows_config() {
        let train = tsv(&write_tsv(PERFECT_ATTRIBUTE_ROWS));
        let test = tsv(&write_tsv(PERFECT_ATTRIBUTE_ROWS));
        let config = RunConfig {
            train_path: Some(train.path().to_path_buf()),
            test_path: Some(test.path().to_path_buf()),
            print_tree: false,
            print_indented: true,
            print_rows: false,
            ..RunConfig::default()
        };

        let mut task = build_task(&config).unwrap();
        let mut out = Vec::new();
        task.run(&mut out).unwrap();
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "att1 = Rainy: no (2)\natt1 = Sunny: yes (2)\n100.00%\n"
        );
    }
}
