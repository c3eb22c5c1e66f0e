use crate::classifiers::Classifier;
use crate::classifiers::decision_tree::{DecisionTree, ExhaustionPolicy, TreeBuilder};
use crate::core::dataset::Dataset;
use crate::evaluation::{BasicClassificationEvaluator, EvaluationReport, PerformanceEvaluator};
use crate::streams::Stream;
use crate::tasks::TaskError;
use std::io::Write;
use tracing::{debug, info, warn};

/// Builds a tree from the training stream, then classifies every row of the
/// test stream and reports accuracy.
///
/// Output goes to the writer handed to [`run`](TrainTestEvaluator::run):
/// the breadth-first tree listing, optionally the indented rendering, one
/// line per test row, then the accuracy line.
pub struct TrainTestEvaluator {
    train: Box<dyn Stream>,
    test: Box<dyn Stream>,
    builder: TreeBuilder,
    evaluator: BasicClassificationEvaluator,
    print_tree: bool,
    print_indented: bool,
    print_rows: bool,
    tree: Option<DecisionTree>,
}

impl TrainTestEvaluator {
    pub fn new(train: Box<dyn Stream>, test: Box<dyn Stream>) -> Self {
        Self {
            train,
            test,
            builder: TreeBuilder::new(),
            evaluator: BasicClassificationEvaluator::new(),
            print_tree: true,
            print_indented: false,
            print_rows: true,
            tree: None,
        }
    }

    pub fn with_exhaustion(mut self, exhaustion: ExhaustionPolicy) -> Self {
        self.builder = self.builder.with_exhaustion(exhaustion);
        self
    }

    pub fn with_print_tree(mut self, print_tree: bool) -> Self {
        self.print_tree = print_tree;
        self
    }

    /// Writes [`DecisionTree::render_indented`] after the breadth-first
    /// listing.
    pub fn with_print_indented(mut self, print_indented: bool) -> Self {
        self.print_indented = print_indented;
        self
    }

    pub fn with_print_rows(mut self, print_rows: bool) -> Self {
        self.print_rows = print_rows;
        self
    }

    /// Tree from the last successful build.
    pub fn tree(&self) -> Option<&DecisionTree> {
        self.tree.as_ref()
    }

    pub fn evaluator(&self) -> &BasicClassificationEvaluator {
        &self.evaluator
    }

    pub fn run<W: Write>(&mut self, out: &mut W) -> Result<EvaluationReport, TaskError> {
        self.train.restart();
        let train = Dataset::from_stream(self.train.as_mut());
        info!(
            rows = train.len(),
            predictors = train.header().number_of_predictors(),
            classes = train.header().number_of_classes(),
            "training set loaded"
        );

        let tree = self.builder.build(&train);
        if self.print_tree {
            for line in tree.structure_lines() {
                writeln!(out, "{line}")?;
            }
        }
        if self.print_indented {
            write!(out, "{}", tree.render_indented())?;
        }

        self.evaluator.reset();
        self.test.restart();
        while let Some(instance) = self.test.next_instance() {
            let outcome = tree.classify(&instance);
            self.evaluator.add_result(outcome);
            if self.print_rows {
                writeln!(out, "{}{}", outcome.prefix(), instance)?;
            }
        }
        self.tree = Some(tree);

        info!(rows = self.evaluator.total(), "test set classified");
        if self.evaluator.unclassified() > 0 {
            warn!(
                unclassified = self.evaluator.unclassified(),
                "some test rows could not be classified"
            );
        }

        for measurement in self.evaluator.performance() {
            debug!(metric = %measurement.name, value = measurement.value, "measurement");
        }
        let report = self.evaluator.report()?;
        info!(%report, "evaluation finished");
        writeln!(out, "{:.2}%", report.accuracy)?;
        out.flush()?;
        Ok(report)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::classifiers::decision_tree::nodes::Node;
    use crate::evaluation::EvaluationError;
    use crate::streams::TsvFileStream;
    use crate::testing::dummies::{
        PERFECT_ATTRIBUTE_ROWS, SHARED_SECOND_SPLIT_ROWS, WEATHER_ROWS, write_tsv,
    };
    use crate::testing::stubs::VecStream;
    use std::sync::Arc;
    use tempfile::NamedTempFile;

    fn evaluator(train: &[&[&str]], test: &[&[&str]]) -> TrainTestEvaluator {
        let train = VecStream::new(train);
        let test = VecStream::with_header(Arc::clone(&train.header), test);
        TrainTestEvaluator::new(Box::new(train), Box::new(test))
    }

    fn run_to_string(task: &mut TrainTestEvaluator) -> (Result<EvaluationReport, TaskError>, String) {
        let mut out = Vec::new();
        let result = task.run(&mut out);
        (result, String::from_utf8(out).unwrap())
    }

    #[test]
    fn perfect_attribute_scores_every_row() {
        let mut task = evaluator(PERFECT_ATTRIBUTE_ROWS, PERFECT_ATTRIBUTE_ROWS);
        let (result, out) = run_to_string(&mut task);
        let report = result.unwrap();

        assert_eq!(report.correct, 4);
        assert_eq!(report.wrong, 0);
        assert_eq!(
            out,
            "\
attribute index:   1 ,value: Rainy
attribute index:   1 ,value: Sunny
Correct: [yes, Sunny]
Correct: [yes, Sunny]
Correct: [no, Rainy]
Correct: [no, Rainy]
100.00%
"
        );
    }

    #[test]
    fn indented_tree_follows_the_listing() {
        let mut task = evaluator(WEATHER_ROWS, &WEATHER_ROWS[..1])
            .with_print_indented(true)
            .with_print_rows(false);
        let (result, out) = run_to_string(&mut task);
        result.unwrap();

        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines.len(), 7 + 7 + 1);
        assert_eq!(lines[6], "attribute index:   3 ,value: normal");
        assert_eq!(
            lines[7..14],
            [
                "att1 = overcast: yes (4)",
                "att1 = rainy",
                "|   att4 = FALSE: yes (3)",
                "|   att4 = TRUE: no (2)",
                "att1 = sunny",
                "|   att3 = high: no (3)",
                "|   att3 = normal: yes (2)",
            ]
        );
        assert_eq!(lines[14], "100.00%");
    }

    #[test]
    fn wrong_rows_are_reported() {
        let mut task = evaluator(
            PERFECT_ATTRIBUTE_ROWS,
            &[&["yes", "Sunny"], &["yes", "Rainy"], &["no", "Rainy"]],
        )
        .with_print_tree(false);
        let (result, out) = run_to_string(&mut task);

        assert_eq!(result.unwrap().wrong, 1);
        assert_eq!(
            out,
            "Correct: [yes, Sunny]\nWrong:   [yes, Rainy]\nCorrect: [no, Rainy]\n66.67%\n"
        );
    }

    #[test]
    fn unclassified_rows_are_printed_and_excluded() {
        let mut task = evaluator(
            SHARED_SECOND_SPLIT_ROWS,
            &[&["yes", "x1", "y1"], &["no", "x2", "y1"], &["yes", "x9", "y1"]],
        )
        .with_print_tree(false);
        let (result, out) = run_to_string(&mut task);
        let report = result.unwrap();

        assert_eq!(report.correct, 1);
        assert_eq!(report.unclassified, 2);
        assert!((report.accuracy - 100.0).abs() < 1e-12);
        assert_eq!(
            out,
            "Correct: [yes, x1, y1]\nUnclassified: [no, x2, y1]\nUnclassified: [yes, x9, y1]\n100.00%\n"
        );
    }

    #[test]
    fn per_path_policy_classifies_the_reused_branch() {
        let mut task = evaluator(SHARED_SECOND_SPLIT_ROWS, &[&["no", "x2", "y1"]])
            .with_exhaustion(ExhaustionPolicy::PerPath)
            .with_print_tree(false)
            .with_print_rows(false);
        let (result, out) = run_to_string(&mut task);

        assert_eq!(result.unwrap().correct, 1);
        assert_eq!(out, "100.00%\n");
    }

    #[test]
    fn empty_test_set_has_no_scored_rows() {
        let mut task = evaluator(PERFECT_ATTRIBUTE_ROWS, &[]);
        let (result, _) = run_to_string(&mut task);
        assert!(matches!(
            result,
            Err(TaskError::Evaluation(EvaluationError::NoScoredRows { unclassified: 0 }))
        ));
    }

    #[test]
    fn keeps_the_built_tree() {
        let mut task = evaluator(PERFECT_ATTRIBUTE_ROWS, PERFECT_ATTRIBUTE_ROWS);
        assert!(task.tree().is_none());
        let (result, _) = run_to_string(&mut task);
        result.unwrap();
        assert!(matches!(task.tree().map(|t| t.root()), Some(Node::Split(_))));
        assert_eq!(task.evaluator().total(), 4);
    }

    #[test]
    fn weather_files_end_to_end() {
        let mut train = NamedTempFile::new().unwrap();
        writeln!(train, "{}", write_tsv(WEATHER_ROWS)).unwrap();
        let mut test = NamedTempFile::new().unwrap();
        write!(test, "{}\r\n\r\n", write_tsv(&WEATHER_ROWS[..3]).replace('\n', "\r\n")).unwrap();

        let train = TsvFileStream::open(train.path()).unwrap();
        let test = TsvFileStream::open_with_header(test.path(), train.header_arc()).unwrap();
        let mut task = TrainTestEvaluator::new(Box::new(train), Box::new(test));
        let (result, out) = run_to_string(&mut task);

        assert_eq!(result.unwrap().correct, 3);
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines.len(), 7 + 3 + 1);
        assert_eq!(lines[0], "attribute index:   1 ,value: overcast");
        assert_eq!(lines[7], "Correct: [no, sunny, hot, high, FALSE]");
        assert_eq!(lines[10], "100.00%");
    }
}
