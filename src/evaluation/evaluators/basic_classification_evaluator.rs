use crate::evaluation::{
    ClassificationOutcome, EvaluationError, EvaluationReport, Measurement, PerformanceEvaluator,
};

/// Counts correct, wrong and unclassified rows.
///
/// Accuracy is a percentage over scored rows only (`correct + wrong`);
/// unclassified rows show up in `coverage` instead.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BasicClassificationEvaluator {
    correct: u64,
    wrong: u64,
    unclassified: u64,
}

impl BasicClassificationEvaluator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn correct(&self) -> u64 {
        self.correct
    }

    pub fn wrong(&self) -> u64 {
        self.wrong
    }

    pub fn unclassified(&self) -> u64 {
        self.unclassified
    }

    pub fn scored(&self) -> u64 {
        self.correct + self.wrong
    }

    pub fn total(&self) -> u64 {
        self.scored() + self.unclassified
    }

    pub fn accuracy(&self) -> Result<f64, EvaluationError> {
        let scored = self.scored();
        if scored == 0 {
            return Err(EvaluationError::NoScoredRows {
                unclassified: self.unclassified,
            });
        }
        Ok(self.correct as f64 / scored as f64 * 100.0)
    }

    /// Fraction of rows that received a label, `None` before any row.
    pub fn coverage(&self) -> Option<f64> {
        let total = self.total();
        (total > 0).then(|| self.scored() as f64 / total as f64)
    }

    pub fn report(&self) -> Result<EvaluationReport, EvaluationError> {
        Ok(EvaluationReport {
            correct: self.correct,
            wrong: self.wrong,
            unclassified: self.unclassified,
            accuracy: self.accuracy()?,
            coverage: self.coverage().unwrap_or(0.0),
        })
    }
}

impl PerformanceEvaluator for BasicClassificationEvaluator {
    fn reset(&mut self) {
        *self = Self::default();
    }

    fn add_result(&mut self, outcome: ClassificationOutcome) {
        match outcome {
            ClassificationOutcome::Correct => self.correct += 1,
            ClassificationOutcome::Wrong => self.wrong += 1,
            ClassificationOutcome::Unclassified => self.unclassified += 1,
        }
    }

    fn performance(&self) -> Vec<Measurement> {
        let mut m = Vec::with_capacity(5);
        if let Ok(accuracy) = self.accuracy() {
            m.push(Measurement::new("accuracy", accuracy));
        }
        if let Some(coverage) = self.coverage() {
            m.push(Measurement::new("coverage", coverage));
        }
        m.push(Measurement::new("correct", self.correct as f64));
        m.push(Measurement::new("wrong", self.wrong as f64));
        m.push(Measurement::new("unclassified", self.unclassified as f64));
        m
    }
}
