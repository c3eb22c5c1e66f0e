use crate::classifiers::attribute_class_observers::NominalAttributeClassObserver;

/// A candidate multiway split on one attribute, with its merit.
#[derive(Debug, Clone)]
pub struct AttributeSplitSuggestion {
    observer: NominalAttributeClassObserver,
    merit: f64,
}

impl AttributeSplitSuggestion {
    pub fn new(observer: NominalAttributeClassObserver, merit: f64) -> Self {
        Self { observer, merit }
    }

    pub fn attribute_index(&self) -> usize {
        self.observer.attribute_index()
    }

    pub fn merit(&self) -> f64 {
        self.merit
    }

    pub fn number_of_splits(&self) -> usize {
        self.observer.number_of_values()
    }

    /// Keeps the first suggestion unless a later one has a strictly greater
    /// merit, so candidates fed in ascending attribute order resolve ties
    /// towards the lowest index.
    pub fn best_of<I>(suggestions: I) -> Option<AttributeSplitSuggestion>
    where
        I: IntoIterator<Item = AttributeSplitSuggestion>,
    {
        suggestions.into_iter().fold(None, |best, candidate| match best {
            Some(current) if candidate.merit <= current.merit || candidate.merit.is_nan() => {
                Some(current)
            }
            _ => Some(candidate),
        })
    }
}
