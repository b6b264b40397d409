//! Algorithm identifiers and the generator registry

use std::fmt;
use std::str::FromStr;

use super::bubble::BubbleSort;
use super::insertion::InsertionSort;
use super::merge::MergeSort;
use super::quick::QuickSort;
use super::TraceGenerator;
use crate::errors::{Result, VisualizerError};
use crate::model::{Element, Trace};

/// Closed set of supported sorting algorithms
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Algorithm {
    #[default]
    Bubble,
    Insertion,
    Quick,
    Merge,
}

impl Algorithm {
    /// Every algorithm, in selector order
    pub const ALL: [Algorithm; 4] = [
        Algorithm::Bubble,
        Algorithm::Quick,
        Algorithm::Merge,
        Algorithm::Insertion,
    ];

    /// Identifier used on the command line
    pub fn id(self) -> &'static str {
        match self {
            Algorithm::Bubble => "bubble",
            Algorithm::Insertion => "insertion",
            Algorithm::Quick => "quick",
            Algorithm::Merge => "merge",
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Algorithm::Bubble => "Bubble Sort",
            Algorithm::Insertion => "Insertion Sort",
            Algorithm::Quick => "Quick Sort",
            Algorithm::Merge => "Merge Sort",
        }
    }

    /// Average-case complexity label, for display only
    pub fn complexity(self) -> &'static str {
        match self {
            Algorithm::Bubble | Algorithm::Insertion => "O(n²)",
            Algorithm::Quick | Algorithm::Merge => "O(n log n)",
        }
    }

    /// The generator registered for this algorithm
    pub fn generator(self) -> &'static dyn TraceGenerator {
        match self {
            Algorithm::Bubble => &BubbleSort,
            Algorithm::Insertion => &InsertionSort,
            Algorithm::Quick => &QuickSort,
            Algorithm::Merge => &MergeSort,
        }
    }

    /// Next algorithm in selector order, wrapping around
    pub fn next(self) -> Self {
        let pos = self.position();
        Self::ALL[(pos + 1) % Self::ALL.len()]
    }

    /// Previous algorithm in selector order, wrapping around
    pub fn prev(self) -> Self {
        let pos = self.position();
        Self::ALL[(pos + Self::ALL.len() - 1) % Self::ALL.len()]
    }

    fn position(self) -> usize {
        Self::ALL
            .iter()
            .position(|&algorithm| algorithm == self)
            .unwrap_or(0)
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for Algorithm {
    type Err = VisualizerError;

    fn from_str(value: &str) -> Result<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "bubble" => Ok(Algorithm::Bubble),
            "insertion" => Ok(Algorithm::Insertion),
            "quick" => Ok(Algorithm::Quick),
            "merge" => Ok(Algorithm::Merge),
            _ => Err(VisualizerError::UnknownAlgorithm(value.to_string())),
        }
    }
}

/// Record a trace of `algorithm` sorting `array`. The input is left untouched.
pub fn generate(algorithm: Algorithm, array: &[Element]) -> Trace {
    let trace = algorithm.generator().generate(array);
    let stats = trace.stats();
    tracing::debug!(
        algorithm = algorithm.id(),
        len = array.len(),
        steps = trace.len(),
        comparisons = stats.comparisons,
        writes = stats.writes,
        "trace generated"
    );
    trace
}

/// Like [`generate`], resolving the algorithm from its identifier.
///
/// An unknown identifier is a wiring bug in the caller and is reported as
/// [`VisualizerError::UnknownAlgorithm`].
pub fn generate_by_id(id: &str, array: &[Element]) -> Result<Trace> {
    let algorithm = id.parse::<Algorithm>()?;
    Ok(generate(algorithm, array))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::elements_from_values;

    #[test]
    fn test_parse_round_trips_ids() {
        for algorithm in Algorithm::ALL {
            assert_eq!(algorithm.id().parse::<Algorithm>(), Ok(algorithm));
        }
        assert_eq!("  Quick ".parse::<Algorithm>(), Ok(Algorithm::Quick));
    }

    #[test]
    fn test_unknown_id_fails_loudly() {
        let err = generate_by_id("bogo", &elements_from_values(&[1])).unwrap_err();
        assert_eq!(err, VisualizerError::UnknownAlgorithm("bogo".to_string()));
    }

    #[test]
    fn test_complexity_labels() {
        assert_eq!(Algorithm::Bubble.complexity(), "O(n²)");
        assert_eq!(Algorithm::Insertion.complexity(), "O(n²)");
        assert_eq!(Algorithm::Quick.complexity(), "O(n log n)");
        assert_eq!(Algorithm::Merge.complexity(), "O(n log n)");
    }

    #[test]
    fn test_selector_cycles() {
        let mut algorithm = Algorithm::Bubble;
        for _ in 0..Algorithm::ALL.len() {
            algorithm = algorithm.next();
        }
        assert_eq!(algorithm, Algorithm::Bubble);
        assert_eq!(Algorithm::Bubble.prev(), Algorithm::Insertion);
    }

    #[test]
    fn test_generate_does_not_mutate_input() {
        let input = elements_from_values(&[3, 1, 2]);
        let copy = input.clone();
        for algorithm in Algorithm::ALL {
            let trace = generate(algorithm, &input);
            assert_eq!(trace.last().unwrap().values(), vec![1, 2, 3]);
        }
        assert_eq!(input, copy);
    }
}
