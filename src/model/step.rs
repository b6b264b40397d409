//! Recorded snapshots of a sort run

use super::element::Element;

/// Snapshot of the array at one event of a sort run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Step {
    pub array: Vec<Element>,
    pub comparing: Vec<usize>, // Empty or the two positions being compared
    pub swapping: Vec<usize>,  // Positions being exchanged, or the single merge-write slot
    pub sorted: Vec<usize>,    // Positions known to be final, in the order they were marked
}

impl Step {
    /// True when neither comparison nor move markers are set
    pub fn is_quiet(&self) -> bool {
        self.comparing.is_empty() && self.swapping.is_empty()
    }

    /// True when every position is marked sorted and nothing else is highlighted
    pub fn is_final(&self) -> bool {
        self.is_quiet() && self.sorted.len() == self.array.len()
    }

    pub fn values(&self) -> Vec<u32> {
        self.array.iter().map(Element::value).collect()
    }
}

/// Counters accumulated while a trace is recorded
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TraceStats {
    pub comparisons: usize,
    pub writes: usize,
}

/// Complete, immutable recording of one sort run.
///
/// The initial array is kept alongside the steps so a player positioned before
/// the first step can still show the unsorted input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Trace {
    initial: Vec<Element>,
    steps: Vec<Step>,
    stats: TraceStats,
}

impl Trace {
    pub(crate) fn new(initial: Vec<Element>, steps: Vec<Step>, stats: TraceStats) -> Self {
        Trace {
            initial,
            steps,
            stats,
        }
    }

    /// The array as it was before the first recorded event
    pub fn initial(&self) -> &[Element] {
        &self.initial
    }

    pub fn steps(&self) -> &[Step] {
        &self.steps
    }

    /// Get a step by index
    pub fn get(&self, index: usize) -> Option<&Step> {
        self.steps.get(index)
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    pub fn last(&self) -> Option<&Step> {
        self.steps.last()
    }

    pub fn stats(&self) -> TraceStats {
        self.stats
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Step> {
        self.steps.iter()
    }
}

impl<'a> IntoIterator for &'a Trace {
    type Item = &'a Step;
    type IntoIter = std::slice::Iter<'a, Step>;

    fn into_iter(self) -> Self::IntoIter {
        self.steps.iter()
    }
}
