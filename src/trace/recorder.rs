//! Shared emission discipline for the trace generators
//!
//! A [`Recorder`] owns the working array a generator sorts and the list of
//! snapshots taken so far. Generators never touch the array directly; they go
//! through [`Recorder::compare`], [`Recorder::swap`], [`Recorder::write`] and
//! [`Recorder::mark_sorted`], each of which copies the current array into a new
//! [`Step`] before returning.

use crate::model::{Element, Step, Trace, TraceStats};

pub struct Recorder {
    array: Vec<Element>,
    initial: Vec<Element>,
    sorted: Vec<usize>,
    is_sorted: Vec<bool>, // Membership lookup for `sorted`
    steps: Vec<Step>,
    stats: TraceStats,
}

impl Recorder {
    pub fn new(initial: &[Element]) -> Self {
        Recorder {
            array: initial.to_vec(),
            initial: initial.to_vec(),
            sorted: Vec::new(),
            is_sorted: vec![false; initial.len()],
            steps: Vec::new(),
            stats: TraceStats::default(),
        }
    }

    pub fn len(&self) -> usize {
        self.array.len()
    }

    pub fn is_empty(&self) -> bool {
        self.array.is_empty()
    }

    /// Current value at `index` in the working array
    pub fn value(&self, index: usize) -> u32 {
        self.array[index].value()
    }

    /// Current element at `index` in the working array
    pub fn element(&self, index: usize) -> Element {
        self.array[index]
    }

    /// Record that positions `a` and `b` are being inspected
    pub fn compare(&mut self, a: usize, b: usize) {
        self.stats.comparisons += 1;
        self.take_snapshot(vec![a, b], Vec::new());
    }

    /// Exchange positions `a` and `b`, recording the move before and after it happens
    pub fn swap(&mut self, a: usize, b: usize) {
        debug_assert_ne!(a, b, "swap of a position with itself");
        self.stats.writes += 1;
        self.take_snapshot(Vec::new(), vec![a, b]);
        self.array.swap(a, b);
        self.take_snapshot(Vec::new(), Vec::new());
    }

    /// Overwrite position `slot` with `element`, recording the write before and after
    pub fn write(&mut self, slot: usize, element: Element) {
        self.stats.writes += 1;
        self.take_snapshot(Vec::new(), vec![slot]);
        self.array[slot] = element;
        self.take_snapshot(Vec::new(), Vec::new());
    }

    /// Mark `index` as being in its final position. Already-marked indices are ignored.
    pub fn mark_sorted(&mut self, index: usize) {
        if self.insert_sorted(index) {
            self.take_snapshot(Vec::new(), Vec::new());
        }
    }

    /// Mark every position sorted with a single snapshot
    pub fn mark_all_sorted(&mut self) {
        let mut changed = false;
        for index in 0..self.array.len() {
            changed |= self.insert_sorted(index);
        }
        if changed {
            self.take_snapshot(Vec::new(), Vec::new());
        }
    }

    /// Close the recording.
    ///
    /// Guarantees the trace ends on a step with every position sorted and no
    /// highlights, adding one only if the generator's last step was not already it.
    pub fn finish(mut self) -> Trace {
        self.mark_all_sorted_silently();
        if !self.steps.last().is_some_and(Step::is_final) {
            self.take_snapshot(Vec::new(), Vec::new());
        }
        Trace::new(self.initial, self.steps, self.stats)
    }

    fn insert_sorted(&mut self, index: usize) -> bool {
        if self.is_sorted[index] {
            return false;
        }
        self.is_sorted[index] = true;
        self.sorted.push(index);
        true
    }

    fn mark_all_sorted_silently(&mut self) {
        for index in 0..self.array.len() {
            self.insert_sorted(index);
        }
    }

    fn take_snapshot(&mut self, comparing: Vec<usize>, swapping: Vec<usize>) {
        self.steps.push(Step {
            array: self.array.clone(),
            comparing,
            swapping,
            sorted: self.sorted.clone(),
        });
    }
}
