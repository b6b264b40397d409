//! Quicksort trace generator (Lomuto partition)

use super::recorder::Recorder;
use super::TraceGenerator;
use crate::model::{Element, Trace};

/// Lomuto quicksort with the last element of each range as pivot.
///
/// Pending ranges live on an explicit work stack instead of the call stack, so a
/// degenerate input (already sorted, all equal) costs O(n) heap rather than O(n)
/// recursion depth. Ranges are popped left-first, which reproduces the order of
/// the recursive formulation exactly.
#[derive(Debug, Clone, Copy, Default)]
pub struct QuickSort;

impl TraceGenerator for QuickSort {
    fn generate(&self, initial: &[Element]) -> Trace {
        let mut rec = Recorder::new(initial);
        if rec.is_empty() {
            return rec.finish();
        }

        // Inclusive (low, high) ranges, never empty
        let mut pending = vec![(0usize, rec.len() - 1)];

        while let Some((low, high)) = pending.pop() {
            if low == high {
                rec.mark_sorted(low);
                continue;
            }

            let pivot = partition(&mut rec, low, high);

            // Right pushed first so the left range is handled first
            if pivot < high {
                pending.push((pivot + 1, high));
            }
            if pivot > low {
                pending.push((low, pivot - 1));
            }
        }

        rec.finish()
    }
}

/// Partition `low..=high` around the value at `high`, returning the pivot's final slot
fn partition(rec: &mut Recorder, low: usize, high: usize) -> usize {
    let pivot = rec.value(high);
    // Next slot for an element smaller than the pivot
    let mut boundary = low;

    for j in low..high {
        rec.compare(j, high);
        if rec.value(j) < pivot {
            if boundary != j {
                rec.swap(boundary, j);
            }
            boundary += 1;
        }
    }

    if boundary != high {
        rec.swap(boundary, high);
    }
    rec.mark_sorted(boundary);
    boundary
}
