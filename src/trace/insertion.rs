//! Insertion sort trace generator

use super::recorder::Recorder;
use super::TraceGenerator;
use crate::model::{Element, Trace};

/// Grows a sorted prefix by sinking each new element leftwards with adjacent swaps.
///
/// Positions join the sorted set as the prefix grows, so the highlighted region
/// is "sorted so far" rather than "in final position".
#[derive(Debug, Clone, Copy, Default)]
pub struct InsertionSort;

impl TraceGenerator for InsertionSort {
    fn generate(&self, initial: &[Element]) -> Trace {
        let mut rec = Recorder::new(initial);
        let n = rec.len();

        if n > 0 {
            rec.mark_sorted(0);
        }

        for i in 1..n {
            let mut j = i;
            while j > 0 {
                rec.compare(j - 1, j);
                if rec.value(j - 1) > rec.value(j) {
                    rec.swap(j - 1, j);
                    j -= 1;
                } else {
                    break;
                }
            }
            rec.mark_sorted(i);
        }

        rec.finish()
    }
}
