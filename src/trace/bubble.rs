//! Bubble sort trace generator

use super::recorder::Recorder;
use super::TraceGenerator;
use crate::model::{Element, Trace};

/// Adjacent compare-and-swap passes; each pass settles the largest remaining
/// value at the end of the unsorted region.
#[derive(Debug, Clone, Copy, Default)]
pub struct BubbleSort;

impl TraceGenerator for BubbleSort {
    fn generate(&self, initial: &[Element]) -> Trace {
        let mut rec = Recorder::new(initial);
        let n = rec.len();

        for i in 0..n.saturating_sub(1) {
            for j in 0..n - i - 1 {
                rec.compare(j, j + 1);
                if rec.value(j) > rec.value(j + 1) {
                    rec.swap(j, j + 1);
                }
            }
            rec.mark_sorted(n - 1 - i);
        }

        // The last pass leaves position 0 settled without its own pass
        if n > 0 {
            rec.mark_sorted(0);
        }

        rec.finish()
    }
}
