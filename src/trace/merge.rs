//! Merge sort trace generator

use super::recorder::Recorder;
use super::TraceGenerator;
use crate::model::{Element, Trace};

/// Top-down merge sort.
///
/// Merged sub-ranges still take part in larger merges, so nothing is marked
/// sorted until the outermost merge has written the whole array.
#[derive(Debug, Clone, Copy, Default)]
pub struct MergeSort;

impl TraceGenerator for MergeSort {
    fn generate(&self, initial: &[Element]) -> Trace {
        let mut rec = Recorder::new(initial);
        let n = rec.len();

        if n > 1 {
            merge_sort(&mut rec, 0, n - 1);
        }
        rec.mark_all_sorted();

        rec.finish()
    }
}

fn merge_sort(rec: &mut Recorder, left: usize, right: usize) {
    if left >= right {
        return;
    }
    let mid = left + (right - left) / 2;
    merge_sort(rec, left, mid);
    merge_sort(rec, mid + 1, right);
    merge(rec, left, mid, right);
}

/// Merge the sorted runs `left..=mid` and `mid+1..=right` back into place.
///
/// Each comparison highlights the slots the two run heads were copied from.
/// Earlier writes in the same merge may already have overwritten those slots,
/// so the highlighted bars can show different values from the heads compared.
fn merge(rec: &mut Recorder, left: usize, mid: usize, right: usize) {
    let left_run: Vec<Element> = (left..=mid).map(|idx| rec.element(idx)).collect();
    let right_run: Vec<Element> = (mid + 1..=right).map(|idx| rec.element(idx)).collect();

    let (mut i, mut j, mut k) = (0, 0, left);

    while i < left_run.len() && j < right_run.len() {
        rec.compare(left + i, mid + 1 + j);
        // `<=` keeps equal values in input order
        let next = if left_run[i].value() <= right_run[j].value() {
            i += 1;
            left_run[i - 1]
        } else {
            j += 1;
            right_run[j - 1]
        };
        rec.write(k, next);
        k += 1;
    }

    for &element in left_run[i..].iter().chain(&right_run[j..]) {
        rec.write(k, element);
        k += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{elements_from_values, ElementId};

    #[test]
    fn test_merge_is_stable() {
        // ids 0 and 2 share value 5
        let trace = MergeSort.generate(&elements_from_values(&[5, 1, 5, 0]));
        let last = trace.last().unwrap();

        assert_eq!(last.values(), vec![0, 1, 5, 5]);
        assert_eq!(last.array[2].id(), ElementId(0));
        assert_eq!(last.array[3].id(), ElementId(2));
    }

    #[test]
    fn test_merge_marks_sorted_only_at_the_end() {
        let trace = MergeSort.generate(&elements_from_values(&[4, 3, 2, 1]));
        let steps = trace.steps();

        let first_marked = steps
            .iter()
            .position(|step| !step.sorted.is_empty())
            .unwrap();
        assert_eq!(first_marked, steps.len() - 1);
        assert_eq!(steps[first_marked].sorted, vec![0, 1, 2, 3]);
    }

    #[test]
    fn test_merge_writes_mark_single_slot() {
        let trace = MergeSort.generate(&elements_from_values(&[2, 1]));

        let writes: Vec<_> = trace
            .iter()
            .filter(|step| !step.swapping.is_empty())
            .map(|step| step.swapping.clone())
            .collect();
        assert_eq!(writes, vec![vec![0], vec![1]]);
        assert_eq!(trace.get(0).unwrap().comparing, vec![0, 1]);
    }

    #[test]
    fn test_merge_compares_run_head_origins() {
        let trace = MergeSort.generate(&elements_from_values(&[3, 4, 1, 2]));

        let compares: Vec<_> = trace
            .iter()
            .filter(|step| !step.comparing.is_empty())
            .collect();
        let pairs: Vec<_> = compares.iter().map(|step| step.comparing.clone()).collect();
        assert_eq!(pairs, vec![vec![0, 1], vec![2, 3], vec![0, 2], vec![0, 3]]);

        // Head 3 came from slot 0, which the first write of the merge replaced with 1
        assert_eq!(compares[3].array[0].value(), 1);
    }
}
