//! Sorting step generators.
//!
//! Both generators snapshot the array *before* any swap, tagging the pair
//! of indices under comparison; the terminal step carries `compared:
//! None` and the fully sorted array.

use serde::{Deserialize, Serialize};

use crate::engine::Trace;

/// One instant of a sorting run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SortStep {
    /// Full snapshot of the sequence at this instant.
    pub array: Vec<i32>,
    /// Indices under comparison, or `None` for the terminal step.
    pub compared: Option<(usize, usize)>,
}

/// Generate the step trace of bubble sort over `input`.
///
/// Adjacent-swap sort with early exit: a pass with zero swaps ends the
/// run. One snapshot is emitted per comparison (before the swap), plus a
/// single terminal snapshot, so the trace length is exactly the number of
/// comparisons performed plus one.
#[must_use]
pub fn bubble_sort_steps(input: &[i32]) -> Trace<SortStep> {
    let mut steps = Vec::new();
    let mut array = input.to_vec();
    let n = array.len();

    for i in 0..n {
        let mut swapped = false;
        for j in 0..n - i - 1 {
            // Record the state before a possible swap.
            steps.push(SortStep {
                array: array.clone(),
                compared: Some((j, j + 1)),
            });
            if array[j] > array[j + 1] {
                array.swap(j, j + 1);
                swapped = true;
            }
        }
        if !swapped {
            break;
        }
    }

    steps.push(SortStep {
        array,
        compared: None,
    });
    Trace::new(steps)
}

/// Generate the step trace of selection sort over `input`.
///
/// For each boundary the inner loop scans for the minimum of the unsorted
/// suffix, snapshotting `(min_index, j)` before each check; `min_index`
/// is its value at emission time, so it moves as smaller elements are
/// found. The swap at the end of each boundary is not snapshotted on its
/// own.
#[must_use]
pub fn selection_sort_steps(input: &[i32]) -> Trace<SortStep> {
    let mut steps = Vec::new();
    let mut array = input.to_vec();
    let n = array.len();

    for i in 0..n.saturating_sub(1) {
        let mut min_index = i;
        for j in (i + 1)..n {
            steps.push(SortStep {
                array: array.clone(),
                compared: Some((min_index, j)),
            });
            if array[j] < array[min_index] {
                min_index = j;
            }
        }
        if min_index != i {
            array.swap(i, min_index);
        }
    }

    steps.push(SortStep {
        array,
        compared: None,
    });
    Trace::new(steps)
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        /// Falsification: both sorts end on the ascending sort of the
        /// input, and every snapshot conserves the multiset of values.
        #[test]
        fn prop_sorting_correct(input in prop::collection::vec(-1000i32..1000, 0..32)) {
            let mut expected = input.clone();
            expected.sort_unstable();

            for trace in [bubble_sort_steps(&input), selection_sort_steps(&input)] {
                let last = trace.last().expect("terminal step always present");
                prop_assert_eq!(&last.array, &expected);
                prop_assert_eq!(last.compared, None);
                for step in &trace {
                    let mut values = step.array.clone();
                    values.sort_unstable();
                    prop_assert_eq!(&values, &expected);
                }
            }
        }

        /// Falsification: bubble sort's trace length is comparisons + 1,
        /// bounded by the full quadratic pass count.
        #[test]
        fn prop_bubble_step_bound(input in prop::collection::vec(-100i32..100, 0..24)) {
            let n = input.len();
            let trace = bubble_sort_steps(&input);
            prop_assert!(trace.len() >= 1);
            prop_assert!(trace.len() <= n * (n + 1) / 2 + 1);
        }
    }
}
