//! Orderings used to sort the ready queue.
//!
//! Every comparator returns `Less` when the first process should run first.

use std::cmp::Ordering;

use crate::ProcessControlBlock;

/// Earlier arrival first
pub fn arrival_time_compare(a: &ProcessControlBlock, b: &ProcessControlBlock) -> Ordering {
    a.arrival.cmp(&b.arrival)
}

/// Shorter remaining burst first, earlier arrival breaks ties
pub fn burst_time_compare(a: &ProcessControlBlock, b: &ProcessControlBlock) -> Ordering {
    a.remaining_burst_time
        .cmp(&b.remaining_burst_time)
        .then_with(|| arrival_time_compare(a, b))
}

/// Lower priority value first, earlier arrival breaks ties
pub fn priority_compare(a: &ProcessControlBlock, b: &ProcessControlBlock) -> Ordering {
    a.priority
        .cmp(&b.priority)
        .then_with(|| arrival_time_compare(a, b))
}
