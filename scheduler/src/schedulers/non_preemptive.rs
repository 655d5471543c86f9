use std::cmp::Ordering;

use log::debug;

use crate::comparators::{burst_time_compare, priority_compare};
use crate::statistics::SimulationStats;
use crate::{ProcessControlBlock, ReadyQueue, ScheduleResult, SchedulerError, Timestamp};

use super::Scheduler;

/// Shortest job first, without preemption
///
/// The queue is ordered once by burst (then arrival); the order is not
/// revisited as the clock moves.
pub struct ShortestJobFirst;

/// Priority scheduling without preemption, lower value first
pub struct PriorityScheduler;

impl Scheduler for ShortestJobFirst {
    fn name(&self) -> &'static str {
        "SJF"
    }

    fn schedule(&self, ready_queue: &mut ReadyQueue) -> Result<ScheduleResult, SchedulerError> {
        Ok(run_in_order(self.name(), ready_queue, burst_time_compare))
    }
}

impl Scheduler for PriorityScheduler {
    fn name(&self) -> &'static str {
        "P"
    }

    fn schedule(&self, ready_queue: &mut ReadyQueue) -> Result<ScheduleResult, SchedulerError> {
        Ok(run_in_order(self.name(), ready_queue, priority_compare))
    }
}

/// Sorts the queue with `compare` and runs every process to completion in
/// that order. The clock jumps to a process's arrival when the CPU would
/// otherwise be idle.
///
/// `total_run_time` is the sum of the bursts scheduled.
fn run_in_order<F>(name: &str, ready_queue: &mut ReadyQueue, compare: F) -> ScheduleResult
where
    F: FnMut(&ProcessControlBlock, &ProcessControlBlock) -> Ordering,
{
    if ready_queue.is_empty() {
        return ScheduleResult::default();
    }

    ready_queue.sort(compare);
    debug!("{}: scheduling {} processes", name, ready_queue.len());

    let mut stats = SimulationStats::new(ready_queue.len());
    let mut clock = Timestamp::new(0);
    let mut total_run_time = 0u64;

    ready_queue.for_each(|pcb| {
        let burst = u64::from(pcb.remaining_burst_time);

        clock.advance_to(pcb.arrival_time());
        let waiting = clock.elapsed_since(pcb.arrival_time());

        pcb.mark_started();
        stats.record_completion(waiting, waiting + burst);
        total_run_time += burst;
        clock = clock + burst;
    });

    debug!("{}: finished at {}", name, clock.get());
    stats.finish(total_run_time)
}
