use log::debug;

use crate::comparators::arrival_time_compare;
use crate::statistics::SimulationStats;
use crate::{ReadyQueue, ScheduleResult, SchedulerError, Timestamp};

use super::Scheduler;

/// First come, first served
///
/// Processes run in arrival order. The clock never jumps ahead to an arrival,
/// so `total_run_time` is the final clock value, which is the sum of all
/// bursts.
pub struct FirstComeFirstServe;

impl Scheduler for FirstComeFirstServe {
    fn name(&self) -> &'static str {
        "FCFS"
    }

    fn schedule(&self, ready_queue: &mut ReadyQueue) -> Result<ScheduleResult, SchedulerError> {
        if ready_queue.is_empty() {
            return Ok(ScheduleResult::default());
        }

        ready_queue.sort(arrival_time_compare);
        debug!("FCFS: scheduling {} processes", ready_queue.len());

        let mut stats = SimulationStats::new(ready_queue.len());
        let mut clock = Timestamp::new(0);

        ready_queue.for_each(|pcb| {
            let burst = u64::from(pcb.remaining_burst_time);
            let waiting = clock.elapsed_since(pcb.arrival_time());

            pcb.mark_started();
            stats.record_completion(waiting, waiting + burst);
            clock = clock + burst;
        });

        debug!("FCFS: finished at {}", clock.get());
        Ok(stats.finish(clock.get()))
    }
}
