use log::{debug, trace};

use crate::comparators::burst_time_compare;
use crate::statistics::SimulationStats;
use crate::{DynArrayError, ReadyQueue, ScheduleResult, SchedulerError, Timestamp};

use super::Scheduler;

/// Shortest remaining time first, preemptive
///
/// Every unit of time the queue is sorted again by remaining burst (then
/// arrival) and the first process that has already arrived runs for one
/// unit. When nothing has arrived yet the clock jumps to the next arrival.
/// `total_run_time` is the final clock value.
///
/// Re-sorting every tick costs O(n log n) per unit of work, which is fine
/// for the input sizes this simulator is fed.
pub struct ShortestRemainingTimeFirst;

impl Scheduler for ShortestRemainingTimeFirst {
    fn name(&self) -> &'static str {
        "SRT"
    }

    fn schedule(&self, ready_queue: &mut ReadyQueue) -> Result<ScheduleResult, SchedulerError> {
        if ready_queue.is_empty() {
            return Ok(ScheduleResult::default());
        }

        let processes = ready_queue.len();
        let service_time: u64 = ready_queue
            .iter()
            .map(|pcb| u64::from(pcb.remaining_burst_time))
            .sum();

        /* One tick per unit of work, plus at most one idle jump and one
        removal per process */
        let tick_budget = service_time + 2 * processes as u64;
        let mut ticks = 0u64;

        debug!("SRT: scheduling {} processes", processes);

        let mut stats = SimulationStats::new(processes);
        let mut clock = Timestamp::new(0);

        while !ready_queue.is_empty() {
            if ticks >= tick_budget {
                return Err(SchedulerError::SimulationDiverged { ticks });
            }
            ticks += 1;

            ready_queue.sort(burst_time_compare);

            let next = ready_queue
                .iter()
                .position(|pcb| pcb.arrival_time() <= clock);

            let Some(index) = next else {
                /* Nothing has arrived yet, the CPU idles until something does */
                if let Some(arrival) = ready_queue.iter().map(|pcb| pcb.arrival_time()).min() {
                    trace!("SRT: idle from {} to {}", clock.get(), arrival.get());
                    clock.advance_to(arrival);
                }
                continue;
            };

            let len = ready_queue.len();
            let pcb = ready_queue
                .at_mut(index)
                .ok_or(DynArrayError::OutOfBounds { index, len })?;

            if !pcb.started {
                trace!("SRT: process arrived at {} starts at {}", pcb.arrival, clock.get());
            }

            pcb.dispatch();
            let ran = pcb.execute(1);
            clock = clock + u64::from(ran);

            if pcb.is_finished() {
                let turnaround = clock.elapsed_since(pcb.arrival_time());
                trace!("SRT: process arrived at {} finished at {}", pcb.arrival, clock.get());

                ready_queue.erase(index)?;
                stats.record_turnaround(turnaround);
            } else {
                pcb.preempt();
            }
        }

        debug_assert_eq!(stats.completed(), processes);
        debug!("SRT: finished at {} after {} ticks", clock.get(), ticks);

        Ok(stats.finish_preemptive(service_time, clock.get()))
    }
}
