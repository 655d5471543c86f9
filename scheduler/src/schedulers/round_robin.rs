use std::num::NonZeroUsize;

use log::{debug, trace};

use crate::comparators::arrival_time_compare;
use crate::statistics::SimulationStats;
use crate::{ReadyQueue, ScheduleResult, SchedulerError, Timestamp};

use super::Scheduler;

/// Round robin with a fixed time quanta
///
/// `ready_queue` is put in arrival order and holds the processes that have
/// not arrived yet. Arrived processes wait in a FIFO. The front of the FIFO
/// runs for at most one quanta, then either finishes or goes to the back,
/// behind everything that arrived while it ran. The clock only jumps ahead
/// when the FIFO is empty. `total_run_time` is the sum of the turnaround
/// times of all processes.
pub struct RoundRobinScheduler {
    /// The maximum time a process can run before being preempted
    quanta: NonZeroUsize,
}

impl RoundRobinScheduler {
    pub fn new(timeslice: NonZeroUsize) -> RoundRobinScheduler {
        RoundRobinScheduler { quanta: timeslice }
    }
}

/// Moves every process that arrived by `clock` from `pending` to `ready`
fn admit_arrivals(
    pending: &mut ReadyQueue,
    ready: &mut ReadyQueue,
    clock: Timestamp,
) -> Result<(), SchedulerError> {
    while pending
        .front()
        .is_some_and(|pcb| pcb.arrival_time() <= clock)
    {
        let pcb = pending.extract_front()?;
        trace!("RR: process arrived at {} admitted at {}", pcb.arrival, clock.get());
        ready.push_back(pcb)?;
    }

    Ok(())
}

impl Scheduler for RoundRobinScheduler {
    fn name(&self) -> &'static str {
        "RR"
    }

    fn schedule(&self, ready_queue: &mut ReadyQueue) -> Result<ScheduleResult, SchedulerError> {
        if ready_queue.is_empty() {
            return Ok(ScheduleResult::default());
        }

        ready_queue.sort(arrival_time_compare);

        let processes = ready_queue.len();
        let service_time: u64 = ready_queue
            .iter()
            .map(|pcb| u64::from(pcb.remaining_burst_time))
            .sum();
        /* Bursts are 32 bit, so a larger quanta never preempts anything */
        let quanta = u32::try_from(self.quanta.get()).unwrap_or(u32::MAX);

        debug!("RR: scheduling {} processes with quanta {}", processes, quanta);

        let mut stats = SimulationStats::new(processes);
        let mut clock = Timestamp::new(0);
        let mut total_run_time = 0u64;
        let mut ready = ReadyQueue::new(processes)?;

        loop {
            admit_arrivals(ready_queue, &mut ready, clock)?;

            if ready.is_empty() {
                match ready_queue.front() {
                    Some(next) => {
                        clock.advance_to(next.arrival_time());
                        continue;
                    }
                    None => break,
                }
            }

            let mut pcb = ready.extract_front()?;
            pcb.dispatch();

            if pcb.remaining_burst_time <= quanta {
                let ran = pcb.execute(pcb.remaining_burst_time);
                clock = clock + u64::from(ran);

                let turnaround = clock.elapsed_since(pcb.arrival_time());
                stats.record_turnaround(turnaround);
                total_run_time += turnaround;

                trace!("RR: process arrived at {} finished at {}", pcb.arrival, clock.get());
            } else {
                let ran = pcb.execute(quanta);
                clock = clock + u64::from(ran);

                pcb.preempt();
                trace!(
                    "RR: process arrived at {} preempted at {}, {} left",
                    pcb.arrival,
                    clock.get(),
                    pcb.remaining_burst_time
                );
                /* Arrivals during the slice queue up ahead of the preempted process */
                admit_arrivals(ready_queue, &mut ready, clock)?;
                ready.push_back(pcb)?;
            }
        }

        debug_assert_eq!(stats.completed(), processes);
        debug!("RR: finished at {}", clock.get());

        Ok(stats.finish_preemptive(service_time, total_run_time))
    }
}
