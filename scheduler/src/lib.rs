//! A process scheduling simulator.
//!
//! This library simulates a single CPU running a fixed set of processes
//! under five policies (FCFS, SJF, priority, round robin and SRTF) and
//! reports the average waiting time, the average turnaround time and the
//! total run time of each run.
//!

use std::num::NonZeroUsize;

mod dyn_array;
pub use crate::dyn_array::{DynArray, MAX_CAPACITY};

mod error;
pub use crate::error::{DynArrayError, LoadError, SchedulerError};

mod common_types;
pub use crate::common_types::{ReadyQueue, Timestamp};

mod process_control_block;
pub use crate::process_control_block::{ProcessControlBlock, ProcessState};

pub mod comparators;

mod statistics;
pub use crate::statistics::ScheduleResult;

mod schedulers;
pub use crate::schedulers::{
    Algorithm, FirstComeFirstServe, PriorityScheduler, RoundRobinScheduler, Scheduler,
    ShortestJobFirst, ShortestRemainingTimeFirst,
};

mod loader;
pub use crate::loader::{
    decode_process_control_blocks, encode_process_control_blocks, load_process_control_blocks,
};


/// Runs first come first served over `ready_queue`
pub fn first_come_first_serve(ready_queue: &mut ReadyQueue) -> Result<ScheduleResult, SchedulerError> {
    FirstComeFirstServe.schedule(ready_queue)
}

/// Runs non-preemptive shortest job first over `ready_queue`
pub fn shortest_job_first(ready_queue: &mut ReadyQueue) -> Result<ScheduleResult, SchedulerError> {
    ShortestJobFirst.schedule(ready_queue)
}

/// Runs non-preemptive priority scheduling over `ready_queue`
pub fn priority(ready_queue: &mut ReadyQueue) -> Result<ScheduleResult, SchedulerError> {
    PriorityScheduler.schedule(ready_queue)
}

/// Runs round robin over `ready_queue`
///
/// * `quantum` - the time a process can run before it is preempted, must be
///               positive
pub fn round_robin(ready_queue: &mut ReadyQueue, quantum: usize) -> Result<ScheduleResult, SchedulerError> {
    let quanta = NonZeroUsize::new(quantum).ok_or(SchedulerError::ZeroQuantum)?;
    RoundRobinScheduler::new(quanta).schedule(ready_queue)
}

/// Runs preemptive shortest remaining time first over `ready_queue`
pub fn shortest_remaining_time_first(
    ready_queue: &mut ReadyQueue,
) -> Result<ScheduleResult, SchedulerError> {
    ShortestRemainingTimeFirst.schedule(ready_queue)
}
