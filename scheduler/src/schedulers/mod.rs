//! The scheduling policies.
//!
//! Each policy consumes a ready queue and produces a `ScheduleResult`.
//! FCFS, SJF and priority sort the queue once and sweep it; round robin and
//! SRTF mutate it while the simulated clock advances.

use std::fmt;
use std::num::NonZeroUsize;
use std::str::FromStr;

use crate::{ReadyQueue, ScheduleResult, SchedulerError};

mod fcfs;
pub use fcfs::FirstComeFirstServe;

mod non_preemptive;
pub use non_preemptive::{PriorityScheduler, ShortestJobFirst};

mod round_robin;
pub use round_robin::RoundRobinScheduler;

mod srtf;
pub use srtf::ShortestRemainingTimeFirst;

/// A scheduling policy
pub trait Scheduler {
    /// Short name of the policy, as used on the command line
    fn name(&self) -> &'static str;

    /// Simulates the policy over `ready_queue`
    ///
    /// The queue may be sorted, drained or otherwise mutated. An empty queue
    /// yields a zeroed result.
    fn schedule(&self, ready_queue: &mut ReadyQueue) -> Result<ScheduleResult, SchedulerError>;
}

/// The policies that can be picked by name
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Algorithm {
    FirstComeFirstServe,
    ShortestJobFirst,
    Priority,
    RoundRobin,
    ShortestRemainingTimeFirst,
}

impl Algorithm {
    pub const ALL: [Algorithm; 5] = [
        Algorithm::FirstComeFirstServe,
        Algorithm::ShortestJobFirst,
        Algorithm::Priority,
        Algorithm::RoundRobin,
        Algorithm::ShortestRemainingTimeFirst,
    ];

    pub fn token(&self) -> &'static str {
        match self {
            Algorithm::FirstComeFirstServe => "FCFS",
            Algorithm::ShortestJobFirst => "SJF",
            Algorithm::Priority => "P",
            Algorithm::RoundRobin => "RR",
            Algorithm::ShortestRemainingTimeFirst => "SRT",
        }
    }

    /// Builds the policy
    ///
    /// * `quantum` - time slice, required by round robin and ignored by the
    ///               other policies
    pub fn scheduler(&self, quantum: Option<usize>) -> Result<Box<dyn Scheduler>, SchedulerError> {
        let scheduler: Box<dyn Scheduler> = match self {
            Algorithm::FirstComeFirstServe => Box::new(FirstComeFirstServe),
            Algorithm::ShortestJobFirst => Box::new(ShortestJobFirst),
            Algorithm::Priority => Box::new(PriorityScheduler),
            Algorithm::RoundRobin => {
                let quantum = quantum.ok_or(SchedulerError::MissingQuantum)?;
                let quanta = NonZeroUsize::new(quantum).ok_or(SchedulerError::ZeroQuantum)?;
                Box::new(RoundRobinScheduler::new(quanta))
            }
            Algorithm::ShortestRemainingTimeFirst => Box::new(ShortestRemainingTimeFirst),
        };

        Ok(scheduler)
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.token())
    }
}

impl FromStr for Algorithm {
    type Err = SchedulerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Algorithm::ALL
            .into_iter()
            .find(|algorithm| algorithm.token().eq_ignore_ascii_case(s))
            .ok_or_else(|| SchedulerError::UnknownAlgorithm(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_tokens_case_insensitively() {
        assert_eq!("fcfs".parse::<Algorithm>(), Ok(Algorithm::FirstComeFirstServe));
        assert_eq!("SJF".parse::<Algorithm>(), Ok(Algorithm::ShortestJobFirst));
        assert_eq!("p".parse::<Algorithm>(), Ok(Algorithm::Priority));
        assert_eq!("Rr".parse::<Algorithm>(), Ok(Algorithm::RoundRobin));
        assert_eq!("SRT".parse::<Algorithm>(), Ok(Algorithm::ShortestRemainingTimeFirst));
        assert_eq!(
            "lottery".parse::<Algorithm>(),
            Err(SchedulerError::UnknownAlgorithm("lottery".to_string()))
        );
    }

    #[test]
    fn round_robin_needs_a_positive_quantum() {
        assert_eq!(
            Algorithm::RoundRobin.scheduler(None).err(),
            Some(SchedulerError::MissingQuantum)
        );
        assert_eq!(
            Algorithm::RoundRobin.scheduler(Some(0)).err(),
            Some(SchedulerError::ZeroQuantum)
        );
        assert_eq!(Algorithm::RoundRobin.scheduler(Some(4)).map(|s| s.name()).ok(), Some("RR"));
    }

    #[test]
    fn names_match_tokens() {
        for algorithm in Algorithm::ALL {
            let scheduler = algorithm.scheduler(Some(2)).unwrap();
            assert_eq!(scheduler.name(), algorithm.token());
        }
    }
}
