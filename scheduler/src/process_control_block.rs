use crate::common_types::Timestamp;

/// Where a process is in its lifetime
///
/// Only one process is `Running` at a time and `Finished` is terminal.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ProcessState {
    Waiting,
    Running,
    Finished,
}

/// A process as seen by the simulator
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ProcessControlBlock {
    /// CPU time the process still needs
    ///
    /// Only the preemptive policies decrement it.
    pub remaining_burst_time: u32,
    /// Lower values are scheduled first
    pub priority: u32,
    /// Simulated time at which the process becomes ready
    pub arrival: u32,
    /// Set the first time the process gets the CPU
    pub started: bool,
    state: ProcessState,
}

impl ProcessControlBlock {
    /// Creates a new Process Control Block
    ///
    /// * `remaining_burst_time` - CPU time the process needs
    /// * `priority` - priority of the new process
    /// * `arrival` - time when the process becomes ready
    pub fn new(remaining_burst_time: u32, priority: u32, arrival: u32) -> ProcessControlBlock {
        ProcessControlBlock {
            remaining_burst_time,
            priority,
            arrival,
            started: false,
            state: ProcessState::Waiting,
        }
    }

    pub fn state(&self) -> ProcessState {
        self.state
    }

    pub fn arrival_time(&self) -> Timestamp {
        Timestamp::from(self.arrival)
    }

    pub fn is_finished(&self) -> bool {
        self.state == ProcessState::Finished
    }

    pub fn mark_started(&mut self) {
        self.started = true;
    }

    /// Gives the CPU to the process
    pub fn dispatch(&mut self) {
        debug_assert!(!self.is_finished(), "a finished process was dispatched");

        self.mark_started();
        self.state = ProcessState::Running;
    }

    /// Runs the process for at most `units` units of time and returns the
    /// time it actually ran. The process finishes once its burst reaches 0.
    ///
    /// * `units` - the time slice granted to the process
    pub fn execute(&mut self, units: u32) -> u32 {
        let ran = units.min(self.remaining_burst_time);
        self.remaining_burst_time -= ran;

        if self.remaining_burst_time == 0 {
            self.state = ProcessState::Finished;
        }

        ran
    }

    /// Takes the CPU away from a running process that has not finished
    pub fn preempt(&mut self) {
        if self.state == ProcessState::Running {
            self.state = ProcessState::Waiting;
        }
    }
}
