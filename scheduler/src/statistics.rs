/// Aggregate statistics of one simulation run
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ScheduleResult {
    pub average_waiting_time: f32,
    pub average_turnaround_time: f32,
    /// Clock units; what is summed depends on the policy
    pub total_run_time: u64,
}

/// Running totals collected while a policy simulates the ready queue
#[derive(Clone, Debug)]
pub(crate) struct SimulationStats {
    /// Process count captured before the simulation starts
    processes: usize,
    completed: usize,
    total_waiting_time: u64,
    total_turnaround_time: u64,
}

impl SimulationStats {
    pub(crate) fn new(processes: usize) -> Self {
        Self {
            processes,
            completed: 0,
            total_waiting_time: 0,
            total_turnaround_time: 0,
        }
    }

    #[inline]
    pub(crate) fn record_completion(&mut self, waiting: u64, turnaround: u64) {
        self.completed += 1;
        self.total_waiting_time += waiting;
        self.total_turnaround_time += turnaround;
    }

    /// Preemptive policies only learn the turnaround of a process; its wait
    /// is settled in `finish_preemptive`.
    #[inline]
    pub(crate) fn record_turnaround(&mut self, turnaround: u64) {
        self.completed += 1;
        self.total_turnaround_time += turnaround;
    }

    pub(crate) fn completed(&self) -> usize {
        self.completed
    }

    pub(crate) fn finish(&self, total_run_time: u64) -> ScheduleResult {
        if self.processes == 0 {
            return ScheduleResult::default();
        }

        let processes = self.processes as f32;
        ScheduleResult {
            average_waiting_time: self.total_waiting_time as f32 / processes,
            average_turnaround_time: self.total_turnaround_time as f32 / processes,
            total_run_time,
        }
    }

    /// Total wait is the total turnaround minus the CPU time every process
    /// originally asked for.
    ///
    /// * `service_time` - sum of the bursts before the simulation started
    /// * `total_run_time` - the policy's run time figure
    pub(crate) fn finish_preemptive(mut self, service_time: u64, total_run_time: u64) -> ScheduleResult {
        self.total_waiting_time = self.total_turnaround_time.saturating_sub(service_time);
        self.finish(total_run_time)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_run_is_all_zeros() {
        assert_eq!(SimulationStats::new(0).finish(0), ScheduleResult::default());
    }

    #[test]
    fn averages_over_process_count() {
        let mut stats = SimulationStats::new(2);
        stats.record_completion(0, 4);
        stats.record_completion(3, 5);

        let result = stats.finish(9);
        assert_eq!(result.average_waiting_time, 1.5);
        assert_eq!(result.average_turnaround_time, 4.5);
        assert_eq!(result.total_run_time, 9);
        assert_eq!(stats.completed(), 2);
    }

    #[test]
    fn preemptive_wait_is_turnaround_minus_service() {
        let mut stats = SimulationStats::new(3);
        for turnaround in [7, 8, 9] {
            stats.record_turnaround(turnaround);
        }

        let result = stats.finish_preemptive(9, 24);
        assert_eq!(result.average_waiting_time, 5.0);
        assert_eq!(result.average_turnaround_time, 8.0);
    }
}
