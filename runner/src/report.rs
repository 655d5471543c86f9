use std::fs::OpenOptions;
use std::io::{self, Write};
use std::path::Path;
use chrono::Local;
use scheduler::{Algorithm, ScheduleResult};

const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// The current local date and time, as it appears in a report header
pub fn local_timestamp() -> String {
    Local::now().format(TIMESTAMP_FORMAT).to_string()
}

/// Formats one report block
///
/// * `algorithm` - the policy that produced `result`
/// * `result` - the statistics to report
/// * `timestamp` - when the run happened, see `local_timestamp`
pub fn format_report(algorithm: Algorithm, result: &ScheduleResult, timestamp: &str) -> String {
    format!(
        "---------{} {}-----------\n\
         Average wait time: {:.2}\n\
         Average turnaround time: {:.2}\n\
         Total run time: {}\n\
         ---------------------------------------\n",
        timestamp,
        algorithm,
        result.average_waiting_time,
        result.average_turnaround_time,
        result.total_run_time
    )
}

/// Appends `report` to the file at `path`, creating it if needed
pub fn append_report(path: &Path, report: &str) -> io::Result<()> {
    let mut file = OpenOptions::new().create(true).append(true).open(path)?;
    file.write_all(report.as_bytes())
}
