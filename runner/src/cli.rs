use std::path::PathBuf;

use clap::{ArgAction, Parser};
use scheduler::{Algorithm, SchedulerError};

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct RunnerArgs {
    /// The binary file holding the process control blocks
    pub pcb_file: PathBuf,

    /// The scheduling algorithm to run (FCFS, SJF, P, RR or SRT)
    #[arg(value_parser = parse_algorithm)]
    pub algorithm: Algorithm,

    /// The time quantum, required by RR
    pub quantum: Option<usize>,

    /// Append the report to this file instead of printing it
    #[arg(short, long)]
    pub report: Option<PathBuf>,

    /// Log more (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

fn parse_algorithm(name: &str) -> Result<Algorithm, String> {
    name.parse().map_err(|err: SchedulerError| err.to_string())
}
