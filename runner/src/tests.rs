use std::fs;
use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use log::LevelFilter;
use scheduler::{encode_process_control_blocks, Algorithm, ProcessControlBlock, ScheduleResult};

use crate::cli::RunnerArgs;
use crate::logger::{self, level_for};
use crate::report::{append_report, format_report, local_timestamp};
use crate::run;

fn scratch_file(name: &str) -> PathBuf {
    std::env::temp_dir().join(format!("runner-{}-{}", std::process::id(), name))
}

fn write_pcb_file(name: &str, processes: &[ProcessControlBlock]) -> PathBuf {
    let path = scratch_file(name);
    fs::write(&path, encode_process_control_blocks(processes).unwrap()).unwrap();
    path
}

fn args(pcb_file: PathBuf, algorithm: Algorithm, quantum: Option<usize>) -> RunnerArgs {
    RunnerArgs {
        pcb_file,
        algorithm,
        quantum,
        report: None,
        verbose: 0,
    }
}

#[test]
fn parses_command_line() {
    let args = RunnerArgs::try_parse_from(["runner", "pcb.bin", "rr", "4", "-vv"]).unwrap();

    assert_eq!(args.pcb_file, PathBuf::from("pcb.bin"));
    assert_eq!(args.algorithm, Algorithm::RoundRobin);
    assert_eq!(args.quantum, Some(4));
    assert_eq!(args.verbose, 2);
    assert!(args.report.is_none());
}

#[test]
fn rejects_unknown_algorithm() {
    assert!(RunnerArgs::try_parse_from(["runner", "pcb.bin", "EDF"]).is_err());
}

#[test]
fn verbosity_levels() {
    assert_eq!(level_for(0), LevelFilter::Warn);
    assert_eq!(level_for(1), LevelFilter::Info);
    assert_eq!(level_for(2), LevelFilter::Debug);
    assert_eq!(level_for(9), LevelFilter::Trace);
}

#[test]
fn runs_fcfs_over_a_file() {
    let path = write_pcb_file(
        "fcfs.bin",
        &[
            ProcessControlBlock::new(10, 1, 0),
            ProcessControlBlock::new(5, 2, 1),
            ProcessControlBlock::new(8, 3, 2),
        ],
    );

    let result = run(&args(path.clone(), Algorithm::FirstComeFirstServe, None)).unwrap();
    fs::remove_file(&path).unwrap();

    assert_eq!(result.average_turnaround_time as i32, 15);
    assert_eq!(result.average_waiting_time as i32, 7);
    assert_eq!(result.total_run_time, 23);
}

#[test]
fn round_robin_without_quantum_fails() {
    let path = write_pcb_file("rr.bin", &[ProcessControlBlock::new(3, 0, 0)]);

    let outcome = run(&args(path.clone(), Algorithm::RoundRobin, None));
    fs::remove_file(&path).unwrap();

    assert!(outcome.is_err());
}

#[test]
fn missing_file_fails() {
    let path = scratch_file("missing.bin");

    assert!(run(&args(path, Algorithm::ShortestJobFirst, None)).is_err());
}

#[test]
fn report_layout() {
    let result = ScheduleResult {
        average_waiting_time: 7.333333,
        average_turnaround_time: 15.0,
        total_run_time: 23,
    };

    let report = format_report(Algorithm::FirstComeFirstServe, &result, "2024-01-02 03:04:05");

    assert_eq!(
        report,
        "---------2024-01-02 03:04:05 FCFS-----------\n\
         Average wait time: 7.33\n\
         Average turnaround time: 15.00\n\
         Total run time: 23\n\
         ---------------------------------------\n"
    );
}

#[test]
fn timestamp_is_local_date_and_time() {
    let timestamp = local_timestamp();
    let bytes = timestamp.as_bytes();

    assert_eq!(bytes.len(), "2024-01-02 03:04:05".len(), "{}", timestamp);
    for (index, &byte) in bytes.iter().enumerate() {
        match index {
            4 | 7 => assert_eq!(byte, b'-'),
            10 => assert_eq!(byte, b' '),
            13 | 16 => assert_eq!(byte, b':'),
            _ => assert!(byte.is_ascii_digit(), "{}", timestamp),
        }
    }
}

#[test]
fn second_logger_install_is_a_reportable_error() {
    /* Whichever call installs the logger first, the second one fails */
    let _ = logger::init(0);

    let err = logger::init(0)
        .context("failed to install the logger")
        .unwrap_err();

    assert_eq!(err.to_string(), "failed to install the logger");
    assert_eq!(err.chain().count(), 2);
}

#[test]
fn reports_are_appended() {
    let path = scratch_file("report.md");
    let _ = fs::remove_file(&path);

    append_report(&path, "first\n").unwrap();
    append_report(&path, "second\n").unwrap();

    let contents = fs::read_to_string(&path).unwrap();
    fs::remove_file(&path).unwrap();

    assert_eq!(contents, "first\nsecond\n");
}
