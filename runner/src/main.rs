mod cli;
mod logger;
mod report;

use anyhow::{Context, Result};
use clap::Parser;
use log::info;
use scheduler::{load_process_control_blocks, ScheduleResult};

use cli::RunnerArgs;
use report::{append_report, format_report, local_timestamp};

fn main() -> Result<()> {
    let args = RunnerArgs::parse();
    logger::init(args.verbose).context("failed to install the logger")?;

    let result = run(&args)?;
    let report = format_report(args.algorithm, &result, &local_timestamp());

    match &args.report {
        Some(path) => {
            append_report(path, &report)
                .with_context(|| format!("failed to write the report to {}", path.display()))?;
            info!("report appended to {}", path.display());
        }
        None => print!("{}", report),
    }

    Ok(())
}

/// Loads the PCB file and runs the selected policy over it
fn run(args: &RunnerArgs) -> Result<ScheduleResult> {
    let mut ready_queue = load_process_control_blocks(&args.pcb_file)
        .with_context(|| format!("failed to load {}", args.pcb_file.display()))?;

    let scheduler = args.algorithm.scheduler(args.quantum)?;
    info!(
        "running {} over {} processes from {}",
        scheduler.name(),
        ready_queue.len(),
        args.pcb_file.display()
    );

    let result = scheduler
        .schedule(&mut ready_queue)
        .with_context(|| format!("{} failed", scheduler.name()))?;

    Ok(result)
}

#[cfg(test)]
mod tests;
