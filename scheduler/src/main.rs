use anyhow::{Context, Result};
use clap::Parser;
use crossterm::{
    execute,
    terminal::{Clear, ClearType},
};
use scheduling_visualizer::{
    input,
    scheduler::{compare_all, render_plain, Algorithm, ScheduleRunner, Statistics},
};
use std::{io, time::Duration};

/// Visualize CPU scheduling policies over a fixed workload.
#[derive(Debug, Parser)]
#[command(version, about)]
struct Cli {
    /// Scheduling algorithm to simulate
    #[arg(short, long, value_enum, default_value_t = Algorithm::FirstComeFirstServed)]
    algorithm: Algorithm,

    /// Comma separated process names
    #[arg(long, default_value = "P1,P2,P3")]
    processes: String,

    /// Comma separated burst times
    #[arg(long, default_value = "5,3,8")]
    burst_times: String,

    /// Comma separated arrival times
    #[arg(long, default_value = "0,1,2")]
    arrival_times: String,

    /// Comma separated priorities, lower runs first
    #[arg(long, default_value = "")]
    priorities: String,

    /// Round robin time quantum
    #[arg(short = 'q', long, default_value = "2", allow_hyphen_values = true)]
    time_quantum: String,

    /// Milliseconds between replay ticks
    #[arg(long, default_value_t = 500)]
    tick_rate_ms: u64,

    /// Print the chart and averages instead of opening the terminal UI
    #[arg(long)]
    plain: bool,

    /// Print the averages of every algorithm
    #[arg(long, conflicts_with = "plain")]
    compare: bool,

    /// Width of the plain chart in columns
    #[arg(long, default_value_t = 80)]
    width: u16,
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();
    let workload = input::collect_workload(
        &cli.processes,
        &cli.burst_times,
        &cli.arrival_times,
        &cli.priorities,
    )
    .context("invalid workload")?;
    let quantum = input::parse_quantum(&cli.time_quantum).context("invalid time quantum")?;

    if cli.compare {
        for (algorithm, schedule) in compare_all(&workload, quantum) {
            let statistics = Statistics::compute(&workload, &schedule);
            println!(
                "{:<30} waiting {:>8.2}  turnaround {:>8.2}",
                algorithm.name(),
                statistics.average_waiting_time,
                statistics.average_turnaround_time
            );
        }
        return Ok(());
    }

    if cli.plain {
        let schedule = cli.algorithm.schedule(&workload, quantum);
        let statistics = Statistics::compute(&workload, &schedule);
        println!("{}", cli.algorithm);
        print!("{}", render_plain(&schedule, cli.width));
        println!(
            "Average Waiting Time: {:.2}",
            statistics.average_waiting_time
        );
        println!(
            "Average Turnaround Time: {:.2}",
            statistics.average_turnaround_time
        );
        return Ok(());
    }

    execute!(io::stdout(), Clear(ClearType::All))?;

    let mut runner = ScheduleRunner::with_tick_rate(
        workload,
        cli.algorithm,
        quantum,
        Duration::from_millis(cli.tick_rate_ms),
    )
    .context("failed to set up the terminal")?;

    while runner.run()? {}
    drop(runner);

    execute!(io::stdout(), Clear(ClearType::All))?;
    Ok(())
}
