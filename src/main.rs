/*!
 * Scheduling Simulator - Main Entry Point
 *
 * Runs FIFO, SJF, Round-Robin and MLFQ over built-in or file workloads
 * and prints averaged per-process metrics.
 */

use clap::{Args, Parser, Subcommand};
use schedsim::report::{render_comparison, render_report, render_scenarios, write_json};
use schedsim::{init_tracing, Policy, ScenarioRef, SimConfig, Simulation};
use std::path::PathBuf;
use tracing::info;

#[derive(Parser, Debug)]
#[command(author, version, about = "CPU scheduling simulator", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Run one policy on a scenario and print averaged results
    Run {
        /// fifo | sjf | rr | mlfq
        policy: String,

        #[command(flatten)]
        target: Target,

        /// Print every scheduling event of one run
        #[arg(long)]
        trace: bool,
    },

    /// Run every policy on a scenario and print one summary row each
    Compare {
        #[command(flatten)]
        target: Target,
    },

    /// List the built-in scenarios
    Scenarios,
}

#[derive(Args, Debug)]
struct Target {
    /// Built-in scenario id (1-4) or path to a JSON workload file
    scenario: String,

    /// Number of runs to average; values below 1 count as 1
    #[arg(allow_negative_numbers = true)]
    repeat: Option<i64>,

    /// Quantum for rr and mlfq
    #[arg(short, long)]
    quantum: Option<f64>,

    /// Number of MLFQ levels
    #[arg(short, long)]
    levels: Option<usize>,

    /// Save results to a JSON file
    #[arg(short, long)]
    output: Option<PathBuf>,
}

impl Target {
    fn config(&self) -> Result<SimConfig, schedsim::ConfigError> {
        let mut builder = SimConfig::builder();
        if let Some(repeat) = self.repeat {
            builder = builder.with_repeat(repeat);
        }
        if let Some(quantum) = self.quantum {
            builder = builder.with_quantum(quantum);
        }
        if let Some(levels) = self.levels {
            builder = builder.with_mlfq_levels(levels);
        }
        builder.build()
    }

    fn simulation(&self) -> miette::Result<Simulation> {
        let config = self.config()?;
        let workload = ScenarioRef::parse(&self.scenario)?.load()?;
        info!(scenario = workload.label(), processes = workload.len(), repeat = config.repeat, "workload ready");
        Ok(Simulation::new(workload, config))
    }
}

fn main() -> miette::Result<()> {
    init_tracing();
    let cli = Cli::parse();

    match cli.command {
        Command::Run {
            policy,
            target,
            trace,
        } => {
            let policy: Policy = policy.parse()?;
            let sim = target.simulation()?;

            if trace {
                let (_, log) = sim.run_traced(policy);
                println!("--- trace (policy: {policy}, scenario: {}) ---", sim.workload().label());
                for event in &log {
                    println!("{event}");
                }
                println!();
            }

            let report = sim.run(policy)?;
            print!("{}", render_report(&report));

            if let Some(path) = &target.output {
                write_json(path, sim.config(), std::slice::from_ref(&report))?;
            }
        }
        Command::Compare { target } => {
            let sim = target.simulation()?;
            let reports = sim.compare()?;

            for report in &reports {
                println!("{}", render_report(report));
            }
            print!("{}", render_comparison(sim.workload().label(), &reports));

            if let Some(path) = &target.output {
                write_json(path, sim.config(), &reports)?;
            }
        }
        Command::Scenarios => {
            println!("{}", render_scenarios());
        }
    }

    Ok(())
}
