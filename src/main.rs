use std::path::PathBuf;
use std::process;

use clap::Parser;
use hrrn_model::{input, report, workload, Hrrn, Sim};

/// Non-preemptive HRRN dispatch simulator.
#[derive(Parser, Debug)]
#[command(name = "hrrn_model", version)]
struct Cli {
    /// Job table CSV (id,arrival,runtime,deadline); generated workload when omitted
    csv: Option<PathBuf>,

    /// Size of the fixed generated workload
    #[arg(long, default_value_t = 100)]
    count: usize,

    /// Generate a seeded random workload instead of the fixed scheme
    #[arg(long)]
    seed: Option<u64>,

    /// Tick horizon for the seeded random workload
    #[arg(long, default_value_t = 500)]
    ticks: u64,

    /// Print per-step dispatch events
    #[arg(long)]
    trace: bool,
}

fn main() {
    let cli = Cli::parse();

    let jobs = match &cli.csv {
        Some(path) => match input::load_csv(path) {
            Ok(jobs) => jobs,
            Err(err) => {
                eprintln!("Error: {err}");
                eprintln!(
                    "CSV format: id,arrival,runtime,deadline (deadline absolute). \
                     Lines starting with # are ignored."
                );
                process::exit(1);
            }
        },
        None => match cli.seed {
            Some(seed) => workload::bernoulli_jobs(cli.ticks, 0.3, 0.3, 2, 6, 10, seed),
            None => workload::assignment_set(cli.count),
        },
    };

    let mut sim = Sim::<Hrrn>::new(jobs);

    while !sim.all_jobs_completed() {
        let now = sim.now();
        let events = sim.step();

        if cli.trace {
            for event in events {
                println!("t={} {:?}", now, event);
            }
        }
    }

    let finished = sim.into_finished();
    print!("{}", report::render(&finished));
}
