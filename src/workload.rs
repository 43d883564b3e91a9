use rand::prelude::*;

use crate::core::state::{Job, Ticks};

/// The fixed assignment scheme: the first ten jobs arrive together at zero,
/// the rest at five-tick spacing; run times and relative deadlines cycle
/// with the id.
pub fn assignment_set(count: usize) -> Vec<Job> {
    (0..count as u64)
        .map(|id| {
            let arrival_time = if id < 10 { 0 } else { 5 * (id - 9) };
            let run_time = ((id % 10) + 1) * 5;
            let relative_deadline = ((id % 10) + 1) * 10;

            Job {
                id,
                arrival_time,
                run_time,
                deadline: arrival_time + relative_deadline,
            }
        })
        .collect()
}

/// Seeded random workload: at each tick a job arrives with probability
/// `p_arrival`, short with probability `p_short`. Deadlines get `slack`
/// ticks past the earliest possible finish, so loaded sets miss some.
pub fn bernoulli_jobs(
    ticks: Ticks,
    p_arrival: f64,
    p_short: f64,
    short_ticks: Ticks,
    long_ticks: Ticks,
    slack: Ticks,
    seed: u64,
) -> Vec<Job> {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut jobs = Vec::new();

    for t in 0..ticks {
        if rng.random::<f64>() < p_arrival {
            let run_time = if rng.random::<f64>() < p_short {
                short_ticks
            } else {
                long_ticks
            };

            jobs.push(Job {
                id: jobs.len() as u64,
                arrival_time: t,
                run_time,
                deadline: t + run_time + slack,
            });
        }
    }

    jobs
}
