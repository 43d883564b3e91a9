use super::{Job, Policy, Ticks};

pub struct Hrrn;

impl Policy for Hrrn {
    fn init() -> Self {
        Self
    }

    fn select(&mut self, ready: &[Job], now: Ticks) -> usize {
        let mut best: Option<usize> = None;
        let mut best_ratio = -1.0;

        for (index, job) in ready.iter().enumerate() {
            let ratio = job.response_ratio_at(now);
            let wins = match best {
                None => true,
                Some(best_index) => {
                    let incumbent = &ready[best_index];
                    // Strictly larger ratio wins; equal ratios fall back to
                    // earlier arrival, then smaller id.
                    ratio > best_ratio
                        || (ratio == best_ratio
                            && (job.arrival_time < incumbent.arrival_time
                                || (job.arrival_time == incumbent.arrival_time
                                    && job.id < incumbent.id)))
                }
            };
            if wins {
                best = Some(index);
                best_ratio = ratio;
            }
        }

        best.expect("selection from an empty ready set")
    }
}
