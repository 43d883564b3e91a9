use std::fmt::Write as _;

use average::Estimate;

use crate::core::state::JobRecord;

#[derive(Debug, PartialEq)]
pub struct Summary {
    pub jobs: usize,
    pub met_deadline: usize,
    pub avg_waiting: f64,
    pub avg_turnaround: f64,
}

impl Summary {
    pub fn from_records(records: &[JobRecord]) -> Self {
        if records.is_empty() {
            return Self {
                jobs: 0,
                met_deadline: 0,
                avg_waiting: 0.0,
                avg_turnaround: 0.0,
            };
        }

        Self {
            jobs: records.len(),
            met_deadline: records
                .iter()
                .filter(|record| record.met_deadline() == Some(true))
                .count(),
            avg_waiting: avg(records.iter().filter_map(|r| r.waiting()).map(|w| w as f64)),
            avg_turnaround: avg(records.iter().filter_map(|r| r.turnaround()).map(|t| t as f64)),
        }
    }

    pub fn missed_deadline(&self) -> usize {
        self.jobs - self.met_deadline
    }
}

fn avg(iter: impl Iterator<Item = f64>) -> f64 {
    iter.collect::<average::Mean>().estimate()
}

/// Render the full report: one CSV row per job in id order, then the
/// aggregate summary. Sorting happens on a local copy; the caller keeps
/// dispatch order.
pub fn render(records: &[JobRecord]) -> String {
    let mut by_id: Vec<&JobRecord> = records.iter().collect();
    by_id.sort_by_key(|record| record.job.id);

    let mut out = String::new();
    out.push_str("HRRN (non-preemptive) simulation report\n");
    out.push_str(
        "Format: id,arrival,runtime,deadline,start,finish,turnaround,waiting,RR_at_dispatch,met_deadline\n",
    );

    for record in by_id {
        let start = record.start_time.expect("report requires completed records");
        let finish = record.finish_time.expect("report requires completed records");
        let ratio = record
            .response_ratio_at_dispatch()
            .expect("report requires completed records");

        let _ = writeln!(
            out,
            "{},{},{},{},{},{},{},{},{:.3},{}",
            record.job.id,
            record.job.arrival_time,
            record.job.run_time,
            record.job.deadline,
            start,
            finish,
            finish - record.job.arrival_time,
            start - record.job.arrival_time,
            ratio,
            if record.met_deadline() == Some(true) {
                "YES"
            } else {
                "NO"
            },
        );
    }

    let summary = Summary::from_records(records);
    let _ = writeln!(out);
    let _ = writeln!(
        out,
        "Summary: processes={}, met_deadline={}, missed_deadline={}",
        summary.jobs,
        summary.met_deadline,
        summary.missed_deadline()
    );
    let _ = writeln!(out, "Average waiting time: {:.2}", summary.avg_waiting);
    let _ = writeln!(out, "Average turnaround time: {:.2}", summary.avg_turnaround);

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::simulate;
    use crate::core::state::Job;

    fn job(id: u64, arrival_time: u64, run_time: u64, deadline: u64) -> Job {
        Job {
            id,
            arrival_time,
            run_time,
            deadline,
        }
    }

    #[test]
    fn renders_one_row_per_job_with_three_decimal_ratio() {
        let finished = simulate(&[job(1, 0, 5, 10)]);
        let text = render(&finished);
        assert!(text.contains("1,0,5,10,0,5,5,0,1.000,YES"));
    }

    #[test]
    fn rows_come_out_in_id_order_regardless_of_dispatch_order() {
        // Job 2 dispatches first (it is the only one ready at clock 0).
        let finished = simulate(&[job(2, 0, 5, 30), job(1, 3, 5, 30)]);
        assert_eq!(finished[0].job.id, 2);

        let text = render(&finished);
        let row_1 = text.find("\n1,").unwrap();
        let row_2 = text.find("\n2,").unwrap();
        assert!(row_1 < row_2);
    }

    #[test]
    fn summary_counts_and_averages() {
        let finished = simulate(&[job(1, 0, 5, 10), job(2, 0, 5, 6)]);
        // Waiting 0 and 5, turnaround 5 and 10; job 2 finishes at 10 > 6.
        let summary = Summary::from_records(&finished);
        assert_eq!(summary.jobs, 2);
        assert_eq!(summary.met_deadline, 1);
        assert_eq!(summary.missed_deadline(), 1);
        assert_eq!(summary.avg_waiting, 2.5);
        assert_eq!(summary.avg_turnaround, 7.5);
    }

    #[test]
    fn missed_deadline_rows_say_no() {
        let finished = simulate(&[job(1, 0, 5, 4)]);
        assert!(render(&finished).contains("1,0,5,4,0,5,5,0,1.000,NO"));
    }

    #[test]
    fn empty_run_reports_zero_averages() {
        let summary = Summary::from_records(&[]);
        assert_eq!(summary.jobs, 0);
        assert_eq!(summary.avg_waiting, 0.0);

        let text = render(&[]);
        assert!(text.contains("Summary: processes=0, met_deadline=0, missed_deadline=0"));
        assert!(text.contains("Average waiting time: 0.00"));
    }
}
