use super::state::DispatchState;

#[derive(Debug)]
pub struct Observer {
    step: u64,
}

impl Observer {
    pub fn new() -> Self {
        Self { step: 0 }
    }

    pub fn observe(&mut self, state: &DispatchState) {
        self.step += 1;

        for job in &state.ready {
            debug_assert!(
                job.arrival_time <= state.now,
                "ready job {} precedes its arrival (arrival {}, clock {})",
                job.id,
                job.arrival_time,
                state.now
            );
        }

        debug_assert_eq!(
            state.admitted(),
            state.ready.len() + state.finished.len(),
            "every admitted job must be ready or finished"
        );

        let mut prev_finish = 0;
        for record in &state.finished {
            let start = record.start_time.expect("finished record missing start");
            let finish = record.finish_time.expect("finished record missing finish");
            debug_assert!(
                start >= record.job.arrival_time,
                "job {} started before its arrival",
                record.job.id
            );
            debug_assert_eq!(
                finish,
                start + record.job.run_time,
                "job {} run length mismatch",
                record.job.id
            );
            debug_assert!(
                start >= prev_finish,
                "job {} overlaps the previous dispatch",
                record.job.id
            );
            prev_finish = finish;
        }

        debug_assert!(
            state.now >= prev_finish,
            "clock {} trails the last finish {prev_finish}",
            state.now
        );
    }
}
