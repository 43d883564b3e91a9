use super::{
    event::DispatchEvent,
    observer::Observer,
    state::{DispatchState, Job, JobRecord, Ticks},
};
use crate::policy::{Hrrn, Policy};

pub struct Sim<P: Policy> {
    state: DispatchState,
    policy: P,
    observer: Observer,
}

impl<P: Policy> Sim<P> {
    pub fn new(jobs: Vec<Job>) -> Self {
        Self {
            state: DispatchState::new(jobs),
            policy: P::init(),
            observer: Observer::new(),
        }
    }

    // One admission/selection cycle: either a single idle skip or a single
    // non-preemptive dispatch. A no-op once every job has finished.
    pub fn step(&mut self) -> Vec<DispatchEvent> {
        let mut events = Vec::new();
        if self.state.all_jobs_completed() {
            return events;
        }

        let already_ready = self.state.ready.len();
        self.state.admit_arrivals();
        for job in &self.state.ready[already_ready..] {
            events.push(DispatchEvent::JobAdmitted {
                job: job.id,
                at: self.state.now,
            });
        }

        if self.state.ready.is_empty() {
            let next = self
                .state
                .next_arrival()
                .expect("pending job must exist while unfinished jobs remain");
            self.state.advance_to(next);
            events.push(DispatchEvent::CpuIdle { until: next });
        } else {
            let index = self.policy.select(&self.state.ready, self.state.now);
            let ratio = self.state.ready[index].response_ratio_at(self.state.now);
            let record = self.state.commit(index);
            events.push(DispatchEvent::JobDispatched {
                job: record.job.id,
                start: record.start_time.expect("start set on commit"),
                finish: record.finish_time.expect("finish set on commit"),
                ratio,
            });
        }

        self.observer.observe(&self.state);
        events
    }

    pub fn run(mut self) -> Vec<JobRecord> {
        while !self.all_jobs_completed() {
            self.step();
        }
        self.into_finished()
    }

    pub fn all_jobs_completed(&self) -> bool {
        self.state.all_jobs_completed()
    }

    pub fn now(&self) -> Ticks {
        self.state.now
    }

    pub fn finished(&self) -> &[JobRecord] {
        &self.state.finished
    }

    // Completed records in dispatch order.
    pub fn into_finished(self) -> Vec<JobRecord> {
        self.state.finished
    }
}

// Construct-and-run convenience; the caller's slice is never mutated.
pub fn simulate(jobs: &[Job]) -> Vec<JobRecord> {
    Sim::<Hrrn>::new(jobs.to_vec()).run()
}
