use crate::core::state::{JobId, Ticks};

#[derive(Debug, Clone, PartialEq)]
pub enum DispatchEvent {
    JobAdmitted {
        job: JobId,
        at: Ticks,
    },
    // CPU idle: nothing ready, clock jumps to the next pending arrival
    CpuIdle {
        until: Ticks,
    },
    JobDispatched {
        job: JobId,
        start: Ticks,
        finish: Ticks,
        ratio: f64,
    },
}
