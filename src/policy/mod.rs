pub mod hrrn;

use crate::core::state::{Job, Ticks};
pub use hrrn::Hrrn;

pub trait Policy {
    fn init() -> Self;

    // `ready` must be non-empty; returns the index of the job to dispatch.
    // The ranking must be total and stable over the ready set.
    fn select(&mut self, ready: &[Job], now: Ticks) -> usize;
}
