pub mod driver;
pub mod event;
pub mod observer;
pub mod state;

pub use driver::{simulate, Sim};
pub use event::DispatchEvent;
pub use state::{DispatchState, Job, JobId, JobRecord, Ticks};
