pub mod runner;
pub mod scheduler;

pub use runner::Workflow;
