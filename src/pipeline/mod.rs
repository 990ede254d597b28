pub mod error;
pub mod job;

pub use error::PipelineError;
pub use job::{Job, PipelineContext};
