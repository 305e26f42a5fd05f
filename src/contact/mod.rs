//! Contact form submission: endpoint client, failure taxonomy and the
//! state controller that drives the form

mod client;
mod error;
mod pipeline;
mod traits;

pub use client::{ContactClient, DEFAULT_ENDPOINT, DEFAULT_TIMEOUT};
pub use error::{SubmissionOutcome, SubmitError};
pub use pipeline::{ContactPipeline, PipelineState, SubmitAttempt};
pub use traits::ContactClientTrait;

#[cfg(test)]
pub use traits::MockContactClientTrait;
