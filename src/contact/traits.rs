//! Trait abstraction for the contact endpoint to enable mocking in tests

use super::SubmissionOutcome;
use crate::state::FormSnapshot;
use async_trait::async_trait;

/// One bounded-time exchange with the contact endpoint
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ContactClientTrait: Send + Sync {
    /// Send the snapshot once. Never retries; the timeout is enforced inside.
    async fn submit(&self, snapshot: FormSnapshot) -> SubmissionOutcome;
}
