use crate::submit::Submission;
use thiserror::Error;

/// Abstracted network call used to deliver a submission.
///
/// Implementations POST the form-encoded body to `submission.endpoint` with
/// `Accept: application/json` and hand back whatever status and body the
/// endpoint produced. Transport-level failures (DNS, refused connection)
/// are reported as errors instead.
pub trait Transport: Send + Sync {
    fn send(&self, submission: &Submission) -> Result<Response, TransportError>;
}

#[derive(Debug, Clone)]
pub struct Response {
    pub status: u16,
    pub body: String,
}

impl Response {
    pub fn ok(body: impl Into<String>) -> Self {
        Self {
            status: 200,
            body: body.into(),
        }
    }

    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

#[derive(Debug, Clone, Error)]
pub enum TransportError {
    #[error("endpoint unreachable: {0}")]
    Unreachable(String),
    #[error("request failed: {0}")]
    Request(String),
}
