use crate::submit::{Submission, SubmissionOutcome, Transport, settle};
use std::panic::{self, AssertUnwindSafe};
use std::sync::Arc;
use std::sync::mpsc::{self, Receiver, Sender, TryRecvError};

/// Runs submissions off the event loop, one thread per attempt. Outcomes are
/// delivered through a channel and picked up when the workflow pumps; a
/// submission always settles, even when the transport panics.
pub struct SubmitExecutor {
    settled_tx: Sender<SubmissionOutcome>,
    settled_rx: Receiver<SubmissionOutcome>,
}

impl SubmitExecutor {
    pub fn new() -> Self {
        let (settled_tx, settled_rx) = mpsc::channel::<SubmissionOutcome>();
        Self {
            settled_tx,
            settled_rx,
        }
    }

    pub fn spawn(&self, transport: Arc<dyn Transport>, submission: Submission) {
        let settled_tx = self.settled_tx.clone();
        std::thread::spawn(move || {
            let result = panic::catch_unwind(AssertUnwindSafe(|| transport.send(&submission)));
            let outcome = match result {
                Ok(result) => settle(result),
                Err(_) => SubmissionOutcome::Unreachable {
                    detail: "submission attempt aborted unexpectedly".to_string(),
                },
            };
            let _ = settled_tx.send(outcome);
        });
    }

    pub fn drain_settled(&self) -> Vec<SubmissionOutcome> {
        let mut out = Vec::<SubmissionOutcome>::new();
        loop {
            match self.settled_rx.try_recv() {
                Ok(outcome) => out.push(outcome),
                Err(TryRecvError::Empty) | Err(TryRecvError::Disconnected) => break,
            }
        }
        out
    }
}

impl Default for SubmitExecutor {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::SubmitExecutor;
    use crate::submit::{FormData, Response, Submission, SubmissionOutcome, Transport};
    use std::sync::Arc;
    use std::time::{Duration, Instant};

    struct OkTransport;

    impl Transport for OkTransport {
        fn send(&self, _submission: &Submission) -> Result<Response, crate::TransportError> {
            Ok(Response::ok("{}"))
        }
    }

    struct PanickingTransport;

    impl Transport for PanickingTransport {
        fn send(&self, _submission: &Submission) -> Result<Response, crate::TransportError> {
            panic!("boom");
        }
    }

    fn submission() -> Submission {
        Submission {
            endpoint: "https://example.test/submit".to_string(),
            data: FormData {
                name: "Jane Doe".to_string(),
                email: "jane@example.com".to_string(),
                message: "Hello, this is a long enough message.".to_string(),
            },
        }
    }

    fn wait_for_outcome(executor: &SubmitExecutor) -> SubmissionOutcome {
        let deadline = Instant::now() + Duration::from_secs(5);
        loop {
            if let Some(outcome) = executor.drain_settled().pop() {
                return outcome;
            }
            assert!(Instant::now() < deadline, "submission never settled");
            std::thread::sleep(Duration::from_millis(1));
        }
    }

    #[test]
    fn successful_send_settles_as_accepted() {
        let executor = SubmitExecutor::new();
        executor.spawn(Arc::new(OkTransport), submission());
        assert!(matches!(
            wait_for_outcome(&executor),
            SubmissionOutcome::Accepted { status: 200 }
        ));
    }

    #[test]
    fn panicking_transport_still_settles() {
        let executor = SubmitExecutor::new();
        executor.spawn(Arc::new(PanickingTransport), submission());
        assert!(matches!(
            wait_for_outcome(&executor),
            SubmissionOutcome::Unreachable { .. }
        ));
    }
}
