/// Fire-and-forget analytics hook. Implementations must never block or fail
/// loudly; the workflow calls this only after a successful submission.
pub trait AnalyticsSink {
    fn record(&self, category: &str, label: &str);
}

/// Default sink that just writes the event to the log.
pub struct LogSink;

impl AnalyticsSink for LogSink {
    fn record(&self, category: &str, label: &str) {
        log::info!("analytics event: {category} / {label}");
    }
}
