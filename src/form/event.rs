use crate::form::field::Field;
use crate::submit::SubmissionOutcome;

/// Everything the workflow reacts to: user interaction, timer expiry, and
/// settled submissions.
#[derive(Debug, Clone)]
pub enum Intent {
    /// The field's content changed; `value` is the full new text.
    Edit { field: Field, value: String },
    /// The field lost focus.
    Blur { field: Field },
    /// The submit control was activated.
    Submit,
    /// The in-flight submission finished, one way or another.
    Settled { outcome: SubmissionOutcome },
    NotificationHide,
    NotificationRemove,
    /// Periodic tick, used to advance the loading indicator.
    Tick,
}
