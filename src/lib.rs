pub mod analytics;
pub mod form;
pub mod notify;
pub mod runtime;
pub mod submit;
pub mod ui;

pub use analytics::{AnalyticsSink, LogSink};
pub use form::effect::Effect;
pub use form::event::Intent;
pub use form::field::{Field, FieldState, FormFields};
pub use form::reducer::Reducer;
pub use form::state::{FormState, SubmissionState};
pub use form::validation;
pub use form::validators;
pub use notify::{Notification, NotificationKind, NotificationPhase};
pub use runtime::Workflow;
pub use runtime::scheduler::{Scheduler, TimerCommand, TimerKey};
pub use submit::{
    FormData, Response, Submission, SubmissionOutcome, SubmitExecutor, Transport, TransportError,
};
