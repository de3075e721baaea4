use crate::form::effect::Effect;
use crate::form::event::Intent;
use crate::form::field::Field;
use crate::form::state::{FormState, SubmissionState};
use crate::form::validation;
use crate::notify::{self, Notification};
use crate::runtime::scheduler::{TimerCommand, TimerKey};
use crate::submit::{FormData, SubmissionOutcome};

pub const FIX_ERRORS_TEXT: &str = "Please fix the errors before submitting";
pub const SENT_TEXT: &str = "Message sent successfully! I'll get back to you soon.";
pub const SEND_FAILED_TEXT: &str =
    "Oops! Something went wrong. Please try again or email me directly.";

pub const ANALYTICS_CATEGORY: &str = "Contact";
pub const ANALYTICS_LABEL: &str = "Contact Form";

pub struct Reducer;

impl Reducer {
    pub fn reduce(state: &mut FormState, intent: Intent) -> Vec<Effect> {
        match intent {
            Intent::Edit { field, value } => on_edit(state, field, value),
            Intent::Blur { field } => on_blur(state, field),
            Intent::Submit => on_submit(state),
            Intent::Settled { outcome } => on_settled(state, outcome),
            Intent::NotificationHide => on_notification_hide(state),
            Intent::NotificationRemove => {
                state.remove_notification();
                vec![Effect::RequestRender]
            }
            Intent::Tick => on_tick(state),
        }
    }
}

fn on_edit(state: &mut FormState, field: Field, value: String) -> Vec<Effect> {
    let field_state = state.fields_mut().get_mut(field);
    let changed = field_state.value() != value;
    field_state.set_value(value);
    if changed {
        // Typing clears the error annotation immediately; the field is only
        // re-validated on the next blur or submit.
        field_state.clear_error();
    }
    if field == Field::Message {
        state.refresh_counter();
    }
    vec![Effect::RequestRender]
}

fn on_blur(state: &mut FormState, field: Field) -> Vec<Effect> {
    validation::validate_field(state.fields_mut(), field);
    vec![Effect::RequestRender]
}

fn on_submit(state: &mut FormState) -> Vec<Effect> {
    // The disabled submit control is the primary guard; this check covers
    // submit intents that arrive anyway while a submission is in flight.
    if state.submission() != SubmissionState::Idle {
        log::debug!("submit ignored: submission already in flight");
        return vec![];
    }

    if !validation::validate_form(state.fields_mut()) {
        let mut effects = show_notification(state, Notification::error(FIX_ERRORS_TEXT));
        effects.push(Effect::RequestRender);
        return effects;
    }

    state.set_submission(SubmissionState::Submitting);
    vec![
        Effect::Submit(FormData::from_fields(state.fields())),
        Effect::RequestRender,
    ]
}

fn on_settled(state: &mut FormState, outcome: SubmissionOutcome) -> Vec<Effect> {
    // The guard restores Idle on every exit path, so the submit control is
    // re-enabled no matter how outcome handling goes.
    let mut guard = SettleGuard::new(state);
    let mut effects = match outcome {
        SubmissionOutcome::Accepted { status } => {
            log::debug!("submission accepted with status {status}");
            let state = guard.state();
            state.set_submission(SubmissionState::Succeeded);
            state.fields_mut().clear_values();
            state.refresh_counter();
            let mut effects = show_notification(state, Notification::success(SENT_TEXT));
            effects.push(Effect::Analytics {
                category: ANALYTICS_CATEGORY,
                label: ANALYTICS_LABEL,
            });
            effects.push(Effect::Celebrate);
            effects
        }
        SubmissionOutcome::Rejected { status, detail } => {
            log::warn!(
                "form submission rejected (status {status}): {}",
                detail.as_deref().unwrap_or("Submission failed")
            );
            let state = guard.state();
            state.set_submission(SubmissionState::Failed);
            // Field values are kept so the user does not have to retype;
            // the user-facing text stays generic.
            show_notification(state, Notification::error(SEND_FAILED_TEXT))
        }
        SubmissionOutcome::Unreachable { detail } => {
            log::warn!("form submission failed: {detail}");
            let state = guard.state();
            state.set_submission(SubmissionState::Failed);
            show_notification(state, Notification::error(SEND_FAILED_TEXT))
        }
    };
    drop(guard);

    effects.push(Effect::RequestRender);
    effects
}

fn on_notification_hide(state: &mut FormState) -> Vec<Effect> {
    if !state.begin_notification_hide() {
        return vec![];
    }
    vec![
        Effect::Schedule(TimerCommand::EmitAfter {
            key: TimerKey::NotificationRemove,
            delay: notify::FADE_FOR,
            intent: Intent::NotificationRemove,
        }),
        Effect::RequestRender,
    ]
}

fn on_tick(state: &mut FormState) -> Vec<Effect> {
    if !state.is_submitting() {
        return vec![];
    }
    state.spinner_mut().tick();
    vec![Effect::RequestRender]
}

/// Puts a notification in the slot and rebuilds its dismiss timers. Timers
/// of the previous notification are cancelled, never left to fire on the
/// new one.
fn show_notification(state: &mut FormState, notification: Notification) -> Vec<Effect> {
    state.show_notification(notification);
    vec![
        Effect::Schedule(TimerCommand::Cancel {
            key: TimerKey::NotificationHide,
        }),
        Effect::Schedule(TimerCommand::Cancel {
            key: TimerKey::NotificationRemove,
        }),
        Effect::Schedule(TimerCommand::EmitAfter {
            key: TimerKey::NotificationHide,
            delay: notify::VISIBLE_FOR,
            intent: Intent::NotificationHide,
        }),
    ]
}

/// Drop guard around settled-submission handling: whatever happens in
/// between, the workflow ends back in `Idle` with the submit control
/// re-enabled.
struct SettleGuard<'a> {
    state: &'a mut FormState,
}

impl<'a> SettleGuard<'a> {
    fn new(state: &'a mut FormState) -> Self {
        Self { state }
    }

    fn state(&mut self) -> &mut FormState {
        self.state
    }
}

impl Drop for SettleGuard<'_> {
    fn drop(&mut self) {
        self.state.set_submission(SubmissionState::Idle);
    }
}

#[cfg(test)]
mod tests {
    use super::{FIX_ERRORS_TEXT, Reducer, SEND_FAILED_TEXT, SENT_TEXT};
    use crate::form::effect::Effect;
    use crate::form::event::Intent;
    use crate::form::field::Field;
    use crate::form::state::{FormState, SubmissionState};
    use crate::notify::NotificationKind;
    use crate::submit::SubmissionOutcome;

    fn edit(state: &mut FormState, field: Field, value: &str) {
        Reducer::reduce(
            state,
            Intent::Edit {
                field,
                value: value.to_string(),
            },
        );
    }

    fn fill_valid(state: &mut FormState) {
        edit(state, Field::Name, "Jane Doe");
        edit(state, Field::Email, "jane@example.com");
        edit(state, Field::Message, "Hello, this is a long enough message.");
    }

    fn has_submit_effect(effects: &[Effect]) -> bool {
        effects
            .iter()
            .any(|effect| matches!(effect, Effect::Submit(_)))
    }

    #[test]
    fn invalid_submit_never_starts_a_submission() {
        let mut state = FormState::new();
        edit(&mut state, Field::Name, "A");
        edit(&mut state, Field::Email, "x@x.com");
        edit(&mut state, Field::Message, "short");

        let effects = Reducer::reduce(&mut state, Intent::Submit);

        assert!(!has_submit_effect(&effects));
        assert_eq!(state.submission(), SubmissionState::Idle);
        assert_eq!(
            state.fields().get(Field::Name).error(),
            Some("Name must be at least 2 characters")
        );
        assert_eq!(state.fields().get(Field::Email).error(), None);
        assert_eq!(
            state.fields().get(Field::Message).error(),
            Some("Message must be at least 10 characters")
        );
        let notification = state.notification().expect("error notification");
        assert_eq!(notification.kind(), NotificationKind::Error);
        assert_eq!(notification.text(), FIX_ERRORS_TEXT);
    }

    #[test]
    fn valid_submit_enters_submitting_with_one_submit_effect() {
        let mut state = FormState::new();
        fill_valid(&mut state);

        let effects = Reducer::reduce(&mut state, Intent::Submit);

        assert_eq!(state.submission(), SubmissionState::Submitting);
        assert!(state.is_submitting());
        let captured = effects.iter().find_map(|effect| match effect {
            Effect::Submit(data) => Some(data.clone()),
            _ => None,
        });
        let data = captured.expect("submit effect");
        assert_eq!(data.name, "Jane Doe");
        assert_eq!(data.email, "jane@example.com");
    }

    #[test]
    fn reentrant_submit_while_submitting_is_ignored() {
        let mut state = FormState::new();
        fill_valid(&mut state);
        Reducer::reduce(&mut state, Intent::Submit);

        let effects = Reducer::reduce(&mut state, Intent::Submit);
        assert!(effects.is_empty());
        assert_eq!(state.submission(), SubmissionState::Submitting);
    }

    #[test]
    fn accepted_outcome_clears_the_form_and_celebrates() {
        let mut state = FormState::new();
        fill_valid(&mut state);
        Reducer::reduce(&mut state, Intent::Submit);

        let effects = Reducer::reduce(
            &mut state,
            Intent::Settled {
                outcome: SubmissionOutcome::Accepted { status: 200 },
            },
        );

        assert_eq!(
            state.phase_log(),
            &[
                SubmissionState::Idle,
                SubmissionState::Submitting,
                SubmissionState::Succeeded,
                SubmissionState::Idle,
            ]
        );
        assert_eq!(state.fields().get(Field::Name).value(), "");
        assert_eq!(state.fields().get(Field::Message).value(), "");
        assert!(!state.fields().has_errors());
        assert_eq!(state.counter().len(), 0);

        let notification = state.notification().expect("success notification");
        assert_eq!(notification.kind(), NotificationKind::Success);
        assert_eq!(notification.text(), SENT_TEXT);

        assert!(effects.iter().any(|e| matches!(
            e,
            Effect::Analytics {
                category: "Contact",
                label: "Contact Form"
            }
        )));
        assert!(effects.iter().any(|e| matches!(e, Effect::Celebrate)));
    }

    #[test]
    fn rejected_outcome_keeps_values_and_shows_generic_text() {
        let mut state = FormState::new();
        fill_valid(&mut state);
        Reducer::reduce(&mut state, Intent::Submit);

        let effects = Reducer::reduce(
            &mut state,
            Intent::Settled {
                outcome: SubmissionOutcome::Rejected {
                    status: 500,
                    detail: Some("rate limited".to_string()),
                },
            },
        );

        assert_eq!(
            state.phase_log(),
            &[
                SubmissionState::Idle,
                SubmissionState::Submitting,
                SubmissionState::Failed,
                SubmissionState::Idle,
            ]
        );
        assert_eq!(state.fields().get(Field::Name).value(), "Jane Doe");
        assert_eq!(
            state.fields().get(Field::Message).value(),
            "Hello, this is a long enough message."
        );

        let notification = state.notification().expect("error notification");
        assert_eq!(notification.kind(), NotificationKind::Error);
        assert_eq!(notification.text(), SEND_FAILED_TEXT);
        // The backend detail never reaches the user-facing text.
        assert!(!notification.text().contains("rate limited"));

        assert!(!effects.iter().any(|e| matches!(e, Effect::Celebrate)));
        assert!(!effects.iter().any(|e| matches!(e, Effect::Analytics { .. })));
    }

    #[test]
    fn unreachable_outcome_also_returns_to_idle() {
        let mut state = FormState::new();
        fill_valid(&mut state);
        Reducer::reduce(&mut state, Intent::Submit);

        Reducer::reduce(
            &mut state,
            Intent::Settled {
                outcome: SubmissionOutcome::Unreachable {
                    detail: "connection refused".to_string(),
                },
            },
        );

        assert_eq!(state.submission(), SubmissionState::Idle);
        assert!(!state.is_submitting());
    }

    #[test]
    fn editing_a_field_clears_its_error() {
        let mut state = FormState::new();
        Reducer::reduce(&mut state, Intent::Blur { field: Field::Name });
        assert!(state.fields().get(Field::Name).error().is_some());

        edit(&mut state, Field::Name, "J");
        assert_eq!(state.fields().get(Field::Name).error(), None);
    }

    #[test]
    fn blur_validates_only_the_blurred_field() {
        let mut state = FormState::new();
        Reducer::reduce(&mut state, Intent::Blur { field: Field::Email });
        assert_eq!(
            state.fields().get(Field::Email).error(),
            Some("Email is required")
        );
        assert!(state.fields().get(Field::Name).error().is_none());
        assert!(state.fields().get(Field::Message).error().is_none());
    }

    #[test]
    fn notification_hide_then_remove() {
        let mut state = FormState::new();
        edit(&mut state, Field::Name, "A");
        Reducer::reduce(&mut state, Intent::Submit);
        assert!(state.notification().is_some());

        let effects = Reducer::reduce(&mut state, Intent::NotificationHide);
        assert!(!effects.is_empty());
        assert_eq!(
            state.notification().map(|n| n.phase()),
            Some(crate::notify::NotificationPhase::Hiding)
        );

        Reducer::reduce(&mut state, Intent::NotificationRemove);
        assert!(state.notification().is_none());
    }

    #[test]
    fn stale_notification_hide_is_a_noop() {
        let mut state = FormState::new();
        let effects = Reducer::reduce(&mut state, Intent::NotificationHide);
        assert!(effects.is_empty());
    }

    #[test]
    fn tick_only_spins_while_submitting() {
        let mut state = FormState::new();
        assert!(Reducer::reduce(&mut state, Intent::Tick).is_empty());

        fill_valid(&mut state);
        Reducer::reduce(&mut state, Intent::Submit);
        assert!(!Reducer::reduce(&mut state, Intent::Tick).is_empty());
    }
}
