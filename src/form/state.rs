use crate::form::field::{Field, FormFields};
use crate::form::validation::MESSAGE_MAX_CHARS;
use crate::notify::Notification;
use crate::ui::counter::CharCounter;
use crate::ui::spinner::Spinner;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmissionState {
    Idle,
    Submitting,
    Succeeded,
    Failed,
}

const PHASE_LOG_CAP: usize = 16;

/// Everything a render surface needs to draw the form: field values and
/// error annotations, submission phase, the single notification slot, and
/// the decorative counter/spinner.
pub struct FormState {
    fields: FormFields,
    submission: SubmissionState,
    notification: Option<Notification>,
    counter: CharCounter,
    spinner: Spinner,
    phase_log: Vec<SubmissionState>,
}

impl FormState {
    pub fn new() -> Self {
        Self {
            fields: FormFields::new(),
            submission: SubmissionState::Idle,
            notification: None,
            counter: CharCounter::new(MESSAGE_MAX_CHARS),
            spinner: Spinner::new(),
            phase_log: vec![SubmissionState::Idle],
        }
    }

    pub fn fields(&self) -> &FormFields {
        &self.fields
    }

    pub fn fields_mut(&mut self) -> &mut FormFields {
        &mut self.fields
    }

    pub fn submission(&self) -> SubmissionState {
        self.submission
    }

    /// The submit control is disabled exactly while a submission is in flight.
    pub fn is_submitting(&self) -> bool {
        self.submission == SubmissionState::Submitting
    }

    pub fn set_submission(&mut self, next: SubmissionState) {
        if self.submission == next {
            return;
        }
        log::debug!("submission state {:?} -> {:?}", self.submission, next);
        self.submission = next;
        if self.phase_log.len() == PHASE_LOG_CAP {
            self.phase_log.remove(0);
        }
        self.phase_log.push(next);
    }

    /// Recent submission phases, oldest first. Diagnostic only.
    pub fn phase_log(&self) -> &[SubmissionState] {
        &self.phase_log
    }

    pub fn notification(&self) -> Option<&Notification> {
        self.notification.as_ref()
    }

    /// Single slot: a new notification evicts whatever was showing.
    pub fn show_notification(&mut self, notification: Notification) {
        self.notification = Some(notification);
    }

    /// Returns false when there is nothing to hide (a stale timer fired).
    pub fn begin_notification_hide(&mut self) -> bool {
        match self.notification.as_mut() {
            Some(notification) => {
                notification.begin_hide();
                true
            }
            None => false,
        }
    }

    pub fn remove_notification(&mut self) {
        self.notification = None;
    }

    pub fn counter(&self) -> &CharCounter {
        &self.counter
    }

    pub fn refresh_counter(&mut self) {
        let len = self.fields.get(Field::Message).value().chars().count();
        self.counter.set_len(len);
    }

    pub fn spinner(&self) -> &Spinner {
        &self.spinner
    }

    pub fn spinner_mut(&mut self) -> &mut Spinner {
        &mut self.spinner
    }
}

impl Default for FormState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::{FormState, SubmissionState};
    use crate::form::field::Field;
    use crate::notify::Notification;

    #[test]
    fn phase_log_records_transitions_in_order() {
        let mut state = FormState::new();
        state.set_submission(SubmissionState::Submitting);
        state.set_submission(SubmissionState::Succeeded);
        state.set_submission(SubmissionState::Idle);
        assert_eq!(
            state.phase_log(),
            &[
                SubmissionState::Idle,
                SubmissionState::Submitting,
                SubmissionState::Succeeded,
                SubmissionState::Idle,
            ]
        );
    }

    #[test]
    fn notification_slot_holds_one_at_a_time() {
        let mut state = FormState::new();
        state.show_notification(Notification::success("first"));
        state.show_notification(Notification::error("second"));
        assert_eq!(state.notification().map(|n| n.text()), Some("second"));
    }

    #[test]
    fn hiding_without_a_notification_reports_stale() {
        let mut state = FormState::new();
        assert!(!state.begin_notification_hide());
        state.show_notification(Notification::success("hi"));
        assert!(state.begin_notification_hide());
    }

    #[test]
    fn counter_follows_the_message_field() {
        let mut state = FormState::new();
        state
            .fields_mut()
            .get_mut(Field::Message)
            .set_value("hello".to_string());
        state.refresh_counter();
        assert_eq!(state.counter().len(), 5);
    }
}
