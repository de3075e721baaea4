use crate::analytics::AnalyticsSink;
use crate::form::effect::Effect;
use crate::form::event::Intent;
use crate::form::reducer::Reducer;
use crate::form::state::FormState;
use crate::runtime::scheduler::Scheduler;
use crate::submit::{Submission, SubmitExecutor, Transport};
use crate::ui::celebration::{self, Burst};
use std::sync::Arc;
use std::time::{Duration, Instant};

/// Owns one form's lifecycle: state, timers, and the in-flight submission.
/// Constructed with its transport (and optionally an analytics sink)
/// injected, so hosts and tests can substitute their own.
pub struct Workflow {
    state: FormState,
    scheduler: Scheduler,
    executor: SubmitExecutor,
    transport: Arc<dyn Transport>,
    analytics: Option<Box<dyn AnalyticsSink>>,
    endpoint: String,
    celebration: Option<Burst>,
}

impl Workflow {
    pub fn new(endpoint: impl Into<String>, transport: Arc<dyn Transport>) -> Self {
        Self {
            state: FormState::new(),
            scheduler: Scheduler::new(),
            executor: SubmitExecutor::new(),
            transport,
            analytics: None,
            endpoint: endpoint.into(),
            celebration: None,
        }
    }

    pub fn with_analytics(mut self, sink: Box<dyn AnalyticsSink>) -> Self {
        self.analytics = Some(sink);
        self
    }

    pub fn state(&self) -> &FormState {
        &self.state
    }

    /// Feeds one intent through the reducer. Returns true when the surface
    /// should re-render.
    pub fn handle(&mut self, intent: Intent) -> bool {
        self.handle_at(intent, Instant::now())
    }

    pub fn handle_at(&mut self, intent: Intent, now: Instant) -> bool {
        let effects = Reducer::reduce(&mut self.state, intent);
        self.apply(effects, now)
    }

    /// Delivers due timers and settled submissions. Called from the host's
    /// event loop; `now` is passed in so tests can drive time.
    pub fn pump(&mut self, now: Instant) -> bool {
        let mut render = false;

        for intent in self.scheduler.drain_ready(now) {
            render |= self.handle_at(intent, now);
        }

        for outcome in self.executor.drain_settled() {
            render |= self.handle_at(Intent::Settled { outcome }, now);
        }

        render
    }

    pub fn poll_timeout(&self, now: Instant, default_timeout: Duration) -> Duration {
        self.scheduler.poll_timeout(now, default_timeout)
    }

    /// Hands the pending celebration burst, if any, to the surface.
    pub fn take_celebration(&mut self) -> Option<Burst> {
        self.celebration.take()
    }

    fn apply(&mut self, effects: Vec<Effect>, now: Instant) -> bool {
        let mut render = false;

        for effect in effects {
            match effect {
                Effect::Schedule(command) => {
                    self.scheduler.schedule(command, now);
                }
                Effect::Submit(data) => {
                    let submission = Submission {
                        endpoint: self.endpoint.clone(),
                        data,
                    };
                    self.executor.spawn(self.transport.clone(), submission);
                }
                Effect::Analytics { category, label } => {
                    if let Some(sink) = &self.analytics {
                        sink.record(category, label);
                    }
                }
                Effect::Celebrate => {
                    self.celebration = Some(Burst::generate(celebration::DEFAULT_PARTICLES));
                }
                Effect::RequestRender => {
                    render = true;
                }
            }
        }

        render
    }
}
