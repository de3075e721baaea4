use crate::runtime::scheduler::TimerCommand;
use crate::submit::FormData;

#[derive(Debug, Clone)]
pub enum Effect {
    Schedule(TimerCommand),
    /// Start the one in-flight submission with these captured values.
    Submit(FormData),
    /// Fire-and-forget analytics event; only ever emitted on success.
    Analytics {
        category: &'static str,
        label: &'static str,
    },
    /// Cosmetic celebration, no functional consequence.
    Celebrate,
    RequestRender,
}
