use crate::ports::outbound::Clock;
use chrono::{DateTime, Utc};

/// SystemClock adapter backed by the host's wall clock
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}
