use chrono::{DateTime, Utc};

/// Clock port used for TTL bookkeeping and entry timestamps
pub trait Clock: Send + Sync {
    fn now(&self) -> DateTime<Utc>;
}
