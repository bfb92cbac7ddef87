// src/application/ports/time.rs
use chrono::{DateTime, Utc};

/// Source of timestamps for slug creation order.
pub trait Clock: Send + Sync {
    fn now(&self) -> DateTime<Utc>;
}
