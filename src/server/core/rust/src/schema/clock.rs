/* src/server/core/rust/src/schema/clock.rs */

use std::fmt::Debug;

use chrono::{DateTime, Utc};

/// Source of "now" for time-stamped documents.
pub trait Clock: Send + Sync + Debug {
  fn now(&self) -> DateTime<Utc>;
}

#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
  fn now(&self) -> DateTime<Utc> {
    Utc::now()
  }
}

/// Always returns the same instant. For tests and reproducible exports.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub DateTime<Utc>);

impl Clock for FixedClock {
  fn now(&self) -> DateTime<Utc> {
    self.0
  }
}
