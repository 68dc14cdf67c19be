//! System clock implementation.

use chrono::{NaiveDate, Utc};

use crate::usecases::ports::Clock;

/// Calendar date in UTC, so the chart date does not depend on the host zone.
#[derive(Clone, Copy, Default)]
pub struct SystemClock;

impl SystemClock {
    pub fn new() -> Self {
        Self
    }
}

impl Clock for SystemClock {
    fn today(&self) -> NaiveDate {
        Utc::now().date_naive()
    }
}
