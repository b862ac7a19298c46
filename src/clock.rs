//! Clock seam for date-dependent operations

use chrono::{Local, NaiveDate};

/// Source of "today" for the interface layer
pub trait Clock {
    fn today(&self) -> NaiveDate;
}

/// Wall-clock dates from the local timezone
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn today(&self) -> NaiveDate {
        Local::now().date_naive()
    }
}
