use chrono::{NaiveDate, NaiveDateTime, TimeDelta, Timelike};
use std::collections::BTreeSet;

pub type UserId = u64;

pub const SLOT_MINUTES: i64 = 30;

/// A booked half-hour slot. The end is always derived from the start.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Appointment {
    start_time: NaiveDateTime,
    end_time: NaiveDateTime,
}

impl Appointment {
    /// Returns `None` when the end of the slot falls outside chrono's range.
    pub fn starting_at(start: NaiveDateTime) -> Option<Self> {
        let start_time = start.with_second(0)?.with_nanosecond(0)?;
        let end_time = start_time.checked_add_signed(TimeDelta::minutes(SLOT_MINUTES))?;
        Some(Self {
            start_time,
            end_time,
        })
    }

    pub fn start_time(&self) -> NaiveDateTime {
        self.start_time
    }

    pub fn end_time(&self) -> NaiveDateTime {
        self.end_time
    }

    pub fn is_slot_aligned(&self) -> bool {
        self.start_time.minute() % 30 == 0
    }

    /// One date, or two when the slot crosses midnight.
    pub fn calendar_dates(&self) -> BTreeSet<NaiveDate> {
        BTreeSet::from([self.start_time.date(), self.end_time.date()])
    }

    pub fn shares_calendar_date_with(&self, other: &Appointment) -> bool {
        !self.calendar_dates().is_disjoint(&other.calendar_dates())
    }
}
