use crate::modules::appointments::core::appointment::Appointment;
use crate::modules::appointments::use_cases::create_appointment::decision::{
    DecideError, Decision,
};
use chrono::NaiveDateTime;

/// A user gets at most one appointment per calendar date. A slot crossing
/// midnight occupies both dates it touches.
pub fn decide_create(existing: &[Appointment], start_time: NaiveDateTime) -> Decision {
    let Some(candidate) = Appointment::starting_at(start_time) else {
        return Decision::Rejected {
            reason: DecideError::InvalidDateTime,
        };
    };

    if !candidate.is_slot_aligned() {
        return Decision::Rejected {
            reason: DecideError::MisalignedTime,
        };
    }

    if existing
        .iter()
        .any(|booked| booked.shares_calendar_date_with(&candidate))
    {
        return Decision::Rejected {
            reason: DecideError::DateAlreadyBooked,
        };
    }

    Decision::Accepted {
        appointment: candidate,
    }
}
