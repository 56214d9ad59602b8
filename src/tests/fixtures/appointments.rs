use crate::modules::appointments::core::appointment::Appointment;
use chrono::NaiveDateTime;

/// `YYYY-MM-DD HH:MM` to a naive datetime.
pub fn datetime(raw: &str) -> NaiveDateTime {
    NaiveDateTime::parse_from_str(raw, "%Y-%m-%d %H:%M").unwrap()
}

pub fn appointment_at(raw: &str) -> Appointment {
    Appointment::starting_at(datetime(raw)).unwrap()
}
