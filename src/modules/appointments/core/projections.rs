use crate::modules::appointments::core::appointment::Appointment;
use serde::{Deserialize, Serialize};

pub const DISPLAY_FORMAT: &str = "%Y-%m-%d %H:%M";

/// Client-facing rendering of an appointment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppointmentView {
    pub start_time: String,
    pub end_time: String,
}

impl From<&Appointment> for AppointmentView {
    fn from(appointment: &Appointment) -> Self {
        Self {
            start_time: appointment.start_time().format(DISPLAY_FORMAT).to_string(),
            end_time: appointment.end_time().format(DISPLAY_FORMAT).to_string(),
        }
    }
}

impl From<Appointment> for AppointmentView {
    fn from(appointment: Appointment) -> Self {
        Self::from(&appointment)
    }
}
