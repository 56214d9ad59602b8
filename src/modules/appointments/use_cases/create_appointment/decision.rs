use crate::modules::appointments::core::appointment::Appointment;

/// Every reason a booking is refused. The messages are part of the API.
#[derive(Debug, Clone, Copy, thiserror::Error, PartialEq, Eq)]
pub enum DecideError {
    #[error("Appointments must be a valid datetime")]
    InvalidDateTime,

    #[error("Appointments must start on the hour or half hour")]
    MisalignedTime,

    #[error("User already has an appointment scheduled for this calendar date")]
    DateAlreadyBooked,
}

#[derive(Debug, PartialEq, Eq)]
pub enum Decision {
    Accepted { appointment: Appointment },
    Rejected { reason: DecideError },
}
