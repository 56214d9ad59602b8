use crate::modules::appointments::core::appointment::UserId;
use crate::modules::appointments::use_cases::create_appointment::command::CreateAppointment;

pub struct CreateAppointmentBuilder {
    inner: CreateAppointment,
}

impl Default for CreateAppointmentBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl CreateAppointmentBuilder {
    pub fn new() -> Self {
        Self {
            inner: CreateAppointment {
                user_id: 1,
                appointment: "2021-04-22 11:30:00".to_string(),
            },
        }
    }

    pub fn user_id(mut self, v: UserId) -> Self {
        self.inner.user_id = v;
        self
    }

    pub fn appointment(mut self, v: impl Into<String>) -> Self {
        self.inner.appointment = v.into();
        self
    }

    pub fn build(self) -> CreateAppointment {
        self.inner
    }
}

#[cfg(test)]
mod create_appointment_builder_tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn setters_override_all_fields_and_build_returns_inner() {
        let custom = CreateAppointmentBuilder::default()
            .user_id(99)
            .appointment("2021-05-01 08:00")
            .build();

        assert_eq!(custom.user_id, 99);
        assert_eq!(custom.appointment, "2021-05-01 08:00");
    }
}
