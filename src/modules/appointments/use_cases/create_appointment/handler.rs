use crate::modules::appointments::adapters::outbound::appointment_store::AppointmentStore;
use crate::modules::appointments::core::appointment::Appointment;
use crate::modules::appointments::use_cases::create_appointment::command::CreateAppointment;
use crate::modules::appointments::use_cases::create_appointment::decide::decide_create;
use crate::modules::appointments::use_cases::create_appointment::decision::{
    DecideError, Decision,
};
use crate::shared::core::datetime_parser::DateTimeParser;
use std::sync::Arc;
use tokio::sync::Mutex;

pub struct CreateAppointmentHandler<TStore, TParser>
where
    TStore: AppointmentStore + 'static,
    TParser: DateTimeParser + 'static,
{
    store: Arc<TStore>,
    parser: TParser,
    // Serialises load -> decide -> append so two requests cannot both pass
    // the calendar date check before either commits.
    booking_lock: Mutex<()>,
}

impl<TStore, TParser> CreateAppointmentHandler<TStore, TParser>
where
    TStore: AppointmentStore + 'static,
    TParser: DateTimeParser + 'static,
{
    pub fn new(store: Arc<TStore>, parser: TParser) -> Self {
        Self {
            store,
            parser,
            booking_lock: Mutex::new(()),
        }
    }

    pub async fn handle(&self, command: CreateAppointment) -> Result<Appointment, DecideError> {
        let user_id = command.user_id;
        let start_time = match self.parser.parse(&command.appointment) {
            Ok(start_time) => start_time,
            Err(err) => {
                tracing::info!(user_id, error = %err, "appointment rejected");
                return Err(DecideError::InvalidDateTime);
            }
        };

        let _guard = self.booking_lock.lock().await;
        let existing = self.store.get(user_id).await;

        match decide_create(&existing, start_time) {
            Decision::Accepted { appointment } => {
                self.store.append(user_id, appointment).await;
                tracing::info!(
                    user_id,
                    start_time = %appointment.start_time(),
                    "appointment booked"
                );
                Ok(appointment)
            }
            Decision::Rejected { reason } => {
                tracing::info!(user_id, %reason, "appointment rejected");
                Err(reason)
            }
        }
    }
}
