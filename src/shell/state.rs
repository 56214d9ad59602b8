use crate::modules::appointments::adapters::outbound::appointment_store_in_memory::InMemoryAppointmentStore;
use crate::modules::appointments::use_cases::create_appointment::handler::CreateAppointmentHandler;
use crate::modules::appointments::use_cases::list_appointments_by_user::queries_port::AppointmentQueries;
use crate::shared::core::datetime_parser::LenientDateTimeParser;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub queries: Arc<dyn AppointmentQueries + Send + Sync>,
    pub create_handler:
        Arc<CreateAppointmentHandler<InMemoryAppointmentStore, LenientDateTimeParser>>,
}

impl AppState {
    /// Both use cases share the one store.
    pub fn in_memory(store: Arc<InMemoryAppointmentStore>) -> Self {
        let create_handler = Arc::new(CreateAppointmentHandler::new(
            store.clone(),
            LenientDateTimeParser::new(),
        ));
        Self {
            queries: store,
            create_handler,
        }
    }
}
