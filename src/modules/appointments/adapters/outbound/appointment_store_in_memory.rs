// In memory appointment store, and appointment queries.
//
// Purpose
// - Hold every appointment for the lifetime of the process or test fixture.
//
// Responsibilities
// - Keep each user's appointments in booking order.
// - Serve the list query straight from the same map.

use crate::modules::appointments::adapters::outbound::appointment_store::AppointmentStore;
use crate::modules::appointments::core::appointment::{Appointment, UserId};
use crate::modules::appointments::use_cases::list_appointments_by_user::queries_port::AppointmentQueries;
use std::collections::HashMap;
use std::time::Duration;
use tokio::sync::RwLock;

#[derive(Default)]
pub struct InMemoryAppointmentStore {
    appointments: RwLock<HashMap<UserId, Vec<Appointment>>>,
    delay_append_ms: u64,
}

impl InMemoryAppointmentStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_appointments(appointments: HashMap<UserId, Vec<Appointment>>) -> Self {
        Self {
            appointments: RwLock::new(appointments),
            ..Self::default()
        }
    }

    /// Stalls every append, so tests can interleave concurrent bookings.
    pub fn set_delay_append_ms(&mut self, delay_ms: u64) {
        self.delay_append_ms = delay_ms;
    }
}

#[async_trait::async_trait]
impl AppointmentStore for InMemoryAppointmentStore {
    async fn get(&self, user_id: UserId) -> Vec<Appointment> {
        self.appointments
            .read()
            .await
            .get(&user_id)
            .cloned()
            .unwrap_or_default()
    }

    async fn append(&self, user_id: UserId, appointment: Appointment) {
        if self.delay_append_ms > 0 {
            tokio::time::sleep(Duration::from_millis(self.delay_append_ms)).await;
        }
        self.appointments
            .write()
            .await
            .entry(user_id)
            .or_default()
            .push(appointment);
    }
}

#[async_trait::async_trait]
impl AppointmentQueries for InMemoryAppointmentStore {
    async fn list_by_user_id(&self, user_id: UserId) -> Vec<Appointment> {
        self.get(user_id).await
    }
}
