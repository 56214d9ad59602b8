use crate::modules::appointments::core::appointment::{Appointment, UserId};
use async_trait::async_trait;

/// Owns every booked appointment, keyed per user in insertion order.
#[async_trait]
pub trait AppointmentStore: Send + Sync {
    /// Empty when the user has never booked.
    async fn get(&self, user_id: UserId) -> Vec<Appointment>;
    async fn append(&self, user_id: UserId, appointment: Appointment);
}
