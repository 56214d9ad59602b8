use crate::modules::appointments::core::appointment::{Appointment, UserId};
use async_trait::async_trait;

#[async_trait]
pub trait AppointmentQueries {
    async fn list_by_user_id(&self, user_id: UserId) -> Vec<Appointment>;
}
