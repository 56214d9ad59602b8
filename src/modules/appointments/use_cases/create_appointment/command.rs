use crate::modules::appointments::core::appointment::UserId;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateAppointment {
    pub user_id: UserId,
    /// Unparsed start, exactly as the client sent it.
    pub appointment: String,
}
