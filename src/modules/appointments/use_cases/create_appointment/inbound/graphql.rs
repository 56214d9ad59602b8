use async_graphql::{Context, Object, Result as GqlResult};

use crate::modules::appointments::core::appointment::UserId;
use crate::modules::appointments::core::projections::AppointmentView;
use crate::modules::appointments::use_cases::create_appointment::command::CreateAppointment;
use crate::modules::appointments::use_cases::list_appointments_by_user::inbound::graphql::GqlAppointment;
use crate::shell::state::AppState;

pub struct MutationRoot;

#[Object]
impl MutationRoot {
    async fn create_appointment(
        &self,
        context: &Context<'_>,
        user_id: UserId,
        appointment: String,
    ) -> GqlResult<GqlAppointment> {
        let state = context.data::<AppState>()?;
        let command = CreateAppointment {
            user_id,
            appointment,
        };

        let booked = state
            .create_handler
            .handle(command)
            .await
            .map_err(|e| async_graphql::Error::new(e.to_string()))?;

        Ok(AppointmentView::from(booked).into())
    }
}
