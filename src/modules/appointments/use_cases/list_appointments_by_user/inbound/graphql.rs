use async_graphql::{Context, Object, Result as GqlResult};

use crate::modules::appointments::core::appointment::UserId;
use crate::modules::appointments::core::projections::AppointmentView;
use crate::shell::state::AppState;

#[derive(async_graphql::SimpleObject, Clone)]
pub struct GqlAppointment {
    pub start_time: String,
    pub end_time: String,
}

impl From<AppointmentView> for GqlAppointment {
    fn from(v: AppointmentView) -> Self {
        Self {
            start_time: v.start_time,
            end_time: v.end_time,
        }
    }
}

pub struct QueryRoot;

#[Object]
impl QueryRoot {
    async fn appointments(
        &self,
        context: &Context<'_>,
        user_id: UserId,
    ) -> GqlResult<Vec<GqlAppointment>> {
        let state = context.data::<AppState>()?;
        let list = state.queries.list_by_user_id(user_id).await;
        Ok(list
            .iter()
            .map(|appointment| AppointmentView::from(appointment).into())
            .collect())
    }
}
