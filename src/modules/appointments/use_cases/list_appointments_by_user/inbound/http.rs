use axum::{
    Json,
    extract::{Path, State},
};
use serde::{Deserialize, Serialize};

use crate::modules::appointments::core::appointment::UserId;
use crate::modules::appointments::core::projections::AppointmentView;
use crate::shell::state::AppState;

#[derive(Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct ListAppointmentsResponse {
    pub appointments: Vec<AppointmentView>,
}

pub async fn handle(
    State(state): State<AppState>,
    Path(user_id): Path<UserId>,
) -> Json<ListAppointmentsResponse> {
    let appointments = state.queries.list_by_user_id(user_id).await;
    Json(ListAppointmentsResponse {
        appointments: appointments.iter().map(AppointmentView::from).collect(),
    })
}
