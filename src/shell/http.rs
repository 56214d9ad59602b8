use axum::{Router, routing::get};

use crate::modules::appointments::use_cases::create_appointment::inbound::http as create_http;
use crate::modules::appointments::use_cases::list_appointments_by_user::inbound::http as list_http;
use crate::shell::state::AppState;

pub fn router(state: AppState) -> Router {
    Router::new()
        .route(
            "/api/appointments/{user_id}",
            get(list_http::handle).post(create_http::handle),
        )
        .with_state(state)
}
