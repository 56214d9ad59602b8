use axum::{
    Json,
    extract::{Path, State, rejection::JsonRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};

use crate::modules::appointments::core::appointment::UserId;
use crate::modules::appointments::core::projections::AppointmentView;
use crate::modules::appointments::use_cases::create_appointment::command::CreateAppointment;
use crate::modules::appointments::use_cases::create_appointment::decision::DecideError;
use crate::shell::state::AppState;

pub const MALFORMED_BODY_MESSAGE: &str =
    "Request body must be a JSON object with an appointment string";

#[derive(Deserialize)]
pub struct CreateAppointmentBody {
    pub appointment: String,
}

#[derive(Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct MessageResponse {
    pub message: String,
}

impl IntoResponse for DecideError {
    fn into_response(self) -> Response {
        (
            StatusCode::BAD_REQUEST,
            Json(MessageResponse {
                message: self.to_string(),
            }),
        )
            .into_response()
    }
}

pub async fn handle(
    State(state): State<AppState>,
    Path(user_id): Path<UserId>,
    body: Result<Json<CreateAppointmentBody>, JsonRejection>,
) -> Response {
    let Json(body) = match body {
        Ok(b) => b,
        Err(rejection) => {
            tracing::debug!(user_id, %rejection, "malformed create appointment body");
            return (
                StatusCode::UNPROCESSABLE_ENTITY,
                Json(MessageResponse {
                    message: MALFORMED_BODY_MESSAGE.to_string(),
                }),
            )
                .into_response();
        }
    };

    let command = CreateAppointment {
        user_id,
        appointment: body.appointment,
    };

    match state.create_handler.handle(command).await {
        Ok(appointment) => {
            (StatusCode::CREATED, Json(AppointmentView::from(appointment))).into_response()
        }
        Err(reason) => reason.into_response(),
    }
}
