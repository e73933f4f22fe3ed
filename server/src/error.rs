use axum::{
    Json,
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;
use trip_planner_lib::trip_request::Field;

use crate::routes::MessageBody;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("{}", .0.body_text())]
    Payload(#[from] JsonRejection),
    #[error("missing required fields: {}", field_list(.0))]
    MissingFields(Vec<Field>),
}

fn field_list(fields: &[Field]) -> String {
    fields
        .iter()
        .map(Field::label)
        .collect::<Vec<&str>>()
        .join(", ")
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = match &self {
            AppError::Payload(rejection) => rejection.status(),
            AppError::MissingFields(_) => StatusCode::UNPROCESSABLE_ENTITY,
        };

        let body = MessageBody {
            message: self.to_string(),
        };

        (status, Json(body)).into_response()
    }
}
