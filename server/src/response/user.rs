use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;

use application::transfer::UserDto;

use crate::controller::Exhaust;

#[derive(Debug, Serialize)]
pub struct UserResponse {
    id: String,
    name: String,
}

impl From<UserDto> for UserResponse {
    fn from(dto: UserDto) -> Self {
        Self {
            id: dto.id,
            name: dto.name,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct UserCreatedResponse {
    message: &'static str,
    user: UserResponse,
}

impl IntoResponse for UserCreatedResponse {
    fn into_response(self) -> Response {
        (StatusCode::CREATED, axum::Json(self)).into_response()
    }
}

pub struct UserPresenter;

impl Exhaust<UserDto> for UserPresenter {
    type To = UserCreatedResponse;
    fn emit(&self, input: UserDto) -> Self::To {
        UserCreatedResponse {
            message: "User created successfully",
            user: UserResponse::from(input),
        }
    }
}
