use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;
use time::OffsetDateTime;

use application::transfer::BookingDto;
use kernel::prelude::entity::BookingStatus;

use crate::controller::Exhaust;
use crate::response::{PropertyResponse, UserResponse};

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BookingResponse {
    id: String,
    property: PropertyResponse,
    guest: UserResponse,
    #[serde(with = "time::serde::rfc3339")]
    start_date: OffsetDateTime,
    #[serde(with = "time::serde::rfc3339")]
    end_date: OffsetDateTime,
    guest_count: i32,
    total_price: f64,
    status: BookingStatus,
}

impl IntoResponse for BookingResponse {
    fn into_response(self) -> Response {
        (StatusCode::OK, axum::Json(self)).into_response()
    }
}

impl From<BookingDto> for BookingResponse {
    fn from(dto: BookingDto) -> Self {
        Self {
            id: dto.id,
            property: PropertyResponse::from(dto.property),
            guest: UserResponse::from(dto.guest),
            start_date: dto.start_date,
            end_date: dto.end_date,
            guest_count: dto.guest_count,
            total_price: dto.total_price,
            status: dto.status,
        }
    }
}

pub struct BookingPresenter;

impl Exhaust<BookingDto> for BookingPresenter {
    type To = BookingResponse;
    fn emit(&self, input: BookingDto) -> Self::To {
        BookingResponse::from(input)
    }
}

impl Exhaust<Option<BookingDto>> for BookingPresenter {
    type To = Option<BookingResponse>;
    fn emit(&self, input: Option<BookingDto>) -> Self::To {
        input.map(BookingResponse::from)
    }
}
