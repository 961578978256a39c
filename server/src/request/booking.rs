use serde::Deserialize;
use time::OffsetDateTime;

use application::transfer::{CancelBookingDto, CreateBookingDto, GetBookingDto};

use crate::controller::Intake;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateBookingRequest {
    property_id: String,
    guest_id: String,
    #[serde(with = "time::serde::rfc3339")]
    start_date: OffsetDateTime,
    #[serde(with = "time::serde::rfc3339")]
    end_date: OffsetDateTime,
    guest_count: i32,
}

#[derive(Debug)]
pub struct GetBookingRequest {
    id: String,
}

impl GetBookingRequest {
    pub fn new(id: String) -> Self {
        Self { id }
    }
}

/// Cancels as of the moment the request is transformed.
#[derive(Debug)]
pub struct CancelBookingRequest {
    id: String,
}

impl CancelBookingRequest {
    pub fn new(id: String) -> Self {
        Self { id }
    }
}

pub struct BookingTransformer;

impl Intake<CreateBookingRequest> for BookingTransformer {
    type To = CreateBookingDto;
    fn emit(&self, input: CreateBookingRequest) -> Self::To {
        CreateBookingDto {
            property_id: input.property_id,
            user_id: input.guest_id,
            start_date: input.start_date,
            end_date: input.end_date,
            guest_count: input.guest_count,
        }
    }
}

impl Intake<GetBookingRequest> for BookingTransformer {
    type To = GetBookingDto;
    fn emit(&self, input: GetBookingRequest) -> Self::To {
        GetBookingDto { id: input.id }
    }
}

impl Intake<CancelBookingRequest> for BookingTransformer {
    type To = CancelBookingDto;
    fn emit(&self, input: CancelBookingRequest) -> Self::To {
        CancelBookingDto {
            id: input.id,
            canceled_at: OffsetDateTime::now_utc(),
        }
    }
}
