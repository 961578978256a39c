use time::OffsetDateTime;

use kernel::prelude::entity::{Booking, BookingStatus};

use crate::transfer::{PropertyDto, UserDto};

#[derive(Debug, Clone, PartialEq)]
pub struct BookingDto {
    pub id: String,
    pub property: PropertyDto,
    pub guest: UserDto,
    pub start_date: OffsetDateTime,
    pub end_date: OffsetDateTime,
    pub guest_count: i32,
    pub total_price: f64,
    pub status: BookingStatus,
}

impl From<Booking> for BookingDto {
    fn from(value: Booking) -> Self {
        Self {
            id: value.id().as_ref().clone(),
            property: PropertyDto::from(value.property()),
            guest: UserDto::from(value.user()),
            start_date: *value.date_range().start_date(),
            end_date: *value.date_range().end_date(),
            guest_count: *value.guest_count().as_ref(),
            total_price: *value.total_price().as_ref(),
            status: *value.status(),
        }
    }
}

#[derive(Debug)]
pub struct GetBookingDto {
    pub id: String,
}

#[derive(Debug)]
pub struct CreateBookingDto {
    pub property_id: String,
    pub user_id: String,
    pub start_date: OffsetDateTime,
    pub end_date: OffsetDateTime,
    pub guest_count: i32,
}

#[derive(Debug)]
pub struct CancelBookingDto {
    pub id: String,
    pub canceled_at: OffsetDateTime,
}
