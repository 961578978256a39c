use serde::Serialize;
use vodca::References;

use crate::entity::{Booking, BookingId, BookingStatus, DateRange};

/// What a property remembers of a booking attached to it. The booking itself
/// stays with whoever reconstructed it.
#[derive(Debug, Clone, PartialEq, Eq, References, Serialize)]
pub struct Reservation {
    booking_id: BookingId,
    date_range: DateRange,
    status: BookingStatus,
}

impl Reservation {
    pub fn new(booking_id: BookingId, date_range: DateRange, status: BookingStatus) -> Self {
        Self {
            booking_id,
            date_range,
            status,
        }
    }

    pub fn blocks(&self, date_range: &DateRange) -> bool {
        self.status == BookingStatus::Confirmed && self.date_range.overlaps(date_range)
    }
}

impl From<&Booking> for Reservation {
    fn from(booking: &Booking) -> Self {
        Self::new(
            booking.id().clone(),
            *booking.date_range(),
            *booking.status(),
        )
    }
}
