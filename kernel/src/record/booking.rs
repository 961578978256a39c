use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

use crate::entity::BookingStatus;
use crate::record::{PropertyRecord, UserRecord};

/// Flat stored shape of a booking with the rows it refers to.
/// `total_price` and `status` are absent for rows written before pricing or
/// status tracking existed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BookingRecord {
    pub id: String,
    pub property: PropertyRecord,
    pub guest: UserRecord,
    pub start_date: OffsetDateTime,
    pub end_date: OffsetDateTime,
    pub guest_count: i32,
    pub total_price: Option<f64>,
    pub status: Option<BookingStatus>,
}
