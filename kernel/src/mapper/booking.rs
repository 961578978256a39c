use crate::entity::{Booking, BookingId, DateRange, GuestCount, Property, TotalPrice};
use crate::mapper::{PropertyMapper, UserMapper};
use crate::record::BookingRecord;
use crate::KernelError;

pub struct BookingMapper;

impl BookingMapper {
    /// Rebuilds a booking from its stored record, re-checking user, property,
    /// stay dates, booking fields, then availability against `availability`
    /// when given. The first failing check is reported.
    pub fn to_domain(
        record: BookingRecord,
        availability: Option<&Property>,
    ) -> error_stack::Result<Booking, KernelError> {
        let BookingRecord {
            id,
            property,
            guest,
            start_date,
            end_date,
            guest_count,
            total_price,
            status,
        } = record;

        let user = UserMapper::to_domain(guest)?;
        let property = PropertyMapper::to_domain(property)?;
        let date_range = DateRange::new(start_date, end_date)?;
        let booking = Booking::new(
            BookingId::new(id),
            property,
            user,
            date_range,
            GuestCount::new(guest_count),
            availability,
        )?;

        Ok(booking.restore(
            total_price.map(TotalPrice::new),
            status.unwrap_or_default(),
        ))
    }

    pub fn to_persistence(booking: &Booking) -> BookingRecord {
        BookingRecord {
            id: booking.id().as_ref().clone(),
            property: PropertyMapper::to_persistence(booking.property()),
            guest: UserMapper::to_persistence(booking.user()),
            start_date: *booking.date_range().start_date(),
            end_date: *booking.date_range().end_date(),
            guest_count: *booking.guest_count().as_ref(),
            total_price: Some(*booking.total_price().as_ref()),
            status: Some(*booking.status()),
        }
    }
}
