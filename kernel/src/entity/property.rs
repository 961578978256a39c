mod description;
mod id;
mod max_guests;
mod name;
mod price;
mod reservation;

pub use self::{description::*, id::*, max_guests::*, name::*, price::*, reservation::*};
use vodca::References;

use crate::entity::{Booking, BookingId, DateRange};
use crate::validation::{Validation, ValidationError};
use crate::KernelError;

/// Only [`Property::new`] builds one. Reservations are attached through
/// [`Property::add_booking`].
///
/// ```compile_fail
/// use kernel::prelude::entity::{MaxGuests, Property};
///
/// fn overfill(property: &mut Property) {
///     property.substitute(|property| *property.max_guests = MaxGuests::new(0));
/// }
/// ```
#[derive(Debug, Clone, PartialEq, References)]
pub struct Property {
    id: PropertyId,
    name: PropertyName,
    description: Option<PropertyDescription>,
    max_guests: MaxGuests,
    base_price_per_night: PricePerNight,
    reservations: Vec<Reservation>,
}

impl Property {
    pub fn new(
        id: PropertyId,
        name: PropertyName,
        description: Option<PropertyDescription>,
        max_guests: MaxGuests,
        base_price_per_night: PricePerNight,
    ) -> error_stack::Result<Self, KernelError> {
        Validation::new()
            .ensure(|| !name.as_ref().is_empty(), ValidationError::NameRequired)
            .ensure(
                || *max_guests.as_ref() > 0,
                ValidationError::MaxGuestsNotPositive,
            )
            .finish()?;
        Ok(Self {
            id,
            name,
            description,
            max_guests,
            base_price_per_night,
            reservations: Vec::new(),
        })
    }

    /// Attaches without validating; callers construct the booking against
    /// this property first.
    pub fn add_booking(&mut self, booking: &Booking) {
        self.reservations.push(Reservation::from(booking));
    }

    /// Whether `booking_id` may hold `date_range`; its own reservation is ignored.
    pub fn is_available(&self, booking_id: &BookingId, date_range: &DateRange) -> bool {
        !self.reservations.iter().any(|reservation| {
            reservation.booking_id() != booking_id && reservation.blocks(date_range)
        })
    }

    pub fn is_vacant(&self, date_range: &DateRange) -> bool {
        !self
            .reservations
            .iter()
            .any(|reservation| reservation.blocks(date_range))
    }
}
