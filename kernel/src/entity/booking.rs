mod guest_count;
mod id;
mod status;
mod total_price;

pub use self::{guest_count::*, id::*, status::*, total_price::*};
use time::OffsetDateTime;
use vodca::References;

use crate::cancellation::{RefundRule, RefundRuleFactory};
use crate::entity::{DateRange, Property, User};
use crate::validation::{Validation, ValidationError};
use crate::KernelError;

/// Built only by [`Booking::new`] or the booking mapper. After that only
/// [`Booking::cancel`] changes it.
///
/// ```compile_fail
/// use kernel::prelude::entity::{Booking, GuestCount};
///
/// fn widen(booking: &mut Booking) {
///     booking.substitute(|booking| *booking.guest_count = GuestCount::new(50));
/// }
/// ```
#[derive(Debug, Clone, PartialEq, References)]
pub struct Booking {
    id: BookingId,
    property: Property,
    user: User,
    date_range: DateRange,
    guest_count: GuestCount,
    total_price: TotalPrice,
    status: BookingStatus,
}

impl Booking {
    /// `availability` is the property whose attached bookings the new stay
    /// must not overlap. Without it no availability check happens.
    pub fn new(
        id: BookingId,
        property: Property,
        user: User,
        date_range: DateRange,
        guest_count: GuestCount,
        availability: Option<&Property>,
    ) -> error_stack::Result<Self, KernelError> {
        let guests = *guest_count.as_ref();
        let max_guests = *property.max_guests().as_ref();
        Validation::new()
            .ensure(|| guests > 0, ValidationError::GuestCountNotPositive)
            .ensure(
                || guests <= max_guests,
                ValidationError::MaxGuestsExceeded { max: max_guests },
            )
            .ensure(
                || availability.map_or(true, |other| other.is_available(&id, &date_range)),
                ValidationError::Unavailable,
            )
            .finish()?;

        let total_price = TotalPrice::new(nightly_total(&property, &date_range));
        Ok(Self {
            id,
            property,
            user,
            date_range,
            guest_count,
            total_price,
            status: BookingStatus::default(),
        })
    }

    /// Brings back persisted state after the invariants were re-checked by
    /// [`Booking::new`]. A stored price is kept as it was charged.
    pub(crate) fn restore(mut self, total_price: Option<TotalPrice>, status: BookingStatus) -> Self {
        if let Some(total_price) = total_price {
            self.total_price = total_price;
        }
        self.status = status;
        self
    }

    pub fn raw_nightly_total(&self) -> f64 {
        nightly_total(&self.property, &self.date_range)
    }

    /// Cancels at `now` and reprices the stay with the applicable refund rule.
    /// Calling it again reprices again from the new `now`.
    pub fn cancel(&mut self, now: OffsetDateTime) -> RefundRule {
        let rule = RefundRuleFactory::create(now, *self.date_range.start_date());
        self.total_price = TotalPrice::new(rule.apply(self.raw_nightly_total()));
        self.status = BookingStatus::Canceled;
        rule
    }
}

fn nightly_total(property: &Property, date_range: &DateRange) -> f64 {
    date_range.total_nights() as f64 * property.base_price_per_night().as_ref()
}

#[cfg(test)]
mod test {
    use time::macros::datetime;
    use time::{Duration, OffsetDateTime};

    use crate::cancellation::RefundRule;
    use crate::entity::{
        Booking, BookingId, BookingStatus, DateRange, GuestCount, MaxGuests, PricePerNight,
        Property, PropertyId, PropertyName, TotalPrice, User, UserId, UserName,
    };
    use crate::validation::ValidationError;

    const BASE_PRICE: f64 = 7.25;

    fn property(max_guests: i32) -> Property {
        Property::new(
            PropertyId::new("p-1"),
            PropertyName::new("Casa"),
            None,
            MaxGuests::new(max_guests),
            PricePerNight::new(BASE_PRICE),
        )
        .unwrap()
    }

    fn user() -> User {
        User::new(UserId::new("u-1"), UserName::new("Maria")).unwrap()
    }

    fn stay(start: OffsetDateTime, nights: i64) -> DateRange {
        DateRange::new(start, start + Duration::days(nights)).unwrap()
    }

    fn book(id: &str, range: DateRange, guests: i32, availability: Option<&Property>) -> Booking {
        Booking::new(
            BookingId::new(id),
            property(4),
            user(),
            range,
            GuestCount::new(guests),
            availability,
        )
        .unwrap()
    }

    #[test]
    fn prices_fresh_booking_by_nights() {
        let booking = book("b-1", stay(datetime!(2025-08-13 00:00 UTC), 5), 2, None);
        assert_eq!(booking.total_price(), &TotalPrice::new(5.0 * BASE_PRICE));
        assert_eq!(booking.status(), &BookingStatus::Confirmed);
        assert_eq!(booking.raw_nightly_total(), 5.0 * BASE_PRICE);
    }

    #[test]
    fn rejects_non_positive_guest_count() {
        for guests in [0, -3] {
            let report = Booking::new(
                BookingId::new("b-1"),
                property(1),
                user(),
                stay(datetime!(2025-08-13 00:00 UTC), 2),
                GuestCount::new(guests),
                None,
            )
            .unwrap_err();
            assert_eq!(
                report.current_context().to_string(),
                "O número de hóspedes deve ser maior que zero."
            );
        }
    }

    #[test]
    fn rejects_guests_over_capacity() {
        let report = Booking::new(
            BookingId::new("b-1"),
            property(1),
            user(),
            stay(datetime!(2025-08-13 00:00 UTC), 2),
            GuestCount::new(10),
            None,
        )
        .unwrap_err();
        assert_eq!(
            report.current_context().validation(),
            Some(&ValidationError::MaxGuestsExceeded { max: 1 })
        );
        assert_eq!(
            report.current_context().to_string(),
            "Número máximo de hóspedes excedido. Máximo permitido: 1"
        );
    }

    #[test]
    fn rejects_overlap_with_confirmed_booking() {
        let mut existing_property = property(1);
        let existing = book("b-1", stay(datetime!(2025-08-13 00:00 UTC), 7), 1, None);
        existing_property.add_booking(&existing);

        let report = Booking::new(
            BookingId::new("b-2"),
            property(1),
            user(),
            stay(datetime!(2025-08-14 00:00 UTC), 2),
            GuestCount::new(1),
            Some(&existing_property),
        )
        .unwrap_err();
        assert_eq!(
            report.current_context().to_string(),
            "A propriedade não está disponível para o período selecionado."
        );
    }

    #[test]
    fn accepts_stay_after_existing_checkout() {
        let mut existing_property = property(1);
        let existing = book("b-1", stay(datetime!(2025-08-13 00:00 UTC), 7), 1, None);
        existing_property.add_booking(&existing);

        let booking = book(
            "b-2",
            stay(datetime!(2025-08-20 00:00 UTC), 3),
            1,
            Some(&existing_property),
        );
        assert_eq!(booking.status(), &BookingStatus::Confirmed);
    }

    #[test]
    fn capacity_is_checked_before_availability() {
        let mut existing_property = property(1);
        let existing = book("b-1", stay(datetime!(2025-08-13 00:00 UTC), 7), 1, None);
        existing_property.add_booking(&existing);

        let report = Booking::new(
            BookingId::new("b-2"),
            property(1),
            user(),
            stay(datetime!(2025-08-14 00:00 UTC), 2),
            GuestCount::new(5),
            Some(&existing_property),
        )
        .unwrap_err();
        assert_eq!(
            report.current_context().validation(),
            Some(&ValidationError::MaxGuestsExceeded { max: 1 })
        );
    }

    #[test]
    fn cancel_more_than_a_week_ahead_is_free() {
        let now = datetime!(2025-08-01 10:00 UTC);
        let mut booking = book("b-1", stay(now + Duration::days(8), 12), 1, None);
        let rule = booking.cancel(now);
        assert_eq!(rule, RefundRule::FullRefund);
        assert_eq!(booking.total_price(), &TotalPrice::new(0.0));
        assert_eq!(booking.status(), &BookingStatus::Canceled);
    }

    #[test]
    fn cancel_three_days_ahead_charges_half() {
        let now = datetime!(2025-08-01 10:00 UTC);
        let mut booking = book("b-1", stay(now + Duration::days(3), 5), 1, None);
        let rule = booking.cancel(now);
        assert_eq!(rule, RefundRule::PartialRefund);
        assert_eq!(
            booking.total_price(),
            &TotalPrice::new(5.0 * BASE_PRICE * 0.5)
        );
    }

    #[test]
    fn cancel_on_check_in_day_charges_everything() {
        let now = datetime!(2025-08-01 10:00 UTC);
        let mut booking = book("b-1", stay(now, 5), 1, None);
        let rule = booking.cancel(now);
        assert_eq!(rule, RefundRule::NoRefund);
        assert_eq!(booking.total_price(), &TotalPrice::new(5.0 * BASE_PRICE));
    }

    #[test]
    fn cancel_reprices_from_nightly_total_not_stored_price() {
        let now = datetime!(2025-08-01 10:00 UTC);
        let mut booking = book("b-1", stay(now + Duration::days(2), 4), 1, None)
            .restore(Some(TotalPrice::new(999.0)), BookingStatus::Confirmed);
        booking.cancel(now);
        assert_eq!(
            booking.total_price(),
            &TotalPrice::new(4.0 * BASE_PRICE * 0.5)
        );
    }

    #[test]
    fn cancelling_again_reprices_from_new_now() {
        let check_in = datetime!(2025-08-20 00:00 UTC);
        let mut booking = book("b-1", stay(check_in, 2), 1, None);

        booking.cancel(check_in - Duration::days(10));
        assert_eq!(booking.total_price(), &TotalPrice::new(0.0));

        booking.cancel(check_in);
        assert_eq!(booking.total_price(), &TotalPrice::new(2.0 * BASE_PRICE));
        assert_eq!(booking.status(), &BookingStatus::Canceled);
    }

    #[test]
    fn restore_keeps_stored_values() {
        let booking = book("b-1", stay(datetime!(2025-08-13 00:00 UTC), 2), 1, None)
            .restore(Some(TotalPrice::new(42.5)), BookingStatus::Pending);
        assert_eq!(booking.total_price(), &TotalPrice::new(42.5));
        assert_eq!(booking.status(), &BookingStatus::Pending);

        let booking = booking.restore(None, BookingStatus::Canceled);
        assert_eq!(booking.total_price(), &TotalPrice::new(42.5));
        assert_eq!(booking.status(), &BookingStatus::Canceled);
    }

    #[test]
    fn cancel_touches_only_price_and_status() {
        let now = datetime!(2025-08-01 10:00 UTC);
        let booking = book("b-1", stay(now + Duration::days(3), 2), 3, None);
        let mut canceled = booking.clone();
        canceled.cancel(now);

        assert_eq!(canceled.id(), booking.id());
        assert_eq!(canceled.property(), booking.property());
        assert_eq!(canceled.user(), booking.user());
        assert_eq!(canceled.date_range(), booking.date_range());
        assert_eq!(canceled.guest_count(), booking.guest_count());
        assert_ne!(canceled.total_price(), booking.total_price());
        assert_ne!(canceled.status(), booking.status());
    }
}
