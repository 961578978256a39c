use error_stack::Report;
use uuid::Uuid;

use kernel::interface::database::{DatabaseConnection, Transaction};
use kernel::interface::query::{
    BookingQuery, DependOnBookingQuery, DependOnPropertyQuery, DependOnUserQuery, UserQuery,
};
use kernel::interface::update::{BookingModifier, DependOnBookingModifier};
use kernel::prelude::entity::{
    Booking, BookingId, BookingStatus, DateRange, GuestCount, PropertyId, UserId,
};
use kernel::KernelError;

use crate::service::load_with_bookings;
use crate::transfer::{BookingDto, CancelBookingDto, CreateBookingDto, GetBookingDto};

#[async_trait::async_trait]
pub trait GetBookingService: 'static + Sync + Send + DependOnBookingQuery {
    async fn get_booking(
        &self,
        dto: GetBookingDto,
    ) -> error_stack::Result<Option<BookingDto>, KernelError> {
        let mut connection = self.database_connection().transact().await?;
        let booking = self
            .booking_query()
            .find_by_id(&mut connection, &BookingId::new(dto.id))
            .await?;
        Ok(booking.map(BookingDto::from))
    }
}

impl<T> GetBookingService for T where T: DependOnBookingQuery {}

#[async_trait::async_trait]
pub trait CreateBookingService:
    'static
    + Sync
    + Send
    + DependOnUserQuery
    + DependOnPropertyQuery
    + DependOnBookingQuery
    + DependOnBookingModifier
{
    async fn create_booking(
        &self,
        dto: CreateBookingDto,
    ) -> error_stack::Result<BookingDto, KernelError> {
        let mut connection = self.database_connection().transact().await?;

        let user_id = UserId::new(dto.user_id);
        let user = self
            .user_query()
            .find_by_id(&mut connection, &user_id)
            .await?
            .ok_or_else(|| {
                Report::new(KernelError::NotFound)
                    .attach_printable(format!("No user found for id {}", user_id.as_ref()))
            })?;
        let property_id = PropertyId::new(dto.property_id);
        let property = load_with_bookings(self, &mut connection, &property_id).await?;
        let date_range = DateRange::new(dto.start_date, dto.end_date)?;

        let booking = Booking::new(
            BookingId::new(Uuid::new_v4().to_string()),
            property.clone(),
            user,
            date_range,
            GuestCount::new(dto.guest_count),
            Some(&property),
        )?;

        self.booking_modifier()
            .create(&mut connection, &booking)
            .await?;
        connection.commit().await?;

        tracing::info!(
            booking = %booking.id().as_ref(),
            property = %property_id.as_ref(),
            nights = booking.date_range().total_nights(),
            "booking created"
        );
        Ok(BookingDto::from(booking))
    }
}

impl<T> CreateBookingService for T where
    T: DependOnUserQuery + DependOnPropertyQuery + DependOnBookingQuery + DependOnBookingModifier
{
}

#[async_trait::async_trait]
pub trait CancelBookingService:
    'static + Sync + Send + DependOnBookingQuery + DependOnBookingModifier
{
    async fn cancel_booking(
        &self,
        dto: CancelBookingDto,
    ) -> error_stack::Result<BookingDto, KernelError> {
        let mut connection = self.database_connection().transact().await?;

        let id = BookingId::new(dto.id);
        let mut booking = self
            .booking_query()
            .find_by_id(&mut connection, &id)
            .await?
            .ok_or_else(|| {
                Report::new(KernelError::NotFound)
                    .attach_printable(format!("No booking found for id {}", id.as_ref()))
            })?;

        if booking.status() == &BookingStatus::Canceled {
            tracing::warn!(
                booking = %id.as_ref(),
                "booking already canceled, repricing from the new cancellation time"
            );
        }
        let rule = booking.cancel(dto.canceled_at);

        self.booking_modifier()
            .update(&mut connection, &booking)
            .await?;
        connection.commit().await?;

        tracing::info!(
            booking = %id.as_ref(),
            rule = ?rule,
            total_price = booking.total_price().as_ref(),
            "booking canceled"
        );
        Ok(BookingDto::from(booking))
    }
}

impl<T> CancelBookingService for T where T: DependOnBookingQuery + DependOnBookingModifier {}

#[cfg(test)]
mod test {
    use time::macros::datetime;
    use time::{Duration, OffsetDateTime};

    use kernel::prelude::entity::BookingStatus;
    use kernel::prelude::validation::ValidationError;
    use kernel::KernelError;

    use crate::mock::MockDatabase;
    use crate::service::{
        CancelBookingService, CreateBookingService, CreatePropertyService, CreateUserService,
        GetBookingService,
    };
    use crate::transfer::{
        BookingDto, CancelBookingDto, CreateBookingDto, CreatePropertyDto, CreateUserDto,
        GetBookingDto,
    };

    struct Fixture {
        db: MockDatabase,
        property_id: String,
        user_id: String,
    }

    async fn fixture() -> error_stack::Result<Fixture, KernelError> {
        let db = MockDatabase::default();
        let property = db
            .create_property(CreatePropertyDto {
                name: "Apartamento Centro".to_string(),
                description: None,
                max_guests: 2,
                base_price_per_night: 100.0,
            })
            .await?;
        let user = db
            .create_user(CreateUserDto {
                name: "João".to_string(),
            })
            .await?;
        Ok(Fixture {
            db,
            property_id: property.id,
            user_id: user.id,
        })
    }

    impl Fixture {
        async fn book(
            &self,
            start_date: OffsetDateTime,
            nights: i64,
            guest_count: i32,
        ) -> error_stack::Result<BookingDto, KernelError> {
            self.db
                .create_booking(CreateBookingDto {
                    property_id: self.property_id.clone(),
                    user_id: self.user_id.clone(),
                    start_date,
                    end_date: start_date + Duration::days(nights),
                    guest_count,
                })
                .await
        }
    }

    #[tokio::test]
    async fn creates_confirmed_booking() -> error_stack::Result<(), KernelError> {
        let fixture = fixture().await?;
        let booking = fixture.book(datetime!(2025-08-13 00:00 UTC), 5, 2).await?;

        assert_eq!(booking.total_price, 500.0);
        assert_eq!(booking.status, BookingStatus::Confirmed);
        assert_eq!(booking.guest.id, fixture.user_id);

        let found = fixture
            .db
            .get_booking(GetBookingDto {
                id: booking.id.clone(),
            })
            .await?;
        assert_eq!(found, Some(booking));
        Ok(())
    }

    #[tokio::test]
    async fn rejects_overlapping_booking() -> error_stack::Result<(), KernelError> {
        let fixture = fixture().await?;
        fixture.book(datetime!(2025-08-13 00:00 UTC), 7, 1).await?;

        let report = fixture
            .book(datetime!(2025-08-14 00:00 UTC), 2, 1)
            .await
            .unwrap_err();
        assert_eq!(
            report.current_context().validation(),
            Some(&ValidationError::Unavailable)
        );
        assert_eq!(fixture.db.snapshot().bookings.len(), 1);

        // back-to-back stays share the checkout day
        fixture.book(datetime!(2025-08-20 00:00 UTC), 2, 1).await?;
        assert_eq!(fixture.db.snapshot().bookings.len(), 2);
        Ok(())
    }

    #[tokio::test]
    async fn rejects_too_many_guests() -> error_stack::Result<(), KernelError> {
        let fixture = fixture().await?;
        let report = fixture
            .book(datetime!(2025-08-13 00:00 UTC), 2, 3)
            .await
            .unwrap_err();
        assert_eq!(
            report.current_context().to_string(),
            "Número máximo de hóspedes excedido. Máximo permitido: 2"
        );
        Ok(())
    }

    #[tokio::test]
    async fn unknown_user_or_property_is_not_found() -> error_stack::Result<(), KernelError> {
        let fixture = fixture().await?;
        let dto = |property_id: &str, user_id: &str| CreateBookingDto {
            property_id: property_id.to_string(),
            user_id: user_id.to_string(),
            start_date: datetime!(2025-08-13 00:00 UTC),
            end_date: datetime!(2025-08-15 00:00 UTC),
            guest_count: 1,
        };

        let report = fixture
            .db
            .create_booking(dto(&fixture.property_id, "missing"))
            .await
            .unwrap_err();
        assert!(matches!(report.current_context(), KernelError::NotFound));

        let report = fixture
            .db
            .create_booking(dto("missing", &fixture.user_id))
            .await
            .unwrap_err();
        assert!(matches!(report.current_context(), KernelError::NotFound));
        Ok(())
    }

    #[tokio::test]
    async fn cancellation_applies_refund_and_frees_dates() -> error_stack::Result<(), KernelError>
    {
        let fixture = fixture().await?;
        let check_in = datetime!(2025-08-13 00:00 UTC);
        let booking = fixture.book(check_in, 4, 1).await?;

        let canceled = fixture
            .db
            .cancel_booking(CancelBookingDto {
                id: booking.id.clone(),
                canceled_at: check_in - Duration::days(3),
            })
            .await?;
        assert_eq!(canceled.status, BookingStatus::Canceled);
        assert_eq!(canceled.total_price, 200.0);

        let snapshot = fixture.db.snapshot();
        let stored = &snapshot.bookings[&booking.id];
        assert_eq!(stored.status, Some(BookingStatus::Canceled));
        assert_eq!(stored.total_price, Some(200.0));

        let rebooked = fixture.book(check_in, 4, 1).await?;
        assert_eq!(rebooked.status, BookingStatus::Confirmed);
        Ok(())
    }

    #[tokio::test]
    async fn cancel_unknown_booking_is_not_found() {
        let db = MockDatabase::default();
        let report = db
            .cancel_booking(CancelBookingDto {
                id: "missing".to_string(),
                canceled_at: OffsetDateTime::now_utc(),
            })
            .await
            .unwrap_err();
        assert!(matches!(report.current_context(), KernelError::NotFound));
    }

    #[tokio::test]
    async fn unknown_booking_is_none() -> error_stack::Result<(), KernelError> {
        let db = MockDatabase::default();
        let found = db
            .get_booking(GetBookingDto {
                id: "missing".to_string(),
            })
            .await?;
        assert!(found.is_none());
        Ok(())
    }
}
