use std::str::FromStr;

use error_stack::Report;
use sqlx::PgConnection;
use time::OffsetDateTime;

use kernel::interface::mapper::BookingMapper;
use kernel::interface::query::BookingQuery;
use kernel::interface::record::{BookingRecord, PropertyRecord, UserRecord};
use kernel::interface::update::BookingModifier;
use kernel::prelude::entity::{Booking, BookingId, BookingStatus, PropertyId};
use kernel::KernelError;

use crate::database::postgres::property::PgPropertyInternal;
use crate::database::postgres::PostgresTransaction;
use crate::error::ConvertError;

pub struct PostgresBookingRepository;

#[async_trait::async_trait]
impl BookingQuery for PostgresBookingRepository {
    type Transaction = PostgresTransaction;

    async fn find_by_id(
        &self,
        con: &mut PostgresTransaction,
        id: &BookingId,
    ) -> error_stack::Result<Option<Booking>, KernelError> {
        PgBookingInternal::find_by_id(con, id).await
    }

    async fn find_by_property_id(
        &self,
        con: &mut PostgresTransaction,
        property_id: &PropertyId,
    ) -> error_stack::Result<Vec<Booking>, KernelError> {
        PgBookingInternal::find_by_property_id(con, property_id).await
    }
}

#[async_trait::async_trait]
impl BookingModifier for PostgresBookingRepository {
    type Transaction = PostgresTransaction;

    async fn create(
        &self,
        con: &mut PostgresTransaction,
        booking: &Booking,
    ) -> error_stack::Result<(), KernelError> {
        PgBookingInternal::create(con, booking).await
    }

    async fn update(
        &self,
        con: &mut PostgresTransaction,
        booking: &Booking,
    ) -> error_stack::Result<(), KernelError> {
        PgBookingInternal::update(con, booking).await
    }
}

#[derive(sqlx::FromRow)]
struct BookingRow {
    id: String,
    start_date: OffsetDateTime,
    end_date: OffsetDateTime,
    guest_count: i32,
    total_price: Option<f64>,
    status: Option<String>,
    property_id: String,
    property_name: String,
    property_description: Option<String>,
    property_max_guests: i32,
    property_base_price_per_night: f64,
    guest_id: String,
    guest_name: String,
}

impl TryFrom<BookingRow> for BookingRecord {
    type Error = Report<KernelError>;

    fn try_from(row: BookingRow) -> Result<Self, Self::Error> {
        let status = row
            .status
            .as_deref()
            .map(BookingStatus::from_str)
            .transpose()?;
        Ok(BookingRecord {
            id: row.id,
            property: PropertyRecord {
                id: row.property_id,
                name: row.property_name,
                description: row.property_description,
                max_guests: row.property_max_guests,
                base_price_per_night: row.property_base_price_per_night,
            },
            guest: UserRecord {
                id: row.guest_id,
                name: row.guest_name,
            },
            start_date: row.start_date,
            end_date: row.end_date,
            guest_count: row.guest_count,
            total_price: row.total_price,
            status,
        })
    }
}

pub(in crate::database) struct PgBookingInternal;

impl PgBookingInternal {
    async fn find_by_id(
        con: &mut PgConnection,
        id: &BookingId,
    ) -> error_stack::Result<Option<Booking>, KernelError> {
        let row = sqlx::query_as::<_, BookingRow>(
            // language=postgresql
            r#"
            SELECT
                b.id, b.start_date, b.end_date, b.guest_count, b.total_price, b.status,
                p.id AS property_id,
                p.name AS property_name,
                p.description AS property_description,
                p.max_guests AS property_max_guests,
                p.base_price_per_night AS property_base_price_per_night,
                u.id AS guest_id,
                u.name AS guest_name
            FROM bookings b
            JOIN properties p ON p.id = b.property_id
            JOIN users u ON u.id = b.guest_id
            WHERE b.id = $1
            "#,
        )
        .bind(id.as_ref())
        .fetch_optional(con)
        .await
        .convert_error()?;
        row.map(|row| {
            let record = BookingRecord::try_from(row)?;
            BookingMapper::to_domain(record, None)
        })
        .transpose()
    }

    /// Cancelled bookings are rebuilt without an availability check; every
    /// other one is checked against the bookings before it.
    async fn find_by_property_id(
        con: &mut PgConnection,
        property_id: &PropertyId,
    ) -> error_stack::Result<Vec<Booking>, KernelError> {
        let Some(mut context) = PgPropertyInternal::find_by_id(&mut *con, property_id).await?
        else {
            return Ok(Vec::new());
        };
        let rows = sqlx::query_as::<_, BookingRow>(
            // language=postgresql
            r#"
            SELECT
                b.id, b.start_date, b.end_date, b.guest_count, b.total_price, b.status,
                p.id AS property_id,
                p.name AS property_name,
                p.description AS property_description,
                p.max_guests AS property_max_guests,
                p.base_price_per_night AS property_base_price_per_night,
                u.id AS guest_id,
                u.name AS guest_name
            FROM bookings b
            JOIN properties p ON p.id = b.property_id
            JOIN users u ON u.id = b.guest_id
            WHERE b.property_id = $1
            ORDER BY b.start_date, b.id
            "#,
        )
        .bind(property_id.as_ref())
        .fetch_all(con)
        .await
        .convert_error()?;

        let mut bookings = Vec::with_capacity(rows.len());
        for row in rows {
            let record = BookingRecord::try_from(row)?;
            let availability =
                (record.status != Some(BookingStatus::Canceled)).then_some(&context);
            let booking = BookingMapper::to_domain(record, availability)?;
            context.add_booking(&booking);
            bookings.push(booking);
        }
        tracing::debug!(
            property = %property_id.as_ref(),
            bookings = bookings.len(),
            "loaded property bookings"
        );
        Ok(bookings)
    }

    async fn create(
        con: &mut PgConnection,
        booking: &Booking,
    ) -> error_stack::Result<(), KernelError> {
        let record = BookingMapper::to_persistence(booking);
        sqlx::query(
            // language=postgresql
            r#"
            INSERT INTO bookings (id, property_id, guest_id, start_date, end_date, guest_count, total_price, status)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
            "#,
        )
        .bind(record.id)
        .bind(record.property.id)
        .bind(record.guest.id)
        .bind(record.start_date)
        .bind(record.end_date)
        .bind(record.guest_count)
        .bind(record.total_price)
        .bind(record.status.map(|status| status.to_string()))
        .execute(con)
        .await
        .convert_error()?;
        Ok(())
    }

    async fn update(
        con: &mut PgConnection,
        booking: &Booking,
    ) -> error_stack::Result<(), KernelError> {
        let record = BookingMapper::to_persistence(booking);
        let result = sqlx::query(
            // language=postgresql
            r#"
            UPDATE bookings
            SET total_price = $2, status = $3
            WHERE id = $1
            "#,
        )
        .bind(&record.id)
        .bind(record.total_price)
        .bind(record.status.map(|status| status.to_string()))
        .execute(con)
        .await
        .convert_error()?;
        if result.rows_affected() == 0 {
            return Err(Report::new(KernelError::NotFound)
                .attach_printable(format!("No booking found for id {}", record.id)));
        }
        Ok(())
    }
}
