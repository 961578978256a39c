use uuid::Uuid;

use kernel::interface::database::{DatabaseConnection, Transaction};
use kernel::interface::query::{
    BookingQuery, DependOnBookingQuery, DependOnPropertyQuery, PropertyQuery,
};
use kernel::interface::update::{DependOnPropertyModifier, PropertyModifier};
use kernel::prelude::entity::{
    DateRange, MaxGuests, PricePerNight, Property, PropertyDescription, PropertyId,
    PropertyName,
};
use kernel::KernelError;

use crate::transfer::{CheckAvailabilityDto, CreatePropertyDto, PropertyDto};

#[async_trait::async_trait]
pub trait CreatePropertyService: 'static + Sync + Send + DependOnPropertyModifier {
    async fn create_property(
        &self,
        dto: CreatePropertyDto,
    ) -> error_stack::Result<PropertyDto, KernelError> {
        let property = Property::new(
            PropertyId::new(Uuid::new_v4().to_string()),
            PropertyName::new(dto.name),
            dto.description.map(PropertyDescription::new),
            MaxGuests::new(dto.max_guests),
            PricePerNight::new(dto.base_price_per_night),
        )?;

        let mut connection = self.database_connection().transact().await?;
        self.property_modifier()
            .create(&mut connection, &property)
            .await?;
        connection.commit().await?;

        tracing::debug!(property = %property.id().as_ref(), "property created");
        Ok(PropertyDto::from(property))
    }
}

impl<T> CreatePropertyService for T where T: DependOnPropertyModifier {}

/// Loads a property with every persisted booking attached.
pub(crate) async fn load_with_bookings<T>(
    deps: &T,
    connection: &mut <T::DatabaseConnection as DatabaseConnection>::Transaction,
    id: &PropertyId,
) -> error_stack::Result<Property, KernelError>
where
    T: ?Sized + DependOnPropertyQuery + DependOnBookingQuery,
{
    let mut property = deps
        .property_query()
        .find_by_id(connection, id)
        .await?
        .ok_or_else(|| {
            error_stack::Report::new(KernelError::NotFound)
                .attach_printable(format!("No property found for id {}", id.as_ref()))
        })?;
    let bookings = deps
        .booking_query()
        .find_by_property_id(connection, id)
        .await?;
    bookings
        .iter()
        .for_each(|booking| property.add_booking(booking));
    Ok(property)
}

#[async_trait::async_trait]
pub trait CheckAvailabilityService:
    'static + Sync + Send + DependOnPropertyQuery + DependOnBookingQuery
{
    async fn check_availability(
        &self,
        dto: CheckAvailabilityDto,
    ) -> error_stack::Result<bool, KernelError> {
        let date_range = DateRange::new(dto.start_date, dto.end_date)?;

        let mut connection = self.database_connection().transact().await?;
        let id = PropertyId::new(dto.property_id);
        let property = load_with_bookings(self, &mut connection, &id).await?;

        Ok(property.is_vacant(&date_range))
    }
}

impl<T> CheckAvailabilityService for T where T: DependOnPropertyQuery + DependOnBookingQuery {}
