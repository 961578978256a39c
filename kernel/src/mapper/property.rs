use crate::entity::{
    MaxGuests, PricePerNight, Property, PropertyDescription, PropertyId, PropertyName,
};
use crate::record::PropertyRecord;
use crate::KernelError;

pub struct PropertyMapper;

impl PropertyMapper {
    pub fn to_domain(record: PropertyRecord) -> error_stack::Result<Property, KernelError> {
        Property::new(
            PropertyId::new(record.id),
            PropertyName::new(record.name),
            record.description.map(PropertyDescription::new),
            MaxGuests::new(record.max_guests),
            PricePerNight::new(record.base_price_per_night),
        )
    }

    /// Reservations are not part of the property row.
    pub fn to_persistence(property: &Property) -> PropertyRecord {
        PropertyRecord {
            id: property.id().as_ref().clone(),
            name: property.name().as_ref().clone(),
            description: property
                .description()
                .as_ref()
                .map(|description| description.as_ref().clone()),
            max_guests: *property.max_guests().as_ref(),
            base_price_per_night: *property.base_price_per_night().as_ref(),
        }
    }
}
