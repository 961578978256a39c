use time::OffsetDateTime;

use kernel::prelude::entity::Property;

#[derive(Debug, Clone, PartialEq)]
pub struct PropertyDto {
    pub id: String,
    pub name: String,
    pub description: Option<String>,
    pub max_guests: i32,
    pub base_price_per_night: f64,
}

impl From<&Property> for PropertyDto {
    fn from(value: &Property) -> Self {
        Self {
            id: value.id().as_ref().clone(),
            name: value.name().as_ref().clone(),
            description: value
                .description()
                .as_ref()
                .map(|description| description.as_ref().clone()),
            max_guests: *value.max_guests().as_ref(),
            base_price_per_night: *value.base_price_per_night().as_ref(),
        }
    }
}

impl From<Property> for PropertyDto {
    fn from(value: Property) -> Self {
        Self::from(&value)
    }
}

#[derive(Debug)]
pub struct CreatePropertyDto {
    pub name: String,
    pub description: Option<String>,
    pub max_guests: i32,
    pub base_price_per_night: f64,
}

#[derive(Debug)]
pub struct CheckAvailabilityDto {
    pub property_id: String,
    pub start_date: OffsetDateTime,
    pub end_date: OffsetDateTime,
}
