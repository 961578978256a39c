use serde::Deserialize;
use time::OffsetDateTime;

use application::transfer::{CheckAvailabilityDto, CreatePropertyDto};
use kernel::prelude::validation::ValidationError;

use crate::controller::{Intake, TryIntake};
use crate::error::ErrorStatus;

const PRICE_REQUIRED: &str = "O preço base por noite é obrigatório.";

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreatePropertyRequest {
    name: String,
    #[serde(default)]
    description: Option<String>,
    max_guests: i32,
    #[serde(default)]
    base_price_per_night: Option<f64>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AvailabilityQuery {
    #[serde(with = "time::serde::rfc3339")]
    start_date: OffsetDateTime,
    #[serde(with = "time::serde::rfc3339")]
    end_date: OffsetDateTime,
}

pub struct PropertyTransformer;

impl TryIntake<CreatePropertyRequest> for PropertyTransformer {
    type To = CreatePropertyDto;
    type Error = ErrorStatus;

    fn emit(&self, input: CreatePropertyRequest) -> Result<Self::To, Self::Error> {
        let base_price_per_night = input
            .base_price_per_night
            .filter(|price| *price != 0.0)
            .ok_or_else(|| ErrorStatus::bad_request(PRICE_REQUIRED))?;
        Ok(CreatePropertyDto {
            name: input.name.trim().to_string(),
            description: input
                .description
                .map(|description| description.trim().to_string()),
            max_guests: input.max_guests,
            base_price_per_night,
        })
    }
}

impl Intake<(String, AvailabilityQuery)> for PropertyTransformer {
    type To = CheckAvailabilityDto;
    fn emit(&self, (property_id, query): (String, AvailabilityQuery)) -> Self::To {
        CheckAvailabilityDto {
            property_id,
            start_date: query.start_date,
            end_date: query.end_date,
        }
    }
}

pub fn property_message(violation: &ValidationError) -> Option<&'static str> {
    match violation {
        ValidationError::NameRequired => Some("O nome da propriedade é obrigatório."),
        ValidationError::MaxGuestsNotPositive => {
            Some("A capacidade máxima deve ser maior que zero.")
        }
        _ => None,
    }
}
