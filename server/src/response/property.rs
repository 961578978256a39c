use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;

use application::transfer::PropertyDto;

use crate::controller::Exhaust;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PropertyResponse {
    id: String,
    name: String,
    description: Option<String>,
    max_guests: i32,
    base_price_per_night: f64,
}

impl From<PropertyDto> for PropertyResponse {
    fn from(dto: PropertyDto) -> Self {
        Self {
            id: dto.id,
            name: dto.name,
            description: dto.description,
            max_guests: dto.max_guests,
            base_price_per_night: dto.base_price_per_night,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct PropertyCreatedResponse {
    message: &'static str,
    property: PropertyResponse,
}

impl IntoResponse for PropertyCreatedResponse {
    fn into_response(self) -> Response {
        (StatusCode::CREATED, axum::Json(self)).into_response()
    }
}

#[derive(Debug, Serialize)]
pub struct AvailabilityResponse {
    available: bool,
}

impl IntoResponse for AvailabilityResponse {
    fn into_response(self) -> Response {
        (StatusCode::OK, axum::Json(self)).into_response()
    }
}

pub struct PropertyPresenter;

impl Exhaust<PropertyDto> for PropertyPresenter {
    type To = PropertyCreatedResponse;
    fn emit(&self, input: PropertyDto) -> Self::To {
        PropertyCreatedResponse {
            message: "Property created successfully",
            property: PropertyResponse::from(input),
        }
    }
}

impl Exhaust<bool> for PropertyPresenter {
    type To = AvailabilityResponse;
    fn emit(&self, available: bool) -> Self::To {
        AvailabilityResponse { available }
    }
}

#[cfg(test)]
mod test {
    use application::transfer::PropertyDto;

    use crate::controller::Exhaust;
    use crate::response::PropertyPresenter;

    #[test]
    fn created_body_uses_camel_case() {
        let response = PropertyPresenter.emit(PropertyDto {
            id: "p-1".to_string(),
            name: "Casa".to_string(),
            description: None,
            max_guests: 2,
            base_price_per_night: 99.9,
        });
        let json = serde_json::to_value(&response).unwrap();
        assert_eq!(json["message"], "Property created successfully");
        assert_eq!(json["property"]["maxGuests"], 2);
        assert_eq!(json["property"]["basePricePerNight"], 99.9);
        assert!(json["property"]["description"].is_null());
    }
}
