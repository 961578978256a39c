use axum::extract::{Path, Query, State};
use axum::routing::{get, post};
use axum::{Json, Router};

use application::service::{CheckAvailabilityService, CreatePropertyService};

use crate::controller::Controller;
use crate::error::ErrorStatus;
use crate::handler::AppModule;
use crate::request::{
    property_message, AvailabilityQuery, CreatePropertyRequest, PropertyTransformer,
};
use crate::response::PropertyPresenter;

pub trait PropertyRouter {
    fn route_property(self) -> Self;
}

impl PropertyRouter for Router<AppModule> {
    fn route_property(self) -> Self {
        self.route(
            "/properties",
            post(
                |State(module): State<AppModule>, Json(req): Json<CreatePropertyRequest>| async move {
                    Controller::new(PropertyTransformer, PropertyPresenter)
                        .try_intake(req)?
                        .handle(|dto| async move { module.database().create_property(dto).await })
                        .await
                        .map_err(|report| ErrorStatus::from(report).reword(property_message))
                },
            ),
        )
        .route(
            "/properties/:id/availability",
            get(
                |State(module): State<AppModule>,
                 Path(id): Path<String>,
                 Query(query): Query<AvailabilityQuery>| async move {
                    Controller::new(PropertyTransformer, PropertyPresenter)
                        .intake((id, query))
                        .handle(|dto| async move { module.database().check_availability(dto).await })
                        .await
                        .map_err(ErrorStatus::from)
                },
            ),
        )
    }
}
