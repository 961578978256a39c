use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::routing::{get, post};
use axum::{Json, Router};

use application::service::{CancelBookingService, CreateBookingService, GetBookingService};

use crate::controller::Controller;
use crate::error::{ErrorStatus, MessageResponse};
use crate::handler::AppModule;
use crate::request::{
    BookingTransformer, CancelBookingRequest, CreateBookingRequest, GetBookingRequest,
};
use crate::response::{BookingPresenter, BookingResponse};

pub trait BookingRouter {
    fn route_booking(self) -> Self;
}

impl BookingRouter for Router<AppModule> {
    fn route_booking(self) -> Self {
        self.route(
            "/bookings",
            post(
                |State(module): State<AppModule>, Json(req): Json<CreateBookingRequest>| async move {
                    Controller::new(BookingTransformer, BookingPresenter)
                        .intake(req)
                        .handle(|dto| async move { module.database().create_booking(dto).await })
                        .await
                        .map(|res: BookingResponse| (StatusCode::CREATED, res))
                        .map_err(ErrorStatus::from)
                },
            ),
        )
        .route(
            "/bookings/:id",
            get(
                |State(module): State<AppModule>, Path(id): Path<String>| async move {
                    Controller::new(BookingTransformer, BookingPresenter)
                        .intake(GetBookingRequest::new(id))
                        .handle(|dto| async move { module.database().get_booking(dto).await })
                        .await
                        .map_err(ErrorStatus::from)
                        .map(|res| {
                            res.map(BookingResponse::into_response).unwrap_or_else(|| {
                                (
                                    StatusCode::NOT_FOUND,
                                    Json(MessageResponse::new("Booking not found")),
                                )
                                    .into_response()
                            })
                        })
                },
            ),
        )
        .route(
            "/bookings/:id/cancel",
            post(
                |State(module): State<AppModule>, Path(id): Path<String>| async move {
                    Controller::new(BookingTransformer, BookingPresenter)
                        .intake(CancelBookingRequest::new(id))
                        .handle(|dto| async move { module.database().cancel_booking(dto).await })
                        .await
                        .map_err(ErrorStatus::from)
                },
            ),
        )
    }
}
