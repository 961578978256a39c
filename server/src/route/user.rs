use axum::extract::State;
use axum::routing::post;
use axum::{Json, Router};

use application::service::CreateUserService;

use crate::controller::Controller;
use crate::error::ErrorStatus;
use crate::handler::AppModule;
use crate::request::{user_message, CreateUserRequest, UserTransformer};
use crate::response::UserPresenter;

pub trait UserRouter {
    fn route_user(self) -> Self;
}

impl UserRouter for Router<AppModule> {
    fn route_user(self) -> Self {
        self.route(
            "/users",
            post(
                |State(module): State<AppModule>, Json(req): Json<CreateUserRequest>| async move {
                    Controller::new(UserTransformer, UserPresenter)
                        .intake(req)
                        .handle(|dto| async move { module.database().create_user(dto).await })
                        .await
                        .map_err(|report| ErrorStatus::from(report).reword(user_message))
                },
            ),
        )
    }
}
