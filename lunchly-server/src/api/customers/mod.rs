//! Customer API 模块
//!
//! Server-rendered pages for customers and their reservations.

mod form;
mod handler;

pub use form::{CustomerForm, ReservationForm};

use axum::{
    Router,
    routing::{get, post},
};

use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new()
        .route("/", get(handler::list))
        .route("/top-10", get(handler::top))
        .route("/search/", get(handler::search))
        .route("/add/", get(handler::new_form).post(handler::create))
        .route("/{id}/", get(handler::detail))
        .route("/{id}/edit/", get(handler::edit_form).post(handler::update))
        .route("/{id}/add-reservation/", post(handler::add_reservation))
}
