use crate::AppState;
use crate::error::ApiError;
use axum::{Router, response::Html, routing::get};

pub mod payload;
pub mod pizzas;
pub mod restaurant_pizzas;
pub mod restaurants;

/// Every route the server answers, as (methods, path).
pub const ROUTES: &[(&str, &str)] = &[
    ("GET", "/"),
    ("GET, POST, DELETE", "/restaurants"),
    ("GET, DELETE", "/restaurants/{id}"),
    ("GET, POST, DELETE", "/pizzas"),
    ("GET", "/pizzas/{id}"),
    ("GET, POST, DELETE", "/restaurant_pizzas"),
];

// features are composed here
pub fn app_router() -> Router<AppState> {
    Router::new()
        .route("/", get(index_handler))
        .merge(restaurants::restaurants_router())
        .merge(pizzas::pizzas_router())
        .merge(restaurant_pizzas::restaurant_pizzas_router())
}

async fn index_handler() -> Html<&'static str> {
    Html("<h1>Code challenge</h1>")
}

// ids that don't parse as integers can't name a record, so they are simply "not found"
pub(crate) fn parse_id(raw: &str, entity: &'static str) -> Result<i64, ApiError> {
    raw.parse::<i64>().map_err(|_| ApiError::NotFound(entity))
}
