pub mod model;

use crate::AppState;
use crate::domain::NewRestaurantPizza;
use crate::error::{ApiError, ApiResult};
use crate::features::payload::JsonPayload;
use axum::{Json, Router, extract::State, http::StatusCode, routing::get};
use model::JsonRestaurantPizza;
use tracing::info;

pub fn restaurant_pizzas_router() -> Router<AppState> {
    Router::new().route(
        "/restaurant_pizzas",
        get(list_restaurant_pizzas_handler)
            .post(create_restaurant_pizza_handler)
            .delete(delete_restaurant_pizzas_handler),
    )
}

async fn list_restaurant_pizzas_handler(
    State(state): State<AppState>,
) -> ApiResult<Json<Vec<JsonRestaurantPizza>>> {
    let restaurant_pizzas = state.restaurant_pizzas.get_all_restaurant_pizzas().await?;

    Ok(Json(
        restaurant_pizzas
            .iter()
            .map(JsonRestaurantPizza::from)
            .collect(),
    ))
}

async fn create_restaurant_pizza_handler(
    State(state): State<AppState>,
    payload: JsonPayload,
) -> ApiResult<(StatusCode, Json<JsonRestaurantPizza>)> {
    payload.require(&["price", "pizza_id", "restaurant_id"])?;

    let draft = NewRestaurantPizza {
        price: payload.integer("price")?,
        pizza_id: payload.integer("pizza_id")?,
        restaurant_id: payload.integer("restaurant_id")?,
    };

    // price bounds and dangling references are both refused by the repository
    let restaurant_pizza = state
        .restaurant_pizzas
        .insert_restaurant_pizza(&draft)
        .await
        .map_err(ApiError::from_store)?;

    info!("Created restaurant pizza: {}", restaurant_pizza);

    Ok((StatusCode::CREATED, Json((&restaurant_pizza).into())))
}

async fn delete_restaurant_pizzas_handler(
    State(state): State<AppState>,
) -> ApiResult<StatusCode> {
    let deleted = state.restaurant_pizzas.delete_all_restaurant_pizzas().await?;

    info!("Deleted all {} restaurant pizzas", deleted);

    Ok(StatusCode::NO_CONTENT)
}
