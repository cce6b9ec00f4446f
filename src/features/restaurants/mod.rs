pub mod model;

use crate::AppState;
use crate::domain::NewRestaurant;
use crate::error::{ApiError, ApiResult};
use crate::features::parse_id;
use crate::features::payload::JsonPayload;
use axum::{
    Json, Router,
    extract::{Path, State},
    http::StatusCode,
    routing::get,
};
use model::{JsonRestaurant, JsonRestaurantDetail};
use tracing::info;

const ENTITY: &str = "Restaurant";

pub fn restaurants_router() -> Router<AppState> {
    Router::new()
        .route(
            "/restaurants",
            get(list_restaurants_handler)
                .post(create_restaurant_handler)
                .delete(delete_restaurants_handler),
        )
        .route(
            "/restaurants/{id}",
            get(get_restaurant_handler).delete(delete_restaurant_handler),
        )
}

async fn list_restaurants_handler(
    State(state): State<AppState>,
) -> ApiResult<Json<Vec<JsonRestaurant>>> {
    let restaurants = state.restaurants.get_all_restaurants().await?;

    Ok(Json(restaurants.iter().map(JsonRestaurant::from).collect()))
}

async fn create_restaurant_handler(
    State(state): State<AppState>,
    payload: JsonPayload,
) -> ApiResult<(StatusCode, Json<JsonRestaurant>)> {
    payload.require(&["name", "address"])?;

    let draft = NewRestaurant {
        name: payload.text("name")?,
        address: payload.text("address")?,
    };

    let restaurant = state
        .restaurants
        .insert_restaurant(&draft)
        .await
        .map_err(ApiError::from_store)?;

    info!("Created restaurant {}", restaurant);

    Ok((StatusCode::CREATED, Json((&restaurant).into())))
}

async fn get_restaurant_handler(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<Json<JsonRestaurantDetail>> {
    let id = parse_id(&id, ENTITY)?;

    let restaurant = state
        .restaurants
        .get_restaurant(id)
        .await?
        .ok_or(ApiError::NotFound(ENTITY))?;

    let menu = state.restaurants.get_restaurant_menu(id).await?;

    Ok(Json(JsonRestaurantDetail::new(&restaurant, &menu)))
}

async fn delete_restaurants_handler(State(state): State<AppState>) -> ApiResult<StatusCode> {
    let deleted = state.restaurants.delete_all_restaurants().await?;

    info!("Deleted all {} restaurants", deleted);

    Ok(StatusCode::NO_CONTENT)
}

async fn delete_restaurant_handler(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<StatusCode> {
    let id = parse_id(&id, ENTITY)?;

    if !state.restaurants.delete_restaurant(id).await? {
        return Err(ApiError::NotFound(ENTITY));
    }

    info!("Deleted restaurant #{}", id);

    Ok(StatusCode::NO_CONTENT)
}
