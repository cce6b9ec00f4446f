pub mod model;

use crate::AppState;
use crate::domain::NewPizza;
use crate::error::{ApiError, ApiResult};
use crate::features::parse_id;
use crate::features::payload::JsonPayload;
use axum::{
    Json, Router,
    extract::{Path, State},
    http::StatusCode,
    routing::get,
};
use model::JsonPizza;
use tracing::info;

const ENTITY: &str = "Pizza";

pub fn pizzas_router() -> Router<AppState> {
    Router::new()
        .route(
            "/pizzas",
            get(list_pizzas_handler)
                .post(create_pizza_handler)
                .delete(delete_pizzas_handler),
        )
        .route("/pizzas/{id}", get(get_pizza_handler))
}

async fn list_pizzas_handler(State(state): State<AppState>) -> ApiResult<Json<Vec<JsonPizza>>> {
    let pizzas = state.pizzas.get_all_pizzas().await?;

    Ok(Json(pizzas.iter().map(JsonPizza::from).collect()))
}

async fn get_pizza_handler(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<Json<JsonPizza>> {
    let id = parse_id(&id, ENTITY)?;

    match state.pizzas.get_pizza(id).await? {
        Some(pizza) => Ok(Json((&pizza).into())),
        None => Err(ApiError::NotFound(ENTITY)),
    }
}

async fn create_pizza_handler(
    State(state): State<AppState>,
    payload: JsonPayload,
) -> ApiResult<(StatusCode, Json<JsonPizza>)> {
    payload.require(&["name", "ingredients"])?;

    let draft = NewPizza {
        name: payload.text("name")?,
        ingredients: payload.text("ingredients")?,
    };

    let pizza = state
        .pizzas
        .insert_pizza(&draft)
        .await
        .map_err(ApiError::from_store)?;

    info!("Created pizza {}", pizza);

    Ok((StatusCode::CREATED, Json((&pizza).into())))
}

// restaurant_pizzas pricing these pizzas cascade away with them
async fn delete_pizzas_handler(State(state): State<AppState>) -> ApiResult<StatusCode> {
    let deleted = state.pizzas.delete_all_pizzas().await?;

    info!("Deleted all {} pizzas", deleted);

    Ok(StatusCode::NO_CONTENT)
}
