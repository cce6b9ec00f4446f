use crate::domain::{
    MenuEntry, NewPizza, NewRestaurant, NewRestaurantPizza, Pizza, Restaurant, RestaurantPizza,
};
use anyhow::Result;
use async_trait::async_trait;

pub mod sqlite;

// repositories are shared between request tasks, so they must be Send + Sync
// sqlx::Pool is thread safe
// storage specific implementations live in "sqlite.rs"
#[async_trait]
pub trait RestaurantRepository: Send + Sync {
    async fn get_all_restaurants(&self) -> Result<Vec<Restaurant>>;
    async fn get_restaurant(&self, id: i64) -> Result<Option<Restaurant>>;
    /// Every pricing row of the restaurant, each joined with the pizza it prices.
    async fn get_restaurant_menu(&self, restaurant_id: i64) -> Result<Vec<MenuEntry>>;

    // write operations
    async fn insert_restaurant(&self, draft: &NewRestaurant) -> Result<Restaurant>;
    /// Returns false when no restaurant had this id.
    async fn delete_restaurant(&self, id: i64) -> Result<bool>;
    async fn delete_all_restaurants(&self) -> Result<u64>;
}

#[async_trait]
pub trait PizzaRepository: Send + Sync {
    async fn get_all_pizzas(&self) -> Result<Vec<Pizza>>;
    async fn get_pizza(&self, id: i64) -> Result<Option<Pizza>>;

    // write operations
    async fn insert_pizza(&self, draft: &NewPizza) -> Result<Pizza>;
    async fn delete_all_pizzas(&self) -> Result<u64>;
}

#[async_trait]
pub trait RestaurantPizzaRepository: Send + Sync {
    async fn get_all_restaurant_pizzas(&self) -> Result<Vec<RestaurantPizza>>;

    // write operations
    /// Fails when the price is out of range or either referenced record is missing.
    async fn insert_restaurant_pizza(&self, draft: &NewRestaurantPizza)
        -> Result<RestaurantPizza>;
    async fn delete_all_restaurant_pizzas(&self) -> Result<u64>;
}
