use crate::domain::{MenuEntry, Restaurant};
use crate::features::pizzas::model::JsonPizza;
use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, PartialEq, Eq)]
pub struct JsonRestaurant {
    pub id: i64,
    pub name: String,
    pub address: String,
}

/// Detail view of a restaurant, with its menu.
#[derive(Serialize, Deserialize, Debug, PartialEq, Eq)]
pub struct JsonRestaurantDetail {
    pub id: i64,
    pub name: String,
    pub address: String,
    pub restaurant_pizzas: Vec<JsonMenuEntry>,
}

// carries the pizza but never the restaurant it belongs to
#[derive(Serialize, Deserialize, Debug, PartialEq, Eq)]
pub struct JsonMenuEntry {
    pub id: i64,
    pub price: i64,
    pub pizza_id: i64,
    pub restaurant_id: i64,
    pub pizza: JsonPizza,
}

impl From<&Restaurant> for JsonRestaurant {
    fn from(restaurant: &Restaurant) -> Self {
        JsonRestaurant {
            id: restaurant.id,
            name: restaurant.name.to_owned(),
            address: restaurant.address.to_owned(),
        }
    }
}

impl From<&MenuEntry> for JsonMenuEntry {
    fn from(entry: &MenuEntry) -> Self {
        JsonMenuEntry {
            id: entry.restaurant_pizza.id,
            price: entry.restaurant_pizza.price,
            pizza_id: entry.restaurant_pizza.pizza_id,
            restaurant_id: entry.restaurant_pizza.restaurant_id,
            pizza: (&entry.pizza).into(),
        }
    }
}

impl JsonRestaurantDetail {
    pub fn new(restaurant: &Restaurant, menu: &[MenuEntry]) -> Self {
        JsonRestaurantDetail {
            id: restaurant.id,
            name: restaurant.name.to_owned(),
            address: restaurant.address.to_owned(),
            restaurant_pizzas: menu.iter().map(JsonMenuEntry::from).collect(),
        }
    }
}
