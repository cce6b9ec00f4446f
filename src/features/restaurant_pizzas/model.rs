use crate::domain::RestaurantPizza;
use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, PartialEq, Eq)]
pub struct JsonRestaurantPizza {
    pub id: i64,
    pub price: i64,
    pub pizza_id: i64,
    pub restaurant_id: i64,
}

impl From<&RestaurantPizza> for JsonRestaurantPizza {
    fn from(restaurant_pizza: &RestaurantPizza) -> Self {
        JsonRestaurantPizza {
            id: restaurant_pizza.id,
            price: restaurant_pizza.price,
            pizza_id: restaurant_pizza.pizza_id,
            restaurant_id: restaurant_pizza.restaurant_id,
        }
    }
}
