use crate::domain::Pizza;
use anyhow::{Result, bail};
use derive_more::derive::Display;
use std::ops::RangeInclusive;

/// Prices a restaurant may charge for a pizza, inclusive on both ends.
pub const PRICE_RANGE: RangeInclusive<i64> = 1..=30;

/// A pizza offered by a restaurant at a specific price.
#[derive(Debug, Clone, PartialEq, Eq, sqlx::FromRow, Display)]
#[display("pizza #{} at restaurant #{} for {}", pizza_id, restaurant_id, price)]
pub struct RestaurantPizza {
    pub id: i64,
    pub price: i64,
    pub pizza_id: i64,
    pub restaurant_id: i64,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewRestaurantPizza {
    pub price: i64,
    pub pizza_id: i64,
    pub restaurant_id: i64,
}

impl NewRestaurantPizza {
    pub fn validate(&self) -> Result<()> {
        if !PRICE_RANGE.contains(&self.price) {
            bail!(
                "Price must be between {} and {}",
                PRICE_RANGE.start(),
                PRICE_RANGE.end()
            );
        }
        Ok(())
    }
}

/// One line of a restaurant's menu: the pricing row together with the pizza it prices.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MenuEntry {
    pub restaurant_pizza: RestaurantPizza,
    pub pizza: Pizza,
}
