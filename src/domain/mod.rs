pub mod pizza;
pub mod restaurant;
pub mod restaurant_pizza;

pub use self::pizza::{NewPizza, Pizza};
pub use self::restaurant::{NewRestaurant, Restaurant};
pub use self::restaurant_pizza::{MenuEntry, NewRestaurantPizza, RestaurantPizza};
