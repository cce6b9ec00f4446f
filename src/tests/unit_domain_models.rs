use crate::domain::restaurant_pizza::PRICE_RANGE;
use crate::domain::{MenuEntry, NewRestaurantPizza, Pizza, Restaurant, RestaurantPizza};
use crate::features::pizzas::model::JsonPizza;
use crate::features::restaurant_pizzas::model::JsonRestaurantPizza;
use crate::features::restaurants::model::{JsonRestaurant, JsonRestaurantDetail};

fn create_test_restaurant() -> Restaurant {
    Restaurant {
        id: 1,
        name: "Karen's Pizza Shack".to_string(),
        address: "address1".to_string(),
    }
}

fn create_test_menu_entry() -> MenuEntry {
    MenuEntry {
        restaurant_pizza: RestaurantPizza {
            id: 7,
            price: 12,
            pizza_id: 3,
            restaurant_id: 1,
        },
        pizza: Pizza {
            id: 3,
            name: "Emma".to_string(),
            ingredients: "Dough, Tomato Sauce, Cheese".to_string(),
        },
    }
}

fn draft_with_price(price: i64) -> NewRestaurantPizza {
    NewRestaurantPizza {
        price,
        pizza_id: 1,
        restaurant_id: 1,
    }
}

#[test]
fn test_price_range_is_inclusive() {
    assert!(draft_with_price(*PRICE_RANGE.start()).validate().is_ok());
    assert!(draft_with_price(*PRICE_RANGE.end()).validate().is_ok());
    assert!(draft_with_price(15).validate().is_ok());
}

#[test]
fn test_price_out_of_range_fails() {
    for price in [-5, 0, 31, 1000] {
        let err = draft_with_price(price)
            .validate()
            .expect_err("price should be rejected");
        assert_eq!(err.to_string(), "Price must be between 1 and 30");
    }
}

#[test]
fn test_display_names_records() {
    assert_eq!(create_test_restaurant().to_string(), "Karen's Pizza Shack (#1)");
    assert_eq!(
        create_test_menu_entry().restaurant_pizza.to_string(),
        "pizza #3 at restaurant #1 for 12"
    );
}

#[test]
fn test_restaurant_to_json_restaurant() {
    let json_restaurant: JsonRestaurant = (&create_test_restaurant()).into();

    assert_eq!(
        serde_json::to_value(&json_restaurant).unwrap(),
        serde_json::json!({"id": 1, "name": "Karen's Pizza Shack", "address": "address1"})
    );
}

#[test]
fn test_restaurant_detail_nests_pizza_without_restaurant() {
    let detail = JsonRestaurantDetail::new(&create_test_restaurant(), &[create_test_menu_entry()]);
    let value = serde_json::to_value(&detail).unwrap();

    assert_eq!(value["restaurant_pizzas"][0]["pizza"]["name"], "Emma");
    assert_eq!(value["restaurant_pizzas"][0]["restaurant_id"], 1);
    // the parent restaurant is never serialized again inside its own menu
    assert!(value["restaurant_pizzas"][0].get("restaurant").is_none());
}

#[test]
fn test_pizza_and_restaurant_pizza_views() {
    let entry = create_test_menu_entry();

    let json_pizza: JsonPizza = (&entry.pizza).into();
    assert_eq!(json_pizza.ingredients, "Dough, Tomato Sauce, Cheese");

    let json_restaurant_pizza: JsonRestaurantPizza = (&entry.restaurant_pizza).into();
    assert_eq!(
        json_restaurant_pizza,
        JsonRestaurantPizza {
            id: 7,
            price: 12,
            pizza_id: 3,
            restaurant_id: 1,
        }
    );
}
