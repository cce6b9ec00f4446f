use crate::domain::Pizza;
use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, PartialEq, Eq)]
pub struct JsonPizza {
    pub id: i64,
    pub name: String,
    pub ingredients: String,
}

impl From<&Pizza> for JsonPizza {
    fn from(pizza: &Pizza) -> Self {
        JsonPizza {
            id: pizza.id,
            name: pizza.name.to_owned(),
            ingredients: pizza.ingredients.to_owned(),
        }
    }
}
