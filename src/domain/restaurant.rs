use derive_more::derive::Display;

#[derive(Debug, Clone, PartialEq, Eq, sqlx::FromRow, Display)]
#[display("{} (#{})", name, id)]
pub struct Restaurant {
    pub id: i64,
    pub name: String,
    pub address: String,
}

// a restaurant that has not been given an id by the database yet
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewRestaurant {
    pub name: String,
    pub address: String,
}
