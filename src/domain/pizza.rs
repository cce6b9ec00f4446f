use derive_more::derive::Display;

#[derive(Debug, Clone, PartialEq, Eq, sqlx::FromRow, Display)]
#[display("{} (#{})", name, id)]
pub struct Pizza {
    pub id: i64,
    pub name: String,
    pub ingredients: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewPizza {
    pub name: String,
    pub ingredients: String,
}
