use crate::database::{PizzaRepository, RestaurantPizzaRepository, RestaurantRepository};
use crate::domain::{
    MenuEntry, NewPizza, NewRestaurant, NewRestaurantPizza, Pizza, Restaurant, RestaurantPizza,
};
use anyhow::{Context, Result, bail};
use async_trait::async_trait;
use sqlx::{Pool, Sqlite};

pub struct SqliteRepository {
    pool: Pool<Sqlite>,
}

impl SqliteRepository {
    pub fn new(pool: Pool<Sqlite>) -> Self {
        Self { pool }
    }

    #[cfg(test)]
    pub fn pool(&self) -> &Pool<Sqlite> {
        &self.pool
    }
}

// flat row produced by joining restaurant_pizzas with pizzas
#[derive(sqlx::FromRow)]
struct DbMenuRow {
    id: i64,
    price: i64,
    pizza_id: i64,
    restaurant_id: i64,
    pizza_name: String,
    pizza_ingredients: String,
}

impl From<DbMenuRow> for MenuEntry {
    fn from(row: DbMenuRow) -> Self {
        MenuEntry {
            restaurant_pizza: RestaurantPizza {
                id: row.id,
                price: row.price,
                pizza_id: row.pizza_id,
                restaurant_id: row.restaurant_id,
            },
            pizza: Pizza {
                id: row.pizza_id,
                name: row.pizza_name,
                ingredients: row.pizza_ingredients,
            },
        }
    }
}

#[async_trait]
impl RestaurantRepository for SqliteRepository {
    async fn get_all_restaurants(&self) -> Result<Vec<Restaurant>> {
        let restaurants = sqlx::query_as::<_, Restaurant>(
            "SELECT id, name, address FROM restaurants ORDER BY id",
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(restaurants)
    }

    async fn get_restaurant(&self, id: i64) -> Result<Option<Restaurant>> {
        let restaurant = sqlx::query_as::<_, Restaurant>(
            "SELECT id, name, address FROM restaurants WHERE id = ?",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(restaurant)
    }

    async fn get_restaurant_menu(&self, restaurant_id: i64) -> Result<Vec<MenuEntry>> {
        let rows = sqlx::query_as::<_, DbMenuRow>(
            r#"
            SELECT
                rp.id,
                rp.price,
                rp.pizza_id,
                rp.restaurant_id,
                p.name AS pizza_name,
                p.ingredients AS pizza_ingredients
            FROM restaurant_pizzas rp
            JOIN pizzas p ON p.id = rp.pizza_id
            WHERE rp.restaurant_id = ?
            ORDER BY rp.id
            "#,
        )
        .bind(restaurant_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(MenuEntry::from).collect())
    }

    async fn insert_restaurant(&self, draft: &NewRestaurant) -> Result<Restaurant> {
        let mut tx = self.pool.begin().await?;

        let restaurant = sqlx::query_as::<_, Restaurant>(
            "INSERT INTO restaurants (name, address) VALUES (?, ?) RETURNING id, name, address",
        )
        .bind(&draft.name)
        .bind(&draft.address)
        .fetch_one(&mut *tx)
        .await
        .context(format!("Failed to insert restaurant {}", draft.name))?;

        tx.commit().await?;

        Ok(restaurant)
    }

    async fn delete_restaurant(&self, id: i64) -> Result<bool> {
        let mut tx = self.pool.begin().await?;

        // restaurant_pizzas rows go with it through ON DELETE CASCADE
        let result = sqlx::query("DELETE FROM restaurants WHERE id = ?")
            .bind(id)
            .execute(&mut *tx)
            .await
            .context(format!("Failed to delete restaurant {}", id))?;

        tx.commit().await?;

        Ok(result.rows_affected() > 0)
    }

    async fn delete_all_restaurants(&self) -> Result<u64> {
        let mut tx = self.pool.begin().await?;

        let result = sqlx::query("DELETE FROM restaurants")
            .execute(&mut *tx)
            .await
            .context("Failed to delete restaurants")?;

        tx.commit().await?;

        Ok(result.rows_affected())
    }
}

#[async_trait]
impl PizzaRepository for SqliteRepository {
    async fn get_all_pizzas(&self) -> Result<Vec<Pizza>> {
        let pizzas =
            sqlx::query_as::<_, Pizza>("SELECT id, name, ingredients FROM pizzas ORDER BY id")
                .fetch_all(&self.pool)
                .await?;

        Ok(pizzas)
    }

    async fn get_pizza(&self, id: i64) -> Result<Option<Pizza>> {
        let pizza =
            sqlx::query_as::<_, Pizza>("SELECT id, name, ingredients FROM pizzas WHERE id = ?")
                .bind(id)
                .fetch_optional(&self.pool)
                .await?;

        Ok(pizza)
    }

    async fn insert_pizza(&self, draft: &NewPizza) -> Result<Pizza> {
        let mut tx = self.pool.begin().await?;

        let pizza = sqlx::query_as::<_, Pizza>(
            "INSERT INTO pizzas (name, ingredients) VALUES (?, ?) RETURNING id, name, ingredients",
        )
        .bind(&draft.name)
        .bind(&draft.ingredients)
        .fetch_one(&mut *tx)
        .await
        .context(format!("Failed to insert pizza {}", draft.name))?;

        tx.commit().await?;

        Ok(pizza)
    }

    async fn delete_all_pizzas(&self) -> Result<u64> {
        let mut tx = self.pool.begin().await?;

        let result = sqlx::query("DELETE FROM pizzas")
            .execute(&mut *tx)
            .await
            .context("Failed to delete pizzas")?;

        tx.commit().await?;

        Ok(result.rows_affected())
    }
}

#[async_trait]
impl RestaurantPizzaRepository for SqliteRepository {
    async fn get_all_restaurant_pizzas(&self) -> Result<Vec<RestaurantPizza>> {
        let restaurant_pizzas = sqlx::query_as::<_, RestaurantPizza>(
            "SELECT id, price, pizza_id, restaurant_id FROM restaurant_pizzas ORDER BY id",
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(restaurant_pizzas)
    }

    async fn insert_restaurant_pizza(
        &self,
        draft: &NewRestaurantPizza,
    ) -> Result<RestaurantPizza> {
        draft.validate()?;

        let mut tx = self.pool.begin().await?;

        // checked up front for a readable message, the foreign keys still guard the insert
        let restaurant_id = sqlx::query_scalar::<_, i64>("SELECT id FROM restaurants WHERE id = ?")
            .bind(draft.restaurant_id)
            .fetch_optional(&mut *tx)
            .await?;
        if restaurant_id.is_none() {
            bail!("Restaurant {} does not exist", draft.restaurant_id);
        }

        let pizza_id = sqlx::query_scalar::<_, i64>("SELECT id FROM pizzas WHERE id = ?")
            .bind(draft.pizza_id)
            .fetch_optional(&mut *tx)
            .await?;
        if pizza_id.is_none() {
            bail!("Pizza {} does not exist", draft.pizza_id);
        }

        let restaurant_pizza = sqlx::query_as::<_, RestaurantPizza>(
            r#"
            INSERT INTO restaurant_pizzas (price, pizza_id, restaurant_id)
            VALUES (?, ?, ?)
            RETURNING id, price, pizza_id, restaurant_id
            "#,
        )
        .bind(draft.price)
        .bind(draft.pizza_id)
        .bind(draft.restaurant_id)
        .fetch_one(&mut *tx)
        .await
        .context("Failed to insert restaurant pizza")?;

        tx.commit().await?;

        Ok(restaurant_pizza)
    }

    async fn delete_all_restaurant_pizzas(&self) -> Result<u64> {
        let mut tx = self.pool.begin().await?;

        let result = sqlx::query("DELETE FROM restaurant_pizzas")
            .execute(&mut *tx)
            .await
            .context("Failed to delete restaurant pizzas")?;

        tx.commit().await?;

        Ok(result.rows_affected())
    }
}
