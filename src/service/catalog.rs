//! Catalog queries against SQLite.

use crate::error::AppError;
use crate::models::{NewRestaurantPizza, Pizza, Restaurant, RestaurantPizzaRow};
use sqlx::SqlitePool;

const RESTAURANT_PIZZA_SELECT: &str = r#"
    SELECT rp.id, rp.price, rp.pizza_id, rp.restaurant_id,
           p.name AS pizza_name, p.ingredients AS pizza_ingredients,
           r.name AS restaurant_name, r.address AS restaurant_address
    FROM restaurant_pizzas rp
    JOIN pizzas p ON p.id = rp.pizza_id
    JOIN restaurants r ON r.id = rp.restaurant_id
"#;

pub struct CatalogService;

impl CatalogService {
    pub async fn list_restaurants(pool: &SqlitePool) -> Result<Vec<Restaurant>, AppError> {
        let sql = "SELECT id, name, address FROM restaurants ORDER BY id";
        tracing::debug!(sql = %sql, "query");
        Ok(sqlx::query_as::<_, Restaurant>(sql).fetch_all(pool).await?)
    }

    pub async fn find_restaurant(pool: &SqlitePool, id: i64) -> Result<Option<Restaurant>, AppError> {
        let sql = "SELECT id, name, address FROM restaurants WHERE id = ?";
        tracing::debug!(sql = %sql, id, "query");
        Ok(sqlx::query_as::<_, Restaurant>(sql)
            .bind(id)
            .fetch_optional(pool)
            .await?)
    }

    /// Delete a restaurant and its offerings in one transaction. Returns false if no
    /// restaurant had that id; nothing is written in that case.
    pub async fn delete_restaurant(pool: &SqlitePool, id: i64) -> Result<bool, AppError> {
        let mut tx = pool.begin().await?;
        let offerings = sqlx::query("DELETE FROM restaurant_pizzas WHERE restaurant_id = ?")
            .bind(id)
            .execute(&mut *tx)
            .await?
            .rows_affected();
        let deleted = sqlx::query("DELETE FROM restaurants WHERE id = ?")
            .bind(id)
            .execute(&mut *tx)
            .await?
            .rows_affected();
        if deleted == 0 {
            tx.rollback().await?;
            return Ok(false);
        }
        tx.commit().await?;
        tracing::debug!(id, offerings, "deleted restaurant");
        Ok(true)
    }

    pub async fn list_pizzas(pool: &SqlitePool) -> Result<Vec<Pizza>, AppError> {
        let sql = "SELECT id, name, ingredients FROM pizzas ORDER BY id";
        tracing::debug!(sql = %sql, "query");
        Ok(sqlx::query_as::<_, Pizza>(sql).fetch_all(pool).await?)
    }

    pub async fn find_pizza(pool: &SqlitePool, id: i64) -> Result<Option<Pizza>, AppError> {
        let sql = "SELECT id, name, ingredients FROM pizzas WHERE id = ?";
        tracing::debug!(sql = %sql, id, "query");
        Ok(sqlx::query_as::<_, Pizza>(sql)
            .bind(id)
            .fetch_optional(pool)
            .await?)
    }

    pub async fn list_restaurant_pizzas(pool: &SqlitePool) -> Result<Vec<RestaurantPizzaRow>, AppError> {
        let sql = format!("{RESTAURANT_PIZZA_SELECT} ORDER BY rp.id");
        tracing::debug!(sql = %sql, "query");
        Ok(sqlx::query_as::<_, RestaurantPizzaRow>(&sql).fetch_all(pool).await?)
    }

    /// Offerings of one restaurant, in insertion order.
    pub async fn find_restaurant_pizzas_by_restaurant(
        pool: &SqlitePool,
        restaurant_id: i64,
    ) -> Result<Vec<RestaurantPizzaRow>, AppError> {
        Self::restaurant_pizzas_where(pool, "rp.restaurant_id", restaurant_id).await
    }

    /// Offerings of one pizza across restaurants, in insertion order.
    pub async fn find_restaurant_pizzas_by_pizza(
        pool: &SqlitePool,
        pizza_id: i64,
    ) -> Result<Vec<RestaurantPizzaRow>, AppError> {
        Self::restaurant_pizzas_where(pool, "rp.pizza_id", pizza_id).await
    }

    /// Insert an offering and return it joined with its pizza and restaurant.
    /// References are expected to be checked by the caller; the FK constraints
    /// still reject dangling ids.
    pub async fn create_restaurant_pizza(
        pool: &SqlitePool,
        new: &NewRestaurantPizza,
    ) -> Result<RestaurantPizzaRow, AppError> {
        let mut tx = pool.begin().await?;
        let id = sqlx::query("INSERT INTO restaurant_pizzas (price, pizza_id, restaurant_id) VALUES (?, ?, ?)")
            .bind(new.price)
            .bind(new.pizza_id)
            .bind(new.restaurant_id)
            .execute(&mut *tx)
            .await?
            .last_insert_rowid();
        let sql = format!("{RESTAURANT_PIZZA_SELECT} WHERE rp.id = ?");
        tracing::debug!(sql = %sql, id, "query (tx)");
        let row = sqlx::query_as::<_, RestaurantPizzaRow>(&sql)
            .bind(id)
            .fetch_one(&mut *tx)
            .await?;
        tx.commit().await?;
        Ok(row)
    }

    async fn restaurant_pizzas_where(
        pool: &SqlitePool,
        column: &'static str,
        value: i64,
    ) -> Result<Vec<RestaurantPizzaRow>, AppError> {
        let sql = format!("{RESTAURANT_PIZZA_SELECT} WHERE {column} = ? ORDER BY rp.id");
        tracing::debug!(sql = %sql, value, "query");
        Ok(sqlx::query_as::<_, RestaurantPizzaRow>(&sql)
            .bind(value)
            .fetch_all(pool)
            .await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::{connect, ensure_schema, insert_pizza, insert_restaurant};

    struct Fixture {
        pool: SqlitePool,
        shack: i64,
        kiki: i64,
        emma: i64,
        geri: i64,
    }

    async fn fixture() -> Fixture {
        let pool = connect("sqlite::memory:", 1).await.unwrap();
        ensure_schema(&pool).await.unwrap();
        let shack = insert_restaurant(&pool, "Karen's Pizza Shack", "address1").await.unwrap();
        let kiki = insert_restaurant(&pool, "Kiki's Pizza", "address3").await.unwrap();
        let emma = insert_pizza(&pool, "Emma", "Dough, Tomato Sauce, Cheese").await.unwrap();
        let geri = insert_pizza(&pool, "Geri", "Dough, Tomato Sauce, Cheese, Pepperoni").await.unwrap();
        Fixture { pool, shack, kiki, emma, geri }
    }

    fn offering(price: i64, pizza_id: i64, restaurant_id: i64) -> NewRestaurantPizza {
        NewRestaurantPizza { price, pizza_id, restaurant_id }
    }

    #[tokio::test]
    async fn create_returns_joined_row() {
        let f = fixture().await;
        let row = CatalogService::create_restaurant_pizza(&f.pool, &offering(12, f.geri, f.kiki))
            .await
            .unwrap();
        assert_eq!(row.price, 12);
        assert_eq!(row.pizza().name, "Geri");
        assert_eq!(row.restaurant().address, "address3");
    }

    #[tokio::test]
    async fn traversal_by_restaurant_and_by_pizza() {
        let f = fixture().await;
        for new in [
            offering(5, f.emma, f.shack),
            offering(7, f.geri, f.shack),
            offering(9, f.emma, f.kiki),
        ] {
            CatalogService::create_restaurant_pizza(&f.pool, &new).await.unwrap();
        }

        let shack = CatalogService::find_restaurant_pizzas_by_restaurant(&f.pool, f.shack)
            .await
            .unwrap();
        assert_eq!(shack.iter().map(|r| r.price).collect::<Vec<_>>(), vec![5, 7]);

        let emma = CatalogService::find_restaurant_pizzas_by_pizza(&f.pool, f.emma)
            .await
            .unwrap();
        assert_eq!(
            emma.iter().map(|r| r.restaurant_id).collect::<Vec<_>>(),
            vec![f.shack, f.kiki]
        );
    }

    #[tokio::test]
    async fn delete_cascades_to_offerings_only_for_that_restaurant() {
        let f = fixture().await;
        CatalogService::create_restaurant_pizza(&f.pool, &offering(5, f.emma, f.shack)).await.unwrap();
        CatalogService::create_restaurant_pizza(&f.pool, &offering(9, f.emma, f.kiki)).await.unwrap();

        assert!(CatalogService::delete_restaurant(&f.pool, f.shack).await.unwrap());
        assert!(CatalogService::find_restaurant(&f.pool, f.shack).await.unwrap().is_none());

        let left = CatalogService::list_restaurant_pizzas(&f.pool).await.unwrap();
        assert_eq!(left.len(), 1);
        assert_eq!(left[0].restaurant_id, f.kiki);
        assert_eq!(CatalogService::list_pizzas(&f.pool).await.unwrap().len(), 2);
    }

    #[tokio::test]
    async fn delete_missing_restaurant_reports_false() {
        let f = fixture().await;
        assert!(!CatalogService::delete_restaurant(&f.pool, 404).await.unwrap());
        assert_eq!(CatalogService::list_restaurants(&f.pool).await.unwrap().len(), 2);
    }

    #[tokio::test]
    async fn create_with_dangling_pizza_is_a_store_error() {
        let f = fixture().await;
        let err = CatalogService::create_restaurant_pizza(&f.pool, &offering(5, 999, f.shack))
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::Db(_)));
        assert!(CatalogService::list_restaurant_pizzas(&f.pool).await.unwrap().is_empty());
    }
}
