//! Pool setup, table DDL and seed data for the catalog store.

use crate::error::AppError;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::SqlitePool;
use std::str::FromStr;

const SCHEMA_DDL: &[&str] = &[
    r#"
    CREATE TABLE IF NOT EXISTS restaurants (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        name TEXT NOT NULL,
        address TEXT NOT NULL
    )
    "#,
    r#"
    CREATE TABLE IF NOT EXISTS pizzas (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        name TEXT NOT NULL,
        ingredients TEXT NOT NULL
    )
    "#,
    r#"
    CREATE TABLE IF NOT EXISTS restaurant_pizzas (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        price INTEGER NOT NULL CHECK (price BETWEEN 1 AND 30),
        pizza_id INTEGER NOT NULL REFERENCES pizzas (id) ON DELETE CASCADE,
        restaurant_id INTEGER NOT NULL REFERENCES restaurants (id) ON DELETE CASCADE
    )
    "#,
    "CREATE INDEX IF NOT EXISTS restaurant_pizzas_restaurant_id ON restaurant_pizzas (restaurant_id)",
    "CREATE INDEX IF NOT EXISTS restaurant_pizzas_pizza_id ON restaurant_pizzas (pizza_id)",
];

/// Open a pool for `database_url`. The database file is created if missing and
/// foreign keys are enforced on every connection.
///
/// An in-memory database lives only as long as its connection, so callers using
/// `sqlite::memory:` should pass `max_connections = 1`.
pub async fn connect(database_url: &str, max_connections: u32) -> Result<SqlitePool, AppError> {
    let opts = SqliteConnectOptions::from_str(database_url)?
        .create_if_missing(true)
        .foreign_keys(true);
    let pool = SqlitePoolOptions::new()
        .max_connections(max_connections)
        .idle_timeout(None)
        .max_lifetime(None)
        .connect_with(opts)
        .await?;
    Ok(pool)
}

/// Create the restaurants, pizzas and restaurant_pizzas tables if they do not exist.
pub async fn ensure_schema(pool: &SqlitePool) -> Result<(), AppError> {
    for ddl in SCHEMA_DDL {
        sqlx::query(ddl).execute(pool).await?;
    }
    Ok(())
}

pub async fn insert_restaurant(pool: &SqlitePool, name: &str, address: &str) -> Result<i64, AppError> {
    let id = sqlx::query("INSERT INTO restaurants (name, address) VALUES (?, ?)")
        .bind(name)
        .bind(address)
        .execute(pool)
        .await?
        .last_insert_rowid();
    Ok(id)
}

pub async fn insert_pizza(pool: &SqlitePool, name: &str, ingredients: &str) -> Result<i64, AppError> {
    let id = sqlx::query("INSERT INTO pizzas (name, ingredients) VALUES (?, ?)")
        .bind(name)
        .bind(ingredients)
        .execute(pool)
        .await?
        .last_insert_rowid();
    Ok(id)
}

const DEMO_RESTAURANTS: &[(&str, &str)] = &[
    ("Karen's Pizza Shack", "address1"),
    ("Sanjay's Pizza", "address2"),
    ("Kiki's Pizza", "address3"),
];

const DEMO_PIZZAS: &[(&str, &str)] = &[
    ("Emma", "Dough, Tomato Sauce, Cheese"),
    ("Geri", "Dough, Tomato Sauce, Cheese, Pepperoni"),
    ("Melanie", "Dough, Sauce, Ricotta, Red peppers, Mustard"),
];

/// (restaurant index, pizza index, price) into the tables above.
const DEMO_OFFERINGS: &[(usize, usize, i64)] = &[(0, 0, 1), (1, 1, 4), (2, 2, 5)];

/// Insert the demo catalog when `restaurants` is empty. Returns whether rows were written.
pub async fn seed_demo_data(pool: &SqlitePool) -> Result<bool, AppError> {
    let (count,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM restaurants")
        .fetch_one(pool)
        .await?;
    if count > 0 {
        return Ok(false);
    }

    let mut tx = pool.begin().await?;
    let mut restaurant_ids = Vec::with_capacity(DEMO_RESTAURANTS.len());
    for &(name, address) in DEMO_RESTAURANTS {
        let id = sqlx::query("INSERT INTO restaurants (name, address) VALUES (?, ?)")
            .bind(name)
            .bind(address)
            .execute(&mut *tx)
            .await?
            .last_insert_rowid();
        restaurant_ids.push(id);
    }
    let mut pizza_ids = Vec::with_capacity(DEMO_PIZZAS.len());
    for &(name, ingredients) in DEMO_PIZZAS {
        let id = sqlx::query("INSERT INTO pizzas (name, ingredients) VALUES (?, ?)")
            .bind(name)
            .bind(ingredients)
            .execute(&mut *tx)
            .await?
            .last_insert_rowid();
        pizza_ids.push(id);
    }
    for &(r, p, price) in DEMO_OFFERINGS {
        sqlx::query("INSERT INTO restaurant_pizzas (price, pizza_id, restaurant_id) VALUES (?, ?, ?)")
            .bind(price)
            .bind(pizza_ids[p])
            .bind(restaurant_ids[r])
            .execute(&mut *tx)
            .await?;
    }
    tx.commit().await?;
    tracing::info!(
        restaurants = DEMO_RESTAURANTS.len(),
        pizzas = DEMO_PIZZAS.len(),
        offerings = DEMO_OFFERINGS.len(),
        "seeded demo catalog"
    );
    Ok(true)
}
