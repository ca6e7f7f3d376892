//! Request validation for new restaurant-pizza offerings.

use crate::error::AppError;
use crate::models::NewRestaurantPizza;
use crate::service::CatalogService;
use serde::Deserialize;
use sqlx::SqlitePool;
use std::ops::RangeInclusive;

pub const PRICE_RANGE: RangeInclusive<i64> = 1..=30;

/// Body of `POST /restaurant_pizzas`. Every field is optional so that a missing
/// field is reported as a validation error rather than a decode failure.
#[derive(Debug, Default, Deserialize)]
pub struct CreateRestaurantPizza {
    pub pizza_id: Option<i64>,
    pub restaurant_id: Option<i64>,
    pub price: Option<i64>,
}

pub struct RequestValidator;

impl RequestValidator {
    /// Checks that need no store access. The price is checked first.
    pub fn validate_shape(body: &CreateRestaurantPizza) -> Result<NewRestaurantPizza, AppError> {
        let price = body
            .price
            .filter(|p| PRICE_RANGE.contains(p))
            .ok_or_else(|| invalid("price"))?;
        let pizza_id = body.pizza_id.ok_or_else(|| invalid("pizza_id"))?;
        let restaurant_id = body.restaurant_id.ok_or_else(|| invalid("restaurant_id"))?;
        Ok(NewRestaurantPizza {
            price,
            pizza_id,
            restaurant_id,
        })
    }

    /// Full validation: shape, then pizza existence, then restaurant existence.
    pub async fn validate(
        pool: &SqlitePool,
        body: &CreateRestaurantPizza,
    ) -> Result<NewRestaurantPizza, AppError> {
        let new = Self::validate_shape(body)?;
        if CatalogService::find_pizza(pool, new.pizza_id).await?.is_none() {
            return Err(invalid("pizza_id"));
        }
        if CatalogService::find_restaurant(pool, new.restaurant_id).await?.is_none() {
            return Err(invalid("restaurant_id"));
        }
        Ok(new)
    }
}

fn invalid(field: &str) -> AppError {
    AppError::Validation(format!("Invalid {}", field))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn body(price: Option<i64>, pizza_id: Option<i64>, restaurant_id: Option<i64>) -> CreateRestaurantPizza {
        CreateRestaurantPizza {
            pizza_id,
            restaurant_id,
            price,
        }
    }

    fn message(err: AppError) -> String {
        match err {
            AppError::Validation(m) => m,
            other => panic!("expected validation error, got {other:?}"),
        }
    }

    #[rstest]
    #[case(1)]
    #[case(15)]
    #[case(30)]
    fn accepts_prices_in_range(#[case] price: i64) {
        let new = RequestValidator::validate_shape(&body(Some(price), Some(1), Some(2))).unwrap();
        assert_eq!(new, NewRestaurantPizza { price, pizza_id: 1, restaurant_id: 2 });
    }

    #[rstest]
    #[case(Some(0))]
    #[case(Some(31))]
    #[case(Some(-5))]
    #[case(None)]
    fn rejects_bad_price(#[case] price: Option<i64>) {
        let err = RequestValidator::validate_shape(&body(price, Some(1), Some(2))).unwrap_err();
        assert_eq!(message(err), "Invalid price");
    }

    #[test]
    fn price_is_reported_before_ids() {
        let err = RequestValidator::validate_shape(&body(Some(0), None, None)).unwrap_err();
        assert_eq!(message(err), "Invalid price");
    }

    #[test]
    fn missing_ids_name_the_field() {
        let err = RequestValidator::validate_shape(&body(Some(3), None, Some(2))).unwrap_err();
        assert_eq!(message(err), "Invalid pizza_id");
        let err = RequestValidator::validate_shape(&body(Some(3), Some(1), None)).unwrap_err();
        assert_eq!(message(err), "Invalid restaurant_id");
    }
}
