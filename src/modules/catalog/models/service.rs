use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::core::{AppError, Result};

/// Catalogue entry: a job the garage performs, at a fixed price
#[derive(Debug, Clone, PartialEq, Eq, Serialize, sqlx::FromRow)]
pub struct Service {
    pub id: u64,
    pub name: String,
    #[serde(with = "rust_decimal::serde::float")]
    pub price: Decimal,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewService {
    pub name: String,
    pub price: Decimal,
}

impl NewService {
    pub fn into_service(self, id: u64) -> Service {
        Service {
            id,
            name: self.name,
            price: self.price,
        }
    }
}

/// Body of `POST /services`; price may be sent as a JSON number or string
#[derive(Debug, Default, Deserialize)]
pub struct CreateServiceRequest {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub price: Option<Decimal>,
}

/// Prices are stored as DECIMAL(10,2)
const PRICE_SCALE: u32 = 2;

impl CreateServiceRequest {
    pub const REQUIRED_MESSAGE: &'static str = "Name and price are required";
    pub const PRICE_SCALE_MESSAGE: &'static str = "Price must have at most two decimal places";

    pub fn validate(self) -> Result<NewService> {
        let name = self
            .name
            .map(|n| n.trim().to_string())
            .filter(|n| !n.is_empty());
        let price = self.price.filter(|p| !p.is_zero());

        let (Some(name), Some(price)) = (name, price) else {
            return Err(AppError::validation(Self::REQUIRED_MESSAGE));
        };

        if price.is_sign_negative() {
            return Err(AppError::validation("Price must be greater than zero"));
        }

        // Trailing zeros are fine ("10.500"); anything finer than cents is not.
        if price.normalize().scale() > PRICE_SCALE {
            return Err(AppError::validation(Self::PRICE_SCALE_MESSAGE));
        }

        Ok(NewService { name, price })
    }
}
