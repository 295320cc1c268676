use serde::{Deserialize, Serialize};

use crate::core::{AppError, Result};

/// A customer vehicle taken in at the garage
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, sqlx::FromRow)]
pub struct Car {
    pub id: u64,
    pub make: String,
    pub model: String,
    pub year: i32,
    pub owner_name: String,
}

/// Validated car intake, ready to insert
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewCar {
    pub make: String,
    pub model: String,
    pub year: i32,
    pub owner_name: String,
}

impl NewCar {
    pub fn into_car(self, id: u64) -> Car {
        Car {
            id,
            make: self.make,
            model: self.model,
            year: self.year,
            owner_name: self.owner_name,
        }
    }
}

/// Body of `POST /car`
#[derive(Debug, Default, Deserialize)]
pub struct CreateCarRequest {
    #[serde(default)]
    pub make: Option<String>,
    #[serde(default)]
    pub model: Option<String>,
    #[serde(default)]
    pub year: Option<i32>,
    #[serde(default)]
    pub owner_name: Option<String>,
}

impl CreateCarRequest {
    pub const REQUIRED_MESSAGE: &'static str = "All fields are required";

    /// Every field must be present; blank strings and a zero year count as missing
    pub fn validate(self) -> Result<NewCar> {
        let required = |value: Option<String>| {
            value
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
        };

        match (
            required(self.make),
            required(self.model),
            self.year.filter(|y| *y != 0),
            required(self.owner_name),
        ) {
            (Some(make), Some(model), Some(year), Some(owner_name)) => Ok(NewCar {
                make,
                model,
                year,
                owner_name,
            }),
            _ => Err(AppError::validation(Self::REQUIRED_MESSAGE)),
        }
    }
}
