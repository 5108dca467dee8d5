// src/dtos/product.rs
use serde::{Deserialize, Serialize};

use crate::error::AppError;

pub const NAME_MAX_LEN: usize = 255;
pub const DESCRIPTION_MAX_LEN: usize = 1000;

#[derive(Debug, Deserialize)]
pub struct CreateProductRequest {
    pub name: String,
    pub price: f64,
    pub description: String,
}

impl CreateProductRequest {
    pub fn validate(&self) -> Result<(), AppError> {
        validate_name(&self.name)?;
        validate_price(self.price)?;
        validate_description(&self.description)?;
        Ok(())
    }
}

#[derive(Debug, Deserialize)]
pub struct UpdateProductRequest {
    pub name: Option<String>,
    pub price: Option<f64>,
    pub description: Option<String>,
}

impl UpdateProductRequest {
    /// Partial update: only the fields that are present are checked.
    pub fn validate(&self) -> Result<(), AppError> {
        if let Some(name) = &self.name {
            validate_name(name)?;
        }
        if let Some(price) = self.price {
            validate_price(price)?;
        }
        if let Some(description) = &self.description {
            validate_description(description)?;
        }
        Ok(())
    }
}

fn validate_name(name: &str) -> Result<(), AppError> {
    if name.is_empty() {
        return Err(AppError::validation("name must not be empty"));
    }
    if name.chars().count() > NAME_MAX_LEN {
        return Err(AppError::validation(format!(
            "name must be at most {NAME_MAX_LEN} characters"
        )));
    }
    Ok(())
}

fn validate_price(price: f64) -> Result<(), AppError> {
    if !price.is_finite() || price <= 0.0 {
        return Err(AppError::validation("price must be a positive number"));
    }
    Ok(())
}

fn validate_description(description: &str) -> Result<(), AppError> {
    if description.is_empty() {
        return Err(AppError::validation("description must not be empty"));
    }
    if description.chars().count() > DESCRIPTION_MAX_LEN {
        return Err(AppError::validation(format!(
            "description must be at most {DESCRIPTION_MAX_LEN} characters"
        )));
    }
    Ok(())
}

/// Query string for the listing endpoint. `limit` defaults to 10; `offset`
/// is unset by default.
#[derive(Debug, Deserialize)]
pub struct ProductQuery {
    pub search: Option<String>,
    pub limit: Option<i64>,
    pub offset: Option<i64>,
}

impl ProductQuery {
    pub fn limit(&self) -> i64 {
        self.limit.unwrap_or(10)
    }

    pub fn offset(&self) -> i64 {
        self.offset.unwrap_or(0)
    }
}

#[derive(Debug, Serialize)]
pub struct ProductResponse {
    pub id: String,
    pub name: String,
    pub price: f64,
    pub description: String,
    pub created_at: Option<String>,
}

// Convert from Model to Response DTO
impl From<crate::models::product::Product> for ProductResponse {
    fn from(product: crate::models::product::Product) -> Self {
        Self {
            id: product.id.to_string(),
            name: product.name,
            price: product.price,
            description: product.description,
            created_at: product.created_at.map(|dt| dt.to_rfc3339()),
        }
    }
}

/// Page of products plus the total match count across all pages.
#[derive(Debug, Serialize)]
pub struct ProductListResponse {
    pub products: Vec<ProductResponse>,
    pub total: i64,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn widget() -> CreateProductRequest {
        CreateProductRequest {
            name: "Widget".to_string(),
            price: 9.99,
            description: "A widget.".to_string(),
        }
    }

    #[test]
    fn valid_input_passes() {
        assert!(widget().validate().is_ok());
    }

    #[test]
    fn negative_price_fails() {
        let mut input = widget();
        input.price = -1.0;
        assert!(input.validate().is_err());
    }

    #[test]
    fn zero_price_fails() {
        let mut input = widget();
        input.price = 0.0;
        assert!(input.validate().is_err());
    }

    #[test]
    fn overlong_name_fails() {
        let mut input = widget();
        input.name = "x".repeat(300);
        assert!(input.validate().is_err());
    }

    #[test]
    fn empty_description_fails() {
        let mut input = widget();
        input.description = String::new();
        assert!(input.validate().is_err());
    }

    #[test]
    fn overlong_description_fails() {
        let mut input = widget();
        input.description = "d".repeat(1001);
        assert!(input.validate().is_err());
    }

    #[test]
    fn partial_update_checks_only_present_fields() {
        let update = UpdateProductRequest {
            name: None,
            price: Some(5.0),
            description: None,
        };
        assert!(update.validate().is_ok());

        let update = UpdateProductRequest {
            name: Some(String::new()),
            price: None,
            description: None,
        };
        assert!(update.validate().is_err());
    }

    #[test]
    fn query_defaults() {
        let query = ProductQuery {
            search: None,
            limit: None,
            offset: None,
        };
        assert_eq!(query.limit(), 10);
        assert_eq!(query.offset(), 0);
    }
}
