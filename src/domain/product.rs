use serde::Serialize;

use super::errors::DomainError;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Product {
    id: String,
    name: String,
    price: f64,
}

impl Product {
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        price: f64,
    ) -> Result<Self, DomainError> {
        let product = Self {
            id: id.into(),
            name: name.into(),
            price,
        };
        if product.id.is_empty() {
            return Err(DomainError::InvalidInput("Id is required".to_string()));
        }
        if product.name.is_empty() {
            return Err(DomainError::InvalidInput("Name is required".to_string()));
        }
        validate_price(product.price)?;
        Ok(product)
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn price(&self) -> f64 {
        self.price
    }

    pub fn change_name(&mut self, name: impl Into<String>) -> Result<(), DomainError> {
        let name = name.into();
        if name.is_empty() {
            return Err(DomainError::InvalidInput("Name is required".to_string()));
        }
        self.name = name;
        Ok(())
    }

    pub fn change_price(&mut self, price: f64) -> Result<(), DomainError> {
        validate_price(price)?;
        self.price = price;
        Ok(())
    }
}

fn validate_price(price: f64) -> Result<(), DomainError> {
    if price.is_nan() || price < 0.0 {
        return Err(DomainError::InvalidInput(
            "Price must be greater than zero".to_string(),
        ));
    }
    Ok(())
}
