use serde::Serialize;

use super::errors::DomainError;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Address {
    street: String,
    number: i32,
    zip: String,
    city: String,
}

impl Address {
    pub fn new(
        street: impl Into<String>,
        number: i32,
        zip: impl Into<String>,
        city: impl Into<String>,
    ) -> Result<Self, DomainError> {
        let address = Self {
            street: street.into(),
            number,
            zip: zip.into(),
            city: city.into(),
        };
        if address.street.is_empty() {
            return Err(DomainError::InvalidInput("Street is required".to_string()));
        }
        if address.zip.is_empty() {
            return Err(DomainError::InvalidInput("Zip is required".to_string()));
        }
        if address.city.is_empty() {
            return Err(DomainError::InvalidInput("City is required".to_string()));
        }
        Ok(address)
    }

    pub fn street(&self) -> &str {
        &self.street
    }

    pub fn number(&self) -> i32 {
        self.number
    }

    pub fn zip(&self) -> &str {
        &self.zip
    }

    pub fn city(&self) -> &str {
        &self.city
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Customer {
    id: String,
    name: String,
    address: Option<Address>,
    active: bool,
    reward_points: i32,
}

impl Customer {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Result<Self, DomainError> {
        let customer = Self {
            id: id.into(),
            name: name.into(),
            address: None,
            active: false,
            reward_points: 0,
        };
        if customer.id.is_empty() {
            return Err(DomainError::InvalidInput("Id is required".to_string()));
        }
        if customer.name.is_empty() {
            return Err(DomainError::InvalidInput("Name is required".to_string()));
        }
        Ok(customer)
    }

    /// Rebuilds a customer from stored state without replaying the
    /// activation rules.
    pub(crate) fn restore(
        id: String,
        name: String,
        address: Option<Address>,
        active: bool,
        reward_points: i32,
    ) -> Self {
        Self {
            id,
            name,
            address,
            active,
            reward_points,
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn address(&self) -> Option<&Address> {
        self.address.as_ref()
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    pub fn reward_points(&self) -> i32 {
        self.reward_points
    }

    pub fn change_name(&mut self, name: impl Into<String>) -> Result<(), DomainError> {
        let name = name.into();
        if name.is_empty() {
            return Err(DomainError::InvalidInput("Name is required".to_string()));
        }
        self.name = name;
        Ok(())
    }

    pub fn change_address(&mut self, address: Address) {
        self.address = Some(address);
    }

    pub fn activate(&mut self) -> Result<(), DomainError> {
        if self.address.is_none() {
            return Err(DomainError::InvalidInput(
                "Address is mandatory to activate a customer".to_string(),
            ));
        }
        self.active = true;
        Ok(())
    }

    pub fn deactivate(&mut self) {
        self.active = false;
    }

    pub fn add_reward_points(&mut self, points: i32) {
        self.reward_points += points;
    }
}
