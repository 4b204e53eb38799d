use serde::Serialize;

use super::errors::DomainError;

/// A line of an order. `name` and `price` are copied from the product when
/// the item is built and never follow later product changes.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OrderItem {
    id: String,
    name: String,
    price: f64,
    product_id: String,
    quantity: i32,
}

impl OrderItem {
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        price: f64,
        product_id: impl Into<String>,
        quantity: i32,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            price,
            product_id: product_id.into(),
            quantity,
        }
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

    pub fn product_id(&self) -> &str {
        &self.product_id
    }

    pub fn quantity(&self) -> i32 {
        self.quantity
    }

    pub fn total(&self) -> f64 {
        self.price * f64::from(self.quantity)
    }
}

/// The order aggregate. Items keep the order they were given in.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Order {
    id: String,
    customer_id: String,
    items: Vec<OrderItem>,
}

impl Order {
    pub fn new(
        id: impl Into<String>,
        customer_id: impl Into<String>,
        items: Vec<OrderItem>,
    ) -> Result<Self, DomainError> {
        let order = Self {
            id: id.into(),
            customer_id: customer_id.into(),
            items,
        };
        order.validate()?;
        Ok(order)
    }

    /// Rebuilds an order from stored rows. Stored state already passed
    /// validation when it was written.
    pub(crate) fn restore(id: String, customer_id: String, items: Vec<OrderItem>) -> Self {
        Self {
            id,
            customer_id,
            items,
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn customer_id(&self) -> &str {
        &self.customer_id
    }

    pub fn items(&self) -> &[OrderItem] {
        &self.items
    }

    pub fn total(&self) -> f64 {
        self.items.iter().map(OrderItem::total).sum()
    }

    /// Replaces the whole item list. The change is in memory only until the
    /// order is passed to `OrderRepository::update`.
    pub fn change_items(&mut self, items: Vec<OrderItem>) -> Result<(), DomainError> {
        validate_items(&items)?;
        self.items = items;
        Ok(())
    }

    fn validate(&self) -> Result<(), DomainError> {
        if self.id.is_empty() {
            return Err(DomainError::InvalidInput("Id is required".to_string()));
        }
        if self.customer_id.is_empty() {
            return Err(DomainError::InvalidInput(
                "CustomerId is required".to_string(),
            ));
        }
        validate_items(&self.items)
    }
}

fn validate_items(items: &[OrderItem]) -> Result<(), DomainError> {
    if items.is_empty() {
        return Err(DomainError::InvalidInput("Items are required".to_string()));
    }
    if items.iter().any(|item| item.quantity <= 0) {
        return Err(DomainError::InvalidInput(
            "Quantity must be greater than 0".to_string(),
        ));
    }
    Ok(())
}
