use uuid::Uuid;

use crate::domain::customer::Customer;
use crate::domain::errors::DomainError;
use crate::domain::order::{Order, OrderItem};
use crate::domain::ports::OrderRepository;

pub struct OrderService<R> {
    repo: R,
}

impl<R: OrderRepository> OrderService<R> {
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Creates and persists an order for `customer` under a fresh id and
    /// credits the customer with half the order total in reward points.
    /// The customer change is in memory only; persisting it is up to the
    /// caller.
    pub fn place_order(
        &self,
        customer: &mut Customer,
        items: Vec<OrderItem>,
    ) -> Result<Order, DomainError> {
        let order = Order::new(Uuid::new_v4().to_string(), customer.id(), items)?;
        self.repo.create(&order)?;

        customer.add_reward_points((order.total() / 2.0) as i32);
        Ok(order)
    }

    pub fn get_order(&self, id: &str) -> Result<Order, DomainError> {
        self.repo.find(id)
    }

    pub fn list_orders(&self) -> Result<Vec<Order>, DomainError> {
        self.repo.find_all()
    }

    pub fn change_order_items(
        &self,
        id: &str,
        items: Vec<OrderItem>,
    ) -> Result<Order, DomainError> {
        let mut order = self.repo.find(id)?;
        order.change_items(items)?;
        self.repo.update(&order)?;
        Ok(order)
    }
}

/// Sum of the totals of `orders`.
pub fn orders_total(orders: &[Order]) -> f64 {
    orders.iter().map(Order::total).sum()
}
