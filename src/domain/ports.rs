use super::customer::Customer;
use super::errors::DomainError;
use super::order::Order;
use super::product::Product;

/// Persistence port shared by every aggregate. `find` reports a missing row
/// as `DomainError::NotFound`, never as an empty success.
pub trait Repository<T> {
    fn create(&self, entity: &T) -> Result<(), DomainError>;
    fn update(&self, entity: &T) -> Result<(), DomainError>;
    fn find(&self, id: &str) -> Result<T, DomainError>;
    fn find_all(&self) -> Result<Vec<T>, DomainError>;
}

pub trait OrderRepository: Repository<Order> + Send + Sync + 'static {}

pub trait CustomerRepository: Repository<Customer> + Send + Sync + 'static {}

pub trait ProductRepository: Repository<Product> + Send + Sync + 'static {}
