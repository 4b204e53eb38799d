use diesel::prelude::*;

use crate::db::DbPool;
use crate::domain::customer::Customer;
use crate::domain::errors::DomainError;
use crate::domain::ports::{CustomerRepository, Repository};
use crate::schema::customers;

use super::models::CustomerRow;

pub struct DieselCustomerRepository {
    pool: DbPool,
}

impl DieselCustomerRepository {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

impl Repository<Customer> for DieselCustomerRepository {
    fn create(&self, customer: &Customer) -> Result<(), DomainError> {
        let mut conn = self.pool.get()?;

        diesel::insert_into(customers::table)
            .values(&CustomerRow::from(customer))
            .execute(&mut conn)?;
        log::debug!("created customer {}", customer.id());
        Ok(())
    }

    fn update(&self, customer: &Customer) -> Result<(), DomainError> {
        let mut conn = self.pool.get()?;

        let updated = diesel::update(customers::table.find(customer.id()))
            .set(&CustomerRow::from(customer))
            .execute(&mut conn)?;
        if updated == 0 {
            return Err(DomainError::NotFound("Customer"));
        }
        Ok(())
    }

    fn find(&self, id: &str) -> Result<Customer, DomainError> {
        let mut conn = self.pool.get()?;

        customers::table
            .find(id)
            .select(CustomerRow::as_select())
            .first(&mut conn)
            .optional()?
            .ok_or(DomainError::NotFound("Customer"))?
            .try_into()
    }

    fn find_all(&self) -> Result<Vec<Customer>, DomainError> {
        let mut conn = self.pool.get()?;

        customers::table
            .select(CustomerRow::as_select())
            .order(customers::id.asc())
            .load(&mut conn)?
            .into_iter()
            .map(Customer::try_from)
            .collect()
    }
}

impl CustomerRepository for DieselCustomerRepository {}
