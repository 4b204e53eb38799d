use diesel::prelude::*;

use crate::db::DbPool;
use crate::domain::errors::DomainError;
use crate::domain::ports::{ProductRepository, Repository};
use crate::domain::product::Product;
use crate::schema::products;

use super::models::ProductRow;

pub struct DieselProductRepository {
    pool: DbPool,
}

impl DieselProductRepository {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

impl Repository<Product> for DieselProductRepository {
    fn create(&self, product: &Product) -> Result<(), DomainError> {
        let mut conn = self.pool.get()?;

        diesel::insert_into(products::table)
            .values(&ProductRow::from(product))
            .execute(&mut conn)?;
        log::debug!("created product {}", product.id());
        Ok(())
    }

    fn update(&self, product: &Product) -> Result<(), DomainError> {
        let mut conn = self.pool.get()?;

        let updated = diesel::update(products::table.find(product.id()))
            .set(&ProductRow::from(product))
            .execute(&mut conn)?;
        if updated == 0 {
            return Err(DomainError::NotFound("Product"));
        }
        Ok(())
    }

    fn find(&self, id: &str) -> Result<Product, DomainError> {
        let mut conn = self.pool.get()?;

        products::table
            .find(id)
            .select(ProductRow::as_select())
            .first(&mut conn)
            .optional()?
            .ok_or(DomainError::NotFound("Product"))?
            .try_into()
    }

    fn find_all(&self) -> Result<Vec<Product>, DomainError> {
        let mut conn = self.pool.get()?;

        products::table
            .select(ProductRow::as_select())
            .order(products::id.asc())
            .load(&mut conn)?
            .into_iter()
            .map(Product::try_from)
            .collect()
    }
}

impl ProductRepository for DieselProductRepository {}
