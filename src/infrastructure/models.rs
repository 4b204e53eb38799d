use diesel::prelude::*;

use crate::domain::customer::{Address, Customer};
use crate::domain::errors::DomainError;
use crate::domain::order::{Order, OrderItem};
use crate::domain::product::Product;
use crate::schema::{customers, order_items, orders, products};

#[derive(Debug, Clone, PartialEq, Queryable, Selectable, Identifiable, Insertable)]
#[diesel(table_name = orders)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct OrderRow {
    pub id: String,
    pub customer_id: String,
    pub total: f64,
}

#[derive(
    Debug, Clone, PartialEq, Queryable, Selectable, Identifiable, Insertable, Associations,
)]
#[diesel(table_name = order_items)]
#[diesel(belongs_to(OrderRow, foreign_key = order_id))]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct OrderItemRow {
    pub id: String,
    pub order_id: String,
    pub product_id: String,
    pub name: String,
    pub price: f64,
    pub quantity: i32,
    /// Index of the item in the aggregate's list; items reload in this order.
    /// The only column beyond the item shape `{id, name, price, quantity, order_id, product_id}`.
    pub position: i32,
}

#[derive(Debug, Clone, PartialEq, Queryable, Selectable, Identifiable, Insertable, AsChangeset)]
#[diesel(table_name = customers)]
#[diesel(treat_none_as_null = true)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct CustomerRow {
    pub id: String,
    pub name: String,
    pub street: Option<String>,
    pub number: Option<i32>,
    pub zipcode: Option<String>,
    pub city: Option<String>,
    pub active: bool,
    pub reward_points: i32,
}

#[derive(Debug, Clone, PartialEq, Queryable, Selectable, Identifiable, Insertable, AsChangeset)]
#[diesel(table_name = products)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct ProductRow {
    pub id: String,
    pub name: String,
    pub price: f64,
}

// ── Aggregate → rows ─────────────────────────────────────────────────────────

impl From<&Order> for OrderRow {
    fn from(order: &Order) -> Self {
        OrderRow {
            id: order.id().to_string(),
            customer_id: order.customer_id().to_string(),
            total: order.total(),
        }
    }
}

pub fn item_rows(order: &Order) -> Vec<OrderItemRow> {
    order
        .items()
        .iter()
        .zip(0..)
        .map(|(item, position)| OrderItemRow {
            id: item.id().to_string(),
            order_id: order.id().to_string(),
            product_id: item.product_id().to_string(),
            name: item.name().to_string(),
            price: item.price(),
            quantity: item.quantity(),
            position,
        })
        .collect()
}

impl From<&Customer> for CustomerRow {
    fn from(customer: &Customer) -> Self {
        let address = customer.address();
        CustomerRow {
            id: customer.id().to_string(),
            name: customer.name().to_string(),
            street: address.map(|a| a.street().to_string()),
            number: address.map(Address::number),
            zipcode: address.map(|a| a.zip().to_string()),
            city: address.map(|a| a.city().to_string()),
            active: customer.is_active(),
            reward_points: customer.reward_points(),
        }
    }
}

impl From<&Product> for ProductRow {
    fn from(product: &Product) -> Self {
        ProductRow {
            id: product.id().to_string(),
            name: product.name().to_string(),
            price: product.price(),
        }
    }
}

// ── Rows → aggregate ─────────────────────────────────────────────────────────

/// Rebuilds an order from its row and its item rows, which must already be
/// sorted by `position`. The cached `total` column is not read back; the
/// aggregate recomputes it from the items.
pub fn to_order(row: OrderRow, items: Vec<OrderItemRow>) -> Order {
    let items = items
        .into_iter()
        .map(|i| OrderItem::new(i.id, i.name, i.price, i.product_id, i.quantity))
        .collect();
    Order::restore(row.id, row.customer_id, items)
}

impl TryFrom<CustomerRow> for Customer {
    type Error = DomainError;

    fn try_from(row: CustomerRow) -> Result<Self, Self::Error> {
        let address = match (row.street, row.number, row.zipcode, row.city) {
            (Some(street), Some(number), Some(zip), Some(city)) => {
                Some(Address::new(street, number, zip, city)?)
            }
            _ => None,
        };
        Ok(Customer::restore(
            row.id,
            row.name,
            address,
            row.active,
            row.reward_points,
        ))
    }
}

impl TryFrom<ProductRow> for Product {
    type Error = DomainError;

    fn try_from(row: ProductRow) -> Result<Self, Self::Error> {
        Product::new(row.id, row.name, row.price)
    }
}
