use diesel::prelude::*;
use diesel::sqlite::SqliteConnection;

use crate::db::DbPool;
use crate::domain::errors::DomainError;
use crate::domain::order::Order;
use crate::domain::ports::{OrderRepository, Repository};
use crate::schema::{order_items, orders};

use super::models::{item_rows, to_order, OrderItemRow, OrderRow};

// ── Error conversions (infrastructure concern only) ──────────────────────────

impl From<diesel::result::Error> for DomainError {
    fn from(e: diesel::result::Error) -> Self {
        DomainError::Persistence(e.to_string())
    }
}

impl From<r2d2::Error> for DomainError {
    fn from(e: r2d2::Error) -> Self {
        DomainError::Persistence(e.to_string())
    }
}

// ── Repository ────────────────────────────────────────────────────────────────

pub struct DieselOrderRepository {
    pool: DbPool,
}

impl DieselOrderRepository {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

fn insert_items(conn: &mut SqliteConnection, order: &Order) -> Result<usize, DomainError> {
    let rows = item_rows(order);
    if rows.is_empty() {
        return Ok(0);
    }
    Ok(diesel::insert_into(order_items::table)
        .values(&rows)
        .execute(conn)?)
}

impl Repository<Order> for DieselOrderRepository {
    fn create(&self, order: &Order) -> Result<(), DomainError> {
        let mut conn = self.pool.get()?;

        conn.transaction::<_, DomainError, _>(|conn| {
            diesel::insert_into(orders::table)
                .values(&OrderRow::from(order))
                .execute(conn)?;
            let inserted = insert_items(conn, order)?;

            log::debug!("created order {} with {} item(s)", order.id(), inserted);
            Ok(())
        })
    }

    fn update(&self, order: &Order) -> Result<(), DomainError> {
        let mut conn = self.pool.get()?;

        conn.transaction::<_, DomainError, _>(|conn| {
            let updated = diesel::update(orders::table.find(order.id()))
                .set((
                    orders::customer_id.eq(order.customer_id()),
                    orders::total.eq(order.total()),
                ))
                .execute(conn)?;
            if updated == 0 {
                return Err(DomainError::NotFound("Order"));
            }

            // Items are replaced wholesale rather than diffed by id.
            let removed =
                diesel::delete(order_items::table.filter(order_items::order_id.eq(order.id())))
                    .execute(conn)?;
            let inserted = insert_items(conn, order)?;

            log::debug!(
                "updated order {}: replaced {} item(s) with {}",
                order.id(),
                removed,
                inserted
            );
            Ok(())
        })
    }

    fn find(&self, id: &str) -> Result<Order, DomainError> {
        let mut conn = self.pool.get()?;

        conn.transaction::<_, DomainError, _>(|conn| {
            let order: OrderRow = orders::table
                .find(id)
                .select(OrderRow::as_select())
                .first(conn)
                .optional()?
                .ok_or(DomainError::NotFound("Order"))?;

            let items: Vec<OrderItemRow> = OrderItemRow::belonging_to(&order)
                .select(OrderItemRow::as_select())
                .order(order_items::position.asc())
                .load(conn)?;

            Ok(to_order(order, items))
        })
    }

    fn find_all(&self) -> Result<Vec<Order>, DomainError> {
        let mut conn = self.pool.get()?;

        conn.transaction::<_, DomainError, _>(|conn| {
            let rows: Vec<OrderRow> = orders::table
                .select(OrderRow::as_select())
                .order(orders::id.asc())
                .load(conn)?;

            let items: Vec<OrderItemRow> = OrderItemRow::belonging_to(&rows)
                .select(OrderItemRow::as_select())
                .order((order_items::order_id.asc(), order_items::position.asc()))
                .load(conn)?;

            Ok(items
                .grouped_by(&rows)
                .into_iter()
                .zip(rows)
                .map(|(items, order)| to_order(order, items))
                .collect())
        })
    }
}

impl OrderRepository for DieselOrderRepository {}

#[cfg(test)]
mod tests {
    use diesel::prelude::*;

    use super::DieselOrderRepository;
    use crate::domain::customer::Customer;
    use crate::domain::errors::DomainError;
    use crate::domain::order::{Order, OrderItem};
    use crate::domain::ports::Repository;
    use crate::domain::product::Product;
    use crate::infrastructure::customer_repo::DieselCustomerRepository;
    use crate::infrastructure::models::{OrderItemRow, OrderRow};
    use crate::infrastructure::product_repo::DieselProductRepository;
    use crate::schema::{order_items, orders};
    use crate::test_support::setup_db;

    fn seed(pool: &crate::db::DbPool) {
        DieselCustomerRepository::new(pool.clone())
            .create(&Customer::new("c1", "Customer 1").unwrap())
            .expect("create customer");
        let products = DieselProductRepository::new(pool.clone());
        products
            .create(&Product::new("p1", "Product 1", 10.0).unwrap())
            .expect("create product");
        products
            .create(&Product::new("p2", "Product 2", 20.0).unwrap())
            .expect("create product");
    }

    fn item(id: &str, product_id: &str, price: f64, quantity: i32) -> OrderItem {
        OrderItem::new(id, format!("Product {product_id}"), price, product_id, quantity)
    }

    #[test]
    fn create_writes_order_row_with_cached_total() {
        let (_dir, pool) = setup_db();
        seed(&pool);
        let repo = DieselOrderRepository::new(pool.clone());
        let order = Order::new("o1", "c1", vec![item("i1", "p1", 10.0, 2)]).unwrap();

        repo.create(&order).expect("create failed");

        let mut conn = pool.get().expect("connection");
        let row: OrderRow = orders::table
            .find("o1")
            .select(OrderRow::as_select())
            .first(&mut conn)
            .expect("order row");
        assert_eq!(
            row,
            OrderRow {
                id: "o1".to_string(),
                customer_id: "c1".to_string(),
                total: 20.0,
            }
        );
    }

    #[test]
    fn update_leaves_no_residual_item_rows() {
        let (_dir, pool) = setup_db();
        seed(&pool);
        let repo = DieselOrderRepository::new(pool.clone());
        let mut order = Order::new(
            "o1",
            "c1",
            vec![item("i1", "p1", 10.0, 2), item("i2", "p2", 20.0, 1)],
        )
        .unwrap();
        repo.create(&order).expect("create failed");

        order
            .change_items(vec![item("i3", "p2", 20.0, 4)])
            .expect("valid items");
        repo.update(&order).expect("update failed");

        let mut conn = pool.get().expect("connection");
        let rows: Vec<OrderItemRow> = order_items::table
            .select(OrderItemRow::as_select())
            .load(&mut conn)
            .expect("item rows");
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].id, "i3");

        let total: f64 = orders::table
            .find("o1")
            .select(orders::total)
            .first(&mut conn)
            .expect("order total");
        assert_eq!(total, 80.0);
    }

    #[test]
    fn update_of_missing_order_is_not_found() {
        let (_dir, pool) = setup_db();
        seed(&pool);
        let repo = DieselOrderRepository::new(pool);
        let order = Order::new("ghost", "c1", vec![item("i1", "p1", 10.0, 1)]).unwrap();

        let err = repo.update(&order).unwrap_err();

        assert!(matches!(err, DomainError::NotFound("Order")));
        assert!(matches!(
            repo.find("ghost").unwrap_err(),
            DomainError::NotFound(_)
        ));
    }

    #[test]
    fn create_with_duplicate_id_is_a_persistence_error() {
        let (_dir, pool) = setup_db();
        seed(&pool);
        let repo = DieselOrderRepository::new(pool);
        let order = Order::new("o1", "c1", vec![item("i1", "p1", 10.0, 1)]).unwrap();
        repo.create(&order).expect("first create");

        let again = Order::new("o1", "c1", vec![item("i9", "p1", 10.0, 1)]).unwrap();
        let err = repo.create(&again).unwrap_err();

        assert!(matches!(err, DomainError::Persistence(_)));
    }

    #[test]
    fn failed_item_insert_rolls_back_the_order_row() {
        let (_dir, pool) = setup_db();
        seed(&pool);
        let repo = DieselOrderRepository::new(pool.clone());
        let order = Order::new("o1", "c1", vec![item("i1", "missing-product", 10.0, 1)]).unwrap();

        let err = repo.create(&order).unwrap_err();
        assert!(matches!(err, DomainError::Persistence(_)));

        let mut conn = pool.get().expect("connection");
        let count: i64 = orders::table.count().get_result(&mut conn).expect("count");
        assert_eq!(count, 0);
    }

    #[test]
    fn failed_update_keeps_previous_items() {
        let (_dir, pool) = setup_db();
        seed(&pool);
        let repo = DieselOrderRepository::new(pool.clone());
        let mut order = Order::new("o1", "c1", vec![item("i1", "p1", 10.0, 2)]).unwrap();
        repo.create(&order).expect("create failed");
        let original = order.clone();

        order
            .change_items(vec![item("i2", "nope", 5.0, 1)])
            .expect("valid items");
        let err = repo.update(&order).unwrap_err();
        assert!(matches!(err, DomainError::Persistence(_)));

        assert_eq!(repo.find("o1").expect("find failed"), original);

        let mut conn = pool.get().expect("connection");
        let total: f64 = orders::table
            .find("o1")
            .select(orders::total)
            .first(&mut conn)
            .expect("order total");
        assert_eq!(total, 20.0);
    }

    #[test]
    fn create_with_unknown_customer_is_a_persistence_error() {
        let (_dir, pool) = setup_db();
        seed(&pool);
        let repo = DieselOrderRepository::new(pool);
        let order = Order::new("o1", "nobody", vec![item("i1", "p1", 10.0, 1)]).unwrap();

        assert!(matches!(
            repo.create(&order).unwrap_err(),
            DomainError::Persistence(_)
        ));
    }

    #[test]
    fn find_all_keeps_item_order_within_each_order() {
        let (_dir, pool) = setup_db();
        seed(&pool);
        let repo = DieselOrderRepository::new(pool);
        let first = Order::new(
            "o2",
            "c1",
            vec![item("z", "p2", 20.0, 1), item("a", "p1", 10.0, 1)],
        )
        .unwrap();
        let second = Order::new("o1", "c1", vec![item("m", "p1", 10.0, 3)]).unwrap();
        repo.create(&first).expect("create o2");
        repo.create(&second).expect("create o1");

        let orders = repo.find_all().expect("find_all failed");

        assert_eq!(orders, vec![second, first]);
    }

    #[test]
    fn find_all_on_empty_store_is_empty() {
        let (_dir, pool) = setup_db();
        let repo = DieselOrderRepository::new(pool);

        assert!(repo.find_all().expect("find_all failed").is_empty());
    }
}
