use dotenvy::dotenv;
use shop_persistence::application::{orders_total, OrderService};
use shop_persistence::db::DEFAULT_POOL_SIZE;
use shop_persistence::infrastructure::DieselOrderRepository;
use shop_persistence::{create_pool, run_migrations};
use std::env;
use std::error::Error;

fn main() -> Result<(), Box<dyn Error>> {
    dotenv().ok();
    env_logger::init_from_env(env_logger::Env::default().default_filter_or("info"));

    let database_url = env::var("DATABASE_URL").map_err(|_| "DATABASE_URL must be set")?;
    let pool_size: u32 = match env::var("DB_POOL_SIZE") {
        Ok(raw) => raw
            .parse()
            .map_err(|_| "DB_POOL_SIZE must be a valid number")?,
        Err(_) => DEFAULT_POOL_SIZE,
    };

    let pool = create_pool(&database_url, pool_size)?;
    run_migrations(&pool)?;

    let service = OrderService::new(DieselOrderRepository::new(pool));
    let orders = service.list_orders()?;
    log::info!(
        "{} order(s) stored in {}, grand total {:.2}",
        orders.len(),
        database_url,
        orders_total(&orders)
    );

    println!("{}", serde_json::to_string_pretty(&orders)?);
    Ok(())
}
