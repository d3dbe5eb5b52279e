// One-shot operational utility: set the inventory counter to a fixed value
// when a new batch opens.
//
// Usage: reset-stock <count> [item]
use dotenvy::dotenv;
use sqlx::postgres::PgPoolOptions;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt::init();
    dotenv().ok();

    let mut args = std::env::args().skip(1);
    let count: i32 = args
        .next()
        .and_then(|v| v.parse().ok())
        .expect("Usage: reset-stock <count> [item]");
    let item = args.next().unwrap_or_else(|| "Chewy Cookie".to_string());
    assert!(count >= 0, "count must be non-negative");

    let database_url = std::env::var("DATABASE_URL").expect("DATABASE_URL must be set");
    let pool = PgPoolOptions::new()
        .max_connections(1)
        .connect(&database_url)
        .await
        .expect("Failed to connect to database");

    sqlx::query(
        "INSERT INTO inventory (item_name, stock_count) VALUES ($1, $2)
         ON CONFLICT (item_name) DO UPDATE SET stock_count = EXCLUDED.stock_count",
    )
    .bind(&item)
    .bind(count)
    .execute(&pool)
    .await
    .expect("Failed to reset stock");

    tracing::info!(item = %item, count, "Stock counter reset");
}
