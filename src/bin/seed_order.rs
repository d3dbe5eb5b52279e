// One-shot smoke test: insert a synthetic order record directly, bypassing
// intake. Useful for checking connectivity and the schema after a deploy.
//
// Usage: seed-order
use dotenvy::dotenv;
use sqlx::postgres::PgPoolOptions;
use sqlx::Row;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt::init();
    dotenv().ok();

    let database_url = std::env::var("DATABASE_URL").expect("DATABASE_URL must be set");
    let pool = PgPoolOptions::new()
        .max_connections(1)
        .connect(&database_url)
        .await
        .expect("Failed to connect to database");

    let row = sqlx::query(
        "INSERT INTO orders
         (full_name, contact_number, instagram, box_of_4, box_of_6, box_of_12,
          total_price, downpayment_price, payment_mode, delivery_mode,
          meetup_time, gcash_name, gcash_number, special_instructions)
         VALUES ($1, $2, $3, $4, $5, $6, $7, $8,
                 $9::payment_mode, $10::delivery_mode, $11, $12, $13, $14)
         RETURNING id",
    )
    .bind("Test Customer")
    .bind("09171234567")
    .bind("@test.customer")
    .bind(1)
    .bind(0)
    .bind(0)
    .bind(285i64)
    .bind(143i64)
    .bind("gcash")
    .bind("meetup")
    .bind("10am - 12pm")
    .bind("Test Customer")
    .bind("09171234567")
    .bind("seeded by smoke test")
    .fetch_one(&pool)
    .await
    .expect("Failed to insert synthetic order");

    let id: i64 = row.get("id");
    tracing::info!(order_id = id, "Synthetic order inserted");
}
