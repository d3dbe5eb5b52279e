// src/config.rs
use chrono::{DateTime, Utc};
use std::env;
use std::path::PathBuf;

/// Process configuration, read once at startup. Required variables abort
/// startup with a clear diagnostic; the rest fall back to defaults.
#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: String,
    pub jwt_secret: String,
    pub upload_dir: PathBuf,
    /// The single counter every order draws from.
    pub stock_item: String,
    /// Fraction of the total required upfront, e.g. 0.5 for 50%.
    pub downpayment_rate: f64,
    /// When pre-orders open; `None` means the shop is always open.
    pub preorder_opens_at: Option<DateTime<Utc>>,
}

impl Config {
    pub fn from_env() -> Self {
        let database_url = env::var("DATABASE_URL").expect("DATABASE_URL must be set");
        let jwt_secret = env::var("JWT_SECRET").expect("JWT_SECRET must be set");

        let upload_dir = env::var("UPLOAD_DIR")
            .unwrap_or_else(|_| "uploads".to_string())
            .into();

        let stock_item = env::var("STOCK_ITEM").unwrap_or_else(|_| "Chewy Cookie".to_string());

        let downpayment_rate: f64 = env::var("DOWNPAYMENT_RATE")
            .ok()
            .map(|v| v.parse().expect("DOWNPAYMENT_RATE must be a number"))
            .unwrap_or(0.5);
        assert!(
            (0.0..=1.0).contains(&downpayment_rate),
            "DOWNPAYMENT_RATE must be between 0 and 1"
        );

        let preorder_opens_at = env::var("PREORDER_OPENS_AT").ok().map(|v| {
            DateTime::parse_from_rfc3339(&v)
                .expect("PREORDER_OPENS_AT must be an RFC 3339 timestamp")
                .with_timezone(&Utc)
        });

        Config {
            database_url,
            jwt_secret,
            upload_dir,
            stock_item,
            downpayment_rate,
            preorder_opens_at,
        }
    }
}
