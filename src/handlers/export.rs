//! Spreadsheet snapshot of the order book: one CSV row per order with a
//! fixed column set. Read-side only, no round-trip import.

use axum::extract::State;
use axum::http::header;
use axum::response::{IntoResponse, Response};
use chrono::Utc;

use crate::error::AppError;
use crate::models::order::Order;
use crate::state::AppState;

const COLUMNS: &[&str] = &[
    "Date",
    "Customer Name",
    "Contact Number",
    "Instagram",
    "Box of 4",
    "Box of 6",
    "Box of 12",
    "Total Pieces",
    "Total Price",
    "Downpayment",
    "Payment Mode",
    "Paid",
    "Delivery Mode",
    "Meetup Location",
    "Meetup Time",
    "Maxim Address",
    "Special Instructions",
    "GCash Name",
    "GCash Number",
    "Status",
];

pub async fn export_orders(
    State(AppState { db_pool, .. }): State<AppState>,
) -> Result<Response, AppError> {
    let orders = sqlx::query_as::<_, Order>("SELECT * FROM orders ORDER BY id DESC")
        .fetch_all(&db_pool)
        .await?;

    let body = orders_to_csv(&orders);
    let filename = format!("bakedby_orders_{}.csv", Utc::now().format("%Y-%m-%d"));

    Ok((
        [
            (
                header::CONTENT_TYPE,
                "text/csv; charset=utf-8".to_string(),
            ),
            (
                header::CONTENT_DISPOSITION,
                format!("attachment; filename=\"{filename}\""),
            ),
        ],
        body,
    )
        .into_response())
}

pub(crate) fn orders_to_csv(orders: &[Order]) -> String {
    let mut lines = Vec::with_capacity(orders.len() + 1);
    lines.push(COLUMNS.join(","));

    for order in orders {
        let opt = |v: &Option<String>| v.clone().unwrap_or_else(|| "N/A".to_string());
        let row = [
            order.created_at.format("%Y-%m-%d").to_string(),
            order.full_name.clone(),
            order.contact_number.clone(),
            order.instagram.clone(),
            order.box_of_4.to_string(),
            order.box_of_6.to_string(),
            order.box_of_12.to_string(),
            order.pieces().to_string(),
            order.total_price.to_string(),
            order.downpayment_price.to_string(),
            order.payment_mode.as_str().to_string(),
            if order.is_paid { "Yes" } else { "No" }.to_string(),
            order.delivery_mode.as_str().to_string(),
            opt(&order.meetup_location),
            opt(&order.meetup_time),
            opt(&order.maxim_address),
            opt(&order.special_instructions),
            opt(&order.gcash_name),
            opt(&order.gcash_number),
            order.status.as_str().to_string(),
        ];
        let escaped: Vec<String> = row.iter().map(|field| csv_field(field)).collect();
        lines.push(escaped.join(","));
    }

    lines.join("\n")
}

fn csv_field(value: &str) -> String {
    if value.contains([',', '"', '\n', '\r']) {
        format!("\"{}\"", value.replace('"', "\"\""))
    } else {
        value.to_string()
    }
}
