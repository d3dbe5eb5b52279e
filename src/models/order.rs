use crate::catalog::BoxSelection;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "payment_mode", rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum PaymentMode {
    Cash,
    Gcash,
}

impl PaymentMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            PaymentMode::Cash => "cash",
            PaymentMode::Gcash => "gcash",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "delivery_mode", rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum DeliveryMode {
    Meetup,
    Maxim,
}

impl DeliveryMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            DeliveryMode::Meetup => "meetup",
            DeliveryMode::Maxim => "maxim",
        }
    }
}

/// Fulfillment progress, separate from payment (`is_paid`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "order_status")]
pub enum OrderStatus {
    Pending,
    Baking,
    Ready,
    Delivered,
}

impl OrderStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            OrderStatus::Pending => "Pending",
            OrderStatus::Baking => "Baking",
            OrderStatus::Ready => "Ready",
            OrderStatus::Delivered => "Delivered",
        }
    }
}

#[derive(Debug, Clone, FromRow)]
pub struct Order {
    pub id: i64,
    pub created_at: DateTime<Utc>,
    pub full_name: String,
    pub contact_number: String,
    pub instagram: String,
    pub box_of_4: i32,
    pub box_of_6: i32,
    pub box_of_12: i32,
    pub total_price: i64,
    pub downpayment_price: i64,
    pub payment_mode: PaymentMode,
    pub delivery_mode: DeliveryMode,
    pub meetup_location: Option<String>,
    pub meetup_time: Option<String>,
    pub maxim_address: Option<String>,
    pub maxim_screenshot_path: Option<String>,
    pub gcash_name: Option<String>,
    pub gcash_number: Option<String>,
    pub gcash_screenshot_path: Option<String>,
    pub special_instructions: Option<String>,
    pub paid_in_full: bool,
    pub is_paid: bool,
    pub status: OrderStatus,
}

impl Order {
    pub fn selection(&self) -> BoxSelection {
        BoxSelection {
            box_of_4: self.box_of_4,
            box_of_6: self.box_of_6,
            box_of_12: self.box_of_12,
        }
    }

    /// Pieces this order holds against the counter. Derived from the stored
    /// breakdown so create-then-delete always round-trips exactly.
    pub fn pieces(&self) -> i32 {
        self.selection().pieces()
    }

    /// Delivered and fully paid; everything else still needs attention.
    pub fn finished(&self) -> bool {
        self.is_paid && self.status == OrderStatus::Delivered
    }
}
