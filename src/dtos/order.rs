use crate::catalog::BoxSelection;
use crate::models::order::{DeliveryMode, Order, OrderStatus, PaymentMode};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Deserialize)]
pub struct CreateOrderRequest {
    #[serde(default)]
    pub full_name: String,
    #[serde(default)]
    pub contact_number: String,
    #[serde(default)]
    pub instagram: String,
    #[serde(default)]
    pub box_of_4: i32,
    #[serde(default)]
    pub box_of_6: i32,
    #[serde(default)]
    pub box_of_12: i32,
    pub payment_mode: Option<PaymentMode>,
    pub delivery_mode: Option<DeliveryMode>,
    /// Latest revision's pay-in-full option: no downpayment split, the
    /// order is created already paid.
    #[serde(default)]
    pub pay_in_full: bool,
    pub meetup_location: Option<String>,
    pub meetup_time: Option<String>,
    pub maxim_address: Option<String>,
    /// Reference returned by the attachment upload endpoint.
    pub maxim_screenshot_path: Option<String>,
    pub gcash_name: Option<String>,
    pub gcash_number: Option<String>,
    pub gcash_screenshot_path: Option<String>,
    pub special_instructions: Option<String>,
}

impl CreateOrderRequest {
    pub fn selection(&self) -> BoxSelection {
        BoxSelection {
            box_of_4: self.box_of_4,
            box_of_6: self.box_of_6,
            box_of_12: self.box_of_12,
        }
    }
}

/// Admin list view query: AND-combined filters plus a sortable key.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct OrderListParams {
    pub search: Option<String>,
    /// "gcash" | "cash" | "paid" | "unpaid"
    pub payment: Option<String>,
    /// "meetup" | "maxim"
    pub delivery: Option<String>,
    /// "Pending" | "Baking" | "Ready" | "Delivered"
    pub status: Option<String>,
    /// "created_at" | "full_name" | "delivery_mode" | "status" | "total_price"
    pub sort: Option<String>,
    /// "asc" | "desc"
    pub dir: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct OrderResponse {
    pub id: i64,
    pub created_at: DateTime<Utc>,
    pub full_name: String,
    pub contact_number: String,
    pub instagram: String,
    pub box_of_4: i32,
    pub box_of_6: i32,
    pub box_of_12: i32,
    pub pieces: i32,
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

impl From<Order> for OrderResponse {
    fn from(order: Order) -> Self {
        let pieces = order.pieces();
        Self {
            id: order.id,
            created_at: order.created_at,
            full_name: order.full_name,
            contact_number: order.contact_number,
            instagram: order.instagram,
            box_of_4: order.box_of_4,
            box_of_6: order.box_of_6,
            box_of_12: order.box_of_12,
            pieces,
            total_price: order.total_price,
            downpayment_price: order.downpayment_price,
            payment_mode: order.payment_mode,
            delivery_mode: order.delivery_mode,
            meetup_location: order.meetup_location,
            meetup_time: order.meetup_time,
            maxim_address: order.maxim_address,
            maxim_screenshot_path: order.maxim_screenshot_path,
            gcash_name: order.gcash_name,
            gcash_number: order.gcash_number,
            gcash_screenshot_path: order.gcash_screenshot_path,
            special_instructions: order.special_instructions,
            paid_in_full: order.paid_in_full,
            is_paid: order.is_paid,
            status: order.status,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct UpdateStatusRequest {
    pub status: OrderStatus,
}

#[derive(Debug, Deserialize)]
pub struct UpdatePaidRequest {
    pub is_paid: bool,
}

#[derive(Debug, Serialize)]
pub struct DeleteOrderResponse {
    pub deleted_id: i64,
    /// Pieces credited back to the counter.
    pub restored_pieces: i32,
}

/// The dashboard stat cards: what to bake and where the money stands.
#[derive(Debug, Default, PartialEq, Eq, Serialize)]
pub struct ProductionSummary {
    pub total_orders: i64,
    pub box_of_4: i32,
    pub box_of_6: i32,
    pub box_of_12: i32,
    pub total_pieces: i32,
    pub gross_revenue: i64,
    /// Money already in hand: paid orders in full, unpaid gcash downpayments.
    pub received: i64,
    /// Remaining balance still to collect.
    pub outstanding: i64,
}
