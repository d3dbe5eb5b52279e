use axum::http::StatusCode;
use axum::{
    extract::{Path, Query, State},
    Extension, Json,
};
use tracing::info;

use crate::catalog::{self, BoxKind};
use crate::dtos::order::{
    CreateOrderRequest, DeleteOrderResponse, OrderListParams, OrderResponse, ProductionSummary,
    UpdatePaidRequest, UpdateStatusRequest,
};
use crate::error::{AppError, FieldError};
use crate::middleware::auth::AuthContext;
use crate::models::order::{DeliveryMode, Order, OrderStatus, PaymentMode};
use crate::state::AppState;
use crate::storage::AttachmentStore;

/// Courier pick-up bases offered on the form.
const MAXIM_LOCATIONS: &[&str] = &["alijis", "lasalle"];

// ==================== Order Intake ====================

/// The one multi-step, multi-resource operation in the system: validate the
/// submission, price it, and commit order row + stock decrement as a single
/// transaction. The decrement is conditional, so two simultaneous customers
/// can never jointly overdraw the counter.
pub async fn create_order(
    State(AppState {
        db_pool,
        config,
        storage,
    }): State<AppState>,
    Json(req): Json<CreateOrderRequest>,
) -> Result<(StatusCode, Json<OrderResponse>), AppError> {
    let errors = validate_submission(&req, &storage);
    if !errors.is_empty() {
        return Err(AppError::fields(errors));
    }
    let (Some(payment_mode), Some(delivery_mode)) = (req.payment_mode, req.delivery_mode) else {
        return Err(AppError::internal("Modes missing after validation"));
    };

    let selection = req.selection();
    let pieces = selection.pieces();
    let total_price = selection.total_price();
    let downpayment_price = if req.pay_in_full {
        total_price
    } else {
        catalog::downpayment(total_price, config.downpayment_rate)
    };

    let mut tx = db_pool.begin().await?;

    let order = sqlx::query_as::<_, Order>(
        r#"INSERT INTO orders
           (full_name, contact_number, instagram, box_of_4, box_of_6, box_of_12,
            total_price, downpayment_price, payment_mode, delivery_mode,
            meetup_location, meetup_time, maxim_address, maxim_screenshot_path,
            gcash_name, gcash_number, gcash_screenshot_path, special_instructions,
            paid_in_full, is_paid, status)
           VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, $14,
                   $15, $16, $17, $18, $19, $20, $21)
           RETURNING *"#,
    )
    .bind(req.full_name.trim())
    .bind(normalize_digits(&req.contact_number))
    .bind(req.instagram.trim())
    .bind(selection.box_of_4)
    .bind(selection.box_of_6)
    .bind(selection.box_of_12)
    .bind(total_price)
    .bind(downpayment_price)
    .bind(payment_mode)
    .bind(delivery_mode)
    .bind(&req.meetup_location)
    .bind(&req.meetup_time)
    .bind(&req.maxim_address)
    .bind(&req.maxim_screenshot_path)
    .bind(&req.gcash_name)
    .bind(req.gcash_number.as_deref().map(normalize_digits))
    .bind(&req.gcash_screenshot_path)
    .bind(&req.special_instructions)
    .bind(req.pay_in_full)
    .bind(req.pay_in_full)
    .bind(OrderStatus::Pending)
    .fetch_one(&mut *tx)
    .await?;

    // Check-and-decrement in one statement. Zero rows affected means another
    // submission drained the counter first; the insert above rolls back with
    // the transaction and nothing becomes visible.
    let decremented = sqlx::query(
        "UPDATE inventory SET stock_count = stock_count - $1
         WHERE item_name = $2 AND stock_count >= $1",
    )
    .bind(pieces)
    .bind(&config.stock_item)
    .execute(&mut *tx)
    .await?;

    if decremented.rows_affected() == 0 {
        tx.rollback().await?;
        return Err(AppError::StockExhausted);
    }

    tx.commit().await?;

    info!(order_id = order.id, pieces, total_price, "Order accepted");

    Ok((StatusCode::CREATED, Json(OrderResponse::from(order))))
}

// ==================== Admin: List / Detail ====================

pub async fn list_orders(
    State(AppState { db_pool, .. }): State<AppState>,
    Query(params): Query<OrderListParams>,
) -> Result<Json<Vec<OrderResponse>>, AppError> {
    let orders = sqlx::query_as::<_, Order>("SELECT * FROM orders ORDER BY id DESC")
        .fetch_all(&db_pool)
        .await?;

    let mut visible: Vec<Order> = orders
        .into_iter()
        .filter(|o| matches_filters(o, &params))
        .collect();
    sort_orders(&mut visible, &params);

    Ok(Json(visible.into_iter().map(OrderResponse::from).collect()))
}

pub async fn get_order(
    State(AppState { db_pool, .. }): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<OrderResponse>, AppError> {
    let order = sqlx::query_as::<_, Order>("SELECT * FROM orders WHERE id = $1")
        .bind(id)
        .fetch_optional(&db_pool)
        .await?
        .ok_or_else(|| AppError::not_found("Order not found"))?;

    Ok(Json(OrderResponse::from(order)))
}

pub async fn production_summary(
    State(AppState { db_pool, .. }): State<AppState>,
) -> Result<Json<ProductionSummary>, AppError> {
    let orders = sqlx::query_as::<_, Order>("SELECT * FROM orders")
        .fetch_all(&db_pool)
        .await?;

    Ok(Json(summarize(&orders)))
}

// ==================== Admin: Status / Paid ====================

pub async fn update_status(
    State(AppState { db_pool, .. }): State<AppState>,
    Extension(auth): Extension<AuthContext>,
    Path(id): Path<i64>,
    Json(req): Json<UpdateStatusRequest>,
) -> Result<Json<OrderResponse>, AppError> {
    let order = sqlx::query_as::<_, Order>("UPDATE orders SET status = $2 WHERE id = $1 RETURNING *")
        .bind(id)
        .bind(req.status)
        .fetch_optional(&db_pool)
        .await?
        .ok_or_else(|| AppError::not_found("Order not found"))?;

    info!(order_id = id, status = order.status.as_str(), operator = %auth.email, "Order status updated");

    Ok(Json(OrderResponse::from(order)))
}

pub async fn update_paid(
    State(AppState { db_pool, .. }): State<AppState>,
    Extension(auth): Extension<AuthContext>,
    Path(id): Path<i64>,
    Json(req): Json<UpdatePaidRequest>,
) -> Result<Json<OrderResponse>, AppError> {
    let order =
        sqlx::query_as::<_, Order>("UPDATE orders SET is_paid = $2 WHERE id = $1 RETURNING *")
            .bind(id)
            .bind(req.is_paid)
            .fetch_optional(&db_pool)
            .await?
            .ok_or_else(|| AppError::not_found("Order not found"))?;

    info!(order_id = id, is_paid = req.is_paid, operator = %auth.email, "Order payment flag updated");

    Ok(Json(OrderResponse::from(order)))
}

// ==================== Admin: Delete with Stock Reversal ====================

/// Deleting an order credits its pieces back to the counter. Restore and
/// delete commit together; a delete that affects zero rows (storage-side
/// policy refusing it) rolls the restore back and fails loudly instead of
/// reporting success.
pub async fn delete_order(
    State(AppState {
        db_pool, config, ..
    }): State<AppState>,
    Extension(auth): Extension<AuthContext>,
    Path(id): Path<i64>,
) -> Result<Json<DeleteOrderResponse>, AppError> {
    let mut tx = db_pool.begin().await?;

    let order = sqlx::query_as::<_, Order>("SELECT * FROM orders WHERE id = $1")
        .bind(id)
        .fetch_optional(&mut *tx)
        .await?
        .ok_or_else(|| AppError::not_found("Order not found"))?;

    // Same pieces function as intake, re-derived from the stored breakdown.
    let pieces = order.pieces();

    let restored = sqlx::query(
        "UPDATE inventory SET stock_count = stock_count + $1 WHERE item_name = $2",
    )
    .bind(pieces)
    .bind(&config.stock_item)
    .execute(&mut *tx)
    .await?;
    if restored.rows_affected() == 0 {
        tx.rollback().await?;
        return Err(AppError::internal("Inventory counter row is missing"));
    }

    let deleted = sqlx::query("DELETE FROM orders WHERE id = $1")
        .bind(id)
        .execute(&mut *tx)
        .await?;
    if deleted.rows_affected() == 0 {
        tx.rollback().await?;
        return Err(AppError::DeletionForbidden);
    }

    tx.commit().await?;

    info!(order_id = id, restored_pieces = pieces, operator = %auth.email, "Order deleted, stock restored");

    Ok(Json(DeleteOrderResponse {
        deleted_id: id,
        restored_pieces: pieces,
    }))
}

// ==================== Validation ====================

pub(crate) fn normalize_digits(value: &str) -> String {
    value.chars().filter(|c| c.is_ascii_digit()).collect()
}

fn blank(value: &Option<String>) -> bool {
    value.as_deref().map(str::trim).unwrap_or("").is_empty()
}

fn push(errors: &mut Vec<FieldError>, field: &str, message: impl Into<String>) {
    errors.push(FieldError {
        field: field.to_string(),
        message: message.into(),
    });
}

/// Batch validation: every violated field is reported, not just the first.
/// Attachment references declared required for the chosen modes must already
/// resolve in the store; an order is never created around a dangling one.
pub(crate) fn validate_submission(
    req: &CreateOrderRequest,
    storage: &AttachmentStore,
) -> Vec<FieldError> {
    let mut errors: Vec<FieldError> = Vec::new();

    if req.full_name.trim().is_empty() {
        push(&mut errors, "full_name", "Full name is required.");
    }

    let digits = normalize_digits(&req.contact_number);
    if digits.is_empty() {
        push(&mut errors, "contact_number", "Contact number is required.");
    } else if digits.len() < 10 {
        push(&mut errors, "contact_number", "Enter a valid contact number.");
    }

    if req.instagram.trim().is_empty() {
        push(&mut errors, "instagram", "Instagram handle is required.");
    }

    let selection = req.selection();
    if selection.is_empty() {
        push(&mut errors, "quantity", "Select at least one box.");
    }
    for kind in BoxKind::ALL {
        let qty = selection.qty(kind);
        if qty < 0 {
            push(&mut errors, kind.field(), "Quantity cannot be negative.");
        } else if qty > kind.max_per_order() {
            push(
                &mut errors,
                kind.field(),
                format!("Limit is {} per order.", kind.max_per_order()),
            );
        }
    }

    match req.delivery_mode {
        None => push(&mut errors, "delivery_mode", "Select a delivery method."),
        Some(DeliveryMode::Meetup) => {
            if blank(&req.meetup_time) {
                push(&mut errors, "meetup_time", "Select a pick-up time.");
            }
        }
        Some(DeliveryMode::Maxim) => {
            match req.meetup_location.as_deref().map(str::trim) {
                None | Some("") => {
                    push(&mut errors, "meetup_location", "Select a pick-up location.")
                }
                Some(location) if !MAXIM_LOCATIONS.contains(&location) => {
                    push(&mut errors, "meetup_location", "Unknown pick-up location.")
                }
                Some(_) => {}
            }
            if blank(&req.meetup_time) {
                push(&mut errors, "meetup_time", "Select a delivery time.");
            }
            if blank(&req.maxim_address) {
                push(&mut errors, "maxim_address", "Delivery address is required.");
            }
            match req.maxim_screenshot_path.as_deref() {
                None | Some("") => push(
                    &mut errors,
                    "maxim_screenshot",
                    "Upload a pin point screenshot.",
                ),
                Some(path) if !storage.exists(path) => push(
                    &mut errors,
                    "maxim_screenshot",
                    "Pin point screenshot was not uploaded.",
                ),
                Some(_) => {}
            }
        }
    }

    match req.payment_mode {
        None => push(&mut errors, "payment_mode", "Select a payment method."),
        Some(_) => {
            // The downpayment always moves through GCash, so these fields are
            // required for cash orders too.
            if blank(&req.gcash_name) {
                push(&mut errors, "gcash_name", "GCash name is required.");
            }
            if req
                .gcash_number
                .as_deref()
                .map(normalize_digits)
                .unwrap_or_default()
                .is_empty()
            {
                push(&mut errors, "gcash_number", "GCash number is required.");
            }
            match req.gcash_screenshot_path.as_deref() {
                None | Some("") => push(
                    &mut errors,
                    "gcash_screenshot",
                    "Upload your receipt screenshot.",
                ),
                Some(path) if !storage.exists(path) => push(
                    &mut errors,
                    "gcash_screenshot",
                    "Receipt screenshot was not uploaded.",
                ),
                Some(_) => {}
            }
        }
    }

    errors
}

// ==================== Filtering / Sorting ====================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum SortKey {
    CreatedAt,
    FullName,
    DeliveryMode,
    Status,
    TotalPrice,
}

fn sort_key(params: &OrderListParams) -> SortKey {
    match params.sort.as_deref() {
        Some("full_name") => SortKey::FullName,
        Some("delivery_mode") => SortKey::DeliveryMode,
        Some("status") => SortKey::Status,
        Some("total_price") => SortKey::TotalPrice,
        _ => SortKey::CreatedAt,
    }
}

fn descending(params: &OrderListParams) -> bool {
    !matches!(params.dir.as_deref(), Some("asc"))
}

pub(crate) fn matches_filters(order: &Order, params: &OrderListParams) -> bool {
    if let Some(query) = params.search.as_deref() {
        let query = query.trim().to_lowercase();
        if !query.is_empty()
            && !order.full_name.to_lowercase().contains(&query)
            && !order.instagram.to_lowercase().contains(&query)
        {
            return false;
        }
    }

    match params.payment.as_deref() {
        None | Some("all") | Some("") => {}
        Some("paid") => {
            if !order.is_paid {
                return false;
            }
        }
        Some("unpaid") => {
            if order.is_paid {
                return false;
            }
        }
        Some(mode) => {
            if order.payment_mode.as_str() != mode {
                return false;
            }
        }
    }

    match params.delivery.as_deref() {
        None | Some("all") | Some("") => {}
        Some(mode) => {
            if order.delivery_mode.as_str() != mode {
                return false;
            }
        }
    }

    match params.status.as_deref() {
        None | Some("all") | Some("") => {}
        Some(status) => {
            if order.status.as_str() != status {
                return false;
            }
        }
    }

    true
}

/// Stable sort by the chosen key and direction, with unfinished orders
/// (not yet delivered, or not yet paid) always ahead of finished ones.
pub(crate) fn sort_orders(orders: &mut [Order], params: &OrderListParams) {
    let key = sort_key(params);
    let desc = descending(params);
    orders.sort_by(|a, b| {
        a.finished().cmp(&b.finished()).then_with(|| {
            let ord = match key {
                SortKey::CreatedAt => a.created_at.cmp(&b.created_at),
                SortKey::FullName => a.full_name.to_lowercase().cmp(&b.full_name.to_lowercase()),
                SortKey::DeliveryMode => a.delivery_mode.as_str().cmp(b.delivery_mode.as_str()),
                SortKey::Status => a.status.cmp(&b.status),
                SortKey::TotalPrice => a.total_price.cmp(&b.total_price),
            };
            if desc {
                ord.reverse()
            } else {
                ord
            }
        })
    });
}

// ==================== Production Summary ====================

pub(crate) fn summarize(orders: &[Order]) -> ProductionSummary {
    let mut summary = ProductionSummary {
        total_orders: orders.len() as i64,
        ..ProductionSummary::default()
    };

    for order in orders {
        summary.box_of_4 += order.box_of_4;
        summary.box_of_6 += order.box_of_6;
        summary.box_of_12 += order.box_of_12;
        summary.total_pieces += order.pieces();
        summary.gross_revenue += order.total_price;

        if order.is_paid {
            summary.received += order.total_price;
        } else {
            match order.payment_mode {
                PaymentMode::Gcash => {
                    summary.received += order.downpayment_price;
                    summary.outstanding += order.total_price - order.downpayment_price;
                }
                PaymentMode::Cash => summary.outstanding += order.total_price,
            }
        }
    }

    summary
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::Purpose;
    use chrono::{TimeZone, Utc};

    fn test_store() -> (tempfile::TempDir, AttachmentStore) {
        let dir = tempfile::tempdir().unwrap();
        let store = AttachmentStore::new(dir.path()).unwrap();
        (dir, store)
    }

    fn valid_request(store: &AttachmentStore) -> CreateOrderRequest {
        let receipt = store
            .store(Purpose::Gcash, "receipt.png", b"receipt bytes")
            .unwrap();
        CreateOrderRequest {
            full_name: "Ana Reyes".to_string(),
            contact_number: "0917 123 4567".to_string(),
            instagram: "@ana.bakes".to_string(),
            box_of_4: 1,
            box_of_6: 0,
            box_of_12: 0,
            payment_mode: Some(PaymentMode::Gcash),
            delivery_mode: Some(DeliveryMode::Meetup),
            pay_in_full: false,
            meetup_location: None,
            meetup_time: Some("10am - 12pm".to_string()),
            maxim_address: None,
            maxim_screenshot_path: None,
            gcash_name: Some("Ana R.".to_string()),
            gcash_number: Some("0917 123 4567".to_string()),
            gcash_screenshot_path: Some(receipt.path),
            special_instructions: None,
        }
    }

    fn violated_fields(errors: &[FieldError]) -> Vec<String> {
        errors.iter().map(|e| e.field.clone()).collect()
    }

    #[test]
    fn valid_submission_passes() {
        let (_dir, store) = test_store();
        let req = valid_request(&store);
        assert!(validate_submission(&req, &store).is_empty());
    }

    #[test]
    fn empty_submission_reports_every_violation() {
        let (_dir, store) = test_store();
        let req = CreateOrderRequest {
            full_name: String::new(),
            contact_number: String::new(),
            instagram: String::new(),
            box_of_4: 0,
            box_of_6: 0,
            box_of_12: 0,
            payment_mode: None,
            delivery_mode: None,
            pay_in_full: false,
            meetup_location: None,
            meetup_time: None,
            maxim_address: None,
            maxim_screenshot_path: None,
            gcash_name: None,
            gcash_number: None,
            gcash_screenshot_path: None,
            special_instructions: None,
        };
        let fields = violated_fields(&validate_submission(&req, &store));
        for expected in [
            "full_name",
            "contact_number",
            "instagram",
            "quantity",
            "payment_mode",
            "delivery_mode",
        ] {
            assert!(fields.contains(&expected.to_string()), "missing {expected}");
        }
    }

    #[test]
    fn box_limits_are_enforced_per_type() {
        let (_dir, store) = test_store();
        let mut req = valid_request(&store);
        req.box_of_4 = 3;
        req.box_of_12 = 2;
        let fields = violated_fields(&validate_submission(&req, &store));
        assert!(fields.contains(&"box_of_4".to_string()));
        assert!(fields.contains(&"box_of_12".to_string()));
        assert!(!fields.contains(&"box_of_6".to_string()));
    }

    #[test]
    fn negative_quantities_are_rejected() {
        let (_dir, store) = test_store();
        let mut req = valid_request(&store);
        req.box_of_6 = -1;
        let fields = violated_fields(&validate_submission(&req, &store));
        assert!(fields.contains(&"box_of_6".to_string()));
    }

    #[test]
    fn maxim_requires_courier_fields() {
        let (_dir, store) = test_store();
        let mut req = valid_request(&store);
        req.delivery_mode = Some(DeliveryMode::Maxim);
        req.meetup_time = None;
        let fields = violated_fields(&validate_submission(&req, &store));
        for expected in [
            "meetup_location",
            "meetup_time",
            "maxim_address",
            "maxim_screenshot",
        ] {
            assert!(fields.contains(&expected.to_string()), "missing {expected}");
        }
    }

    #[test]
    fn maxim_rejects_unknown_pickup_location() {
        let (_dir, store) = test_store();
        let pin = store
            .store(Purpose::Maxim, "pin.png", b"pin bytes")
            .unwrap();
        let mut req = valid_request(&store);
        req.delivery_mode = Some(DeliveryMode::Maxim);
        req.meetup_location = Some("manila".to_string());
        req.maxim_address = Some("123 Example St".to_string());
        req.maxim_screenshot_path = Some(pin.path);
        let fields = violated_fields(&validate_submission(&req, &store));
        assert!(fields.contains(&"meetup_location".to_string()));
        assert!(!fields.contains(&"maxim_address".to_string()));
    }

    #[test]
    fn required_attachment_must_exist_in_store() {
        let (_dir, store) = test_store();
        let mut req = valid_request(&store);
        req.gcash_screenshot_path = Some("receipts/gcash/999_missing.png".to_string());
        let fields = violated_fields(&validate_submission(&req, &store));
        assert!(fields.contains(&"gcash_screenshot".to_string()));
    }

    #[test]
    fn normalize_digits_strips_formatting() {
        assert_eq!(normalize_digits("0917 123 4567"), "09171234567");
        assert_eq!(normalize_digits("+63 (917) 123-4567"), "639171234567");
        assert_eq!(normalize_digits("none"), "");
    }

    // ---- filter / sort ----

    #[allow(clippy::too_many_arguments)]
    fn make_order(
        id: i64,
        name: &str,
        instagram: &str,
        payment: PaymentMode,
        delivery: DeliveryMode,
        status: OrderStatus,
        is_paid: bool,
        total_price: i64,
    ) -> Order {
        Order {
            id,
            created_at: Utc.timestamp_opt(1_700_000_000 + id * 60, 0).unwrap(),
            full_name: name.to_string(),
            contact_number: "09171234567".to_string(),
            instagram: instagram.to_string(),
            box_of_4: 1,
            box_of_6: 0,
            box_of_12: 0,
            total_price,
            downpayment_price: total_price / 2,
            payment_mode: payment,
            delivery_mode: delivery,
            meetup_location: None,
            meetup_time: None,
            maxim_address: None,
            maxim_screenshot_path: None,
            gcash_name: None,
            gcash_number: None,
            gcash_screenshot_path: None,
            special_instructions: None,
            paid_in_full: false,
            is_paid,
            status,
        }
    }

    #[test]
    fn filters_combine_with_and_semantics() {
        let orders = vec![
            make_order(
                1,
                "Ana Reyes",
                "@ana.bakes",
                PaymentMode::Gcash,
                DeliveryMode::Meetup,
                OrderStatus::Pending,
                false,
                285,
            ),
            make_order(
                2,
                "Anastasia Cruz",
                "@staycee",
                PaymentMode::Cash,
                DeliveryMode::Meetup,
                OrderStatus::Pending,
                false,
                425,
            ),
            make_order(
                3,
                "Bea Santos",
                "@bea",
                PaymentMode::Gcash,
                DeliveryMode::Maxim,
                OrderStatus::Pending,
                false,
                845,
            ),
            make_order(
                4,
                "Ana Lim",
                "@analim",
                PaymentMode::Gcash,
                DeliveryMode::Meetup,
                OrderStatus::Delivered,
                true,
                285,
            ),
        ];
        let params = OrderListParams {
            search: Some("ana".to_string()),
            payment: Some("gcash".to_string()),
            status: Some("Pending".to_string()),
            ..OrderListParams::default()
        };
        let hits: Vec<i64> = orders
            .iter()
            .filter(|o| matches_filters(o, &params))
            .map(|o| o.id)
            .collect();
        assert_eq!(hits, vec![1]);
    }

    #[test]
    fn paid_and_unpaid_filters() {
        let paid = make_order(
            1,
            "Ana",
            "@a",
            PaymentMode::Cash,
            DeliveryMode::Meetup,
            OrderStatus::Ready,
            true,
            285,
        );
        let unpaid = make_order(
            2,
            "Bea",
            "@b",
            PaymentMode::Gcash,
            DeliveryMode::Meetup,
            OrderStatus::Ready,
            false,
            285,
        );
        let params = OrderListParams {
            payment: Some("paid".to_string()),
            ..OrderListParams::default()
        };
        assert!(matches_filters(&paid, &params));
        assert!(!matches_filters(&unpaid, &params));

        let params = OrderListParams {
            payment: Some("unpaid".to_string()),
            ..OrderListParams::default()
        };
        assert!(!matches_filters(&paid, &params));
        assert!(matches_filters(&unpaid, &params));
    }

    #[test]
    fn unfinished_orders_sort_before_finished_regardless_of_key() {
        let mut orders = vec![
            make_order(
                1,
                "Ana",
                "@a",
                PaymentMode::Gcash,
                DeliveryMode::Meetup,
                OrderStatus::Delivered,
                true,
                100,
            ),
            make_order(
                2,
                "Bea",
                "@b",
                PaymentMode::Gcash,
                DeliveryMode::Meetup,
                OrderStatus::Pending,
                false,
                900,
            ),
            make_order(
                3,
                "Cara",
                "@c",
                PaymentMode::Gcash,
                DeliveryMode::Meetup,
                OrderStatus::Delivered,
                // Delivered but unpaid still counts as unfinished.
                false,
                500,
            ),
        ];
        let params = OrderListParams {
            sort: Some("total_price".to_string()),
            dir: Some("asc".to_string()),
            ..OrderListParams::default()
        };
        sort_orders(&mut orders, &params);
        let ids: Vec<i64> = orders.iter().map(|o| o.id).collect();
        // Unfinished (3, 2) by ascending price, then the finished one.
        assert_eq!(ids, vec![3, 2, 1]);
    }

    #[test]
    fn sort_direction_reverses_key_order() {
        let mut orders = vec![
            make_order(
                1,
                "Ana",
                "@a",
                PaymentMode::Gcash,
                DeliveryMode::Meetup,
                OrderStatus::Pending,
                false,
                100,
            ),
            make_order(
                2,
                "Bea",
                "@b",
                PaymentMode::Gcash,
                DeliveryMode::Meetup,
                OrderStatus::Pending,
                false,
                900,
            ),
        ];
        let params = OrderListParams {
            sort: Some("total_price".to_string()),
            dir: Some("desc".to_string()),
            ..OrderListParams::default()
        };
        sort_orders(&mut orders, &params);
        let ids: Vec<i64> = orders.iter().map(|o| o.id).collect();
        assert_eq!(ids, vec![2, 1]);
    }

    #[test]
    fn default_sort_is_newest_first() {
        let mut orders = vec![
            make_order(
                1,
                "Ana",
                "@a",
                PaymentMode::Gcash,
                DeliveryMode::Meetup,
                OrderStatus::Pending,
                false,
                100,
            ),
            make_order(
                2,
                "Bea",
                "@b",
                PaymentMode::Gcash,
                DeliveryMode::Meetup,
                OrderStatus::Pending,
                false,
                900,
            ),
        ];
        sort_orders(&mut orders, &OrderListParams::default());
        let ids: Vec<i64> = orders.iter().map(|o| o.id).collect();
        assert_eq!(ids, vec![2, 1]);
    }

    // ---- summary ----

    #[test]
    fn summary_tallies_boxes_pieces_and_money() {
        let mut gcash_unpaid = make_order(
            1,
            "Ana",
            "@a",
            PaymentMode::Gcash,
            DeliveryMode::Meetup,
            OrderStatus::Pending,
            false,
            285,
        );
        gcash_unpaid.downpayment_price = 143;
        let mut cash_unpaid = make_order(
            2,
            "Bea",
            "@b",
            PaymentMode::Cash,
            DeliveryMode::Meetup,
            OrderStatus::Pending,
            false,
            425,
        );
        cash_unpaid.box_of_4 = 0;
        cash_unpaid.box_of_6 = 1;
        let paid = make_order(
            3,
            "Cara",
            "@c",
            PaymentMode::Gcash,
            DeliveryMode::Maxim,
            OrderStatus::Delivered,
            true,
            845,
        );

        let summary = summarize(&[gcash_unpaid, cash_unpaid, paid]);
        assert_eq!(summary.total_orders, 3);
        assert_eq!(summary.box_of_4, 2);
        assert_eq!(summary.box_of_6, 1);
        assert_eq!(summary.total_pieces, 2 * 4 + 6);
        assert_eq!(summary.gross_revenue, 285 + 425 + 845);
        // paid in full + gcash downpayment
        assert_eq!(summary.received, 845 + 143);
        // gcash balance + full cash price
        assert_eq!(summary.outstanding, (285 - 143) + 425);
    }
}
