use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

mod envelope;
pub mod pagination;
pub mod protocol;

pub use envelope::{ApiEnvelope, GENERIC_ERROR_MESSAGE};
pub use pagination::Page;

// =========================================================
// Constants
// =========================================================

/// One-shot sessionStorage handoff: order summary written at checkout and
/// consumed once by the payment-result page.
pub const STORAGE_KEY_PENDING_ORDERS: &str = "pendingOrders";
/// One-shot sessionStorage handoff: path to return to after a login forced
/// by a route guard.
pub const STORAGE_KEY_REDIRECT_AFTER_LOGIN: &str = "redirectAfterLogin";

pub const ROLE_ADMIN: &str = "ADMIN";
pub const ROLE_SELLER: &str = "SELLER";

// =========================================================
// Status enums
// =========================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum OrderStatus {
    Pending,
    Confirmed,
    Shipping,
    Delivered,
    Cancelled,
    Returned,
}

impl OrderStatus {
    pub const ALL: [OrderStatus; 6] = [
        OrderStatus::Pending,
        OrderStatus::Confirmed,
        OrderStatus::Shipping,
        OrderStatus::Delivered,
        OrderStatus::Cancelled,
        OrderStatus::Returned,
    ];

    /// Wire value used in list-filter query strings.
    pub fn as_query(&self) -> &'static str {
        match self {
            OrderStatus::Pending => "PENDING",
            OrderStatus::Confirmed => "CONFIRMED",
            OrderStatus::Shipping => "SHIPPING",
            OrderStatus::Delivered => "DELIVERED",
            OrderStatus::Cancelled => "CANCELLED",
            OrderStatus::Returned => "RETURNED",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            OrderStatus::Pending => "Chờ xác nhận",
            OrderStatus::Confirmed => "Đã xác nhận",
            OrderStatus::Shipping => "Đang giao",
            OrderStatus::Delivered => "Đã giao",
            OrderStatus::Cancelled => "Đã hủy",
            OrderStatus::Returned => "Đã hoàn trả",
        }
    }

    pub fn badge_class(&self) -> &'static str {
        match self {
            OrderStatus::Pending => "badge badge-warning",
            OrderStatus::Confirmed => "badge badge-info",
            OrderStatus::Shipping => "badge badge-primary",
            OrderStatus::Delivered => "badge badge-success",
            OrderStatus::Cancelled => "badge badge-error",
            OrderStatus::Returned => "badge badge-neutral",
        }
    }

    /// Only not-yet-confirmed orders may be cancelled from the client.
    pub fn is_cancellable(&self) -> bool {
        matches!(self, OrderStatus::Pending)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PaymentStatus {
    Unpaid,
    Paid,
    Refunded,
}

impl PaymentStatus {
    pub fn label(&self) -> &'static str {
        match self {
            PaymentStatus::Unpaid => "Chưa thanh toán",
            PaymentStatus::Paid => "Đã thanh toán",
            PaymentStatus::Refunded => "Đã hoàn tiền",
        }
    }

    pub fn badge_class(&self) -> &'static str {
        match self {
            PaymentStatus::Unpaid => "badge badge-outline badge-warning",
            PaymentStatus::Paid => "badge badge-outline badge-success",
            PaymentStatus::Refunded => "badge badge-outline badge-neutral",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SellerStatus {
    Created,
    Pending,
    Verified,
    Rejected,
}

impl SellerStatus {
    pub const ALL: [SellerStatus; 4] = [
        SellerStatus::Created,
        SellerStatus::Pending,
        SellerStatus::Verified,
        SellerStatus::Rejected,
    ];

    pub fn as_query(&self) -> &'static str {
        match self {
            SellerStatus::Created => "CREATED",
            SellerStatus::Pending => "PENDING",
            SellerStatus::Verified => "VERIFIED",
            SellerStatus::Rejected => "REJECTED",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            SellerStatus::Created => "Bản nháp",
            SellerStatus::Pending => "Chờ duyệt",
            SellerStatus::Verified => "Đã xác minh",
            SellerStatus::Rejected => "Bị từ chối",
        }
    }

    pub fn badge_class(&self) -> &'static str {
        match self {
            SellerStatus::Created => "badge badge-ghost",
            SellerStatus::Pending => "badge badge-warning",
            SellerStatus::Verified => "badge badge-success",
            SellerStatus::Rejected => "badge badge-error",
        }
    }

    /// The store profile is only editable before it is submitted for review.
    pub fn is_editable(&self) -> bool {
        matches!(self, SellerStatus::Created)
    }
}

// =========================================================
// Account / profile models
// =========================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    pub id: u64,
    pub full_name: String,
    pub email: String,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub avatar_url: Option<String>,
    #[serde(default)]
    pub roles: Vec<String>,
    #[serde(default)]
    pub verified: bool,
    #[serde(default)]
    pub date_of_birth: Option<NaiveDate>,
    #[serde(default)]
    pub gender: Option<String>,
}

impl UserProfile {
    pub fn is_admin(&self) -> bool {
        self.roles.iter().any(|r| r == ROLE_ADMIN)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Address {
    pub id: u64,
    pub receiver_name: String,
    pub receiver_phone: String,
    pub province: String,
    pub district: String,
    pub ward: String,
    pub detail: String,
    #[serde(default)]
    pub is_default: bool,
}

impl Address {
    /// Single-line rendering used by address cards and order summaries.
    pub fn full_text(&self) -> String {
        format!(
            "{}, {}, {}, {}",
            self.detail, self.ward, self.district, self.province
        )
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginHistoryEntry {
    pub timestamp: DateTime<Utc>,
    pub ip_address: String,
    pub device: String,
    pub success: bool,
}

// =========================================================
// Orders
// =========================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderItem {
    pub product_id: u64,
    pub variant_id: u64,
    pub product_name: String,
    #[serde(default)]
    pub variant_label: Option<String>,
    #[serde(default)]
    pub thumbnail: Option<String>,
    pub unit_price: i64,
    pub quantity: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    pub id: u64,
    pub code: String,
    pub status: OrderStatus,
    pub payment_status: PaymentStatus,
    pub items: Vec<OrderItem>,
    pub subtotal: i64,
    pub shipping_fee: i64,
    pub discount: i64,
    pub total: i64,
    pub created_at: DateTime<Utc>,
}

// =========================================================
// Seller
// =========================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SellerProfile {
    pub id: u64,
    pub store_name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub logo_url: Option<String>,
    pub contact_email: String,
    pub contact_phone: String,
    pub tax_code: String,
    pub status: SellerStatus,
    #[serde(default)]
    pub rejection_reason: Option<String>,
}

// =========================================================
// Cart
// =========================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartItem {
    pub id: u64,
    pub product_id: u64,
    pub variant_id: u64,
    pub product_name: String,
    #[serde(default)]
    pub variant_label: Option<String>,
    #[serde(default)]
    pub thumbnail: Option<String>,
    /// Price snapshot taken when the line was added; the backend reconciles
    /// against live prices at order placement.
    pub unit_price: i64,
    pub quantity: u32,
    pub stock: u32,
    pub store_id: u64,
    pub store_name: String,
}

impl CartItem {
    pub fn line_total(&self) -> i64 {
        self.unit_price * i64::from(self.quantity)
    }
}

// =========================================================
// Catalog
// =========================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductSummary {
    pub id: u64,
    pub name: String,
    #[serde(default)]
    pub thumbnail: Option<String>,
    pub price: i64,
    #[serde(default)]
    pub original_price: Option<i64>,
    #[serde(default)]
    pub sold: u32,
    pub store_name: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductDetail {
    pub id: u64,
    pub name: String,
    #[serde(default)]
    pub images: Vec<String>,
    #[serde(default)]
    pub description: String,
    pub price_min: i64,
    pub price_max: i64,
    #[serde(default)]
    pub sold: u32,
    pub store_id: u64,
    pub store_name: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VariantOption {
    pub id: u64,
    pub label: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OptionGroup {
    pub id: u64,
    pub name: String,
    pub options: Vec<VariantOption>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductSpec {
    pub name: String,
    pub value: String,
}

/// Server-supplied option-combination to variant mapping.
///
/// The matrix is opaque data: keys are option ids sorted by group id and
/// joined with `-` (see the frontend selection module), values are variant
/// ids. The client never builds or repairs it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SelectionConfig {
    pub required_groups: Vec<u64>,
    pub matrix: HashMap<String, u64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Variant {
    pub id: u64,
    pub label: String,
    pub price: i64,
    pub stock: u32,
}

// =========================================================
// Vouchers (client-held mock data, see cart page)
// =========================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum VoucherScope {
    Platform,
    Store(u64),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum VoucherKind {
    /// Fixed reduction in ₫.
    Fixed(i64),
    /// Percentage reduction capped at `max_discount` ₫.
    Percent { percent: u32, max_discount: i64 },
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Voucher {
    pub code: String,
    pub scope: VoucherScope,
    pub kind: VoucherKind,
    pub min_order: i64,
    pub description: String,
}

// =========================================================
// Checkout handoff
// =========================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PendingLine {
    pub product_name: String,
    #[serde(default)]
    pub variant_label: Option<String>,
    pub unit_price: i64,
    pub quantity: u32,
}

/// Snapshot written to the `pendingOrders` sessionStorage key at checkout
/// and consumed exactly once by the payment-result page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PendingCheckout {
    pub lines: Vec<PendingLine>,
    pub subtotal: i64,
    pub discount: i64,
    pub total: i64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn order_status_uses_uppercase_wire_values() {
        let json = serde_json::to_string(&OrderStatus::Shipping).unwrap();
        assert_eq!(json, "\"SHIPPING\"");
        let back: OrderStatus = serde_json::from_str("\"DELIVERED\"").unwrap();
        assert_eq!(back, OrderStatus::Delivered);
    }

    #[test]
    fn only_pending_orders_are_cancellable() {
        for status in OrderStatus::ALL {
            assert_eq!(status.is_cancellable(), status == OrderStatus::Pending);
        }
    }

    #[test]
    fn seller_profile_editable_only_while_created() {
        assert!(SellerStatus::Created.is_editable());
        assert!(!SellerStatus::Pending.is_editable());
        assert!(!SellerStatus::Verified.is_editable());
        assert!(!SellerStatus::Rejected.is_editable());
    }

    #[test]
    fn admin_role_is_detected_from_roles_list() {
        let user = UserProfile {
            id: 1,
            full_name: "Nguyễn Văn A".to_string(),
            email: "a@example.com".to_string(),
            phone: None,
            avatar_url: None,
            roles: vec![ROLE_SELLER.to_string(), ROLE_ADMIN.to_string()],
            verified: true,
            date_of_birth: None,
            gender: None,
        };
        assert!(user.is_admin());
    }

    #[test]
    fn cart_item_line_total_multiplies_snapshot_price() {
        let item = CartItem {
            id: 1,
            product_id: 2,
            variant_id: 3,
            product_name: "Áo thun".to_string(),
            variant_label: Some("Đen / L".to_string()),
            thumbnail: None,
            unit_price: 150_000,
            quantity: 3,
            stock: 10,
            store_id: 7,
            store_name: "HUST Store".to_string(),
        };
        assert_eq!(item.line_total(), 450_000);
    }

    #[test]
    fn address_full_text_joins_components() {
        let addr = Address {
            id: 1,
            receiver_name: "Trần B".to_string(),
            receiver_phone: "0912345678".to_string(),
            province: "Hà Nội".to_string(),
            district: "Hai Bà Trưng".to_string(),
            ward: "Bách Khoa".to_string(),
            detail: "Số 1 Đại Cồ Việt".to_string(),
            is_default: true,
        };
        assert_eq!(
            addr.full_text(),
            "Số 1 Đại Cồ Việt, Bách Khoa, Hai Bà Trưng, Hà Nội"
        );
    }
}
