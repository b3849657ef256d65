//! Typed consumption contract with the backend REST API.
//!
//! Body-carrying endpoints are described by [`ApiRequest`] implementations
//! and driven through one generic code path in the frontend API client.
//! List endpoints expose their filters as query-pair builders instead, since
//! their parameters travel in the URL.

use crate::{Address, CartItem, OrderStatus, SellerProfile, SellerStatus, UserProfile};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize, de::DeserializeOwned};

/// Only the verbs the generic body-carrying path needs. Reads travel
/// through query-pair builders and deletes through id-addressed client
/// methods, so neither appears here.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum HttpMethod {
    Post,
    Put,
}

/// Request-response relationship and routing metadata for one endpoint.
pub trait ApiRequest: Serialize {
    /// The payload found in the envelope's `result` field on success.
    type Response: DeserializeOwned;
    const PATH: &'static str;
    const METHOD: HttpMethod;
}

// =========================================================
// Auth
// =========================================================

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginResponse {
    pub token: String,
    pub user: UserProfile,
}

impl ApiRequest for LoginRequest {
    type Response = LoginResponse;
    const PATH: &'static str = "/api/auth/login";
    const METHOD: HttpMethod = HttpMethod::Post;
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterRequest {
    pub full_name: String,
    pub email: String,
    pub phone: String,
    pub password: String,
}

impl ApiRequest for RegisterRequest {
    type Response = UserProfile;
    const PATH: &'static str = "/api/auth/register";
    const METHOD: HttpMethod = HttpMethod::Post;
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChangePasswordRequest {
    pub old_password: String,
    pub new_password: String,
}

// =========================================================
// Profile
// =========================================================

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateProfileRequest {
    pub full_name: String,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub avatar_url: Option<String>,
    #[serde(default)]
    pub date_of_birth: Option<NaiveDate>,
    #[serde(default)]
    pub gender: Option<String>,
}

impl ApiRequest for UpdateProfileRequest {
    type Response = UserProfile;
    const PATH: &'static str = "/api/users/me";
    const METHOD: HttpMethod = HttpMethod::Put;
}

/// Payload shared by address create and update; update travels to
/// `/api/addresses/{id}` and is issued by a concrete client method.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AddressPayload {
    pub receiver_name: String,
    pub receiver_phone: String,
    pub province: String,
    pub district: String,
    pub ward: String,
    pub detail: String,
    #[serde(default)]
    pub is_default: bool,
}

impl ApiRequest for AddressPayload {
    type Response = Address;
    const PATH: &'static str = "/api/addresses";
    const METHOD: HttpMethod = HttpMethod::Post;
}

// =========================================================
// Seller
// =========================================================

/// Payload shared by seller-profile create and update.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SellerPayload {
    pub store_name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub logo_url: Option<String>,
    pub contact_email: String,
    pub contact_phone: String,
    pub tax_code: String,
}

impl ApiRequest for SellerPayload {
    type Response = SellerProfile;
    const PATH: &'static str = "/api/sellers";
    const METHOD: HttpMethod = HttpMethod::Post;
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RejectSellerRequest {
    pub reason: String,
}

// =========================================================
// Cart
// =========================================================

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AddCartItemRequest {
    pub variant_id: u64,
    pub quantity: u32,
}

impl ApiRequest for AddCartItemRequest {
    type Response = CartItem;
    const PATH: &'static str = "/api/cart/items";
    const METHOD: HttpMethod = HttpMethod::Post;
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateCartQuantityRequest {
    pub quantity: u32,
}

// =========================================================
// List filters (URL query parameters)
// =========================================================

#[derive(Debug, Clone, Default, PartialEq)]
pub struct OrderListQuery {
    pub page: u32,
    pub size: u32,
    pub status: Option<OrderStatus>,
    pub from_date: Option<NaiveDate>,
    pub to_date: Option<NaiveDate>,
    pub min_amount: Option<i64>,
    pub max_amount: Option<i64>,
}

impl OrderListQuery {
    pub fn query_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = vec![
            ("page", self.page.to_string()),
            ("size", self.size.to_string()),
        ];
        if let Some(status) = self.status {
            pairs.push(("status", status.as_query().to_string()));
        }
        if let Some(from) = self.from_date {
            pairs.push(("fromDate", from.format("%Y-%m-%d").to_string()));
        }
        if let Some(to) = self.to_date {
            pairs.push(("toDate", to.format("%Y-%m-%d").to_string()));
        }
        if let Some(min) = self.min_amount {
            pairs.push(("minAmount", min.to_string()));
        }
        if let Some(max) = self.max_amount {
            pairs.push(("maxAmount", max.to_string()));
        }
        pairs
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProductListQuery {
    pub page: u32,
    pub size: u32,
    pub keyword: Option<String>,
    pub category: Option<String>,
}

impl ProductListQuery {
    pub fn query_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = vec![
            ("page", self.page.to_string()),
            ("size", self.size.to_string()),
        ];
        if let Some(keyword) = &self.keyword {
            if !keyword.trim().is_empty() {
                pairs.push(("keyword", keyword.trim().to_string()));
            }
        }
        if let Some(category) = &self.category {
            pairs.push(("category", category.clone()));
        }
        pairs
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct SellerListQuery {
    pub page: u32,
    pub size: u32,
    pub status: Option<SellerStatus>,
}

impl SellerListQuery {
    pub fn query_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = vec![
            ("page", self.page.to_string()),
            ("size", self.size.to_string()),
        ];
        if let Some(status) = self.status {
            pairs.push(("status", status.as_query().to_string()));
        }
        pairs
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn body_endpoints_route_through_post_or_put() {
        assert_eq!(LoginRequest::METHOD, HttpMethod::Post);
        assert_eq!(LoginRequest::PATH, "/api/auth/login");
        assert_eq!(RegisterRequest::METHOD, HttpMethod::Post);
        assert_eq!(AddressPayload::METHOD, HttpMethod::Post);
        assert_eq!(SellerPayload::METHOD, HttpMethod::Post);
        assert_eq!(AddCartItemRequest::METHOD, HttpMethod::Post);
        assert_eq!(UpdateProfileRequest::METHOD, HttpMethod::Put);
        assert_eq!(UpdateProfileRequest::PATH, "/api/users/me");
    }

    #[test]
    fn order_query_includes_only_set_filters() {
        let query = OrderListQuery {
            page: 2,
            size: 10,
            status: Some(OrderStatus::Delivered),
            from_date: NaiveDate::from_ymd_opt(2025, 1, 15),
            to_date: None,
            min_amount: Some(100_000),
            max_amount: None,
        };
        let pairs = query.query_pairs();
        assert_eq!(
            pairs,
            vec![
                ("page", "2".to_string()),
                ("size", "10".to_string()),
                ("status", "DELIVERED".to_string()),
                ("fromDate", "2025-01-15".to_string()),
                ("minAmount", "100000".to_string()),
            ]
        );
    }

    #[test]
    fn blank_keyword_is_dropped_from_product_query() {
        let query = ProductListQuery {
            page: 0,
            size: 20,
            keyword: Some("   ".to_string()),
            category: None,
        };
        assert_eq!(
            query.query_pairs(),
            vec![("page", "0".to_string()), ("size", "20".to_string())]
        );
    }

    #[test]
    fn keyword_is_trimmed() {
        let query = ProductListQuery {
            page: 0,
            size: 20,
            keyword: Some(" áo khoác ".to_string()),
            category: Some("fashion".to_string()),
        };
        let pairs = query.query_pairs();
        assert!(pairs.contains(&("keyword", "áo khoác".to_string())));
        assert!(pairs.contains(&("category", "fashion".to_string())));
    }
}
