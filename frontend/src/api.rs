//! HTTP client for the HUSTBuy backend.
//!
//! Every method follows the same shape: build the request, send it, check
//! the HTTP status, decode the `{code, result, message}` envelope and
//! unwrap it. All business logic lives on the server; this module only
//! moves data.

use gloo_net::http::{Request, RequestBuilder, Response};
use hustbuy_shared::protocol::{
    AddressPayload, ApiRequest, ChangePasswordRequest, HttpMethod, OrderListQuery,
    ProductListQuery, RejectSellerRequest, SellerListQuery, SellerPayload,
    UpdateCartQuantityRequest,
};
use hustbuy_shared::{
    Address, ApiEnvelope, CartItem, GENERIC_ERROR_MESSAGE, LoginHistoryEntry, OptionGroup, Order,
    Page, ProductDetail, ProductSpec, ProductSummary, SelectionConfig, SellerProfile, UserProfile,
    Variant,
};
use serde::de::DeserializeOwned;

/// Base URL of the API gateway. Overridable at build time; defaults to
/// same-origin since the bundle is served next to the gateway.
pub fn api_base_url() -> String {
    option_env!("HUSTBUY_API_BASE").unwrap_or("").to_string()
}

#[derive(Debug, Clone, PartialEq)]
pub enum ApiError {
    /// The request never produced a response.
    Network(String),
    /// Non-2xx HTTP status.
    Http(u16),
    /// The envelope carried a failure code; holds the server message.
    Server(String),
    /// The body could not be decoded into the expected shape.
    Decode(String),
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ApiError::Network(msg) => write!(f, "network error: {msg}"),
            ApiError::Http(status) => write!(f, "http status {status}"),
            ApiError::Server(msg) => write!(f, "server error: {msg}"),
            ApiError::Decode(msg) => write!(f, "decode error: {msg}"),
        }
    }
}

impl ApiError {
    /// Localized message for toasts. Only server-provided messages are shown
    /// verbatim; transport problems fall back to the generic retry string.
    pub fn user_message(&self) -> String {
        match self {
            ApiError::Server(msg) => msg.clone(),
            _ => GENERIC_ERROR_MESSAGE.to_string(),
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct HustBuyApi {
    base_url: String,
    token: Option<String>,
}

impl HustBuyApi {
    pub fn new(base_url: String) -> Self {
        let base_url = base_url.trim_end_matches('/').to_string();
        Self {
            base_url,
            token: None,
        }
    }

    /// The same client with a session token attached to every request.
    pub fn with_token(&self, token: String) -> Self {
        Self {
            base_url: self.base_url.clone(),
            token: Some(token),
        }
    }

    fn url(&self, path: &str) -> String {
        if path.starts_with('/') {
            format!("{}{}", self.base_url, path)
        } else {
            format!("{}/{}", self.base_url, path)
        }
    }

    fn authorize(&self, builder: RequestBuilder) -> RequestBuilder {
        match &self.token {
            Some(token) => builder.header("Authorization", &format!("Bearer {token}")),
            None => builder,
        }
    }

    async fn unwrap_envelope<T: DeserializeOwned>(res: Response) -> Result<T, ApiError> {
        if !res.ok() {
            return Err(ApiError::Http(res.status()));
        }
        let envelope = res
            .json::<ApiEnvelope<T>>()
            .await
            .map_err(|e| ApiError::Decode(e.to_string()))?;
        envelope.into_result().map_err(ApiError::Server)
    }

    async fn unwrap_empty(res: Response) -> Result<(), ApiError> {
        if !res.ok() {
            return Err(ApiError::Http(res.status()));
        }
        let envelope = res
            .json::<ApiEnvelope<serde_json::Value>>()
            .await
            .map_err(|e| ApiError::Decode(e.to_string()))?;
        envelope.into_unit_result().map_err(ApiError::Server)
    }

    /// Single code path for every fixed-path, body-carrying endpoint.
    pub async fn execute<R: ApiRequest>(&self, request: &R) -> Result<R::Response, ApiError> {
        let url = self.url(R::PATH);
        let builder = match R::METHOD {
            HttpMethod::Post => Request::post(&url),
            HttpMethod::Put => Request::put(&url),
        };
        let res = self
            .authorize(builder)
            .header("Content-Type", "application/json")
            .json(request)
            .map_err(|e| ApiError::Network(e.to_string()))?
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        Self::unwrap_envelope(res).await
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        let res = self
            .authorize(Request::get(&self.url(path)))
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        Self::unwrap_envelope(res).await
    }

    async fn get_json_with_query<T: DeserializeOwned>(
        &self,
        path: &str,
        pairs: Vec<(&'static str, String)>,
    ) -> Result<T, ApiError> {
        let res = self
            .authorize(Request::get(&self.url(path)).query(pairs))
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        Self::unwrap_envelope(res).await
    }

    async fn put_json_empty<B: serde::Serialize>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<(), ApiError> {
        let res = self
            .authorize(Request::put(&self.url(path)))
            .header("Content-Type", "application/json")
            .json(body)
            .map_err(|e| ApiError::Network(e.to_string()))?
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        Self::unwrap_empty(res).await
    }

    async fn post_json_empty<B: serde::Serialize>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<(), ApiError> {
        let res = self
            .authorize(Request::post(&self.url(path)))
            .header("Content-Type", "application/json")
            .json(body)
            .map_err(|e| ApiError::Network(e.to_string()))?
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        Self::unwrap_empty(res).await
    }

    async fn post_empty(&self, path: &str) -> Result<(), ApiError> {
        let res = self
            .authorize(Request::post(&self.url(path)))
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        Self::unwrap_empty(res).await
    }

    async fn delete_empty(&self, path: &str) -> Result<(), ApiError> {
        let res = self
            .authorize(Request::delete(&self.url(path)))
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        Self::unwrap_empty(res).await
    }

    // =====================================================
    // Auth / account
    // =====================================================

    pub async fn me(&self) -> Result<UserProfile, ApiError> {
        self.get_json("/api/users/me").await
    }

    pub async fn change_password(&self, req: &ChangePasswordRequest) -> Result<(), ApiError> {
        self.post_json_empty("/api/users/change-password", req).await
    }

    pub async fn login_history(
        &self,
        page: u32,
        size: u32,
    ) -> Result<Page<LoginHistoryEntry>, ApiError> {
        self.get_json_with_query(
            "/api/users/login-history",
            vec![("page", page.to_string()), ("size", size.to_string())],
        )
        .await
    }

    // =====================================================
    // Addresses
    // =====================================================

    pub async fn list_addresses(&self) -> Result<Vec<Address>, ApiError> {
        self.get_json("/api/addresses").await
    }

    pub async fn update_address(
        &self,
        id: u64,
        payload: &AddressPayload,
    ) -> Result<(), ApiError> {
        self.put_json_empty(&format!("/api/addresses/{id}"), payload)
            .await
    }

    pub async fn delete_address(&self, id: u64) -> Result<(), ApiError> {
        self.delete_empty(&format!("/api/addresses/{id}")).await
    }

    pub async fn set_default_address(&self, id: u64) -> Result<(), ApiError> {
        self.post_empty(&format!("/api/addresses/{id}/default")).await
    }

    // =====================================================
    // Orders
    // =====================================================

    pub async fn list_orders(&self, query: &OrderListQuery) -> Result<Page<Order>, ApiError> {
        self.get_json_with_query("/api/orders", query.query_pairs())
            .await
    }

    pub async fn cancel_order(&self, id: u64) -> Result<(), ApiError> {
        self.post_empty(&format!("/api/orders/{id}/cancel")).await
    }

    // =====================================================
    // Seller
    // =====================================================

    /// The caller's own seller profile; `None` until registration starts.
    pub async fn my_seller_profile(&self) -> Result<Option<SellerProfile>, ApiError> {
        match self.get_json::<SellerProfile>("/api/sellers/me").await {
            Ok(profile) => Ok(Some(profile)),
            Err(ApiError::Http(404)) => Ok(None),
            Err(e) => Err(e),
        }
    }

    pub async fn update_seller(&self, payload: &SellerPayload) -> Result<(), ApiError> {
        self.put_json_empty("/api/sellers/me", payload).await
    }

    pub async fn submit_seller(&self) -> Result<(), ApiError> {
        self.post_empty("/api/sellers/me/submit").await
    }

    // =====================================================
    // Admin: seller verification
    // =====================================================

    pub async fn list_sellers(
        &self,
        query: &SellerListQuery,
    ) -> Result<Page<SellerProfile>, ApiError> {
        self.get_json_with_query("/api/admin/sellers", query.query_pairs())
            .await
    }

    pub async fn approve_seller(&self, id: u64) -> Result<(), ApiError> {
        self.post_empty(&format!("/api/admin/sellers/{id}/approve"))
            .await
    }

    pub async fn reject_seller(&self, id: u64, req: &RejectSellerRequest) -> Result<(), ApiError> {
        self.post_json_empty(&format!("/api/admin/sellers/{id}/reject"), req)
            .await
    }

    // =====================================================
    // Cart
    // =====================================================

    pub async fn list_cart(&self) -> Result<Vec<CartItem>, ApiError> {
        self.get_json("/api/cart/items").await
    }

    pub async fn update_cart_quantity(&self, id: u64, quantity: u32) -> Result<(), ApiError> {
        self.put_json_empty(
            &format!("/api/cart/items/{id}"),
            &UpdateCartQuantityRequest { quantity },
        )
        .await
    }

    pub async fn remove_cart_item(&self, id: u64) -> Result<(), ApiError> {
        self.delete_empty(&format!("/api/cart/items/{id}")).await
    }

    // =====================================================
    // Catalog
    // =====================================================

    pub async fn list_products(
        &self,
        query: &ProductListQuery,
    ) -> Result<Page<ProductSummary>, ApiError> {
        self.get_json_with_query("/api/products", query.query_pairs())
            .await
    }

    pub async fn product_detail(&self, id: u64) -> Result<ProductDetail, ApiError> {
        self.get_json(&format!("/api/products/{id}")).await
    }

    pub async fn product_options(&self, id: u64) -> Result<Vec<OptionGroup>, ApiError> {
        self.get_json(&format!("/api/products/{id}/options")).await
    }

    pub async fn product_specs(&self, id: u64) -> Result<Vec<ProductSpec>, ApiError> {
        self.get_json(&format!("/api/products/{id}/specs")).await
    }

    pub async fn selection_config(&self, id: u64) -> Result<SelectionConfig, ApiError> {
        self.get_json(&format!("/api/products/{id}/selection-config"))
            .await
    }

    /// Live price and stock for a resolved variant. A 404 means the
    /// combination no longer exists and is an expected, recoverable outcome.
    pub async fn resolve_variant(
        &self,
        product_id: u64,
        variant_id: u64,
    ) -> Result<Option<Variant>, ApiError> {
        match self
            .get_json::<Variant>(&format!("/api/products/{product_id}/variants/{variant_id}"))
            .await
        {
            Ok(variant) => Ok(Some(variant)),
            Err(ApiError::Http(404)) => Ok(None),
            Err(e) => Err(e),
        }
    }
}
