//! HUSTBuy marketplace frontend.
//!
//! Context-driven CSR application:
//! - `web::route` / `web::router`: route definitions and the History-API
//!   router with auth guards
//! - `auth`: session state, injected into the router as a guard signal
//! - `cart_state`: cart badge count shared by the navbar and cart page
//! - `toast`: app-wide notification queue
//! - `components`: one module per page or form

mod api;
mod auth;
mod cart_logic;
mod cart_state;
mod format;
mod hooks;
mod selection;
mod toast;
mod validate;

mod components {
    pub mod admin {
        pub mod sellers;
    }
    pub mod cart;
    pub mod checkout_result;
    pub mod home;
    pub mod layout;
    pub mod login;
    pub mod product_detail;
    pub mod profile {
        pub mod addresses;
        pub mod general;
        pub mod nav;
        pub mod orders;
        pub mod security;
        pub mod seller;
    }
    pub mod register;
    pub mod static_pages;
}

// Thin wrappers over the native browser APIs (history, sessionStorage).
pub(crate) mod web {
    pub mod route;
    pub mod router;
    mod storage;

    pub use storage::SessionStorage;
}

use crate::auth::{AuthContext, init_auth};
use crate::cart_state::CartContext;
use crate::components::admin::sellers::AdminSellersPage;
use crate::components::cart::CartPage;
use crate::components::checkout_result::CheckoutResultPage;
use crate::components::home::HomePage;
use crate::components::layout::AppLayout;
use crate::components::login::LoginPage;
use crate::components::product_detail::ProductDetailPage;
use crate::components::profile::addresses::AddressesPage;
use crate::components::profile::general::ProfileGeneralPage;
use crate::components::profile::orders::OrdersPage;
use crate::components::profile::security::SecurityPage;
use crate::components::profile::seller::SellerRegistrationPage;
use crate::components::register::RegisterPage;
use crate::components::static_pages::{
    AboutPage, CareersPage, ContactPage, FaqPage, ReturnsPolicyPage, ShippingPolicyPage,
    WarrantyPolicyPage,
};
use crate::toast::{ToastContext, ToastHost};
use crate::web::route::AppRoute;
use crate::web::router::{Router, RouterOutlet};

use leptos::prelude::*;

/// Maps the current route to its page component.
fn route_matcher(route: AppRoute) -> AnyView {
    match route {
        AppRoute::Home => view! { <HomePage /> }.into_any(),
        AppRoute::ProductDetail(id) => view! { <ProductDetailPage id=id /> }.into_any(),
        AppRoute::Cart => view! { <CartPage /> }.into_any(),
        AppRoute::CheckoutResult => view! { <CheckoutResultPage /> }.into_any(),
        AppRoute::Login => view! { <LoginPage /> }.into_any(),
        AppRoute::Register => view! { <RegisterPage /> }.into_any(),
        AppRoute::ProfileGeneral => view! { <ProfileGeneralPage /> }.into_any(),
        AppRoute::ProfileAddresses => view! { <AddressesPage /> }.into_any(),
        AppRoute::ProfileOrders => view! { <OrdersPage /> }.into_any(),
        AppRoute::ProfileSecurity => view! { <SecurityPage /> }.into_any(),
        AppRoute::ProfileSeller => view! { <SellerRegistrationPage /> }.into_any(),
        AppRoute::AdminSellers => view! { <AdminSellersPage /> }.into_any(),
        AppRoute::About => view! { <AboutPage /> }.into_any(),
        AppRoute::Careers => view! { <CareersPage /> }.into_any(),
        AppRoute::Contact => view! { <ContactPage /> }.into_any(),
        AppRoute::ShippingPolicy => view! { <ShippingPolicyPage /> }.into_any(),
        AppRoute::ReturnsPolicy => view! { <ReturnsPolicyPage /> }.into_any(),
        AppRoute::WarrantyPolicy => view! { <WarrantyPolicyPage /> }.into_any(),
        AppRoute::Faq => view! { <FaqPage /> }.into_any(),
        AppRoute::NotFound => view! {
            <div class="flex items-center justify-center min-h-screen bg-base-200">
                <div class="text-center">
                    <h1 class="text-6xl font-bold text-error">"404"</h1>
                    <p class="text-xl mt-4">"Không tìm thấy trang"</p>
                </div>
            </div>
        }
        .into_any(),
    }
}

#[component]
pub fn App() -> impl IntoView {
    let auth_ctx = AuthContext::new(api::api_base_url());
    provide_context(auth_ctx);
    init_auth(&auth_ctx);

    let cart_ctx = CartContext::new();
    provide_context(cart_ctx);

    let toast_ctx = ToastContext::new();
    provide_context(toast_ctx);

    // Guard signals injected into the router so routing stays decoupled
    // from the auth module.
    let is_authenticated = auth_ctx.is_authenticated_signal();
    let is_admin = auth_ctx.is_admin_signal();

    view! {
        <Router is_authenticated=is_authenticated is_admin=is_admin>
            <AppLayout>
                <RouterOutlet matcher=route_matcher />
            </AppLayout>
            <ToastHost />
        </Router>
    }
}
