//! Route definitions. Pure domain logic with no DOM dependency: the enum,
//! path parsing and the guard predicates the router enforces.

use std::fmt::Display;

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum AppRoute {
    #[default]
    Home,
    ProductDetail(u64),
    Cart,
    CheckoutResult,
    Login,
    Register,
    ProfileGeneral,
    ProfileAddresses,
    ProfileOrders,
    ProfileSecurity,
    ProfileSeller,
    AdminSellers,
    About,
    Careers,
    Contact,
    ShippingPolicy,
    ReturnsPolicy,
    WarrantyPolicy,
    Faq,
    NotFound,
}

impl AppRoute {
    pub fn from_path(path: &str) -> Self {
        let path = path.trim_end_matches('/');
        if let Some(rest) = path.strip_prefix("/products/") {
            return match rest.parse::<u64>() {
                Ok(id) => Self::ProductDetail(id),
                Err(_) => Self::NotFound,
            };
        }
        match path {
            "" | "/" => Self::Home,
            "/cart" => Self::Cart,
            "/checkout/result" => Self::CheckoutResult,
            "/login" => Self::Login,
            "/register" => Self::Register,
            "/profile" | "/profile/general" => Self::ProfileGeneral,
            "/profile/addresses" => Self::ProfileAddresses,
            "/profile/orders" => Self::ProfileOrders,
            "/profile/security" => Self::ProfileSecurity,
            "/profile/seller" => Self::ProfileSeller,
            "/admin/sellers" => Self::AdminSellers,
            "/about" => Self::About,
            "/careers" => Self::Careers,
            "/contact" => Self::Contact,
            "/policies/shipping" => Self::ShippingPolicy,
            "/policies/returns" => Self::ReturnsPolicy,
            "/policies/warranty" => Self::WarrantyPolicy,
            "/faq" => Self::Faq,
            _ => Self::NotFound,
        }
    }

    pub fn to_path(&self) -> String {
        match self {
            Self::Home => "/".to_string(),
            Self::ProductDetail(id) => format!("/products/{id}"),
            Self::Cart => "/cart".to_string(),
            Self::CheckoutResult => "/checkout/result".to_string(),
            Self::Login => "/login".to_string(),
            Self::Register => "/register".to_string(),
            Self::ProfileGeneral => "/profile/general".to_string(),
            Self::ProfileAddresses => "/profile/addresses".to_string(),
            Self::ProfileOrders => "/profile/orders".to_string(),
            Self::ProfileSecurity => "/profile/security".to_string(),
            Self::ProfileSeller => "/profile/seller".to_string(),
            Self::AdminSellers => "/admin/sellers".to_string(),
            Self::About => "/about".to_string(),
            Self::Careers => "/careers".to_string(),
            Self::Contact => "/contact".to_string(),
            Self::ShippingPolicy => "/policies/shipping".to_string(),
            Self::ReturnsPolicy => "/policies/returns".to_string(),
            Self::WarrantyPolicy => "/policies/warranty".to_string(),
            Self::Faq => "/faq".to_string(),
            Self::NotFound => "/404".to_string(),
        }
    }

    /// Guard: routes a signed-out user may not visit.
    pub fn requires_auth(&self) -> bool {
        matches!(
            self,
            Self::Cart
                | Self::CheckoutResult
                | Self::ProfileGeneral
                | Self::ProfileAddresses
                | Self::ProfileOrders
                | Self::ProfileSecurity
                | Self::ProfileSeller
                | Self::AdminSellers
        )
    }

    /// Guard: routes reserved for the admin role.
    pub fn requires_admin(&self) -> bool {
        matches!(self, Self::AdminSellers)
    }

    /// A signed-in user has no business on these pages.
    pub fn should_redirect_when_authenticated(&self) -> bool {
        matches!(self, Self::Login | Self::Register)
    }

    pub fn auth_failure_redirect() -> Self {
        Self::Login
    }

    pub fn auth_success_redirect() -> Self {
        Self::Home
    }
}

impl Display for AppRoute {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.to_path())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn paths_round_trip() {
        let routes = [
            AppRoute::Home,
            AppRoute::ProductDetail(42),
            AppRoute::Cart,
            AppRoute::CheckoutResult,
            AppRoute::Login,
            AppRoute::Register,
            AppRoute::ProfileAddresses,
            AppRoute::ProfileOrders,
            AppRoute::ProfileSecurity,
            AppRoute::ProfileSeller,
            AppRoute::AdminSellers,
            AppRoute::About,
            AppRoute::Careers,
            AppRoute::Contact,
            AppRoute::ShippingPolicy,
            AppRoute::ReturnsPolicy,
            AppRoute::WarrantyPolicy,
            AppRoute::Faq,
        ];
        for route in routes {
            assert_eq!(AppRoute::from_path(&route.to_path()), route);
        }
    }

    #[test]
    fn profile_root_aliases_general_tab() {
        assert_eq!(AppRoute::from_path("/profile"), AppRoute::ProfileGeneral);
        assert_eq!(
            AppRoute::from_path("/profile/general"),
            AppRoute::ProfileGeneral
        );
    }

    #[test]
    fn non_numeric_product_id_is_not_found() {
        assert_eq!(AppRoute::from_path("/products/abc"), AppRoute::NotFound);
    }

    #[test]
    fn trailing_slash_is_tolerated() {
        assert_eq!(AppRoute::from_path("/cart/"), AppRoute::Cart);
    }

    #[test]
    fn guards_cover_protected_areas() {
        assert!(AppRoute::Cart.requires_auth());
        assert!(AppRoute::ProfileOrders.requires_auth());
        assert!(AppRoute::AdminSellers.requires_auth());
        assert!(AppRoute::AdminSellers.requires_admin());
        assert!(!AppRoute::Home.requires_auth());
        assert!(!AppRoute::ProductDetail(1).requires_auth());
        assert!(!AppRoute::Faq.requires_auth());
    }

    #[test]
    fn auth_pages_redirect_once_signed_in() {
        assert!(AppRoute::Login.should_redirect_when_authenticated());
        assert!(AppRoute::Register.should_redirect_when_authenticated());
        assert!(!AppRoute::Home.should_redirect_when_authenticated());
    }
}
