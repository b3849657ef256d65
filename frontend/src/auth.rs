//! Session state management, decoupled from the routing system.
//!
//! The router checks authentication through injected signals only; the
//! session token lives in memory and is never written to browser storage.

use crate::api::{ApiError, HustBuyApi};
use hustbuy_shared::UserProfile;
use hustbuy_shared::protocol::LoginRequest;
use leptos::prelude::*;

#[derive(Clone)]
pub struct AuthState {
    /// API client; carries the bearer token once logged in.
    pub api: HustBuyApi,
    /// Current user, `None` while signed out.
    pub user: Option<UserProfile>,
    pub is_loading: bool,
}

impl AuthState {
    pub fn is_authenticated(&self) -> bool {
        self.user.is_some()
    }

    pub fn is_admin(&self) -> bool {
        self.user.as_ref().is_some_and(UserProfile::is_admin)
    }
}

/// Shared through Context; read/write signals so both pages and the router
/// effects can react to session changes.
#[derive(Clone, Copy)]
pub struct AuthContext {
    pub state: ReadSignal<AuthState>,
    pub set_state: WriteSignal<AuthState>,
}

impl AuthContext {
    pub fn new(base_url: String) -> Self {
        let (state, set_state) = signal(AuthState {
            api: HustBuyApi::new(base_url),
            user: None,
            is_loading: true,
        });
        Self { state, set_state }
    }

    /// Guard signal injected into the router service.
    pub fn is_authenticated_signal(&self) -> Signal<bool> {
        let state = self.state;
        Signal::derive(move || state.get().is_authenticated())
    }

    pub fn is_admin_signal(&self) -> Signal<bool> {
        let state = self.state;
        Signal::derive(move || state.get().is_admin())
    }

    /// Snapshot of the API client for use inside spawned futures.
    pub fn api(&self) -> HustBuyApi {
        self.state.get_untracked().api.clone()
    }
}

pub fn use_auth() -> AuthContext {
    use_context::<AuthContext>().expect("AuthContext should be provided")
}

/// Mark the session ready. The token is memory-only, so a fresh page load
/// always starts signed out.
pub fn init_auth(ctx: &AuthContext) {
    ctx.set_state.update(|state| {
        state.is_loading = false;
    });
}

/// Authenticate and install the token-carrying client plus the profile into
/// the shared state. Navigation is handled by the router's auth listener.
pub async fn login(ctx: &AuthContext, email: String, password: String) -> Result<(), ApiError> {
    let api = ctx.api();
    let response = api.execute(&LoginRequest { email, password }).await?;
    ctx.set_state.update(|state| {
        state.api = api.with_token(response.token.clone());
        state.user = Some(response.user.clone());
    });
    Ok(())
}

/// Refresh the cached profile after a mutation elsewhere.
pub fn set_current_user(ctx: &AuthContext, user: UserProfile) {
    ctx.set_state.update(|state| {
        state.user = Some(user);
    });
}

/// Drop the session. The router redirects away from protected pages on its
/// own once the guard signal flips.
pub fn logout(ctx: &AuthContext) {
    let base_url = crate::api::api_base_url();
    ctx.set_state.update(|state| {
        state.api = HustBuyApi::new(base_url.clone());
        state.user = None;
    });
}
