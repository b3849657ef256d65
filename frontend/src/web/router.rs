//! History-API router service.
//!
//! All `window.history` access is concentrated here. Navigation follows a
//! request -> guard -> commit flow, with auth checks driven by injected
//! signals so this module never touches the auth state directly.

use leptos::prelude::*;
use wasm_bindgen::prelude::*;

use super::SessionStorage;
use super::route::AppRoute;
use hustbuy_shared::STORAGE_KEY_REDIRECT_AFTER_LOGIN;

fn current_path() -> String {
    web_sys::window()
        .and_then(|w| w.location().pathname().ok())
        .unwrap_or_else(|| "/".to_string())
}

fn push_history_state(path: &str) {
    if let Some(window) = web_sys::window() {
        if let Ok(history) = window.history() {
            let _ = history.push_state_with_url(&JsValue::NULL, "", Some(path));
        }
    }
}

fn replace_history_state(path: &str) {
    if let Some(window) = web_sys::window() {
        if let Ok(history) = window.history() {
            let _ = history.replace_state_with_url(&JsValue::NULL, "", Some(path));
        }
    }
}

#[derive(Clone, Copy)]
pub struct RouterService {
    current_route: ReadSignal<AppRoute>,
    set_route: WriteSignal<AppRoute>,
    is_authenticated: Signal<bool>,
    is_admin: Signal<bool>,
}

impl RouterService {
    fn new(is_authenticated: Signal<bool>, is_admin: Signal<bool>) -> Self {
        let initial_route = AppRoute::from_path(&current_path());
        let (current_route, set_route) = signal(initial_route);

        Self {
            current_route,
            set_route,
            is_authenticated,
            is_admin,
        }
    }

    pub fn current_route(&self) -> ReadSignal<AppRoute> {
        self.current_route
    }

    pub fn navigate(&self, path: &str) {
        self.navigate_to_route(AppRoute::from_path(path), true);
    }

    pub fn navigate_route(&self, route: AppRoute) {
        self.navigate_to_route(route, true);
    }

    fn navigate_to_route(&self, target_route: AppRoute, use_push: bool) {
        let is_auth = self.is_authenticated.get_untracked();
        let is_admin = self.is_admin.get_untracked();

        // Guard: protected route, signed out. Remember where the user was
        // headed so the login page can send them back.
        if target_route.requires_auth() && !is_auth {
            web_sys::console::log_1(&"[Router] Access denied. Redirecting to login.".into());
            SessionStorage::set(STORAGE_KEY_REDIRECT_AFTER_LOGIN, &target_route.to_path());
            self.commit(AppRoute::auth_failure_redirect(), use_push);
            return;
        }

        // Guard: admin-only route without the role.
        if target_route.requires_admin() && !is_admin {
            web_sys::console::log_1(&"[Router] Admin only. Redirecting home.".into());
            self.commit(AppRoute::auth_success_redirect(), use_push);
            return;
        }

        // Signed-in users skip the auth pages.
        if target_route.should_redirect_when_authenticated() && is_auth {
            self.commit(AppRoute::auth_success_redirect(), use_push);
            return;
        }

        self.commit(target_route, use_push);
    }

    fn commit(&self, route: AppRoute, use_push: bool) {
        let path = route.to_path();
        if use_push {
            push_history_state(&path);
        } else {
            replace_history_state(&path);
        }
        self.set_route.set(route);
    }

    /// Browser back/forward buttons run the same guards.
    fn init_popstate_listener(&self) {
        let set_route = self.set_route;
        let is_authenticated = self.is_authenticated;
        let is_admin = self.is_admin;

        let closure = Closure::<dyn Fn()>::new(move || {
            let target_route = AppRoute::from_path(&current_path());
            let is_auth = is_authenticated.get_untracked();

            if target_route.requires_auth() && !is_auth {
                SessionStorage::set(STORAGE_KEY_REDIRECT_AFTER_LOGIN, &target_route.to_path());
                let redirect = AppRoute::auth_failure_redirect();
                replace_history_state(&redirect.to_path());
                set_route.set(redirect);
            } else if target_route.requires_admin() && !is_admin.get_untracked() {
                let redirect = AppRoute::auth_success_redirect();
                replace_history_state(&redirect.to_path());
                set_route.set(redirect);
            } else {
                set_route.set(target_route);
            }
        });

        if let Some(window) = web_sys::window() {
            let _ = window
                .add_event_listener_with_callback("popstate", closure.as_ref().unchecked_ref());
        }

        // Leak the closure to keep the listener alive for the app lifetime.
        closure.forget();
    }

    /// Redirect automatically when the session state flips.
    fn setup_auth_redirect(&self) {
        let current_route = self.current_route;
        let set_route = self.set_route;
        let is_authenticated = self.is_authenticated;

        Effect::new(move |_| {
            let is_auth = is_authenticated.get();
            let route = current_route.get_untracked();

            if is_auth {
                // Just logged in from an auth page: honor the stored
                // redirect target, then fall back to home.
                if route.should_redirect_when_authenticated() {
                    let redirect = SessionStorage::take(STORAGE_KEY_REDIRECT_AFTER_LOGIN)
                        .map(|path| AppRoute::from_path(&path))
                        .filter(|r| *r != AppRoute::NotFound)
                        .unwrap_or_else(AppRoute::auth_success_redirect);
                    push_history_state(&redirect.to_path());
                    set_route.set(redirect);
                    web_sys::console::log_1(
                        &"[Router] Auth state changed: logged in, leaving auth page.".into(),
                    );
                }
            } else if route.requires_auth() {
                // Logged out while on a protected page.
                let redirect = AppRoute::auth_failure_redirect();
                push_history_state(&redirect.to_path());
                set_route.set(redirect);
                web_sys::console::log_1(
                    &"[Router] Auth state changed: logged out, redirecting to login.".into(),
                );
            }
        });
    }
}

fn provide_router(is_authenticated: Signal<bool>, is_admin: Signal<bool>) -> RouterService {
    let router = RouterService::new(is_authenticated, is_admin);

    router.init_popstate_listener();
    router.setup_auth_redirect();

    provide_context(router);
    router
}

pub fn use_router() -> RouterService {
    use_context::<RouterService>()
        .expect("RouterService not found in context. Ensure Router is provided.")
}

// ============================================================================
// UI components
// ============================================================================

/// Root router component; provides the routing context to the whole app.
#[component]
pub fn Router(
    /// Auth guard signal.
    is_authenticated: Signal<bool>,
    /// Admin guard signal.
    is_admin: Signal<bool>,
    /// Child components.
    children: Children,
) -> impl IntoView {
    provide_router(is_authenticated, is_admin);

    children()
}

/// Renders the component matching the current route.
#[component]
pub fn RouterOutlet(
    /// Route matching function: current route in, view out.
    matcher: fn(AppRoute) -> AnyView,
) -> impl IntoView {
    let router = use_router();

    move || {
        let current = router.current_route().get();
        matcher(current)
    }
}
