//! Application chrome: navbar with the cart badge, footer with the static
//! page links. Wraps every routed page.

use crate::auth::{logout, use_auth};
use crate::cart_state::use_cart;
use crate::toast::use_toast;
use crate::web::router::use_router;
use leptos::prelude::*;

#[component]
pub fn AppLayout(children: Children) -> impl IntoView {
    view! {
        <div class="min-h-screen flex flex-col bg-base-200">
            <Navbar />
            <main class="flex-1">{children()}</main>
            <Footer />
        </div>
    }
}

#[component]
fn Navbar() -> impl IntoView {
    let auth_ctx = use_auth();
    let cart_ctx = use_cart();
    let toast = use_toast();
    let router = use_router();

    let auth_state = auth_ctx.state;

    // Keep the badge in sync with the session: fetch on login, clear on
    // logout.
    Effect::new(move |_| {
        let state = auth_state.get();
        if state.is_authenticated() {
            cart_ctx.refresh(state.api.clone());
        } else {
            cart_ctx.clear();
        }
    });

    let cart_count = cart_ctx.count();
    let is_authenticated = move || auth_state.get().is_authenticated();
    let is_admin = move || auth_state.get().is_admin();
    let user_name = move || {
        auth_state
            .get()
            .user
            .map(|u| u.full_name)
            .unwrap_or_default()
    };

    let on_logout = move |_| {
        logout(&auth_ctx);
        toast.info("Đã đăng xuất");
    };

    view! {
        <div class="navbar bg-base-100 shadow-md sticky top-0 z-40">
            <div class="flex-1 gap-2">
                <a class="btn btn-ghost text-xl text-primary font-bold" on:click=move |_| router.navigate("/")>
                    "HUSTBuy"
                </a>
            </div>
            <div class="flex-none gap-2">
                <button class="btn btn-ghost btn-circle" on:click=move |_| router.navigate("/cart")>
                    <div class="indicator">
                        <svg xmlns="http://www.w3.org/2000/svg" fill="none" viewBox="0 0 24 24" class="h-6 w-6 stroke-current"><path stroke-linecap="round" stroke-linejoin="round" stroke-width="2" d="M3 3h2l.4 2M7 13h10l4-8H5.4M7 13L5.4 5M7 13l-2.293 2.293c-.63.63-.184 1.707.707 1.707H17m0 0a2 2 0 100 4 2 2 0 000-4zm-8 2a2 2 0 11-4 0 2 2 0 014 0z"></path></svg>
                        <Show when=move || { cart_count.get() > 0 }>
                            <span class="badge badge-sm badge-primary indicator-item">
                                {move || cart_count.get()}
                            </span>
                        </Show>
                    </div>
                </button>
                <Show
                    when=is_authenticated
                    fallback=move || view! {
                        <a class="btn btn-ghost" on:click=move |_| router.navigate("/login")>"Đăng nhập"</a>
                        <a class="btn btn-primary" on:click=move |_| router.navigate("/register")>"Đăng ký"</a>
                    }
                >
                    <div class="dropdown dropdown-end">
                        <div tabindex="0" role="button" class="btn btn-ghost gap-2">
                            {user_name}
                            <svg xmlns="http://www.w3.org/2000/svg" fill="none" viewBox="0 0 24 24" class="h-4 w-4 stroke-current"><path stroke-linecap="round" stroke-linejoin="round" stroke-width="2" d="M19 9l-7 7-7-7"></path></svg>
                        </div>
                        <ul tabindex="0" class="dropdown-content z-[1] menu p-2 shadow bg-base-100 rounded-box w-56">
                            <li><a on:click=move |_| router.navigate("/profile/general")>"Tài khoản của tôi"</a></li>
                            <li><a on:click=move |_| router.navigate("/profile/orders")>"Đơn hàng"</a></li>
                            <li><a on:click=move |_| router.navigate("/profile/seller")>"Kênh người bán"</a></li>
                            <Show when=is_admin>
                                <li><a on:click=move |_| router.navigate("/admin/sellers")>"Duyệt người bán"</a></li>
                            </Show>
                            <li><a class="text-error" on:click=on_logout>"Đăng xuất"</a></li>
                        </ul>
                    </div>
                </Show>
            </div>
        </div>
    }
}

#[component]
fn Footer() -> impl IntoView {
    let router = use_router();

    view! {
        <footer class="footer p-10 bg-neutral text-neutral-content mt-8">
            <nav>
                <h6 class="footer-title">"Về HUSTBuy"</h6>
                <a class="link link-hover" on:click=move |_| router.navigate("/about")>"Giới thiệu"</a>
                <a class="link link-hover" on:click=move |_| router.navigate("/careers")>"Tuyển dụng"</a>
                <a class="link link-hover" on:click=move |_| router.navigate("/contact")>"Liên hệ"</a>
            </nav>
            <nav>
                <h6 class="footer-title">"Hỗ trợ"</h6>
                <a class="link link-hover" on:click=move |_| router.navigate("/faq")>"Câu hỏi thường gặp"</a>
                <a class="link link-hover" on:click=move |_| router.navigate("/policies/shipping")>"Chính sách vận chuyển"</a>
                <a class="link link-hover" on:click=move |_| router.navigate("/policies/returns")>"Chính sách đổi trả"</a>
                <a class="link link-hover" on:click=move |_| router.navigate("/policies/warranty")>"Chính sách bảo hành"</a>
            </nav>
            <aside>
                <p class="font-bold">"HUSTBuy"</p>
                <p class="text-sm opacity-70">"Sàn thương mại điện tử dành cho cộng đồng Bách Khoa"</p>
            </aside>
        </footer>
    }
}
