use crate::auth::use_auth;
use crate::toast::use_toast;
use crate::validate::{
    is_valid_email, is_valid_phone, password_strength, strength_class, strength_label,
};
use crate::web::router::use_router;
use hustbuy_shared::protocol::RegisterRequest;
use leptos::prelude::*;
use leptos::task::spawn_local;

#[component]
pub fn RegisterPage() -> impl IntoView {
    let auth_ctx = use_auth();
    let toast = use_toast();
    let router = use_router();

    let (full_name, set_full_name) = signal(String::new());
    let (email, set_email) = signal(String::new());
    let (phone, set_phone) = signal(String::new());
    let (password, set_password) = signal(String::new());
    let (confirm, set_confirm) = signal(String::new());
    let (is_submitting, set_is_submitting) = signal(false);
    let (error_msg, set_error_msg) = signal(Option::<String>::None);

    let score = move || password_strength(&password.get());

    let validate = move || -> Option<String> {
        if full_name.get().trim().is_empty() {
            return Some("Vui lòng nhập họ tên".to_string());
        }
        if !is_valid_email(&email.get()) {
            return Some("Email không hợp lệ".to_string());
        }
        if !is_valid_phone(&phone.get()) {
            return Some("Số điện thoại không hợp lệ".to_string());
        }
        if score() < 40 {
            return Some("Mật khẩu quá yếu".to_string());
        }
        if password.get() != confirm.get() {
            return Some("Mật khẩu nhập lại không khớp".to_string());
        }
        None
    };

    let on_submit = move |ev: leptos::web_sys::SubmitEvent| {
        ev.prevent_default();
        if let Some(msg) = validate() {
            set_error_msg.set(Some(msg));
            return;
        }

        set_is_submitting.set(true);
        set_error_msg.set(None);

        let api = auth_ctx.api();
        let request = RegisterRequest {
            full_name: full_name.get_untracked().trim().to_string(),
            email: email.get_untracked(),
            phone: phone.get_untracked(),
            password: password.get_untracked(),
        };
        spawn_local(async move {
            match api.execute(&request).await {
                Ok(_) => {
                    toast.success("Đăng ký thành công, mời bạn đăng nhập");
                    router.navigate("/login");
                }
                Err(e) => {
                    web_sys::console::error_1(&format!("[Register] {e}").into());
                    set_error_msg.set(Some(e.user_message()));
                }
            }
            set_is_submitting.set(false);
        });
    };

    view! {
        <div class="hero py-10">
            <div class="hero-content flex-col w-full max-w-md">
                <div class="text-center mb-4">
                    <h1 class="text-3xl font-bold text-primary">"Tạo tài khoản"</h1>
                </div>

                <div class="card shrink-0 w-full shadow-2xl bg-base-100">
                    <form class="card-body" on:submit=on_submit>
                        <Show when=move || error_msg.get().is_some()>
                            <div role="alert" class="alert alert-error text-sm py-2">
                                <span>{move || error_msg.get().unwrap_or_default()}</span>
                            </div>
                        </Show>

                        <div class="form-control">
                            <label class="label" for="full_name">
                                <span class="label-text">"Họ và tên"</span>
                            </label>
                            <input
                                id="full_name"
                                type="text"
                                placeholder="Nguyễn Văn A"
                                on:input=move |ev| set_full_name.set(event_target_value(&ev))
                                prop:value=full_name
                                class="input input-bordered"
                                required
                            />
                        </div>
                        <div class="form-control">
                            <label class="label" for="reg_email">
                                <span class="label-text">"Email"</span>
                            </label>
                            <input
                                id="reg_email"
                                type="email"
                                placeholder="ban@example.com"
                                on:input=move |ev| set_email.set(event_target_value(&ev))
                                prop:value=email
                                class="input input-bordered"
                                required
                            />
                        </div>
                        <div class="form-control">
                            <label class="label" for="reg_phone">
                                <span class="label-text">"Số điện thoại"</span>
                            </label>
                            <input
                                id="reg_phone"
                                type="tel"
                                placeholder="0912345678"
                                on:input=move |ev| set_phone.set(event_target_value(&ev))
                                prop:value=phone
                                class="input input-bordered"
                                required
                            />
                        </div>
                        <div class="form-control">
                            <label class="label" for="reg_password">
                                <span class="label-text">"Mật khẩu"</span>
                            </label>
                            <input
                                id="reg_password"
                                type="password"
                                placeholder="••••••••"
                                on:input=move |ev| set_password.set(event_target_value(&ev))
                                prop:value=password
                                class="input input-bordered"
                                required
                            />
                            <Show when=move || !password.get().is_empty()>
                                <div class="mt-2 flex items-center gap-2">
                                    <progress
                                        class=move || strength_class(score())
                                        prop:value=move || score() as f64
                                        max="100"
                                    ></progress>
                                    <span class="text-xs whitespace-nowrap">
                                        {move || strength_label(score())}
                                    </span>
                                </div>
                            </Show>
                        </div>
                        <div class="form-control">
                            <label class="label" for="reg_confirm">
                                <span class="label-text">"Nhập lại mật khẩu"</span>
                            </label>
                            <input
                                id="reg_confirm"
                                type="password"
                                placeholder="••••••••"
                                on:input=move |ev| set_confirm.set(event_target_value(&ev))
                                prop:value=confirm
                                class="input input-bordered"
                                required
                            />
                        </div>
                        <div class="form-control mt-6">
                            <button class="btn btn-primary" disabled=move || is_submitting.get()>
                                {move || if is_submitting.get() {
                                    view! { <span class="loading loading-spinner"></span> "Đang tạo tài khoản..." }.into_any()
                                } else {
                                    "Đăng ký".into_any()
                                }}
                            </button>
                        </div>
                    </form>
                </div>
            </div>
        </div>
    }
}
