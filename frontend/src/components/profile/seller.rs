//! Seller channel tab.
//!
//! No profile yet: show the registration form. Profile exists: show the
//! verification status banner; the form stays editable only while the
//! profile is a draft, and a draft can be submitted for review.

use crate::auth::use_auth;
use crate::components::profile::nav::ProfileNav;
use crate::toast::use_toast;
use crate::validate::{is_valid_email, is_valid_phone};
use hustbuy_shared::protocol::SellerPayload;
use hustbuy_shared::{SellerProfile, SellerStatus};
use leptos::prelude::*;
use leptos::task::spawn_local;

#[component]
pub fn SellerRegistrationPage() -> impl IntoView {
    let auth_ctx = use_auth();
    let toast = use_toast();

    let (profile, set_profile) = signal(Option::<SellerProfile>::None);
    let (loading, set_loading) = signal(true);
    let (saving, set_saving) = signal(false);
    let (submitting, set_submitting) = signal(false);

    let (store_name, set_store_name) = signal(String::new());
    let (description, set_description) = signal(String::new());
    let (contact_email, set_contact_email) = signal(String::new());
    let (contact_phone, set_contact_phone) = signal(String::new());
    let (tax_code, set_tax_code) = signal(String::new());

    let fill_form = move |p: &SellerProfile| {
        set_store_name.set(p.store_name.clone());
        set_description.set(p.description.clone());
        set_contact_email.set(p.contact_email.clone());
        set_contact_phone.set(p.contact_phone.clone());
        set_tax_code.set(p.tax_code.clone());
    };

    let load = move || {
        let api = auth_ctx.api();
        spawn_local(async move {
            match api.my_seller_profile().await {
                Ok(found) => {
                    if let Some(p) = &found {
                        fill_form(p);
                    }
                    set_profile.set(found);
                }
                Err(e) => {
                    web_sys::console::error_1(&format!("[Seller] {e}").into());
                    toast.error(e.user_message());
                }
            }
            set_loading.set(false);
        });
    };
    load();

    let status = move || profile.get().map(|p| p.status);
    let editable = move || status().is_none_or(|s| s.is_editable());

    let validate = move || -> Option<String> {
        if store_name.get().trim().is_empty() {
            return Some("Vui lòng nhập tên cửa hàng".to_string());
        }
        if !is_valid_email(&contact_email.get()) {
            return Some("Email liên hệ không hợp lệ".to_string());
        }
        if !is_valid_phone(contact_phone.get().trim()) {
            return Some("Số điện thoại liên hệ không hợp lệ".to_string());
        }
        if tax_code.get().trim().is_empty() {
            return Some("Vui lòng nhập mã số thuế".to_string());
        }
        None
    };

    let on_submit = move |ev: leptos::web_sys::SubmitEvent| {
        ev.prevent_default();
        if let Some(msg) = validate() {
            toast.error(msg);
            return;
        }

        set_saving.set(true);
        let api = auth_ctx.api();
        let payload = SellerPayload {
            store_name: store_name.get_untracked().trim().to_string(),
            description: description.get_untracked().trim().to_string(),
            logo_url: None,
            contact_email: contact_email.get_untracked().trim().to_string(),
            contact_phone: contact_phone.get_untracked().trim().to_string(),
            tax_code: tax_code.get_untracked().trim().to_string(),
        };
        let exists = profile.get_untracked().is_some();
        spawn_local(async move {
            let result = if exists {
                api.update_seller(&payload).await
            } else {
                api.execute(&payload).await.map(|_| ())
            };
            match result {
                Ok(()) => {
                    toast.success("Đã lưu hồ sơ cửa hàng");
                    load();
                }
                Err(e) => {
                    web_sys::console::error_1(&format!("[Seller] {e}").into());
                    toast.error(e.user_message());
                }
            }
            set_saving.set(false);
        });
    };

    let submit_for_review = move |_| {
        set_submitting.set(true);
        let api = auth_ctx.api();
        spawn_local(async move {
            match api.submit_seller().await {
                Ok(()) => {
                    toast.success("Đã gửi hồ sơ chờ duyệt");
                    load();
                }
                Err(e) => {
                    web_sys::console::error_1(&format!("[Seller] {e}").into());
                    toast.error(e.user_message());
                }
            }
            set_submitting.set(false);
        });
    };

    view! {
        <div class="max-w-3xl mx-auto p-4 md:p-8">
            <ProfileNav />
            <div class="card bg-base-100 shadow">
                <div class="card-body gap-4">
                    <h1 class="card-title">"Kênh người bán"</h1>

                    <Show
                        when=move || !loading.get()
                        fallback=|| view! { <span class="loading loading-spinner text-primary"></span> }
                    >
                        {move || profile.get().map(|p| {
                            let status_val = p.status;
                            let rejection = p.rejection_reason;
                            view! {
                                <div class="flex items-center gap-3">
                                    <span class=status_val.badge_class()>{status_val.label()}</span>
                                    <Show when=move || status_val == SellerStatus::Pending>
                                        <span class="text-sm text-base-content/60">
                                            "Hồ sơ của bạn đang được xét duyệt."
                                        </span>
                                    </Show>
                                </div>
                                {rejection.filter(|_| status_val == SellerStatus::Rejected).map(|reason| view! {
                                    <div role="alert" class="alert alert-error text-sm">
                                        <span>{format!("Lý do từ chối: {reason}")}</span>
                                    </div>
                                })}
                            }
                        })}

                        <form class="space-y-4" on:submit=on_submit>
                            <div class="form-control">
                                <label class="label" for="seller_name">
                                    <span class="label-text">"Tên cửa hàng"</span>
                                </label>
                                <input id="seller_name" type="text" class="input input-bordered"
                                    prop:value=store_name
                                    on:input=move |ev| set_store_name.set(event_target_value(&ev))
                                    disabled=move || !editable()
                                    required
                                />
                            </div>
                            <div class="form-control">
                                <label class="label" for="seller_desc">
                                    <span class="label-text">"Mô tả cửa hàng"</span>
                                </label>
                                <textarea id="seller_desc" class="textarea textarea-bordered" rows="3"
                                    prop:value=description
                                    on:input=move |ev| set_description.set(event_target_value(&ev))
                                    disabled=move || !editable()
                                ></textarea>
                            </div>
                            <div class="grid grid-cols-2 gap-4">
                                <div class="form-control">
                                    <label class="label" for="seller_email">
                                        <span class="label-text">"Email liên hệ"</span>
                                    </label>
                                    <input id="seller_email" type="email" class="input input-bordered"
                                        prop:value=contact_email
                                        on:input=move |ev| set_contact_email.set(event_target_value(&ev))
                                        disabled=move || !editable()
                                        required
                                    />
                                </div>
                                <div class="form-control">
                                    <label class="label" for="seller_phone">
                                        <span class="label-text">"Số điện thoại liên hệ"</span>
                                    </label>
                                    <input id="seller_phone" type="tel" class="input input-bordered"
                                        prop:value=contact_phone
                                        on:input=move |ev| set_contact_phone.set(event_target_value(&ev))
                                        disabled=move || !editable()
                                        required
                                    />
                                </div>
                            </div>
                            <div class="form-control">
                                <label class="label" for="seller_tax">
                                    <span class="label-text">"Mã số thuế"</span>
                                </label>
                                <input id="seller_tax" type="text" class="input input-bordered"
                                    prop:value=tax_code
                                    on:input=move |ev| set_tax_code.set(event_target_value(&ev))
                                    disabled=move || !editable()
                                    required
                                />
                            </div>

                            <Show when=editable>
                                <div class="flex gap-2">
                                    <button class="btn btn-primary" disabled=move || saving.get()>
                                        {move || if saving.get() {
                                            view! { <span class="loading loading-spinner"></span> "Đang lưu..." }.into_any()
                                        } else if profile.with(Option::is_some) {
                                            "Lưu hồ sơ".into_any()
                                        } else {
                                            "Tạo hồ sơ".into_any()
                                        }}
                                    </button>
                                    <Show when=move || profile.with(Option::is_some)>
                                        <button
                                            type="button"
                                            class="btn btn-outline"
                                            disabled=move || submitting.get()
                                            on:click=submit_for_review
                                        >
                                            {move || if submitting.get() {
                                                view! { <span class="loading loading-spinner"></span> }.into_any()
                                            } else {
                                                "Gửi duyệt".into_any()
                                            }}
                                        </button>
                                    </Show>
                                </div>
                            </Show>
                        </form>
                    </Show>
                </div>
            </div>
        </div>
    }
}
