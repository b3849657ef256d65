//! Account information tab.

use crate::auth::{set_current_user, use_auth};
use crate::components::profile::nav::ProfileNav;
use crate::toast::use_toast;
use crate::validate::is_valid_phone;
use chrono::NaiveDate;
use hustbuy_shared::UserProfile;
use hustbuy_shared::protocol::UpdateProfileRequest;
use leptos::prelude::*;
use leptos::task::spawn_local;

#[component]
pub fn ProfileGeneralPage() -> impl IntoView {
    let auth_ctx = use_auth();
    let toast = use_toast();

    let (full_name, set_full_name) = signal(String::new());
    let (email, set_email) = signal(String::new());
    let (phone, set_phone) = signal(String::new());
    let (date_of_birth, set_date_of_birth) = signal(String::new());
    let (gender, set_gender) = signal(String::new());
    let (loading, set_loading) = signal(true);
    let (saving, set_saving) = signal(false);

    let fill_form = move |user: &UserProfile| {
        set_full_name.set(user.full_name.clone());
        set_email.set(user.email.clone());
        set_phone.set(user.phone.clone().unwrap_or_default());
        set_date_of_birth.set(
            user.date_of_birth
                .map(|d| d.format("%Y-%m-%d").to_string())
                .unwrap_or_default(),
        );
        set_gender.set(user.gender.clone().unwrap_or_default());
    };

    // The cached profile may be stale after edits in another tab; always
    // refetch on entry.
    {
        let api = auth_ctx.api();
        spawn_local(async move {
            match api.me().await {
                Ok(user) => {
                    fill_form(&user);
                    set_current_user(&auth_ctx, user);
                }
                Err(e) => {
                    web_sys::console::error_1(&format!("[Profile] {e}").into());
                    toast.error(e.user_message());
                }
            }
            set_loading.set(false);
        });
    }

    let on_submit = move |ev: leptos::web_sys::SubmitEvent| {
        ev.prevent_default();
        if full_name.get().trim().is_empty() {
            toast.error("Vui lòng nhập họ tên");
            return;
        }
        let phone_value = phone.get().trim().to_string();
        if !phone_value.is_empty() && !is_valid_phone(&phone_value) {
            toast.error("Số điện thoại không hợp lệ");
            return;
        }

        set_saving.set(true);
        let api = auth_ctx.api();
        let request = UpdateProfileRequest {
            full_name: full_name.get_untracked().trim().to_string(),
            phone: (!phone_value.is_empty()).then_some(phone_value),
            avatar_url: None,
            date_of_birth: NaiveDate::parse_from_str(&date_of_birth.get_untracked(), "%Y-%m-%d")
                .ok(),
            gender: {
                let g = gender.get_untracked();
                (!g.is_empty()).then_some(g)
            },
        };
        spawn_local(async move {
            match api.execute(&request).await {
                Ok(user) => {
                    fill_form(&user);
                    set_current_user(&auth_ctx, user);
                    toast.success("Đã cập nhật thông tin");
                }
                Err(e) => {
                    web_sys::console::error_1(&format!("[Profile] {e}").into());
                    toast.error(e.user_message());
                }
            }
            set_saving.set(false);
        });
    };

    view! {
        <div class="max-w-3xl mx-auto p-4 md:p-8">
            <ProfileNav />
            <div class="card bg-base-100 shadow">
                <div class="card-body">
                    <h1 class="card-title">"Thông tin tài khoản"</h1>
                    <Show
                        when=move || !loading.get()
                        fallback=|| view! { <span class="loading loading-spinner text-primary"></span> }
                    >
                        <form class="space-y-4" on:submit=on_submit>
                            <div class="form-control">
                                <label class="label" for="profile_name">
                                    <span class="label-text">"Họ và tên"</span>
                                </label>
                                <input
                                    id="profile_name"
                                    type="text"
                                    class="input input-bordered"
                                    prop:value=full_name
                                    on:input=move |ev| set_full_name.set(event_target_value(&ev))
                                />
                            </div>
                            <div class="form-control">
                                <label class="label" for="profile_email">
                                    <span class="label-text">"Email"</span>
                                </label>
                                <input
                                    id="profile_email"
                                    type="email"
                                    class="input input-bordered"
                                    prop:value=email
                                    disabled
                                />
                            </div>
                            <div class="form-control">
                                <label class="label" for="profile_phone">
                                    <span class="label-text">"Số điện thoại"</span>
                                </label>
                                <input
                                    id="profile_phone"
                                    type="tel"
                                    class="input input-bordered"
                                    prop:value=phone
                                    on:input=move |ev| set_phone.set(event_target_value(&ev))
                                />
                            </div>
                            <div class="grid grid-cols-2 gap-4">
                                <div class="form-control">
                                    <label class="label" for="profile_dob">
                                        <span class="label-text">"Ngày sinh"</span>
                                    </label>
                                    <input
                                        id="profile_dob"
                                        type="date"
                                        class="input input-bordered"
                                        prop:value=date_of_birth
                                        on:input=move |ev| set_date_of_birth.set(event_target_value(&ev))
                                    />
                                </div>
                                <div class="form-control">
                                    <label class="label" for="profile_gender">
                                        <span class="label-text">"Giới tính"</span>
                                    </label>
                                    <select
                                        id="profile_gender"
                                        class="select select-bordered"
                                        prop:value=gender
                                        on:change=move |ev| set_gender.set(event_target_value(&ev))
                                    >
                                        <option value="">"Không chia sẻ"</option>
                                        <option value="MALE">"Nam"</option>
                                        <option value="FEMALE">"Nữ"</option>
                                        <option value="OTHER">"Khác"</option>
                                    </select>
                                </div>
                            </div>
                            <button class="btn btn-primary" disabled=move || saving.get()>
                                {move || if saving.get() {
                                    view! { <span class="loading loading-spinner"></span> "Đang lưu..." }.into_any()
                                } else {
                                    "Lưu thay đổi".into_any()
                                }}
                            </button>
                        </form>
                    </Show>
                </div>
            </div>
        </div>
    }
}
