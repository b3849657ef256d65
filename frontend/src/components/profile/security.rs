//! Security tab: password change with the strength meter, plus the login
//! history table.

use crate::auth::use_auth;
use crate::components::profile::nav::ProfileNav;
use crate::format::format_date_time;
use crate::toast::use_toast;
use crate::validate::{password_strength, strength_class, strength_label};
use hustbuy_shared::protocol::ChangePasswordRequest;
use hustbuy_shared::{LoginHistoryEntry, Page};
use leptos::prelude::*;
use leptos::task::spawn_local;

const HISTORY_PAGE_SIZE: u32 = 10;

#[component]
pub fn SecurityPage() -> impl IntoView {
    let auth_ctx = use_auth();
    let toast = use_toast();

    let (old_password, set_old_password) = signal(String::new());
    let (new_password, set_new_password) = signal(String::new());
    let (confirm, set_confirm) = signal(String::new());
    let (saving, set_saving) = signal(false);

    let (history, set_history) = signal(Page::<LoginHistoryEntry>::empty());
    let (history_page, set_history_page) = signal(0u32);
    let (history_loading, set_history_loading) = signal(true);

    let score = move || password_strength(&new_password.get());

    Effect::new(move |_| {
        let page = history_page.get();
        let api = auth_ctx.api();
        set_history_loading.set(true);
        spawn_local(async move {
            match api.login_history(page, HISTORY_PAGE_SIZE).await {
                Ok(data) => set_history.set(data),
                Err(e) => {
                    web_sys::console::error_1(&format!("[Security] {e}").into());
                    toast.error(e.user_message());
                }
            }
            set_history_loading.set(false);
        });
    });

    let on_submit = move |ev: leptos::web_sys::SubmitEvent| {
        ev.prevent_default();
        if old_password.get().is_empty() {
            toast.error("Vui lòng nhập mật khẩu hiện tại");
            return;
        }
        if score() < 40 {
            toast.error("Mật khẩu mới quá yếu");
            return;
        }
        if new_password.get() != confirm.get() {
            toast.error("Mật khẩu nhập lại không khớp");
            return;
        }

        set_saving.set(true);
        let api = auth_ctx.api();
        let request = ChangePasswordRequest {
            old_password: old_password.get_untracked(),
            new_password: new_password.get_untracked(),
        };
        spawn_local(async move {
            match api.change_password(&request).await {
                Ok(()) => {
                    toast.success("Đã đổi mật khẩu");
                    set_old_password.set(String::new());
                    set_new_password.set(String::new());
                    set_confirm.set(String::new());
                }
                Err(e) => {
                    web_sys::console::error_1(&format!("[Security] {e}").into());
                    toast.error(e.user_message());
                }
            }
            set_saving.set(false);
        });
    };

    view! {
        <div class="max-w-3xl mx-auto p-4 md:p-8 space-y-4">
            <ProfileNav />
            <div class="card bg-base-100 shadow">
                <div class="card-body">
                    <h1 class="card-title">"Đổi mật khẩu"</h1>
                    <form class="space-y-4 max-w-md" on:submit=on_submit>
                        <div class="form-control">
                            <label class="label" for="sec_old">
                                <span class="label-text">"Mật khẩu hiện tại"</span>
                            </label>
                            <input id="sec_old" type="password" class="input input-bordered"
                                prop:value=old_password
                                on:input=move |ev| set_old_password.set(event_target_value(&ev))
                                required
                            />
                        </div>
                        <div class="form-control">
                            <label class="label" for="sec_new">
                                <span class="label-text">"Mật khẩu mới"</span>
                            </label>
                            <input id="sec_new" type="password" class="input input-bordered"
                                prop:value=new_password
                                on:input=move |ev| set_new_password.set(event_target_value(&ev))
                                required
                            />
                            <Show when=move || !new_password.get().is_empty()>
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
                            <label class="label" for="sec_confirm">
                                <span class="label-text">"Nhập lại mật khẩu mới"</span>
                            </label>
                            <input id="sec_confirm" type="password" class="input input-bordered"
                                prop:value=confirm
                                on:input=move |ev| set_confirm.set(event_target_value(&ev))
                                required
                            />
                        </div>
                        <button class="btn btn-primary" disabled=move || saving.get()>
                            {move || if saving.get() {
                                view! { <span class="loading loading-spinner"></span> "Đang lưu..." }.into_any()
                            } else {
                                "Đổi mật khẩu".into_any()
                            }}
                        </button>
                    </form>
                </div>
            </div>

            <div class="card bg-base-100 shadow">
                <div class="card-body">
                    <h2 class="card-title">"Lịch sử đăng nhập"</h2>
                    <Show
                        when=move || !history_loading.get()
                        fallback=|| view! { <span class="loading loading-spinner text-primary"></span> }
                    >
                        <div class="overflow-x-auto">
                            <table class="table table-sm">
                                <thead>
                                    <tr>
                                        <th>"Thời gian"</th>
                                        <th>"Địa chỉ IP"</th>
                                        <th>"Thiết bị"</th>
                                        <th>"Kết quả"</th>
                                    </tr>
                                </thead>
                                <tbody>
                                    <For
                                        each=move || history.get().items
                                        key=|entry| (entry.timestamp, entry.ip_address.clone())
                                        children=|entry| {
                                            view! {
                                                <tr>
                                                    <td>{format_date_time(&entry.timestamp)}</td>
                                                    <td>{entry.ip_address.clone()}</td>
                                                    <td>{entry.device.clone()}</td>
                                                    <td>
                                                        {if entry.success {
                                                            view! { <span class="badge badge-success badge-sm">"Thành công"</span> }.into_any()
                                                        } else {
                                                            view! { <span class="badge badge-error badge-sm">"Thất bại"</span> }.into_any()
                                                        }}
                                                    </td>
                                                </tr>
                                            }
                                        }
                                    />
                                </tbody>
                            </table>
                        </div>
                        <div class="flex justify-center mt-2">
                            <div class="join">
                                <button
                                    class="join-item btn btn-sm"
                                    disabled=move || !history.with(Page::has_prev)
                                    on:click=move |_| set_history_page.update(|p| *p = p.saturating_sub(1))
                                >
                                    "«"
                                </button>
                                <button class="join-item btn btn-sm">
                                    {move || history.with(|h| format!("Trang {} / {}", h.page + 1, h.total_pages.max(1)))}
                                </button>
                                <button
                                    class="join-item btn btn-sm"
                                    disabled=move || !history.with(Page::has_next)
                                    on:click=move |_| set_history_page.update(|p| *p += 1)
                                >
                                    "»"
                                </button>
                            </div>
                        </div>
                    </Show>
                </div>
            </div>
        </div>
    }
}
