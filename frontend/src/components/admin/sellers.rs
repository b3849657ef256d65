//! Admin seller verification.
//!
//! Status-filtered table of seller applications; one dialog shows the full
//! profile with approve and reject actions. Rejection requires a reason,
//! which is sent to the applicant.

use crate::auth::use_auth;
use crate::toast::use_toast;
use hustbuy_shared::protocol::{RejectSellerRequest, SellerListQuery};
use hustbuy_shared::{Page, SellerProfile, SellerStatus};
use leptos::prelude::*;
use leptos::task::spawn_local;

const PAGE_SIZE: u32 = 20;

#[component]
pub fn AdminSellersPage() -> impl IntoView {
    let auth_ctx = use_auth();
    let toast = use_toast();

    let (status, set_status) = signal(Option::<SellerStatus>::None);
    let (page, set_page) = signal(0u32);
    let (sellers, set_sellers) = signal(Page::<SellerProfile>::empty());
    let (loading, set_loading) = signal(true);
    let (reload, set_reload) = signal(0u32);

    let (selected, set_selected) = signal(Option::<SellerProfile>::None);
    let (reject_reason, set_reject_reason) = signal(String::new());
    let (acting, set_acting) = signal(false);
    let dialog_ref = NodeRef::<leptos::html::Dialog>::new();

    Effect::new(move |_| {
        reload.track();
        let query = SellerListQuery {
            page: page.get(),
            size: PAGE_SIZE,
            status: status.get(),
        };
        let api = auth_ctx.api();
        set_loading.set(true);
        spawn_local(async move {
            match api.list_sellers(&query).await {
                Ok(data) => set_sellers.set(data),
                Err(e) => {
                    web_sys::console::error_1(&format!("[AdminSellers] {e}").into());
                    toast.error(e.user_message());
                }
            }
            set_loading.set(false);
        });
    });

    Effect::new(move |_| {
        if let Some(dialog) = dialog_ref.get() {
            if selected.get().is_some() {
                if !dialog.open() {
                    let _ = dialog.show_modal();
                }
            } else if dialog.open() {
                dialog.close();
            }
        }
    });

    let select_status = move |value: Option<SellerStatus>| {
        set_page.set(0);
        set_status.set(value);
    };

    let open_detail = move |seller: SellerProfile| {
        set_reject_reason.set(String::new());
        set_selected.set(Some(seller));
    };

    let approve = move |_| {
        let Some(id) = selected.get_untracked().map(|s| s.id) else {
            return;
        };
        set_acting.set(true);
        let api = auth_ctx.api();
        spawn_local(async move {
            match api.approve_seller(id).await {
                Ok(()) => {
                    toast.success("Đã duyệt hồ sơ người bán");
                    set_selected.set(None);
                    set_reload.update(|n| *n += 1);
                }
                Err(e) => {
                    web_sys::console::error_1(&format!("[AdminSellers] {e}").into());
                    toast.error(e.user_message());
                }
            }
            set_acting.set(false);
        });
    };

    let reject = move |_| {
        let Some(id) = selected.get_untracked().map(|s| s.id) else {
            return;
        };
        let reason = reject_reason.get_untracked().trim().to_string();
        if reason.is_empty() {
            toast.error("Vui lòng nhập lý do từ chối");
            return;
        }
        set_acting.set(true);
        let api = auth_ctx.api();
        spawn_local(async move {
            match api.reject_seller(id, &RejectSellerRequest { reason }).await {
                Ok(()) => {
                    toast.success("Đã từ chối hồ sơ người bán");
                    set_selected.set(None);
                    set_reload.update(|n| *n += 1);
                }
                Err(e) => {
                    web_sys::console::error_1(&format!("[AdminSellers] {e}").into());
                    toast.error(e.user_message());
                }
            }
            set_acting.set(false);
        });
    };

    // Actions only make sense for applications still waiting for review.
    let selected_is_pending = move || {
        selected.with(|s| {
            s.as_ref()
                .is_some_and(|p| p.status == SellerStatus::Pending)
        })
    };

    view! {
        <div class="max-w-5xl mx-auto p-4 md:p-8">
            <div class="card bg-base-100 shadow">
                <div class="card-body gap-4">
                    <h1 class="card-title">"Duyệt người bán"</h1>

                    <div role="tablist" class="tabs tabs-boxed overflow-x-auto">
                        <a
                            role="tab"
                            class=move || if status.get().is_none() { "tab tab-active" } else { "tab" }
                            on:click=move |_| select_status(None)
                        >
                            "Tất cả"
                        </a>
                        <For
                            each=move || SellerStatus::ALL
                            key=|s| s.as_query()
                            children=move |s| {
                                view! {
                                    <a
                                        role="tab"
                                        class=move || if status.get() == Some(s) { "tab tab-active" } else { "tab" }
                                        on:click=move |_| select_status(Some(s))
                                    >
                                        {s.label()}
                                    </a>
                                }
                            }
                        />
                    </div>

                    <Show when=move || loading.get()>
                        <div class="text-center py-8">
                            <span class="loading loading-spinner text-primary"></span>
                        </div>
                    </Show>

                    <Show when=move || !loading.get() && sellers.with(|s| s.items.is_empty())>
                        <p class="text-base-content/60 py-8 text-center">"Không có hồ sơ nào."</p>
                    </Show>

                    <div class="overflow-x-auto">
                        <table class="table">
                            <thead>
                                <tr>
                                    <th>"Cửa hàng"</th>
                                    <th>"Email"</th>
                                    <th>"Mã số thuế"</th>
                                    <th>"Trạng thái"</th>
                                    <th></th>
                                </tr>
                            </thead>
                            <tbody>
                                <For
                                    each=move || sellers.get().items
                                    key=|seller| (seller.id, seller.status)
                                    children=move |seller| {
                                        let seller_for_detail = seller.clone();
                                        view! {
                                            <tr>
                                                <td class="font-semibold">{seller.store_name.clone()}</td>
                                                <td>{seller.contact_email.clone()}</td>
                                                <td>{seller.tax_code.clone()}</td>
                                                <td><span class=seller.status.badge_class()>{seller.status.label()}</span></td>
                                                <td>
                                                    <button
                                                        class="btn btn-ghost btn-xs"
                                                        on:click=move |_| open_detail(seller_for_detail.clone())
                                                    >
                                                        "Chi tiết"
                                                    </button>
                                                </td>
                                            </tr>
                                        }
                                    }
                                />
                            </tbody>
                        </table>
                    </div>

                    <div class="flex justify-center">
                        <div class="join">
                            <button
                                class="join-item btn btn-sm"
                                disabled=move || !sellers.with(Page::has_prev)
                                on:click=move |_| set_page.update(|p| *p = p.saturating_sub(1))
                            >
                                "«"
                            </button>
                            <button class="join-item btn btn-sm">
                                {move || sellers.with(|s| format!("Trang {} / {}", s.page + 1, s.total_pages.max(1)))}
                            </button>
                            <button
                                class="join-item btn btn-sm"
                                disabled=move || !sellers.with(Page::has_next)
                                on:click=move |_| set_page.update(|p| *p += 1)
                            >
                                "»"
                            </button>
                        </div>
                    </div>
                </div>
            </div>

            <dialog class="modal" node_ref=dialog_ref on:close=move |_| set_selected.set(None)>
                <div class="modal-box">
                    {move || selected.get().map(|seller| {
                        let status_val = seller.status;
                        let rejection = seller.rejection_reason;
                        view! {
                            <h3 class="font-bold text-lg">{seller.store_name}</h3>
                            <div class="mt-2">
                                <span class=status_val.badge_class()>{status_val.label()}</span>
                            </div>
                            <div class="space-y-1 mt-4 text-sm">
                                <p><span class="text-base-content/60">"Email: "</span>{seller.contact_email}</p>
                                <p><span class="text-base-content/60">"Điện thoại: "</span>{seller.contact_phone}</p>
                                <p><span class="text-base-content/60">"Mã số thuế: "</span>{seller.tax_code}</p>
                                <p><span class="text-base-content/60">"Mô tả: "</span>{seller.description}</p>
                                {rejection.map(|reason| view! {
                                    <p class="text-error">{format!("Lý do từ chối trước đó: {reason}")}</p>
                                })}
                            </div>
                        }
                    })}

                    <Show when=selected_is_pending>
                        <div class="form-control mt-4">
                            <label class="label" for="reject_reason">
                                <span class="label-text">"Lý do từ chối"</span>
                            </label>
                            <textarea id="reject_reason" class="textarea textarea-bordered" rows="2"
                                prop:value=reject_reason
                                on:input=move |ev| set_reject_reason.set(event_target_value(&ev))
                            ></textarea>
                        </div>
                        <div class="modal-action">
                            <button class="btn btn-error btn-outline" disabled=move || acting.get() on:click=reject>
                                "Từ chối"
                            </button>
                            <button class="btn btn-success" disabled=move || acting.get() on:click=approve>
                                {move || if acting.get() {
                                    view! { <span class="loading loading-spinner"></span> }.into_any()
                                } else {
                                    "Duyệt".into_any()
                                }}
                            </button>
                        </div>
                    </Show>
                    <Show when=move || !selected_is_pending()>
                        <div class="modal-action">
                            <button class="btn btn-ghost" on:click=move |_| set_selected.set(None)>
                                "Đóng"
                            </button>
                        </div>
                    </Show>
                </div>
                <form method="dialog" class="modal-backdrop">
                    <button>"close"</button>
                </form>
            </dialog>
        </div>
    }
}
