//! Order history tab: status tabs, date and amount filters, pagination and
//! cancellation of not-yet-confirmed orders.

use crate::auth::use_auth;
use crate::components::profile::nav::ProfileNav;
use crate::format::{format_currency, format_date_time};
use crate::toast::use_toast;
use chrono::NaiveDate;
use hustbuy_shared::protocol::OrderListQuery;
use hustbuy_shared::{Order, OrderStatus, Page};
use leptos::prelude::*;
use leptos::task::spawn_local;

const PAGE_SIZE: u32 = 10;

#[component]
pub fn OrdersPage() -> impl IntoView {
    let auth_ctx = use_auth();
    let toast = use_toast();

    let (status, set_status) = signal(Option::<OrderStatus>::None);
    let (from_date, set_from_date) = signal(String::new());
    let (to_date, set_to_date) = signal(String::new());
    let (min_amount, set_min_amount) = signal(String::new());
    let (max_amount, set_max_amount) = signal(String::new());
    let (page, set_page) = signal(0u32);
    let (orders, set_orders) = signal(Page::<Order>::empty());
    let (loading, set_loading) = signal(true);
    // Bumped after a mutation to re-run the list effect with unchanged
    // filters.
    let (reload, set_reload) = signal(0u32);

    // Amount inputs are free text; unparseable values mean "no filter".
    let query = move || OrderListQuery {
        page: page.get(),
        size: PAGE_SIZE,
        status: status.get(),
        from_date: NaiveDate::parse_from_str(&from_date.get(), "%Y-%m-%d").ok(),
        to_date: NaiveDate::parse_from_str(&to_date.get(), "%Y-%m-%d").ok(),
        min_amount: min_amount.get().trim().parse().ok(),
        max_amount: max_amount.get().trim().parse().ok(),
    };

    Effect::new(move |_| {
        reload.track();
        let query = query();
        let api = auth_ctx.api();
        set_loading.set(true);
        spawn_local(async move {
            match api.list_orders(&query).await {
                Ok(data) => set_orders.set(data),
                Err(e) => {
                    web_sys::console::error_1(&format!("[Orders] {e}").into());
                    toast.error(e.user_message());
                }
            }
            set_loading.set(false);
        });
    });

    let select_status = move |value: Option<OrderStatus>| {
        set_page.set(0);
        set_status.set(value);
    };

    let cancel = move |id: u64| {
        let api = auth_ctx.api();
        spawn_local(async move {
            match api.cancel_order(id).await {
                Ok(()) => {
                    toast.success("Đã hủy đơn hàng");
                    set_reload.update(|n| *n += 1);
                }
                Err(e) => {
                    web_sys::console::error_1(&format!("[Orders] {e}").into());
                    toast.error(e.user_message());
                }
            }
        });
    };

    view! {
        <div class="max-w-4xl mx-auto p-4 md:p-8">
            <ProfileNav />
            <div class="card bg-base-100 shadow">
                <div class="card-body gap-4">
                    <h1 class="card-title">"Đơn hàng của tôi"</h1>

                    <div role="tablist" class="tabs tabs-boxed overflow-x-auto">
                        <a
                            role="tab"
                            class=move || if status.get().is_none() { "tab tab-active" } else { "tab" }
                            on:click=move |_| select_status(None)
                        >
                            "Tất cả"
                        </a>
                        <For
                            each=move || OrderStatus::ALL
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

                    <div class="grid grid-cols-2 md:grid-cols-4 gap-3">
                        <div class="form-control">
                            <label class="label" for="orders_from">
                                <span class="label-text text-xs">"Từ ngày"</span>
                            </label>
                            <input id="orders_from" type="date" class="input input-bordered input-sm"
                                prop:value=from_date
                                on:input=move |ev| { set_page.set(0); set_from_date.set(event_target_value(&ev)); }
                            />
                        </div>
                        <div class="form-control">
                            <label class="label" for="orders_to">
                                <span class="label-text text-xs">"Đến ngày"</span>
                            </label>
                            <input id="orders_to" type="date" class="input input-bordered input-sm"
                                prop:value=to_date
                                on:input=move |ev| { set_page.set(0); set_to_date.set(event_target_value(&ev)); }
                            />
                        </div>
                        <div class="form-control">
                            <label class="label" for="orders_min">
                                <span class="label-text text-xs">"Giá trị từ (₫)"</span>
                            </label>
                            <input id="orders_min" type="number" class="input input-bordered input-sm"
                                prop:value=min_amount
                                on:input=move |ev| { set_page.set(0); set_min_amount.set(event_target_value(&ev)); }
                            />
                        </div>
                        <div class="form-control">
                            <label class="label" for="orders_max">
                                <span class="label-text text-xs">"Đến (₫)"</span>
                            </label>
                            <input id="orders_max" type="number" class="input input-bordered input-sm"
                                prop:value=max_amount
                                on:input=move |ev| { set_page.set(0); set_max_amount.set(event_target_value(&ev)); }
                            />
                        </div>
                    </div>

                    <Show when=move || loading.get()>
                        <div class="text-center py-8">
                            <span class="loading loading-spinner text-primary"></span>
                        </div>
                    </Show>

                    <Show when=move || !loading.get() && orders.with(|o| o.items.is_empty())>
                        <p class="text-base-content/60 py-8 text-center">"Không có đơn hàng nào."</p>
                    </Show>

                    <For
                        each=move || orders.get().items
                        key=|order| (order.id, order.status)
                        children=move |order| {
                            let Order { id, code, status, payment_status, items, total, created_at, .. } = order;
                            view! {
                                <div class="border border-base-200 rounded-lg p-4 space-y-2">
                                    <div class="flex items-center justify-between flex-wrap gap-2">
                                        <div class="flex items-center gap-2">
                                            <span class="font-semibold">{code}</span>
                                            <span class=status.badge_class()>{status.label()}</span>
                                            <span class=payment_status.badge_class()>{payment_status.label()}</span>
                                        </div>
                                        <span class="text-xs text-base-content/60">
                                            {format_date_time(&created_at)}
                                        </span>
                                    </div>
                                    {items
                                        .into_iter()
                                        .map(|item| {
                                            view! {
                                                <div class="flex justify-between text-sm border-t border-base-200 pt-2">
                                                    <div>
                                                        <span>{item.product_name}</span>
                                                        {item.variant_label.map(|l| view! {
                                                            <span class="text-base-content/60">{format!(" ({l})")}</span>
                                                        })}
                                                        <span class="text-base-content/60">{format!(" x{}", item.quantity)}</span>
                                                    </div>
                                                    <span>{format_currency(item.unit_price * i64::from(item.quantity))}</span>
                                                </div>
                                            }
                                        })
                                        .collect_view()}
                                    <div class="flex items-center justify-between border-t border-base-200 pt-2">
                                        <Show when=move || status.is_cancellable() fallback=|| view! { <span></span> }>
                                            <button class="btn btn-outline btn-error btn-xs" on:click=move |_| cancel(id)>
                                                "Hủy đơn"
                                            </button>
                                        </Show>
                                        <div class="font-bold">
                                            "Tổng: " <span class="text-primary">{format_currency(total)}</span>
                                        </div>
                                    </div>
                                </div>
                            }
                        }
                    />

                    <div class="flex justify-center">
                        <div class="join">
                            <button
                                class="join-item btn btn-sm"
                                disabled=move || !orders.with(Page::has_prev)
                                on:click=move |_| set_page.update(|p| *p = p.saturating_sub(1))
                            >
                                "«"
                            </button>
                            <button class="join-item btn btn-sm">
                                {move || orders.with(|o| format!("Trang {} / {}", o.page + 1, o.total_pages.max(1)))}
                            </button>
                            <button
                                class="join-item btn btn-sm"
                                disabled=move || !orders.with(Page::has_next)
                                on:click=move |_| set_page.update(|p| *p += 1)
                            >
                                "»"
                            </button>
                        </div>
                    </div>
                </div>
            </div>
        </div>
    }
}
