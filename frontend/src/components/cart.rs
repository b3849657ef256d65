//! Cart page: store-grouped lines, mock vouchers and the checkout handoff.
//!
//! Vouchers are client-held demo objects; only the discount math is real.
//! Checkout writes the `pendingOrders` snapshot and hands off to the
//! payment-result page.

use crate::auth::use_auth;
use crate::cart_logic::{group_by_store, summarize, voucher_discount, StoreGroup};
use crate::cart_state::use_cart;
use crate::format::format_currency;
use crate::toast::use_toast;
use crate::web::SessionStorage;
use crate::web::router::use_router;
use hustbuy_shared::{
    CartItem, PendingCheckout, PendingLine, STORAGE_KEY_PENDING_ORDERS, Voucher, VoucherKind,
    VoucherScope,
};
use leptos::prelude::*;
use leptos::task::spawn_local;
use std::collections::{HashMap, HashSet};

/// Demo platform vouchers offered to every cart.
fn platform_vouchers() -> Vec<Voucher> {
    vec![
        Voucher {
            code: "HUSTBUY50".to_string(),
            scope: VoucherScope::Platform,
            kind: VoucherKind::Fixed(50_000),
            min_order: 2_000_000,
            description: "Giảm 50.000 ₫ cho đơn từ 2.000.000 ₫".to_string(),
        },
        Voucher {
            code: "HUSTBUY10".to_string(),
            scope: VoucherScope::Platform,
            kind: VoucherKind::Percent {
                percent: 10,
                max_discount: 100_000,
            },
            min_order: 500_000,
            description: "Giảm 10% tối đa 100.000 ₫ cho đơn từ 500.000 ₫".to_string(),
        },
    ]
}

/// Demo store voucher; one per store, scoped to that store's lines.
fn store_voucher_for(store_id: u64) -> Voucher {
    Voucher {
        code: format!("SHOP{store_id}"),
        scope: VoucherScope::Store(store_id),
        kind: VoucherKind::Fixed(20_000),
        min_order: 300_000,
        description: "Giảm 20.000 ₫ cho đơn từ 300.000 ₫ của shop".to_string(),
    }
}

#[component]
pub fn CartPage() -> impl IntoView {
    let auth_ctx = use_auth();
    let cart_ctx = use_cart();
    let toast = use_toast();
    let router = use_router();

    let (items, set_items) = signal(Vec::<CartItem>::new());
    let (loading, set_loading) = signal(true);
    let (selected, set_selected) = signal(HashSet::<u64>::new());
    let (store_vouchers, set_store_vouchers) = signal(HashMap::<u64, Voucher>::new());
    let (platform_voucher, set_platform_voucher) = signal(Option::<Voucher>::None);

    let load = move || {
        let api = auth_ctx.api();
        spawn_local(async move {
            match api.list_cart().await {
                Ok(list) => {
                    // Drop selections for lines that no longer exist.
                    let ids: HashSet<u64> = list.iter().map(|i| i.id).collect();
                    set_selected.update(|sel| sel.retain(|id| ids.contains(id)));
                    set_items.set(list);
                }
                Err(e) => {
                    web_sys::console::error_1(&format!("[Cart] {e}").into());
                    toast.error(e.user_message());
                }
            }
            set_loading.set(false);
        });
    };
    load();

    let summary = Signal::derive(move || {
        items.with(|items| {
            selected.with(|sel| {
                store_vouchers.with(|sv| {
                    platform_voucher.with(|pv| summarize(items, sel, sv, pv.as_ref()))
                })
            })
        })
    });

    let toggle_line = move |id: u64| {
        set_selected.update(|sel| {
            if !sel.remove(&id) {
                sel.insert(id);
            }
        });
    };

    let all_selected = move || {
        items.with(|items| {
            !items.is_empty() && selected.with(|sel| items.iter().all(|i| sel.contains(&i.id)))
        })
    };

    let toggle_all = move |_| {
        if all_selected() {
            set_selected.set(HashSet::new());
        } else {
            set_selected.set(items.with(|items| items.iter().map(|i| i.id).collect()));
        }
    };

    let set_quantity = move |id: u64, quantity: u32| {
        // Optimistic local update; a failed write reloads from the server.
        set_items.update(|items| {
            if let Some(item) = items.iter_mut().find(|i| i.id == id) {
                item.quantity = quantity;
            }
        });
        let api = auth_ctx.api();
        spawn_local(async move {
            if let Err(e) = api.update_cart_quantity(id, quantity).await {
                web_sys::console::error_1(&format!("[Cart] {e}").into());
                toast.error(e.user_message());
                load();
            }
        });
    };

    let remove_line = move |id: u64| {
        let api = auth_ctx.api();
        spawn_local(async move {
            match api.remove_cart_item(id).await {
                Ok(()) => {
                    set_items.update(|items| items.retain(|i| i.id != id));
                    set_selected.update(|sel| {
                        sel.remove(&id);
                    });
                    cart_ctx.refresh(api);
                }
                Err(e) => {
                    web_sys::console::error_1(&format!("[Cart] {e}").into());
                    toast.error(e.user_message());
                }
            }
        });
    };

    let on_checkout = move |_| {
        let snapshot = items.with_untracked(|items| {
            selected.with_untracked(|sel| {
                let lines: Vec<PendingLine> = items
                    .iter()
                    .filter(|i| sel.contains(&i.id))
                    .map(|i| PendingLine {
                        product_name: i.product_name.clone(),
                        variant_label: i.variant_label.clone(),
                        unit_price: i.unit_price,
                        quantity: i.quantity,
                    })
                    .collect();
                let s = summary.get_untracked();
                PendingCheckout {
                    lines,
                    subtotal: s.subtotal,
                    discount: s.store_discount + s.platform_discount,
                    total: s.total,
                }
            })
        });
        if snapshot.lines.is_empty() {
            toast.info("Vui lòng chọn sản phẩm để thanh toán");
            return;
        }
        if !SessionStorage::set_json(STORAGE_KEY_PENDING_ORDERS, &snapshot) {
            toast.error("Không thể lưu thông tin thanh toán");
            return;
        }
        router.navigate("/checkout/result");
    };

    view! {
        <div class="max-w-5xl mx-auto p-4 md:p-8 space-y-4">
            <h1 class="text-2xl font-bold">"Giỏ hàng"</h1>

            <Show when=move || loading.get()>
                <div class="text-center py-16">
                    <span class="loading loading-spinner loading-lg text-primary"></span>
                </div>
            </Show>

            <Show when=move || !loading.get() && items.with(Vec::is_empty)>
                <div class="card bg-base-100 shadow">
                    <div class="card-body items-center text-center py-16">
                        <p class="text-base-content/60">"Giỏ hàng của bạn đang trống."</p>
                        <button class="btn btn-primary mt-4" on:click=move |_| router.navigate("/")>
                            "Tiếp tục mua sắm"
                        </button>
                    </div>
                </div>
            </Show>

            <Show when=move || !items.with(Vec::is_empty)>
                <label class="label cursor-pointer justify-start gap-3 px-2">
                    <input
                        type="checkbox"
                        class="checkbox checkbox-primary checkbox-sm"
                        prop:checked=all_selected
                        on:change=toggle_all
                    />
                    <span class="label-text">"Chọn tất cả"</span>
                </label>

                <For
                    each=move || items.with(|items| group_by_store(items))
                    key=|group| group.store_id
                    children=move |group| {
                        let StoreGroup { store_id, store_name, items: lines } = group;
                        let voucher = store_voucher_for(store_id);
                        let voucher_applied = move || {
                            store_vouchers.with(|sv| sv.contains_key(&store_id))
                        };
                        let subtotal_for_store = move || {
                            items.with(|items| {
                                selected.with(|sel| {
                                    crate::cart_logic::store_subtotal(items, sel, store_id)
                                })
                            })
                        };
                        let voucher_for_toggle = voucher.clone();
                        let toggle_voucher = move |_| {
                            let voucher = voucher_for_toggle.clone();
                            set_store_vouchers.update(|sv| {
                                if sv.remove(&store_id).is_none() {
                                    sv.insert(store_id, voucher);
                                }
                            });
                        };
                        view! {
                            <div class="card bg-base-100 shadow">
                                <div class="card-body gap-3">
                                    <h2 class="font-semibold">{store_name}</h2>
                                    <For
                                        each=move || lines.clone()
                                        key=|item| item.id
                                        children=move |item| {
                                            let CartItem { id, product_name, variant_label, thumbnail, unit_price, quantity, stock, .. } = item;
                                            view! {
                                                <div class="flex items-center gap-3 py-2 border-t border-base-200">
                                                    <input
                                                        type="checkbox"
                                                        class="checkbox checkbox-primary checkbox-sm"
                                                        prop:checked=move || selected.with(|sel| sel.contains(&id))
                                                        on:change=move |_| toggle_line(id)
                                                    />
                                                    {match thumbnail {
                                                        Some(src) => view! { <img src=src alt="" class="w-16 h-16 rounded object-cover bg-base-200" /> }.into_any(),
                                                        None => view! { <div class="w-16 h-16 rounded bg-base-200"></div> }.into_any(),
                                                    }}
                                                    <div class="flex-1 min-w-0">
                                                        <p class="text-sm line-clamp-1">{product_name}</p>
                                                        <Show when={let l = variant_label.clone(); move || l.is_some()}>
                                                            <p class="text-xs text-base-content/60">
                                                                {variant_label.clone().unwrap_or_default()}
                                                            </p>
                                                        </Show>
                                                        <p class="text-primary font-semibold text-sm">
                                                            {format_currency(unit_price)}
                                                        </p>
                                                    </div>
                                                    <div class="join">
                                                        <button
                                                            class="join-item btn btn-xs"
                                                            disabled=move || { quantity <= 1 }
                                                            on:click=move |_| set_quantity(id, quantity.saturating_sub(1).max(1))
                                                        >
                                                            "-"
                                                        </button>
                                                        <span class="join-item btn btn-xs pointer-events-none w-10">{quantity}</span>
                                                        <button
                                                            class="join-item btn btn-xs"
                                                            disabled=move || { quantity >= stock }
                                                            on:click=move |_| set_quantity(id, (quantity + 1).min(stock))
                                                        >
                                                            "+"
                                                        </button>
                                                    </div>
                                                    <button class="btn btn-ghost btn-xs text-error" on:click=move |_| remove_line(id)>
                                                        "Xóa"
                                                    </button>
                                                </div>
                                            }
                                        }
                                    />
                                    <div class="flex items-center justify-between border-t border-base-200 pt-3">
                                        <label class="label cursor-pointer gap-2 p-0">
                                            <input
                                                type="checkbox"
                                                class="checkbox checkbox-sm"
                                                prop:checked=voucher_applied
                                                on:change=toggle_voucher
                                            />
                                            <span class="label-text text-sm">{voucher.description.clone()}</span>
                                        </label>
                                        <span class="text-sm text-success">
                                            {move || {
                                                let d = store_vouchers.with(|sv| {
                                                    sv.get(&store_id)
                                                        .map(|v| voucher_discount(v, subtotal_for_store()))
                                                        .unwrap_or(0)
                                                });
                                                if d > 0 { format!("-{}", format_currency(d)) } else { String::new() }
                                            }}
                                        </span>
                                    </div>
                                </div>
                            </div>
                        }
                    }
                />

                <div class="card bg-base-100 shadow">
                    <div class="card-body gap-3">
                        <h2 class="font-semibold">"Voucher HUSTBuy"</h2>
                        <For
                            each=platform_vouchers
                            key=|v| v.code.clone()
                            children=move |voucher| {
                                let code = voucher.code.clone();
                                let is_active = {
                                    let code = code.clone();
                                    move || platform_voucher.with(|pv| {
                                        pv.as_ref().is_some_and(|v| v.code == code)
                                    })
                                };
                                let voucher_for_toggle = voucher.clone();
                                let on_toggle = move |_| {
                                    let voucher = voucher_for_toggle.clone();
                                    set_platform_voucher.update(|pv| {
                                        if pv.as_ref().is_some_and(|v| v.code == voucher.code) {
                                            *pv = None;
                                        } else {
                                            *pv = Some(voucher);
                                        }
                                    });
                                };
                                view! {
                                    <label class="label cursor-pointer justify-start gap-2 p-0">
                                        <input
                                            type="radio"
                                            name="platform-voucher"
                                            class="radio radio-primary radio-sm"
                                            prop:checked=is_active
                                            on:click=on_toggle
                                        />
                                        <span class="label-text text-sm">
                                            {format!("{} · {}", voucher.code, voucher.description)}
                                        </span>
                                    </label>
                                }
                            }
                        />
                    </div>
                </div>

                <div class="card bg-base-100 shadow sticky bottom-4">
                    <div class="card-body gap-2">
                        <div class="flex justify-between text-sm">
                            <span>"Tạm tính"</span>
                            <span>{move || format_currency(summary.get().subtotal)}</span>
                        </div>
                        <div class="flex justify-between text-sm text-success">
                            <span>"Giảm giá shop"</span>
                            <span>{move || format!("-{}", format_currency(summary.get().store_discount))}</span>
                        </div>
                        <div class="flex justify-between text-sm text-success">
                            <span>"Giảm giá HUSTBuy"</span>
                            <span>{move || format!("-{}", format_currency(summary.get().platform_discount))}</span>
                        </div>
                        <div class="flex justify-between font-bold text-lg border-t border-base-200 pt-2">
                            <span>"Tổng thanh toán"</span>
                            <span class="text-primary">{move || format_currency(summary.get().total)}</span>
                        </div>
                        <button
                            class="btn btn-primary mt-2"
                            disabled=move || selected.with(HashSet::is_empty)
                            on:click=on_checkout
                        >
                            "Thanh toán"
                        </button>
                    </div>
                </div>
            </Show>
        </div>
    }
}
