//! Product detail page.
//!
//! The four sections (detail, option groups, specs, selection config) load
//! independently so a slow specs endpoint never blocks the buy box. Variant
//! resolution is local against the selection matrix; the follow-up fetch
//! only refreshes price and stock.

use crate::auth::use_auth;
use crate::cart_logic::step_quantity_up;
use crate::cart_state::use_cart;
use crate::format::format_currency;
use crate::selection::SelectionState;
use crate::toast::use_toast;
use hustbuy_shared::protocol::AddCartItemRequest;
use hustbuy_shared::{OptionGroup, ProductDetail, ProductSpec, SelectionConfig, Variant};
use leptos::prelude::*;
use leptos::task::spawn_local;

#[component]
pub fn ProductDetailPage(id: u64) -> impl IntoView {
    let auth_ctx = use_auth();
    let cart_ctx = use_cart();
    let toast = use_toast();

    let (detail, set_detail) = signal(Option::<ProductDetail>::None);
    let (groups, set_groups) = signal(Vec::<OptionGroup>::new());
    let (specs, set_specs) = signal(Vec::<ProductSpec>::new());
    let (config, set_config) = signal(Option::<SelectionConfig>::None);

    let (detail_loading, set_detail_loading) = signal(true);
    let (specs_loading, set_specs_loading) = signal(true);

    let (selection, set_selection) = signal(SelectionState::new());
    let (variant, set_variant) = signal(Option::<Variant>::None);
    let (quantity, set_quantity) = signal(1u32);
    let (adding, set_adding) = signal(false);

    // Four independent fetches, each guarding only its own section.
    {
        let api = auth_ctx.api();
        spawn_local(async move {
            match api.product_detail(id).await {
                Ok(d) => set_detail.set(Some(d)),
                Err(e) => {
                    web_sys::console::error_1(&format!("[ProductDetail] {e}").into());
                    toast.error(e.user_message());
                }
            }
            set_detail_loading.set(false);
        });
    }
    {
        let api = auth_ctx.api();
        spawn_local(async move {
            if let Ok(g) = api.product_options(id).await {
                set_groups.set(g);
            }
        });
    }
    {
        let api = auth_ctx.api();
        spawn_local(async move {
            if let Ok(s) = api.product_specs(id).await {
                set_specs.set(s);
            }
            set_specs_loading.set(false);
        });
    }
    {
        let api = auth_ctx.api();
        spawn_local(async move {
            if let Ok(c) = api.selection_config(id).await {
                set_config.set(Some(c));
            }
        });
    }

    // Re-resolve on every selection change. An incomplete selection clears
    // the variant silently; a complete one that misses the matrix tells the
    // user the combination is not sellable.
    Effect::new(move |_| {
        let state = selection.get();
        let Some(cfg) = config.get() else {
            return;
        };
        match state.resolve(&cfg) {
            Some(variant_id) => {
                let api = auth_ctx.api();
                spawn_local(async move {
                    match api.resolve_variant(id, variant_id).await {
                        Ok(Some(v)) => {
                            set_quantity.update(|q| *q = (*q).min(v.stock.max(1)));
                            set_variant.set(Some(v));
                        }
                        Ok(None) => {
                            set_variant.set(None);
                            toast.info("Tổ hợp này hiện không còn bán");
                        }
                        Err(e) => {
                            web_sys::console::error_1(&format!("[ProductDetail] {e}").into());
                            set_variant.set(None);
                            toast.error(e.user_message());
                        }
                    }
                });
            }
            None => {
                set_variant.set(None);
                // A product without option groups is vacuously complete on
                // mount; only a selection the user actually finished warrants
                // the warning.
                if !cfg.required_groups.is_empty() && state.is_complete(&cfg.required_groups) {
                    toast.info("Tổ hợp này hiện không còn bán");
                }
            }
        }
    });

    let price_text = move || match variant.get() {
        Some(v) => format_currency(v.price),
        None => detail
            .get()
            .map(|d| {
                if d.price_min == d.price_max {
                    format_currency(d.price_min)
                } else {
                    format!(
                        "{} - {}",
                        format_currency(d.price_min),
                        format_currency(d.price_max)
                    )
                }
            })
            .unwrap_or_default(),
    };

    let stock_text = move || variant.get().map(|v| format!("Còn {} sản phẩm", v.stock));

    let can_add = move || variant.get().is_some_and(|v| v.stock > 0) && !adding.get();

    let on_add_to_cart = move |_| {
        let Some(v) = variant.get_untracked() else {
            return;
        };
        if !auth_ctx.state.get_untracked().is_authenticated() {
            toast.info("Vui lòng đăng nhập để mua hàng");
            return;
        }
        set_adding.set(true);
        let api = auth_ctx.api();
        let request = AddCartItemRequest {
            variant_id: v.id,
            quantity: quantity.get_untracked().max(1),
        };
        spawn_local(async move {
            match api.execute(&request).await {
                Ok(_) => {
                    toast.success("Đã thêm vào giỏ hàng");
                    cart_ctx.refresh(api);
                }
                Err(e) => {
                    web_sys::console::error_1(&format!("[ProductDetail] {e}").into());
                    toast.error(e.user_message());
                }
            }
            set_adding.set(false);
        });
    };

    view! {
        <div class="max-w-6xl mx-auto p-4 md:p-8 space-y-6">
            <Show when=move || detail_loading.get()>
                <div class="text-center py-16">
                    <span class="loading loading-spinner loading-lg text-primary"></span>
                </div>
            </Show>

            <Show when=move || detail.get().is_some()>
                <div class="card bg-base-100 shadow">
                    <div class="card-body grid md:grid-cols-2 gap-8">
                        <div>
                            {move || {
                                let images = detail.get().map(|d| d.images).unwrap_or_default();
                                match images.first().cloned() {
                                    Some(src) => view! {
                                        <img src=src alt="" class="rounded-lg w-full aspect-square object-cover bg-base-200" />
                                    }.into_any(),
                                    None => view! {
                                        <div class="rounded-lg w-full aspect-square bg-base-200"></div>
                                    }.into_any(),
                                }
                            }}
                        </div>
                        <div class="space-y-4">
                            <h1 class="text-2xl font-bold">
                                {move || detail.get().map(|d| d.name).unwrap_or_default()}
                            </h1>
                            <div class="text-sm text-base-content/60">
                                {move || detail.get().map(|d| format!("{} · Đã bán {}", d.store_name, d.sold))}
                            </div>
                            <div class="text-3xl font-bold text-primary">{price_text}</div>
                            <Show when=move || stock_text().is_some()>
                                <div class="text-sm text-base-content/70">{stock_text}</div>
                            </Show>

                            <For
                                each=move || groups.get()
                                key=|group| group.id
                                children=move |group| {
                                    let OptionGroup { id: group_id, name, options } = group;
                                    view! {
                                        <div>
                                            <div class="font-semibold text-sm mb-2">{name}</div>
                                            <div class="flex gap-2 flex-wrap">
                                                <For
                                                    each=move || options.clone()
                                                    key=|opt| opt.id
                                                    children=move |opt| {
                                                        let option_id = opt.id;
                                                        view! {
                                                            <button
                                                                class=move || {
                                                                    if selection.with(|s| s.chosen(group_id)) == Some(option_id) {
                                                                        "btn btn-sm btn-primary"
                                                                    } else {
                                                                        "btn btn-sm btn-outline"
                                                                    }
                                                                }
                                                                on:click=move |_| {
                                                                    set_selection.update(|s| s.toggle(group_id, option_id));
                                                                }
                                                            >
                                                                {opt.label.clone()}
                                                            </button>
                                                        }
                                                    }
                                                />
                                            </div>
                                        </div>
                                    }
                                }
                            />

                            <div class="flex items-center gap-4 pt-2">
                                <div class="join">
                                    <button
                                        class="join-item btn btn-sm"
                                        on:click=move |_| set_quantity.update(|q| *q = q.saturating_sub(1).max(1))
                                    >
                                        "-"
                                    </button>
                                    <span class="join-item btn btn-sm pointer-events-none w-12">
                                        {move || quantity.get()}
                                    </span>
                                    <button
                                        class="join-item btn btn-sm"
                                        on:click=move |_| {
                                            let stock = variant.get_untracked().map(|v| v.stock);
                                            set_quantity.update(|q| *q = step_quantity_up(*q, stock));
                                        }
                                    >
                                        "+"
                                    </button>
                                </div>
                                <button
                                    class="btn btn-primary flex-1"
                                    disabled=move || !can_add()
                                    on:click=on_add_to_cart
                                >
                                    {move || if adding.get() {
                                        view! { <span class="loading loading-spinner"></span> }.into_any()
                                    } else {
                                        "Thêm vào giỏ hàng".into_any()
                                    }}
                                </button>
                            </div>
                        </div>
                    </div>
                </div>

                <div class="card bg-base-100 shadow">
                    <div class="card-body">
                        <h2 class="card-title text-lg">"Thông số kỹ thuật"</h2>
                        <Show
                            when=move || !specs_loading.get()
                            fallback=|| view! { <span class="loading loading-dots"></span> }
                        >
                            <table class="table table-sm">
                                <tbody>
                                    <For
                                        each=move || specs.get()
                                        key=|spec| spec.name.clone()
                                        children=|spec| {
                                            view! {
                                                <tr>
                                                    <td class="w-48 text-base-content/60">{spec.name.clone()}</td>
                                                    <td>{spec.value.clone()}</td>
                                                </tr>
                                            }
                                        }
                                    />
                                </tbody>
                            </table>
                        </Show>
                    </div>
                </div>

                <div class="card bg-base-100 shadow">
                    <div class="card-body">
                        <h2 class="card-title text-lg">"Mô tả sản phẩm"</h2>
                        <p class="whitespace-pre-line text-sm">
                            {move || detail.get().map(|d| d.description).unwrap_or_default()}
                        </p>
                    </div>
                </div>
            </Show>
        </div>
    }
}
