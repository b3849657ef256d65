use crate::auth::use_auth;
use crate::format::{calculate_discount, format_currency};
use crate::hooks::use_debounce;
use crate::toast::use_toast;
use crate::web::router::use_router;
use hustbuy_shared::protocol::ProductListQuery;
use hustbuy_shared::{Page, ProductSummary};
use leptos::prelude::*;
use leptos::task::spawn_local;

const PAGE_SIZE: u32 = 20;
const SEARCH_DEBOUNCE_MS: u32 = 400;

/// Category filter entries shown above the grid; values match the backend's
/// category slugs.
const CATEGORIES: [(&str, &str); 4] = [
    ("electronics", "Điện tử"),
    ("fashion", "Thời trang"),
    ("books", "Sách"),
    ("home", "Nhà cửa"),
];

#[component]
pub fn HomePage() -> impl IntoView {
    let auth_ctx = use_auth();
    let toast = use_toast();
    let router = use_router();

    let (search_input, set_search_input) = signal(String::new());
    let (keyword, set_keyword) = signal(String::new());
    let (category, set_category) = signal(Option::<String>::None);
    let (page, set_page) = signal(0u32);
    let (products, set_products) = signal(Page::<ProductSummary>::empty());
    let (loading, set_loading) = signal(true);

    // Only the search box is debounced; every other control reloads
    // immediately.
    let debounced_search = use_debounce(SEARCH_DEBOUNCE_MS, move |value: String| {
        set_page.set(0);
        set_keyword.set(value);
    });

    // Reload whenever a filter signal changes.
    Effect::new(move |_| {
        let query = ProductListQuery {
            page: page.get(),
            size: PAGE_SIZE,
            keyword: Some(keyword.get()),
            category: category.get(),
        };
        let api = auth_ctx.api();
        set_loading.set(true);
        spawn_local(async move {
            match api.list_products(&query).await {
                Ok(data) => set_products.set(data),
                Err(e) => {
                    web_sys::console::error_1(&format!("[Home] {e}").into());
                    toast.error(e.user_message());
                }
            }
            set_loading.set(false);
        });
    });

    let select_category = move |value: Option<String>| {
        set_page.set(0);
        set_category.set(value);
    };

    view! {
        <div class="max-w-7xl mx-auto p-4 md:p-8 space-y-6">
            <div class="flex flex-col md:flex-row gap-4 items-center">
                <label class="input input-bordered flex items-center gap-2 w-full md:w-96">
                    <svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 16 16" fill="currentColor" class="h-4 w-4 opacity-70"><path fill-rule="evenodd" d="M9.965 11.026a5 5 0 1 1 1.06-1.06l2.755 2.754a.75.75 0 1 1-1.06 1.06l-2.755-2.754ZM10.5 7a3.5 3.5 0 1 1-7 0 3.5 3.5 0 0 1 7 0Z" clip-rule="evenodd" /></svg>
                    <input
                        type="text"
                        class="grow"
                        placeholder="Tìm kiếm sản phẩm..."
                        prop:value=search_input
                        on:input=move |ev| {
                            let value = event_target_value(&ev);
                            set_search_input.set(value.clone());
                            debounced_search(value);
                        }
                    />
                </label>
                <div class="flex gap-2 flex-wrap">
                    <button
                        class=move || if category.get().is_none() { "btn btn-sm btn-primary" } else { "btn btn-sm btn-outline" }
                        on:click=move |_| select_category(None)
                    >
                        "Tất cả"
                    </button>
                    <For
                        each=move || CATEGORIES
                        key=|(value, _)| *value
                        children=move |(value, label)| {
                            view! {
                                <button
                                    class=move || if category.get().as_deref() == Some(value) { "btn btn-sm btn-primary" } else { "btn btn-sm btn-outline" }
                                    on:click=move |_| select_category(Some(value.to_string()))
                                >
                                    {label}
                                </button>
                            }
                        }
                    />
                </div>
            </div>

            <Show when=move || loading.get() && products.with(|p| p.items.is_empty())>
                <div class="text-center py-16">
                    <span class="loading loading-spinner loading-lg text-primary"></span>
                </div>
            </Show>

            <Show when=move || !loading.get() && products.with(|p| p.items.is_empty())>
                <div class="text-center py-16 text-base-content/60">
                    "Không tìm thấy sản phẩm phù hợp."
                </div>
            </Show>

            <div class="grid grid-cols-2 md:grid-cols-4 lg:grid-cols-5 gap-4">
                <For
                    each=move || products.get().items
                    key=|product| product.id
                    children=move |product| {
                        let ProductSummary { id, name, thumbnail, price, original_price, sold, store_name } = product;
                        let discount = original_price.map(|o| calculate_discount(o, price)).unwrap_or(0);
                        view! {
                            <div
                                class="card bg-base-100 shadow hover:shadow-xl transition-shadow cursor-pointer"
                                on:click=move |_| router.navigate(&format!("/products/{id}"))
                            >
                                <figure class="aspect-square bg-base-200">
                                    {match thumbnail {
                                        Some(src) => view! { <img src=src alt="" class="object-cover w-full h-full" /> }.into_any(),
                                        None => view! { <div class="w-full h-full"></div> }.into_any(),
                                    }}
                                </figure>
                                <div class="card-body p-3 gap-1">
                                    <p class="text-sm line-clamp-2">{name}</p>
                                    <div class="flex items-center gap-2">
                                        <span class="text-primary font-bold">{format_currency(price)}</span>
                                        <Show when=move || { discount > 0 }>
                                            <span class="badge badge-error badge-sm">{format!("-{discount}%")}</span>
                                        </Show>
                                    </div>
                                    <div class="flex justify-between text-xs text-base-content/60">
                                        <span>{store_name}</span>
                                        <span>{format!("Đã bán {sold}")}</span>
                                    </div>
                                </div>
                            </div>
                        }
                    }
                />
            </div>

            <div class="flex justify-center">
                <div class="join">
                    <button
                        class="join-item btn"
                        disabled=move || !products.with(Page::has_prev)
                        on:click=move |_| set_page.update(|p| *p = p.saturating_sub(1))
                    >
                        "«"
                    </button>
                    <button class="join-item btn">
                        {move || products.with(|p| format!("Trang {} / {}", p.page + 1, p.total_pages.max(1)))}
                    </button>
                    <button
                        class="join-item btn"
                        disabled=move || !products.with(Page::has_next)
                        on:click=move |_| set_page.update(|p| *p += 1)
                    >
                        "»"
                    </button>
                </div>
            </div>
        </div>
    }
}
