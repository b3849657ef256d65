use crate::web::route::AppRoute;
use crate::web::router::use_router;
use leptos::prelude::*;

const TABS: [(AppRoute, &str); 5] = [
    (AppRoute::ProfileGeneral, "Thông tin chung"),
    (AppRoute::ProfileAddresses, "Sổ địa chỉ"),
    (AppRoute::ProfileOrders, "Đơn hàng"),
    (AppRoute::ProfileSecurity, "Bảo mật"),
    (AppRoute::ProfileSeller, "Kênh người bán"),
];

/// Tab strip shared by every profile page.
#[component]
pub fn ProfileNav() -> impl IntoView {
    let router = use_router();
    let current = router.current_route();

    view! {
        <div role="tablist" class="tabs tabs-bordered mb-6 overflow-x-auto">
            <For
                each=move || TABS
                key=|(_, label)| *label
                children=move |(route, label)| {
                    let target = route.clone();
                    let is_active = move || current.get() == route;
                    view! {
                        <a
                            role="tab"
                            class=move || if is_active() { "tab tab-active" } else { "tab" }
                            on:click=move |_| router.navigate_route(target.clone())
                        >
                            {label}
                        </a>
                    }
                }
            />
        </div>
    }
}
