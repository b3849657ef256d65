//! Payment-result page.
//!
//! Consumes the `pendingOrders` snapshot exactly once: a reload or a direct
//! visit without a preceding checkout shows the empty state instead of a
//! replayed order.

use crate::format::format_currency;
use crate::web::SessionStorage;
use crate::web::router::use_router;
use hustbuy_shared::{PendingCheckout, STORAGE_KEY_PENDING_ORDERS};
use leptos::prelude::*;

#[component]
pub fn CheckoutResultPage() -> impl IntoView {
    let router = use_router();

    // Read-and-clear happens at mount, before any rendering.
    let checkout = SessionStorage::take_json::<PendingCheckout>(STORAGE_KEY_PENDING_ORDERS);

    match checkout {
        None => view! {
            <div class="max-w-2xl mx-auto p-4 md:p-8">
                <div class="card bg-base-100 shadow">
                    <div class="card-body items-center text-center py-16">
                        <p class="text-base-content/60">"Không có đơn hàng nào đang chờ thanh toán."</p>
                        <button class="btn btn-primary mt-4" on:click=move |_| router.navigate("/")>
                            "Về trang chủ"
                        </button>
                    </div>
                </div>
            </div>
        }
        .into_any(),
        Some(checkout) => {
            let PendingCheckout {
                lines,
                subtotal,
                discount,
                total,
            } = checkout;
            view! {
                <div class="max-w-2xl mx-auto p-4 md:p-8 space-y-4">
                    <div class="card bg-base-100 shadow">
                        <div class="card-body items-center text-center">
                            <div class="text-success text-5xl">"✓"</div>
                            <h1 class="text-2xl font-bold">"Đặt hàng thành công"</h1>
                            <p class="text-base-content/60 text-sm">
                                "Cảm ơn bạn đã mua sắm tại HUSTBuy."
                            </p>
                        </div>
                    </div>

                    <div class="card bg-base-100 shadow">
                        <div class="card-body gap-2">
                            <h2 class="font-semibold">"Chi tiết đơn hàng"</h2>
                            {lines
                                .into_iter()
                                .map(|line| {
                                    view! {
                                        <div class="flex justify-between text-sm py-1 border-t border-base-200">
                                            <div>
                                                <span>{line.product_name}</span>
                                                {line.variant_label.map(|l| view! {
                                                    <span class="text-base-content/60">{format!(" ({l})")}</span>
                                                })}
                                                <span class="text-base-content/60">{format!(" x{}", line.quantity)}</span>
                                            </div>
                                            <span>{format_currency(line.unit_price * i64::from(line.quantity))}</span>
                                        </div>
                                    }
                                })
                                .collect_view()}
                            <div class="flex justify-between text-sm border-t border-base-200 pt-2">
                                <span>"Tạm tính"</span>
                                <span>{format_currency(subtotal)}</span>
                            </div>
                            <div class="flex justify-between text-sm text-success">
                                <span>"Giảm giá"</span>
                                <span>{format!("-{}", format_currency(discount))}</span>
                            </div>
                            <div class="flex justify-between font-bold">
                                <span>"Tổng thanh toán"</span>
                                <span class="text-primary">{format_currency(total)}</span>
                            </div>
                        </div>
                    </div>

                    <div class="flex gap-2 justify-center">
                        <button class="btn btn-outline" on:click=move |_| router.navigate("/profile/orders")>
                            "Xem đơn hàng"
                        </button>
                        <button class="btn btn-primary" on:click=move |_| router.navigate("/")>
                            "Tiếp tục mua sắm"
                        </button>
                    </div>
                </div>
            }
            .into_any()
        }
    }
}
