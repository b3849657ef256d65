//! Address book tab.
//!
//! One `<dialog>` handles both create and edit; the `editing` signal decides
//! which endpoint the submit hits.

use crate::auth::use_auth;
use crate::components::profile::nav::ProfileNav;
use crate::toast::use_toast;
use crate::validate::is_valid_phone;
use hustbuy_shared::Address;
use hustbuy_shared::protocol::AddressPayload;
use leptos::prelude::*;
use leptos::task::spawn_local;

#[component]
pub fn AddressesPage() -> impl IntoView {
    let auth_ctx = use_auth();
    let toast = use_toast();

    let (addresses, set_addresses) = signal(Vec::<Address>::new());
    let (loading, set_loading) = signal(true);
    let (open, set_open) = signal(false);
    let (saving, set_saving) = signal(false);
    // `Some(id)` while editing an existing address, `None` while creating.
    let (editing, set_editing) = signal(Option::<u64>::None);
    let dialog_ref = NodeRef::<leptos::html::Dialog>::new();

    let (receiver_name, set_receiver_name) = signal(String::new());
    let (receiver_phone, set_receiver_phone) = signal(String::new());
    let (province, set_province) = signal(String::new());
    let (district, set_district) = signal(String::new());
    let (ward, set_ward) = signal(String::new());
    let (detail, set_detail) = signal(String::new());
    let (is_default, set_is_default) = signal(false);

    let load = move || {
        let api = auth_ctx.api();
        spawn_local(async move {
            match api.list_addresses().await {
                Ok(list) => set_addresses.set(list),
                Err(e) => {
                    web_sys::console::error_1(&format!("[Addresses] {e}").into());
                    toast.error(e.user_message());
                }
            }
            set_loading.set(false);
        });
    };
    load();

    Effect::new(move |_| {
        if let Some(dialog) = dialog_ref.get() {
            if open.get() {
                if !dialog.open() {
                    let _ = dialog.show_modal();
                }
            } else if dialog.open() {
                dialog.close();
            }
        }
    });

    let open_create = move |_| {
        set_editing.set(None);
        set_receiver_name.set(String::new());
        set_receiver_phone.set(String::new());
        set_province.set(String::new());
        set_district.set(String::new());
        set_ward.set(String::new());
        set_detail.set(String::new());
        set_is_default.set(false);
        set_open.set(true);
    };

    let open_edit = move |address: Address| {
        set_editing.set(Some(address.id));
        set_receiver_name.set(address.receiver_name);
        set_receiver_phone.set(address.receiver_phone);
        set_province.set(address.province);
        set_district.set(address.district);
        set_ward.set(address.ward);
        set_detail.set(address.detail);
        set_is_default.set(address.is_default);
        set_open.set(true);
    };

    let on_submit = move |ev: leptos::web_sys::SubmitEvent| {
        ev.prevent_default();
        if !is_valid_phone(receiver_phone.get().trim()) {
            toast.error("Số điện thoại người nhận không hợp lệ");
            return;
        }

        set_saving.set(true);
        let api = auth_ctx.api();
        let payload = AddressPayload {
            receiver_name: receiver_name.get_untracked().trim().to_string(),
            receiver_phone: receiver_phone.get_untracked().trim().to_string(),
            province: province.get_untracked().trim().to_string(),
            district: district.get_untracked().trim().to_string(),
            ward: ward.get_untracked().trim().to_string(),
            detail: detail.get_untracked().trim().to_string(),
            is_default: is_default.get_untracked(),
        };
        let editing_id = editing.get_untracked();
        spawn_local(async move {
            let result = match editing_id {
                Some(id) => api.update_address(id, &payload).await,
                None => api.execute(&payload).await.map(|_| ()),
            };
            match result {
                Ok(()) => {
                    toast.success("Đã lưu địa chỉ");
                    set_open.set(false);
                    load();
                }
                Err(e) => {
                    web_sys::console::error_1(&format!("[Addresses] {e}").into());
                    toast.error(e.user_message());
                }
            }
            set_saving.set(false);
        });
    };

    let delete = move |id: u64| {
        let api = auth_ctx.api();
        spawn_local(async move {
            match api.delete_address(id).await {
                Ok(()) => {
                    toast.success("Đã xóa địa chỉ");
                    load();
                }
                Err(e) => {
                    web_sys::console::error_1(&format!("[Addresses] {e}").into());
                    toast.error(e.user_message());
                }
            }
        });
    };

    let make_default = move |id: u64| {
        let api = auth_ctx.api();
        spawn_local(async move {
            match api.set_default_address(id).await {
                Ok(()) => load(),
                Err(e) => {
                    web_sys::console::error_1(&format!("[Addresses] {e}").into());
                    toast.error(e.user_message());
                }
            }
        });
    };

    view! {
        <div class="max-w-3xl mx-auto p-4 md:p-8">
            <ProfileNav />
            <div class="card bg-base-100 shadow">
                <div class="card-body">
                    <div class="flex items-center justify-between">
                        <h1 class="card-title">"Sổ địa chỉ"</h1>
                        <button class="btn btn-primary btn-sm" on:click=open_create>
                            "Thêm địa chỉ"
                        </button>
                    </div>

                    <Show
                        when=move || !loading.get()
                        fallback=|| view! { <span class="loading loading-spinner text-primary"></span> }
                    >
                        <Show when=move || addresses.with(Vec::is_empty)>
                            <p class="text-base-content/60 py-8 text-center">
                                "Bạn chưa lưu địa chỉ nào."
                            </p>
                        </Show>
                        <For
                            each=move || addresses.get()
                            key=|address| (address.id, address.is_default)
                            children=move |address| {
                                let id = address.id;
                                let is_default_flag = address.is_default;
                                let receiver_name = address.receiver_name.clone();
                                let receiver_phone = address.receiver_phone.clone();
                                let full_text = address.full_text();
                                let address_for_edit = address;
                                view! {
                                    <div class="border border-base-200 rounded-lg p-4 flex items-start justify-between gap-4 mt-2">
                                        <div class="min-w-0">
                                            <div class="flex items-center gap-2">
                                                <span class="font-semibold">{receiver_name}</span>
                                                <span class="text-base-content/60 text-sm">{receiver_phone}</span>
                                                <Show when=move || is_default_flag>
                                                    <span class="badge badge-primary badge-sm">"Mặc định"</span>
                                                </Show>
                                            </div>
                                            <p class="text-sm text-base-content/70 mt-1">{full_text}</p>
                                        </div>
                                        <div class="flex gap-1 shrink-0">
                                            <Show when=move || !is_default_flag>
                                                <button class="btn btn-ghost btn-xs" on:click=move |_| make_default(id)>
                                                    "Đặt mặc định"
                                                </button>
                                            </Show>
                                            <button
                                                class="btn btn-ghost btn-xs"
                                                on:click=move |_| open_edit(address_for_edit.clone())
                                            >
                                                "Sửa"
                                            </button>
                                            <button class="btn btn-ghost btn-xs text-error" on:click=move |_| delete(id)>
                                                "Xóa"
                                            </button>
                                        </div>
                                    </div>
                                }
                            }
                        />
                    </Show>
                </div>
            </div>

            <dialog class="modal" node_ref=dialog_ref on:close=move |_| set_open.set(false)>
                <div class="modal-box">
                    <h3 class="font-bold text-lg">
                        {move || if editing.get().is_some() { "Sửa địa chỉ" } else { "Thêm địa chỉ" }}
                    </h3>
                    <form on:submit=on_submit class="space-y-3 mt-4">
                        <div class="grid grid-cols-2 gap-3">
                            <div class="form-control">
                                <label class="label" for="addr_name">
                                    <span class="label-text">"Người nhận"</span>
                                </label>
                                <input id="addr_name" required
                                    type="text"
                                    class="input input-bordered w-full"
                                    on:input=move |ev| set_receiver_name.set(event_target_value(&ev))
                                    prop:value=receiver_name
                                />
                            </div>
                            <div class="form-control">
                                <label class="label" for="addr_phone">
                                    <span class="label-text">"Số điện thoại"</span>
                                </label>
                                <input id="addr_phone" required
                                    type="tel"
                                    class="input input-bordered w-full"
                                    on:input=move |ev| set_receiver_phone.set(event_target_value(&ev))
                                    prop:value=receiver_phone
                                />
                            </div>
                        </div>
                        <div class="grid grid-cols-3 gap-3">
                            <div class="form-control">
                                <label class="label" for="addr_province">
                                    <span class="label-text">"Tỉnh/Thành"</span>
                                </label>
                                <input id="addr_province" required
                                    type="text"
                                    class="input input-bordered w-full"
                                    on:input=move |ev| set_province.set(event_target_value(&ev))
                                    prop:value=province
                                />
                            </div>
                            <div class="form-control">
                                <label class="label" for="addr_district">
                                    <span class="label-text">"Quận/Huyện"</span>
                                </label>
                                <input id="addr_district" required
                                    type="text"
                                    class="input input-bordered w-full"
                                    on:input=move |ev| set_district.set(event_target_value(&ev))
                                    prop:value=district
                                />
                            </div>
                            <div class="form-control">
                                <label class="label" for="addr_ward">
                                    <span class="label-text">"Phường/Xã"</span>
                                </label>
                                <input id="addr_ward" required
                                    type="text"
                                    class="input input-bordered w-full"
                                    on:input=move |ev| set_ward.set(event_target_value(&ev))
                                    prop:value=ward
                                />
                            </div>
                        </div>
                        <div class="form-control">
                            <label class="label" for="addr_detail">
                                <span class="label-text">"Địa chỉ cụ thể"</span>
                            </label>
                            <input id="addr_detail" required
                                type="text"
                                placeholder="Số nhà, tên đường..."
                                class="input input-bordered w-full"
                                on:input=move |ev| set_detail.set(event_target_value(&ev))
                                prop:value=detail
                            />
                        </div>
                        <div class="form-control">
                            <label class="label cursor-pointer justify-start gap-3">
                                <input type="checkbox" class="checkbox checkbox-primary checkbox-sm"
                                    prop:checked=is_default
                                    on:change=move |ev| set_is_default.set(event_target_checked(&ev))
                                />
                                <span class="label-text">"Đặt làm địa chỉ mặc định"</span>
                            </label>
                        </div>
                        <div class="modal-action">
                            <button type="button" class="btn btn-ghost" on:click=move |_| set_open.set(false)>
                                "Hủy"
                            </button>
                            <button type="submit" disabled=move || saving.get() class="btn btn-primary">
                                {move || if saving.get() {
                                    view! { <span class="loading loading-spinner"></span> "Đang lưu..." }.into_any()
                                } else {
                                    "Lưu".into_any()
                                }}
                            </button>
                        </div>
                    </form>
                </div>
                <form method="dialog" class="modal-backdrop">
                    <button>"close"</button>
                </form>
            </dialog>
        </div>
    }
}
