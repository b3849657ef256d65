//! Cart badge state shared between the navbar and the cart/product pages.

use crate::api::HustBuyApi;
use leptos::prelude::*;
use leptos::task::spawn_local;

#[derive(Clone, Copy)]
pub struct CartContext {
    count: ReadSignal<u32>,
    set_count: WriteSignal<u32>,
}

impl CartContext {
    pub fn new() -> Self {
        let (count, set_count) = signal(0u32);
        Self { count, set_count }
    }

    pub fn count(&self) -> ReadSignal<u32> {
        self.count
    }

    pub fn set(&self, count: u32) {
        self.set_count.set(count);
    }

    /// Re-derive the badge from the server cart. Failures are silent; the
    /// badge is cosmetic and the cart page re-fetches on its own.
    pub fn refresh(&self, api: HustBuyApi) {
        let set_count = self.set_count;
        spawn_local(async move {
            if let Ok(items) = api.list_cart().await {
                set_count.set(items.len() as u32);
            }
        });
    }

    pub fn clear(&self) {
        self.set_count.set(0);
    }
}

pub fn use_cart() -> CartContext {
    use_context::<CartContext>().expect("CartContext should be provided")
}
