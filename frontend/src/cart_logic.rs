//! Cart arithmetic: per-store subtotals, voucher discounts and the order
//! summary. Pure functions over in-memory data; vouchers are client-held
//! mock objects, so no server round-trip validates them.

use hustbuy_shared::{CartItem, Voucher, VoucherKind, VoucherScope};
use std::collections::{HashMap, HashSet};

/// Cart lines grouped under one store heading, in first-seen order.
#[derive(Debug, Clone, PartialEq)]
pub struct StoreGroup {
    pub store_id: u64,
    pub store_name: String,
    pub items: Vec<CartItem>,
}

pub fn group_by_store(items: &[CartItem]) -> Vec<StoreGroup> {
    let mut groups: Vec<StoreGroup> = Vec::new();
    for item in items {
        match groups.iter_mut().find(|g| g.store_id == item.store_id) {
            Some(group) => group.items.push(item.clone()),
            None => groups.push(StoreGroup {
                store_id: item.store_id,
                store_name: item.store_name.clone(),
                items: vec![item.clone()],
            }),
        }
    }
    groups
}

/// Quantity stepper increment, never past the known stock. `None` stock
/// means no variant is resolved yet and the value is left unbounded; the
/// add-to-cart button stays disabled in that state anyway.
pub fn step_quantity_up(current: u32, stock: Option<u32>) -> u32 {
    let cap = stock.map_or(u32::MAX, |s| s.max(1));
    current.saturating_add(1).min(cap)
}

pub fn selected_subtotal(items: &[CartItem], selected: &HashSet<u64>) -> i64 {
    items
        .iter()
        .filter(|item| selected.contains(&item.id))
        .map(CartItem::line_total)
        .sum()
}

pub fn store_subtotal(items: &[CartItem], selected: &HashSet<u64>, store_id: u64) -> i64 {
    items
        .iter()
        .filter(|item| item.store_id == store_id && selected.contains(&item.id))
        .map(CartItem::line_total)
        .sum()
}

/// Discount a voucher grants over `subtotal`. Zero below the minimum-order
/// threshold; a percentage is capped by `max_discount`; nothing ever
/// exceeds the subtotal itself.
pub fn voucher_discount(voucher: &Voucher, subtotal: i64) -> i64 {
    if subtotal <= 0 || subtotal < voucher.min_order {
        return 0;
    }
    match voucher.kind {
        VoucherKind::Fixed(amount) => amount.min(subtotal),
        VoucherKind::Percent {
            percent,
            max_discount,
        } => (subtotal * i64::from(percent) / 100)
            .min(max_discount)
            .min(subtotal),
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CartSummary {
    pub subtotal: i64,
    pub store_discount: i64,
    pub platform_discount: i64,
    pub total: i64,
}

/// Totals panel for the current selection. Store vouchers apply to their
/// store's selected subtotal, the platform voucher to the whole selection;
/// the payable total is floored at zero.
pub fn summarize(
    items: &[CartItem],
    selected: &HashSet<u64>,
    store_vouchers: &HashMap<u64, Voucher>,
    platform_voucher: Option<&Voucher>,
) -> CartSummary {
    let subtotal = selected_subtotal(items, selected);

    let mut store_discount = 0i64;
    for (store_id, voucher) in store_vouchers {
        if voucher.scope != VoucherScope::Store(*store_id) {
            continue;
        }
        let per_store = store_subtotal(items, selected, *store_id);
        store_discount += voucher_discount(voucher, per_store);
    }

    let platform_discount = platform_voucher
        .filter(|v| v.scope == VoucherScope::Platform)
        .map(|v| voucher_discount(v, subtotal))
        .unwrap_or(0);

    let total = (subtotal - store_discount - platform_discount).max(0);

    CartSummary {
        subtotal,
        store_discount,
        platform_discount,
        total,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(id: u64, store_id: u64, unit_price: i64, quantity: u32) -> CartItem {
        CartItem {
            id,
            product_id: id * 10,
            variant_id: id * 100,
            product_name: format!("Sản phẩm {id}"),
            variant_label: None,
            thumbnail: None,
            unit_price,
            quantity,
            stock: 99,
            store_id,
            store_name: format!("Cửa hàng {store_id}"),
        }
    }

    fn fixed(amount: i64, min_order: i64, scope: VoucherScope) -> Voucher {
        Voucher {
            code: "TEST".to_string(),
            scope,
            kind: VoucherKind::Fixed(amount),
            min_order,
            description: String::new(),
        }
    }

    #[test]
    fn fixed_voucher_applies_at_threshold() {
        let voucher = fixed(50_000, 2_000_000, VoucherScope::Platform);
        assert_eq!(voucher_discount(&voucher, 2_000_000), 50_000);
    }

    #[test]
    fn fixed_voucher_is_zero_below_threshold() {
        let voucher = fixed(50_000, 2_000_000, VoucherScope::Platform);
        assert_eq!(voucher_discount(&voucher, 1_999_999), 0);
    }

    #[test]
    fn percent_voucher_is_capped_by_max_discount() {
        let voucher = Voucher {
            code: "PCT10".to_string(),
            scope: VoucherScope::Platform,
            kind: VoucherKind::Percent {
                percent: 10,
                max_discount: 30_000,
            },
            min_order: 0,
            description: String::new(),
        };
        // 10% of 500k is 50k, capped at 30k.
        assert_eq!(voucher_discount(&voucher, 500_000), 30_000);
        // 10% of 200k is under the cap.
        assert_eq!(voucher_discount(&voucher, 200_000), 20_000);
    }

    #[test]
    fn fixed_voucher_never_exceeds_subtotal() {
        let voucher = fixed(100_000, 0, VoucherScope::Platform);
        assert_eq!(voucher_discount(&voucher, 40_000), 40_000);
    }

    #[test]
    fn subtotal_counts_only_selected_lines() {
        let items = vec![item(1, 1, 100_000, 2), item(2, 1, 50_000, 1)];
        let selected = HashSet::from([1]);
        assert_eq!(selected_subtotal(&items, &selected), 200_000);
    }

    #[test]
    fn summary_combines_store_and_platform_vouchers() {
        let items = vec![
            item(1, 1, 1_000_000, 2), // store 1: 2.000.000
            item(2, 2, 300_000, 1),   // store 2: 300.000
        ];
        let selected = HashSet::from([1, 2]);
        let store_vouchers =
            HashMap::from([(1, fixed(50_000, 2_000_000, VoucherScope::Store(1)))]);
        let platform = fixed(100_000, 1_000_000, VoucherScope::Platform);

        let summary = summarize(&items, &selected, &store_vouchers, Some(&platform));
        assert_eq!(summary.subtotal, 2_300_000);
        assert_eq!(summary.store_discount, 50_000);
        assert_eq!(summary.platform_discount, 100_000);
        assert_eq!(summary.total, 2_150_000);
    }

    #[test]
    fn store_voucher_ignores_other_stores_lines() {
        let items = vec![item(1, 1, 1_000_000, 1), item(2, 2, 1_500_000, 1)];
        let selected = HashSet::from([1, 2]);
        // Threshold 2.000.000 is met by the whole cart but not by store 1
        // alone, so the store voucher grants nothing.
        let store_vouchers =
            HashMap::from([(1, fixed(50_000, 2_000_000, VoucherScope::Store(1)))]);

        let summary = summarize(&items, &selected, &store_vouchers, None);
        assert_eq!(summary.store_discount, 0);
        assert_eq!(summary.total, 2_500_000);
    }

    #[test]
    fn mismatched_scope_grants_nothing() {
        let items = vec![item(1, 1, 1_000_000, 1)];
        let selected = HashSet::from([1]);
        // A platform voucher wrongly slotted as a store voucher is ignored.
        let store_vouchers = HashMap::from([(1, fixed(50_000, 0, VoucherScope::Platform))]);
        let summary = summarize(&items, &selected, &store_vouchers, None);
        assert_eq!(summary.store_discount, 0);
    }

    #[test]
    fn total_is_floored_at_zero() {
        let items = vec![item(1, 1, 10_000, 1)];
        let selected = HashSet::from([1]);
        let platform = fixed(50_000, 0, VoucherScope::Platform);
        let summary = summarize(&items, &selected, &HashMap::new(), Some(&platform));
        assert_eq!(summary.total, 0);
    }

    #[test]
    fn grouping_preserves_first_seen_store_order() {
        let items = vec![
            item(1, 5, 1_000, 1),
            item(2, 3, 1_000, 1),
            item(3, 5, 1_000, 1),
        ];
        let groups = group_by_store(&items);
        assert_eq!(groups.len(), 2);
        assert_eq!(groups[0].store_id, 5);
        assert_eq!(groups[0].items.len(), 2);
        assert_eq!(groups[1].store_id, 3);
    }

    #[test]
    fn quantity_step_stops_at_stock() {
        assert_eq!(step_quantity_up(1, Some(3)), 2);
        assert_eq!(step_quantity_up(3, Some(3)), 3);
        assert_eq!(step_quantity_up(5, Some(3)), 3);
        // Zero stock still leaves the display at one unit.
        assert_eq!(step_quantity_up(1, Some(0)), 1);
        assert_eq!(step_quantity_up(4, None), 5);
    }

    #[test]
    fn empty_selection_is_an_empty_summary() {
        let items = vec![item(1, 1, 10_000, 1)];
        let summary = summarize(&items, &HashSet::new(), &HashMap::new(), None);
        assert_eq!(summary, CartSummary::default());
    }
}
