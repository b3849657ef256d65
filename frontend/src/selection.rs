//! Variant selection state for the product detail page.
//!
//! Holds the `group id -> chosen option id` map and resolves it against the
//! server-supplied selection matrix. The matrix is opaque: the client only
//! builds the lookup key and never constructs or repairs combinations.

use hustbuy_shared::SelectionConfig;
use std::collections::HashMap;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct SelectionState {
    chosen: HashMap<u64, u64>,
}

impl SelectionState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Click behavior: picking the already-chosen option clears that group,
    /// anything else replaces the group's choice.
    pub fn toggle(&mut self, group_id: u64, option_id: u64) {
        match self.chosen.get(&group_id) {
            Some(current) if *current == option_id => {
                self.chosen.remove(&group_id);
            }
            _ => {
                self.chosen.insert(group_id, option_id);
            }
        }
    }

    pub fn chosen(&self, group_id: u64) -> Option<u64> {
        self.chosen.get(&group_id).copied()
    }

    pub fn is_complete(&self, required_groups: &[u64]) -> bool {
        required_groups.iter().all(|g| self.chosen.contains_key(g))
    }

    /// Matrix lookup key: option ids ordered by ascending group id, joined
    /// with `-`. Matches the key format the backend emits.
    fn combination_key(&self, required_groups: &[u64]) -> Option<String> {
        let mut groups: Vec<u64> = required_groups.to_vec();
        groups.sort_unstable();
        let parts: Option<Vec<String>> = groups
            .iter()
            .map(|g| self.chosen.get(g).map(u64::to_string))
            .collect();
        parts.map(|p| p.join("-"))
    }

    /// `Some(variant_id)` only when every required group is chosen and the
    /// combination exists in the matrix; `None` otherwise.
    pub fn resolve(&self, config: &SelectionConfig) -> Option<u64> {
        if !self.is_complete(&config.required_groups) {
            return None;
        }
        let key = self.combination_key(&config.required_groups)?;
        config.matrix.get(&key).copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config() -> SelectionConfig {
        SelectionConfig {
            required_groups: vec![2, 1],
            matrix: HashMap::from([
                ("10-20".to_string(), 501),
                ("10-21".to_string(), 502),
                ("11-20".to_string(), 503),
            ]),
        }
    }

    #[test]
    fn complete_selection_resolves_to_one_variant() {
        let mut state = SelectionState::new();
        state.toggle(1, 10);
        state.toggle(2, 20);
        assert_eq!(state.resolve(&config()), Some(501));

        state.toggle(2, 21);
        assert_eq!(state.resolve(&config()), Some(502));
    }

    #[test]
    fn incomplete_selection_resolves_to_none() {
        let mut state = SelectionState::new();
        state.toggle(1, 10);
        assert_eq!(state.resolve(&config()), None);
    }

    #[test]
    fn key_orders_options_by_group_id_not_click_order() {
        let mut state = SelectionState::new();
        // Choose the second group first; the key must still be "11-20".
        state.toggle(2, 20);
        state.toggle(1, 11);
        assert_eq!(state.resolve(&config()), Some(503));
    }

    #[test]
    fn combination_missing_from_matrix_resolves_to_none() {
        let mut state = SelectionState::new();
        state.toggle(1, 11);
        state.toggle(2, 21); // "11-21" is not sellable
        assert_eq!(state.resolve(&config()), None);
    }

    #[test]
    fn no_required_groups_is_vacuously_complete() {
        // Products without options ship a config with no groups; a fresh
        // selection counts as complete and must not be treated as a dead
        // combination by callers.
        let state = SelectionState::new();
        assert!(state.is_complete(&[]));

        let cfg = SelectionConfig {
            required_groups: vec![],
            matrix: HashMap::from([(String::new(), 700)]),
        };
        assert_eq!(state.resolve(&cfg), Some(700));

        let empty_matrix = SelectionConfig {
            required_groups: vec![],
            matrix: HashMap::new(),
        };
        assert_eq!(state.resolve(&empty_matrix), None);
    }

    #[test]
    fn reclicking_an_option_clears_its_group() {
        let mut state = SelectionState::new();
        state.toggle(1, 10);
        state.toggle(2, 20);
        assert_eq!(state.resolve(&config()), Some(501));

        state.toggle(1, 10);
        assert_eq!(state.chosen(1), None);
        assert_eq!(state.resolve(&config()), None);
    }
}
