//! Pure list transitions.
//!
//! Every function takes the current list by reference and returns a fresh
//! `Vec`; stored items are never mutated in place.

use crate::domain::ShoppingItem;
use crate::store::Command;

pub fn reduce(items: &[ShoppingItem], command: &Command) -> Vec<ShoppingItem> {
    match command {
        Command::Add {
            id,
            name,
            quantity,
            address,
        } => add(items, *id, name, *quantity, address),
        Command::BeginEdit { id } => begin_edit(items, *id),
        Command::CommitEdit {
            id,
            name,
            quantity,
            address,
        } => commit_edit(items, *id, name, *quantity, address),
        Command::Delete { id } => delete(items, *id),
    }
}

/// Appends a new item. Blank names are rejected and the list comes back
/// unchanged.
pub fn add(
    items: &[ShoppingItem],
    id: u32,
    name: &str,
    quantity: u32,
    address: &str,
) -> Vec<ShoppingItem> {
    let mut next = items.to_vec();
    if name.trim().is_empty() {
        return next;
    }
    next.push(ShoppingItem::new(id, name, quantity, address));
    next
}

pub fn begin_edit(items: &[ShoppingItem], id: u32) -> Vec<ShoppingItem> {
    items
        .iter()
        .map(|item| ShoppingItem {
            is_editing: item.id == id,
            ..item.clone()
        })
        .collect()
}

/// Only the first item carrying `id` is rewritten.
pub fn commit_edit(
    items: &[ShoppingItem],
    id: u32,
    name: &str,
    quantity: u32,
    address: &str,
) -> Vec<ShoppingItem> {
    let mut next = items.to_vec();
    if let Some(slot) = next.iter_mut().find(|item| item.id == id) {
        *slot = ShoppingItem {
            id,
            name: name.to_string(),
            quantity,
            address: address.to_string(),
            is_editing: false,
        };
    }
    next
}

pub fn delete(items: &[ShoppingItem], id: u32) -> Vec<ShoppingItem> {
    items.iter().filter(|item| item.id != id).cloned().collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Vec<ShoppingItem> {
        vec![
            ShoppingItem::new(1, "Milk", 2, ""),
            ShoppingItem::new(2, "Eggs", 12, ""),
            ShoppingItem::new(3, "Bread", 1, "1 Main St"),
        ]
    }

    fn editing_ids(items: &[ShoppingItem]) -> Vec<u32> {
        items.iter().filter(|i| i.is_editing).map(|i| i.id).collect()
    }

    #[test]
    fn test_add_appends_at_end() {
        let items = sample();
        let next = add(&items, 4, "Butter", 1, "");
        assert_eq!(next.len(), 4);
        assert_eq!(next[3].id, 4);
        assert_eq!(next[3].name, "Butter");
        assert!(!next[3].is_editing);
        // input untouched
        assert_eq!(items.len(), 3);
    }

    #[test]
    fn test_add_blank_name_is_rejected() {
        let items = sample();
        assert_eq!(add(&items, 4, "", 1, ""), items);
        assert_eq!(add(&items, 4, "   ", 1, ""), items);
    }

    #[test]
    fn test_begin_edit_is_exclusive() {
        let items = begin_edit(&sample(), 1);
        assert_eq!(editing_ids(&items), vec![1]);

        let items = begin_edit(&items, 3);
        assert_eq!(editing_ids(&items), vec![3]);
    }

    #[test]
    fn test_begin_edit_unknown_id_clears_all() {
        let items = begin_edit(&sample(), 2);
        let items = begin_edit(&items, 42);
        assert!(editing_ids(&items).is_empty());
    }

    #[test]
    fn test_commit_edit_updates_only_target() {
        let items = begin_edit(&sample(), 2);
        let next = commit_edit(&items, 2, "Duck eggs", 6, "2 Farm Rd");

        assert_eq!(next[1].name, "Duck eggs");
        assert_eq!(next[1].quantity, 6);
        assert_eq!(next[1].address, "2 Farm Rd");
        assert!(!next[1].is_editing);
        assert_eq!(next[0], items[0]);
        assert_eq!(next[2], items[2]);
    }

    #[test]
    fn test_commit_edit_missing_id_is_noop() {
        let items = begin_edit(&sample(), 2);
        assert_eq!(commit_edit(&items, 9, "x", 1, ""), items);
    }

    #[test]
    fn test_delete_keeps_other_ids() {
        let next = delete(&sample(), 2);
        let ids: Vec<u32> = next.iter().map(|i| i.id).collect();
        assert_eq!(ids, vec![1, 3]);
    }

    #[test]
    fn test_delete_twice_is_idempotent() {
        let once = delete(&sample(), 1);
        let twice = delete(&once, 1);
        assert_eq!(once, twice);
    }

    #[test]
    fn test_delete_removes_every_duplicate() {
        let mut items = sample();
        items.push(ShoppingItem::new(3, "Jam", 1, ""));
        let next = delete(&items, 3);
        assert_eq!(next.len(), 2);
    }

    #[test]
    fn test_reduce_dispatches() {
        let items = reduce(
            &[],
            &Command::Add {
                id: 1,
                name: "Milk".into(),
                quantity: 2,
                address: String::new(),
            },
        );
        assert_eq!(items.len(), 1);

        let items = reduce(&items, &Command::BeginEdit { id: 1 });
        assert!(items[0].is_editing);

        let items = reduce(
            &items,
            &Command::CommitEdit {
                id: 1,
                name: "Oat milk".into(),
                quantity: 1,
                address: String::new(),
            },
        );
        assert_eq!(items[0].name, "Oat milk");
        assert!(!items[0].is_editing);

        let items = reduce(&items, &Command::Delete { id: 1 });
        assert!(items.is_empty());
    }
}
