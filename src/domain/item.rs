use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShoppingItem {
    pub id: u32,
    pub name: String,
    pub quantity: u32,
    /// Empty when no address was attached.
    pub address: String,
    #[serde(default)]
    pub is_editing: bool,
}

impl ShoppingItem {
    pub fn new(id: u32, name: impl Into<String>, quantity: u32, address: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            quantity,
            address: address.into(),
            is_editing: false,
        }
    }

    pub fn has_address(&self) -> bool {
        !self.address.is_empty()
    }

    pub fn display_address(&self) -> &str {
        if self.has_address() {
            &self.address
        } else {
            "(no address)"
        }
    }
}

/// Parse user-entered quantity text.
///
/// Surrounding whitespace is ignored. Anything that is not a non-negative
/// integer yields `None`.
pub fn parse_quantity(text: &str) -> Option<u32> {
    text.trim().parse::<u32>().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_item_is_not_editing() {
        let item = ShoppingItem::new(1, "Milk", 2, "");
        assert!(!item.is_editing);
        assert_eq!(item.name, "Milk");
        assert_eq!(item.quantity, 2);
    }

    #[test]
    fn test_display_address_without_address() {
        let item = ShoppingItem::new(1, "Milk", 2, "");
        assert!(!item.has_address());
        assert_eq!(item.display_address(), "(no address)");
    }

    #[test]
    fn test_display_address_with_address() {
        let item = ShoppingItem::new(1, "Milk", 2, "1 Main St");
        assert_eq!(item.display_address(), "1 Main St");
    }

    #[test]
    fn test_parse_quantity() {
        assert_eq!(parse_quantity("12"), Some(12));
        assert_eq!(parse_quantity("  3 "), Some(3));
        assert_eq!(parse_quantity("0"), Some(0));
        assert_eq!(parse_quantity(""), None);
        assert_eq!(parse_quantity("-1"), None);
        assert_eq!(parse_quantity("two"), None);
        assert_eq!(parse_quantity("1.5"), None);
    }
}
