use crate::domain::item::parse_quantity;
use crate::domain::ShoppingItem;
use crate::store::{reduce, Command, IdStrategy};

/// Session-scoped shopping list.
///
/// Holds the current list value and the address that new and edited items
/// pick up. Every mutation goes through [`reduce`] and replaces the list
/// wholesale.
#[derive(Debug, Default)]
pub struct ItemStore {
    items: Vec<ShoppingItem>,
    id_strategy: IdStrategy,
    last_id: u32,
    ambient_address: String,
}

impl ItemStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_id_strategy(id_strategy: IdStrategy) -> Self {
        Self {
            id_strategy,
            ..Self::default()
        }
    }

    pub fn items(&self) -> &[ShoppingItem] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn get(&self, id: u32) -> Option<&ShoppingItem> {
        self.items.iter().find(|item| item.id == id)
    }

    pub fn editing(&self) -> Option<&ShoppingItem> {
        self.items.iter().find(|item| item.is_editing)
    }

    pub fn id_strategy(&self) -> IdStrategy {
        self.id_strategy
    }

    pub fn ambient_address(&self) -> &str {
        &self.ambient_address
    }

    pub fn set_ambient_address(&mut self, address: impl Into<String>) {
        self.ambient_address = address.into();
    }

    fn next_id(&self) -> u32 {
        match self.id_strategy {
            IdStrategy::Size => self.items.len() as u32 + 1,
            IdStrategy::Monotonic => self.last_id + 1,
        }
    }

    /// Adds an item from raw form input.
    ///
    /// A blank name or a quantity that is not a non-negative integer leaves
    /// the list untouched and returns `None`. When `address` is `None` the
    /// ambient address is attached.
    pub fn add(&mut self, name: &str, quantity: &str, address: Option<&str>) -> Option<u32> {
        let Some(quantity) = parse_quantity(quantity) else {
            tracing::debug!("Rejected add: quantity {:?} is not a number", quantity);
            return None;
        };
        let name = name.trim();
        if name.is_empty() {
            tracing::debug!("Rejected add: blank name");
            return None;
        }

        let id = self.next_id();
        let address = address.unwrap_or(self.ambient_address.as_str()).to_string();
        self.apply(Command::Add {
            id,
            name: name.to_string(),
            quantity,
            address,
        });
        self.last_id = self.last_id.max(id);
        Some(id)
    }

    pub fn begin_edit(&mut self, id: u32) {
        self.apply(Command::BeginEdit { id });
    }

    /// Saves the edit form. The item's address becomes the ambient address.
    ///
    /// Names are trimmed; a blank one is rejected and the item stays in edit
    /// mode untouched.
    pub fn commit_edit(&mut self, id: u32, name: &str, quantity: u32) -> bool {
        let name = name.trim();
        if name.is_empty() {
            tracing::debug!("Rejected edit of #{}: blank name", id);
            return false;
        }

        let address = self.ambient_address.clone();
        self.apply(Command::CommitEdit {
            id,
            name: name.to_string(),
            quantity,
            address,
        });
        true
    }

    pub fn delete(&mut self, id: u32) {
        self.apply(Command::Delete { id });
    }

    pub fn apply(&mut self, command: Command) -> &[ShoppingItem] {
        tracing::trace!(?command, "Applying store command");
        self.items = reduce(&self.items, &command);
        &self.items
    }
}
