pub mod memory;
pub mod reducer;

use serde::Deserialize;

pub use memory::ItemStore;
pub use reducer::reduce;

/// A mutation of the shopping list.
///
/// Commands carry already-validated values; text parsing happens in
/// [`ItemStore`] or at the UI boundary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Add {
        id: u32,
        name: String,
        quantity: u32,
        address: String,
    },
    BeginEdit {
        id: u32,
    },
    CommitEdit {
        id: u32,
        name: String,
        quantity: u32,
        address: String,
    },
    Delete {
        id: u32,
    },
}

/// How ids are handed out to new items.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IdStrategy {
    /// `len + 1` at insertion time. Can collide with a surviving id after a
    /// delete.
    #[default]
    Size,
    /// Session counter that never goes backwards.
    Monotonic,
}
