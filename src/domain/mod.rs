pub mod item;
pub mod location;
pub mod permission;

pub use item::ShoppingItem;
pub use location::{GeocodingResult, LocationCoordinate};
pub use permission::{PermissionResponse, PermissionState};
