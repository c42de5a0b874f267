//! # shoplist
//!
//! A terminal shopping list with optional per-item address tagging.
//!
//! ## Architecture
//!
//! ```text
//! UI event → ItemStore command → new list → renderer
//!          ↘ LocationProvider → AddressResolver → ambient address
//! ```
//!
//! The list lives in memory for a single session. Nothing is persisted.
//!
//! ## Quick Start
//!
//! ```bash
//! # Interactive terminal UI
//! shoplist tui
//!
//! # Line-oriented session
//! shoplist shell
//!
//! # Resolve a coordinate to addresses
//! shoplist geocode --lat 40.714 --lng -73.961
//! ```

/// Application context and error handling.
///
/// The [`AppContext`](app::AppContext) struct wires together the config,
/// the location provider and the address resolver.
pub mod app;

/// Command-line interface using clap.
///
/// - `tui` - Launch the TUI
/// - `shell` - Line-oriented session over stdin
/// - `geocode --lat <f64> --lng <f64>` - One-shot reverse geocode
pub mod cli;

/// Configuration loaded from `~/.config/shoplist/config.toml`.
pub mod config;

/// Core domain models.
///
/// - [`ShoppingItem`](domain::ShoppingItem): one line of the list
/// - [`LocationCoordinate`](domain::LocationCoordinate): latitude/longitude pair
/// - [`GeocodingResult`](domain::GeocodingResult): an address candidate
/// - [`PermissionState`](domain::PermissionState): location permission state machine
pub mod domain;

/// Reverse geocoding.
///
/// - [`AddressResolver`](geocoding::AddressResolver): async trait for resolvers
/// - [`GoogleGeocoder`](geocoding::GoogleGeocoder): reqwest-based implementation
pub mod geocoding;

/// Location provider, permission flow and address lookups.
pub mod location;

/// In-memory shopping list.
///
/// - [`reduce`](store::reduce): pure `(list, command) -> list` transitions
/// - [`ItemStore`](store::ItemStore): session state container
pub mod store;

/// Terminal user interface built with ratatui.
///
/// Keybindings: j/k navigate, a adds, e edits, d deletes, l looks up the
/// current address, q quits.
pub mod tui;
