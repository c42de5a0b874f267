pub mod google;

use async_trait::async_trait;

use crate::app::Result;
use crate::domain::{GeocodingResult, LocationCoordinate};

pub use google::GoogleGeocoder;

/// Turns coordinates into candidate street addresses.
///
/// Results are ordered most relevant first. An empty list is a valid answer.
#[async_trait]
pub trait AddressResolver {
    async fn resolve_address(&self, coordinate: LocationCoordinate)
        -> Result<Vec<GeocodingResult>>;
}
