use crate::app::Result;
use crate::domain::{GeocodingResult, LocationCoordinate, PermissionState};
use crate::geocoding::AddressResolver;

/// Last known position and the addresses resolved for it.
#[derive(Debug, Default)]
pub struct LocationSession {
    location: Option<LocationCoordinate>,
    addresses: Vec<GeocodingResult>,
    pub permission: PermissionState,
}

impl LocationSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn location(&self) -> Option<LocationCoordinate> {
        self.location
    }

    pub fn addresses(&self) -> &[GeocodingResult] {
        &self.addresses
    }

    pub fn update_location(&mut self, location: LocationCoordinate) {
        self.location = Some(location);
    }

    /// Formatted address of the best candidate, or `""`.
    pub fn primary_address(&self) -> &str {
        self.addresses
            .first()
            .map(|r| r.formatted_address.as_str())
            .unwrap_or("")
    }

    /// Stores the outcome of a lookup.
    ///
    /// A failure is logged and the previous candidates are kept.
    pub fn record(&mut self, outcome: Result<Vec<GeocodingResult>>) -> Result<&[GeocodingResult]> {
        match outcome {
            Ok(addresses) => {
                self.addresses = addresses;
                Ok(&self.addresses)
            }
            Err(e) => {
                tracing::warn!("Address lookup failed: {}", e);
                Err(e)
            }
        }
    }

    pub async fn fetch_address<R>(
        &mut self,
        resolver: &R,
        location: LocationCoordinate,
    ) -> Result<&[GeocodingResult]>
    where
        R: AddressResolver + ?Sized,
    {
        self.update_location(location);
        let outcome = resolver.resolve_address(location).await;
        self.record(outcome)
    }
}
