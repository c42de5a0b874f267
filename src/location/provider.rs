use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};

use async_trait::async_trait;

use crate::app::{Result, ShopError};
use crate::config::{LocationConfig, PermissionSetting};
use crate::domain::{LocationCoordinate, PermissionResponse, PermissionState};

/// Source of the device position.
///
/// Coordinates are delivered once per call; there is no update stream.
#[async_trait]
pub trait LocationProvider {
    /// True when both fine and coarse permissions are already held.
    fn has_permission(&self) -> bool;

    async fn request_permission(&self) -> PermissionResponse;

    /// Fails with [`ShopError::PermissionDenied`] unless permission is held.
    async fn current_location(&self) -> Result<LocationCoordinate>;
}

/// Provider backed by fixed coordinates, for desktops without a GPS.
#[derive(Debug)]
pub struct StaticLocationProvider {
    coordinate: LocationCoordinate,
    granted: AtomicBool,
    response: PermissionResponse,
    prompts: AtomicUsize,
}

impl StaticLocationProvider {
    pub fn new(coordinate: LocationCoordinate, granted: bool, response: PermissionResponse) -> Self {
        Self {
            coordinate,
            granted: AtomicBool::new(granted),
            response,
            prompts: AtomicUsize::new(0),
        }
    }

    pub fn from_config(config: &LocationConfig) -> Self {
        let coordinate = LocationCoordinate::new(config.latitude, config.longitude);
        let (granted, response) = match config.permission {
            PermissionSetting::Granted => (true, PermissionResponse::granted()),
            PermissionSetting::Prompt => (false, PermissionResponse::granted()),
            PermissionSetting::Denied => (false, PermissionResponse::denied(true)),
            PermissionSetting::DeniedPermanently => (false, PermissionResponse::denied(false)),
        };
        Self::new(coordinate, granted, response)
    }

    /// How many times the permission prompt was shown.
    pub fn prompt_count(&self) -> usize {
        self.prompts.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl LocationProvider for StaticLocationProvider {
    fn has_permission(&self) -> bool {
        self.granted.load(Ordering::SeqCst)
    }

    async fn request_permission(&self) -> PermissionResponse {
        self.prompts.fetch_add(1, Ordering::SeqCst);
        if PermissionState::from_response(self.response).is_granted() {
            self.granted.store(true, Ordering::SeqCst);
        }
        self.response
    }

    async fn current_location(&self) -> Result<LocationCoordinate> {
        if !self.has_permission() {
            let state = if self.prompt_count() == 0 {
                PermissionState::Unknown
            } else {
                PermissionState::from_response(self.response)
            };
            return Err(ShopError::PermissionDenied(state));
        }
        if !self.coordinate.is_valid() {
            return Err(ShopError::Location(format!(
                "configured coordinate {} is out of range",
                self.coordinate
            )));
        }
        Ok(self.coordinate)
    }
}
