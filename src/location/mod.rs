//! Device location, permissions, and the address state that hangs off them.

pub mod lookup;
pub mod provider;
pub mod session;

pub use lookup::AddressLookup;
pub use provider::{LocationProvider, StaticLocationProvider};
pub use session::LocationSession;

use crate::app::Result;
use crate::domain::{LocationCoordinate, PermissionState};

/// What came out of asking for the current location.
#[derive(Debug, Clone, PartialEq)]
pub enum LocateOutcome {
    Located(LocationCoordinate),
    /// Permission was refused; the message is meant for the user.
    Denied {
        state: PermissionState,
        advisory: &'static str,
    },
}

/// Runs the permission check then fetches coordinates.
///
/// Prompts only when the current state allows it. A hard denial never
/// re-prompts.
pub async fn request_location<P>(provider: &P, state: &mut PermissionState) -> Result<LocateOutcome>
where
    P: LocationProvider + ?Sized,
{
    if !state.is_granted() && provider.has_permission() {
        *state = PermissionState::Granted;
    }

    if !state.is_granted() && state.can_request() {
        let response = provider.request_permission().await;
        *state = PermissionState::from_response(response);
        tracing::info!("Location permission is now {:?}", state);
    }

    if let Some(advisory) = state.advisory() {
        return Ok(LocateOutcome::Denied {
            state: *state,
            advisory,
        });
    }

    let coordinate = provider.current_location().await?;
    Ok(LocateOutcome::Located(coordinate))
}
