use serde::{Deserialize, Serialize};

pub const RATIONALE_MESSAGE: &str = "Location access is required for this feature to work!";
pub const SETTINGS_MESSAGE: &str =
    "Location access is required for this feature to work! Please enable it in mobile settings";

/// Outcome of asking the user for the fine and coarse location permissions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PermissionResponse {
    pub fine: bool,
    pub coarse: bool,
    /// Whether the platform suggests explaining why the permission is needed.
    pub show_rationale: bool,
}

impl PermissionResponse {
    pub fn granted() -> Self {
        Self {
            fine: true,
            coarse: true,
            show_rationale: false,
        }
    }

    pub fn denied(show_rationale: bool) -> Self {
        Self {
            fine: false,
            coarse: false,
            show_rationale,
        }
    }
}

/// Location permission as seen by the UI.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PermissionState {
    #[default]
    Unknown,
    Granted,
    /// Denied, but asking again with an explanation is still possible.
    DeniedSoft,
    /// Denied permanently; only the system settings can change it.
    DeniedHard,
}

impl PermissionState {
    pub fn from_response(response: PermissionResponse) -> Self {
        if response.fine && response.coarse {
            PermissionState::Granted
        } else if response.show_rationale {
            PermissionState::DeniedSoft
        } else {
            PermissionState::DeniedHard
        }
    }

    pub fn is_granted(self) -> bool {
        self == PermissionState::Granted
    }

    pub fn can_request(self) -> bool {
        matches!(self, PermissionState::Unknown | PermissionState::DeniedSoft)
    }

    /// Message to show after a denial.
    pub fn advisory(self) -> Option<&'static str> {
        match self {
            PermissionState::DeniedSoft => Some(RATIONALE_MESSAGE),
            PermissionState::DeniedHard => Some(SETTINGS_MESSAGE),
            PermissionState::Unknown | PermissionState::Granted => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_both_granted() {
        let state = PermissionState::from_response(PermissionResponse::granted());
        assert_eq!(state, PermissionState::Granted);
        assert!(state.advisory().is_none());
    }

    #[test]
    fn test_partial_grant_is_denial() {
        let response = PermissionResponse {
            fine: true,
            coarse: false,
            show_rationale: true,
        };
        assert_eq!(
            PermissionState::from_response(response),
            PermissionState::DeniedSoft
        );
    }

    #[test]
    fn test_denied_with_rationale() {
        let state = PermissionState::from_response(PermissionResponse::denied(true));
        assert_eq!(state, PermissionState::DeniedSoft);
        assert_eq!(state.advisory(), Some(RATIONALE_MESSAGE));
        assert!(state.can_request());
    }

    #[test]
    fn test_denied_without_rationale() {
        let state = PermissionState::from_response(PermissionResponse::denied(false));
        assert_eq!(state, PermissionState::DeniedHard);
        assert_eq!(state.advisory(), Some(SETTINGS_MESSAGE));
        assert!(!state.can_request());
    }

    #[test]
    fn test_unknown_can_request() {
        assert!(PermissionState::default().can_request());
        assert!(!PermissionState::default().is_granted());
    }
}
