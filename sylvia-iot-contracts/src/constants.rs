//! Closed value sets of device service fields.

pub struct AdminState;
pub struct OperatingState;

impl AdminState {
    pub const LOCKED: &'static str = "LOCKED";
    pub const UNLOCKED: &'static str = "UNLOCKED";

    /// To check if `state` is one of the administrative states.
    pub fn is_valid(state: &str) -> bool {
        match state {
            Self::LOCKED | Self::UNLOCKED => true,
            _ => false,
        }
    }
}

impl OperatingState {
    pub const ENABLED: &'static str = "ENABLED";
    pub const DISABLED: &'static str = "DISABLED";

    /// To check if `state` is one of the operating states.
    pub fn is_valid(state: &str) -> bool {
        match state {
            Self::ENABLED | Self::DISABLED => true,
            _ => false,
        }
    }
}
