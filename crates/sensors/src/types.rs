//! Shared types for battery state.

use std::fmt;

use serde::Serialize;

/// Battery charging state, parsed from the platform status word.
///
/// The platform vocabulary is open-ended, so unrecognised words are kept in
/// [`ChargeState::Other`] rather than rejected.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ChargeState {
    /// Battery is actively charging
    Charging,
    /// Battery is discharging (on battery power)
    Discharging,
    /// Battery is full
    Full,
    /// External power connected but not charging (e.g., charge limit reached)
    NotCharging,
    /// Platform reports the state as unknown
    #[default]
    Unknown,
    /// Any other status word, verbatim
    Other(String),
}

impl ChargeState {
    /// Parses a trimmed status word. Matching is exact and case-sensitive.
    pub fn from_status(status: &str) -> Self {
        match status {
            "Charging" => ChargeState::Charging,
            "Discharging" => ChargeState::Discharging,
            "Full" => ChargeState::Full,
            "Not charging" => ChargeState::NotCharging,
            "Unknown" => ChargeState::Unknown,
            other => ChargeState::Other(other.to_string()),
        }
    }

    /// Returns a human-readable label for the charge state.
    pub fn label(&self) -> &str {
        match self {
            ChargeState::Charging => "Charging",
            ChargeState::Discharging => "On Battery",
            ChargeState::Full => "Full",
            ChargeState::NotCharging => "Not Charging",
            ChargeState::Unknown => "Unknown",
            ChargeState::Other(word) => word,
        }
    }

    /// Returns true if the battery is currently charging.
    pub fn is_charging(&self) -> bool {
        matches!(self, ChargeState::Charging)
    }

    /// Returns true if the battery is currently discharging.
    pub fn is_discharging(&self) -> bool {
        matches!(self, ChargeState::Discharging)
    }
}

impl fmt::Display for ChargeState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}
