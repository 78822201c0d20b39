//! Battery capability traits.
//!
//! [`Battery`] is the base capability every device offers. Status derived
//! booleans live on the narrower [`BatteryStatusProvider`], which callers
//! probe for with [`Battery::as_status_provider`].

use std::path::Path;

use crate::error::{CapacityError, DiscoveryError, StatusError};
use crate::types::ChargeState;

/// A single battery device.
///
/// Implementations hold no cached readings: every call goes back to the
/// platform and may observe a different value than the previous one.
pub trait Battery {
    /// Registry path this device is bound to.
    fn path(&self) -> &Path;

    /// Charge level as a percentage, exactly as reported by the platform.
    fn capacity(&self) -> Result<f64, CapacityError>;

    /// Raw platform status word, whitespace-trimmed.
    fn status(&self) -> Result<String, StatusError>;

    /// Device name, the last component of [`Battery::path`].
    fn name(&self) -> String {
        self.path()
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_default()
    }

    /// Checked query for the status-provider capability.
    fn as_status_provider(&self) -> Option<&dyn BatteryStatusProvider> {
        None
    }
}

/// Optional capability: charging state derived from the status word.
pub trait BatteryStatusProvider {
    /// True iff the status is exactly `"Charging"`.
    fn is_charging(&self) -> Result<bool, StatusError>;

    /// True iff the status is exactly `"Discharging"`.
    fn is_discharging(&self) -> Result<bool, StatusError>;

    /// Typed view of the status word.
    fn charge_state(&self) -> Result<ChargeState, StatusError>;
}

/// Something that can enumerate batteries.
pub trait BatterySource {
    /// Discovers batteries afresh. An empty registry is not an error.
    fn batteries(&self) -> Result<Vec<Box<dyn Battery>>, DiscoveryError>;
}
