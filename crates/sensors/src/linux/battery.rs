use std::path::{Path, PathBuf};

use crate::attribute::read_attribute;
use crate::battery::{Battery, BatteryStatusProvider};
use crate::error::{CapacityError, StatusError};
use crate::types::ChargeState;

const CAPACITY_ATTRIBUTE: &str = "capacity";
const STATUS_ATTRIBUTE: &str = "status";

/// A battery backed by a sysfs power-supply directory.
///
/// Holds only its path. Constructing one performs no I/O; a device removed
/// at runtime shows up as a read error on the next query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SysfsBattery {
    path: PathBuf,
}

impl SysfsBattery {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl Battery for SysfsBattery {
    fn path(&self) -> &Path {
        &self.path
    }

    fn capacity(&self) -> Result<f64, CapacityError> {
        let raw = read_attribute(self.path.join(CAPACITY_ATTRIBUTE))?;
        let value = raw.trim();
        let capacity = value
            .parse::<f64>()
            .map_err(|source| CapacityError::Unparseable {
                value: value.to_string(),
                source,
            })?;

        if !capacity.is_finite() || capacity < 0.0 {
            return Err(CapacityError::OutOfRange { value: capacity });
        }

        Ok(capacity)
    }

    fn status(&self) -> Result<String, StatusError> {
        let raw = read_attribute(self.path.join(STATUS_ATTRIBUTE))?;
        Ok(raw.trim().to_string())
    }

    fn as_status_provider(&self) -> Option<&dyn BatteryStatusProvider> {
        Some(self)
    }
}

impl BatteryStatusProvider for SysfsBattery {
    fn is_charging(&self) -> Result<bool, StatusError> {
        Ok(self.status()? == "Charging")
    }

    fn is_discharging(&self) -> Result<bool, StatusError> {
        Ok(self.status()? == "Discharging")
    }

    fn charge_state(&self) -> Result<ChargeState, StatusError> {
        Ok(ChargeState::from_status(&self.status()?))
    }
}
