use std::fs;
use std::path::{Path, PathBuf};

use crate::battery::{Battery, BatterySource};
use crate::error::DiscoveryError;

use super::battery::SysfsBattery;

/// Platform power-supply registry.
pub const POWER_SUPPLY_PATH: &str = "/sys/class/power_supply";

const BATTERY_PREFIX: &str = "BAT";

/// Returns true for `BAT` followed by one or more ASCII digits.
pub fn is_battery_entry_name(name: &str) -> bool {
    match name.strip_prefix(BATTERY_PREFIX) {
        Some(index) => !index.is_empty() && index.bytes().all(|b| b.is_ascii_digit()),
        None => false,
    }
}

/// Discovers batteries in a sysfs power-supply registry.
#[derive(Debug, Clone)]
pub struct SysfsBatterySource {
    root: PathBuf,
}

impl Default for SysfsBatterySource {
    fn default() -> Self {
        Self::new()
    }
}

impl SysfsBatterySource {
    /// Source bound to [`POWER_SUPPLY_PATH`].
    pub fn new() -> Self {
        Self::with_root(POWER_SUPPLY_PATH)
    }

    /// Source bound to a directory laid out like [`POWER_SUPPLY_PATH`].
    pub fn with_root(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Check if the registry exists on this system.
    pub fn is_supported(&self) -> bool {
        self.root.is_dir()
    }

    /// Lists the registry and returns one battery per `BAT<N>` entry, in
    /// directory enumeration order.
    pub fn discover(&self) -> Result<Vec<SysfsBattery>, DiscoveryError> {
        let list_failed = |source| DiscoveryError::ListFailed {
            path: self.root.clone(),
            source,
        };

        let mut batteries = Vec::new();
        for entry in fs::read_dir(&self.root).map_err(list_failed)? {
            let entry = entry.map_err(list_failed)?;
            let name = entry.file_name();
            let Some(name) = name.to_str() else {
                continue;
            };
            if !is_battery_entry_name(name) {
                continue;
            }
            batteries.push(SysfsBattery::new(entry.path()));
        }

        tracing::debug!(
            root = %self.root.display(),
            count = batteries.len(),
            "discovered batteries"
        );

        Ok(batteries)
    }
}

impl BatterySource for SysfsBatterySource {
    fn batteries(&self) -> Result<Vec<Box<dyn Battery>>, DiscoveryError> {
        Ok(self
            .discover()?
            .into_iter()
            .map(|battery| Box::new(battery) as Box<dyn Battery>)
            .collect())
    }
}
