//! Linux sysfs battery source.
//!
//! Batteries appear as `BAT<N>` directories under
//! `/sys/class/power_supply`, each exposing `capacity` and `status` files.

mod battery;
mod source;

pub use battery::SysfsBattery;
pub use source::{is_battery_entry_name, SysfsBatterySource, POWER_SUPPLY_PATH};
