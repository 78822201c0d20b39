//! Battery discovery and attribute parsing for batsense.
//!
//! This crate finds battery devices in the platform power-supply registry and
//! decodes their textual attributes into typed values. Every query re-reads
//! the underlying attribute; nothing is cached.
//!
//! # Features
//!
//! - `linux` - Enable the sysfs (`/sys/class/power_supply`) source (default)
//!
//! # Example
//!
//! ```no_run
//! use batsense_sensors::{BatterySource, linux::SysfsBatterySource};
//!
//! let source = SysfsBatterySource::new();
//! for battery in source.batteries()? {
//!     println!("{}: {}%", battery.name(), battery.capacity()?);
//!     if let Some(provider) = battery.as_status_provider() {
//!         println!("charging: {}", provider.is_charging()?);
//!     }
//! }
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

mod attribute;
mod battery;
mod error;
mod types;

pub use attribute::{read_attribute, read_bounded, MAX_ATTRIBUTE_BYTES};
pub use battery::{Battery, BatterySource, BatteryStatusProvider};
pub use error::{CapacityError, DiscoveryError, ReadError, StatusError};
pub use types::ChargeState;

#[cfg(feature = "linux")]
pub mod linux;
