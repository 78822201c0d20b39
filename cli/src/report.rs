//! Point-in-time battery readings for display.

use std::error::Error;
use std::path::PathBuf;

use batsense_sensors::{Battery, BatterySource, ChargeState, DiscoveryError};
use serde::Serialize;

/// One battery's readings. Failed reads leave the field empty and add an
/// entry to `errors`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BatteryReport {
    pub name: String,
    pub path: PathBuf,
    pub capacity_percent: Option<f64>,
    pub status: Option<String>,
    pub state: Option<ChargeState>,
    pub charging: Option<bool>,
    pub discharging: Option<bool>,
    pub errors: Vec<String>,
}

impl BatteryReport {
    pub fn read(battery: &dyn Battery) -> Self {
        let mut report = Self {
            name: battery.name(),
            path: battery.path().to_path_buf(),
            capacity_percent: None,
            status: None,
            state: None,
            charging: None,
            discharging: None,
            errors: Vec::new(),
        };

        match battery.capacity() {
            Ok(capacity) => report.capacity_percent = Some(capacity),
            Err(e) => report.errors.push(error_chain(&e)),
        }

        let status = match battery.status() {
            Ok(status) => status,
            Err(e) => {
                report.errors.push(error_chain(&e));
                return report;
            }
        };

        // Derive every field from the one reading so they cannot disagree.
        if battery.as_status_provider().is_some() {
            report.state = Some(ChargeState::from_status(&status));
            report.charging = Some(status == "Charging");
            report.discharging = Some(status == "Discharging");
        }
        report.status = Some(status);

        report
    }

    pub fn capacity_label(&self) -> String {
        self.capacity_percent
            .map(|c| format!("{:.0}%", c))
            .unwrap_or_else(|| "?".to_string())
    }

    pub fn state_label(&self) -> &str {
        match (&self.state, &self.status) {
            (Some(state), _) => state.label(),
            (None, Some(status)) => status,
            (None, None) => "?",
        }
    }
}

/// Discovers batteries once and reads each of them.
pub fn collect<S: BatterySource + ?Sized>(
    source: &S,
) -> Result<Vec<BatteryReport>, DiscoveryError> {
    let mut reports: Vec<_> = source
        .batteries()?
        .iter()
        .map(|battery| BatteryReport::read(battery.as_ref()))
        .collect();
    reports.sort_by(|a, b| a.name.cmp(&b.name));
    Ok(reports)
}

fn error_chain(err: &dyn Error) -> String {
    let mut message = err.to_string();
    let mut source = err.source();
    while let Some(cause) = source {
        message.push_str(": ");
        message.push_str(&cause.to_string());
        source = cause.source();
    }
    message
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;
    use std::fs;
    use std::path::Path;

    use batsense_sensors::linux::SysfsBatterySource;
    use batsense_sensors::{BatteryStatusProvider, CapacityError, StatusError};
    use pretty_assertions::assert_eq;
    use tempfile::TempDir;

    fn write_battery(root: &Path, name: &str, capacity: &str, status: &str) {
        let dir = root.join(name);
        fs::create_dir(&dir).unwrap();
        fs::write(dir.join("capacity"), capacity).unwrap();
        fs::write(dir.join("status"), status).unwrap();
    }

    /// Status flips between charging and discharging on every read.
    struct FlappingBattery {
        path: PathBuf,
        reads: Cell<u32>,
    }

    impl Battery for FlappingBattery {
        fn path(&self) -> &Path {
            &self.path
        }

        fn capacity(&self) -> Result<f64, CapacityError> {
            Ok(50.0)
        }

        fn status(&self) -> Result<String, StatusError> {
            let reads = self.reads.get();
            self.reads.set(reads + 1);
            let status = if reads % 2 == 0 {
                "Charging"
            } else {
                "Discharging"
            };
            Ok(status.to_string())
        }

        fn as_status_provider(&self) -> Option<&dyn BatteryStatusProvider> {
            Some(self)
        }
    }

    impl BatteryStatusProvider for FlappingBattery {
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

    /// A battery without the status-provider capability.
    struct BareBattery(PathBuf);

    impl Battery for BareBattery {
        fn path(&self) -> &Path {
            &self.0
        }

        fn capacity(&self) -> Result<f64, CapacityError> {
            Ok(12.0)
        }

        fn status(&self) -> Result<String, StatusError> {
            Ok("Discharging".to_string())
        }
    }

    #[test]
    fn test_collect_reads_every_battery() {
        let dir = TempDir::new().unwrap();
        write_battery(dir.path(), "BAT1", "40\n", "Discharging\n");
        write_battery(dir.path(), "BAT0", "100\n", "Full\n");
        fs::create_dir(dir.path().join("AC")).unwrap();

        let source = SysfsBatterySource::with_root(dir.path());
        let reports = collect(&source).unwrap();

        assert_eq!(
            reports,
            vec![
                BatteryReport {
                    name: "BAT0".to_string(),
                    path: dir.path().join("BAT0"),
                    capacity_percent: Some(100.0),
                    status: Some("Full".to_string()),
                    state: Some(ChargeState::Full),
                    charging: Some(false),
                    discharging: Some(false),
                    errors: vec![],
                },
                BatteryReport {
                    name: "BAT1".to_string(),
                    path: dir.path().join("BAT1"),
                    capacity_percent: Some(40.0),
                    status: Some("Discharging".to_string()),
                    state: Some(ChargeState::Discharging),
                    charging: Some(false),
                    discharging: Some(true),
                    errors: vec![],
                },
            ]
        );
    }

    #[test]
    fn test_read_failures_are_recorded() {
        let dir = TempDir::new().unwrap();
        write_battery(dir.path(), "BAT0", "lots\n", "Charging\n");
        fs::remove_file(dir.path().join("BAT0").join("status")).unwrap();

        let source = SysfsBatterySource::with_root(dir.path());
        let reports = collect(&source).unwrap();

        assert_eq!(reports.len(), 1);
        let report = &reports[0];
        assert_eq!(report.capacity_percent, None);
        assert_eq!(report.status, None);
        assert_eq!(report.charging, None);
        assert_eq!(report.errors.len(), 2);
        assert!(report.errors[0].starts_with("could not parse battery capacity \"lots\""));
        assert!(report.errors[1].starts_with("could not read battery status"));
        assert_eq!(report.capacity_label(), "?");
        assert_eq!(report.state_label(), "?");
    }

    #[test]
    fn test_report_reads_status_once() {
        let battery = FlappingBattery {
            path: PathBuf::from("/virtual/BAT0"),
            reads: Cell::new(0),
        };
        let report = BatteryReport::read(&battery);

        assert_eq!(battery.reads.get(), 1);
        assert_eq!(report.status.as_deref(), Some("Charging"));
        assert_eq!(report.state, Some(ChargeState::Charging));
        assert_eq!(report.charging, Some(true));
        assert_eq!(report.discharging, Some(false));
    }

    #[test]
    fn test_battery_without_status_provider() {
        let battery = BareBattery(PathBuf::from("/virtual/BAT7"));
        let report = BatteryReport::read(&battery);

        assert_eq!(report.name, "BAT7");
        assert_eq!(report.status.as_deref(), Some("Discharging"));
        assert_eq!(report.state, None);
        assert_eq!(report.charging, None);
        assert_eq!(report.state_label(), "Discharging");
        assert!(report.errors.is_empty());
    }

    #[test]
    fn test_collect_missing_registry() {
        let dir = TempDir::new().unwrap();
        let source = SysfsBatterySource::with_root(dir.path().join("nope"));

        assert!(matches!(
            collect(&source),
            Err(DiscoveryError::ListFailed { .. })
        ));
    }

    #[test]
    fn test_report_serializes_state() {
        let dir = TempDir::new().unwrap();
        write_battery(dir.path(), "BAT0", "55.5\n", "Not charging\n");

        let source = SysfsBatterySource::with_root(dir.path());
        let reports = collect(&source).unwrap();
        let json = serde_json::to_value(&reports[0]).unwrap();

        assert_eq!(json["capacity_percent"], 55.5);
        assert_eq!(json["state"], "not_charging");
        assert_eq!(json["charging"], false);
    }
}
