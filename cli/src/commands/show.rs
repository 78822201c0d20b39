use batsense_sensors::BatterySource;
use color_eyre::eyre::{eyre, Result, WrapErr};

use crate::report;

pub fn run(source: &dyn BatterySource, name: &str) -> Result<()> {
    let reports = report::collect(source).wrap_err("battery discovery failed")?;
    let report = reports
        .iter()
        .find(|r| r.name == name)
        .ok_or_else(|| eyre!("No battery named {}", name))?;

    println!("{}", report.name);
    println!("{}", "=".repeat(40));
    println!("Path: {}", report.path.display());
    println!("Capacity: {}", report.capacity_label());
    if let Some(status) = &report.status {
        println!("Status: {}", status);
    }
    if let Some(state) = &report.state {
        println!("State: {}", state);
    }
    if let Some(charging) = report.charging {
        println!("Charging: {}", charging);
    }
    if let Some(discharging) = report.discharging {
        println!("Discharging: {}", discharging);
    }

    if !report.errors.is_empty() {
        println!("\n--- Errors ---");
        for error in &report.errors {
            println!("{}", error);
        }
    }

    Ok(())
}
