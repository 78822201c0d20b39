use batsense_sensors::BatterySource;
use color_eyre::eyre::{Result, WrapErr};
use serde_json::json;

use crate::report::{self, BatteryReport};

pub fn run(source: &dyn BatterySource, as_json: bool, compact: bool) -> Result<()> {
    let reports = report::collect(source).wrap_err("battery discovery failed")?;

    if as_json {
        let doc = json!({
            "timestamp": chrono::Utc::now().to_rfc3339(),
            "batteries": reports,
        });
        if compact {
            println!("{}", serde_json::to_string(&doc)?);
        } else {
            println!("{}", serde_json::to_string_pretty(&doc)?);
        }
        return Ok(());
    }

    if reports.is_empty() {
        println!("No batteries found");
        return Ok(());
    }

    for report in &reports {
        println!("{}", summary_line(report));
    }

    Ok(())
}

fn summary_line(report: &BatteryReport) -> String {
    let mut line = format!(
        "{:<6} {:>5}  {}",
        report.name,
        report.capacity_label(),
        report.state_label()
    );
    if !report.errors.is_empty() {
        line.push_str(&format!("  ({} read error(s))", report.errors.len()));
    }
    line
}
