//! List floater markers from a CSV listing.

use anyhow::anyhow;
use floater_core::floater::{Floater, FloaterStatus};
use log::info;
use std::fmt::Write;

const STATUS_ORDER: [FloaterStatus; 3] = [
    FloaterStatus::Active,
    FloaterStatus::Inactive,
    FloaterStatus::Unknown,
];

pub async fn run_floaters(csv_path: &str) -> anyhow::Result<()> {
    let body = tokio::fs::read_to_string(csv_path)
        .await
        .map_err(|e| anyhow!("Failed to read {}: {}", csv_path, e))?;
    let floaters = Floater::parse_floater_csv(&body)
        .map_err(|e| anyhow!("Failed to parse floater CSV: {}", e))?;
    info!("Loaded {} floaters from {}", floaters.len(), csv_path);
    print!("{}", format_floaters(&floaters));
    Ok(())
}

/// Markers grouped by status, active first. Empty groups are omitted.
pub fn format_floaters(floaters: &[Floater]) -> String {
    let mut out = String::new();
    for status in STATUS_ORDER {
        let group: Vec<&Floater> = floaters.iter().filter(|f| f.status == status).collect();
        if group.is_empty() {
            continue;
        }
        let _ = writeln!(out, "{} ({})", status.label(), group.len());
        for floater in group {
            let _ = writeln!(
                out,
                "  {:<10} {:>9.3} {:>10.3}",
                floater.id, floater.latitude, floater.longitude
            );
        }
    }
    out
}
