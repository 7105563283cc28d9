//! Profile commands: list dates, fetch and print a profile, inspect a saved one.

use crate::ViewportArgs;
use anyhow::{anyhow, bail};
use floater_core::client::FloaterClient;
use floater_core::{ProfileDate, ProfileResponse};
use floater_data::format::{summary_lines, LevelCells};
use floater_data::normalize::DisplayLevel;
use floater_view::pipeline::Profile;
use floater_view::renderer::WindowRenderer;
use floater_view::viewport::ViewportState;
use log::info;
use std::fmt::Write;
use std::time::Duration;

const HEADER: [&str; 4] = ["Depth (m)", "Temp (°C)", "Pressure (dbar)", "Salinity (PSU)"];

fn client(base_url: &str) -> anyhow::Result<FloaterClient> {
    let http = reqwest::Client::builder()
        .timeout(Duration::from_secs(30))
        .build()?;
    Ok(FloaterClient::new(http, base_url))
}

impl ViewportArgs {
    /// The simulated viewport, or `None` when neither dimension was given.
    pub fn to_viewport(self) -> anyhow::Result<Option<ViewportState>> {
        match (self.width, self.height) {
            (None, None) => Ok(None),
            (Some(width), Some(height)) => {
                if !(width > 0.0 && height > 0.0) {
                    bail!("--width and --height must be positive");
                }
                let mut viewport = ViewportState::for_viewport(width, height);
                viewport.scroll_to(self.scroll);
                Ok(Some(viewport))
            }
            _ => bail!("--width and --height must be given together"),
        }
    }
}

/// List the profile dates of a floater, newest last.
pub async fn run_dates(base_url: &str, floater_id: &str) -> anyhow::Result<()> {
    let client = client(base_url)?;
    let dates = client
        .get_dates(floater_id)
        .await
        .map_err(|e| anyhow!("Failed to fetch dates for {}: {}", floater_id, e))?;
    if dates.is_empty() {
        println!("No profiles for floater {}", floater_id);
        return Ok(());
    }
    print!("{}", format_dates(&dates));
    Ok(())
}

/// Fetch a profile and print its summary and rows.
pub async fn run_profile(
    base_url: &str,
    floater_id: &str,
    date_key: Option<&str>,
    csv_path: Option<&str>,
    viewport: ViewportArgs,
) -> anyhow::Result<()> {
    let viewport = viewport.to_viewport()?;
    let client = client(base_url)?;
    let response = match date_key {
        Some(key) => client.get_by_date(floater_id, key).await,
        None => client.get_latest(floater_id).await,
    }
    .map_err(|e| anyhow!("Failed to fetch profile for {}: {}", floater_id, e))?;
    info!(
        "Fetched profile for {} with {} raw levels",
        floater_id,
        response.levels.len()
    );
    show_profile(&response, csv_path, viewport)
}

/// Print a profile response stored on disk.
pub async fn run_inspect(
    path: &str,
    csv_path: Option<&str>,
    viewport: ViewportArgs,
) -> anyhow::Result<()> {
    let viewport = viewport.to_viewport()?;
    let body = tokio::fs::read_to_string(path)
        .await
        .map_err(|e| anyhow!("Failed to read {}: {}", path, e))?;
    let response = ProfileResponse::from_json(&body)?;
    show_profile(&response, csv_path, viewport)
}

fn show_profile(
    response: &ProfileResponse,
    csv_path: Option<&str>,
    viewport: Option<ViewportState>,
) -> anyhow::Result<()> {
    let profile = Profile::from_response(response);
    if profile.is_empty() {
        println!("No measurements in this profile.");
        return Ok(());
    }
    print!("{}", format_report(&profile, viewport)?);
    if let Some(path) = csv_path {
        write_levels_csv(path, &profile.levels)?;
        info!("Wrote {} levels to {}", profile.levels.len(), path);
    }
    Ok(())
}

pub fn format_dates(dates: &[ProfileDate]) -> String {
    let latest = ProfileDate::latest(dates).map(|d| d.key.as_str());
    let mut out = String::new();
    for date in dates {
        let marker = if Some(date.key.as_str()) == latest {
            "  (latest)"
        } else {
            ""
        };
        let _ = writeln!(out, "{}  {}{}", date.display_date(), date.key, marker);
    }
    out
}

/// Summary block followed by the rows a list with `viewport` would materialize,
/// or every row when there is no viewport.
pub fn format_report(
    profile: &Profile,
    viewport: Option<ViewportState>,
) -> anyhow::Result<String> {
    let mut out = String::new();

    if let Some(upstream) = &profile.upstream {
        if let Some(cycle) = upstream.cycle_number {
            let _ = writeln!(out, "{:<12} {}", "Cycle", cycle);
        }
        if let Some(date) = &upstream.profile_date {
            let _ = writeln!(out, "{:<12} {}", "Date", date);
        }
    }
    if let Some(stats) = &profile.summary {
        for (label, value) in summary_lines(stats) {
            let _ = writeln!(out, "{:<12} {}", label, value);
        }
    }
    if profile.dropped_levels > 0 {
        let _ = writeln!(out, "{:<12} {}", "Dropped", profile.dropped_levels);
    }
    out.push('\n');

    let rows: Vec<(usize, LevelCells)> = match viewport {
        Some(viewport) => {
            let mut renderer = WindowRenderer::new(viewport);
            let rendered = renderer.render(&profile.levels)?;
            rendered
                .rows
                .into_iter()
                .map(|row| (row.key, row.cells))
                .collect()
        }
        None => profile
            .levels
            .iter()
            .map(LevelCells::from)
            .enumerate()
            .collect(),
    };

    let _ = writeln!(
        out,
        "{:>6}  {:>10}  {:>10}  {:>16}  {:>15}",
        "#", HEADER[0], HEADER[1], HEADER[2], HEADER[3]
    );
    for (index, cells) in &rows {
        let _ = writeln!(
            out,
            "{:>6}  {:>10}  {:>10}  {:>16}  {:>15}",
            index, cells.depth, cells.temp, cells.pres, cells.psal
        );
    }

    if let (Some(viewport), Some((first, _)), Some((last, _))) =
        (viewport, rows.first(), rows.last())
    {
        let _ = writeln!(
            out,
            "\nrows {}-{} of {} (container {:.0} px, row {:.0} px, scroll {:.0} px)",
            first,
            last,
            profile.levels.len(),
            viewport.container_height,
            viewport.row_height,
            viewport.scroll_offset
        );
    }
    Ok(out)
}

pub fn write_levels_csv(path: &str, levels: &[DisplayLevel]) -> anyhow::Result<()> {
    let mut writer = csv::Writer::from_path(path)?;
    for level in levels {
        writer.serialize(level)?;
    }
    writer.flush()?;
    Ok(())
}
