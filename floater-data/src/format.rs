//! Display formatting for profile values.
//!
//! Depth is shown as whole metres, temperature with one decimal, pressure and
//! salinity with two. Missing values render as [`PLACEHOLDER`], never as `0`
//! or an empty cell.

use crate::normalize::DisplayLevel;
use crate::summary::{SummaryStats, ValueRange};

/// Glyph shown in place of a missing value.
pub const PLACEHOLDER: &str = "—";

pub fn format_depth(depth_m: i64) -> String {
    depth_m.to_string()
}

pub fn format_temp(temp_c: Option<f64>) -> String {
    match temp_c {
        Some(t) => format!("{:.1}", t),
        None => PLACEHOLDER.to_string(),
    }
}

/// Pressure or salinity, two decimals.
pub fn format_two_decimals(value: Option<f64>) -> String {
    match value {
        Some(v) => format!("{:.2}", v),
        None => PLACEHOLDER.to_string(),
    }
}

/// Formatted cells for one row of the depth list.
#[derive(Debug, Clone, PartialEq)]
pub struct LevelCells {
    pub depth: String,
    pub temp: String,
    pub pres: String,
    pub psal: String,
}

impl From<&DisplayLevel> for LevelCells {
    fn from(level: &DisplayLevel) -> Self {
        LevelCells {
            depth: format_depth(level.depth_m),
            temp: format_temp(level.temp_c),
            pres: format_two_decimals(level.pres),
            psal: format_two_decimals(level.psal),
        }
    }
}

fn format_range(range: Option<ValueRange>, decimals: usize, unit: &str) -> String {
    match range {
        Some(r) => format!("{:.*} to {:.*}{}", decimals, r.min, decimals, r.max, unit),
        None => PLACEHOLDER.to_string(),
    }
}

/// Label/value pairs for the summary panel.
pub fn summary_lines(stats: &SummaryStats) -> Vec<(&'static str, String)> {
    vec![
        ("Levels", stats.total_levels.to_string()),
        ("Max depth", format!("{:.0} m", stats.max_depth)),
        ("Temperature", format_range(stats.temp_range, 1, " °C")),
        ("Salinity", format_range(stats.sal_range, 2, " PSU")),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cells_use_unit_precision() {
        let level = DisplayLevel {
            depth_m: 120,
            temp_c: Some(12.345),
            pres: Some(121.456),
            psal: Some(35.1),
            level_index: Some(120),
        };
        let cells = LevelCells::from(&level);
        assert_eq!(cells.depth, "120");
        assert_eq!(cells.temp, "12.3");
        assert_eq!(cells.pres, "121.46");
        assert_eq!(cells.psal, "35.10");
    }

    #[test]
    fn test_missing_values_use_placeholder() {
        assert_eq!(format_temp(None), PLACEHOLDER);
        assert_eq!(format_two_decimals(None), PLACEHOLDER);
        assert_eq!(format_temp(Some(0.0)), "0.0");
    }

    #[test]
    fn test_summary_lines() {
        let stats = SummaryStats {
            total_levels: 3,
            max_depth: 1500.0,
            temp_range: Some(ValueRange { min: 3.26, max: 21.0 }),
            sal_range: None,
        };
        let lines = summary_lines(&stats);
        assert_eq!(lines[0], ("Levels", "3".to_string()));
        assert_eq!(lines[1], ("Max depth", "1500 m".to_string()));
        assert_eq!(lines[2], ("Temperature", "3.3 to 21.0 °C".to_string()));
        assert_eq!(lines[3], ("Salinity", PLACEHOLDER.to_string()));
    }
}
