//! Data processing for floater depth profiles.
//!
//! This crate turns raw, possibly noisy level records into the ordered
//! sequence the list renderer displays, and derives summary statistics and
//! display strings from it. Everything here is a pure function of its inputs.

pub mod format;

/// Filtering, capping and ordering of raw level records.
pub mod normalize {
    use floater_core::level::LevelMeasurement;
    use floater_core::profile::ProfileResponse;
    use log::debug;
    use serde::Serialize;

    /// One displayable level of a normalized depth profile.
    #[derive(Debug, Clone, PartialEq, Serialize)]
    pub struct DisplayLevel {
        /// Depth in metres, taken from the level index (0 when absent).
        pub depth_m: i64,
        /// Temperature in degrees Celsius.
        pub temp_c: Option<f64>,
        /// Pressure in decibar.
        pub pres: Option<f64>,
        /// Practical salinity.
        pub psal: Option<f64>,
        pub level_index: Option<i64>,
    }

    impl DisplayLevel {
        /// Index used for ordering; an absent index sorts as level 0.
        pub fn sort_key(&self) -> i64 {
            self.level_index.unwrap_or(0)
        }
    }

    /// Effective cap on level indices: `max_count` when positive, otherwise
    /// the number of raw records.
    pub fn level_limit(raw_count: usize, max_count: Option<usize>) -> usize {
        match max_count {
            Some(count) if count > 0 => count,
            _ => raw_count,
        }
    }

    /// Whether a raw record survives normalization under the given cap.
    pub fn is_displayable(level: &LevelMeasurement, limit: usize) -> bool {
        let index_in_range = match level.level_index {
            None => true,
            Some(i) => i < limit as i64,
        };
        let has_depth = matches!(level.pres, Some(p) if p >= 0.0);
        let has_reading = level.temp.is_some() || level.psal.is_some();
        index_in_range && has_depth && has_reading
    }

    /// Normalize raw level records into an ordered sequence of display levels.
    ///
    /// Records whose index is at or beyond the cap, whose pressure is absent or
    /// negative, or that carry neither temperature nor salinity are dropped.
    /// Survivors are sorted by index (absent = 0); the sort is stable so ties
    /// keep their original relative order. Values pass through unchanged.
    pub fn normalize_levels(raw: &[LevelMeasurement], max_count: Option<usize>) -> Vec<DisplayLevel> {
        normalize_counted(raw, raw.len(), max_count)
    }

    /// Like [`normalize_levels`], for records that are what is left of a
    /// larger raw collection of `raw_count` entries (some records were
    /// rejected while decoding). The fallback cap is `raw_count`.
    pub fn normalize_counted(
        raw: &[LevelMeasurement],
        raw_count: usize,
        max_count: Option<usize>,
    ) -> Vec<DisplayLevel> {
        let limit = level_limit(raw_count.max(raw.len()), max_count);
        let mut kept: Vec<&LevelMeasurement> =
            raw.iter().filter(|level| is_displayable(level, limit)).collect();
        kept.sort_by_key(|level| level.sort_key());

        if kept.len() < raw_count {
            debug!(
                "normalize: kept {} of {} levels (limit {})",
                kept.len(),
                raw_count,
                limit
            );
        }

        kept.into_iter()
            .map(|level| DisplayLevel {
                depth_m: level.level_index.unwrap_or(0),
                temp_c: level.temp,
                pres: level.pres,
                psal: level.psal,
                level_index: level.level_index,
            })
            .collect()
    }

    /// Normalize a full profile response, using `summary.level_count` as the cap.
    pub fn normalize_response(response: &ProfileResponse) -> Vec<DisplayLevel> {
        normalize_counted(&response.levels, response.raw_count(), response.max_count())
    }

}

/// Descriptive statistics over a normalized profile.
pub mod summary {
    use crate::normalize::DisplayLevel;
    use serde::Serialize;

    /// Closed interval of observed values.
    #[derive(Debug, Clone, Copy, PartialEq, Serialize)]
    pub struct ValueRange {
        pub min: f64,
        pub max: f64,
    }

    #[derive(Debug, Clone, PartialEq, Serialize)]
    pub struct SummaryStats {
        pub total_levels: usize,
        /// Deepest level in metres across all entries.
        pub max_depth: f64,
        /// Temperature range in degrees Celsius, absent when no level has one.
        pub temp_range: Option<ValueRange>,
        /// Salinity range, absent when no level has one.
        pub sal_range: Option<ValueRange>,
    }

    fn range_of(values: impl Iterator<Item = f64>) -> Option<ValueRange> {
        values.fold(None, |acc, v| match acc {
            None => Some(ValueRange { min: v, max: v }),
            Some(r) => Some(ValueRange {
                min: r.min.min(v),
                max: r.max.max(v),
            }),
        })
    }

    /// Summarize a normalized profile. An empty profile has no summary.
    pub fn summarize(levels: &[DisplayLevel]) -> Option<SummaryStats> {
        if levels.is_empty() {
            return None;
        }
        let max_depth = levels
            .iter()
            .map(|l| l.depth_m)
            .max()
            .unwrap_or(0) as f64;
        Some(SummaryStats {
            total_levels: levels.len(),
            max_depth,
            temp_range: range_of(levels.iter().filter_map(|l| l.temp_c)),
            sal_range: range_of(levels.iter().filter_map(|l| l.psal)),
        })
    }

}
