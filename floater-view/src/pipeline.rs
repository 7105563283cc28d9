//! Generation-tagged replacement of the displayed profile.
//!
//! Every request for a new profile (date switch, floater switch) takes a
//! [`RequestTicket`] carrying the next generation number. When a response
//! arrives it is applied only if its ticket is still the newest one; anything
//! older is discarded silently. Applied responses are normalized and
//! summarized into an immutable [`Profile`] that replaces the previous one in
//! a single assignment, so readers see either the old or the new profile in
//! full.

use floater_core::error::FetchError;
use floater_core::profile::{ProfileResponse, ProfileSummary};
use floater_data::normalize::{normalize_response, DisplayLevel};
use floater_data::summary::{summarize, SummaryStats};
use log::{debug, info};
use std::rc::Rc;

/// Identifies one profile request.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RequestTicket(pub u64);

/// A normalized profile ready for display.
#[derive(Debug, Clone, PartialEq)]
pub struct Profile {
    pub levels: Vec<DisplayLevel>,
    pub summary: Option<SummaryStats>,
    /// Upstream summary block, kept for headers.
    pub upstream: Option<ProfileSummary>,
    /// Raw records dropped for their shape or by normalization.
    pub dropped_levels: usize,
}

impl Profile {
    pub fn from_response(response: &ProfileResponse) -> Profile {
        let levels = normalize_response(response);
        let summary = summarize(&levels);
        let dropped_levels = response.rejected_levels + (response.levels.len() - levels.len());
        Profile {
            levels,
            summary,
            upstream: response.summary.clone(),
            dropped_levels,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.levels.is_empty()
    }
}

/// What the host should show. Loading, failure and "no levels" are distinct.
#[derive(Debug, Clone, PartialEq)]
pub enum ProfileState {
    /// Nothing requested yet.
    Idle,
    Loading,
    Ready(Rc<Profile>),
    /// The response was valid but no level survived normalization.
    Empty,
    Failed(FetchError),
}

/// Outcome of handing a response to the pipeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Completion {
    Applied,
    /// The ticket was superseded; the response was ignored.
    Stale,
}

/// Owns the displayed profile for one list.
#[derive(Debug)]
pub struct ProfilePipeline {
    generation: u64,
    state: ProfileState,
}

impl Default for ProfilePipeline {
    fn default() -> Self {
        Self::new()
    }
}

impl ProfilePipeline {
    pub fn new() -> Self {
        Self {
            generation: 0,
            state: ProfileState::Idle,
        }
    }

    pub fn state(&self) -> &ProfileState {
        &self.state
    }

    /// The profile on display, if the last applied response produced one.
    pub fn profile(&self) -> Option<Rc<Profile>> {
        match &self.state {
            ProfileState::Ready(profile) => Some(Rc::clone(profile)),
            _ => None,
        }
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Start a new request. Any ticket issued earlier becomes stale.
    pub fn begin_request(&mut self) -> RequestTicket {
        self.generation += 1;
        self.state = ProfileState::Loading;
        RequestTicket(self.generation)
    }

    pub fn is_current(&self, ticket: RequestTicket) -> bool {
        ticket.0 == self.generation
    }

    /// Hand the result of a request to the pipeline.
    pub fn complete(
        &mut self,
        ticket: RequestTicket,
        result: Result<ProfileResponse, FetchError>,
    ) -> Completion {
        if !self.is_current(ticket) {
            debug!(
                "pipeline: discarding response for generation {} (current {})",
                ticket.0, self.generation
            );
            return Completion::Stale;
        }
        self.state = match result {
            Ok(response) => {
                let profile = Profile::from_response(&response);
                info!(
                    "pipeline: generation {} applied with {} levels ({} dropped)",
                    ticket.0,
                    profile.levels.len(),
                    profile.dropped_levels
                );
                if profile.is_empty() {
                    ProfileState::Empty
                } else {
                    ProfileState::Ready(Rc::new(profile))
                }
            }
            Err(e) => {
                info!("pipeline: generation {} failed: {}", ticket.0, e);
                ProfileState::Failed(e)
            }
        };
        Completion::Applied
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use floater_core::level::LevelMeasurement;

    fn response(n: i64) -> ProfileResponse {
        ProfileResponse {
            levels: (0..n)
                .map(|i| LevelMeasurement::new(Some(i), Some(i as f64), Some(10.0), Some(35.0)))
                .collect(),
            summary: None,
            rejected_levels: 0,
        }
    }

    #[test]
    fn test_latest_request_wins_regardless_of_arrival_order() {
        let mut pipeline = ProfilePipeline::new();
        let first = pipeline.begin_request();
        let second = pipeline.begin_request();

        assert_eq!(pipeline.complete(second, Ok(response(3))), Completion::Applied);
        assert_eq!(pipeline.complete(first, Ok(response(50))), Completion::Stale);

        assert_eq!(pipeline.profile().unwrap().levels.len(), 3);
    }

    #[test]
    fn test_stale_failure_is_ignored() {
        let mut pipeline = ProfilePipeline::new();
        let first = pipeline.begin_request();
        let second = pipeline.begin_request();
        pipeline.complete(second, Ok(response(4)));
        let outcome = pipeline.complete(first, Err(FetchError::Status(500)));
        assert_eq!(outcome, Completion::Stale);
        assert!(matches!(pipeline.state(), ProfileState::Ready(_)));
    }

    #[test]
    fn test_states_are_distinguishable() {
        let mut pipeline = ProfilePipeline::new();
        assert_eq!(pipeline.state(), &ProfileState::Idle);

        let ticket = pipeline.begin_request();
        assert_eq!(pipeline.state(), &ProfileState::Loading);
        pipeline.complete(ticket, Ok(response(0)));
        assert_eq!(pipeline.state(), &ProfileState::Empty);
        assert!(pipeline.profile().is_none());

        let ticket = pipeline.begin_request();
        pipeline.complete(ticket, Err(FetchError::EmptyBody));
        assert_eq!(pipeline.state(), &ProfileState::Failed(FetchError::EmptyBody));
    }

    #[test]
    fn test_replacement_leaves_previous_profile_intact() {
        let mut pipeline = ProfilePipeline::new();
        let ticket = pipeline.begin_request();
        pipeline.complete(ticket, Ok(response(10)));
        let held = pipeline.profile().unwrap();

        let ticket = pipeline.begin_request();
        pipeline.complete(ticket, Ok(response(2)));

        assert_eq!(held.levels.len(), 10);
        assert_eq!(pipeline.profile().unwrap().levels.len(), 2);
    }

    #[test]
    fn test_profile_counts_dropped_levels() {
        let mut raw = response(10);
        raw.levels[4].pres = None;
        raw.rejected_levels = 2;
        let profile = Profile::from_response(&raw);
        assert_eq!(profile.levels.len(), 9);
        assert_eq!(profile.dropped_levels, 3);
        assert_eq!(profile.summary.unwrap().total_levels, 9);
    }
}
