use crate::error::FetchError;
use crate::profile::ProfileResponse;
use crate::profile_date::ProfileDate;
use log::{info, warn};
use reqwest::{Client, StatusCode};
use std::time::Duration;

/// Number of attempts per request before giving up.
pub const MAX_TRIES: u32 = 3;

/// Backoff before the second attempt; doubled after every failure.
pub const INITIAL_BACKOFF_MILLIS: u64 = 1000;

/// Async client for the profile backend.
///
/// Each call is independent: dropping its future cancels it, and a failed
/// call is retried here with exponential backoff before a typed
/// [`FetchError`] is returned. Callers never see a panic for transport
/// problems.
#[derive(Clone)]
pub struct FloaterClient {
    client: Client,
    base_url: String,
}

impl FloaterClient {
    pub fn new(client: Client, base_url: &str) -> Self {
        Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    /// List the dated profiles available for a floater, oldest first.
    pub async fn get_dates(&self, floater_id: &str) -> Result<Vec<ProfileDate>, FetchError> {
        let url = format!("{}/floaters/{}/dates", self.base_url, floater_id);
        let body = self.get_with_retry(&url).await?;
        ProfileDate::parse_list(&body)
    }

    /// Fetch the most recent profile for a floater.
    pub async fn get_latest(&self, floater_id: &str) -> Result<ProfileResponse, FetchError> {
        let url = format!("{}/floaters/{}/profiles/latest", self.base_url, floater_id);
        let body = self.get_with_retry(&url).await?;
        ProfileResponse::from_json(&body)
    }

    /// Fetch the profile identified by a date key from [`get_dates`](Self::get_dates).
    pub async fn get_by_date(
        &self,
        floater_id: &str,
        key: &str,
    ) -> Result<ProfileResponse, FetchError> {
        let url = format!("{}/floaters/{}/profiles/{}", self.base_url, floater_id, key);
        let body = self.get_with_retry(&url).await?;
        ProfileResponse::from_json(&body)
    }

    async fn get_with_retry(&self, url: &str) -> Result<String, FetchError> {
        let mut sleep_millis = INITIAL_BACKOFF_MILLIS;
        let mut last_error = FetchError::EmptyBody;

        for attempt in 1..=MAX_TRIES {
            match self.client.get(url).send().await {
                Ok(response) => {
                    let status = response.status();
                    if status == StatusCode::NOT_FOUND {
                        // Retrying will not make a missing profile appear.
                        return Err(FetchError::Status(status.as_u16()));
                    }
                    if !status.is_success() {
                        warn!(
                            "Attempt {}/{}: Bad response status for {}: {}",
                            attempt, MAX_TRIES, url, status
                        );
                        last_error = FetchError::Status(status.as_u16());
                    } else {
                        match response.text().await {
                            Ok(body) if body.trim().is_empty() => {
                                warn!("Attempt {}/{}: Empty response for {}", attempt, MAX_TRIES, url);
                                last_error = FetchError::EmptyBody;
                            }
                            Ok(body) => return Ok(body),
                            Err(e) => {
                                warn!(
                                    "Attempt {}/{}: Failed to read response body for {}: {}",
                                    attempt, MAX_TRIES, url, e
                                );
                                last_error = FetchError::Http(e.to_string());
                            }
                        }
                    }
                }
                Err(e) => {
                    warn!("Attempt {}/{}: Request failed for {}: {}", attempt, MAX_TRIES, url, e);
                    last_error = FetchError::Http(e.to_string());
                }
            }

            if attempt < MAX_TRIES {
                info!("Sleeping for {} milliseconds before retry for {}", sleep_millis, url);
                tokio::time::sleep(Duration::from_millis(sleep_millis)).await;
                sleep_millis *= 2;
            }
        }

        warn!("All attempts failed for {}", url);
        Err(last_error)
    }
}
