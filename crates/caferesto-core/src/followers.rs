//! Instagram follower-count ticker.
//!
//! The header shows the restaurant's follower total, counting up from zero
//! once the count has been fetched. Parsing the endpoint's payload, stepping
//! the counter and formatting it are pure and live here; the fetch itself
//! goes through [`crate::client::JsonClient`].

use std::fmt;
use std::time::Duration;

use serde::Deserialize;

use crate::error::{SiteError, SiteResult};

/// Interval between two ticker steps.
pub const TICK_INTERVAL: Duration = Duration::from_millis(50);

/// Number of steps the ticker takes to reach its target.
pub const TICK_STEPS: u64 = 100;

/// Largest follower count accepted from the endpoint.
pub const MAX_FOLLOWER_COUNT: u64 = 10_000_000_000;

/// Body returned by the follower endpoint.
#[derive(Debug, Clone, Deserialize)]
pub struct FollowerResponse {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub data: Option<FollowerData>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct FollowerData {
    pub followers_count: RawCount,
}

/// The count as sent: either a JSON number or text such as `"1.5K"`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum RawCount {
    Number(f64),
    Text(String),
}

impl RawCount {
    /// Convert to a whole number of followers.
    ///
    /// Text keeps only digits and dots; a `K` anywhere scales by a thousand,
    /// otherwise an `M` scales by a million. Values above
    /// [`MAX_FOLLOWER_COUNT`] are rejected.
    pub fn to_count(&self) -> SiteResult<u64> {
        let value = match self {
            RawCount::Number(n) => *n,
            RawCount::Text(text) => {
                let digits: String = text
                    .chars()
                    .filter(|c| c.is_ascii_digit() || *c == '.')
                    .collect();
                let base: f64 = digits
                    .parse()
                    .map_err(|_| SiteError::InvalidCount(text.clone()))?;
                let scale = if text.contains('K') {
                    1_000.0
                } else if text.contains('M') {
                    1_000_000.0
                } else {
                    1.0
                };
                base * scale
            }
        };

        let rounded = value.round();
        if !rounded.is_finite() || rounded < 0.0 || rounded > MAX_FOLLOWER_COUNT as f64 {
            return Err(SiteError::InvalidCount(format!("{:?}", self)));
        }
        Ok(rounded as u64)
    }
}

/// Parse an endpoint body into a follower count.
pub fn parse_follower_response(body: &serde_json::Value) -> SiteResult<u64> {
    let response: FollowerResponse = serde_json::from_value(body.clone())
        .map_err(|e| SiteError::InvalidPayload(e.to_string()))?;

    match response.data {
        Some(data) if response.success => data.followers_count.to_count(),
        _ => Err(SiteError::InvalidPayload(
            "expected success with a data object".to_string(),
        )),
    }
}

/// Counter animating from zero toward a fetched target.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ticker {
    target: u64,
    current: u64,
    step: u64,
}

impl Ticker {
    pub fn new(target: u64) -> Self {
        Self {
            target,
            current: 0,
            step: target.div_ceil(TICK_STEPS).max(1),
        }
    }

    pub fn target(&self) -> u64 {
        self.target
    }

    pub fn current(&self) -> u64 {
        self.current
    }

    pub fn is_finished(&self) -> bool {
        self.current >= self.target
    }

    /// Advance one step. Returns `None` once the target has been reached,
    /// which is the signal for the owning timer to stop.
    pub fn tick(&mut self) -> Option<u64> {
        if self.is_finished() {
            return None;
        }
        self.current = self.current.saturating_add(self.step).min(self.target);
        Some(self.current)
    }
}

impl Iterator for Ticker {
    type Item = u64;

    fn next(&mut self) -> Option<u64> {
        self.tick()
    }
}

/// What the follower badge shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FollowerDisplay {
    #[default]
    Loading,
    Error,
    Count(u64),
}

impl fmt::Display for FollowerDisplay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FollowerDisplay::Loading => f.write_str("Loading..."),
            FollowerDisplay::Error => f.write_str("Error"),
            FollowerDisplay::Count(n) => f.write_str(&format_count(*n)),
        }
    }
}

/// `1500` → `"1.5K"`, `999` → `"999"`.
pub fn format_count(count: u64) -> String {
    if count >= 1000 {
        format!("{:.1}K", count as f64 / 1000.0)
    } else {
        count.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn parses_numeric_count() {
        let body = json!({"success": true, "data": {"followers_count": 1500}});
        assert_eq!(parse_follower_response(&body), Ok(1500));
    }

    #[test]
    fn parses_suffixed_text() {
        assert_eq!(RawCount::Text("1.5K".into()).to_count(), Ok(1500));
        assert_eq!(RawCount::Text("2M".into()).to_count(), Ok(2_000_000));
        assert_eq!(RawCount::Text("12,345".into()).to_count(), Ok(12345));
        assert_eq!(RawCount::Text(" 987 followers".into()).to_count(), Ok(987));
    }

    #[test]
    fn rejects_text_without_digits() {
        assert!(matches!(
            RawCount::Text("many".into()).to_count(),
            Err(SiteError::InvalidCount(_))
        ));
        assert!(RawCount::Text("1.2.3K".into()).to_count().is_err());
    }

    #[test]
    fn rejects_negative_numbers() {
        assert!(RawCount::Number(-3.0).to_count().is_err());
    }

    #[test]
    fn rejects_implausibly_large_counts() {
        let body = json!({
            "success": true,
            "data": {"followers_count": "99999999999999999999999M"}
        });
        assert!(matches!(
            parse_follower_response(&body),
            Err(SiteError::InvalidCount(_))
        ));
        assert!(RawCount::Number(1e30).to_count().is_err());
        assert!(RawCount::Number(f64::INFINITY).to_count().is_err());
        assert_eq!(
            RawCount::Number(MAX_FOLLOWER_COUNT as f64).to_count(),
            Ok(MAX_FOLLOWER_COUNT)
        );
    }

    #[test]
    fn ticker_saturates_near_u64_max() {
        let values: Vec<u64> = Ticker::new(u64::MAX).collect();
        assert_eq!(values.last(), Some(&u64::MAX));
        assert!(values.len() as u64 <= TICK_STEPS);
        assert!(values.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn rejects_unsuccessful_payloads() {
        for body in [
            json!({"success": false, "data": {"followers_count": 10}}),
            json!({"success": true}),
            json!({"success": true, "data": null}),
            json!({"success": true, "data": {"followers_count": [1]}}),
            json!("nope"),
        ] {
            assert!(
                matches!(parse_follower_response(&body), Err(SiteError::InvalidPayload(_))),
                "accepted {body}"
            );
        }
    }

    #[test]
    fn ticker_steps_by_one_percent() {
        let mut ticker = Ticker::new(1500);
        assert_eq!(ticker.tick(), Some(15));
        assert_eq!(ticker.tick(), Some(30));
    }

    #[test]
    fn ticker_lands_exactly_on_target() {
        let values: Vec<u64> = Ticker::new(1234).collect();
        assert_eq!(values.last(), Some(&1234));
        // ceil(1234 / 100) = 13 per step
        assert_eq!(values.len(), 95);
        assert!(values.windows(2).all(|w| w[0] <= w[1]));
    }

    #[test]
    fn small_targets_count_by_one() {
        let values: Vec<u64> = Ticker::new(3).collect();
        assert_eq!(values, vec![1, 2, 3]);
    }

    #[test]
    fn zero_target_never_ticks() {
        let mut ticker = Ticker::new(0);
        assert!(ticker.is_finished());
        assert_eq!(ticker.tick(), None);
    }

    #[test]
    fn display_formats() {
        assert_eq!(FollowerDisplay::Loading.to_string(), "Loading...");
        assert_eq!(FollowerDisplay::Error.to_string(), "Error");
        assert_eq!(FollowerDisplay::Count(999).to_string(), "999");
        assert_eq!(FollowerDisplay::Count(1000).to_string(), "1.0K");
        assert_eq!(FollowerDisplay::Count(1500).to_string(), "1.5K");
        assert_eq!(FollowerDisplay::Count(12_345).to_string(), "12.3K");
    }
}
