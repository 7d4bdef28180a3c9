//! Outbound calls made by the page.
//!
//! The transport is abstracted behind [`JsonClient`] so the flows below can
//! run against the browser's fetch in the app and against a mock in tests.

use std::future::Future;
use std::time::Duration;

use chrono::NaiveDate;

use crate::config::Endpoints;
use crate::error::SiteResult;
use crate::followers::{parse_follower_response, FollowerDisplay, Ticker, TICK_INTERVAL};
use crate::messaging::ReservationForm;

/// Minimal JSON-over-HTTP transport.
///
/// Implementations map transport failures to [`crate::SiteError::Network`]
/// and non-2xx answers to [`crate::SiteError::HttpStatus`].
#[allow(async_fn_in_trait)]
pub trait JsonClient {
    /// `GET url` with `Accept: application/json`, returning the parsed body.
    async fn get_json(&self, url: &str) -> SiteResult<serde_json::Value>;

    /// `POST url` with a JSON body; the response body is ignored.
    async fn post_json(&self, url: &str, body: &serde_json::Value) -> SiteResult<()>;
}

/// Fetch the follower total. A single attempt, no retry.
pub async fn fetch_follower_count(client: &impl JsonClient, endpoints: &Endpoints) -> SiteResult<u64> {
    let body = client.get_json(&endpoints.follower_count_url).await?;
    let count = parse_follower_response(&body)?;
    tracing::info!(count, "Fetched follower count");
    Ok(count)
}

/// Validate a reservation form and forward it to the chat bot.
pub async fn send_reservation(
    client: &impl JsonClient,
    endpoints: &Endpoints,
    form: &ReservationForm,
    today: NaiveDate,
) -> SiteResult<()> {
    let request = form.validate(today)?;
    let (url, chat_id) = endpoints.chat_bot_target()?;
    let body = serde_json::to_value(request.to_chat_message(chat_id))?;

    client.post_json(&url, &body).await?;
    tracing::info!(party = request.party, date = %request.date, "Reservation forwarded");
    Ok(())
}

/// Run a ticker to completion, sleeping [`TICK_INTERVAL`] before each step.
///
/// Dropping the returned future stops the ticker; that is how the owning view
/// cancels it on teardown.
pub async fn drive_ticker<S, Fut, F>(mut ticker: Ticker, mut sleep: S, mut on_tick: F)
where
    S: FnMut(Duration) -> Fut,
    Fut: Future<Output = ()>,
    F: FnMut(u64),
{
    while !ticker.is_finished() {
        sleep(TICK_INTERVAL).await;
        if let Some(value) = ticker.tick() {
            on_tick(value);
        }
    }
    tracing::debug!(target = ticker.target(), "Follower ticker finished");
}

/// Drive the header's follower badge from fetch to final count.
///
/// On success the badge shows `0` and then every ticker step. On failure it
/// shows [`FollowerDisplay::Error`] and `sleep` is never called.
pub async fn animate_follower_count<S, Fut, D>(
    client: &impl JsonClient,
    endpoints: &Endpoints,
    sleep: S,
    mut on_display: D,
) where
    S: FnMut(Duration) -> Fut,
    Fut: Future<Output = ()>,
    D: FnMut(FollowerDisplay),
{
    match fetch_follower_count(client, endpoints).await {
        Ok(target) => {
            on_display(FollowerDisplay::Count(0));
            drive_ticker(Ticker::new(target), sleep, |value| {
                on_display(FollowerDisplay::Count(value))
            })
            .await;
        }
        Err(e) => {
            tracing::warn!("Failed to fetch follower count: {}", e);
            on_display(FollowerDisplay::Error);
        }
    }
}
