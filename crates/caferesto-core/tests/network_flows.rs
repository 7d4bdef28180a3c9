//! Follower fetch, ticker and reservation flows against a mock transport.

use std::cell::{Cell, RefCell};
use std::time::Duration;

use caferesto_core::{
    animate_follower_count, drive_ticker, fetch_follower_count, send_reservation, Endpoints,
    FollowerDisplay, JsonClient, ReservationForm, SiteError, SiteResult, Ticker,
};
use chrono::NaiveDate;
use serde_json::{json, Value};

// ============================================================================
// Mock transport
// ============================================================================

#[derive(Default)]
struct MockClient {
    get_response: Option<SiteResult<Value>>,
    post_error: Option<SiteError>,
    gets: Cell<usize>,
    posts: RefCell<Vec<(String, Value)>>,
}

impl MockClient {
    fn answering(body: Value) -> Self {
        Self {
            get_response: Some(Ok(body)),
            ..Default::default()
        }
    }

    fn failing(err: SiteError) -> Self {
        Self {
            get_response: Some(Err(err.clone())),
            post_error: Some(err),
            ..Default::default()
        }
    }
}

impl JsonClient for MockClient {
    async fn get_json(&self, _url: &str) -> SiteResult<Value> {
        self.gets.set(self.gets.get() + 1);
        self.get_response
            .clone()
            .unwrap_or_else(|| Err(SiteError::Network("no response scripted".into())))
    }

    async fn post_json(&self, url: &str, body: &Value) -> SiteResult<()> {
        self.posts.borrow_mut().push((url.to_string(), body.clone()));
        match &self.post_error {
            Some(err) => Err(err.clone()),
            None => Ok(()),
        }
    }
}

fn endpoints_with_bot() -> Endpoints {
    Endpoints {
        chat_bot_token: Some("TOKEN".into()),
        chat_bot_chat_id: Some("5435".into()),
        ..Endpoints::default()
    }
}

fn reservation() -> ReservationForm {
    ReservationForm {
        name: "Ali".into(),
        phone: "123".into(),
        email: "a@b.com".into(),
        party: "2".into(),
        date: "2025-01-01".into(),
        time: "19:00".into(),
        notes: String::new(),
    }
}

fn jan_first() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 1, 1).unwrap()
}

/// Run the badge flow with a counting sleep; returns every display shown
/// and the number of sleeps taken.
async fn badge_displays(client: &MockClient) -> (Vec<FollowerDisplay>, usize) {
    let shown = RefCell::new(Vec::new());
    let sleeps = Cell::new(0);
    animate_follower_count(
        client,
        &Endpoints::default(),
        |d| {
            sleeps.set(sleeps.get() + 1);
            tokio::time::sleep(d)
        },
        |display| shown.borrow_mut().push(display),
    )
    .await;
    (shown.into_inner(), sleeps.get())
}

// ============================================================================
// Follower count
// ============================================================================

#[tokio::test]
async fn fetches_textual_count_once() {
    let client = MockClient::answering(json!({
        "success": true,
        "data": { "followers_count": "1.5K" }
    }));

    let count = fetch_follower_count(&client, &Endpoints::default()).await;
    assert_eq!(count, Ok(1500));
    assert_eq!(client.gets.get(), 1);
}

#[tokio::test]
async fn malformed_response_shows_error() {
    let client = MockClient::answering(json!({ "success": false }));
    let result = fetch_follower_count(&client, &Endpoints::default()).await;

    assert!(matches!(result, Err(SiteError::InvalidPayload(_))));

    let (shown, sleeps) = badge_displays(&client).await;
    assert_eq!(shown, vec![FollowerDisplay::Error]);
    assert_eq!(shown.last().map(|d| d.to_string()), Some("Error".to_string()));
    assert_eq!(sleeps, 0);
}

#[tokio::test]
async fn transport_failure_is_not_retried() {
    let _ = tracing_subscriber::fmt::try_init();

    let client = MockClient::failing(SiteError::HttpStatus {
        status: 500,
        url: "x".into(),
    });
    let result = fetch_follower_count(&client, &Endpoints::default()).await;

    assert!(result.is_err());
    assert_eq!(client.gets.get(), 1);

    let (shown, sleeps) = badge_displays(&client).await;
    assert_eq!(shown.last(), Some(&FollowerDisplay::Error));
    assert_eq!(sleeps, 0);
    assert_eq!(client.gets.get(), 2);
}

#[tokio::test]
async fn oversized_count_shows_error_without_ticking() {
    let client = MockClient::answering(json!({
        "success": true,
        "data": { "followers_count": "99999999999999999999999M" }
    }));

    let (shown, sleeps) = badge_displays(&client).await;
    assert_eq!(shown, vec![FollowerDisplay::Error]);
    assert_eq!(sleeps, 0);
}

#[tokio::test(start_paused = true)]
async fn badge_counts_up_from_zero_after_fetch() {
    let client = MockClient::answering(json!({
        "success": true,
        "data": { "followers_count": 1500 }
    }));

    let (shown, sleeps) = badge_displays(&client).await;
    assert_eq!(shown.first(), Some(&FollowerDisplay::Count(0)));
    assert_eq!(shown.last(), Some(&FollowerDisplay::Count(1500)));
    assert_eq!(shown.len(), 101);
    assert_eq!(sleeps, 100);
}

// ============================================================================
// Ticker
// ============================================================================

#[tokio::test(start_paused = true)]
async fn ticker_reaches_target_and_stops() {
    let seen = RefCell::new(Vec::new());
    let start = tokio::time::Instant::now();

    drive_ticker(Ticker::new(1500), tokio::time::sleep, |v| {
        seen.borrow_mut().push(v)
    })
    .await;

    let seen = seen.into_inner();
    assert_eq!(seen.len(), 100);
    assert_eq!(seen.last(), Some(&1500));
    assert!(seen.windows(2).all(|w| w[0] <= w[1]));
    assert_eq!(start.elapsed(), Duration::from_millis(50 * 100));

    let display = FollowerDisplay::Count(*seen.last().unwrap());
    assert_eq!(display.to_string(), "1.5K");
}

#[tokio::test(start_paused = true)]
async fn ticker_with_zero_target_never_sleeps() {
    let start = tokio::time::Instant::now();
    let mut calls = 0;
    drive_ticker(Ticker::new(0), tokio::time::sleep, |_| calls += 1).await;
    assert_eq!(calls, 0);
    assert_eq!(start.elapsed(), Duration::ZERO);
}

#[tokio::test(start_paused = true)]
async fn dropping_the_ticker_cancels_it() {
    let seen = RefCell::new(Vec::new());
    let ticker = drive_ticker(Ticker::new(1500), tokio::time::sleep, |v| {
        seen.borrow_mut().push(v)
    });

    let timed_out = tokio::time::timeout(Duration::from_millis(275), ticker).await;
    assert!(timed_out.is_err());
    assert_eq!(seen.into_inner(), vec![15, 30, 45, 60, 75]);
}

// ============================================================================
// Reservation
// ============================================================================

#[tokio::test]
async fn reservation_posts_formatted_message() {
    let _ = tracing_subscriber::fmt::try_init();

    let client = MockClient::default();
    send_reservation(&client, &endpoints_with_bot(), &reservation(), jan_first())
        .await
        .unwrap();

    let posts = client.posts.borrow();
    assert_eq!(posts.len(), 1);
    let (url, body) = &posts[0];
    assert_eq!(url, "https://api.telegram.org/botTOKEN/sendMessage");
    assert_eq!(body["chat_id"], "5435");

    let text = body["text"].as_str().unwrap();
    for line in [
        "Name: Ali",
        "Phone: 123",
        "Email: a@b.com",
        "Party Size: 2",
        "Date: 2025-01-01",
        "Time: 19:00",
        "Special Requests: None",
    ] {
        assert!(text.contains(line), "missing {line:?} in {text:?}");
    }
}

#[tokio::test]
async fn invalid_reservation_is_never_sent() {
    let client = MockClient::default();
    let mut form = reservation();
    form.party = "40".into();

    let result = send_reservation(&client, &endpoints_with_bot(), &form, jan_first()).await;
    assert!(matches!(result, Err(SiteError::InvalidReservation(_))));
    assert!(client.posts.borrow().is_empty());
}

#[tokio::test]
async fn missing_bot_credentials_are_reported() {
    let client = MockClient::default();
    let result =
        send_reservation(&client, &Endpoints::default(), &reservation(), jan_first()).await;
    assert!(matches!(result, Err(SiteError::Config(_))));
    assert!(client.posts.borrow().is_empty());
}

#[tokio::test]
async fn delivery_failure_surfaces_to_caller() {
    let _ = tracing_subscriber::fmt::try_init();

    let client = MockClient::failing(SiteError::Network("offline".into()));
    let result =
        send_reservation(&client, &endpoints_with_bot(), &reservation(), jan_first()).await;
    assert_eq!(result, Err(SiteError::Network("offline".into())));
}
