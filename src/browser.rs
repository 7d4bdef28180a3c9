//! Browser-side plumbing: fetch, new tabs, smooth scrolling, timers.

use std::time::Duration;

use caferesto_core::{JsonClient, SiteError, SiteResult};
use gloo::net::http::{Request, Response};
use web_sys::{ScrollBehavior, ScrollIntoViewOptions};

/// [`JsonClient`] over the browser's `fetch`.
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserClient;

fn check_status(response: Response) -> SiteResult<Response> {
    if response.ok() {
        Ok(response)
    } else {
        Err(SiteError::HttpStatus {
            status: response.status(),
            url: response.url(),
        })
    }
}

impl JsonClient for BrowserClient {
    async fn get_json(&self, url: &str) -> SiteResult<serde_json::Value> {
        let response = Request::get(url)
            .header("Accept", "application/json")
            .send()
            .await
            .map_err(|e| SiteError::Network(e.to_string()))?;

        check_status(response)?
            .json::<serde_json::Value>()
            .await
            .map_err(|e| SiteError::InvalidPayload(e.to_string()))
    }

    async fn post_json(&self, url: &str, body: &serde_json::Value) -> SiteResult<()> {
        let response = Request::post(url)
            .json(body)
            .map_err(|e| SiteError::Serialization(e.to_string()))?
            .send()
            .await
            .map_err(|e| SiteError::Network(e.to_string()))?;

        check_status(response).map(|_| ())
    }
}

/// Open `url` in a new browsing context.
pub fn open_in_new_tab(url: &str) -> SiteResult<()> {
    let window = web_sys::window().ok_or_else(|| SiteError::Browser("no window".into()))?;
    match window.open_with_url_and_target(url, "_blank") {
        Ok(Some(_)) => Ok(()),
        Ok(None) => Err(SiteError::Browser("new tab was blocked".into())),
        Err(e) => Err(SiteError::Browser(format!("{:?}", e))),
    }
}

/// Smoothly scroll the element with `id` into view. Missing ids are ignored.
pub fn scroll_to_section(id: &str) {
    let Some(element) = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.get_element_by_id(id))
    else {
        tracing::debug!("No section #{} to scroll to", id);
        return;
    };

    let options = ScrollIntoViewOptions::new();
    options.set_behavior(ScrollBehavior::Smooth);
    element.scroll_into_view_with_scroll_into_view_options(&options);
}

/// Current viewport width in CSS pixels; 0 when unknown.
pub fn viewport_width() -> u32 {
    web_sys::window()
        .and_then(|w| w.inner_width().ok())
        .and_then(|w| w.as_f64())
        .map(|w| w.max(0.0) as u32)
        .unwrap_or(0)
}

/// Today's date in the visitor's time zone.
pub fn today() -> chrono::NaiveDate {
    chrono::Local::now().date_naive()
}

/// Timer future driven by `setTimeout`.
pub async fn sleep(duration: Duration) {
    gloo::timers::future::sleep(duration).await;
}
