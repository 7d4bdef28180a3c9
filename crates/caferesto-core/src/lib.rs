//! 76 Café Resto core library
//!
//! Browser-independent logic behind the restaurant's single-page site.
//!
//! ## Overview
//!
//! - [`reveal`]: scroll-reveal state machine and the inline style it drives
//! - [`followers`]: follower-count parsing, ticker and display format
//! - [`messaging`]: contact (WhatsApp) and reservation (chat bot) messages
//! - [`carousel`]: events carousel paging and the looping gallery track
//! - [`config`]: site content and outbound endpoints
//! - [`client`]: the network flows, over a pluggable [`JsonClient`]
//!
//! ## Quick Start
//!
//! ```
//! use caferesto_core::{style_for, RevealConfig};
//!
//! let config = RevealConfig::default().with_offset(0, 12).with_delay(160);
//! let hidden = style_for(false, &config);
//! assert_eq!(hidden.transform, "translate3d(0px, 12px, 0)");
//! ```

pub mod carousel;
pub mod client;
pub mod config;
pub mod error;
pub mod followers;
pub mod messaging;
pub mod reveal;

// Re-exports
pub use carousel::{looped_track, slides_per_view, Carousel, AUTOPLAY_DELAY};
pub use client::{
    animate_follower_count, drive_ticker, fetch_follower_count, send_reservation, JsonClient,
};
pub use config::{
    ContactDetails, Endpoints, EventSlide, GalleryImage, Media, MenuItem, OpeningHours,
    SiteConfig,
};
pub use error::{SiteError, SiteResult};
pub use followers::{
    format_count, parse_follower_response, FollowerDisplay, Ticker, MAX_FOLLOWER_COUNT,
};
pub use messaging::{ChatBotMessage, ContactMessage, ReservationForm, ReservationRequest};
pub use reveal::{
    style_for, IntersectionSample, MotionEnvironment, MountOutcome, RevealConfig, RevealState,
    RevealStyle, WatchAction,
};
