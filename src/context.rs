//! Site configuration context.
//!
//! The configuration is read once at startup and shared, read-only, with
//! every section through `use_context`.
//!
//! ## Usage
//!
//! ```ignore
//! // In child components
//! let site = use_site_config();
//! let phone = site.read().contact.whatsapp_phone.clone();
//! ```

use caferesto_core::SiteConfig;
use dioxus::prelude::*;

/// Site content shipped with the build. Fields left out keep their defaults.
const SITE_JSON: &str = include_str!("../site.json");

/// Build the site configuration.
///
/// Chat-bot credentials are injected at build time through
/// `CAFERESTO_BOT_TOKEN` and `CAFERESTO_BOT_CHAT_ID` so they never live in
/// the repository.
pub fn load_site_config() -> SiteConfig {
    let config = SiteConfig::from_json_or_default(SITE_JSON).with_bot_credentials(
        option_env!("CAFERESTO_BOT_TOKEN"),
        option_env!("CAFERESTO_BOT_CHAT_ID"),
    );

    if config.endpoints.chat_bot_token.is_none() {
        tracing::warn!("No chat bot token configured; reservations cannot be delivered");
    }
    tracing::info!(
        menu_items = config.menu.len(),
        gallery_images = config.gallery.len(),
        "Site configuration loaded"
    );
    config
}

/// Hook to access the site configuration from context.
pub fn use_site_config() -> Signal<SiteConfig> {
    use_context::<Signal<SiteConfig>>()
}
