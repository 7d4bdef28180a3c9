//! Site configuration and content.
//!
//! Everything the page renders or talks to is described by [`SiteConfig`].
//! The built-in defaults describe the restaurant as it is today; a JSON
//! document can override any subset of the fields.

use serde::{Deserialize, Serialize};

use crate::error::{SiteError, SiteResult};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    pub name: String,
    pub city: String,
    pub contact: ContactDetails,
    pub hours: OpeningHours,
    pub endpoints: Endpoints,
    pub media: Media,
    pub menu: Vec<MenuItem>,
    pub events: Vec<EventSlide>,
    pub gallery: Vec<GalleryImage>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ContactDetails {
    /// Number shown in the top bar, as displayed
    pub phone_display: String,
    /// Same number in `tel:` form
    pub phone_href: String,
    pub email: String,
    pub address: String,
    pub footer_phone: String,
    pub footer_address: String,
    /// Destination of contact-form messages, international format
    pub whatsapp_phone: String,
    pub instagram_url: String,
    pub facebook_url: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OpeningHours {
    pub top_bar: String,
    pub reservations: String,
    pub footer: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Endpoints {
    pub follower_count_url: String,
    pub chat_bot_api: String,
    /// Injected at build time; never committed
    #[serde(skip_serializing)]
    pub chat_bot_token: Option<String>,
    pub chat_bot_chat_id: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Media {
    pub logo: String,
    pub hero_video: String,
    pub about_image: String,
    pub reservation_background: String,
    pub map_embed_url: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MenuItem {
    pub name: String,
    pub description: String,
    pub price: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventSlide {
    pub title: String,
    pub text: String,
    pub image: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GalleryImage {
    pub src: String,
    pub alt: String,
}

impl SiteConfig {
    /// Parse a JSON document; missing fields keep their defaults.
    pub fn from_json(json: &str) -> SiteResult<Self> {
        serde_json::from_str(json).map_err(|e| SiteError::Config(e.to_string()))
    }

    /// Like [`SiteConfig::from_json`], but a malformed document is logged and
    /// replaced by the defaults.
    pub fn from_json_or_default(json: &str) -> Self {
        match Self::from_json(json) {
            Ok(config) => config,
            Err(e) => {
                tracing::error!("Falling back to built-in site config: {}", e);
                Self::default()
            }
        }
    }

    /// Override the chat-bot credentials; `None` and blank values leave the
    /// current setting untouched.
    pub fn with_bot_credentials(mut self, token: Option<&str>, chat_id: Option<&str>) -> Self {
        if let Some(token) = token.map(str::trim).filter(|t| !t.is_empty()) {
            self.endpoints.chat_bot_token = Some(token.to_string());
        }
        if let Some(chat_id) = chat_id.map(str::trim).filter(|c| !c.is_empty()) {
            self.endpoints.chat_bot_chat_id = Some(chat_id.to_string());
        }
        self
    }
}

impl Endpoints {
    /// `sendMessage` URL and chat id, or a configuration error when either
    /// credential is missing.
    pub fn chat_bot_target(&self) -> SiteResult<(String, &str)> {
        let token = self
            .chat_bot_token
            .as_deref()
            .ok_or_else(|| SiteError::Config("chat bot token is not configured".into()))?;
        let chat_id = self
            .chat_bot_chat_id
            .as_deref()
            .ok_or_else(|| SiteError::Config("chat bot chat id is not configured".into()))?;
        Ok((crate::messaging::chat_bot_url(&self.chat_bot_api, token), chat_id))
    }
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            name: "76 Café Resto".to_string(),
            city: "Gafsa".to_string(),
            contact: ContactDetails::default(),
            hours: OpeningHours::default(),
            endpoints: Endpoints::default(),
            media: Media::default(),
            menu: default_menu(),
            events: default_events(),
            gallery: (1..=6)
                .map(|i| GalleryImage {
                    src: format!("/76/g{i}.png"),
                    alt: format!("Gallery image {i}"),
                })
                .collect(),
        }
    }
}

impl Default for ContactDetails {
    fn default() -> Self {
        Self {
            phone_display: "+1 (234) 567-890".to_string(),
            phone_href: "tel:+1234567890".to_string(),
            email: "contact@76caferesto.com".to_string(),
            address: "Rue Mongi Slim, Gafsa, Tunisia".to_string(),
            footer_phone: "+216 98 204 202".to_string(),
            footer_address: "P15, Gafsa Est, Gafsa Governorate, Tunisia".to_string(),
            whatsapp_phone: "+21653400440".to_string(),
            instagram_url: "https://www.instagram.com/the.76.gafsa".to_string(),
            facebook_url: "#".to_string(),
        }
    }
}

impl Default for OpeningHours {
    fn default() -> Self {
        Self {
            top_bar: "Open: 6:30 AM – 8:30 PM".to_string(),
            reservations: "Open daily 6:30 AM – 9:30 PM".to_string(),
            footer: "Every day: 5:00 AM – 12:00 AM".to_string(),
        }
    }
}

impl Default for Endpoints {
    fn default() -> Self {
        Self {
            follower_count_url: "https://www.pathsocial.com/wp-admin/admin-ajax.php?action=growth_page_rapid_search&account_handle=the.76.gafsa".to_string(),
            chat_bot_api: "https://api.telegram.org".to_string(),
            chat_bot_token: None,
            chat_bot_chat_id: None,
        }
    }
}

impl Default for Media {
    fn default() -> Self {
        Self {
            logo: "/76/logo.png".to_string(),
            hero_video: "/76/Hero.mp4".to_string(),
            about_image: "/76/about.png".to_string(),
            reservation_background: "/76/res.png".to_string(),
            map_embed_url: "https://www.google.com/maps?q=76%20Cafe%20Resto%20Gafsa&output=embed"
                .to_string(),
        }
    }
}

fn default_menu() -> Vec<MenuItem> {
    [
        ("Grilled Mix Platter", "Selection of tender meats, seasonal vegetables, and house sauces", "38 DT"),
        ("76 Signature Pizza", "Thin crust, rich tomato sauce, mozzarella, fresh toppings", "22 DT"),
        ("Tunisian Brik", "Crispy pastry filled with egg, tuna, and herbs", "9 DT"),
        ("Fresh Fruit Cocktail", "Refreshing seasonal fruits blended into a tropical mix", "12 DT"),
        ("Cappuccino", "Velvety foam with rich espresso base", "7 DT"),
        ("Chocolate Fondant", "Warm, gooey chocolate cake with vanilla ice cream", "15 DT"),
    ]
    .into_iter()
    .map(|(name, description, price)| MenuItem {
        name: name.to_string(),
        description: description.to_string(),
        price: price.to_string(),
    })
    .collect()
}

fn default_events() -> Vec<EventSlide> {
    [
        ("Birthdays", "Celebrate your special day in a warm atmosphere with a personalized menu and festive decorations.", "/76/birthday.png"),
        ("Weddings", "An elegant and intimate setting to say “yes” surrounded by your loved ones, with custom catering service.", "/76/wedding.png"),
        ("Meetings", "Host your business meetings in a quiet space, equipped for your presentations and discussions.", "/76/meeting.png"),
    ]
    .into_iter()
    .map(|(title, text, image)| EventSlide {
        title: title.to_string(),
        text: text.to_string(),
        image: image.to_string(),
    })
    .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_describe_the_restaurant() {
        let config = SiteConfig::default();
        assert_eq!(config.menu.len(), 6);
        assert_eq!(config.events.len(), 3);
        assert_eq!(config.gallery.len(), 6);
        assert_eq!(config.gallery[5].src, "/76/g6.png");
        assert!(config.endpoints.chat_bot_token.is_none());
    }

    #[test]
    fn partial_json_keeps_defaults() {
        let config = SiteConfig::from_json(
            r#"{ "city": "Tunis", "contact": { "whatsapp_phone": "+21600000000" } }"#,
        )
        .unwrap();
        assert_eq!(config.city, "Tunis");
        assert_eq!(config.contact.whatsapp_phone, "+21600000000");
        assert_eq!(config.contact.email, ContactDetails::default().email);
        assert_eq!(config.menu, SiteConfig::default().menu);
    }

    #[test]
    fn malformed_json_falls_back() {
        assert!(matches!(
            SiteConfig::from_json("{ not json"),
            Err(SiteError::Config(_))
        ));
        assert_eq!(SiteConfig::from_json_or_default("[]"), SiteConfig::default());
    }

    #[test]
    fn bot_credentials_override_and_ignore_blanks() {
        let config = SiteConfig::default()
            .with_bot_credentials(Some("abc:123"), Some("  "))
            .with_bot_credentials(None, Some("99"));
        assert_eq!(config.endpoints.chat_bot_token.as_deref(), Some("abc:123"));
        assert_eq!(config.endpoints.chat_bot_chat_id.as_deref(), Some("99"));

        let (url, chat_id) = config.endpoints.chat_bot_target().unwrap();
        assert_eq!(url, "https://api.telegram.org/botabc:123/sendMessage");
        assert_eq!(chat_id, "99");
    }

    #[test]
    fn missing_credentials_are_a_config_error() {
        let endpoints = Endpoints::default();
        assert!(matches!(
            endpoints.chat_bot_target(),
            Err(SiteError::Config(_))
        ));
    }

    #[test]
    fn token_is_never_serialized() {
        let config = SiteConfig::default().with_bot_credentials(Some("secret"), None);
        let json = serde_json::to_string(&config).unwrap();
        assert!(!json.contains("secret"));
    }
}
