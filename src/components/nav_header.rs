//! Navigation Header Component
//!
//! Sticky header with the logo, in-page navigation, the Instagram follower
//! ticker and the reservation shortcuts. Below 768px the links move into the
//! slide-in [`MobileNav`].

use caferesto_core::{animate_follower_count, FollowerDisplay};
use caferesto_ui::{Button, ButtonVariant, FollowerBadge, IconButton, LinkButton};
use dioxus::prelude::*;

use crate::browser::{scroll_to_section, sleep, BrowserClient};
use crate::components::mobile_nav::MobileNav;
use crate::context::use_site_config;

/// Section of the page a navigation link points at
#[derive(Clone, Copy, PartialEq, Debug)]
pub enum NavLocation {
    Home,
    About,
    Menu,
    Contact,
}

impl NavLocation {
    pub const ALL: [NavLocation; 4] = [
        NavLocation::Home,
        NavLocation::About,
        NavLocation::Menu,
        NavLocation::Contact,
    ];

    /// Get the display name for this location
    pub fn display_name(&self) -> &'static str {
        match self {
            NavLocation::Home => "Home",
            NavLocation::About => "About",
            NavLocation::Menu => "Menu",
            NavLocation::Contact => "Contact",
        }
    }

    /// In-page anchor for this location
    pub fn href(&self) -> &'static str {
        match self {
            NavLocation::Home => "#",
            NavLocation::About => "#about",
            NavLocation::Menu => "#menu",
            NavLocation::Contact => "#contact",
        }
    }
}

/// Navigation Header component
///
/// The follower count is fetched once on mount. On success the badge counts
/// up from zero in 1% steps every 50ms; on failure it reads "Error" and no
/// timer runs. The counting task belongs to this component and stops with it.
#[component]
pub fn NavHeader() -> Element {
    let site = use_site_config();
    let mut menu_open = use_signal(|| false);
    let mut followers = use_signal(FollowerDisplay::default);

    use_future(move || async move {
        let endpoints = site.peek().endpoints.clone();
        animate_follower_count(&BrowserClient, &endpoints, sleep, |display| {
            followers.set(display)
        })
        .await;
    });

    let config = site.read();

    rsx! {
        header { class: "site-header",
            div { class: "site-header__inner",
                img {
                    class: "site-header__logo",
                    src: "{config.media.logo}",
                    alt: "{config.name} Logo",
                    width: "40",
                    height: "40",
                }

                nav { class: "site-header__nav",
                    for location in NavLocation::ALL {
                        a { class: "nav-link", href: location.href(), "{location.display_name()}" }
                    }
                }

                div { class: "site-header__actions",
                    FollowerBadge {
                        profile_url: config.contact.instagram_url.clone(),
                        display: followers(),
                    }
                    LinkButton {
                        href: "#reservation".to_string(),
                        variant: ButtonVariant::Outline,
                        class: "hide-below-sm".to_string(),
                        "Reserve"
                    }
                    Button {
                        variant: ButtonVariant::Caramel,
                        class: "hide-below-lg".to_string(),
                        onclick: move |_| scroll_to_section("reservation"),
                        "Book a Table"
                    }
                    IconButton {
                        class: "hamburger".to_string(),
                        aria_label: "Open menu".to_string(),
                        onclick: move |_| menu_open.set(true),
                        "\u{2630}"
                    }
                }
            }

            MobileNav {
                open: menu_open(),
                on_close: move |_| menu_open.set(false),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nav_locations_point_at_sections() {
        let hrefs: Vec<_> = NavLocation::ALL.iter().map(|l| l.href()).collect();
        assert_eq!(hrefs, vec!["#", "#about", "#menu", "#contact"]);
        assert_eq!(NavLocation::Menu.display_name(), "Menu");
    }
}
