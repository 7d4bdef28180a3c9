//! Follower Badge Component
//!
//! Instagram icon plus the animated follower count shown in the header.

use caferesto_core::FollowerDisplay;
use dioxus::prelude::*;

/// Properties for the FollowerBadge component
#[derive(Clone, PartialEq, Props)]
pub struct FollowerBadgeProps {
    /// Profile opened when the icon is clicked
    pub profile_url: String,
    /// Current badge state
    pub display: FollowerDisplay,
}

/// Returns the CSS modifier for a badge state
pub fn badge_class(display: FollowerDisplay) -> &'static str {
    match display {
        FollowerDisplay::Loading => "follower-count loading",
        FollowerDisplay::Error => "follower-count error",
        FollowerDisplay::Count(_) => "follower-count",
    }
}

#[component]
pub fn FollowerBadge(props: FollowerBadgeProps) -> Element {
    let text = props.display.to_string();

    rsx! {
        div { class: "follower-badge",
            a {
                class: "social-icon",
                href: "{props.profile_url}",
                target: "_blank",
                rel: "noopener noreferrer",
                "aria-label": "Instagram",
                "\u{25CE}"
            }
            span {
                class: badge_class(props.display),
                "aria-live": "polite",
                "{text}"
            }
        }
    }
}
