//! Home page - the whole café site on one scrolling page.

use dioxus::prelude::*;

use crate::components::{
    About, ContactSection, EventsCarousel, Footer, Gallery, Hero, MenuList, NavHeader,
    ReservationSection, TopBar,
};

/// Home page component.
///
/// Sections appear in the order the navigation anchors expect.
#[component]
pub fn Home() -> Element {
    rsx! {
        TopBar {}
        NavHeader {}
        main {
            Hero {}
            About {}
            EventsCarousel {}
            MenuList {}
            Gallery {}
            ContactSection {}
            ReservationSection {}
        }
        Footer {}
    }
}
