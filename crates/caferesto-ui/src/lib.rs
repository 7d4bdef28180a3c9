//! 76 Café Resto UI Components
//!
//! Dioxus components shared by the site's sections.
//!
//! ## Palette
//!
//! - **Saffron (#EDB95E)**: accents, prices, primary actions
//! - **Caramel (#c7a17a)**: header and reservation accents
//! - **Charcoal (#0d0d0e)**: header, events band and footer
//!
//! Every section heading and card is wrapped in [`Reveal`] so the page
//! builds itself up as the visitor scrolls.

pub mod components;

pub use components::*;
