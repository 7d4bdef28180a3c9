//! Reusable UI components
//!
//! Buttons, form fields, the follower badge and the scroll-reveal wrapper.

mod button;
mod follower_badge;
mod input;
mod reveal;

pub use button::*;
pub use follower_badge::*;
pub use input::*;
pub use reveal::*;
