//! Page sections for the café site.
//!
//! Each section reads the shared [`SiteConfig`](caferesto_core::SiteConfig)
//! from context; shared widgets live in `caferesto-ui`.

mod about;
mod contact_section;
mod events_carousel;
mod footer;
mod gallery;
mod hero;
mod menu_list;
mod mobile_nav;
mod nav_header;
mod reservation_section;
mod top_bar;

pub use about::About;
pub use contact_section::ContactSection;
pub use events_carousel::EventsCarousel;
pub use footer::Footer;
pub use gallery::Gallery;
pub use hero::Hero;
pub use menu_list::MenuList;
pub use nav_header::NavHeader;
pub use reservation_section::ReservationSection;
pub use top_bar::TopBar;
