//! UI Components
//!
//! One component per page section, plus the toast stack.

mod countdown_section;
mod event_details;
mod footer;
mod gallery_section;
mod gift_registry;
mod hero_section;
mod icon_nav;
mod rsvp_section;
mod toaster;

pub use countdown_section::CountdownSection;
pub use event_details::EventDetails;
pub use footer::Footer;
pub use gallery_section::GallerySection;
pub use gift_registry::GiftRegistrySection;
pub use hero_section::HeroSection;
pub use icon_nav::IconNav;
pub use rsvp_section::RsvpSection;
pub use toaster::Toaster;
