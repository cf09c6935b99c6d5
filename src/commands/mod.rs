//! Browser Command Wrappers
//!
//! Frontend bindings to the browser and the registry endpoint, organized by concern.

mod config;
mod guest;
mod location;
mod registry;
mod rsvp;
mod storage;
mod timer;
mod toast;

// Re-export all public items
pub use config::*;
pub use guest::*;
pub use location::*;
pub use registry::*;
pub use rsvp::*;
pub use storage::*;
pub use timer::*;
pub use toast::*;
