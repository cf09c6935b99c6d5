//! Remote Layer
//!
//! Access to the guest/wishlist script:
//! - traits: the `RegistryEndpoint` seam
//! - wire: request bodies and response envelopes
//! - http: `reqwest` implementation
//! - memory: in-memory implementation for tests

mod http;
#[cfg(test)]
mod memory;
mod traits;
mod wire;

pub use http::HttpEndpoint;
#[cfg(test)]
pub(crate) use memory::MemoryEndpoint;
pub use traits::RegistryEndpoint;
pub use wire::ToggleRequest;
