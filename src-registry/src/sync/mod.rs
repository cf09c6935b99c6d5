//! Gift Claim Synchronization
//!
//! - registry: the synchronizer and its snapshots
//! - grouping: category grouping and ordering
//! - notice: outcome notices and the observer seam
//! - poll: background refresh lifecycle

mod grouping;
mod notice;
mod poll;
mod registry;
mod tests;

pub use grouping::{group_by_category, CategoryGroup};
pub use notice::{Notice, RegistryObserver};
pub use poll::{Disposer, Sleeper};
pub use registry::{GiftGroup, GiftRegistry, GiftView, RegistrySnapshot};
