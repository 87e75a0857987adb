//! Transit data models, types, and traits.

pub mod traits;
pub mod types;

// Re-exports for convenience
pub use traits::TransitProvider;
pub use types::{expand_round_trip, Bus, BusInfo, BusLine, Result, Stop, TransitError};
