//! Transit data providers.

pub mod catalogue;

pub use catalogue::Catalogue;
