//! Catalog implementations for fetching R versions

pub mod rversions;

pub use rversions::RVersionsCatalog;
