//! Version resolution layer
//!
//! Turns a user-supplied R version specifier ("4.1.3", "4.1", "4.x") into a
//! concrete version published by the upstream version index.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐     ┌─────────────┐     ┌─────────────┐
//! │   Catalog   │────▶│  Resolver   │────▶│ Orchestrator│
//! │  (fetch)    │     │ (prefix+max)│     │  (install)  │
//! └─────────────┘     └─────────────┘     └─────────────┘
//!        │                   │
//!        ▼                   ▼
//! ┌─────────────┐     ┌─────────────┐
//! │  Catalogs   │     │   Semver    │
//! │ (rversions) │     │ (normalize) │
//! └─────────────┘     └─────────────┘
//! ```
//!
//! # Modules
//!
//! - [`catalog`]: Catalog trait for fetching the published version list
//! - [`catalogs`]: Concrete catalog implementations
//! - [`error`]: Error types for catalog and resolver operations
//! - [`resolver`]: Specifier classification and version selection
//! - [`semver`]: Version normalization helpers

pub mod catalog;
pub mod catalogs;
pub mod error;
pub mod resolver;
pub mod semver;
