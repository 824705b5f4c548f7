//! Fay Collectibles Core - shared types library.
//!
//! This crate provides the domain primitives used across all Fay
//! Collectibles components:
//! - `storefront` - Catalogue, shopping bag, checkout, and mock account state
//! - `integration-tests` - Cross-module tests
//!
//! # Architecture
//!
//! The core crate contains only types - no I/O, no network access, no
//! global state. Everything here is cheap to construct and safe to use
//! from any crate in the workspace.
//!
//! # Modules
//!
//! - [`types`] - Newtype wrappers for type-safe IDs, prices, emails, and statuses

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod types;

pub use types::*;
