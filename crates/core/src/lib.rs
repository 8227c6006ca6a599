//! SquiirShop Core - Shared types library.
//!
//! This crate provides common types used across the SquiirShop client
//! components:
//! - `client` - Storefront data layer (catalog, cart, account, merchant)
//! - `cli` - Command-line storefront frontend
//!
//! # Architecture
//!
//! The core crate contains only types and pure helpers - no I/O, no HTTP
//! clients. This keeps it lightweight and allows it to be used anywhere.
//!
//! # Modules
//!
//! - [`types`] - Newtype wrappers for type-safe IDs, emails, and the bearer
//!   credential, plus lenient numeric coercion for untrusted wire fields

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod types;

pub use types::*;
