//! Core types for the SquiirShop client.
//!
//! This module provides type-safe wrappers for common domain concepts.

pub mod credential;
pub mod email;
pub mod id;
pub mod num;

pub use credential::BearerToken;
pub use email::{Email, EmailError};
pub use id::*;
pub use num::{to_safe_decimal, to_safe_quantity};
