//! SquiirShop client library.
//!
//! Client-side data layer for the SquiirShop REST backend. All business
//! logic (inventory, pricing, order persistence, authentication, payment)
//! lives server-side; this crate is the presentation-facing state layer:
//! it fetches, holds, and mutates the local copy of catalog, cart, account,
//! and merchant data, and submits user actions back over REST.
//!
//! # Architecture
//!
//! - [`api`] - the `ApiGateway` trait (one method per backend operation)
//!   and its `reqwest` implementation; components never touch HTTP directly
//! - [`credentials`] - injected credential store supplying the bearer token
//! - [`catalog`] / [`cart`] - the storefront components, each a small state
//!   machine (`Loading -> Ready | Failed`) mutated only by its own
//!   completion handlers
//! - [`auth`] / [`merchant`] / [`contact`] - account, seller-panel, and
//!   contact-form clients
//!
//! Components are generic over the gateway and credential store so tests
//! can drive them with in-memory fakes.

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod api;
pub mod auth;
pub mod cart;
pub mod catalog;
pub mod config;
pub mod contact;
pub mod credentials;
pub mod merchant;
pub mod mount;

#[cfg(test)]
pub(crate) mod testing;
