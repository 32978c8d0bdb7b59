//! `pyroshop-storefront`
//!
//! **Responsibility:** the presentation shell around the cart.
//!
//! This crate provides:
//! - Environment-driven configuration
//! - The [`Storefront`] lifecycle root, which owns the cart store and hands it
//!   to views explicitly
//! - Views that subscribe to committed cart states and re-render

pub mod app;
pub mod config;
pub mod views;

pub use app::Storefront;
pub use config::StorefrontConfig;
pub use views::{CartBadge, CartPage, View};
