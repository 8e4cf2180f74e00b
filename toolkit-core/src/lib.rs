//! Core logic of the useful-tools application.
//!
//! This crate provides the pure, I/O-free part of every tool:
//! - The spin wheel: weighted random selection, recent-winner avoidance
//!   and URL-safe sharing
//! - Currency conversion over an exchange-rate table
//! - The static tool catalog and the hiking safety guide
//!
//! The HTTP layer lives in `toolkit-server`; it only forwards requests here.

/// Spin-wheel engine.
///
/// Exposes the wheel configuration, the selection function, the history
/// value threaded between spins and the share-link codec.
pub mod wheel;

/// Currency conversion.
pub mod currency;

/// Static tool registry.
pub mod catalog;

/// Hiking safety guide content.
pub mod hiking;

/// Error types of the wheel and the currency converter.
pub mod error;

pub use error::{CurrencyError, WheelError};
