//! Spin-wheel engine.
//!
//! A wheel is a list of weighted options that can be enabled or disabled
//! independently. This module provides:
//! - The wheel configuration and its edit operations (`WheelConfig`)
//! - Weighted random selection (`select`)
//! - Recent-winner tracking to avoid repetitions (`SelectionHistory`)
//! - A URL-safe codec to share a wheel (`encode` / `decode`)
//!
//! Everything here is pure: no I/O, no shared state. Randomness comes from
//! the caller-provided `rand::Rng`.

/// Option and wheel value types, validation and user edits.
pub mod config;

/// Weighted lottery over the enabled options.
///
/// Linear cumulative-weight scan with recent-winner exclusion and fallback.
pub mod selection;

/// Bounded FIFO of recent winners.
pub mod history;

/// Wheel <-> URL-safe string conversion.
pub mod codec;

pub use codec::{decode, encode};
pub use config::{WheelConfig, WheelOption};
pub use history::SelectionHistory;
pub use selection::{Selected, select};
