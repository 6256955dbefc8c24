//! Physics module
//!
//! The only physics this crate owns is single-actor vertical motion, which
//! lives in [`crate::player`]. This module holds the boundary to the external
//! collision mover.
//!
//! # Unit System
//!
//! **1 unit = 1 meter** (SI units throughout)
//!
//! - Distances in meters
//! - Velocities in m/s
//! - Accelerations in m/s²
//!
//! # Submodules
//!
//! - [`mover`] - The `Mover` trait and a flat-floor reference mover

pub mod mover;

pub use mover::{FlatGroundMover, GROUND_CONTACT_SKIN, Mover};
