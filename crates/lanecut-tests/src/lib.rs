//! Integration test crate for LaneCut.
//!
//! This crate exists solely to hold cross-crate integration tests.
//! It depends on multiple lanecut crates to verify they work together.

#[cfg(test)]
mod interaction;

#[cfg(test)]
mod timeline;
