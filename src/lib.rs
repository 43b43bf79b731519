//! Door-alarm node firmware library.
//!
//! Exposes the core, adapters and channels for integration testing and
//! host simulation. All ESP-IDF-specific code is guarded by
//! `#[cfg(target_os = "espidf")]` within each module.

#![deny(unused_must_use)]

pub mod adapters;
pub mod app;
pub mod channels;
pub mod config;
pub mod drivers;
pub mod error;
pub mod pins;
pub mod sensors;
