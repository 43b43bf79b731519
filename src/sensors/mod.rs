//! Sensor drivers.

pub mod door;
