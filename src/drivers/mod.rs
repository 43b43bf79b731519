//! Output drivers, GPIO initialisation, and task helpers.

pub mod hw_init;
pub mod output;
pub mod task_pin;
