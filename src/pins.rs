//! GPIO pin assignments for the door alarm board.
//!
//! Single source of truth: every driver references this module rather than
//! hard-coding pin numbers.

// ---------------------------------------------------------------------------
// Outputs
// ---------------------------------------------------------------------------

/// Home light LED. Also blinked by the alarm while an intrusion is active.
pub const LED_GPIO: i32 = 2;

/// Piezo buzzer (active HIGH).
pub const BUZZER_GPIO: i32 = 4;

// ---------------------------------------------------------------------------
// Inputs
// ---------------------------------------------------------------------------

/// IR break-beam door sensor. HIGH = door open, LOW = door closed.
pub const IR_SENSOR_GPIO: i32 = 3;

/// Highest GPIO number on the ESP32-C3 / S3 families; sizes the host
/// simulation level table.
pub const MAX_GPIO: usize = 48;
