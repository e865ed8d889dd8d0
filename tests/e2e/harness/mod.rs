//! E2E test harness for flowtest.
//!
//! Provides a recording driver whose sessions log every lifecycle call, so
//! scenarios can assert on what the hooks did.

#![allow(dead_code)]


// Re-export commonly used types
pub use recorder::{Event, RecordingDriver};
