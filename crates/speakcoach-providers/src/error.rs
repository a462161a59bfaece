//! Provider error types.
//!
//! The error taxonomy lives in `speakcoach-core` so callers can classify
//! failures without depending on this crate; re-exported here for
//! convenience.

pub use speakcoach_core::error::ChatError;
