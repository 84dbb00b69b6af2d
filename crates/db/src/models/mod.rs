//! Row structs mapping the workout tables.
//!
//! The aggregate itself lives in `workout_core::workout`; these types only
//! exist to decode rows and are converted before leaving the crate.

pub mod workout;
