//! Domain types and pure logic for the workout tracker.
//!
//! Nothing in this crate performs I/O: persistence lives in `workout_db`
//! and the HTTP surface in `workout_api`.

pub mod error;
pub mod types;
pub mod validation;
pub mod workout;
