//! Domain primitives shared by the database and HTTP layers.
//!
//! This crate has no internal dependencies and performs no I/O.

pub mod error;
pub mod guardian;
pub mod types;
