//! Business services invoked by the HTTP handlers.

pub mod guardian;

pub use guardian::GuardianService;
