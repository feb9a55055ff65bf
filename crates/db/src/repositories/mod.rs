//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async CRUD methods
//! that accept `&PgPool` as the first argument.

pub mod guardian_repo;
pub mod patient_repo;

pub use guardian_repo::GuardianRepo;
pub use patient_repo::PatientRepo;
