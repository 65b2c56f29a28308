//! Organizational entities: departments and locations.

pub mod department;
pub mod location;

pub use department::{Department, DepartmentReferences};
pub use location::{Location, LocationReferences};
