//! Software license entities.

pub mod model;

pub use model::{CreateLicense, License};
