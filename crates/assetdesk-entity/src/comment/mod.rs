//! Asset comment entities.

pub mod model;

pub use model::Comment;
