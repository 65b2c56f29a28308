//! Consumable entities.

pub mod model;

pub use model::{Consumable, CreateConsumable};
