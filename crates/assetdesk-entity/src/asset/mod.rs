//! Asset entities.

pub mod model;

pub use model::{Asset, AssetExpanded, CreateAsset, UpdateAsset};
