//! Catalog (CMDB) entities backing the dropdown lists: asset models,
//! manufacturers, categories, status labels, and suppliers.

pub mod lookup;
pub mod model;

pub use lookup::{Category, Manufacturer, StatusLabel, Supplier};
pub use model::{AssetModel, CreateAssetModel};
