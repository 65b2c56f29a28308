//! Request handlers, organized by resource.

pub mod activity;
pub mod assets;
pub mod comments;
pub mod consumables;
pub mod dashboard;
pub mod departments;
pub mod health;
pub mod licenses;
pub mod locations;
pub mod settings;
pub mod users;
