//! Persistent user preferences.
//!
//! Only preferences live on disk; store contents are rebuilt from seed data on
//! every start.

pub mod error;
pub mod manager;
pub mod model;

pub use error::ConfigError;
pub use manager::ConfigManager;
pub use model::{AccessibilitySettings, Config, IdStrategy};
