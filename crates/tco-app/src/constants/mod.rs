//! Application constants

pub mod example_fleet;

pub use example_fleet::{example_fleet, APP_TITLE, BRAND_NAME};
