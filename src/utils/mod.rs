//! Pure helper functions shared by the components.
//!
//! - [`file`] - upload validation and byte-size/extension display
//! - [`format`] - currency, date, and text display formatting

pub mod file;
pub mod format;

pub use file::*;
pub use format::*;
