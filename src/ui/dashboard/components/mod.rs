//! Dashboard component modules
//!
//! One module per region of the screen

pub mod farmers;
pub mod footer;
pub mod header;
pub mod modal;
pub mod overview;
pub mod profile;
pub mod tabs;
pub mod todo;
