//! Employee dashboard screen
//!
//! Rendering and key handling over [`crate::views::DashboardView`]

pub mod components;
pub mod input;
pub mod renderer;
pub mod utils;

pub use input::handle_dashboard_key;
pub use renderer::render_dashboard;
