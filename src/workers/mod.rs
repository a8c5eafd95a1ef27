//! Network work for the views
//!
//! Each session pairs a view with the backend: it spawns requests inside a
//! [`core::TaskScope`], and the UI loop pumps their completions into the view.

pub mod core;
pub mod dashboard;
pub mod employees;

pub use dashboard::DashboardSession;
pub use employees::EmployeeSession;
