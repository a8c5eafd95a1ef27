// Module declarations
mod app;
pub mod dashboard;
pub mod employees;
pub mod widgets;
// Re-exports for external use
pub use app::{App, KeyOutcome, StartScreen, run};
