//! Employee listing screen

pub mod input;
pub mod renderer;

pub use input::handle_employee_key;
pub use renderer::render_employees;
