// Module declarations
mod app;
pub mod dashboard;
mod home;
pub mod splash;
mod task_detail;
// Re-exports for external use
pub use app::{App, UIConfig, run};
