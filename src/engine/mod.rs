pub mod core;
pub mod state;

// Re-export key components
pub use core::DashboardEngine;
pub use state::{LoadState, ReadyState};
