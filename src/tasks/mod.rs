//! Background tasks module
//! 
//! This module contains background tasks that run alongside the console.

pub mod renderer;
pub mod tick_driver;

// Re-export main functions
pub use renderer::renderer_task;
pub use tick_driver::{tick_driver_task, DEFAULT_TICK_INTERVAL};
