pub mod cli;
pub mod config;
mod context;
pub mod forms;
pub mod render;
pub mod views;

pub use context::AppContext;
