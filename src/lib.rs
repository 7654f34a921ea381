pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use adapters::Console;
pub use config::{cli::LocalStorage, Settings};
pub use core::{engine::EditEngine, pipeline::ValuesPipeline};
pub use utils::error::{EditorError, Result};
