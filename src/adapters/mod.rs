// Adapters layer: concrete implementations for external systems.
// Local file storage lives with the CLI config in `config::cli`.

pub mod console;

pub use console::Console;
