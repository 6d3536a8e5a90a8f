// src/tui/mod.rs — Terminal portal.
//
// Renders the MOSDAC portal pages with ratatui. Launch via `mosdac portal`
// (or with no subcommand).

pub mod app;
pub mod data;
pub mod theme;
pub mod widgets;

pub use app::run_portal;
