// src/tui/widgets/mod.rs — One sub-module per portal page.

pub mod catalog;
pub mod charts;
pub mod chat;
pub mod graph;
pub mod home;
pub mod placeholder;
