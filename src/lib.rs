// src/lib.rs — Library root for the MOSDAC portal

pub mod charts;
pub mod chat;
pub mod cli;
pub mod infra;
pub mod portal;
pub mod tui;
