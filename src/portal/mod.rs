// src/portal/mod.rs — Portal contracts: pages, theme, and the data behind them

pub mod catalog;
pub mod data;
pub mod dataset;
pub mod graph;
pub mod navigation;
pub mod stats;
pub mod theme;

pub use data::{BuiltinData, Capability, PortalData, PortalDataSource};
pub use dataset::{open_source, DatasetFile};
pub use navigation::{Navigate, Navigator, Page};
pub use theme::{ThemeContext, ThemeMode, ThemeSubscription};
