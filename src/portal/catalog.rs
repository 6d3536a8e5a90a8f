// src/portal/catalog.rs — Satellite data products and catalog search

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProductKind {
    Optical,
    Radar,
    Hyperspectral,
}

impl ProductKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ProductKind::Optical => "optical",
            ProductKind::Radar => "radar",
            ProductKind::Hyperspectral => "hyperspectral",
        }
    }

    /// Badge color for the kind.
    pub fn color(&self) -> &'static str {
        match self {
            ProductKind::Optical => "#3B82F6",
            ProductKind::Radar => "#10B981",
            ProductKind::Hyperspectral => "#8B5CF6",
        }
    }
}

impl std::fmt::Display for ProductKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.pad(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub name: String,
    pub satellite: String,
    pub location: String,
    pub resolution: String,
    /// Acquisition date, `YYYY-MM-DD`.
    pub date: String,
    pub size: String,
    pub kind: ProductKind,
}

impl Product {
    fn matches(&self, needle: &str) -> bool {
        [&self.name, &self.satellite, &self.location]
            .iter()
            .any(|field| field.to_lowercase().contains(needle))
    }
}

/// Products whose name, satellite or location contains `query`,
/// case-insensitively. A blank query keeps everything.
pub fn search<'a>(products: &'a [Product], query: &str) -> Vec<&'a Product> {
    let needle = query.trim().to_lowercase();
    if needle.is_empty() {
        return products.iter().collect();
    }
    products.iter().filter(|p| p.matches(&needle)).collect()
}

pub fn summary(shown: usize, total: usize) -> String {
    format!("Showing {shown} of {total} products")
}
