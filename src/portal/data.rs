// src/portal/data.rs — Data-provider interface and the built-in mock dataset
//
// Pages never own their data. They ask a `PortalDataSource`, so the
// built-in values can be swapped for a dataset file (or a real backend)
// without touching chart geometry or page code.

use std::collections::BTreeMap;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use super::catalog::{Product, ProductKind};
use super::graph::{EntityKind, GraphLink, GraphNode, KnowledgeGraph, LegendEntry};
use super::navigation::Page;
use super::stats::Stat;
use crate::charts::{ChartPoint, PieSlice};
use crate::infra::errors::PortalError;

/// Series key of the monthly active-users line chart.
pub const MONTHLY_USERS: &str = "monthly-users";
/// Series key of the product-distribution pie chart.
pub const PRODUCT_DISTRIBUTION: &str = "product-distribution";

/// A home-page card linking to a feature page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Capability {
    pub title: String,
    pub description: String,
    pub button: String,
    pub color: String,
    pub page: Page,
}

#[async_trait]
pub trait PortalDataSource: Send + Sync {
    fn name(&self) -> &str;

    async fn line_series(&self, key: &str) -> Result<Vec<ChartPoint>, PortalError>;
    async fn pie_series(&self, key: &str) -> Result<Vec<PieSlice>, PortalError>;
    async fn products(&self) -> Result<Vec<Product>, PortalError>;
    async fn knowledge_graph(&self) -> Result<KnowledgeGraph, PortalError>;
    async fn capabilities(&self) -> Result<Vec<Capability>, PortalError>;
    async fn stats(&self) -> Result<Vec<Stat>, PortalError>;
}

/// Everything the portal displays, in one serializable bundle.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PortalData {
    #[serde(default)]
    pub line_series: BTreeMap<String, Vec<ChartPoint>>,
    #[serde(default)]
    pub pie_series: BTreeMap<String, Vec<PieSlice>>,
    #[serde(default)]
    pub products: Vec<Product>,
    #[serde(default)]
    pub graph: KnowledgeGraph,
    #[serde(default)]
    pub capabilities: Vec<Capability>,
    #[serde(default)]
    pub stats: Vec<Stat>,
}

impl PortalData {
    pub fn line(&self, key: &str) -> Result<Vec<ChartPoint>, PortalError> {
        self.line_series
            .get(key)
            .cloned()
            .ok_or_else(|| PortalError::UnknownSeries { key: key.into() })
    }

    pub fn pie(&self, key: &str) -> Result<Vec<PieSlice>, PortalError> {
        self.pie_series
            .get(key)
            .cloned()
            .ok_or_else(|| PortalError::UnknownSeries { key: key.into() })
    }

    pub fn builtin() -> Self {
        let monthly = [
            ("Jan", 400.0),
            ("Feb", 300.0),
            ("Mar", 600.0),
            ("Apr", 820.0),
            ("May", 500.0),
            ("Jun", 700.0),
        ]
        .into_iter()
        .map(|(name, users)| ChartPoint::new(name, users))
        .collect();

        let distribution = vec![
            PieSlice::new("Land Products", 30.0, "#10B981"),
            PieSlice::new("Ocean Products", 40.0, "#3B82F6"),
            PieSlice::new("Atmospheric Products", 20.0, "#F97316"),
            PieSlice::new("Climate Products", 10.0, "#F59E0B"),
        ];

        Self {
            line_series: BTreeMap::from([(MONTHLY_USERS.to_string(), monthly)]),
            pie_series: BTreeMap::from([(PRODUCT_DISTRIBUTION.to_string(), distribution)]),
            products: builtin_products(),
            graph: builtin_graph(),
            capabilities: builtin_capabilities(),
            stats: vec![
                Stat::new("Active Satellites", 127),
                Stat::new("Data Products", 2847),
                Stat::new("Queries Resolved", 15432),
            ],
        }
    }
}

fn builtin_products() -> Vec<Product> {
    let product = |name: &str,
                   satellite: &str,
                   location: &str,
                   resolution: &str,
                   date: &str,
                   size: &str,
                   kind: ProductKind| Product {
        name: name.into(),
        satellite: satellite.into(),
        location: location.into(),
        resolution: resolution.into(),
        date: date.into(),
        size: size.into(),
        kind,
    };
    vec![
        product(
            "Mumbai Urban Area - High Resolution",
            "Cartosat-3",
            "Mumbai, India",
            "0.25m",
            "2024-06-15",
            "2.3 GB",
            ProductKind::Optical,
        ),
        product(
            "Coastal Monitoring - SAR Data",
            "RISAT-2B",
            "West Coast, India",
            "1m",
            "2024-06-10",
            "1.8 GB",
            ProductKind::Radar,
        ),
        product(
            "Agricultural Assessment",
            "Resourcesat-2A",
            "Punjab, India",
            "5.8m",
            "2024-05-28",
            "1.2 GB",
            ProductKind::Hyperspectral,
        ),
    ]
}

fn builtin_graph() -> KnowledgeGraph {
    let node = |id: &str, x: f64, y: f64, color: &str, kind: EntityKind| GraphNode {
        id: id.into(),
        x,
        y,
        color: color.into(),
        kind,
    };
    let link = |source: &str, target: &str| GraphLink {
        source: source.into(),
        target: target.into(),
    };
    let entry = |name: &str, kind: EntityKind, color: &str| LegendEntry {
        name: name.into(),
        kind,
        color: color.into(),
    };

    KnowledgeGraph {
        nodes: vec![
            node("Cartosat-3", 250.0, 150.0, "#4F46E5", EntityKind::Satellite),
            node("RISAT-2B", 350.0, 300.0, "#4F46E5", EntityKind::Satellite),
            node("Earth Obs", 400.0, 200.0, "#8B5CF6", EntityKind::Mission),
            node("India", 200.0, 250.0, "#DB2777", EntityKind::Location),
            node("HR Imagery", 550.0, 150.0, "#F59E0B", EntityKind::Data),
            node("SAR Data", 500.0, 280.0, "#10B981", EntityKind::Data),
        ],
        links: vec![
            link("Cartosat-3", "Earth Obs"),
            link("RISAT-2B", "Earth Obs"),
            link("Cartosat-3", "India"),
            link("RISAT-2B", "India"),
            link("Earth Obs", "HR Imagery"),
            link("Earth Obs", "SAR Data"),
            link("Cartosat-3", "HR Imagery"),
            link("RISAT-2B", "SAR Data"),
        ],
        legend: vec![
            entry("Cartosat-3", EntityKind::Satellite, "#4F46E5"),
            entry("Earth Observation", EntityKind::Mission, "#8B5CF6"),
            entry("High Resolution Imagery", EntityKind::Data, "#F59E0B"),
            entry("India", EntityKind::Location, "#DB2777"),
            entry("RISAT-2B", EntityKind::Satellite, "#4F46E5"),
            entry("Optical Data", EntityKind::Data, "#10B981"),
        ],
    }
}

fn builtin_capabilities() -> Vec<Capability> {
    let card = |title: &str, description: &str, button: &str, color: &str, page: Page| Capability {
        title: title.into(),
        description: description.into(),
        button: button.into(),
        color: color.into(),
        page,
    };
    vec![
        card(
            "AI Assistant",
            "Conversational interface for instant satellite data queries.",
            "Start Chatting",
            "#2563EB",
            Page::AiAssistant,
        ),
        card(
            "Knowledge Graph",
            "Explore relationships between satellites, missions, and data.",
            "Explore Graph",
            "#10B981",
            Page::KnowledgeGraph,
        ),
        card(
            "Data Visualization",
            "Interactive maps and charts for geospatial analysis.",
            "View Visualizations",
            "#16A34A",
            Page::DataVisualization,
        ),
        card(
            "Product Catalog",
            "Browse and download satellite data products.",
            "Browse Catalog",
            "#F97316",
            Page::ProductCatalog,
        ),
        card(
            "Live Satellite Tracker",
            "Real-time satellite positions and orbital data.",
            "Track Satellites",
            "#8B5CF6",
            Page::LiveSatelliteTracker,
        ),
        card(
            "Mission Explorer",
            "Detailed information about satellite missions.",
            "Explore Missions",
            "#EF4444",
            Page::MissionExplorer,
        ),
    ]
}

/// The hard-coded demo data.
#[derive(Debug, Clone)]
pub struct BuiltinData {
    data: PortalData,
}

impl BuiltinData {
    pub fn new() -> Self {
        Self {
            data: PortalData::builtin(),
        }
    }
}

impl Default for BuiltinData {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl PortalDataSource for BuiltinData {
    fn name(&self) -> &str {
        "builtin"
    }

    async fn line_series(&self, key: &str) -> Result<Vec<ChartPoint>, PortalError> {
        self.data.line(key)
    }

    async fn pie_series(&self, key: &str) -> Result<Vec<PieSlice>, PortalError> {
        self.data.pie(key)
    }

    async fn products(&self) -> Result<Vec<Product>, PortalError> {
        Ok(self.data.products.clone())
    }

    async fn knowledge_graph(&self) -> Result<KnowledgeGraph, PortalError> {
        Ok(self.data.graph.clone())
    }

    async fn capabilities(&self) -> Result<Vec<Capability>, PortalError> {
        Ok(self.data.capabilities.clone())
    }

    async fn stats(&self) -> Result<Vec<Stat>, PortalError> {
        Ok(self.data.stats.clone())
    }
}
