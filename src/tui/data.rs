// src/tui/data.rs — Display-ready snapshot of everything the portal shows.
//
// Queried once from the `PortalDataSource` at startup. A failing query is
// logged and leaves that page empty rather than aborting the portal.

use crate::charts::{ChartPoint, PieSlice};
use crate::portal::catalog::Product;
use crate::portal::data::{Capability, PortalDataSource, MONTHLY_USERS, PRODUCT_DISTRIBUTION};
use crate::portal::graph::KnowledgeGraph;
use crate::portal::stats::Stat;

#[derive(Debug, Default, Clone)]
pub struct PortalSnapshot {
    pub source: String,
    pub line: Vec<ChartPoint>,
    pub pie: Vec<PieSlice>,
    pub products: Vec<Product>,
    pub graph: KnowledgeGraph,
    pub capabilities: Vec<Capability>,
    pub stats: Vec<Stat>,
}

pub async fn fetch_all(source: &dyn PortalDataSource) -> PortalSnapshot {
    PortalSnapshot {
        source: source.name().to_string(),
        line: or_empty("line series", source.line_series(MONTHLY_USERS).await),
        pie: or_empty("pie series", source.pie_series(PRODUCT_DISTRIBUTION).await),
        products: or_empty("products", source.products().await),
        graph: or_empty("knowledge graph", source.knowledge_graph().await),
        capabilities: or_empty("capabilities", source.capabilities().await),
        stats: or_empty("stats", source.stats().await),
    }
}

fn or_empty<T: Default>(what: &str, result: Result<T, crate::infra::errors::PortalError>) -> T {
    result.unwrap_or_else(|e| {
        tracing::warn!("Could not load {}: {}", what, e);
        T::default()
    })
}
