// src/portal/graph.rs — Knowledge graph: entities, links and drawable segments

use std::collections::{HashMap, HashSet};

use serde::{Deserialize, Serialize};

use crate::infra::errors::PortalError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EntityKind {
    Satellite,
    Mission,
    Location,
    Data,
}

impl EntityKind {
    pub const ALL: [EntityKind; 4] = [
        EntityKind::Satellite,
        EntityKind::Mission,
        EntityKind::Data,
        EntityKind::Location,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            EntityKind::Satellite => "Satellite",
            EntityKind::Mission => "Mission",
            EntityKind::Location => "Location",
            EntityKind::Data => "Data",
        }
    }
}

impl std::fmt::Display for EntityKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.pad(self.as_str())
    }
}

impl std::str::FromStr for EntityKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        EntityKind::ALL
            .into_iter()
            .find(|k| k.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| format!("unknown entity type '{s}'"))
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GraphNode {
    pub id: String,
    pub x: f64,
    pub y: f64,
    pub color: String,
    pub kind: EntityKind,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GraphLink {
    pub source: String,
    pub target: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LegendEntry {
    pub name: String,
    pub kind: EntityKind,
    pub color: String,
}

/// A link resolved to coordinates.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Segment {
    pub source: String,
    pub target: String,
    pub x1: f64,
    pub y1: f64,
    pub x2: f64,
    pub y2: f64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct KnowledgeGraph {
    #[serde(default)]
    pub nodes: Vec<GraphNode>,
    #[serde(default)]
    pub links: Vec<GraphLink>,
    #[serde(default)]
    pub legend: Vec<LegendEntry>,
}

impl KnowledgeGraph {
    pub fn node(&self, id: &str) -> Option<&GraphNode> {
        self.nodes.iter().find(|n| n.id == id)
    }

    /// Resolve every link through the node map, in link order.
    pub fn segments(&self) -> Result<Vec<Segment>, PortalError> {
        let by_id: HashMap<&str, &GraphNode> =
            self.nodes.iter().map(|n| (n.id.as_str(), n)).collect();

        self.links
            .iter()
            .map(|link| {
                let lookup = |id: &str| {
                    by_id.get(id).copied().ok_or_else(|| PortalError::UnknownNode {
                        id: id.to_string(),
                    })
                };
                let a = lookup(&link.source)?;
                let b = lookup(&link.target)?;
                Ok(Segment {
                    source: a.id.clone(),
                    target: b.id.clone(),
                    x1: a.x,
                    y1: a.y,
                    x2: b.x,
                    y2: b.y,
                })
            })
            .collect()
    }

    /// Nodes whose id contains `query` (case-insensitive) and whose kind
    /// matches `kind` when given. Links survive only if both ends do.
    pub fn filter(&self, query: &str, kind: Option<EntityKind>) -> KnowledgeGraph {
        let needle = query.trim().to_lowercase();
        let nodes: Vec<GraphNode> = self
            .nodes
            .iter()
            .filter(|n| kind.is_none_or(|k| n.kind == k))
            .filter(|n| needle.is_empty() || n.id.to_lowercase().contains(&needle))
            .cloned()
            .collect();

        let kept: HashSet<&str> = nodes.iter().map(|n| n.id.as_str()).collect();
        let links = self
            .links
            .iter()
            .filter(|l| kept.contains(l.source.as_str()) && kept.contains(l.target.as_str()))
            .cloned()
            .collect();

        KnowledgeGraph {
            nodes,
            links,
            legend: self.legend.clone(),
        }
    }

    pub fn legend(&self) -> &[LegendEntry] {
        &self.legend
    }

    /// Number of links touching `id`.
    pub fn degree(&self, id: &str) -> usize {
        self.links
            .iter()
            .filter(|l| l.source == id || l.target == id)
            .count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn node(id: &str, x: f64, y: f64, kind: EntityKind) -> GraphNode {
        GraphNode {
            id: id.into(),
            x,
            y,
            color: "#4F46E5".into(),
            kind,
        }
    }

    fn link(a: &str, b: &str) -> GraphLink {
        GraphLink {
            source: a.into(),
            target: b.into(),
        }
    }

    fn graph() -> KnowledgeGraph {
        KnowledgeGraph {
            nodes: vec![
                node("Cartosat-3", 250.0, 150.0, EntityKind::Satellite),
                node("Earth Obs", 400.0, 200.0, EntityKind::Mission),
                node("India", 200.0, 250.0, EntityKind::Location),
            ],
            links: vec![link("Cartosat-3", "Earth Obs"), link("Cartosat-3", "India")],
            legend: vec![],
        }
    }

    #[test]
    fn test_segments_resolve_coordinates() {
        let segs = graph().segments().unwrap();
        assert_eq!(segs.len(), 2);
        assert_eq!((segs[0].x1, segs[0].y1), (250.0, 150.0));
        assert_eq!((segs[0].x2, segs[0].y2), (400.0, 200.0));
        assert_eq!(segs[1].target, "India");
    }

    #[test]
    fn test_dangling_link_is_an_error() {
        let mut g = graph();
        g.links.push(link("India", "Chandrayaan"));
        let err = g.segments().unwrap_err();
        assert!(matches!(err, PortalError::UnknownNode { ref id } if id == "Chandrayaan"));
    }

    #[test]
    fn test_filter_by_kind_drops_orphan_links() {
        let g = graph().filter("", Some(EntityKind::Satellite));
        assert_eq!(g.nodes.len(), 1);
        assert!(g.links.is_empty());
    }

    #[test]
    fn test_filter_by_query() {
        let g = graph().filter("in", None);
        let ids: Vec<&str> = g.nodes.iter().map(|n| n.id.as_str()).collect();
        assert_eq!(ids, vec!["India"]);

        let g = graph().filter("", None);
        assert_eq!(g.links.len(), 2);
    }

    #[test]
    fn test_degree() {
        let g = graph();
        assert_eq!(g.degree("Cartosat-3"), 2);
        assert_eq!(g.degree("India"), 1);
        assert_eq!(g.degree("nobody"), 0);
    }

    #[test]
    fn test_parse_kind() {
        assert_eq!("mission".parse::<EntityKind>().unwrap(), EntityKind::Mission);
        assert!("planet".parse::<EntityKind>().is_err());
    }
}
