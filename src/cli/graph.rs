// src/cli/graph.rs — Knowledge graph query command

use serde::Serialize;

use crate::portal::data::PortalDataSource;
use crate::portal::graph::{EntityKind, GraphNode, KnowledgeGraph, Segment};

#[derive(Serialize)]
struct GraphView<'a> {
    nodes: &'a [GraphNode],
    segments: &'a [Segment],
}

pub async fn run_graph(
    source: &dyn PortalDataSource,
    query: &str,
    kind: Option<EntityKind>,
    json: bool,
) -> anyhow::Result<()> {
    let graph = source.knowledge_graph().await?;
    let visible = graph.filter(query, kind);
    let segments = visible.segments()?;

    if json {
        let view = GraphView {
            nodes: &visible.nodes,
            segments: &segments,
        };
        println!("{}", serde_json::to_string_pretty(&view)?);
    } else {
        print!("{}", format_graph(&visible, &segments));
    }
    Ok(())
}

/// One line per entity with its degree, then one line per link.
pub fn format_graph(graph: &KnowledgeGraph, segments: &[Segment]) -> String {
    let mut out = format!("{} entities, {} links\n", graph.nodes.len(), segments.len());
    for node in &graph.nodes {
        out.push_str(&format!(
            "  {:<20} {:<10} links: {}\n",
            node.id,
            node.kind,
            graph.degree(&node.id)
        ));
    }
    for s in segments {
        out.push_str(&format!("  {} -> {}\n", s.source, s.target));
    }
    out
}
