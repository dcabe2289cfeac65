use crate::{RenderError, Result};
use indoorgraph_core::{Graph, Point};
use indoorgraph_layout::Bounds;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LayoutedNode {
    pub id: String,
    /// Cross-reference form of the id (`"#" + id`); edges refer to nodes by this key.
    pub key: String,
    pub label: String,
    pub x: f64,
    pub y: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LayoutedEdge {
    pub from: String,
    pub to: String,
    pub points: Vec<Point>,
}

/// Flat, self-contained view of a positioned graph.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LayoutedGraph {
    pub nodes: Vec<LayoutedNode>,
    pub edges: Vec<LayoutedEdge>,
    pub bounds: Option<Bounds>,
}

impl LayoutedGraph {
    pub fn from_graph(graph: &Graph) -> Result<Self> {
        let mut nodes = Vec::with_capacity(graph.len());
        for (key, node) in graph.keys().zip(graph.nodes()) {
            let Some(p) = node.position else {
                return Err(RenderError::UnpositionedNode {
                    id: node.id.clone(),
                });
            };
            nodes.push(LayoutedNode {
                id: node.id.clone(),
                key: key.to_string(),
                label: node.label.clone(),
                x: p.x,
                y: p.y,
            });
        }

        let edges = graph
            .edges()
            .iter()
            .map(|e| {
                let from = &nodes[e.from.index()];
                let to = &nodes[e.to.index()];
                LayoutedEdge {
                    from: from.key.clone(),
                    to: to.key.clone(),
                    points: vec![Point::new(from.x, from.y), Point::new(to.x, to.y)],
                }
            })
            .collect();

        Ok(Self {
            nodes,
            edges,
            bounds: Bounds::of(graph),
        })
    }
}
