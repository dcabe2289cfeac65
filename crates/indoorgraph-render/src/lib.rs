#![forbid(unsafe_code)]

//! Headless renderer for laid-out IndoorGML cell-space graphs.
//!
//! Consumes a graph whose nodes already carry positions (see `indoorgraph-layout`) and emits
//! either an SVG document or a flat JSON model for renderers living elsewhere. Nothing here
//! computes positions.

pub mod model;
pub mod svg;

pub use model::{LayoutedEdge, LayoutedGraph, LayoutedNode};
pub use svg::{SvgRenderOptions, render_svg};

#[derive(Debug, thiserror::Error)]
pub enum RenderError {
    #[error("cell space {id:?} has no position; run the layout before rendering")]
    UnpositionedNode { id: String },
    #[error("layouted graph JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, RenderError>;

/// Serializes the positioned graph as [`LayoutedGraph`] JSON.
pub fn to_json(graph: &indoorgraph_core::Graph, pretty: bool) -> Result<String> {
    let model = LayoutedGraph::from_graph(graph)?;
    let out = if pretty {
        serde_json::to_string_pretty(&model)?
    } else {
        serde_json::to_string(&model)?
    };
    Ok(out)
}
