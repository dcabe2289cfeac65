#![forbid(unsafe_code)]

//! `indoorgraph` turns IndoorGML documents into laid-out cell-space graphs (headless).
//!
//! `CellSpace` elements become nodes, `Transition` elements become edges, and nodes are placed on
//! a circle in document order. Drawing is left to a renderer; the `render` feature bundles a
//! headless SVG one.
//!
//! # Features
//!
//! - `render`: enable SVG/JSON output (`indoorgraph::render`)

use serde::{Deserialize, Serialize};
use std::path::Path;

pub use indoorgraph_core::{
    Edge, ExtractOptions, Graph, GraphExtractor, Node, NodeIndex, ParseError, Point, extract,
    extract_bytes, extract_file, node_key,
};
pub use indoorgraph_layout::{Bounds, CircularLayoutOptions, layout, layouted, positions};

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error(transparent)]
    Parse(#[from] ParseError),
    #[error("invalid pipeline options: {0}")]
    Config(#[from] serde_json::Error),
    #[cfg(feature = "render")]
    #[error(transparent)]
    Render(#[from] indoorgraph_render::RenderError),
}

pub type Result<T> = std::result::Result<T, Error>;

/// Options for the whole extract-then-layout pipeline.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PipelineOptions {
    pub extract: ExtractOptions,
    pub layout: CircularLayoutOptions,
}

impl PipelineOptions {
    /// Parses a JSON options document. Missing sections and fields keep their defaults, so
    /// `{"layout": {"radius": 120}}` only changes the radius.
    pub fn from_json_str(text: &str) -> Result<Self> {
        Ok(serde_json::from_str(text)?)
    }

    fn extractor(&self) -> GraphExtractor {
        GraphExtractor::new(self.extract.clone())
    }
}

/// Extracts the graph from `text` and lays it out.
pub fn load_graph(text: &str, options: &PipelineOptions) -> Result<Graph> {
    let graph = options.extractor().extract(text)?;
    Ok(finish(graph, options))
}

pub fn load_graph_bytes(bytes: &[u8], options: &PipelineOptions) -> Result<Graph> {
    let graph = options.extractor().extract_bytes(bytes)?;
    Ok(finish(graph, options))
}

pub fn load_graph_file(path: impl AsRef<Path>, options: &PipelineOptions) -> Result<Graph> {
    let path = path.as_ref();
    tracing::debug!(path = %path.display(), "loading IndoorGML document");
    let graph = options.extractor().extract_file(path)?;
    Ok(finish(graph, options))
}

fn finish(graph: Graph, options: &PipelineOptions) -> Graph {
    layouted(graph, &options.layout)
}

#[cfg(feature = "render")]
pub mod render {
    use super::{PipelineOptions, Result, load_graph, load_graph_file};
    use std::path::Path;

    pub use indoorgraph_render::{
        LayoutedEdge, LayoutedGraph, LayoutedNode, RenderError, SvgRenderOptions,
        render_svg as render_graph_svg, to_json,
    };

    /// Extracts, lays out and renders `text` as SVG.
    pub fn render_svg(
        text: &str,
        options: &PipelineOptions,
        svg_options: &SvgRenderOptions,
    ) -> Result<String> {
        let graph = load_graph(text, options)?;
        Ok(indoorgraph_render::render_svg(&graph, svg_options)?)
    }

    pub fn render_svg_file(
        path: impl AsRef<Path>,
        options: &PipelineOptions,
        svg_options: &SvgRenderOptions,
    ) -> Result<String> {
        let graph = load_graph_file(path, options)?;
        Ok(indoorgraph_render::render_svg(&graph, svg_options)?)
    }
}
