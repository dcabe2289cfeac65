use crate::error::{ParseError, Result};
use crate::model::{Graph, Node};
use crate::xml::{self, GML_ID, GML_NAME, XLINK_HREF};
use roxmltree::Document;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Element local names the extractor looks for. Defaults are the IndoorGML core names.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExtractOptions {
    pub cell_space_tag: String,
    pub transition_tag: String,
    pub connects_tag: String,
}

impl Default for ExtractOptions {
    fn default() -> Self {
        Self {
            cell_space_tag: "CellSpace".to_string(),
            transition_tag: "Transition".to_string(),
            connects_tag: "connects".to_string(),
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct GraphExtractor {
    options: ExtractOptions,
}

impl GraphExtractor {
    pub fn new(options: ExtractOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &ExtractOptions {
        &self.options
    }

    /// Builds the cell-space graph of an IndoorGML document.
    ///
    /// Fails only if `text` is not well-formed XML. Unnamed cell spaces, duplicate ids and
    /// transitions that cannot be resolved are handled leniently.
    pub fn extract(&self, text: &str) -> Result<Graph> {
        let graph = xml::with_document(text, |doc| {
            let mut graph = Graph::new();
            self.collect_cell_spaces(doc, &mut graph);
            self.collect_transitions(doc, &mut graph);
            graph
        })?;
        tracing::debug!(
            nodes = graph.len(),
            edges = graph.edge_count(),
            "extracted IndoorGML graph"
        );
        Ok(graph)
    }

    pub fn extract_bytes(&self, bytes: &[u8]) -> Result<Graph> {
        let text = std::str::from_utf8(bytes)?;
        self.extract(text.strip_prefix('\u{feff}').unwrap_or(text))
    }

    /// Reads the whole file up front, then extracts from its contents.
    pub fn extract_file(&self, path: impl AsRef<Path>) -> Result<Graph> {
        let path = path.as_ref();
        let bytes = std::fs::read(path).map_err(|source| ParseError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        self.extract_bytes(&bytes)
    }

    fn collect_cell_spaces(&self, doc: &Document<'_>, graph: &mut Graph) {
        for cell in xml::descendants_named(doc.root(), &self.options.cell_space_tag) {
            let id = GML_ID.attribute(cell).unwrap_or_default();
            let name = cell
                .descendants()
                .skip(1)
                .find(|n| GML_NAME.is_element(*n))
                .map(xml::text_content);

            let (index, inserted) = graph.insert_node(Node::new(id, name.as_deref()));
            if inserted {
                tracing::trace!(id, index = index.index(), "registered cell space");
            } else {
                tracing::debug!(id, "duplicate cell space id; keeping the first occurrence");
            }
        }
    }

    fn collect_transitions(&self, doc: &Document<'_>, graph: &mut Graph) {
        for transition in xml::descendants_named(doc.root(), &self.options.transition_tag) {
            let mut connects = xml::descendants_named(transition, &self.options.connects_tag);
            let (Some(first), Some(second)) = (connects.next(), connects.next()) else {
                tracing::debug!(
                    id = GML_ID.attribute(transition).unwrap_or_default(),
                    "transition has fewer than two connects; skipping"
                );
                continue;
            };

            let from = XLINK_HREF.attribute(first).unwrap_or_default();
            let to = XLINK_HREF.attribute(second).unwrap_or_default();
            if graph.connect(from, to) {
                tracing::trace!(from, to, "registered transition");
            } else {
                tracing::debug!(from, to, "transition references an unknown cell space; dropping");
            }
        }
    }
}

pub fn extract(text: &str) -> Result<Graph> {
    GraphExtractor::default().extract(text)
}

pub fn extract_bytes(bytes: &[u8]) -> Result<Graph> {
    GraphExtractor::default().extract_bytes(bytes)
}

pub fn extract_file(path: impl AsRef<Path>) -> Result<Graph> {
    GraphExtractor::default().extract_file(path)
}
