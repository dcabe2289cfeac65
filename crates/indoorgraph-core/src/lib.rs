#![forbid(unsafe_code)]

//! IndoorGML cell-space graph model and extractor (headless).
//!
//! `CellSpace` elements become graph nodes and `Transition` elements become edges between them.
//! Extraction is lenient: missing names fall back to the cell-space id and transitions whose
//! `connects` references cannot be resolved are dropped. Only malformed markup (or an unreadable
//! source) is an error.
//!
//! Node positions are left unset here; see `indoorgraph-layout`.

pub mod error;
pub mod extract;
pub mod model;
mod xml;

pub use error::{ParseError, Result};
pub use extract::{ExtractOptions, GraphExtractor, extract, extract_bytes, extract_file};
pub use model::{Edge, Graph, Node, NodeIndex, Point, node_key};
