#![forbid(unsafe_code)]

//! Deterministic circular layout for IndoorGML cell-space graphs.
//!
//! Nodes are spaced evenly on a circle in the graph's node order: node `i` of `n` sits at angle
//! `2π·i/n`, measured from the positive x axis.

pub mod bounds;
pub mod circular;

pub use bounds::Bounds;
pub use circular::{CircularLayoutOptions, layout, layouted, positions};
