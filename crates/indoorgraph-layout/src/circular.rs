use indoorgraph_core::{Graph, Point};
use serde::{Deserialize, Serialize};
use std::f64::consts::TAU;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CircularLayoutOptions {
    pub center: Point,
    /// Used as given; a negative radius mirrors the circle through `center`.
    pub radius: f64,
}

impl Default for CircularLayoutOptions {
    fn default() -> Self {
        Self {
            center: Point::new(250.0, 250.0),
            radius: 200.0,
        }
    }
}

impl CircularLayoutOptions {
    pub fn new(center: Point, radius: f64) -> Self {
        Self { center, radius }
    }
}

/// Circle positions for the graph's nodes, in node order. Does not touch the graph.
pub fn positions(graph: &Graph, options: &CircularLayoutOptions) -> Vec<Point> {
    let n = graph.len();
    let Point { x: cx, y: cy } = options.center;
    let r = options.radius;
    (0..n)
        .map(|i| {
            let angle = TAU * i as f64 / n as f64;
            Point::new(cx + r * angle.cos(), cy + r * angle.sin())
        })
        .collect()
}

/// Assigns every node its circle position. An empty graph is left as is.
pub fn layout(graph: &mut Graph, options: &CircularLayoutOptions) {
    if graph.is_empty() {
        tracing::debug!("circular layout on an empty graph; nothing to place");
        return;
    }
    let placed = positions(graph, options);
    for (node, point) in graph.nodes_mut().zip(placed) {
        node.position = Some(point);
    }
    tracing::debug!(
        nodes = graph.len(),
        radius = options.radius,
        "placed nodes on circle"
    );
}

/// By-value form of [`layout`].
pub fn layouted(mut graph: Graph, options: &CircularLayoutOptions) -> Graph {
    layout(&mut graph, options);
    graph
}
