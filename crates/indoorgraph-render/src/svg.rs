use crate::Result;
use crate::model::LayoutedGraph;
use indoorgraph_core::{Graph, Point};
use serde::{Deserialize, Serialize};
use std::fmt::Write as _;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SvgRenderOptions {
    /// Canvas size, also the viewBox unless `fit_to_content` is set.
    pub width: f64,
    pub height: f64,
    /// Radius of the circle marker drawn for each cell space.
    pub node_radius: f64,
    /// Label anchor relative to the node position.
    pub label_offset: Point,
    pub include_nodes: bool,
    pub include_labels: bool,
    pub include_edges: bool,
    /// When true, the viewBox hugs the node markers instead of covering the canvas.
    pub fit_to_content: bool,
    /// Extra space around the markers when `fit_to_content` is set.
    pub viewbox_padding: f64,
}

impl Default for SvgRenderOptions {
    fn default() -> Self {
        Self {
            width: 500.0,
            height: 500.0,
            node_radius: 20.0,
            label_offset: Point::new(-15.0, 5.0),
            include_nodes: true,
            include_labels: true,
            include_edges: true,
            fit_to_content: false,
            viewbox_padding: 8.0,
        }
    }
}

/// Renders a positioned graph: a circle plus label per node, then one line per edge.
///
/// Edges are emitted after the nodes so they paint on top of the markers.
pub fn render_svg(graph: &Graph, options: &SvgRenderOptions) -> Result<String> {
    let model = LayoutedGraph::from_graph(graph)?;
    Ok(render_layouted_svg(&model, options))
}

pub fn render_layouted_svg(model: &LayoutedGraph, options: &SvgRenderOptions) -> String {
    let (vb_x, vb_y, vb_w, vb_h) = match model.bounds {
        Some(bounds) if options.fit_to_content => {
            let b = bounds.inflate(options.node_radius.max(0.0) + options.viewbox_padding.max(0.0));
            (b.min_x, b.min_y, b.width().max(1.0), b.height().max(1.0))
        }
        _ => (0.0, 0.0, options.width.max(1.0), options.height.max(1.0)),
    };

    let mut out = String::new();
    let _ = writeln!(
        &mut out,
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="{}" height="{}" viewBox="{} {} {} {}">"#,
        fmt(vb_w),
        fmt(vb_h),
        fmt(vb_x),
        fmt(vb_y),
        fmt(vb_w),
        fmt(vb_h)
    );
    out.push_str(
        r#"<style>
.node { fill: #000000; stroke: none; }
.node-label { fill: #ffffff; font-family: ui-sans-serif, system-ui, sans-serif; font-size: 12px; }
.edge { stroke: #000000; stroke-width: 1; }
</style>
"#,
    );

    if options.include_nodes || options.include_labels {
        out.push_str(r#"<g class="nodes">"#);
        for n in &model.nodes {
            if options.include_nodes {
                let _ = write!(
                    &mut out,
                    r#"<circle class="node" data-id="{}" cx="{}" cy="{}" r="{}" />"#,
                    escape_xml(&n.id),
                    fmt(n.x),
                    fmt(n.y),
                    fmt(options.node_radius)
                );
            }
            if options.include_labels {
                let _ = write!(
                    &mut out,
                    r#"<text class="node-label" x="{}" y="{}">{}</text>"#,
                    fmt(n.x + options.label_offset.x),
                    fmt(n.y + options.label_offset.y),
                    escape_xml(&n.label)
                );
            }
        }
        out.push_str("</g>\n");
    }

    if options.include_edges {
        out.push_str(r#"<g class="edges">"#);
        for e in &model.edges {
            let [from, to] = e.points.as_slice() else {
                tracing::debug!(
                    from = %e.from,
                    to = %e.to,
                    points = e.points.len(),
                    "edge needs exactly two points; not drawn"
                );
                continue;
            };
            let _ = write!(
                &mut out,
                r#"<line class="edge" data-from="{}" data-to="{}" x1="{}" y1="{}" x2="{}" y2="{}" />"#,
                escape_xml(&e.from),
                escape_xml(&e.to),
                fmt(from.x),
                fmt(from.y),
                fmt(to.x),
                fmt(to.y)
            );
        }
        out.push_str("</g>\n");
    }

    out.push_str("</svg>\n");
    out
}

fn fmt(v: f64) -> String {
    // Coordinates come from cos/sin, so values like 250.00000000000003 snap to the integer and
    // near-zero values print as `0`. Anything else keeps its shortest decimal form.
    if !v.is_finite() {
        return "0".to_string();
    }

    let mut v = if v.abs() < 1e-9 { 0.0 } else { v };
    let nearest = v.round();
    if (v - nearest).abs() < 1e-6 {
        v = nearest;
    }
    let s = v.to_string();
    if s == "-0" { "0".to_string() } else { s }
}

fn escape_xml(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
    out
}
