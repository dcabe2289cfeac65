use indoorgraph::{Error, ParseError, PipelineOptions, Point, load_graph, load_graph_bytes};
use std::io::Write;

const BUILDING: &str = r##"<?xml version="1.0" encoding="UTF-8"?>
<core:IndoorFeatures xmlns:core="http://www.opengis.net/indoorgml/1.0/core"
    xmlns:gml="http://www.opengis.net/gml/3.2"
    xmlns:xlink="http://www.w3.org/1999/xlink">
  <core:CellSpace gml:id="A"><gml:name>Entrance</gml:name></core:CellSpace>
  <core:CellSpace gml:id="B"><gml:name>Corridor</gml:name></core:CellSpace>
  <core:CellSpace gml:id="C"/>
  <core:Transition gml:id="T1"><core:connects xlink:href="#A"/><core:connects xlink:href="#B"/></core:Transition>
  <core:Transition gml:id="T2"><core:connects xlink:href="#B"/><core:connects xlink:href="#C"/></core:Transition>
  <core:Transition gml:id="T3"><core:connects xlink:href="#C"/><core:connects xlink:href="#A"/></core:Transition>
</core:IndoorFeatures>
"##;

#[test]
fn load_graph_extracts_and_places_every_node() {
    let g = load_graph(BUILDING, &PipelineOptions::default()).unwrap();
    assert_eq!(g.len(), 3);
    assert_eq!(g.edge_count(), 3);
    assert!(g.is_positioned());
    assert_eq!(
        g.node_by_key("#A").unwrap().position,
        Some(Point::new(450.0, 250.0))
    );
    for e in g.edges() {
        let (from, to) = g.endpoints(e).unwrap();
        assert!(from.position.is_some() && to.position.is_some());
    }
}

#[test]
fn load_graph_applies_layout_options() {
    let opts = PipelineOptions::from_json_str(r#"{"layout": {"center": {"x": 0, "y": 0}, "radius": 10}}"#)
        .unwrap();
    let g = load_graph(BUILDING, &opts).unwrap();
    let b = g.node_by_key("#B").unwrap().position.unwrap();
    let angle = 2.0 * std::f64::consts::PI / 3.0;
    assert!((b.x - 10.0 * angle.cos()).abs() < 1e-9);
    assert!((b.y - 10.0 * angle.sin()).abs() < 1e-9);
}

#[test]
fn load_graph_on_parse_failure_yields_no_graph() {
    let err = load_graph("<core:IndoorFeatures>", &PipelineOptions::default()).unwrap_err();
    assert!(matches!(err, Error::Parse(ParseError::Xml(_))), "{err:?}");
}

#[test]
fn load_graph_of_document_without_cell_spaces_is_empty() {
    let g = load_graph("<IndoorFeatures/>", &PipelineOptions::default()).unwrap();
    assert!(g.is_empty());
    assert_eq!(g.edge_count(), 0);
}

#[test]
fn load_graph_bytes_matches_load_graph() {
    let opts = PipelineOptions::default();
    assert_eq!(
        load_graph_bytes(BUILDING.as_bytes(), &opts).unwrap(),
        load_graph(BUILDING, &opts).unwrap()
    );
}

#[test]
fn load_graph_file_reads_from_disk() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(BUILDING.as_bytes()).unwrap();
    let g = indoorgraph::load_graph_file(file.path(), &PipelineOptions::default()).unwrap();
    let labels: Vec<_> = g.nodes().map(|n| n.label.as_str()).collect();
    assert_eq!(labels, ["Entrance", "Corridor", "C"]);
}

#[test]
fn load_graph_file_reports_missing_file() {
    let dir = tempfile::tempdir().unwrap();
    let err = indoorgraph::load_graph_file(dir.path().join("sample.gml"), &PipelineOptions::default())
        .unwrap_err();
    assert!(matches!(err, Error::Parse(ParseError::Io { .. })), "{err:?}");
}
