use indoorgraph::render::{SvgRenderOptions, render_svg, render_svg_file};
use indoorgraph::{Error, PipelineOptions};
use std::io::Write;

const TWO_ROOMS: &str = r##"<IndoorFeatures xmlns:gml="http://www.opengis.net/gml/3.2"
    xmlns:xlink="http://www.w3.org/1999/xlink">
  <CellSpace gml:id="K"><gml:name>Kitchen</gml:name></CellSpace>
  <CellSpace gml:id="D"><gml:name>Dining</gml:name></CellSpace>
  <Transition><connects xlink:href="#K"/><connects xlink:href="#D"/></Transition>
</IndoorFeatures>"##;

#[test]
fn render_svg_runs_the_whole_pipeline() {
    let svg = render_svg(
        TWO_ROOMS,
        &PipelineOptions::default(),
        &SvgRenderOptions::default(),
    )
    .unwrap();
    let doc = roxmltree::Document::parse(&svg).unwrap();

    let centers: Vec<_> = doc
        .descendants()
        .filter(|n| n.has_tag_name("circle"))
        .map(|n| (n.attribute("cx").unwrap(), n.attribute("cy").unwrap()))
        .collect();
    assert_eq!(centers, [("450", "250"), ("50", "250")]);

    let labels: Vec<_> = doc
        .descendants()
        .filter(|n| n.has_tag_name("text"))
        .filter_map(|n| n.text())
        .collect();
    assert_eq!(labels, ["Kitchen", "Dining"]);
    assert_eq!(
        doc.descendants().filter(|n| n.has_tag_name("line")).count(),
        1
    );
}

#[test]
fn render_svg_file_propagates_parse_errors() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(b"<IndoorFeatures><CellSpace>").unwrap();
    let err = render_svg_file(
        file.path(),
        &PipelineOptions::default(),
        &SvgRenderOptions::default(),
    )
    .unwrap_err();
    assert!(matches!(err, Error::Parse(_)), "{err:?}");
}
