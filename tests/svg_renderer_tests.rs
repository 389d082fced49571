use radar_rs::core::{ChartState, Viewport};
use radar_rs::render::{Renderer, SvgRenderer, render_svg_document};
use radar_rs::scene::{ChartGeometry, SceneFrame, SceneStyle, build_scene};

fn sample_frame() -> SceneFrame {
    let state = ChartState::new(
        vec!["Deutsch".to_owned(), "Mathematik".to_owned(), "Musik".to_owned()],
        vec![8.0, 6.5, 9.0],
    )
    .expect("valid state");
    let geometry = ChartGeometry::new(Viewport::new(800, 800), 250.0, 12.0);
    build_scene(&state, Some("Zeugnis"), &SceneStyle::default(), geometry).expect("scene")
}

#[test]
fn document_has_svg_envelope_and_viewport() {
    let doc = render_svg_document(&sample_frame()).expect("document");

    assert!(doc.starts_with("<svg xmlns=\"http://www.w3.org/2000/svg\""));
    assert!(doc.contains("width=\"800\" height=\"800\""));
    assert!(doc.trim_end().ends_with("</svg>"));
}

#[test]
fn document_contains_every_scene_element() {
    let doc = render_svg_document(&sample_frame()).expect("document");

    assert_eq!(doc.matches("<circle").count(), 20);
    assert_eq!(doc.matches("<line").count(), 3);
    // Three axis labels plus the title.
    assert_eq!(doc.matches("<text").count(), 4);
    assert_eq!(doc.matches("<polygon").count(), 1);
    assert!(doc.contains(">Zeugnis</text>"));
}

#[test]
fn serialization_is_deterministic() {
    let first = render_svg_document(&sample_frame()).expect("document");
    let second = render_svg_document(&sample_frame()).expect("document");
    assert_eq!(first, second);
}

#[test]
fn renderer_keeps_the_latest_document() {
    let mut renderer = SvgRenderer::new();
    assert!(renderer.last_document().is_none());

    let frame = sample_frame();
    renderer.render(&frame).expect("render");

    let direct = render_svg_document(&frame).expect("document");
    assert_eq!(renderer.last_document().expect("document"), direct);
}

#[test]
fn markers_and_clip_are_emitted_when_styled() {
    let state = ChartState::new(vec!["A".to_owned(), "B".to_owned()], vec![4.0, 7.0])
        .expect("valid state");
    let style = SceneStyle {
        show_vertex_markers: true,
        clip_labels: true,
        rotate_labels: true,
        ..SceneStyle::default()
    };
    let geometry = ChartGeometry::new(Viewport::new(800, 800), 250.0, 12.0);
    let frame = build_scene(&state, None, &style, geometry).expect("scene");

    let doc = render_svg_document(&frame).expect("document");
    assert!(doc.contains("<clipPath id=\"label-clip\">"));
    assert!(doc.contains("clip-path=\"url(#label-clip)\""));
    assert!(doc.contains("class=\"markers\""));
    assert!(doc.contains("transform=\"rotate("));
}

#[test]
fn label_text_is_xml_escaped() {
    let state = ChartState::new(vec!["Sport & Spiel <indoor>".to_owned()], vec![5.0])
        .expect("valid state");
    let geometry = ChartGeometry::new(Viewport::new(800, 800), 250.0, 12.0);
    let frame = build_scene(&state, None, &SceneStyle::default(), geometry).expect("scene");

    let doc = render_svg_document(&frame).expect("document");
    assert!(doc.contains("Sport &amp; Spiel &lt;indoor&gt;"));
    assert!(!doc.contains("<indoor>"));
}

#[test]
fn empty_state_serializes_to_a_grid_only_document() {
    let geometry = ChartGeometry::new(Viewport::new(800, 800), 250.0, 12.0);
    let frame = build_scene(&ChartState::empty(), None, &SceneStyle::default(), geometry)
        .expect("scene");

    let doc = render_svg_document(&frame).expect("document");
    assert_eq!(doc.matches("<circle").count(), 20);
    assert_eq!(doc.matches("<line").count(), 0);
    assert_eq!(doc.matches("<polygon").count(), 0);
}

#[test]
fn major_and_minor_rings_differ_in_opacity() {
    let doc = render_svg_document(&sample_frame()).expect("document");
    assert!(doc.contains("stroke-opacity=\"0.05\""));
    assert!(doc.contains("stroke-opacity=\"0.2\""));
}
