//! Serializes scene frames into standalone SVG documents.
//!
//! Output is deterministic: the same frame always serializes to the same
//! bytes, which keeps repeated renders and export artifacts comparable.

use std::fmt::Write as _;

use crate::error::ChartResult;
use crate::render::Renderer;
use crate::scene::{Color, SceneFrame, TextHAlign, TextPrimitive};

pub const SVG_MEDIA_TYPE: &str = "image/svg+xml";

const LABEL_CLIP_ID: &str = "label-clip";

/// Renderer that keeps the serialized document of the last frame it drew.
#[derive(Debug, Default)]
pub struct SvgRenderer {
    last_document: Option<String>,
}

impl SvgRenderer {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn last_document(&self) -> Option<&str> {
        self.last_document.as_deref()
    }

    #[must_use]
    pub fn take_document(&mut self) -> Option<String> {
        self.last_document.take()
    }
}

impl Renderer for SvgRenderer {
    fn render(&mut self, frame: &SceneFrame) -> ChartResult<()> {
        self.last_document = Some(render_svg_document(frame)?);
        Ok(())
    }
}

/// Serializes a validated frame into a complete SVG document.
pub fn render_svg_document(frame: &SceneFrame) -> ChartResult<String> {
    frame.validate()?;

    let mut doc = String::new();
    let _ = writeln!(
        doc,
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="{}" height="{}" viewBox="0 0 {} {}">"#,
        frame.viewport.width, frame.viewport.height, frame.viewport.width, frame.viewport.height,
    );

    if let Some(clip_radius) = frame.label_clip_radius {
        let center = frame.viewport.center();
        let _ = writeln!(
            doc,
            r#"  <defs><clipPath id="{LABEL_CLIP_ID}"><circle cx="{}" cy="{}" r="{}"/></clipPath></defs>"#,
            fmt_num(center.x),
            fmt_num(center.y),
            fmt_num(clip_radius),
        );
    }

    let _ = writeln!(doc, r#"  <g class="grid">"#);
    for ring in &frame.grid_rings {
        let _ = writeln!(
            doc,
            r#"    <circle cx="{}" cy="{}" r="{}" fill="none" stroke="{}"{} stroke-width="{}"/>"#,
            fmt_num(ring.cx),
            fmt_num(ring.cy),
            fmt_num(ring.radius),
            rgb(ring.stroke),
            stroke_opacity(ring.stroke),
            fmt_num(ring.stroke_width),
        );
    }
    let _ = writeln!(doc, "  </g>");

    let _ = writeln!(doc, r#"  <g class="axes">"#);
    for spoke in &frame.axis_spokes {
        let _ = writeln!(
            doc,
            r#"    <line x1="{}" y1="{}" x2="{}" y2="{}" stroke="{}"{} stroke-width="{}"/>"#,
            fmt_num(spoke.x1),
            fmt_num(spoke.y1),
            fmt_num(spoke.x2),
            fmt_num(spoke.y2),
            rgb(spoke.color),
            stroke_opacity(spoke.color),
            fmt_num(spoke.stroke_width),
        );
    }
    let _ = writeln!(doc, "  </g>");

    let clip_attr = if frame.label_clip_radius.is_some() {
        format!(r#" clip-path="url(#{LABEL_CLIP_ID})""#)
    } else {
        String::new()
    };
    let _ = writeln!(doc, r#"  <g class="labels"{clip_attr}>"#);
    for label in &frame.axis_labels {
        write_text(&mut doc, label);
    }
    let _ = writeln!(doc, "  </g>");

    if let Some(polygon) = &frame.series_polygon {
        let mut points = String::new();
        for point in &polygon.points {
            if !points.is_empty() {
                points.push(' ');
            }
            let _ = write!(points, "{},{}", fmt_num(point.x), fmt_num(point.y));
        }
        let _ = writeln!(
            doc,
            r#"  <polygon class="series" points="{}" fill="{}"{} stroke="{}"{} stroke-width="{}"/>"#,
            points,
            rgb(polygon.fill),
            fill_opacity(polygon.fill),
            rgb(polygon.stroke),
            stroke_opacity(polygon.stroke),
            fmt_num(polygon.stroke_width),
        );
    }

    if !frame.vertex_markers.is_empty() {
        let _ = writeln!(doc, r#"  <g class="markers">"#);
        for marker in &frame.vertex_markers {
            let fill = match marker.fill {
                Some(fill) => format!(r#" fill="{}"{}"#, rgb(fill), fill_opacity(fill)),
                None => r#" fill="none""#.to_owned(),
            };
            let _ = writeln!(
                doc,
                r#"    <circle cx="{}" cy="{}" r="{}"{} stroke="{}"{} stroke-width="{}"/>"#,
                fmt_num(marker.cx),
                fmt_num(marker.cy),
                fmt_num(marker.radius),
                fill,
                rgb(marker.stroke),
                stroke_opacity(marker.stroke),
                fmt_num(marker.stroke_width),
            );
        }
        let _ = writeln!(doc, "  </g>");
    }

    if let Some(title) = &frame.title {
        write_text(&mut doc, title);
    }

    doc.push_str("</svg>\n");
    Ok(doc)
}

fn write_text(doc: &mut String, text: &TextPrimitive) {
    let anchor = match text.h_align {
        TextHAlign::Left => "start",
        TextHAlign::Center => "middle",
        TextHAlign::Right => "end",
    };
    let transform = match text.rotation_deg {
        Some(rotation) => format!(
            r#" transform="rotate({} {} {})""#,
            fmt_num(rotation),
            fmt_num(text.x),
            fmt_num(text.y),
        ),
        None => String::new(),
    };
    let _ = writeln!(
        doc,
        r#"    <text x="{}" y="{}" font-size="{}" fill="{}"{} text-anchor="{anchor}"{transform}>{}</text>"#,
        fmt_num(text.x),
        fmt_num(text.y),
        fmt_num(text.font_size_px),
        rgb(text.color),
        fill_opacity(text.color),
        escape_xml(&text.text),
    );
}

/// Fixed two-decimal formatting with trailing zeros trimmed.
fn fmt_num(value: f64) -> String {
    let mut out = format!("{value:.2}");
    if out.contains('.') {
        while out.ends_with('0') {
            out.pop();
        }
        if out.ends_with('.') {
            out.pop();
        }
    }
    if out == "-0" {
        out = "0".to_owned();
    }
    out
}

fn rgb(color: Color) -> String {
    format!(
        "rgb({},{},{})",
        channel(color.red),
        channel(color.green),
        channel(color.blue)
    )
}

fn channel(value: f64) -> u8 {
    (value * 255.0).round() as u8
}

fn stroke_opacity(color: Color) -> String {
    if color.alpha < 1.0 {
        format!(r#" stroke-opacity="{}""#, fmt_num(color.alpha))
    } else {
        String::new()
    }
}

fn fill_opacity(color: Color) -> String {
    if color.alpha < 1.0 {
        format!(r#" fill-opacity="{}""#, fmt_num(color.alpha))
    } else {
        String::new()
    }
}

fn escape_xml(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            other => out.push(other),
        }
    }
    out
}
