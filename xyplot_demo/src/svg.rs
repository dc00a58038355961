// Copyright 2026 the xyplot Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Minimal SVG dump of a recorded display list.

use std::fmt::Write as _;

use kurbo::{Cap, Rect};
use peniko::Color;
use xyplot_core::DrawCommand;

pub(crate) fn to_svg_string(commands: &[DrawCommand], view_box: Rect) -> String {
    let mut out = String::new();
    let _ = writeln!(
        out,
        r#"<svg xmlns="http://www.w3.org/2000/svg" viewBox="{} {} {} {}" width="{}" height="{}">"#,
        view_box.x0,
        view_box.y0,
        view_box.width(),
        view_box.height(),
        view_box.width(),
        view_box.height()
    );

    for command in commands {
        match command {
            DrawCommand::Stroke {
                path,
                color,
                width,
                cap,
            } => {
                let _ = write!(out, r#"<path d="{}" fill="none""#, path.to_svg());
                write_paint_attr(&mut out, "stroke", *color);
                let cap = match cap {
                    Cap::Butt => "butt",
                    Cap::Round => "round",
                    Cap::Square => "square",
                };
                let _ = writeln!(out, r#" stroke-width="{width}" stroke-linecap="{cap}"/>"#);
            }
            DrawCommand::Text {
                family,
                size,
                origin,
                text,
                color,
            } => {
                let _ = write!(
                    out,
                    r#"<text x="{}" y="{}" font-family="{}" font-size="{size}""#,
                    origin.x,
                    origin.y,
                    escape_xml(family)
                );
                write_paint_attr(&mut out, "fill", *color);
                let _ = writeln!(out, ">{}</text>", escape_xml(text));
            }
            // Glyph outlines are not exported; the run's source text stands in for them.
            DrawCommand::Glyphs {
                font_size,
                origin,
                text,
                color,
                ..
            } => {
                let _ = write!(
                    out,
                    r#"<text x="{}" y="{}" font-size="{font_size}""#,
                    origin.x, origin.y
                );
                write_paint_attr(&mut out, "fill", *color);
                let _ = writeln!(out, ">{}</text>", escape_xml(text));
            }
        }
    }

    out.push_str("</svg>\n");
    out
}

fn svg_paint(color: Color) -> (String, Option<f64>) {
    let rgba = color.to_rgba8();
    let value = format!("#{:02x}{:02x}{:02x}", rgba.r, rgba.g, rgba.b);
    let opacity = if rgba.a == 255 {
        None
    } else {
        Some(f64::from(rgba.a) / 255.0)
    };
    (value, opacity)
}

fn write_paint_attr(out: &mut String, name: &str, color: Color) {
    let (value, opacity) = svg_paint(color);
    let _ = write!(out, r#" {name}="{value}""#);
    if let Some(o) = opacity {
        let _ = write!(out, r#" {name}-opacity="{o}""#);
    }
}

fn escape_xml(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            _ => out.push(c),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use kurbo::{BezPath, Point};
    use peniko::color::palette::css;

    use super::*;

    #[test]
    fn strokes_and_text_become_elements() {
        let mut path = BezPath::new();
        path.move_to((0.0, 0.0));
        path.line_to((10.0, 0.0));
        let commands = [
            DrawCommand::Stroke {
                path,
                color: css::BLUE,
                width: 1.0,
                cap: Cap::Round,
            },
            DrawCommand::Text {
                family: "Sans".into(),
                size: 12.0,
                origin: Point::new(1.0, 2.0),
                text: "a<b".into(),
                color: css::BLACK,
            },
        ];
        let svg = to_svg_string(&commands, Rect::new(0.0, 0.0, 20.0, 20.0));
        assert!(svg.contains(r##"stroke="#0000ff""##), "{svg}");
        assert!(svg.contains(r#"stroke-linecap="round""#), "{svg}");
        assert!(svg.contains(">a&lt;b</text>"), "{svg}");
        assert!(svg.ends_with("</svg>\n"));
    }
}
