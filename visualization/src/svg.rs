//! SVG emission for a positioned tree layout.
//!
//! Produces a standalone `<svg>` string in the dashboard's visual language:
//! straight connector lines, rounded rectangles for split conditions, and
//! circles for class-label leaves. The emitter is pure string construction
//! over an already-computed [`TreeLayout`]; it never fails.

use std::collections::HashMap;
use std::fmt::Write as _;

use crate::layout::{Branch, TreeLayout};

/// Colors and glyph sizes for the rendered diagram.
#[derive(Debug, Clone, PartialEq)]
pub struct SvgStyle {
    pub leaf_radius: f64,
    pub split_box_width: f64,
    pub split_box_height: f64,
    pub font_size: f64,
    pub edge_color: String,
    pub split_fill: String,
    pub leaf_fill: String,
    pub text_color: String,
}

impl Default for SvgStyle {
    fn default() -> Self {
        Self {
            leaf_radius: 15.0,
            split_box_width: 110.0,
            split_box_height: 24.0,
            font_size: 11.0,
            edge_color: "#9ca3af".to_string(),
            split_fill: "#e0e7ff".to_string(),
            leaf_fill: "#86efac".to_string(),
            text_color: "#111827".to_string(),
        }
    }
}

/// Renders `layout` as a complete SVG document string.
///
/// Node glyph centers sit half a level below each node's `y` so the root
/// row is not clipped by the viewBox edge. Edge elements carry a
/// `data-branch` attribute (`first`/`second`) so the consuming page can
/// label or style the two directions.
#[must_use]
pub fn render(layout: &TreeLayout, style: &SvgStyle) -> String {
    let level_offset = if layout.nodes.len() > 1 {
        // Distance between the first two distinct y values.
        layout
            .nodes
            .iter()
            .map(|n| n.y)
            .filter(|y| *y > 0.0)
            .fold(f64::INFINITY, f64::min)
            / 2.0
    } else {
        layout.height / 2.0
    };

    let centers: HashMap<&str, (f64, f64)> = layout
        .nodes
        .iter()
        .map(|n| (n.id.as_str(), (n.x, n.y + level_offset)))
        .collect();

    let mut svg = String::new();
    let _ = write!(
        svg,
        "<svg xmlns=\"http://www.w3.org/2000/svg\" viewBox=\"0 0 {:.1} {:.1}\">",
        layout.width, layout.height
    );

    // Edges first so nodes draw over them.
    for edge in &layout.edges {
        let (Some(&(x1, y1)), Some(&(x2, y2))) = (
            centers.get(edge.parent.as_str()),
            centers.get(edge.child.as_str()),
        ) else {
            continue;
        };
        let branch = match edge.branch {
            Branch::First => "first",
            Branch::Second => "second",
        };
        let _ = write!(
            svg,
            "<line x1=\"{x1:.1}\" y1=\"{y1:.1}\" x2=\"{x2:.1}\" y2=\"{y2:.1}\" \
             stroke=\"{}\" stroke-width=\"2\" data-branch=\"{branch}\"/>",
            style.edge_color
        );
    }

    for node in &layout.nodes {
        let (x, y) = (node.x, node.y + level_offset);
        let text = escape(&node.label);
        if node.is_leaf {
            let _ = write!(
                svg,
                "<g id=\"{}\"><circle cx=\"{x:.1}\" cy=\"{y:.1}\" r=\"{:.1}\" fill=\"{}\"/>\
                 <text x=\"{x:.1}\" y=\"{y:.1}\" dy=\".3em\" text-anchor=\"middle\" \
                 font-size=\"{:.0}\" fill=\"{}\">{text}</text></g>",
                escape(&node.id),
                style.leaf_radius,
                style.leaf_fill,
                style.font_size,
                style.text_color
            );
        } else {
            let _ = write!(
                svg,
                "<g id=\"{}\"><rect x=\"{:.1}\" y=\"{:.1}\" width=\"{:.1}\" height=\"{:.1}\" \
                 rx=\"4\" fill=\"{}\" stroke=\"{}\"/>\
                 <text x=\"{x:.1}\" y=\"{y:.1}\" dy=\".3em\" text-anchor=\"middle\" \
                 font-size=\"{:.0}\" fill=\"{}\">{text}</text></g>",
                escape(&node.id),
                x - style.split_box_width / 2.0,
                y - style.split_box_height / 2.0,
                style.split_box_width,
                style.split_box_height,
                style.split_fill,
                style.edge_color,
                style.font_size,
                style.text_color
            );
        }
    }

    svg.push_str("</svg>");
    svg
}

fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
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
