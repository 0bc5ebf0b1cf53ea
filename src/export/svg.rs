//! SVG output: the outline as one closed `<polygon>` plus a `chord=<value>` label placed near
//! the origin. Coordinates are written unchanged, so SVG's downward y axis shows the section
//! mirrored top to bottom.

use crate::errors::ExportError;
use crate::geometry::aabb2::{aabb_x_extent, point_cloud_aabb};
use itertools::Itertools;
use log::info;
use ncollide2d::bounding_volume::{BoundingVolume, AABB};
use ncollide2d::na::Point2;
use std::path::Path;
use svg::node::element::{Element, Polygon, Title};
use svg::node::{Node, Text};
use svg::Document;

/// Position of the chord label, in drawing units
const LABEL_POSITION: (f64, f64) = (0.0, 0.2);

/// Fraction of the larger drawing dimension added on each side of the view box
const MARGIN_FRACTION: f64 = 0.05;

#[derive(Debug, Clone, Default)]
pub struct SvgOptions<'a> {
    /// Emitted as a `<title>` element when present, usually the airfoil name
    pub title: Option<&'a str>,
}

fn polygon_points(points: &[Point2<f64>]) -> String {
    points.iter().map(|p| format!("{},{}", p.x, p.y)).join(" ")
}

/// Serializes the points to an SVG document string. The view box covers the points and the
/// label position with a small margin.
pub fn to_svg(points: &[Point2<f64>], options: &SvgOptions<'_>) -> String {
    let (label_x, label_y) = LABEL_POSITION;
    let label_box = AABB::new(Point2::origin(), Point2::new(label_x, label_y));

    let (chord, frame) = match point_cloud_aabb(points) {
        Ok(b) => (aabb_x_extent(&b), b.merged(&label_box)),
        Err(_) => (0.0, label_box),
    };
    let mins = frame.mins;
    let size = frame.maxs - frame.mins;
    let span = size.x.max(size.y);
    let margin = span * MARGIN_FRACTION;

    let mut doc = Document::new().set(
        "viewBox",
        (
            mins.x - margin,
            mins.y - margin,
            size.x + 2.0 * margin,
            size.y + 2.0 * margin,
        ),
    );

    if let Some(title) = options.title {
        doc = doc.add(Title::new(title));
    }

    let polygon = Polygon::new()
        .set("points", polygon_points(points))
        .set("fill", "none")
        .set("stroke", "black")
        .set("stroke-width", span / 500.0);
    doc = doc.add(polygon);

    let mut label = Element::new("text");
    label.assign("x", label_x);
    label.assign("y", label_y);
    label.assign("font-size", span / 40.0);
    label.append(Text::new(format!("chord={}", chord)));
    doc = doc.add(label);

    format!("<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n{doc}\n")
}

pub fn write_svg<P: AsRef<Path>>(
    points: &[Point2<f64>],
    options: &SvgOptions<'_>,
    path: P,
) -> Result<(), ExportError> {
    let path = path.as_ref();
    std::fs::write(path, to_svg(points, options))?;

    info!("Wrote {} vertices to {}", points.len(), path.display());
    Ok(())
}
