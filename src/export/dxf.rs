use crate::errors::ExportError;
use dxf::entities::{Entity, EntityType, LwPolyline};
use dxf::enums::AcadVersion;
use dxf::{Drawing, LwPolylineVertex};
use log::info;
use ncollide2d::na::Point2;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

/// Builds a drawing with a single closed lightweight polyline through the points, in order.
/// The header is written as AutoCAD 2000 (AC1015) for the widest compatibility with CAM tools.
pub fn to_dxf_drawing(points: &[Point2<f64>]) -> Drawing {
    let mut drawing = Drawing::new();
    drawing.header.version = AcadVersion::R2000;

    let mut polyline = LwPolyline::default();
    polyline.set_is_closed(true);
    for p in points.iter() {
        polyline.vertices.push(LwPolylineVertex {
            x: p.x,
            y: p.y,
            ..Default::default()
        });
    }

    drawing.add_entity(Entity::new(EntityType::LwPolyline(polyline)));
    drawing
}

pub fn write_dxf<P: AsRef<Path>>(points: &[Point2<f64>], path: P) -> Result<(), ExportError> {
    let path = path.as_ref();
    let drawing = to_dxf_drawing(points);

    let mut writer = BufWriter::new(File::create(path)?);
    drawing.save(&mut writer)?;
    writer.flush()?;

    info!("Wrote {} vertices to {}", points.len(), path.display());
    Ok(())
}
