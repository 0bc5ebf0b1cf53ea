use crate::errors::InvalidGeometry;
use itertools::{Itertools, MinMaxResult};
use ncollide2d::bounding_volume::AABB;
use ncollide2d::na::Point2;

fn min_max(values: impl Iterator<Item = f64>) -> Option<(f64, f64)> {
    match values.minmax_by(|a, b| a.total_cmp(b)) {
        MinMaxResult::NoElements => None,
        MinMaxResult::OneElement(v) => Some((v, v)),
        MinMaxResult::MinMax(lo, hi) => Some((lo, hi)),
    }
}

/// Computes the axis aligned bounding box of a point cloud. An empty slice has no bounding box.
pub fn point_cloud_aabb(points: &[Point2<f64>]) -> Result<AABB<f64>, InvalidGeometry> {
    let (x0, x1) = min_max(points.iter().map(|p| p.x)).ok_or(InvalidGeometry::NotEnoughPoints)?;
    let (y0, y1) = min_max(points.iter().map(|p| p.y)).ok_or(InvalidGeometry::NotEnoughPoints)?;
    Ok(AABB::new(Point2::new(x0, y0), Point2::new(x1, y1)))
}

/// The horizontal extent (max x - min x) of an AABB
pub fn aabb_x_extent(b: &AABB<f64>) -> f64 {
    b.maxs.x - b.mins.x
}
