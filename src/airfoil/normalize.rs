//! Translate-then-scale normalization of airfoil surface points to a target chord length.

use crate::errors::InvalidGeometry;
use crate::geometry::aabb2::{aabb_x_extent, point_cloud_aabb};
use log::{debug, warn};
use ncollide2d::na::Point2;

/// Returns true if `chord` can be scaled to. Zero, negative, infinite and NaN values all mean
/// "leave the points alone".
pub fn is_scaling_chord(chord: f64) -> bool {
    chord.is_finite() && chord > 0.0
}

/// Produce a copy of `points` translated so that the minimum x and minimum y are both zero, and
/// uniformly scaled so that the x-extent equals `target_chord`.
///
/// The translation uses the minima of the points given, so normalizing an already normalized
/// sequence to a different chord rescales about the origin.
///
/// # Arguments
///
/// * `points` - the ordered surface points
///
/// * `target_chord` - the desired chord length. `None`, a non-positive value, infinity or NaN
/// returns the points unchanged without inspecting them.
///
/// # Errors
///
/// With a positive chord, an empty slice is `NotEnoughPoints` and a slice whose points all share
/// the same x is `ZeroChord`. An extent or scale factor which overflows to infinity is
/// `NonFiniteChord`.
pub fn normalize(
    points: &[Point2<f64>],
    target_chord: Option<f64>,
) -> Result<Vec<Point2<f64>>, InvalidGeometry> {
    let chord = match target_chord {
        Some(c) if is_scaling_chord(c) => c,
        Some(c) => {
            warn!("Ignoring target chord {}, it must be positive and finite", c);
            return Ok(points.to_vec());
        }
        None => return Ok(points.to_vec()),
    };

    let b = point_cloud_aabb(points)?;
    let extent = aabb_x_extent(&b);
    if extent == 0.0 {
        return Err(InvalidGeometry::ZeroChord);
    }

    let scale = chord / extent;
    if !extent.is_finite() || !scale.is_finite() {
        return Err(InvalidGeometry::NonFiniteChord);
    }
    debug!(
        "Normalizing {} points: xmin={}, ymin={}, scale={}",
        points.len(),
        b.mins.x,
        b.mins.y,
        scale
    );

    Ok(points
        .iter()
        .map(|p| Point2::new((p.x - b.mins.x) * scale, (p.y - b.mins.y) * scale))
        .collect())
}
