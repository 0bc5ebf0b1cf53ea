use crate::errors::InvalidGeometry;
use crate::geometry::aabb2::{aabb_x_extent, point_cloud_aabb};
use ncollide2d::na::Point2;

pub mod normalize;

use normalize::normalize;

/// The surface points of an airfoil section, in drawing order: leading edge, upper surface,
/// trailing edge, lower surface and back towards the leading edge. The outline is implicitly
/// closed, the last point is not expected to repeat the first.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Airfoil {
    /// The title line of the source file, if there was one
    pub name: Option<String>,

    points: Vec<Point2<f64>>,
}

impl Airfoil {
    pub fn new() -> Airfoil {
        Airfoil::default()
    }

    pub fn from_points(points: Vec<Point2<f64>>) -> Airfoil {
        Airfoil { name: None, points }
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Airfoil {
        self.name = Some(name.into());
        self
    }

    pub fn push(&mut self, p: Point2<f64>) {
        self.points.push(p);
    }

    pub fn points(&self) -> &[Point2<f64>] {
        &self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// The chord as it stands, max x minus min x of the current points. No translation or
    /// scaling is applied.
    pub fn chord(&self) -> Result<f64, InvalidGeometry> {
        Ok(aabb_x_extent(&point_cloud_aabb(&self.points)?))
    }

    /// Returns a copy of this airfoil with its points normalized to `target_chord`, see
    /// [`normalize`] for the rules.
    pub fn normalized(&self, target_chord: Option<f64>) -> Result<Airfoil, InvalidGeometry> {
        Ok(Airfoil {
            name: self.name.clone(),
            points: normalize(&self.points, target_chord)?,
        })
    }

    /// Replaces the points with their normalized copy. On error the points are left untouched.
    pub fn normalize_in_place(&mut self, target_chord: Option<f64>) -> Result<(), InvalidGeometry> {
        self.points = normalize(&self.points, target_chord)?;
        Ok(())
    }
}
