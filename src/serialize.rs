use ncollide2d::na::Point2;
use serde::{Serialize, Serializer};

#[derive(Serialize)]
#[serde(remote = "Point2<f64>")]
pub struct Point2f64 {
    x: f64,
    y: f64,
}

/// Serializes an ordered run of points as a sequence of `{"x": .., "y": ..}` objects
pub struct PointSeq<'a>(pub &'a [Point2<f64>]);

impl Serialize for PointSeq<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        #[derive(Serialize)]
        struct Wrap(#[serde(with = "Point2f64")] Point2<f64>);

        serializer.collect_seq(self.0.iter().map(|p| Wrap(*p)))
    }
}
