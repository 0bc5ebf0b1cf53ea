use crate::airfoil::Airfoil;
use crate::errors::ExportError;
use crate::serialize::PointSeq;
use log::info;
use serde::Serialize;
use std::path::Path;

#[derive(Serialize)]
struct AirfoilRecord<'a> {
    name: Option<&'a str>,
    chord: Option<f64>,
    points: PointSeq<'a>,
}

/// Pretty printed JSON holding the name, the current chord (null when there are no points) and
/// the surface points in order.
pub fn to_json(airfoil: &Airfoil) -> Result<String, ExportError> {
    let record = AirfoilRecord {
        name: airfoil.name.as_deref(),
        chord: airfoil.chord().ok(),
        points: PointSeq(airfoil.points()),
    };
    Ok(serde_json::to_string_pretty(&record)?)
}

pub fn write_json<P: AsRef<Path>>(airfoil: &Airfoil, path: P) -> Result<(), ExportError> {
    let path = path.as_ref();
    std::fs::write(path, to_json(airfoil)?)?;

    info!("Wrote {} points to {}", airfoil.len(), path.display());
    Ok(())
}
