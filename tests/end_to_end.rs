use airfoil_dat::convert::{load_airfoil, output_paths, write_airfoil, OutputFormat};
use airfoil_dat::errors::{DatError, InvalidGeometry};
use airfoil_dat::Error;
use approx::assert_relative_eq;
use dxf::entities::EntityType;
use dxf::Drawing;
use std::path::{Path, PathBuf};

fn write_dat(dir: &Path, name: &str, text: &str) -> PathBuf {
    let path = dir.join(name);
    std::fs::write(&path, text).unwrap();
    path
}

#[test]
fn wedge_to_dxf_and_svg() {
    let dir = tempfile::tempdir().unwrap();
    let input = write_dat(dir.path(), "wedge.dat", "Wedge\n0 0\n1 0.05\n2 0\n");

    let airfoil = load_airfoil(&input, Some(100.0)).unwrap();
    let expected = [(0.0, 0.0), (50.0, 2.5), (100.0, 0.0)];
    assert_eq!(airfoil.len(), 3);
    for (p, e) in airfoil.points().iter().zip(expected.iter()) {
        assert_relative_eq!(p.x, e.0, epsilon = 1e-9);
        assert_relative_eq!(p.y, e.1, epsilon = 1e-9);
    }

    let output = dir.path().join("wedge");
    let paths = output_paths(
        &input,
        Some(&output),
        &[OutputFormat::Dxf, OutputFormat::Svg],
    );
    for (format, path) in paths.iter() {
        write_airfoil(&airfoil, *format, path).unwrap();
    }

    let drawing = Drawing::load_file(dir.path().join("wedge.dxf").to_str().unwrap()).unwrap();
    let polylines: Vec<_> = drawing
        .entities()
        .filter_map(|e| match &e.specific {
            EntityType::LwPolyline(p) => Some(p),
            _ => None,
        })
        .collect();
    assert_eq!(polylines.len(), 1);
    assert!(polylines[0].is_closed());
    assert_eq!(polylines[0].vertices.len(), 3);

    let svg = std::fs::read_to_string(dir.path().join("wedge.svg")).unwrap();
    assert_eq!(svg.matches("<polygon").count(), 1);
    assert!(svg.contains("chord=100"));
    assert!(svg.contains("<title>"));
}

#[test]
fn no_chord_keeps_file_coordinates() {
    let dir = tempfile::tempdir().unwrap();
    let input = write_dat(dir.path(), "foil.dat", "1.0 0.0\n0.5 0.06\n0.0 0.0\n0.5 -0.04\n");

    let plain = load_airfoil(&input, None).unwrap();
    let negative = load_airfoil(&input, Some(-10.0)).unwrap();

    assert_eq!(plain, negative);
    assert_relative_eq!(plain.chord().unwrap(), 1.0);
    assert_relative_eq!(plain.points()[3].y, -0.04);
}

#[test]
fn default_output_appends_suffix() {
    let dir = tempfile::tempdir().unwrap();
    let input = write_dat(dir.path(), "foil.dat", "foil\n1 0\n0 0.1\n0 -0.1\n");
    let airfoil = load_airfoil(&input, Some(10.0)).unwrap();

    for (format, path) in output_paths(&input, None, &[OutputFormat::Json]) {
        write_airfoil(&airfoil, format, &path).unwrap();
    }

    let text = std::fs::read_to_string(dir.path().join("foil.dat.json")).unwrap();
    let value: serde_json::Value = serde_json::from_str(&text).unwrap();
    assert_eq!(value["name"], "foil");
    assert_eq!(value["points"].as_array().unwrap().len(), 3);
}

#[test]
fn degenerate_points_fail_normalize_stage() {
    let dir = tempfile::tempdir().unwrap();
    let input = write_dat(dir.path(), "line.dat", "0.5 0.0\n0.5 1.0\n");

    let result = load_airfoil(&input, Some(1.0));
    assert!(matches!(
        result,
        Err(Error::Normalize(InvalidGeometry::ZeroChord))
    ));
}

#[test]
fn empty_file_fails_normalize_stage() {
    let dir = tempfile::tempdir().unwrap();
    let input = write_dat(dir.path(), "empty.dat", "just a title\n");

    let result = load_airfoil(&input, Some(1.0));
    assert!(matches!(
        result,
        Err(Error::Normalize(InvalidGeometry::NotEnoughPoints))
    ));
}

#[test]
fn malformed_line_fails_read_stage() {
    let dir = tempfile::tempdir().unwrap();
    let input = write_dat(dir.path(), "bad.dat", "title\n1.0 0.0\n0.5 0.0x\n");

    match load_airfoil(&input, Some(1.0)) {
        Err(Error::Read(DatError::Line { line, .. })) => assert_eq!(line, 3),
        other => panic!("unexpected {:?}", other),
    }
}

#[test]
fn unwritable_output_fails_write_stage() {
    let dir = tempfile::tempdir().unwrap();
    let input = write_dat(dir.path(), "foil.dat", "1 0\n0 0\n");
    let airfoil = load_airfoil(&input, None).unwrap();

    let path = dir.path().join("missing").join("out.svg");
    match write_airfoil(&airfoil, OutputFormat::Svg, &path) {
        Err(Error::Write { path: p, .. }) => assert_eq!(p, path),
        other => panic!("unexpected {:?}", other),
    }
}

#[test]
fn overflowing_coordinates_fail_normalize_stage() {
    let dir = tempfile::tempdir().unwrap();
    let input = write_dat(dir.path(), "huge.dat", "huge\n1e400 0\n0 0.1\n");

    let result = load_airfoil(&input, Some(1.0));
    assert!(matches!(
        result,
        Err(Error::Normalize(InvalidGeometry::NonFiniteChord))
    ));
}
