//! The read, normalize and write stages strung together, plus the rules for naming output files.

use crate::airfoil::Airfoil;
use crate::dat::read_dat_file;
use crate::errors::Error;
use crate::export::{write_dxf, write_json, write_svg, SvgOptions};
use clap::ValueEnum;
use itertools::Itertools;
use log::info;
use std::ffi::OsString;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, ValueEnum)]
pub enum OutputFormat {
    Dxf,
    Svg,
    Json,
}

impl OutputFormat {
    pub fn extension(&self) -> &'static str {
        match self {
            OutputFormat::Dxf => "dxf",
            OutputFormat::Svg => "svg",
            OutputFormat::Json => "json",
        }
    }
}

fn append_extension(path: &Path, ext: &str) -> PathBuf {
    let mut name: OsString = path.as_os_str().to_owned();
    name.push(".");
    name.push(ext);
    PathBuf::from(name)
}

/// Works out where each requested format is written. Duplicate formats are dropped.
///
/// * No output path: the format suffix is appended to the input path, `wing.dat` becomes
/// `wing.dat.dxf`.
/// * An output path and a single format: the output path is used as given.
/// * An output path and several formats: the output path's extension is replaced by each
/// format's suffix.
pub fn output_paths(
    input: &Path,
    output: Option<&Path>,
    formats: &[OutputFormat],
) -> Vec<(OutputFormat, PathBuf)> {
    let formats: Vec<OutputFormat> = formats.iter().copied().unique().collect();
    let single = formats.len() == 1;

    formats
        .into_iter()
        .map(|f| {
            let path = match output {
                None => append_extension(input, f.extension()),
                Some(out) if single => out.to_path_buf(),
                Some(out) => out.with_extension(f.extension()),
            };
            (f, path)
        })
        .collect()
}

/// Reads a dat file and normalizes it to `target_chord` (if one is given and positive).
pub fn load_airfoil(input: &Path, target_chord: Option<f64>) -> Result<Airfoil, Error> {
    let mut airfoil = read_dat_file(input)?;
    airfoil.normalize_in_place(target_chord)?;

    if let Ok(chord) = airfoil.chord() {
        info!("Airfoil has {} points, chord {}", airfoil.len(), chord);
    }
    Ok(airfoil)
}

pub fn write_airfoil(airfoil: &Airfoil, format: OutputFormat, path: &Path) -> Result<(), Error> {
    let result = match format {
        OutputFormat::Dxf => write_dxf(airfoil.points(), path),
        OutputFormat::Svg => {
            let options = SvgOptions {
                title: airfoil.name.as_deref(),
            };
            write_svg(airfoil.points(), &options, path)
        }
        OutputFormat::Json => write_json(airfoil, path),
    };

    result.map_err(|source| Error::Write {
        path: path.to_path_buf(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_output_appends_suffix() {
        let paths = output_paths(Path::new("foils/wing.dat"), None, &[OutputFormat::Dxf]);
        assert_eq!(
            paths,
            vec![(OutputFormat::Dxf, PathBuf::from("foils/wing.dat.dxf"))]
        );
    }

    #[test]
    fn test_single_output_used_verbatim() {
        let paths = output_paths(
            Path::new("wing.dat"),
            Some(Path::new("out/part")),
            &[OutputFormat::Svg],
        );
        assert_eq!(paths, vec![(OutputFormat::Svg, PathBuf::from("out/part"))]);
    }

    #[test]
    fn test_multiple_outputs_use_stem() {
        let paths = output_paths(
            Path::new("wing.dat"),
            Some(Path::new("out/part.dxf")),
            &[OutputFormat::Dxf, OutputFormat::Svg, OutputFormat::Dxf],
        );
        assert_eq!(
            paths,
            vec![
                (OutputFormat::Dxf, PathBuf::from("out/part.dxf")),
                (OutputFormat::Svg, PathBuf::from("out/part.svg")),
            ]
        );
    }

    #[test]
    fn test_multiple_defaults() {
        let paths = output_paths(
            Path::new("wing.dat"),
            None,
            &[OutputFormat::Svg, OutputFormat::Json],
        );
        assert_eq!(
            paths,
            vec![
                (OutputFormat::Svg, PathBuf::from("wing.dat.svg")),
                (OutputFormat::Json, PathBuf::from("wing.dat.json")),
            ]
        );
    }
}
