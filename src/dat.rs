//! Reader for the plain-text "dat" airfoil coordinate format: one whitespace separated x/y pair
//! per line, usually preceded by a title line such as `NACA 2412`.
//!
//! A line is a coordinate line when its first token is a number and its second token begins
//! with one. Everything else is skipped. A coordinate line which then fails to convert to
//! exactly two floats is an error rather than being skipped, so a corrupted file can't silently
//! lose points.

use crate::airfoil::Airfoil;
use crate::errors::{DatError, LineError};
use log::{debug, info};
use ncollide2d::na::Point2;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

fn count_digits(b: &[u8]) -> usize {
    b.iter().take_while(|c| c.is_ascii_digit()).count()
}

/// Checks a whole token against the literal form `[-+]? (\d*\.\d+ | \d+\.?) ([Ee][-+]?\d+)?`
pub fn is_numeric_literal(token: &str) -> bool {
    let b = token.as_bytes();
    let mut i = 0;
    if matches!(b.first(), Some(b'+' | b'-')) {
        i += 1;
    }

    let int_digits = count_digits(&b[i..]);
    i += int_digits;

    let mut frac_digits = 0;
    if b.get(i) == Some(&b'.') {
        i += 1;
        frac_digits = count_digits(&b[i..]);
        i += frac_digits;
    }

    if int_digits == 0 && frac_digits == 0 {
        return false;
    }

    if matches!(b.get(i), Some(b'e' | b'E')) {
        i += 1;
        if matches!(b.get(i), Some(b'+' | b'-')) {
            i += 1;
        }
        let exp_digits = count_digits(&b[i..]);
        if exp_digits == 0 {
            return false;
        }
        i += exp_digits;
    }

    i == b.len()
}

/// True if the token begins with a numeric literal, whatever follows it
fn starts_numeric(token: &str) -> bool {
    let unsigned = token.strip_prefix(|c: char| c == '+' || c == '-').unwrap_or(token);
    match unsigned.as_bytes() {
        [d, ..] if d.is_ascii_digit() => true,
        [b'.', d, ..] => d.is_ascii_digit(),
        _ => false,
    }
}

/// Classifies a line as holding a coordinate pair: a complete number, whitespace, and a second
/// token which starts with a number. Headers, blank lines and comments are not coordinate lines.
pub fn is_coordinate_line(line: &str) -> bool {
    let mut tokens = line.split_whitespace();
    match (tokens.next(), tokens.next()) {
        (Some(x), Some(y)) => is_numeric_literal(x) && starts_numeric(y),
        _ => false,
    }
}

fn parse_token(token: &str) -> Result<f64, LineError> {
    token.parse::<f64>().map_err(|source| LineError::Number {
        token: token.to_string(),
        source,
    })
}

/// Parses one line of a dat file. Lines which aren't coordinate lines give `Ok(None)`, while a
/// coordinate line must split into exactly two valid floats.
pub fn parse_coordinate_line(line: &str) -> Result<Option<Point2<f64>>, LineError> {
    if !is_coordinate_line(line) {
        return Ok(None);
    }

    let tokens: Vec<&str> = line.split_whitespace().collect();
    if tokens.len() != 2 {
        return Err(LineError::TokenCount(tokens.len()));
    }

    Ok(Some(Point2::new(parse_token(tokens[0])?, parse_token(tokens[1])?)))
}

/// Reads an airfoil from any buffered source of dat text. The first non-blank line before any
/// coordinates becomes the airfoil name.
pub fn read_dat<R: BufRead>(reader: R) -> Result<Airfoil, DatError> {
    let mut airfoil = Airfoil::new();

    for (i, line) in reader.lines().enumerate() {
        let line = line.map_err(DatError::Stream)?;
        let parsed = parse_coordinate_line(&line).map_err(|source| DatError::Line {
            line: i + 1,
            text: line.clone(),
            source,
        })?;

        match parsed {
            Some(p) => airfoil.push(p),
            None if airfoil.is_empty() && airfoil.name.is_none() && !line.trim().is_empty() => {
                airfoil.name = Some(line.trim().to_string());
            }
            None => {}
        }
    }

    debug!("Foil points: {:?}", airfoil.points());
    Ok(airfoil)
}

pub fn parse_dat(text: &str) -> Result<Airfoil, DatError> {
    read_dat(text.as_bytes())
}

pub fn read_dat_file<P: AsRef<Path>>(path: P) -> Result<Airfoil, DatError> {
    let path = path.as_ref();
    let io_error = |source| DatError::Io {
        path: path.to_path_buf(),
        source,
    };

    let file = File::open(path).map_err(io_error)?;
    let airfoil = read_dat(BufReader::new(file)).map_err(|e| match e {
        DatError::Stream(source) => io_error(source),
        other => other,
    })?;

    info!("Read {} points from {}", airfoil.len(), path.display());
    Ok(airfoil)
}
