//! Flat point-list input (SVG `<polygon points="...">`)

use crate::error::{MesherError, Result};
use crate::mesh::{Point2D, Ring};

/// Parse a literal coordinate list such as `"0,0 10,0 10,10"`
///
/// Tokens are split on whitespace and commas and must form at least three
/// coordinate pairs of finite numbers. A trailing duplicate of the first point is dropped.
/// Returns `Ok(None)` when fewer than 3 distinct points remain.
pub fn parse_point_list(points: &str) -> Result<Option<Ring>> {
    let values = points
        .split(|c: char| c.is_whitespace() || c == ',')
        .filter(|token| !token.is_empty())
        .map(|token| match token.parse::<f64>() {
            Ok(value) if value.is_finite() => Ok(value),
            _ => Err(MesherError::MalformedPointList(format!(
                "'{}' is not a finite number",
                token
            ))),
        })
        .collect::<Result<Vec<f64>>>()?;

    if values.len() < 6 || values.len() % 2 != 0 {
        return Err(MesherError::MalformedPointList(format!(
            "expected an even count of at least 6 numbers, got {}",
            values.len()
        )));
    }

    let vertices: Vec<Point2D> = values
        .chunks_exact(2)
        .map(|pair| Point2D::new(pair[0], pair[1]))
        .collect();

    let ring = Ring::new(vertices);
    if ring.is_none() {
        log::debug!("Point list '{}' has fewer than 3 distinct points", points);
    }

    Ok(ring)
}
