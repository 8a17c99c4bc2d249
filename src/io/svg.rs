//! SVG shape reader for `<polygon>` and straight-line `<path>` elements
//!
//! Only filled, hole-free outlines are supported. Transforms, curves and
//! styling other than the fill visibility check are ignored.

use crate::error::{MesherError, Result};
use crate::mesh::Shape;
use crate::path::{parse_point_list, rings_from_path_data};
use quick_xml::events::{BytesStart, Event};
use quick_xml::Reader;
use std::path::Path;

/// Attributes of one `<polygon>` or `<path>` element
#[derive(Debug, Default)]
struct SvgElement {
    id: Option<String>,
    geometry: String,
    fill: Option<String>,
    style: Option<String>,
}

impl SvgElement {
    fn from_start(e: &BytesStart, geometry_attr: &str) -> Self {
        Self {
            id: get_attribute_opt(e, "id").filter(|id| !id.is_empty()),
            geometry: get_attribute_opt(e, geometry_attr)
                .map(|value| value.trim().to_string())
                .unwrap_or_default(),
            fill: get_attribute_opt(e, "fill"),
            style: get_attribute_opt(e, "style"),
        }
    }

    fn name(&self, prefix: &str, counter: usize) -> String {
        match &self.id {
            Some(id) => id.clone(),
            None => format!("{}_{}", prefix, counter),
        }
    }

    /// True for `fill="none"` or `fill:none` inside the style attribute
    fn is_unfilled(&self) -> bool {
        let fill_none = self
            .fill
            .as_deref()
            .map(|fill| fill.trim().eq_ignore_ascii_case("none"))
            .unwrap_or(false);

        let style_none = self
            .style
            .as_deref()
            .map(|style| {
                style
                    .chars()
                    .filter(|c| !c.is_whitespace())
                    .collect::<String>()
                    .to_ascii_lowercase()
                    .contains("fill:none")
            })
            .unwrap_or(false);

        fill_none || style_none
    }
}

/// Read shapes from an SVG file
pub fn read_svg_shapes<P: AsRef<Path>>(path: P, skip_unfilled: bool) -> Result<Vec<Shape>> {
    let text = std::fs::read_to_string(path.as_ref())?;
    log::info!("Reading SVG shapes from {:?}", path.as_ref());
    parse_svg_shapes(&text, skip_unfilled)
}

/// Extract shapes from SVG markup
///
/// All polygons come first, then all paths, each in document order.
/// Elements without an `id` are named `poly_<k>` / `path_<k>`, where `k`
/// counts the non-empty, filled polygons and paths visited so far. Every
/// ring of a path after the first is named `<name>_<j>`.
pub fn parse_svg_shapes(text: &str, skip_unfilled: bool) -> Result<Vec<Shape>> {
    let (polygons, paths) = collect_elements(text)?;

    let mut shapes = Vec::new();
    let mut counter = 0;

    for element in &polygons {
        if element.geometry.is_empty() {
            continue;
        }
        if skip_unfilled && element.is_unfilled() {
            log::debug!("Skipping unfilled polygon {:?}", element.id);
            continue;
        }
        let name = element.name("poly", counter);
        counter += 1;

        match parse_point_list(&element.geometry).map_err(|e| e.in_shape(&name))? {
            Some(ring) => shapes.push(Shape::new(name, ring)),
            None => log::debug!("Skipping polygon '{}' with fewer than 3 points", name),
        }
    }

    for element in &paths {
        if element.geometry.is_empty() {
            continue;
        }
        if skip_unfilled && element.is_unfilled() {
            log::debug!("Skipping unfilled path {:?}", element.id);
            continue;
        }
        let base = element.name("path", counter);
        counter += 1;

        let rings = rings_from_path_data(&element.geometry).map_err(|e| e.in_shape(&base))?;
        for (j, ring) in rings.into_iter().enumerate() {
            let name = if j == 0 {
                base.clone()
            } else {
                format!("{}_{}", base, j)
            };
            shapes.push(Shape::new(name, ring));
        }
    }

    if shapes.is_empty() {
        return Err(MesherError::EmptyShapeCollection);
    }

    log::info!("Found {} shapes", shapes.len());
    Ok(shapes)
}

/// Walk the whole document once, gathering polygons and paths separately
fn collect_elements(text: &str) -> Result<(Vec<SvgElement>, Vec<SvgElement>)> {
    let mut reader = Reader::from_str(text);
    reader.config_mut().trim_text(true);

    let mut polygons = Vec::new();
    let mut paths = Vec::new();
    let mut buf = Vec::new();

    loop {
        match reader.read_event_into(&mut buf) {
            Ok(Event::Start(ref e)) | Ok(Event::Empty(ref e)) => {
                // Namespace prefixes (`svg:path`) are ignored
                match e.local_name().as_ref() {
                    b"polygon" => polygons.push(SvgElement::from_start(e, "points")),
                    b"path" => paths.push(SvgElement::from_start(e, "d")),
                    _ => {}
                }
            }
            Ok(Event::Eof) => break,
            Ok(_) => {}
            Err(e) => {
                return Err(MesherError::SvgError(format!(
                    "Failed to parse SVG at offset {}: {}",
                    reader.buffer_position(),
                    e
                )))
            }
        }
        buf.clear();
    }

    Ok((polygons, paths))
}

/// Get an optional attribute value with entity and character references decoded
fn get_attribute_opt(e: &BytesStart, name: &str) -> Option<String> {
    e.attributes()
        .flatten()
        .find(|attr| attr.key.as_ref() == name.as_bytes())
        .and_then(|attr| attr.unescape_value().ok().map(|value| value.into_owned()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mesh::Point2D;

    const LEAF_SVG: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<svg xmlns="http://www.w3.org/2000/svg" width="100" height="100">
  <g id="layer1">
    <polygon id="blade" points="0,0 10,0 10,10 0,10 0,0"/>
    <polygon points="20,0 30,0 25,8"/>
    <path id="vein" d="M 0 20 H 10 V 30 H 0 Z M 20 20 l 5 0 l 0 5 z"/>
    <path d="M 0 40 L 5 40 L 5 45 Z" style="fill: none; stroke: #000"/>
    <path d="M 0 50 L 5 50 L 5 55 Z"/>
  </g>
</svg>"#;

    #[test]
    fn test_parse_polygons_and_paths() {
        let shapes = parse_svg_shapes(LEAF_SVG, true).unwrap();
        let names: Vec<_> = shapes.iter().map(|s| s.name.as_str()).collect();

        assert_eq!(names, vec!["blade", "poly_1", "vein", "vein_1", "path_3"]);
        assert_eq!(shapes[0].vertices.len(), 4);
        assert_eq!(shapes[3].vertices.points()[1], Point2D::new(25.0, 20.0));
    }

    #[test]
    fn test_keep_unfilled_when_requested() {
        let shapes = parse_svg_shapes(LEAF_SVG, false).unwrap();

        assert_eq!(shapes.len(), 6);
        assert_eq!(shapes[4].name, "path_3");
        assert_eq!(shapes[5].name, "path_4");
    }

    #[test]
    fn test_fill_attribute_none() {
        let svg = r#"<svg xmlns="http://www.w3.org/2000/svg">
            <path fill="None" d="M0 0 L1 0 L1 1 Z"/>
            <path d="M0 0 L2 0 L2 2 Z"/>
        </svg>"#;
        let shapes = parse_svg_shapes(svg, true).unwrap();

        assert_eq!(shapes.len(), 1);
        assert_eq!(shapes[0].name, "path_0");
    }

    #[test]
    fn test_malformed_polygon_names_shape() {
        let svg = r#"<svg><polygon id="bad" points="0,0 10,0 5"/></svg>"#;
        let err = parse_svg_shapes(svg, true).unwrap_err();

        match err {
            MesherError::InvalidShape { shape, source } => {
                assert_eq!(shape, "bad");
                assert!(matches!(*source, MesherError::MalformedPointList(_)));
            }
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[test]
    fn test_malformed_path_names_shape() {
        let svg = r#"<svg><path id="curvy" d="M0 0 C 1 1 2 2 3 3 Z"/></svg>"#;
        let err = parse_svg_shapes(svg, true).unwrap_err();

        assert!(err.to_string().contains("curvy"));
    }

    #[test]
    fn test_escaped_attribute_values() {
        let svg = r#"<svg>
            <polygon id="a&amp;b" points="0,0&#10;10,0&#x9;10,10"/>
            <path d="M0 20&#13;&#10;L10 20 L10 30 Z"/>
        </svg>"#;
        let shapes = parse_svg_shapes(svg, true).unwrap();

        assert_eq!(shapes.len(), 2);
        assert_eq!(shapes[0].name, "a&b");
        assert_eq!(shapes[0].vertices.points()[1], Point2D::new(10.0, 0.0));
        assert_eq!(shapes[1].vertices.len(), 3);
    }

    #[test]
    fn test_no_shapes_is_error() {
        let svg = r#"<svg><rect width="10" height="10"/><polygon points=""/></svg>"#;
        assert!(matches!(
            parse_svg_shapes(svg, true),
            Err(MesherError::EmptyShapeCollection)
        ));
    }

    #[test]
    fn test_invalid_xml() {
        assert!(matches!(
            parse_svg_shapes("<svg><polygon", true),
            Err(MesherError::SvgError(_))
        ));
    }
}
