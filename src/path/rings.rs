//! Straight-line path commands and their conversion into closed rings

use crate::mesh::{Point2D, Ring};

/// A single straight-line drawing command
///
/// Each command carries its own relative/absolute flag, mirroring the
/// lower/upper case opcode pairs of SVG path data.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PathCommand {
    /// Start a new sub-path
    MoveTo { point: Point2D, relative: bool },
    /// Straight line to a point
    LineTo { point: Point2D, relative: bool },
    /// Horizontal line; y is unchanged
    HorizontalLineTo { x: f64, relative: bool },
    /// Vertical line; x is unchanged
    VerticalLineTo { y: f64, relative: bool },
    /// Close the current sub-path back to its start
    ClosePath,
}

/// Interpreter state while walking a command sequence
#[derive(Debug)]
struct RingExtractor {
    current: Point2D,
    start: Option<Point2D>,
    buffer: Vec<Point2D>,
    rings: Vec<Ring>,
}

impl RingExtractor {
    fn new() -> Self {
        Self {
            current: Point2D::origin(),
            start: None,
            buffer: Vec::new(),
            rings: Vec::new(),
        }
    }

    fn apply(&mut self, command: &PathCommand) {
        match *command {
            PathCommand::MoveTo { point, relative } => {
                let target = self.resolve(point, relative);
                if !self.buffer.is_empty() {
                    self.flush();
                }
                self.current = target;
                self.start = Some(target);
                self.buffer.push(target);
            }
            PathCommand::LineTo { point, relative } => {
                let target = self.resolve(point, relative);
                self.advance(target);
            }
            PathCommand::HorizontalLineTo { x, relative } => {
                let x = if relative { self.current.x + x } else { x };
                self.advance(Point2D::new(x, self.current.y));
            }
            PathCommand::VerticalLineTo { y, relative } => {
                let y = if relative { self.current.y + y } else { y };
                self.advance(Point2D::new(self.current.x, y));
            }
            PathCommand::ClosePath => {
                self.close_subpath();
                self.flush();
                self.start = None;
            }
        }
    }

    /// Return to the sub-path start, appending it when the pen is elsewhere
    fn close_subpath(&mut self) {
        if let Some(start) = self.start {
            if self.current != start {
                self.buffer.push(start);
                self.current = start;
            }
        }
    }

    fn resolve(&self, point: Point2D, relative: bool) -> Point2D {
        if relative {
            self.current + point.coords
        } else {
            point
        }
    }

    fn advance(&mut self, target: Point2D) {
        self.buffer.push(target);
        self.current = target;
    }

    /// Emit the buffered outline if it still has 3 points once its closing
    /// duplicate is dropped
    fn flush(&mut self) {
        let points = std::mem::take(&mut self.buffer);
        let count = points.len();
        match Ring::new(points) {
            Some(ring) => self.rings.push(ring),
            None if count > 0 => {
                log::debug!("Discarding sub-path with {} points (needs 3 distinct)", count)
            }
            None => {}
        }
    }

    fn finish(mut self) -> Vec<Ring> {
        if !self.buffer.is_empty() {
            self.flush();
        }
        self.rings
    }
}

/// Convert a command sequence into closed rings, in command order
///
/// Sub-paths left open at the end of the sequence are closed implicitly.
/// Sub-paths with fewer than 3 distinct points are discarded.
pub fn extract_rings(commands: &[PathCommand]) -> Vec<Ring> {
    let mut extractor = RingExtractor::new();
    for command in commands {
        extractor.apply(command);
    }
    extractor.finish()
}
