use std::collections::HashMap;
use std::fmt;

use once_cell::sync::Lazy;

use crate::coords::SQRT3;
use crate::types::Direction;

/// Geometry failures are fatal to the single element being laid out and to
/// nothing else; the render boundary logs and skips the element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum LayoutError {
    #[error("unknown direction {0}")]
    UnknownDirection(Direction),
}

/// Offsets of the six vertex directions as fractions of hex width and height,
/// where `w = √3 · size` and `h = 2 · size`.
static NODE_DELTA_FACTORS: Lazy<HashMap<Direction, (f64, f64)>> = Lazy::new(|| {
    use Direction::*;
    HashMap::from([
        (North, (0.0, -0.5)),
        (NorthEast, (0.5, -0.25)),
        (SouthEast, (0.5, 0.25)),
        (South, (0.0, 0.5)),
        (SouthWest, (-0.5, 0.25)),
        (NorthWest, (-0.5, -0.25)),
    ])
});

/// Rotation (clockwise from vertical, degrees) that carries a road glyph onto
/// each of the six edge midpoints.
static EDGE_ROTATIONS: Lazy<HashMap<Direction, u16>> = Lazy::new(|| {
    use Direction::*;
    HashMap::from([
        (NorthEast, 30),
        (East, 90),
        (SouthEast, 150),
        (SouthWest, 210),
        (West, 270),
        (NorthWest, 330),
    ])
});

/// Pixel offset from a tile's center to one of its six vertices.
/// `East`/`West` name edges, not vertices, and are rejected.
pub fn node_delta(direction: Direction, width: f64, height: f64) -> Result<(f64, f64), LayoutError> {
    let (fw, fh) = NODE_DELTA_FACTORS
        .get(&direction)
        .ok_or(LayoutError::UnknownDirection(direction))?;
    Ok((fw * width, fh * height))
}

/// Placement of a road glyph on one of a tile's six edges: rotate around the
/// tile center, then push outward to the edge midpoint.
///
/// Displays as the equivalent CSS `transform` value.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EdgeTransform {
    pub rotation_deg: u16,
    pub offset: f64,
}

/// Fraction of the hex size between a tile's center and its edge midpoint.
const EDGE_DISTANCE_FACTOR: f64 = 0.865;

pub fn edge_transform(direction: Direction, size: f64) -> Result<EdgeTransform, LayoutError> {
    let rotation_deg = *EDGE_ROTATIONS
        .get(&direction)
        .ok_or(LayoutError::UnknownDirection(direction))?;
    Ok(EdgeTransform {
        rotation_deg,
        offset: size * EDGE_DISTANCE_FACTOR,
    })
}

impl fmt::Display for EdgeTransform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "translateX(-50%) translateY(-50%) rotate({}deg) translateY({}px)",
            self.rotation_deg, -self.offset
        )
    }
}

/// Largest hex size that fits a board of `rings` concentric rings (land plus
/// the water/port border) into the given container, or `None` while the
/// container has no measured extent yet.
///
/// Uses `W = √3 · size` and `H = 2 · size`; the board is
/// `levels · (3h/4) + h/4` tall and `levels` hexes wide, `levels = 2 · rings`.
pub fn compute_hex_size(width: f64, height: f64, rings: u32) -> Option<f64> {
    if width <= 0.0 || height <= 0.0 {
        return None;
    }
    let levels = (2 * rings) as f64;
    let height_limited = 4.0 * height / (3.0 * levels + 1.0) / 2.0;
    let corresponding_width = levels * SQRT3 * height_limited;
    if corresponding_width < width {
        Some(height_limited)
    } else {
        Some(width / levels / SQRT3)
    }
}
