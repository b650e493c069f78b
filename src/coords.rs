use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// √3 to full f64 precision. Pixel math shares this constant so adjacent
/// tiles land flush against each other with no visible seams.
pub const SQRT3: f64 = 1.732_050_807_568_877_2;

/// Cube coordinate of one hex tile. Assigned by the server; `x + y + z == 0`
/// always holds for well-formed input.
///
/// On the wire this is the array `[x, y, z]`, not a struct.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CubeCoord {
    pub x: i32,
    pub y: i32,
    pub z: i32,
}

impl CubeCoord {
    pub fn new(x: i32, y: i32, z: i32) -> Self {
        debug_assert!(x + y + z == 0, "cube coordinates must sum to zero");
        Self { x, y, z }
    }
}

impl Default for CubeCoord {
    fn default() -> Self {
        CubeCoord::new(0, 0, 0)
    }
}

impl Serialize for CubeCoord {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        (self.x, self.y, self.z).serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for CubeCoord {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let (x, y, z) = <(i32, i32, i32)>::deserialize(deserializer)?;
        if x + y + z != 0 {
            return Err(D::Error::custom(format!(
                "cube coordinate [{x}, {y}, {z}] does not sum to zero"
            )));
        }
        Ok(CubeCoord { x, y, z })
    }
}

/// Axial projection of a cube coordinate, used only as the intermediate step
/// of the pixel transform.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Axial {
    pub q: i32,
    pub r: i32,
}

pub fn cube_to_axial(cube: CubeCoord) -> Axial {
    Axial {
        q: cube.x,
        r: cube.z,
    }
}

/// Screen position of a tile's center, given the hex size and the pixel
/// position the origin tile should occupy.
///
/// Standard pointy-top axial-to-pixel transform from
/// https://www.redblobgames.com/grids/hexagons/.
pub fn tile_pixel_vector(
    coordinate: CubeCoord,
    size: f64,
    center_x: f64,
    center_y: f64,
) -> (f64, f64) {
    let hex = cube_to_axial(coordinate);
    let (q, r) = (hex.q as f64, hex.r as f64);
    (
        center_x + size * (SQRT3 * q + SQRT3 / 2.0 * r),
        center_y + size * (3.0 / 2.0) * r,
    )
}
