//! Void geometry.
//!
//! All positions are in X root-window pixels.  A [`VoidRegion`] covers the
//! pixel cells `x..x + width` by `y..y + height`; a [`CursorSample`] is
//! expressed relative to the void's own top-left corner.

use thiserror::Error;

/// Errors raised when a void rectangle violates its invariants.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum GeometryError {
    /// The top-left corner lies left of or above the root window origin.
    #[error("negative coordinate: x={x}, y={y}")]
    NegativeCoordinate { x: i32, y: i32 },

    /// Width or height is zero or negative.
    #[error("zero or negative size: width={width}, height={height}")]
    EmptyDimension { width: i32, height: i32 },

    /// The far edge (`x + width` or `y + height`) does not fit in an `i32`.
    #[error("void exceeds the coordinate range: x={x}, y={y}, width={width}, height={height}")]
    OutOfRange {
        x: i32,
        y: i32,
        width: i32,
        height: i32,
    },
}

/// The forbidden rectangle on the virtual screen.
///
/// Constructed once at startup through [`VoidRegion::new`], which enforces
/// `x >= 0`, `y >= 0`, `width >= 1` and `height >= 1`, and that the far
/// edges `x + width` and `y + height` are representable as `i32`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VoidRegion {
    x: i32,
    y: i32,
    width: u32,
    height: u32,
}

impl VoidRegion {
    /// Creates a void rectangle after validating its corner and size.
    ///
    /// # Errors
    ///
    /// Returns [`GeometryError::NegativeCoordinate`] if `x` or `y` is negative,
    /// [`GeometryError::EmptyDimension`] if `width` or `height` is below 1,
    /// or [`GeometryError::OutOfRange`] if a far edge overflows `i32`.
    pub fn new(x: i32, y: i32, width: i32, height: i32) -> Result<Self, GeometryError> {
        if x < 0 || y < 0 {
            return Err(GeometryError::NegativeCoordinate { x, y });
        }
        if width < 1 || height < 1 {
            return Err(GeometryError::EmptyDimension { width, height });
        }
        if x.checked_add(width).is_none() || y.checked_add(height).is_none() {
            return Err(GeometryError::OutOfRange {
                x,
                y,
                width,
                height,
            });
        }
        Ok(Self {
            x,
            y,
            width: width as u32,
            height: height as u32,
        })
    }

    /// X coordinate of the top-left corner.
    pub fn x(&self) -> i32 {
        self.x
    }

    /// Y coordinate of the top-left corner.
    pub fn y(&self) -> i32 {
        self.y
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// Returns the rightmost X coordinate (exclusive).
    ///
    /// [`VoidRegion::new`] guarantees the sum fits in an `i32`.
    pub fn right(&self) -> i32 {
        self.x + self.width as i32
    }

    /// Returns the bottommost Y coordinate (exclusive).
    pub fn bottom(&self) -> i32 {
        self.y + self.height as i32
    }

    /// Returns `true` if the void-local sample lies on a pixel the void covers.
    pub fn contains_local(&self, sample: CursorSample) -> bool {
        sample.x >= 0
            && sample.x < self.width as i32
            && sample.y >= 0
            && sample.y < self.height as i32
    }

    /// Converts a root-window position into void-local coordinates.
    pub fn to_local(&self, abs_x: i32, abs_y: i32) -> CursorSample {
        CursorSample {
            x: abs_x.saturating_sub(self.x),
            y: abs_y.saturating_sub(self.y),
        }
    }
}

/// Size of the whole virtual desktop (the X root window).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScreenBounds {
    pub width: u32,
    pub height: u32,
}

impl ScreenBounds {
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// Returns `true` if the void lies entirely on the virtual screen.
    pub fn contains_region(&self, region: &VoidRegion) -> bool {
        i64::from(region.right()) <= i64::from(self.width)
            && i64::from(region.bottom()) <= i64::from(self.height)
    }
}

/// Cursor position relative to the void's top-left corner.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CursorSample {
    pub x: i32,
    pub y: i32,
}

impl CursorSample {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

/// Offset to add to the current pointer position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Displacement {
    pub dx: i32,
    pub dy: i32,
}

impl Displacement {
    pub fn new(dx: i32, dy: i32) -> Self {
        Self { dx, dy }
    }

    /// Returns where `sample` ends up after this displacement is applied.
    pub fn applied_to(&self, sample: CursorSample) -> CursorSample {
        CursorSample {
            x: sample.x + self.dx,
            y: sample.y + self.dy,
        }
    }
}

/// The four edges of the void rectangle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Edge {
    Top,
    Bottom,
    Left,
    Right,
}

impl Edge {
    /// Returns the displacement that carries `sample` just past this edge.
    ///
    /// Bottom and Right land on the first pixel after the void
    /// (`height` / `width` in local coordinates); Top and Left land on
    /// local `-1`.  The other axis is left untouched.
    pub fn displacement(self, region: &VoidRegion, sample: CursorSample) -> Displacement {
        match self {
            Edge::Bottom => Displacement::new(0, region.height as i32 - sample.y),
            Edge::Top => Displacement::new(0, -sample.y - 1),
            Edge::Left => Displacement::new(-sample.x - 1, 0),
            Edge::Right => Displacement::new(region.width as i32 - sample.x, 0),
        }
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
