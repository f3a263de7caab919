/// Identifier of a point as given by the input.
pub type PointId = u32;
/// Dense vertex index, assigned in ascending `PointId` order.
pub type Vertex = usize;
/// Rounded Euclidean distance.
pub type Distance = u64;

/// How a real-valued Euclidean distance is turned into an integer.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum Rounding {
    /// Round to nearest, halves away from zero.
    #[default]
    Nearest,
    /// Drop the fractional part. Legacy behaviour, kept for comparison runs.
    Truncate,
}

impl Rounding {
    #[inline(always)]
    pub fn apply(self, value: f64) -> Distance {
        match self {
            Rounding::Nearest => value.round() as Distance,
            Rounding::Truncate => value.trunc() as Distance,
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Point {
    pub id: PointId,
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(id: PointId, x: f64, y: f64) -> Self {
        Point { id, x, y }
    }

    /// Euclidean distance to `other`, rounded to nearest.
    #[inline(always)]
    pub fn distance(&self, other: &Point) -> Distance {
        self.distance_with(other, Rounding::Nearest)
    }

    #[inline(always)]
    pub fn distance_with(&self, other: &Point, rounding: Rounding) -> Distance {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        rounding.apply((dx * dx + dy * dy).sqrt())
    }
}
