use crate::problem::index::ProblemIndex;
use crate::types::*;
use crate::utils::Matrix2;
use crate::{Error, Result};
use rand::{Rng, SeedableRng};
use rand_xoshiro::Xoshiro256PlusPlus;
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

/// Largest accepted coordinate magnitude. Distances then stay below 3e12, so
/// tour lengths of millions of points still fit in a `Distance`.
pub const MAX_COORDINATE: f64 = 1e12;

/// A set of points together with their precomputed pairwise distances.
#[derive(Debug, Clone)]
pub struct Problem {
    /// Points indexed by vertex, in ascending identifier order.
    points: Vec<Point>,
    /// Rounded distance between every pair of vertices.
    distances: Matrix2<Distance>,
    rounding: Rounding,
    index: ProblemIndex,
}

impl Problem {
    /// Builds a problem from points in any order.
    /// A repeated identifier replaces the earlier point with that identifier.
    pub fn from_points(points: impl IntoIterator<Item = Point>, rounding: Rounding) -> Self {
        let mut by_id: BTreeMap<PointId, Point> = BTreeMap::new();
        for point in points {
            if let Some(previous) = by_id.insert(point.id, point) {
                log::warn!(
                    "duplicate point id {}: ({}, {}) replaced by ({}, {})",
                    point.id,
                    previous.x,
                    previous.y,
                    point.x,
                    point.y
                );
            }
        }

        let points: Vec<Point> = by_id.into_values().collect();
        let distances = Matrix2::square_from_fn(points.len(), |a, b| {
            points[a].distance_with(&points[b], rounding)
        });
        let index = ProblemIndex::new(points.iter().map(|p| p.id).collect());

        log::debug!("problem: n={} rounding={:?}", points.len(), rounding);

        Problem {
            points,
            distances,
            rounding,
            index,
        }
    }

    /// Parses `id x y` records, one per line.
    /// Blank lines and lines starting with `#` are skipped.
    pub fn parse(text: &str, rounding: Rounding) -> Result<Self> {
        let mut points = Vec::new();

        for (line_no, line) in text.lines().enumerate() {
            let trimmed = line.trim();
            if trimmed.is_empty() || trimmed.starts_with('#') {
                continue;
            }
            points.push(parse_record(trimmed, line_no + 1)?);
        }

        Ok(Self::from_points(points, rounding))
    }

    /// Loads a point file, see [`Problem::parse`].
    pub fn load(path: impl AsRef<Path>, rounding: Rounding) -> Result<Self> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|e| {
            Error::Io(std::io::Error::new(
                e.kind(),
                format!("failed to read {}: {e}", path.display()),
            ))
        })?;
        Self::parse(&text, rounding)
    }

    /// Generates `n` points with integer coordinates uniformly drawn from `0..extent`.
    /// The same seed always yields the same instance.
    pub fn random(n: usize, extent: u32, seed: u64, rounding: Rounding) -> Result<Self> {
        if extent == 0 {
            return Err(Error::invalid_input("random extent must be positive"));
        }

        let mut rng = Xoshiro256PlusPlus::seed_from_u64(seed);
        let mut points = Vec::with_capacity(n);
        for i in 0..n {
            let id = PointId::try_from(i)
                .map_err(|_| Error::invalid_input(format!("too many points: {n}")))?;
            let x = rng.random_range(0..extent) as f64;
            let y = rng.random_range(0..extent) as f64;
            points.push(Point::new(id, x, y));
        }

        Ok(Self::from_points(points, rounding))
    }

    /// Number of distinct points.
    #[inline(always)]
    pub fn n(&self) -> usize {
        self.points.len()
    }

    #[inline(always)]
    pub fn point(&self, vertex: Vertex) -> &Point {
        &self.points[vertex]
    }

    pub fn points(&self) -> &[Point] {
        &self.points
    }

    /// Identifier of the given vertex.
    #[inline(always)]
    pub fn id(&self, vertex: Vertex) -> PointId {
        self.index.id(vertex)
    }

    /// Vertex holding the given identifier, if any.
    pub fn vertex(&self, id: PointId) -> Option<Vertex> {
        self.index.vertex(id)
    }

    /// All identifiers in vertex order.
    pub fn ids(&self) -> &[PointId] {
        self.index.ids()
    }

    /// Rounded Euclidean distance between two vertices.
    #[inline(always)]
    pub fn distance(&self, a: Vertex, b: Vertex) -> Distance {
        *self.distances.get(a, b)
    }

    /// Fails with the first point whose coordinates are not finite or exceed
    /// [`MAX_COORDINATE`] in magnitude.
    pub fn check_coordinates(&self) -> Result<()> {
        match self
            .points
            .iter()
            .find(|p| !coordinate_in_range(p.x) || !coordinate_in_range(p.y))
        {
            Some(p) => Err(Error::invalid_input(format!(
                "point {}: coordinates ({}, {}) outside +-{MAX_COORDINATE:e}",
                p.id, p.x, p.y
            ))),
            None => Ok(()),
        }
    }

    pub fn distances(&self) -> &Matrix2<Distance> {
        &self.distances
    }

    pub fn rounding(&self) -> Rounding {
        self.rounding
    }
}

fn parse_record(line: &str, line_no: usize) -> Result<Point> {
    let parts: Vec<&str> = line.split_whitespace().collect();
    if parts.len() != 3 {
        return Err(Error::invalid_input(format!(
            "line {line_no}: expected `id x y`, found {} fields",
            parts.len()
        )));
    }

    let id: PointId = parts[0]
        .parse()
        .map_err(|e| Error::invalid_input(format!("line {line_no}: bad id {:?}: {e}", parts[0])))?;
    let x = parse_coordinate(parts[1], "x", line_no)?;
    let y = parse_coordinate(parts[2], "y", line_no)?;

    Ok(Point::new(id, x, y))
}

fn parse_coordinate(raw: &str, axis: &str, line_no: usize) -> Result<f64> {
    let value: f64 = raw
        .parse()
        .map_err(|e| Error::invalid_input(format!("line {line_no}: bad {axis} {raw:?}: {e}")))?;
    if !value.is_finite() {
        return Err(Error::invalid_input(format!(
            "line {line_no}: {axis} must be finite, got {raw:?}"
        )));
    }
    if !coordinate_in_range(value) {
        return Err(Error::invalid_input(format!(
            "line {line_no}: {axis} {raw:?} exceeds +-{MAX_COORDINATE:e}"
        )));
    }
    Ok(value)
}

fn coordinate_in_range(value: f64) -> bool {
    value.is_finite() && value.abs() <= MAX_COORDINATE
}
