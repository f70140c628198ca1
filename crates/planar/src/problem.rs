//! Validated search input: source points, above/below partition, via points, target.
//!
//! The search itself assumes a well-formed `Problem`; every precondition of the
//! caller boundary (lengths, index ranges, finiteness) is checked here once.

use std::fmt;

use crate::geom::Point;

/// Which index group an offending entry came from.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Group {
    Above,
    Below,
}

impl fmt::Display for Group {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Group::Above => write!(f, "above"),
            Group::Below => write!(f, "below"),
        }
    }
}

/// Precondition violations reported at the boundary.
#[derive(Clone, Debug, PartialEq)]
pub enum ProblemError {
    /// Paired coordinate arrays disagree in length.
    LengthMismatch {
        what: &'static str,
        expected: usize,
        got: usize,
    },
    /// An index does not address a source point.
    IndexOutOfRange {
        group: Group,
        position: usize,
        index: i64,
        len: usize,
    },
    /// A source point appears twice across the above/below groups.
    DuplicateIndex { index: usize },
    /// A coordinate is NaN or infinite.
    NonFinite { what: &'static str, position: usize },
    /// One via point is required per above-group source.
    ViaCountMismatch { above: usize, vias: usize },
}

impl fmt::Display for ProblemError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProblemError::LengthMismatch {
                what,
                expected,
                got,
            } => write!(f, "{what}: expected length {expected}, got {got}"),
            ProblemError::IndexOutOfRange {
                group,
                position,
                index,
                len,
            } => write!(
                f,
                "{group}[{position}] = {index} is outside the source range [0, {len})"
            ),
            ProblemError::DuplicateIndex { index } => {
                write!(f, "source {index} is assigned to more than one route")
            }
            ProblemError::NonFinite { what, position } => {
                write!(f, "{what}[{position}] is not a finite number")
            }
            ProblemError::ViaCountMismatch { above, vias } => write!(
                f,
                "need exactly one via point per above source ({above}), got {vias}"
            ),
        }
    }
}

impl std::error::Error for ProblemError {}

/// Search input. Construct through `Problem::new` or `Problem::from_arrays`.
#[derive(Clone, Debug)]
pub struct Problem {
    sources: Vec<Point>,
    above: Vec<usize>,
    below: Vec<usize>,
    vias: Vec<Point>,
    target: Point,
}

impl Problem {
    /// Validate and build from typed points and group indices.
    pub fn new(
        sources: Vec<Point>,
        above: Vec<usize>,
        below: Vec<usize>,
        vias: Vec<Point>,
        target: Point,
    ) -> Result<Self, ProblemError> {
        check_finite("sources", &sources)?;
        check_finite("vias", &vias)?;
        check_finite("target", std::slice::from_ref(&target))?;
        if vias.len() != above.len() {
            return Err(ProblemError::ViaCountMismatch {
                above: above.len(),
                vias: vias.len(),
            });
        }
        let n = sources.len();
        let mut seen = vec![false; n];
        for (group, indices) in [(Group::Above, &above), (Group::Below, &below)] {
            for (position, &index) in indices.iter().enumerate() {
                if index >= n {
                    return Err(ProblemError::IndexOutOfRange {
                        group,
                        position,
                        index: i64::try_from(index).unwrap_or(i64::MAX),
                        len: n,
                    });
                }
                if std::mem::replace(&mut seen[index], true) {
                    return Err(ProblemError::DuplicateIndex { index });
                }
            }
        }
        Ok(Self {
            sources,
            above,
            below,
            vias,
            target,
        })
    }

    /// Build from the flat array layout used at the foreign-call boundary.
    #[allow(clippy::too_many_arguments)]
    pub fn from_arrays(
        sources_x: &[f64],
        sources_y: &[f64],
        above: &[i64],
        below: &[i64],
        vias_x: &[f64],
        vias_y: &[f64],
        target: (f64, f64),
    ) -> Result<Self, ProblemError> {
        let sources = zip_points("sources_y", sources_x, sources_y)?;
        let vias = zip_points("vias_y", vias_x, vias_y)?;
        let n = sources.len();
        let above = to_indices(Group::Above, above, n)?;
        let below = to_indices(Group::Below, below, n)?;
        Self::new(
            sources,
            above,
            below,
            vias,
            Point::new(target.0, target.1),
        )
    }

    #[inline]
    pub fn sources(&self) -> &[Point] {
        &self.sources
    }
    #[inline]
    pub fn above(&self) -> &[usize] {
        &self.above
    }
    #[inline]
    pub fn below(&self) -> &[usize] {
        &self.below
    }
    #[inline]
    pub fn vias(&self) -> &[Point] {
        &self.vias
    }
    #[inline]
    pub fn target(&self) -> Point {
        self.target
    }
    #[inline]
    pub fn n_above(&self) -> usize {
        self.above.len()
    }
    #[inline]
    pub fn n_below(&self) -> usize {
        self.below.len()
    }
}

fn check_finite(what: &'static str, points: &[Point]) -> Result<(), ProblemError> {
    match points
        .iter()
        .position(|p| !(p.x.is_finite() && p.y.is_finite()))
    {
        Some(position) => Err(ProblemError::NonFinite { what, position }),
        None => Ok(()),
    }
}

fn zip_points(what: &'static str, xs: &[f64], ys: &[f64]) -> Result<Vec<Point>, ProblemError> {
    if xs.len() != ys.len() {
        return Err(ProblemError::LengthMismatch {
            what,
            expected: xs.len(),
            got: ys.len(),
        });
    }
    Ok(xs
        .iter()
        .zip(ys)
        .map(|(&x, &y)| Point::new(x, y))
        .collect())
}

fn to_indices(group: Group, raw: &[i64], len: usize) -> Result<Vec<usize>, ProblemError> {
    raw.iter()
        .enumerate()
        .map(|(position, &index)| {
            usize::try_from(index)
                .ok()
                .filter(|&i| i < len)
                .ok_or(ProblemError::IndexOutOfRange {
                    group,
                    position,
                    index,
                    len,
                })
        })
        .collect()
}
