//! Arc-length lookup tables.
//!
//! [`ArcLengthTable`] is the dense table used by curved bases: it stores the cumulative
//! length of the path at evenly spaced parameter values, which lets a query invert a
//! travelled distance back into a curve parameter. [`SegmentTable`] is the sparse
//! variant for polylines, where every node is a segment boundary and no sampling is needed.
//!
//! Both tables keep up to [`INLINE_SAMPLES`] entries inline and only allocate for longer paths.

use num_traits::Float;
use tinyvec::TinyVec;

use super::error::SplineError;
use super::point::{distance, scalar, PointNorm};
use super::EPSILON;

/// Number of table entries stored without a heap allocation.
pub const INLINE_SAMPLES: usize = 32;

/// One entry of the dense table: the path has covered `length` units at parameter `time`.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct ArcSample<F> {
    pub time: F,
    pub length: F,
}

impl<F: Float> ArcSample<F> {
    fn origin() -> Self {
        ArcSample {
            time: F::zero(),
            length: F::zero(),
        }
    }
}

/// Cumulative length sampled at `time = 1/n, 2/n, ..., 1`.
///
/// Times are strictly increasing and lengths never decrease, so both columns can be
/// binary searched. The implicit first sample `(0, 0)` is not stored.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ArcLengthTable<F: Default> {
    samples: TinyVec<[ArcSample<F>; INLINE_SAMPLES]>,
}

impl<F> ArcLengthTable<F>
where
    F: Float + Default,
{
    /// Walk a curve in `steps` equal parameter increments, summing the straight-line
    /// distance between consecutive evaluations.
    pub fn sample<P, E>(steps: usize, mut eval: E) -> Result<Self, SplineError>
    where
        P: PointNorm<Scalar = F>,
        E: FnMut(F) -> Result<P, SplineError>,
    {
        let steps = steps.max(1);
        let count: F = scalar(steps);
        let mut samples = TinyVec::default();
        let mut length = F::zero();
        let mut last = eval(F::zero())?;

        for i in 1..=steps {
            // i / steps rather than i * (1 / steps) so the final sample lands exactly on 1
            let time = scalar::<F, _>(i) / count;
            let current = eval(time)?;
            length = length + distance(current, last);
            last = current;
            samples.push(ArcSample { time, length });
        }

        Ok(ArcLengthTable { samples })
    }

    pub fn samples(&self) -> &[ArcSample<F>] {
        &self.samples
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// Length of the whole sampled path.
    pub fn total_length(&self) -> F {
        self.samples.last().map_or(F::zero(), |sample| sample.length)
    }

    /// Index of the first sample that has covered at least `target`.
    fn first_reaching(&self, target: F) -> usize {
        self.samples.partition_point(|sample| sample.length < target)
    }

    /// Invert a travelled distance into a curve parameter.
    ///
    /// The two samples bracketing `target` are interpolated linearly. A bracket of zero
    /// length resolves to its start time. Returns `None` if no sample reaches `target`,
    /// which only happens past the end of the path.
    pub fn time_at_length(&self, target: F) -> Option<F> {
        let next_index = self.first_reaching(target);
        let next = *self.samples.get(next_index)?;
        let previous = match next_index {
            0 => ArcSample::origin(),
            i => self.samples[i - 1],
        };

        let span = next.length - previous.length;
        if span <= scalar(EPSILON) {
            return Some(previous.time);
        }
        let into_span = (target - previous.length) / span;
        Some(previous.time + into_span * (next.time - previous.time))
    }

    /// Rough number of markers to place between two travelled distances.
    ///
    /// Adds the rounded length at the sample reaching `from` to the rounded length
    /// at the sample just before the one reaching `to`. Either side counts as zero
    /// when it has no such sample.
    pub fn approximate_points_between(&self, from: F, to: F) -> usize {
        let next_length = self
            .samples
            .get(self.first_reaching(from))
            .map_or(F::zero(), |sample| sample.length);

        let to_index = self.first_reaching(to);
        let previous_length = if to_index == 0 || to_index == self.samples.len() {
            F::zero()
        } else {
            self.samples[to_index - 1].length
        };

        round_half_up(next_length) + round_half_up(previous_length)
    }
}

fn round_half_up<F: Float>(value: F) -> usize {
    (value + scalar(0.5)).floor().to_usize().unwrap_or(0)
}

/// Per-segment lengths of a polyline and the fraction of the path at which every
/// segment after the first begins.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SegmentTable<F: Default> {
    lengths: TinyVec<[F; INLINE_SAMPLES]>,
    starts: TinyVec<[F; INLINE_SAMPLES]>,
    total: F,
}

impl<F> SegmentTable<F>
where
    F: Float + Default,
{
    pub fn from_nodes<P>(nodes: &[P]) -> Self
    where
        P: PointNorm<Scalar = F>,
    {
        let mut lengths: TinyVec<[F; INLINE_SAMPLES]> = TinyVec::default();
        let mut total = F::zero();
        for pair in nodes.windows(2) {
            let length = distance(pair[0], pair[1]);
            lengths.push(length);
            total = total + length;
        }

        // segment 0 always starts at 0 and is not stored
        let mut starts = TinyVec::default();
        let mut travelled = F::zero();
        for length in lengths.iter().take(lengths.len().saturating_sub(1)) {
            travelled = travelled + *length;
            let start = if total > scalar(EPSILON) {
                travelled / total
            } else {
                F::zero()
            };
            starts.push(start);
        }

        SegmentTable {
            lengths,
            starts,
            total,
        }
    }

    pub fn lengths(&self) -> &[F] {
        &self.lengths
    }

    /// Start fractions of segments `1..`, in segment order.
    pub fn starts(&self) -> &[F] {
        &self.starts
    }

    pub fn total_length(&self) -> F {
        self.total
    }

    /// Find the segment containing arc-length fraction `t` and the interpolation
    /// factor within it. The active segment is the last one starting before `t`.
    pub fn locate(&self, t: F) -> (usize, F) {
        if self.lengths.is_empty() || self.total <= scalar(EPSILON) {
            return (0, F::zero());
        }

        let segment = self.starts.partition_point(|start| *start < t);
        let before: F = self.lengths[..segment]
            .iter()
            .fold(F::zero(), |sum, length| sum + *length);
        let offset = t * self.total - before;
        let length = self.lengths[segment];
        if length <= scalar(EPSILON) {
            return (segment, F::zero());
        }

        let factor = (offset / length).max(F::zero()).min(F::one());
        (segment, factor)
    }
}
