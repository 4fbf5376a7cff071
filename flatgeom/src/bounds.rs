use crate::Layout;

/// A per-ordinate bounding box.
///
/// Minimums are seeded at `+inf` and maximums at `-inf`, so a bounds that has
/// absorbed no coordinates reports [`is_empty`](Self::is_empty). A bounds over
/// a single coordinate is degenerate: min equals max in every ordinate.
#[derive(Debug, Clone, PartialEq)]
pub struct Bounds {
    layout: Layout,
    min: Vec<f64>,
    max: Vec<f64>,
}

impl Bounds {
    /// Creates an empty bounds for the given layout.
    pub fn new(layout: Layout) -> Self {
        let stride = layout.stride();
        Self {
            layout,
            min: vec![f64::INFINITY; stride],
            max: vec![f64::NEG_INFINITY; stride],
        }
    }

    /// Returns the bounds' layout.
    pub fn layout(&self) -> Layout {
        self.layout
    }

    /// Returns the per-ordinate minimums.
    pub fn min(&self) -> &[f64] {
        &self.min
    }

    /// Returns the per-ordinate maximums.
    pub fn max(&self) -> &[f64] {
        &self.max
    }

    /// Returns true if no coordinate has been absorbed.
    pub fn is_empty(&self) -> bool {
        self.min.iter().zip(&self.max).any(|(min, max)| min > max) || self.min.is_empty()
    }

    /// Absorbs every coordinate of a flat array laid out with `stride`
    /// ordinates per coordinate.
    ///
    /// When `stride` exceeds the bounds' own stride the extra ordinates are
    /// ignored; missing ordinates leave the corresponding min/max untouched.
    pub(crate) fn extend_flat_coords(&mut self, flat_coords: &[f64], stride: usize) {
        if stride == 0 {
            return;
        }
        for coord in flat_coords.chunks_exact(stride) {
            for (i, &ordinate) in coord.iter().take(self.min.len()).enumerate() {
                if ordinate < self.min[i] {
                    self.min[i] = ordinate;
                }
                if ordinate > self.max[i] {
                    self.max[i] = ordinate;
                }
            }
        }
    }

    /// Absorbs another bounds, ordinate by ordinate up to this bounds' own
    /// stride.
    pub(crate) fn extend_bounds(&mut self, other: &Bounds) {
        if other.is_empty() {
            return;
        }
        for i in 0..self.min.len().min(other.min.len()) {
            if other.min[i] < self.min[i] {
                self.min[i] = other.min[i];
            }
            if other.max[i] > self.max[i] {
                self.max[i] = other.max[i];
            }
        }
    }
}
