use serde::{Deserialize, Serialize};

/// Per-dimension minimum and maximum of a coordinate space.
///
/// Both vectors always have the same length; an empty value means "not yet
/// computed".
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct DimensionRanges {
    /// Smallest coordinate seen along each dimension.
    pub min: Vec<f64>,
    /// Largest coordinate seen along each dimension.
    pub max: Vec<f64>,
}

impl DimensionRanges {
    /// Compute ranges column-wise over a coordinate matrix.
    ///
    /// Rows are expected to have exactly `dimensions` entries.
    #[must_use]
    pub fn from_coordinates(
        coordinates: &[Vec<f64>],
        dimensions: usize,
    ) -> Self {
        let mut min = vec![f64::INFINITY; dimensions];
        let mut max = vec![f64::NEG_INFINITY; dimensions];
        for row in coordinates {
            for (i, &value) in row.iter().enumerate().take(dimensions) {
                min[i] = min[i].min(value);
                max[i] = max[i].max(value);
            }
        }
        Self { min, max }
    }

    /// Number of dimensions covered.
    #[must_use]
    pub fn len(&self) -> usize {
        self.max.len()
    }

    /// Whether no range data is present.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.max.is_empty()
    }

    /// Drop all range data.
    pub fn clear(&mut self) {
        self.min.clear();
        self.max.clear();
    }

    /// Whether both ends of every range in `other` lie within `self`.
    ///
    /// Returns `false` when `other` covers dimensions `self` does not.
    #[must_use]
    pub fn encloses(&self, other: &Self) -> bool {
        if other.min.len() > self.min.len() || other.max.len() > self.max.len()
        {
            return false;
        }
        let inside = |lo: f64, hi: f64, v: f64| lo <= v && v <= hi;
        other.min.iter().zip(&other.max).enumerate().all(|(i, (&lmin, &lmax))| {
            let (gmin, gmax) = (self.min[i], self.max[i]);
            inside(gmin, gmax, lmin) && inside(gmin, gmax, lmax)
        })
    }

    /// Widen `self` elementwise so it also spans `other`.
    pub fn union_with(&mut self, other: &Self) {
        for (global, &local) in self.max.iter_mut().zip(&other.max) {
            if local > *global {
                *global = local;
            }
        }
        for (global, &local) in self.min.iter_mut().zip(&other.min) {
            if local < *global {
                *global = local;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ranges(min: &[f64], max: &[f64]) -> DimensionRanges {
        DimensionRanges {
            min: min.to_vec(),
            max: max.to_vec(),
        }
    }

    #[test]
    fn columns_are_reduced_independently() {
        let coords = vec![vec![1.0, -2.0], vec![-3.0, 4.0], vec![0.5, 0.0]];
        let r = DimensionRanges::from_coordinates(&coords, 2);
        assert_eq!(r, ranges(&[-3.0, -2.0], &[1.0, 4.0]));
    }

    #[test]
    fn encloses_checks_both_ends() {
        let global = ranges(&[-1.0, -1.0], &[1.0, 1.0]);
        assert!(global.encloses(&ranges(&[-0.5, 0.0], &[0.5, 1.0])));
        assert!(!global.encloses(&ranges(&[-1.5, 0.0], &[0.5, 1.0])));
        assert!(!global.encloses(&ranges(&[-0.5, 0.0], &[0.5, 1.2])));
    }

    #[test]
    fn empty_encloses_nothing_with_data() {
        let empty = DimensionRanges::default();
        assert!(!empty.encloses(&ranges(&[0.0], &[1.0])));
        assert!(empty.encloses(&DimensionRanges::default()));
    }

    #[test]
    fn union_takes_extremes() {
        let mut a = ranges(&[0.0, -1.0], &[1.0, 2.0]);
        a.union_with(&ranges(&[-2.0, 0.0], &[0.5, 3.0]));
        assert_eq!(a, ranges(&[-2.0, -1.0], &[1.0, 3.0]));
    }
}
