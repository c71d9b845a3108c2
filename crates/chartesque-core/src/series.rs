// File: crates/chartesque-core/src/series.rs
// Summary: Dataset model: parallel x/y sample arrays plotted in array order.

use crate::error::{ChartError, Result};

/// Paired samples. `x.len() == y.len()` always holds; order is preserved
/// (no implied sort).
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Dataset {
    x: Vec<f64>,
    y: Vec<f64>,
}

impl Dataset {
    pub fn new() -> Self { Self::default() }

    /// Build from parallel arrays, rejecting mismatched lengths.
    pub fn try_new(x: Vec<f64>, y: Vec<f64>) -> Result<Self> {
        if x.len() != y.len() {
            return Err(ChartError::DataLengthMismatch { x_len: x.len(), y_len: y.len() });
        }
        Ok(Self { x, y })
    }

    pub fn from_points(points: impl IntoIterator<Item = (f64, f64)>) -> Self {
        let (x, y) = points.into_iter().unzip();
        Self { x, y }
    }

    pub fn len(&self) -> usize { self.x.len() }

    pub fn is_empty(&self) -> bool { self.x.is_empty() }

    pub fn x(&self) -> &[f64] { &self.x }

    pub fn y(&self) -> &[f64] { &self.y }

    pub fn points(&self) -> impl Iterator<Item = (f64, f64)> + '_ {
        self.x.iter().copied().zip(self.y.iter().copied())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_mismatched_lengths() {
        let err = Dataset::try_new(vec![1.0, 2.0], vec![1.0]).unwrap_err();
        assert!(matches!(err, ChartError::DataLengthMismatch { x_len: 2, y_len: 1 }));
    }

    #[test]
    fn keeps_array_order() {
        let d = Dataset::try_new(vec![3.0, 1.0, 2.0], vec![30.0, 10.0, 20.0]).unwrap();
        assert_eq!(d.points().collect::<Vec<_>>(), vec![(3.0, 30.0), (1.0, 10.0), (2.0, 20.0)]);
        assert_eq!(d.len(), 3);
    }

    #[test]
    fn from_points_splits_columns() {
        let d = Dataset::from_points([(0.0, 1.0), (2.0, 3.0)]);
        assert_eq!(d.x(), &[0.0, 2.0]);
        assert_eq!(d.y(), &[1.0, 3.0]);
        assert!(Dataset::new().is_empty());
    }
}
