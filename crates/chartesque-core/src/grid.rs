// File: crates/chartesque-core/src/grid.rs
// Summary: Evenly spaced value sampling shared by label sizing and tick generation.

/// `steps` values from `start` to `end`, both ends included.
pub fn linspace(start: f64, end: f64, steps: usize) -> Vec<f64> {
    if steps < 2 { return vec![start, end]; }
    let step = (end - start) / (steps as f64 - 1.0);
    (0..steps).map(|i| start + step * i as f64).collect()
}
