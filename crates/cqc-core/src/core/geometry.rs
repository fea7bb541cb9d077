//! Small geometric and statistical helpers shared by the metric modules.

use nalgebra::{Point3, Vector3};

/// Mean position of a set of points, or `None` for an empty set.
pub fn centroid(points: &[Point3<f64>]) -> Option<Point3<f64>> {
    if points.is_empty() {
        return None;
    }
    let sum = points
        .iter()
        .fold(Vector3::zeros(), |acc, p| acc + p.coords);
    Some(Point3::from(sum / points.len() as f64))
}

/// Mean of a set of vectors, or `None` for an empty set.
pub fn mean_vector(vectors: &[Vector3<f64>]) -> Option<Vector3<f64>> {
    if vectors.is_empty() {
        return None;
    }
    let sum = vectors.iter().fold(Vector3::zeros(), |acc, v| acc + v);
    Some(sum / vectors.len() as f64)
}

/// Arithmetic mean, or `None` for an empty slice.
pub fn mean(values: &[f64]) -> Option<f64> {
    if values.is_empty() {
        return None;
    }
    Some(values.iter().sum::<f64>() / values.len() as f64)
}

/// Population standard deviation (denominator n), or `None` for an empty slice.
pub fn std_dev(values: &[f64]) -> Option<f64> {
    let mean = mean(values)?;
    let variance = values
        .iter()
        .map(|v| {
            let d = v - mean;
            d * d
        })
        .sum::<f64>()
        / values.len() as f64;
    Some(variance.sqrt())
}
