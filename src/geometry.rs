//! Polygon measurements over vertex coordinates.
//!
//! Both functions treat the point sequence as a closed polygon (the last
//! vertex connects back to the first) and do not validate simplicity:
//! self-intersecting inputs produce formula-correct but geometrically
//! ambiguous results. Degenerate inputs (fewer than three distinct points,
//! collinear points) legitimately measure zero.

/// Area of the polygon via the Shoelace formula.
///
/// The absolute value is applied once to the whole signed sum, so the result
/// is independent of winding direction.
pub fn compute_area(points: &[(f64, f64)]) -> f64 {
    if points.is_empty() {
        return 0.0;
    }
    let signed_sum: f64 = points
        .iter()
        .enumerate()
        .map(|(i, &(x0, y0))| {
            let (x1, y1) = points[(i + 1) % points.len()];
            x0 * y1 - x1 * y0
        })
        .sum();
    0.5 * signed_sum.abs()
}

/// Perimeter of the polygon: the sum of Euclidean edge lengths, including
/// the closing edge from the last vertex back to the first.
pub fn compute_perimeter(points: &[(f64, f64)]) -> f64 {
    if points.is_empty() {
        return 0.0;
    }
    points
        .iter()
        .enumerate()
        .map(|(i, &(x0, y0))| {
            let (x1, y1) = points[(i + 1) % points.len()];
            ((x1 - x0).powi(2) + (y1 - y0).powi(2)).sqrt()
        })
        .sum()
}
