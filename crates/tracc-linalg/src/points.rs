/// Compute the centroid of a set of points.
///
/// # Arguments
///
/// * `points` - A set of N-dimensional points.
///
/// # Returns
///
/// The mean of the points along each dimension. An empty set yields the zero vector.
///
/// Example:
///
/// ```
/// use tracc_linalg::points::centroid;
///
/// let points = [[0.0, 0.0, 0.0], [2.0, 4.0, 6.0]];
/// assert_eq!(centroid(&points), [1.0, 2.0, 3.0]);
/// ```
pub fn centroid<const N: usize>(points: &[[f64; N]]) -> [f64; N] {
    let mut center = [0.0; N];
    if points.is_empty() {
        return center;
    }

    for point in points {
        for (c, p) in center.iter_mut().zip(point.iter()) {
            *c += p;
        }
    }

    let n = points.len() as f64;
    for c in &mut center {
        *c /= n;
    }

    center
}

/// Translate a set of points by a fixed offset.
///
/// # Arguments
///
/// * `points` - A set of N-dimensional points.
/// * `translation` - The offset added to every point.
/// * `dst_points` - A pre-allocated slice receiving the translated points.
///
/// PRECONDITION: dst_points is a pre-allocated slice of the same size as points.
pub fn translate_points<const N: usize>(
    points: &[[f64; N]],
    translation: &[f64; N],
    dst_points: &mut [[f64; N]],
) {
    assert_eq!(points.len(), dst_points.len());

    for (dst, src) in dst_points.iter_mut().zip(points.iter()) {
        for ((d, s), t) in dst.iter_mut().zip(src.iter()).zip(translation.iter()) {
            *d = s + t;
        }
    }
}

/// Translate a set of points in place.
pub fn translate_points_in_place<const N: usize>(points: &mut [[f64; N]], translation: &[f64; N]) {
    for point in points.iter_mut() {
        for (p, t) in point.iter_mut().zip(translation.iter()) {
            *p += t;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_centroid() {
        let points = [[1.0, 2.0], [3.0, 4.0], [5.0, 9.0]];
        let c = centroid(&points);
        assert_relative_eq!(c[0], 3.0);
        assert_relative_eq!(c[1], 5.0);
    }

    #[test]
    fn test_centroid_empty() {
        let points: [[f64; 3]; 0] = [];
        assert_eq!(centroid(&points), [0.0; 3]);
    }

    #[test]
    fn test_translate_points() {
        let points = vec![[1.0, 2.0, 3.0], [-1.0, 0.0, 1.0]];
        let mut dst = vec![[0.0; 3]; points.len()];
        translate_points(&points, &[1.0, -2.0, 0.5], &mut dst);
        assert_eq!(dst, vec![[2.0, 0.0, 3.5], [0.0, -2.0, 1.5]]);

        let mut in_place = points.clone();
        translate_points_in_place(&mut in_place, &[1.0, -2.0, 0.5]);
        assert_eq!(in_place, dst);
    }

    #[test]
    fn test_centroid_after_translation() {
        let points = vec![[0.0, 0.0], [4.0, 2.0]];
        let mut dst = vec![[0.0; 2]; 2];
        let offset = [-2.0, -1.0];
        translate_points(&points, &offset, &mut dst);
        assert_eq!(centroid(&dst), [0.0, 0.0]);
    }
}
