use nalgebra::{Matrix4, Point3, Vector3};
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum GeometryError {
    #[error("Point set is empty; at least one point is required")]
    EmptyPointSet,
    #[error("Point set lengths differ: {left} vs {right}")]
    LengthMismatch { left: usize, right: usize },
}

/// Arithmetic mean of a point cloud. Requires at least one point.
pub fn centroid(points: &[Point3<f64>]) -> Result<Point3<f64>, GeometryError> {
    if points.is_empty() {
        return Err(GeometryError::EmptyPointSet);
    }
    let sum = points
        .iter()
        .fold(Vector3::zeros(), |acc, p| acc + p.coords);
    Ok(Point3::from(sum / points.len() as f64))
}

/// Translates the cloud in place so that its centroid lands on the origin.
pub fn center(points: &mut [Point3<f64>]) -> Result<(), GeometryError> {
    let c = centroid(points)?;
    translate(&-c.coords, points);
    Ok(())
}

/// Adds `shift` to every point in place.
pub fn translate(shift: &Vector3<f64>, points: &mut [Point3<f64>]) {
    for p in points.iter_mut() {
        *p += *shift;
    }
}

/// Applies a homogeneous 4x4 rotation+translation to every point in place.
pub fn transform(rot_trans: &Matrix4<f64>, points: &mut [Point3<f64>]) {
    for p in points.iter_mut() {
        *p = rot_trans.transform_point(p);
    }
}

/// Independently-owned copy of the cloud; mutating it never affects the input.
pub fn clone_point_set(points: &[Point3<f64>]) -> Vec<Point3<f64>> {
    points.to_vec()
}

/// Builds the symmetric 4x4 key matrix of the quaternion superposition method.
///
/// Both clouds must have equal, non-zero length and are expected to be
/// centered at their respective centroids. The eigenvector of the largest
/// eigenvalue of the returned matrix, read as a unit quaternion, is the
/// rotation minimizing the sum of squared distances between corresponding
/// points; the eigenvalue itself relates to the minimal residual used for
/// RMSD. Eigen-decomposition is left to the caller.
pub fn form_key_matrix(
    a: &[Point3<f64>],
    b: &[Point3<f64>],
) -> Result<Matrix4<f64>, GeometryError> {
    if a.len() != b.len() {
        return Err(GeometryError::LengthMismatch {
            left: a.len(),
            right: b.len(),
        });
    }
    if a.is_empty() {
        return Err(GeometryError::EmptyPointSet);
    }

    let (mut xx, mut xy, mut xz) = (0.0, 0.0, 0.0);
    let (mut yx, mut yy, mut yz) = (0.0, 0.0, 0.0);
    let (mut zx, mut zy, mut zz) = (0.0, 0.0, 0.0);

    for (p, q) in a.iter().zip(b.iter()) {
        xx += p.x * q.x;
        xy += p.x * q.y;
        xz += p.x * q.z;
        yx += p.y * q.x;
        yy += p.y * q.y;
        yz += p.y * q.z;
        zx += p.z * q.x;
        zy += p.z * q.y;
        zz += p.z * q.z;
    }

    let mut k = Matrix4::zeros();
    k[(0, 0)] = xx + yy + zz;
    k[(0, 1)] = zy - yz;
    k[(1, 0)] = k[(0, 1)];
    k[(1, 1)] = xx - yy - zz;
    k[(0, 2)] = xz - zx;
    k[(2, 0)] = k[(0, 2)];
    k[(1, 2)] = xy + yx;
    k[(2, 1)] = k[(1, 2)];
    k[(2, 2)] = yy - zz - xx;
    k[(0, 3)] = yx - xy;
    k[(3, 0)] = k[(0, 3)];
    k[(1, 3)] = zx + xz;
    k[(3, 1)] = k[(1, 3)];
    k[(2, 3)] = yz + zy;
    k[(3, 2)] = k[(2, 3)];
    k[(3, 3)] = zz - xx - yy;

    Ok(k)
}

/// Root-mean-square deviation between corresponding points of two clouds.
pub fn rmsd(a: &[Point3<f64>], b: &[Point3<f64>]) -> Result<f64, GeometryError> {
    if a.len() != b.len() {
        return Err(GeometryError::LengthMismatch {
            left: a.len(),
            right: b.len(),
        });
    }
    if a.is_empty() {
        return Err(GeometryError::EmptyPointSet);
    }
    let squared_dist_sum: f64 = a
        .iter()
        .zip(b.iter())
        .map(|(p, q)| (p - q).norm_squared())
        .sum();
    Ok((squared_dist_sum / a.len() as f64).sqrt())
}
