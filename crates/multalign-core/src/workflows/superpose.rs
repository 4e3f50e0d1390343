use crate::core::geometry::{self, GeometryError};
use nalgebra::{Matrix4, Point3, Quaternion, Translation3, UnitQuaternion};
use tracing::{instrument, trace};

/// Result of a rigid-body superposition.
#[derive(Debug, Clone)]
pub struct Superposition {
    /// Optimal rotation of the moving cloud, about its centroid.
    pub rotation: UnitQuaternion<f64>,
    /// Full homogeneous transform (rotation + translation) carrying the
    /// moving cloud onto the fixed cloud.
    pub transformation: Matrix4<f64>,
    /// RMSD between the fixed cloud and the transformed moving cloud.
    pub rmsd: f64,
}

/// Computes the rigid transform minimizing the sum of squared distances
/// between corresponding points of `moving` and `fixed`.
///
/// Both clouds must have equal, non-zero length and pair up index by index.
/// Neither input is modified; the quaternion method operates on centered
/// copies. The rotation is decoded from the dominant eigenvector of the
/// [key matrix](geometry::form_key_matrix): formed over the centered fixed
/// and moving clouds (in that order), that eigenvector is the unit
/// quaternion rotating the moving cloud onto the fixed one.
#[instrument(skip_all, fields(points = fixed.len()))]
pub fn superpose(
    fixed: &[Point3<f64>],
    moving: &[Point3<f64>],
) -> Result<Superposition, GeometryError> {
    if fixed.len() != moving.len() {
        return Err(GeometryError::LengthMismatch {
            left: fixed.len(),
            right: moving.len(),
        });
    }

    let fixed_centroid = geometry::centroid(fixed)?;
    let moving_centroid = geometry::centroid(moving)?;

    let mut fixed_centered = geometry::clone_point_set(fixed);
    let mut moving_centered = geometry::clone_point_set(moving);
    geometry::center(&mut fixed_centered)?;
    geometry::center(&mut moving_centered)?;

    let key = geometry::form_key_matrix(&fixed_centered, &moving_centered)?;
    let eigen = key.symmetric_eigen();
    let mut dominant = 0;
    for i in 1..4 {
        if eigen.eigenvalues[i] > eigen.eigenvalues[dominant] {
            dominant = i;
        }
    }
    let q = eigen.eigenvectors.column(dominant);
    let rotation = UnitQuaternion::from_quaternion(Quaternion::new(q[0], q[1], q[2], q[3]));

    let transformation = Translation3::from(fixed_centroid.coords).to_homogeneous()
        * rotation.to_homogeneous()
        * Translation3::from(-moving_centroid.coords).to_homogeneous();

    let mut moved = geometry::clone_point_set(moving);
    geometry::transform(&transformation, &mut moved);
    let rmsd = geometry::rmsd(fixed, &moved)?;
    trace!(rmsd, "superposition complete");

    Ok(Superposition {
        rotation,
        transformation,
        rmsd,
    })
}
