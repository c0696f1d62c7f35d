//! Rigid transform construction.
//!
//! A connector's (direction, up) pair describes an orthonormal frame. The
//! helpers here build the matrix that carries a part's canonical origin frame
//! onto the frame it is attached at, and export matrices in the row-major
//! layout OpenSCAD's `multmatrix` expects.

use glam::{DMat4, DVec3};

use crate::connector::Connector;
use crate::error::{ConnectorError, ConnectorResult};

/// Builds the basis with `z` pointing from `at` to `eye` and `y` following
/// `up`, translated to `eye`.
///
/// The columns are `x = normalize(up × z)`, `y = z × x`, `z` and `eye`, so the
/// matrix maps local axes into the frame (it is not a camera view matrix).
///
/// # Examples
/// ```
/// use glam::DVec3;
/// use openscad_connectors::frame::look_at;
///
/// let m = look_at(DVec3::ZERO, DVec3::new(0.0, -1.0, 0.0), DVec3::Z);
/// assert_eq!(m.transform_vector3(DVec3::Z), DVec3::Y);
/// ```
pub fn look_at(eye: DVec3, at: DVec3, up: DVec3) -> DMat4 {
    let z = (eye - at).normalize();
    let x = up.cross(z).normalize();
    let y = z.cross(x);
    DMat4::from_cols(x.extend(0.0), y.extend(0.0), z.extend(0.0), eye.extend(1.0))
}

/// Returns `matrix` with its translation column replaced by `offset`.
pub fn with_translation(matrix: DMat4, offset: DVec3) -> DMat4 {
    DMat4::from_cols(matrix.x_axis, matrix.y_axis, matrix.z_axis, offset.extend(1.0))
}

/// Computes the transform carrying the `origin` pose onto `position`.
///
/// The rotation aligns `(origin.direction, origin.up)` with
/// `(position.direction, position.up)`. The translation is the raw offset
/// `position.position - origin.position`; it is not rotated, so the result
/// only moves the origin point exactly onto `position` when the origin sits
/// at the coordinate zero.
///
/// # Errors
///
/// [`ConnectorError::MissingUp`] when either connector has no up vector.
///
/// # Examples
/// ```
/// use glam::DVec3;
/// use openscad_connectors::{frame::generate_transform_matrix, Connector};
///
/// let origin = Connector::canonical_origin();
/// let target = Connector::new(DVec3::new(5.0, 0.0, 0.0), DVec3::X).with_up(DVec3::Z);
/// let m = generate_transform_matrix(&origin, &target).unwrap();
/// assert!(m.transform_point3(DVec3::ZERO).abs_diff_eq(DVec3::new(5.0, 0.0, 0.0), 1e-10));
/// assert!(m.transform_vector3(DVec3::Y).abs_diff_eq(DVec3::X, 1e-10));
/// ```
pub fn generate_transform_matrix(origin: &Connector, position: &Connector) -> ConnectorResult<DMat4> {
    let origin_up = origin.up.ok_or(ConnectorError::MissingUp { frame: "origin" })?;
    let position_up = position.up.ok_or(ConnectorError::MissingUp { frame: "position" })?;

    let rotate_base = look_at(DVec3::ZERO, -origin.direction, origin_up).inverse();
    let rotation = look_at(DVec3::ZERO, -position.direction, position_up) * rotate_base;

    Ok(with_translation(rotation, position.position - origin.position))
}

/// Exports `matrix` row by row, the layout of OpenSCAD's `multmatrix(m=...)`.
///
/// # Examples
/// ```
/// use glam::{DMat4, DVec3};
/// use openscad_connectors::frame::scad_matrix;
///
/// let m = scad_matrix(DMat4::from_translation(DVec3::new(1.0, 2.0, 3.0)));
/// assert_eq!(m[0], [1.0, 0.0, 0.0, 1.0]);
/// assert_eq!(m[3], [0.0, 0.0, 0.0, 1.0]);
/// ```
pub fn scad_matrix(matrix: DMat4) -> [[f64; 4]; 4] {
    matrix.transpose().to_cols_array_2d()
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use config::constants::{approx_equal, approx_zero, EPSILON};

    fn pose(position: DVec3, direction: DVec3, up: DVec3) -> Connector {
        Connector::new(position, direction).with_up(up)
    }

    #[test]
    fn test_look_at_basis_is_orthonormal() {
        let m = look_at(DVec3::ZERO, DVec3::new(-1.0, -1.0, 0.0), DVec3::Z);
        let (x, y, z) = (m.x_axis.truncate(), m.y_axis.truncate(), m.z_axis.truncate());
        assert!(approx_equal(x.length(), 1.0));
        assert!(approx_equal(y.length(), 1.0));
        assert!(approx_zero(x.dot(y)));
        assert!(approx_zero(y.dot(z)));
        assert!(z.abs_diff_eq(DVec3::new(1.0, 1.0, 0.0).normalize(), EPSILON));
    }

    #[test]
    fn test_look_at_keeps_eye_as_translation() {
        let eye = DVec3::new(1.0, 2.0, 3.0);
        let m = look_at(eye, eye - DVec3::Y, DVec3::Z);
        assert_eq!(m.w_axis.truncate(), eye);
        assert_eq!(m.transform_point3(DVec3::ZERO), eye);
    }

    #[test]
    fn test_identity_for_canonical_origin() {
        let origin = Connector::canonical_origin();
        let m = generate_transform_matrix(&origin, &origin).unwrap();
        assert_eq!(m, DMat4::IDENTITY);
    }

    #[test]
    fn test_rotation_maps_direction_and_up() {
        let origin = Connector::canonical_origin();
        let target = pose(
            DVec3::new(1.0, -4.0, 2.5),
            DVec3::new(0.0, 0.0, -1.0),
            DVec3::new(1.0, 0.0, 0.0),
        );
        let m = generate_transform_matrix(&origin, &target).unwrap();
        assert!(m.transform_vector3(origin.direction).abs_diff_eq(target.direction, EPSILON));
        assert!(m.transform_vector3(DVec3::Z).abs_diff_eq(DVec3::X, EPSILON));
        assert!(m.transform_point3(origin.position).abs_diff_eq(target.position, EPSILON));
    }

    #[test]
    fn test_rotation_is_rigid() {
        let origin = Connector::canonical_origin();
        let target = pose(
            DVec3::ZERO,
            DVec3::new(1.0, 1.0, 1.0),
            DVec3::new(1.0, -1.0, 0.0).normalize(),
        );
        let m = generate_transform_matrix(&origin, &target).unwrap();
        assert!(approx_equal(m.determinant(), 1.0));
        let a = DVec3::new(3.0, -2.0, 7.0);
        assert!(approx_equal(m.transform_vector3(a).length(), a.length()));
    }

    #[test]
    fn test_translation_is_raw_offset() {
        let origin = pose(DVec3::new(0.0, 10.0, 0.0), DVec3::Y, DVec3::Z);
        let target = pose(DVec3::new(3.0, 0.0, 0.0), DVec3::X, DVec3::Z);
        let m = generate_transform_matrix(&origin, &target).unwrap();
        assert_eq!(m.w_axis.truncate(), DVec3::new(3.0, -10.0, 0.0));
    }

    #[test]
    fn test_missing_up_is_reported() {
        let origin = Connector::canonical_origin();
        let target = Connector::new(DVec3::ZERO, DVec3::X);
        assert_eq!(
            generate_transform_matrix(&origin, &target),
            Err(ConnectorError::MissingUp { frame: "position" })
        );
        assert_eq!(
            generate_transform_matrix(&target, &origin),
            Err(ConnectorError::MissingUp { frame: "origin" })
        );
    }

    #[test]
    fn test_scad_matrix_is_row_major() {
        let m = DMat4::from_cols_array_2d(&[
            [1.0, 2.0, 3.0, 0.0],
            [4.0, 5.0, 6.0, 0.0],
            [7.0, 8.0, 9.0, 0.0],
            [10.0, 11.0, 12.0, 1.0],
        ]);
        let rows = scad_matrix(m);
        assert_eq!(rows[0], [1.0, 4.0, 7.0, 10.0]);
        assert_eq!(rows[2], [3.0, 6.0, 9.0, 12.0]);
        assert_eq!(rows[3], [0.0, 0.0, 0.0, 1.0]);
    }
}
