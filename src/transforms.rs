use nalgebra::{Matrix4, RealField, Vector3};

pub fn rotate_x<T: RealField + Copy>(angle: T) -> Matrix4<T> {
    let (s, c) = angle.sin_cos();
    let mut rot_x = Matrix4::zeros();

    rot_x[(0, 0)] = T::one();
    rot_x[(3, 3)] = T::one();

    rot_x[(1, 1)] = c;
    rot_x[(1, 2)] = -s;
    rot_x[(2, 1)] = s;
    rot_x[(2, 2)] = c;

    rot_x
}

pub fn rotate_y<T: RealField + Copy>(angle: T) -> Matrix4<T> {
    let (s, c) = angle.sin_cos();
    let mut rot_y = Matrix4::zeros();

    rot_y[(1, 1)] = T::one();
    rot_y[(3, 3)] = T::one();

    rot_y[(0, 0)] = c;
    rot_y[(0, 2)] = s;
    rot_y[(2, 0)] = -s;
    rot_y[(2, 2)] = c;

    rot_y
}

pub fn rotate_z<T: RealField + Copy>(angle: T) -> Matrix4<T> {
    let (s, c) = angle.sin_cos();
    let mut rot_z = Matrix4::zeros();

    rot_z[(2, 2)] = T::one();
    rot_z[(3, 3)] = T::one();

    rot_z[(0, 0)] = c;
    rot_z[(0, 1)] = -s;
    rot_z[(1, 0)] = s;
    rot_z[(1, 1)] = c;

    rot_z
}

/// Closed form of `rotate_x(pitch) * rotate_y(yaw) * rotate_z(roll)`.
pub fn rotation_xyz<T: RealField + Copy>(pitch: T, yaw: T, roll: T) -> Matrix4<T> {
    let (sx, cx) = pitch.sin_cos();
    let (sy, cy) = yaw.sin_cos();
    let (sz, cz) = roll.sin_cos();

    let mut rotation = Matrix4::zeros();

    rotation[(0, 0)] = cy * cz;
    rotation[(1, 0)] = cz * sx * sy + cx * sz;
    rotation[(2, 0)] = -cx * cz * sy + sx * sz;
    rotation[(0, 1)] = -cy * sz;
    rotation[(1, 1)] = cx * cz - sx * sy * sz;
    rotation[(2, 1)] = cz * sx + cx * sy * sz;
    rotation[(0, 2)] = sy;
    rotation[(1, 2)] = -cy * sx;
    rotation[(2, 2)] = cx * cy;
    rotation[(3, 3)] = T::one();

    rotation
}

pub fn rotation_xyz_vector<T: RealField + Copy>(angles: &Vector3<T>) -> Matrix4<T> {
    rotation_xyz(angles.x, angles.y, angles.z)
}

/// Closed form of `rotate_z(roll) * rotate_y(yaw) * rotate_x(pitch)`.
pub fn rotation_zyx<T: RealField + Copy>(yaw: T, pitch: T, roll: T) -> Matrix4<T> {
    let (sx, cx) = pitch.sin_cos();
    let (sy, cy) = yaw.sin_cos();
    let (sz, cz) = roll.sin_cos();

    let mut rotation = Matrix4::zeros();

    rotation[(0, 0)] = cy * cz;
    rotation[(1, 0)] = cy * sz;
    rotation[(2, 0)] = -sy;
    rotation[(0, 1)] = cz * sx * sy - cx * sz;
    rotation[(1, 1)] = cx * cz + sx * sy * sz;
    rotation[(2, 1)] = cy * sx;
    rotation[(0, 2)] = cx * cz * sy + sx * sz;
    rotation[(1, 2)] = -cz * sx + cx * sy * sz;
    rotation[(2, 2)] = cx * cy;
    rotation[(3, 3)] = T::one();

    rotation
}

/// Closed form of `rotate_z(roll) * rotate_x(pitch) * rotate_y(yaw)`.
pub fn rotation_zxy<T: RealField + Copy>(yaw: T, pitch: T, roll: T) -> Matrix4<T> {
    let (sx, cx) = pitch.sin_cos();
    let (sy, cy) = yaw.sin_cos();
    let (sz, cz) = roll.sin_cos();

    let mut rotation = Matrix4::zeros();

    rotation[(0, 0)] = cy * cz - sx * sy * sz;
    rotation[(1, 0)] = cz * sx * sy + cy * sz;
    rotation[(2, 0)] = -cx * sy;
    rotation[(0, 1)] = -cx * sz;
    rotation[(1, 1)] = cx * cz;
    rotation[(2, 1)] = sx;
    rotation[(0, 2)] = cz * sy + cy * sx * sz;
    rotation[(1, 2)] = -cy * cz * sx + sy * sz;
    rotation[(2, 2)] = cx * cy;
    rotation[(3, 3)] = T::one();

    rotation
}

#[cfg(test)]
mod tests {
    use super::*;
    use itertools::iproduct;
    use std::f32::consts::FRAC_PI_2;

    const ANGLE_GRID: [f32; 5] = [-2.9, -FRAC_PI_2, 0.0, 0.7, 2.4];

    fn assert_matrix_eq(a: &Matrix4<f32>, b: &Matrix4<f32>, tolerance: f32) {
        for row in 0..4 {
            for col in 0..4 {
                assert!(
                    (a[(row, col)] - b[(row, col)]).abs() <= tolerance,
                    "entry ({row}, {col}) differs: {} vs {}",
                    a[(row, col)],
                    b[(row, col)],
                );
            }
        }
    }

    #[test]
    fn rotation_xyz_of_zeros_is_identity() {
        assert_eq!(rotation_xyz(0.0_f32, 0.0, 0.0), Matrix4::identity());
    }

    #[test]
    fn rotation_xyz_quarter_turn_about_x() {
        let rotation = rotation_xyz(FRAC_PI_2, 0.0_f32, 0.0);
        let mut expected = Matrix4::zeros();
        expected[(0, 0)] = 1.0;
        expected[(2, 1)] = 1.0;
        expected[(1, 2)] = -1.0;
        expected[(3, 3)] = 1.0;
        assert_matrix_eq(&rotation, &expected, 1e-6);
    }

    #[test]
    fn rotation_xyz_matches_axis_product() {
        for (x, y, z) in iproduct!(ANGLE_GRID, ANGLE_GRID, ANGLE_GRID) {
            let product = rotate_x(x) * rotate_y(y) * rotate_z(z);
            assert_matrix_eq(&rotation_xyz(x, y, z), &product, 1e-6);
        }
    }

    #[test]
    fn rotation_zyx_matches_axis_product() {
        for (x, y, z) in iproduct!(ANGLE_GRID, ANGLE_GRID, ANGLE_GRID) {
            let product = rotate_z(z) * rotate_y(y) * rotate_x(x);
            assert_matrix_eq(&rotation_zyx(y, x, z), &product, 1e-6);
        }
    }

    // A commonly mistyped entry in this order's closed form is (1, 0),
    // `cy + sz` instead of `cy * sz`; pinning against the axis product
    // catches it.
    #[test]
    fn rotation_zxy_matches_axis_product() {
        for (x, y, z) in iproduct!(ANGLE_GRID, ANGLE_GRID, ANGLE_GRID) {
            let product = rotate_z(z) * rotate_x(x) * rotate_y(y);
            assert_matrix_eq(&rotation_zxy(y, x, z), &product, 1e-6);
        }
    }

    #[test]
    fn rotation_outputs_are_orthonormal() {
        for (x, y, z) in iproduct!(ANGLE_GRID, ANGLE_GRID, ANGLE_GRID) {
            for rotation in [
                rotation_xyz(x, y, z),
                rotation_zyx(y, x, z),
                rotation_zxy(y, x, z),
            ] {
                let block = rotation.fixed_view::<3, 3>(0, 0);
                assert!((block.determinant() - 1.0).abs() < 1e-5);
                for col in 0..3 {
                    assert!((block.column(col).norm() - 1.0).abs() < 1e-6);
                }
            }
        }
    }

    #[test]
    fn rotation_outputs_have_identity_affine_terms() {
        for (x, y, z) in iproduct!(ANGLE_GRID, ANGLE_GRID, ANGLE_GRID) {
            for rotation in [
                rotation_xyz(x, y, z),
                rotation_zyx(y, x, z),
                rotation_zxy(y, x, z),
            ] {
                for i in 0..3 {
                    assert_eq!(rotation[(3, i)], 0.0);
                    assert_eq!(rotation[(i, 3)], 0.0);
                }
                assert_eq!(rotation[(3, 3)], 1.0);
            }
        }
    }

    #[test]
    fn vector_variant_matches_scalar_variant() {
        let angles = Vector3::new(0.3_f32, -0.8, 1.9);
        assert_eq!(
            rotation_xyz_vector(&angles),
            rotation_xyz(angles.x, angles.y, angles.z)
        );
    }
}
