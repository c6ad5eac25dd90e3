use crate::angles::EulerAngles;
use nalgebra::{Matrix4, RealField, Vector3};

/// Tait-Bryan angles of the rotation block of an affine matrix, recovered
/// for the XYZ application order. The rotation block is assumed to be
/// orthonormal; nothing is verified.
#[derive(Clone, Copy, Debug)]
pub struct EulerDecomposition<T: RealField + Copy> {
    pub pitch: T,
    pub yaw: T,
    pub roll: T,
}

impl<T: RealField + Copy> EulerDecomposition<T> {
    pub fn decompose(matrix: &Matrix4<T>) -> Self {
        let sin_yaw = matrix[(0, 2)];

        if sin_yaw < T::one() && sin_yaw > -T::one() {
            let yaw = sin_yaw.asin();
            let candidates = [
                Self::with_yaw(matrix, yaw),
                Self::with_yaw(matrix, T::pi() - yaw),
            ];

            if let [Some(first), Some(second)] = candidates {
                // asin leaves two valid solutions, keep the one with the
                // smaller total rotation; first wins ties
                return if first.angle_sum() > second.angle_sum() {
                    second
                } else {
                    first
                };
            }
        }

        // At the poles yaw degenerates to ±π/2 and roll folds into pitch
        if sin_yaw > T::zero() {
            Self {
                pitch: matrix[(1, 0)].atan2(matrix[(1, 1)]),
                yaw: T::frac_pi_2(),
                roll: T::zero(),
            }
        } else {
            Self {
                pitch: -matrix[(1, 0)].atan2(matrix[(1, 2)]),
                yaw: -T::frac_pi_2(),
                roll: T::zero(),
            }
        }
    }

    pub fn decompose_vector(matrix: &Matrix4<T>) -> Vector3<T> {
        let decomposition = Self::decompose(matrix);
        Vector3::new(decomposition.pitch, decomposition.yaw, decomposition.roll)
    }

    pub fn angles(&self) -> EulerAngles<T> {
        EulerAngles::new(self.pitch, self.yaw, self.roll)
    }

    fn with_yaw(matrix: &Matrix4<T>, yaw: T) -> Option<Self> {
        let cos_yaw = yaw.cos();
        if cos_yaw.abs() <= T::default_epsilon() {
            return None;
        }

        Some(Self {
            pitch: (-matrix[(1, 2)] / cos_yaw).atan2(matrix[(2, 2)] / cos_yaw),
            yaw,
            roll: (-matrix[(0, 1)] / cos_yaw).atan2(matrix[(0, 0)] / cos_yaw),
        })
    }

    fn angle_sum(&self) -> T {
        self.pitch.abs() + self.yaw.abs() + self.roll.abs()
    }
}
