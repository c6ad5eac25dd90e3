use nalgebra::{RealField, Vector3};
use serde::{Deserialize, Serialize};

/// Tait-Bryan angle triple in radians: pitch about X, yaw about Y, roll
/// about Z. The axis application order is not stored here, it is chosen by
/// the transform or decomposition the triple is passed to.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct EulerAngles<T: RealField + Copy> {
    pub pitch: T,
    pub yaw: T,
    pub roll: T,
}

impl<T: RealField + Copy> EulerAngles<T> {
    pub fn new(pitch: T, yaw: T, roll: T) -> Self {
        Self { pitch, yaw, roll }
    }

    pub fn zeros() -> Self {
        Self::new(T::zero(), T::zero(), T::zero())
    }
}

impl<T: RealField + Copy> From<Vector3<T>> for EulerAngles<T> {
    fn from(v: Vector3<T>) -> Self {
        Self::new(v.x, v.y, v.z)
    }
}

impl<T: RealField + Copy> From<EulerAngles<T>> for Vector3<T> {
    fn from(angles: EulerAngles<T>) -> Self {
        Vector3::new(angles.pitch, angles.yaw, angles.roll)
    }
}
