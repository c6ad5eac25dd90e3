use crate::angles::EulerAngles;
use crate::transforms::{rotation_xyz, rotation_zxy, rotation_zyx};
use nalgebra::{Matrix4, RealField};
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use thiserror::Error;

/// Axis application order for a rotation built from an angle triple.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EulerOrder {
    Xyz,
    Zyx,
    Zxy,
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("unknown euler order: {0}")]
pub struct ParseEulerOrderError(String);

impl FromStr for EulerOrder {
    type Err = ParseEulerOrderError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "xyz" => Ok(Self::Xyz),
            "zyx" => Ok(Self::Zyx),
            "zxy" => Ok(Self::Zxy),
            _ => Err(ParseEulerOrderError(s.to_string())),
        }
    }
}

impl EulerOrder {
    pub fn rotation<T: RealField + Copy>(&self, angles: &EulerAngles<T>) -> Matrix4<T> {
        match self {
            Self::Xyz => rotation_xyz(angles.pitch, angles.yaw, angles.roll),
            Self::Zyx => rotation_zyx(angles.yaw, angles.pitch, angles.roll),
            Self::Zxy => rotation_zxy(angles.yaw, angles.pitch, angles.roll),
        }
    }
}
