use crate::flags::SampleFlags;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A single distance reading at one degree of the rotation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Observation {
    /// Angle in degrees, from 0 to 359.
    pub angle_degrees: u16,
    /// Distance to an object in mm (14 bits).
    pub distance_mm: u16,
    /// Return strength of the laser pulse.
    pub signal_strength: u16,
    pub flags: SampleFlags,
}

impl Observation {
    pub fn angle_radian(&self) -> f64 {
        (self.angle_degrees as f64).to_radians()
    }
}
