use crate::observation::Observation;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Struct to hold one lap of lidar scan data.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Scan {
    /// Valid readings of the lap, in increasing angle order.
    pub observations: Vec<Observation>,
    /// Rotation speed reported by each packet of the lap, in RPM.
    pub speeds_rpm: Vec<f64>,
}

impl Scan {
    pub fn new() -> Scan {
        Scan::default()
    }

    /// Average rotation speed over the lap, `None` when no packet was decoded.
    pub fn mean_rpm(&self) -> Option<f64> {
        if self.speeds_rpm.is_empty() {
            return None;
        }
        Some(self.speeds_rpm.iter().sum::<f64>() / self.speeds_rpm.len() as f64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mean_rpm() {
        let mut scan = Scan::new();
        assert_eq!(scan.mean_rpm(), None);

        scan.speeds_rpm = vec![300., 302., 304.];
        assert_eq!(scan.mean_rpm(), Some(302.));
    }
}
