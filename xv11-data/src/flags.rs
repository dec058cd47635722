#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Status bits carried by every sample.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SampleFlags {
    /// No usable return: out of range or too low reflectivity.
    /// Samples with this bit set are never turned into observations.
    pub invalid_data: bool,
    /// Object closer than about 0.6m, the reading may be unreliable.
    /// Advisory only.
    pub strength_warning: bool,
}
