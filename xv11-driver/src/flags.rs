use crate::constants::{SAMPLE_INVALID_DATA_MASK, SAMPLE_STRENGTH_WARNING_MASK};
use xv11_data::SampleFlags;

pub(crate) fn to_flags(value: u8) -> SampleFlags {
    SampleFlags {
        invalid_data: value & SAMPLE_INVALID_DATA_MASK != 0,
        strength_warning: value & SAMPLE_STRENGTH_WARNING_MASK != 0,
    }
}
