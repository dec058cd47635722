pub mod flags;
pub mod observation;
pub mod scan;

pub use flags::SampleFlags;
pub use observation::Observation;
pub use scan::Scan;
