pub(crate) const PACKET_START_BYTE: u8 = 0xFA;
pub(crate) const PACKET_INDEX_BASE: u8 = 0xA0;
pub(crate) const PACKET_SIZE: usize = 22;
pub(crate) const PACKETS_PER_FRAME: usize = 90;
pub(crate) const FRAME_SIZE: usize = PACKET_SIZE * PACKETS_PER_FRAME;
pub(crate) const SAMPLES_PER_PACKET: usize = 4;
pub(crate) const SAMPLE_SIZE: usize = 4;
pub(crate) const SAMPLES_OFFSET: usize = 4;
pub(crate) const CHECKSUM_OFFSET: usize = 20;
pub(crate) const SPEED_SCALE: f64 = 64.;
pub(crate) const SAMPLE_INVALID_DATA_MASK: u8 = 0x80;
pub(crate) const SAMPLE_STRENGTH_WARNING_MASK: u8 = 0x40;
pub(crate) const SAMPLE_DISTANCE_HIGH_MASK: u8 = 0x3F;
pub(crate) const CHECKSUM_MASK: u32 = 0x7FFF;
pub(crate) const N_READ_TRIALS: usize = 3;
// Fixed by the sensor firmware
pub(crate) const DEFAULT_BAUD_RATE: u32 = 115_200;
