use crate::constants::{
    CHECKSUM_MASK, CHECKSUM_OFFSET, PACKET_INDEX_BASE, PACKET_SIZE, SAMPLES_OFFSET,
    SAMPLE_INVALID_DATA_MASK, SAMPLE_SIZE,
};
use crate::error::Xv11Error;
use crate::flags::to_flags;
use crate::numeric::{calc_distance, calc_rpm, to_u16};
use xv11_data::SampleFlags;

pub(crate) fn calc_checksum(packet: &[u8]) -> u16 {
    // The accumulator is 32 bits wide on the sensor side and wraps there.
    let checksum32 = packet[..CHECKSUM_OFFSET]
        .chunks_exact(2)
        .fold(0u32, |acc, word| {
            (acc << 1).wrapping_add(to_u16(word[1], word[0]) as u32)
        });
    (((checksum32 & CHECKSUM_MASK) + (checksum32 >> 15)) & CHECKSUM_MASK) as u16
}

pub(crate) fn stored_checksum(packet: &[u8]) -> u16 {
    to_u16(packet[CHECKSUM_OFFSET + 1], packet[CHECKSUM_OFFSET])
}

pub(crate) fn err_if_checksum_mismatched(packet: &[u8]) -> Result<(), Xv11Error> {
    if packet.len() != PACKET_SIZE {
        return Err(Xv11Error::InvalidPacketLength(packet.len()));
    }
    let calculated = calc_checksum(packet);
    let expected = stored_checksum(packet);
    match calculated != expected {
        true => Err(Xv11Error::ChecksumMismatch(expected, calculated)),
        false => Ok(()),
    }
}

pub(crate) fn packet_rpm(packet: &[u8]) -> f64 {
    calc_rpm(packet[2], packet[3])
}

/// Group number announced by the packet itself. Decoding relies on the
/// packet position instead, this is only used for diagnostics.
pub(crate) fn packet_group(packet: &[u8]) -> u8 {
    packet[1].wrapping_sub(PACKET_INDEX_BASE)
}

pub(crate) fn sample_index(slot: usize) -> usize {
    SAMPLES_OFFSET + slot * SAMPLE_SIZE
}

pub(crate) fn sample(packet: &[u8], slot: usize) -> &[u8] {
    let i = sample_index(slot);
    &packet[i..i + SAMPLE_SIZE]
}

pub(crate) fn sample_distance(sample: &[u8]) -> u16 {
    calc_distance(sample[0], sample[1])
}

pub(crate) fn sample_strength(sample: &[u8]) -> u16 {
    to_u16(sample[3], sample[2])
}

pub(crate) fn sample_flags(sample: &[u8]) -> SampleFlags {
    to_flags(sample[1])
}

pub(crate) fn is_invalid_sample(sample: &[u8]) -> bool {
    sample[1] & SAMPLE_INVALID_DATA_MASK != 0
}
