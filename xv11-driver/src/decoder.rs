use crate::constants::{PACKETS_PER_FRAME, SAMPLES_PER_PACKET};
use crate::error::Xv11Error;
use crate::frame::Frame;
use crate::numeric::to_string;
use crate::packet::{
    err_if_checksum_mismatched, is_invalid_sample, packet_group, packet_rpm, sample,
    sample_distance, sample_flags, sample_strength,
};
use tracing::{debug, trace};
use xv11_data::{Observation, Scan};

/// Counts the packets of `frame` whose checksum does not match.
///
/// Any nonzero count means the whole frame must be dropped: a single lost
/// byte upstream shifts every following packet boundary.
pub fn count_checksum_errors(frame: &Frame) -> usize {
    frame
        .packets()
        .enumerate()
        .filter(|(group, packet)| match err_if_checksum_mismatched(packet) {
            Ok(()) => false,
            Err(e) => {
                trace!(group, packet = %to_string(packet), "{e}");
                true
            }
        })
        .count()
}

/// Decodes every packet of a frame already accepted by
/// [`count_checksum_errors`].
pub fn decode_frame(frame: &Frame) -> Scan {
    let mut scan = Scan {
        observations: Vec::with_capacity(PACKETS_PER_FRAME * SAMPLES_PER_PACKET),
        speeds_rpm: Vec::with_capacity(PACKETS_PER_FRAME),
    };
    for (group, packet) in frame.packets().enumerate() {
        if packet_group(packet) as usize != group {
            trace!(group, announced = packet_group(packet), "Packet index does not match its position");
        }
        scan.speeds_rpm.push(packet_rpm(packet));
        for slot in 0..SAMPLES_PER_PACKET {
            let data = sample(packet, slot);
            if is_invalid_sample(data) {
                continue;
            }
            scan.observations.push(Observation {
                angle_degrees: (group * SAMPLES_PER_PACKET + slot) as u16,
                distance_mm: sample_distance(data),
                signal_strength: sample_strength(data),
                flags: sample_flags(data),
            });
        }
    }
    scan
}

/// Validates then decodes a frame. A frame with any bad packet is rejected
/// as a whole.
pub fn parse_frame(frame: &Frame) -> Result<Scan, Xv11Error> {
    match count_checksum_errors(frame) {
        0 => Ok(decode_frame(frame)),
        failed_packets => {
            debug!(failed_packets, "Dropping frame");
            Err(Xv11Error::ChecksumFailure { failed_packets })
        }
    }
}
