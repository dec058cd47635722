use crate::constants::{FRAME_SIZE, PACKETS_PER_FRAME, PACKET_INDEX_BASE, PACKET_SIZE, PACKET_START_BYTE};
use crate::packet::calc_checksum;

/// Raw bytes of one sample as sent by the sensor.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub(crate) struct SampleBytes(pub [u8; 4]);

impl SampleBytes {
    pub(crate) fn new(distance: u16, strength: u16, strength_warning: bool, invalid: bool) -> Self {
        let mut b1 = ((distance >> 8) as u8) & 0x3F;
        if strength_warning {
            b1 |= 0x40;
        }
        if invalid {
            b1 |= 0x80;
        }
        SampleBytes([
            (distance & 0xFF) as u8,
            b1,
            (strength & 0xFF) as u8,
            (strength >> 8) as u8,
        ])
    }
}

pub(crate) fn encode_packet(group: usize, speed: u16, samples: [SampleBytes; 4]) -> [u8; PACKET_SIZE] {
    let mut packet = [0u8; PACKET_SIZE];
    packet[0] = PACKET_START_BYTE;
    packet[1] = PACKET_INDEX_BASE + group as u8;
    packet[2] = (speed & 0xFF) as u8;
    packet[3] = (speed >> 8) as u8;
    for (slot, sample) in samples.iter().enumerate() {
        packet[4 + slot * 4..8 + slot * 4].copy_from_slice(&sample.0);
    }
    let checksum = calc_checksum(&packet);
    packet[20] = (checksum & 0xFF) as u8;
    packet[21] = (checksum >> 8) as u8;
    packet
}

/// Builds a well-formed frame. `sample_at` receives the angle in degrees.
pub(crate) fn encode_frame<F>(speed: u16, mut sample_at: F) -> Vec<u8>
where
    F: FnMut(usize) -> SampleBytes,
{
    let mut frame = Vec::with_capacity(FRAME_SIZE);
    for group in 0..PACKETS_PER_FRAME {
        let samples = [
            sample_at(group * 4),
            sample_at(group * 4 + 1),
            sample_at(group * 4 + 2),
            sample_at(group * 4 + 3),
        ];
        frame.extend_from_slice(&encode_packet(group, speed, samples));
    }
    frame
}

/// Frame with distance = 1000 + angle and strength = angle, all samples valid.
pub(crate) fn ramp_frame() -> Vec<u8> {
    encode_frame(0x4B00, |angle| {
        SampleBytes::new(1000 + angle as u16, angle as u16, false, false)
    })
}
