use std::io;
use thiserror::Error;

pub type Result<T, E = Xv11Error> = std::result::Result<T, E>;

#[derive(Debug, Error)]
pub enum Xv11Error {
    /// The byte stream failed or ended before a whole frame was collected.
    #[error("Frame interrupted after {received} of 1980 bytes.")]
    FramingFailure {
        received: usize,
        #[source]
        source: io::Error,
    },
    /// At least one packet of the frame failed validation, the frame is dropped.
    #[error("{failed_packets} of 90 packets failed checksum validation, frame dropped.")]
    ChecksumFailure { failed_packets: usize },
    #[error("Checksum mismatched. Calculated = {1:04X}, expected = {0:04X}.")]
    ChecksumMismatch(u16, u16),
    #[error("Packet must be 22 bytes. Actually {0} bytes.")]
    InvalidPacketLength(usize),
    #[error("Frame must be 1980 bytes. Actually {0} bytes.")]
    InvalidFrameLength(usize),
    #[error("Operation timed out")]
    TimeoutError(),
    #[error(transparent)]
    SerialError(#[from] serialport::Error),
    #[error(transparent)]
    IoError(#[from] io::Error),
}

impl Xv11Error {
    /// Whether framing can simply carry on after this error.
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            Xv11Error::ChecksumFailure { .. }
                | Xv11Error::ChecksumMismatch(..)
                | Xv11Error::TimeoutError()
        )
    }
}
