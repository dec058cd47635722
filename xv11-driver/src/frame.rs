use crate::constants::{FRAME_SIZE, PACKET_INDEX_BASE, PACKET_SIZE, PACKET_START_BYTE};
use crate::error::Xv11Error;
use std::io::{self, Read};
use tracing::trace;

/// One full rotation: 90 packets, 1980 bytes.
///
/// Only the packet of group 0 starts with `FA A0`, so that pair aligns the
/// whole rotation.
#[derive(Clone, PartialEq, Eq)]
pub struct Frame {
    bytes: Box<[u8; FRAME_SIZE]>,
}

impl Frame {
    pub fn from_bytes(bytes: &[u8]) -> Result<Frame, Xv11Error> {
        let bytes: Box<[u8; FRAME_SIZE]> = bytes
            .to_vec()
            .into_boxed_slice()
            .try_into()
            .map_err(|b: Box<[u8]>| Xv11Error::InvalidFrameLength(b.len()))?;
        Ok(Frame { bytes })
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes[..]
    }

    /// Packets in transmission order, the position being the group number.
    pub fn packets(&self) -> impl Iterator<Item = &[u8]> + '_ {
        self.bytes.chunks_exact(PACKET_SIZE)
    }
}

impl std::fmt::Debug for Frame {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Frame")
            .field("len", &self.bytes.len())
            .finish_non_exhaustive()
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AssemblerState {
    SeekingMark1,
    SeekingMark2,
    Accumulating,
}

/// Byte-at-a-time state machine cutting a stream into frames.
///
/// The frame buffer belongs to the assembler and is reused for every frame.
/// No validation happens here.
pub struct FrameAssembler {
    state: AssemblerState,
    buffer: Box<[u8; FRAME_SIZE]>,
    received: usize,
    skipped: usize,
}

impl Default for FrameAssembler {
    fn default() -> Self {
        FrameAssembler::new()
    }
}

impl FrameAssembler {
    pub fn new() -> FrameAssembler {
        FrameAssembler {
            state: AssemblerState::SeekingMark1,
            buffer: Box::new([0; FRAME_SIZE]),
            received: 0,
            skipped: 0,
        }
    }

    pub fn state(&self) -> AssemblerState {
        self.state
    }

    /// Number of bytes of the frame in progress.
    pub fn received(&self) -> usize {
        self.received
    }

    /// Abandons the frame in progress and goes back to marker scanning.
    pub fn reset(&mut self) {
        self.state = AssemblerState::SeekingMark1;
        self.received = 0;
    }

    pub fn push(&mut self, byte: u8) -> Option<Frame> {
        match self.state {
            AssemblerState::SeekingMark1 => {
                if byte == PACKET_START_BYTE {
                    self.state = AssemblerState::SeekingMark2;
                } else {
                    self.skipped += 1;
                }
                None
            }
            AssemblerState::SeekingMark2 => {
                if byte == PACKET_INDEX_BASE {
                    self.buffer[0] = PACKET_START_BYTE;
                    self.buffer[1] = PACKET_INDEX_BASE;
                    self.received = 2;
                    self.state = AssemblerState::Accumulating;
                    if self.skipped > 0 {
                        trace!(skipped = self.skipped, "Synchronized on frame start");
                        self.skipped = 0;
                    }
                } else {
                    // The rejected byte is dropped even if it is a start byte.
                    self.skipped += 2;
                    self.state = AssemblerState::SeekingMark1;
                }
                None
            }
            AssemblerState::Accumulating => {
                self.buffer[self.received] = byte;
                self.received += 1;
                if self.received < FRAME_SIZE {
                    return None;
                }
                self.reset();
                Some(Frame {
                    bytes: self.buffer.clone(),
                })
            }
        }
    }
}

/// Lazy, endless sequence of frames read one byte at a time.
///
/// A read failure or the end of the stream in the middle of a frame yields
/// [`Xv11Error::FramingFailure`] and the scan restarts from the next byte.
/// The end of the stream between frames ends the iteration.
pub struct FrameReader<R> {
    reader: R,
    assembler: FrameAssembler,
}

impl<R: Read> FrameReader<R> {
    pub fn new(reader: R) -> FrameReader<R> {
        FrameReader {
            reader,
            assembler: FrameAssembler::new(),
        }
    }

    pub fn into_inner(self) -> R {
        self.reader
    }

    fn framing_failure(&mut self, source: io::Error) -> Xv11Error {
        let received = self.assembler.received();
        self.assembler.reset();
        Xv11Error::FramingFailure { received, source }
    }
}

impl<R: Read> Iterator for FrameReader<R> {
    type Item = Result<Frame, Xv11Error>;

    fn next(&mut self) -> Option<Self::Item> {
        let mut byte = [0u8; 1];
        loop {
            let accumulating = self.assembler.state() == AssemblerState::Accumulating;
            match self.reader.read(&mut byte) {
                Ok(0) if accumulating => {
                    return Some(Err(
                        self.framing_failure(io::ErrorKind::UnexpectedEof.into())
                    ));
                }
                Ok(0) => return None,
                Ok(_) => {
                    if let Some(frame) = self.assembler.push(byte[0]) {
                        return Some(Ok(frame));
                    }
                }
                Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
                Err(e) if accumulating => return Some(Err(self.framing_failure(e))),
                // Waiting for the sensor is the transport's business.
                Err(e) if e.kind() == io::ErrorKind::TimedOut => continue,
                Err(e) => return Some(Err(Xv11Error::IoError(e))),
            }
        }
    }
}
