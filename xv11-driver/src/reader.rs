use crate::decoder::parse_frame;
use crate::error::Xv11Error;
use crate::frame::FrameReader;
use std::io::Read;
use tracing::warn;
use xv11_data::Scan;

/// Single threaded pipeline from a byte stream to decoded scans.
///
/// Frames failing validation are dropped and counted, framing and
/// transport failures are handed to the caller.
pub struct ScanReader<R> {
    frames: FrameReader<R>,
    dropped_frames: usize,
}

impl<R: Read> ScanReader<R> {
    pub fn new(reader: R) -> ScanReader<R> {
        ScanReader {
            frames: FrameReader::new(reader),
            dropped_frames: 0,
        }
    }

    /// Number of complete frames rejected so far.
    pub fn dropped_frames(&self) -> usize {
        self.dropped_frames
    }

    pub fn into_inner(self) -> R {
        self.frames.into_inner()
    }
}

impl<R: Read> Iterator for ScanReader<R> {
    type Item = Result<Scan, Xv11Error>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let frame = match self.frames.next()? {
                Ok(frame) => frame,
                Err(e) => return Some(Err(e)),
            };
            match parse_frame(&frame) {
                Ok(scan) => return Some(Ok(scan)),
                Err(e) => {
                    self.dropped_frames += 1;
                    warn!(dropped_frames = self.dropped_frames, "{e}");
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_util::ramp_frame;
    use std::io::Cursor;

    #[test]
    fn test_scan_reader() {
        let mut corrupted = ramp_frame();
        corrupted[22 * 60 + 15] ^= 0x20;

        let mut stream = vec![0x55, 0xFA, 0x01];
        stream.extend(ramp_frame());
        stream.extend(corrupted);
        stream.extend(ramp_frame());

        let mut reader = ScanReader::new(Cursor::new(stream));
        let first = reader.next().unwrap().unwrap();
        assert_eq!(first.observations.len(), 360);
        assert_eq!(reader.dropped_frames(), 0);

        let second = reader.next().unwrap().unwrap();
        assert_eq!(reader.dropped_frames(), 1);
        assert_eq!(first, second);

        assert!(reader.next().is_none());
    }

    #[test]
    fn test_scan_reader_framing_failure() {
        let mut stream = ramp_frame();
        stream.extend(&ramp_frame()[..1000]);

        let mut reader = ScanReader::new(Cursor::new(stream));
        assert!(reader.next().unwrap().is_ok());
        assert!(matches!(
            reader.next(),
            Some(Err(Xv11Error::FramingFailure { received: 1000, .. }))
        ));
        assert!(reader.next().is_none());
        assert_eq!(reader.dropped_frames(), 0);
    }
}
