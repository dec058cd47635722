use crate::decoder::parse_frame;
use crate::frame::FrameAssembler;
use crate::serial::{flush, get_n_read, read};
use crate::time::sleep_ms;
use crossbeam_channel::{Receiver, Sender};
use crossbeam_utils::{Backoff, CachePadded};
use serialport::SerialPort;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::mpsc::TrySendError;
use std::sync::{mpsc, Arc};
use std::thread::JoinHandle;
use tracing::{debug, warn};
use xv11_data::Scan;

/// Struct that contains driver threads.
pub struct DriverThreads {
    pub(crate) reader_terminator_tx: Sender<bool>,
    pub(crate) parser_terminator_tx: Sender<bool>,
    pub(crate) reader_thread: Option<JoinHandle<()>>,
    pub(crate) receiver_thread: Option<JoinHandle<()>>,
    pub(crate) dropped_frames: Arc<CachePadded<AtomicUsize>>,
    pub(crate) skipped_scans: Arc<CachePadded<AtomicUsize>>,
}

impl DriverThreads {
    /// Number of complete frames rejected by checksum validation so far.
    pub fn dropped_frames(&self) -> usize {
        self.dropped_frames.load(Ordering::Relaxed)
    }

    /// Number of decoded scans discarded because the consumer fell behind.
    pub fn skipped_scans(&self) -> usize {
        self.skipped_scans.load(Ordering::Relaxed)
    }
}

pub(crate) fn read_device_signal(
    port: &mut Box<dyn SerialPort>,
    scan_data_tx: mpsc::SyncSender<Vec<u8>>,
    reader_terminator_rx: Receiver<bool>,
) {
    let backoff = Backoff::new();
    loop {
        if do_terminate(&reader_terminator_rx) {
            if let Err(e) = flush(port) {
                warn!("{e}");
            }
            debug!("Reader thread stopped");
            return;
        }

        let n_read: usize = get_n_read(port).unwrap_or(0);
        if n_read == 0 {
            if backoff.is_completed() {
                sleep_ms(1);
            } else {
                backoff.snooze();
            }
            continue;
        }
        backoff.reset();

        match read(port, n_read) {
            Ok(signal) => {
                if scan_data_tx.send(signal).is_err() {
                    debug!("Parser thread gone, reader thread stopped");
                    return;
                }
            }
            Err(e) => warn!("{e}"),
        }
    }
}

pub(crate) fn parse_packets(
    scan_data_rx: mpsc::Receiver<Vec<u8>>,
    parser_terminator_rx: Receiver<bool>,
    scan_tx: mpsc::SyncSender<Scan>,
    dropped_frames: Arc<CachePadded<AtomicUsize>>,
    skipped_scans: Arc<CachePadded<AtomicUsize>>,
) {
    let mut assembler = FrameAssembler::new();
    while !do_terminate(&parser_terminator_rx) {
        let data = match scan_data_rx.try_recv() {
            Ok(data) => data,
            Err(_) => {
                sleep_ms(10);
                continue;
            }
        };

        for frame in data.into_iter().filter_map(|byte| assembler.push(byte)) {
            match parse_frame(&frame) {
                // Never block here, the terminator must stay reachable.
                Ok(scan) => match scan_tx.try_send(scan) {
                    Ok(()) => {}
                    Err(TrySendError::Full(_)) => {
                        let skipped = skipped_scans.fetch_add(1, Ordering::Relaxed) + 1;
                        warn!(skipped_scans = skipped, "Scan channel full, scan discarded");
                    }
                    Err(TrySendError::Disconnected(_)) => {
                        debug!("Scan receiver dropped, parser thread stopped");
                        return;
                    }
                },
                Err(e) => {
                    let dropped = dropped_frames.fetch_add(1, Ordering::Relaxed) + 1;
                    warn!(dropped_frames = dropped, "{e}");
                }
            }
        }
    }
    debug!("Parser thread stopped");
}

pub(crate) fn do_terminate(terminator_rx: &Receiver<bool>) -> bool {
    terminator_rx.try_recv().unwrap_or(false)
}

/// Function to join driver threads.
/// This function is automatically called when `driver_threads` is dropped.
pub fn join(driver_threads: &mut DriverThreads) {
    // A send error means the thread is already gone.
    let _ = driver_threads.reader_terminator_tx.send(true);
    let _ = driver_threads.parser_terminator_tx.send(true);

    let threads = [
        ("reader", driver_threads.reader_thread.take()),
        ("parser", driver_threads.receiver_thread.take()),
    ];
    for (name, thread) in threads {
        if let Some(Err(_)) = thread.map(JoinHandle::join) {
            warn!(thread = name, "Driver thread panicked");
        }
    }
}

impl Drop for DriverThreads {
    fn drop(&mut self) {
        join(self);
    }
}
