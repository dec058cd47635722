use crate::config::DriverConfig;
use crate::constants::N_READ_TRIALS;
use crate::error::Xv11Error;
use crate::time::sleep_ms;
use serialport::{ClearBuffer, DataBits, FlowControl, Parity, SerialPort, StopBits};
use std::io::Read;
use tracing::debug;

/// Opens the port in 8N1 raw mode, the only mode the sensor speaks.
pub(crate) fn open_port(config: &DriverConfig) -> Result<Box<dyn SerialPort>, Xv11Error> {
    debug!(port = %config.port_name, baud_rate = config.baud_rate, "Opening serial port");
    let port = serialport::new(&config.port_name, config.baud_rate)
        .data_bits(DataBits::Eight)
        .parity(Parity::None)
        .stop_bits(StopBits::One)
        .flow_control(FlowControl::None)
        .timeout(config.read_timeout)
        .open()?;
    Ok(port)
}

pub(crate) fn get_n_read(port: &mut Box<dyn SerialPort>) -> Result<usize, Xv11Error> {
    Ok(port.bytes_to_read()? as usize)
}

/// Drops whatever the sensor sent before we started listening.
pub(crate) fn flush(port: &mut Box<dyn SerialPort>) -> Result<(), Xv11Error> {
    let stale = get_n_read(port).unwrap_or(0);
    port.clear(ClearBuffer::Input)?;
    if stale > 0 {
        debug!(stale, "Discarded stale input");
    }
    Ok(())
}

/// Reads exactly `data_size` bytes once they are all buffered, polling the
/// port `N_READ_TRIALS` times.
pub(crate) fn read(
    port: &mut Box<dyn SerialPort>,
    data_size: usize,
) -> Result<Vec<u8>, Xv11Error> {
    let mut data = vec![0; data_size];
    if data_size == 0 {
        return Ok(data);
    }
    for trial in 0..N_READ_TRIALS {
        if get_n_read(port)? >= data_size {
            port.read_exact(&mut data)?;
            return Ok(data);
        }
        if trial + 1 < N_READ_TRIALS {
            sleep_ms(10);
        }
    }
    Err(Xv11Error::TimeoutError())
}
